//! Client-side cart state. Lives in the presentation layer's session and is
//! only ever sent to the server as a list of `{id, cantidad}` lines.

use crate::{
    dto::sales::CheckoutRequest,
    models::{Product, SaleLine},
};

/// Category value that disables filtering.
pub const ALL_CATEGORIES: &str = "todos";

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub id: String,
    pub nombre: String,
    /// Display only. The server prices the sale from its own catalog.
    pub precio: f64,
    pub cantidad: i64,
}

#[derive(Debug, Default, Clone)]
pub struct CartSession {
    lines: Vec<CartLine>,
}

impl CartSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `product`. Returns false when the cart already
    /// holds every unit in stock.
    pub fn add(&mut self, product: &Product) -> bool {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            if line.cantidad >= product.stock {
                return false;
            }
            line.cantidad += 1;
            return true;
        }

        if product.stock < 1 {
            return false;
        }
        self.lines.push(CartLine {
            id: product.id.clone(),
            nombre: product.nombre.clone(),
            precio: product.precio,
            cantidad: 1,
        });
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Units across all lines, as shown on the navbar badge.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.cantidad).sum()
    }

    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .map(|l| l.precio * l.cantidad as f64)
            .sum()
    }

    pub fn checkout_request(&self) -> CheckoutRequest {
        CheckoutRequest {
            carrito: Some(
                self.lines
                    .iter()
                    .map(|l| SaleLine {
                        id: l.id.clone(),
                        cantidad: l.cantidad,
                    })
                    .collect(),
            ),
        }
    }
}

pub fn filter_by_category<'a>(products: &'a [Product], categoria: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| categoria == ALL_CATEGORIES || p.categoria.as_deref() == Some(categoria))
        .collect()
}
