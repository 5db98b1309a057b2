use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    dto::sales::CheckoutRequest,
    error::{AppError, AppResult, StoreContext},
    models::{Product, Sale, SaleLine},
    state::AppState,
};

const CHECKOUT_FAILED: &str = "Error al registrar venta";

pub async fn list_sales(state: &AppState) -> AppResult<Vec<Sale>> {
    state
        .store
        .sales()
        .load()
        .await
        .or_unavailable("Error al leer ventas")
}

/// Turns a cart into stock deductions plus one sale record. Either every
/// line is applied and the sale is logged, or nothing is written.
pub async fn checkout(state: &AppState, payload: CheckoutRequest) -> AppResult<Sale> {
    let carrito = match payload.carrito {
        Some(lines) if !lines.is_empty() => lines,
        _ => return Err(AppError::EmptyCart),
    };
    if carrito.iter().any(|line| line.cantidad < 1) {
        return Err(AppError::Validation(
            "La cantidad de cada producto debe ser mayor a 0".into(),
        ));
    }

    let store = &state.store;
    let _guard = store.write_guard().await;

    let mut products = store.products().load().await.or_unavailable(CHECKOUT_FAILED)?;
    validate_cart(&products, &carrito)?;

    let mut sales = store.sales().load().await.or_unavailable(CHECKOUT_FAILED)?;
    let snapshot = products.clone();
    let total = commit_cart(&mut products, &carrito);

    let sale = Sale {
        id: Uuid::new_v4().to_string(),
        fecha: Utc::now(),
        carrito,
        total,
    };
    sales.push(sale.clone());

    store.products().save(&products).await.or_unavailable(CHECKOUT_FAILED)?;
    if let Err(err) = store.sales().save(&sales).await {
        // A deduction must not outlive a sale that was never recorded.
        if let Err(restore_err) = store.products().save(&snapshot).await {
            tracing::error!(error = ?restore_err, "failed to restore stock after sale log write failure");
        }
        return Err(AppError::StoreUnavailable {
            context: CHECKOUT_FAILED,
            source: err,
        });
    }

    tracing::info!(
        sale_id = %sale.id,
        lines = sale.carrito.len(),
        total = sale.total,
        "sale recorded"
    );
    Ok(sale)
}

/// First failing line wins. Repeated lines for one product are checked
/// against their combined quantity.
fn validate_cart(products: &[Product], cart: &[SaleLine]) -> AppResult<()> {
    let mut remaining: HashMap<&str, i64> = HashMap::new();
    for line in cart {
        let product = products
            .iter()
            .find(|p| p.id == line.id)
            .ok_or_else(|| AppError::ProductNotFound(line.id.clone()))?;

        let left = remaining
            .entry(product.id.as_str())
            .or_insert(product.stock);
        if line.cantidad > *left {
            return Err(AppError::InsufficientStock(product.nombre.clone()));
        }
        *left -= line.cantidad;
    }
    Ok(())
}

/// Deducts stock and prices every line from the stored product, never
/// from the client. Expects a cart that passed `validate_cart`.
fn commit_cart(products: &mut [Product], cart: &[SaleLine]) -> f64 {
    let mut total = 0.0;
    for line in cart {
        if let Some(product) = products.iter_mut().find(|p| p.id == line.id) {
            product.stock -= line.cantidad;
            total += product.precio * line.cantidad as f64;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, nombre: &str, precio: f64, stock: i64) -> Product {
        Product {
            id: id.into(),
            nombre: nombre.into(),
            precio,
            stock,
            categoria: None,
            artesano: None,
            descripcion: None,
            imagen: None,
        }
    }

    fn line(id: &str, cantidad: i64) -> SaleLine {
        SaleLine {
            id: id.into(),
            cantidad,
        }
    }

    #[test]
    fn missing_product_wins_over_later_shortage() {
        let products = vec![product("p1", "Silla", 100.0, 0)];
        let cart = vec![line("zz", 1), line("p1", 5)];

        let err = validate_cart(&products, &cart).unwrap_err();

        assert!(matches!(err, AppError::ProductNotFound(id) if id == "zz"));
    }

    #[test]
    fn first_short_line_is_reported() {
        let products = vec![
            product("p1", "Silla", 100.0, 1),
            product("p2", "Mesa", 100.0, 1),
        ];
        let cart = vec![line("p1", 2), line("p2", 2)];

        let err = validate_cart(&products, &cart).unwrap_err();

        assert!(matches!(err, AppError::InsufficientStock(name) if name == "Silla"));
    }

    #[test]
    fn repeated_lines_are_checked_cumulatively() {
        let products = vec![product("p1", "Silla", 100.0, 3)];

        assert!(validate_cart(&products, &[line("p1", 2), line("p1", 1)]).is_ok());
        let err = validate_cart(&products, &[line("p1", 2), line("p1", 2)]).unwrap_err();
        assert!(matches!(err, AppError::InsufficientStock(_)));
    }

    #[test]
    fn commit_uses_stored_prices() {
        let mut products = vec![
            product("p1", "Silla", 10000.0, 2),
            product("p2", "Cuenco", 2500.5, 10),
        ];

        let total = commit_cart(&mut products, &[line("p1", 2), line("p2", 2)]);

        assert_eq!(total, 25001.0);
        assert_eq!(products[0].stock, 0);
        assert_eq!(products[1].stock, 8);
    }
}
