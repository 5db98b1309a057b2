use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, DeleteProductRequest, UpdateProductRequest},
    error::{AppError, AppResult, StoreContext},
    models::Product,
    state::AppState,
};

const MISSING_FIELDS: &str = "Faltan datos: nombre, precio y stock son obligatorios";
const MISSING_ID: &str = "El id es obligatorio";

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    state
        .store
        .products()
        .load()
        .await
        .or_unavailable("Error al leer productos")
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    let (Some(nombre), Some(precio), Some(stock)) = (payload.nombre, payload.precio, payload.stock)
    else {
        return Err(AppError::Validation(MISSING_FIELDS.into()));
    };
    if nombre.is_empty() {
        return Err(AppError::Validation(MISSING_FIELDS.into()));
    }

    const CONTEXT: &str = "Error al crear producto";
    let _guard = state.store.write_guard().await;
    let mut products = state.store.products().load().await.or_unavailable(CONTEXT)?;

    let product = Product {
        id: fresh_id(&products),
        nombre,
        precio,
        stock,
        categoria: payload.categoria,
        artesano: payload.artesano,
        descripcion: payload.descripcion,
        imagen: payload.imagen,
    };
    products.push(product.clone());

    state.store.products().save(&products).await.or_unavailable(CONTEXT)?;

    tracing::info!(product_id = %product.id, nombre = %product.nombre, "product created");
    Ok(product)
}

/// Applies only the fields present in `payload`. Stock and price are
/// stored as given, without the floor checkout enforces.
pub async fn update_product(
    state: &AppState,
    payload: UpdateProductRequest,
) -> AppResult<Product> {
    let id = required_id(payload.id)?;

    const CONTEXT: &str = "Error al actualizar producto";
    let _guard = state.store.write_guard().await;
    let mut products = state.store.products().load().await.or_unavailable(CONTEXT)?;

    let existing = products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(AppError::NotFound)?;

    if let Some(nombre) = payload.nombre {
        existing.nombre = nombre;
    }
    if let Some(precio) = payload.precio {
        existing.precio = precio;
    }
    if let Some(stock) = payload.stock {
        existing.stock = stock;
    }
    if let Some(categoria) = payload.categoria {
        existing.categoria = Some(categoria);
    }
    if let Some(artesano) = payload.artesano {
        existing.artesano = Some(artesano);
    }
    if let Some(descripcion) = payload.descripcion {
        existing.descripcion = Some(descripcion);
    }
    if let Some(imagen) = payload.imagen {
        existing.imagen = Some(imagen);
    }
    let product = existing.clone();

    state.store.products().save(&products).await.or_unavailable(CONTEXT)?;

    tracing::info!(product_id = %product.id, stock = product.stock, "product updated");
    Ok(product)
}

pub async fn delete_product(
    state: &AppState,
    payload: DeleteProductRequest,
) -> AppResult<Product> {
    let id = required_id(payload.id)?;

    const CONTEXT: &str = "Error al eliminar producto";
    let _guard = state.store.write_guard().await;
    let mut products = state.store.products().load().await.or_unavailable(CONTEXT)?;

    let index = products
        .iter()
        .position(|p| p.id == id)
        .ok_or(AppError::NotFound)?;
    let removed = products.remove(index);

    state.store.products().save(&products).await.or_unavailable(CONTEXT)?;

    tracing::info!(product_id = %removed.id, "product deleted");
    Ok(removed)
}

fn required_id(id: Option<String>) -> AppResult<String> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(AppError::Validation(MISSING_ID.into())),
    }
}

fn fresh_id(existing: &[Product]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if existing.iter().all(|p| p.id != id) {
            return id;
        }
    }
}
