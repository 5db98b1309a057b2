use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::products::{
        CreateProductRequest, DeleteProductRequest, DeletedProduct, UpdateProductRequest,
    },
    error::{AppResult, ErrorBody},
    models::Product,
    routes::body::JsonBody,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/productos", get(list_products))
        .route(
            "/producto",
            post(create_product).put(update_product).delete(delete_product),
        )
}

#[utoipa::path(
    get,
    path = "/productos",
    responses(
        (status = 200, description = "Full catalog", body = Vec<Product>),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = product_service::list_products(&state).await?;
    Ok(Json(products))
}

#[utoipa::path(
    post,
    path = "/producto",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Created product", body = Product),
        (status = 400, description = "Missing nombre, precio or stock", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = product_service::create_product(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/producto",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Missing id", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateProductRequest>,
) -> AppResult<Json<Product>> {
    let product = product_service::update_product(&state, payload).await?;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/producto",
    request_body = DeleteProductRequest,
    responses(
        (status = 200, description = "Deleted product", body = DeletedProduct),
        (status = 400, description = "Missing id", body = ErrorBody),
        (status = 404, description = "Product not found", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<DeleteProductRequest>,
) -> AppResult<Json<DeletedProduct>> {
    let producto = product_service::delete_product(&state, payload).await?;
    Ok(Json(DeletedProduct {
        mensaje: "Producto eliminado".to_string(),
        producto,
    }))
}
