use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::sales::CheckoutRequest,
    error::{AppResult, ErrorBody},
    models::Sale,
    routes::body::JsonBody,
    services::sale_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ventas", get(list_sales))
        .route("/venta", post(checkout))
}

#[utoipa::path(
    get,
    path = "/ventas",
    responses(
        (status = 200, description = "Sale log", body = Vec<Sale>),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    ),
    tag = "Sales"
)]
pub async fn list_sales(State(state): State<AppState>) -> AppResult<Json<Vec<Sale>>> {
    let sales = sale_service::list_sales(&state).await?;
    Ok(Json(sales))
}

#[utoipa::path(
    post,
    path = "/venta",
    request_body = CheckoutRequest,
    responses(
        (status = 201, description = "Sale recorded", body = Sale),
        (status = 400, description = "Empty cart or invalid quantity", body = ErrorBody),
        (status = 404, description = "Unknown product in cart", body = ErrorBody),
        (status = 409, description = "Insufficient stock", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    ),
    tag = "Sales"
)]
pub async fn checkout(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CheckoutRequest>,
) -> AppResult<(StatusCode, Json<Sale>)> {
    let sale = sale_service::checkout(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(sale)))
}
