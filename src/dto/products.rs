use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

/// Fields are optional so that a missing one surfaces as a validation
/// error instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub nombre: Option<String>,
    pub precio: Option<f64>,
    pub stock: Option<i64>,
    pub categoria: Option<String>,
    pub artesano: Option<String>,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub id: Option<String>,
    pub nombre: Option<String>,
    pub precio: Option<f64>,
    pub stock: Option<i64>,
    pub categoria: Option<String>,
    pub artesano: Option<String>,
    pub descripcion: Option<String>,
    pub imagen: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DeleteProductRequest {
    pub id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedProduct {
    pub mensaje: String,
    pub producto: Product,
}
