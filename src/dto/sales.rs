use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::SaleLine;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub carrito: Option<Vec<SaleLine>>,
}
