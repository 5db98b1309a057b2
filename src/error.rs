use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Producto no encontrado")]
    NotFound,

    #[error("Producto {0} no encontrado")]
    ProductNotFound(String),

    #[error("Stock insuficiente para {0}")]
    InsufficientStock(String),

    #[error("El carrito está vacío")]
    EmptyCart,

    /// `context` is the message shown to the caller; the store error is only logged.
    #[error("{context}")]
    StoreUnavailable {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InsufficientStock(_) => StatusCode::CONFLICT,
            AppError::EmptyCart => StatusCode::BAD_REQUEST,
            AppError::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Tags a store failure with the message the caller should see.
pub trait StoreContext<T> {
    fn or_unavailable(self, context: &'static str) -> AppResult<T>;
}

impl<T> StoreContext<T> for Result<T, StoreError> {
    fn or_unavailable(self, context: &'static str) -> AppResult<T> {
        self.map_err(|source| AppError::StoreUnavailable { context, source })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::StoreUnavailable { context, source } = &self {
            tracing::error!(error = ?source, "{context}");
        } else {
            tracing::debug!(status = %status, error = %self, "request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
