//! Error types for the bookstore server
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{FormRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Unified error type for the bookstore server.
///
/// Every variant is a recoverable, user-facing outcome. The display text is
/// the message shown to the shopper.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Title does not match any catalog entry
    #[error("Book not found!")]
    BookNotFound(String),

    /// Category has no books
    #[error("No books found in category \"{0}\"!")]
    CategoryNotFound(String),

    /// Title is not a line item of the cart
    #[error("\"{0}\" is not in your cart!")]
    NotInCart(String),

    /// Quantity input rejected at the form boundary
    #[error("{0}")]
    InvalidQuantity(String),

    /// Other malformed input
    #[error("{0}")]
    InvalidRequest(String),

    /// Checkout attempted with nothing in the cart
    #[error("Your cart is empty!")]
    EmptyCart,
}

impl StoreError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoreError::BookNotFound(_)
            | StoreError::CategoryNotFound(_)
            | StoreError::NotInCart(_) => StatusCode::NOT_FOUND,
            StoreError::InvalidQuantity(_) | StoreError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            StoreError::EmptyCart => StatusCode::CONFLICT,
        }
    }
}

// == Extractor Rejections ==
// Malformed bodies and query strings answer with the same JSON error shape.
impl From<FormRejection> for StoreError {
    fn from(rejection: FormRejection) -> Self {
        StoreError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for StoreError {
    fn from(rejection: QueryRejection) -> Self {
        StoreError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the bookstore server.
pub type Result<T> = std::result::Result<T, StoreError>;
