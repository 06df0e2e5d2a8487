//! Response DTOs for the bookstore API
//!
//! Defines the structure of outgoing HTTP response bodies. Each page
//! response carries the shopper's cart summary, the way every rendered page
//! of the store shows the cart.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use serde::Serialize;

use crate::cart::{Cart, CartEntry, Quantity};
use crate::catalog::{Book, Money};

// == Cart Views ==
/// One line item as shown to the shopper.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub title: String,
    pub category: String,
    pub price: Money,
    pub image: String,
    pub quantity: Quantity,
    pub line_total: Money,
}

impl From<&CartEntry> for CartItemView {
    fn from(entry: &CartEntry) -> Self {
        Self {
            title: entry.book.title.clone(),
            category: entry.book.category.clone(),
            price: entry.book.price,
            image: entry.book.image.clone(),
            quantity: entry.quantity,
            line_total: entry.line_total(),
        }
    }
}

/// Cart contents and totals.
#[derive(Debug, Clone, Serialize)]
pub struct CartSummary {
    /// Line items sorted by title
    pub items: Vec<CartItemView>,
    pub total_items: u64,
    pub total_price: Money,
    pub is_empty: bool,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        let mut items: Vec<CartItemView> = cart.entries().map(CartItemView::from).collect();
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Self {
            items,
            total_items: cart.total_items(),
            total_price: cart.total_price(),
            is_empty: cart.is_empty(),
        }
    }
}

impl Default for CartSummary {
    fn default() -> Self {
        Self::from(&Cart::new())
    }
}

// == Pages ==
/// Response body for `GET /`, `GET /category/:name` and `GET /search`.
#[derive(Debug, Clone, Serialize)]
pub struct BooksResponse {
    pub books: Vec<Arc<Book>>,
    pub categories: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub cart: CartSummary,
}

/// Response body for `GET /categories`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    /// Number of books per category
    pub categories: BTreeMap<String, usize>,
    pub cart: CartSummary,
}

/// Response body for cart mutations and `GET /cart`.
#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub cart: CartSummary,
}

impl CartResponse {
    /// Creates a response carrying a confirmation message.
    pub fn with_message(message: impl Into<String>, cart: &Cart) -> Self {
        Self {
            message: Some(message.into()),
            cart: cart.into(),
        }
    }
}

/// Response body for `GET /checkout`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub cart: CartSummary,
    pub total_price: Money,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current time in Unix seconds
    pub timestamp: f64,
    /// Seconds since the server started
    pub uptime: f64,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(uptime_secs: f64) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().timestamp_millis() as f64 / 1000.0,
            uptime: uptime_secs,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
