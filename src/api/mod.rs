//! API Module
//!
//! HTTP handlers, middleware and routing for the bookstore.
//!
//! # Endpoints
//! - `GET /` - All books
//! - `GET /category/:category_name` - Books in one category
//! - `GET /categories` - Book count per category
//! - `POST /add-to-cart`, `/remove-from-cart`, `/update-cart`, `/clear-cart` - Cart changes
//! - `GET /cart` - Cart contents
//! - `GET /checkout` - Order summary
//! - `GET /search?query=` - Title and category search
//! - `GET /metrics` - Request performance counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
