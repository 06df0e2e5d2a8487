//! API Routes
//!
//! Configures the Axum router with all bookstore endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_to_cart_handler, categories_handler, category_handler, checkout_handler,
    clear_cart_handler, health_handler, index_handler, metrics_handler,
    remove_from_cart_handler, search_handler, update_cart_handler, view_cart_handler, AppState,
};
use super::middleware::{attach_session, track_performance};

/// Route name reported in the metrics for a matched path.
pub fn route_name(matched_path: &str) -> &'static str {
    match matched_path {
        "/" => "index",
        "/category/:category_name" => "browse_by_category",
        "/categories" => "list_categories",
        "/add-to-cart" => "add_to_cart",
        "/remove-from-cart" => "remove_from_cart",
        "/update-cart" => "update_cart",
        "/cart" => "view_cart",
        "/clear-cart" => "clear_cart",
        "/checkout" => "checkout",
        "/search" => "search_books",
        "/metrics" => "performance_metrics",
        "/health" => "health_check",
        _ => "unknown",
    }
}

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - Sessions: store routes get a session cookie; `/metrics` and `/health`
///   do not
/// - Performance: every request is counted and timed per route
/// - CORS: Allows any origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let store = Router::new()
        .route("/", get(index_handler))
        .route("/category/:category_name", get(category_handler))
        .route("/categories", get(categories_handler))
        .route("/add-to-cart", post(add_to_cart_handler))
        .route("/remove-from-cart", post(remove_from_cart_handler))
        .route("/update-cart", post(update_cart_handler))
        .route("/cart", get(view_cart_handler))
        .route("/clear-cart", post(clear_cart_handler))
        .route("/checkout", get(checkout_handler))
        .route("/search", get(search_handler))
        .layer(middleware::from_fn_with_state(state.clone(), attach_session));

    let ops = Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler));

    Router::new()
        .merge(store)
        .merge(ops)
        .layer(middleware::from_fn_with_state(state.clone(), track_performance))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
