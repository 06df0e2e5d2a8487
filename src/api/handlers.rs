//! API Handlers
//!
//! HTTP request handlers for each bookstore endpoint.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    Extension, Form, Json,
};
use tokio::sync::RwLock;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::metrics::{MetricsCollector, MetricsSnapshot};
use crate::models::{
    AddToCartForm, BooksResponse, CartResponse, CartSummary, CategoriesResponse,
    CheckoutResponse, HealthResponse, RemoveFromCartForm, SearchParams, UpdateCartForm,
};
use crate::sessions::{SessionId, SessionStore};

/// Application state shared across all handlers.
///
/// The catalog is immutable; sessions and metrics are behind
/// `Arc<RwLock<>>` for thread-safe access.
#[derive(Clone)]
pub struct AppState {
    /// Fixed book catalog
    pub catalog: Arc<Catalog>,
    /// Per-session carts
    pub sessions: Arc<RwLock<SessionStore>>,
    /// Request counters
    pub metrics: Arc<RwLock<MetricsCollector>>,
    /// Process start, for uptime
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new AppState around the given catalog and session store.
    pub fn new(catalog: Catalog, sessions: SessionStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(RwLock::new(sessions)),
            metrics: Arc::new(RwLock::new(MetricsCollector::new())),
            started_at: Instant::now(),
        }
    }

    /// Creates a new AppState from configuration with the seeded catalog.
    pub fn from_config(config: &Config) -> Self {
        let sessions = SessionStore::new(Duration::from_secs(config.session_ttl));
        Self::new(Catalog::seeded(), sessions)
    }

    async fn cart_summary(&self, session: &SessionId) -> CartSummary {
        let sessions = self.sessions.read().await;
        sessions
            .cart(session)
            .map(CartSummary::from)
            .unwrap_or_default()
    }
}

/// Handler for GET /
///
/// Lists every book with the shopper's cart.
pub async fn index_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<BooksResponse> {
    Json(BooksResponse {
        books: state.catalog.all().to_vec(),
        categories: state.catalog.list_categories(),
        current_category: None,
        search_query: None,
        message: None,
        cart: state.cart_summary(&session).await,
    })
}

/// Handler for GET /category/:category_name
///
/// Lists the books of one category, matched case-insensitively.
pub async fn category_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(category_name): Path<String>,
) -> Result<Json<BooksResponse>> {
    let books = state.catalog.find_by_category(Some(&category_name));
    if books.is_empty() {
        return Err(StoreError::CategoryNotFound(category_name));
    }

    Ok(Json(BooksResponse {
        books,
        categories: state.catalog.list_categories(),
        current_category: Some(category_name),
        search_query: None,
        message: None,
        cart: state.cart_summary(&session).await,
    }))
}

/// Handler for GET /categories
pub async fn categories_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.category_counts(),
        cart: state.cart_summary(&session).await,
    })
}

/// Handler for POST /add-to-cart
///
/// Adds the requested number of copies, merging with any existing line item.
pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    form: std::result::Result<Form<AddToCartForm>, FormRejection>,
) -> Result<Json<CartResponse>> {
    let Form(form) = form?;
    let cmd = form.parse()?;
    let book = state
        .catalog
        .find_by_title(&cmd.title)
        .ok_or_else(|| StoreError::BookNotFound(cmd.title.clone()))?;

    let mut sessions = state.sessions.write().await;
    let cart = sessions.cart_mut(session);
    cart.add(book, cmd.quantity)?;
    info!("Session {} added {} x \"{}\"", session, cmd.quantity, cmd.title);

    Ok(Json(CartResponse::with_message(
        format!("Added {} \"{}\" to cart!", cmd.quantity, cmd.title),
        cart,
    )))
}

/// Handler for POST /remove-from-cart
///
/// Removing a title that is not in the cart is not an error.
pub async fn remove_from_cart_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    form: std::result::Result<Form<RemoveFromCartForm>, FormRejection>,
) -> Result<Json<CartResponse>> {
    let Form(form) = form?;
    let title = form.parse()?;

    let mut sessions = state.sessions.write().await;
    let cart = sessions.cart_mut(session);
    cart.remove(&title);

    Ok(Json(CartResponse::with_message(
        format!("Removed \"{}\" from cart!", title),
        cart,
    )))
}

/// Handler for POST /update-cart
///
/// A quantity of zero or below removes the line item.
pub async fn update_cart_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    form: std::result::Result<Form<UpdateCartForm>, FormRejection>,
) -> Result<Json<CartResponse>> {
    let Form(form) = form?;
    let cmd = form.parse()?;

    let mut sessions = state.sessions.write().await;
    let cart = sessions.cart_mut(session);
    cart.set_quantity(&cmd.title, cmd.quantity)?;

    let message = if cmd.quantity <= 0 {
        format!("Removed \"{}\" from cart!", cmd.title)
    } else {
        format!("Updated \"{}\" quantity to {}!", cmd.title, cmd.quantity)
    };

    Ok(Json(CartResponse::with_message(message, cart)))
}

/// Handler for GET /cart
pub async fn view_cart_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<CartResponse> {
    Json(CartResponse {
        message: None,
        cart: state.cart_summary(&session).await,
    })
}

/// Handler for POST /clear-cart
pub async fn clear_cart_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<CartResponse> {
    let mut sessions = state.sessions.write().await;
    let cart = sessions.cart_mut(session);
    cart.clear();

    Json(CartResponse::with_message("Cart cleared!", cart))
}

/// Handler for GET /checkout
///
/// Returns the order summary, or `EmptyCart` when there is nothing to buy.
pub async fn checkout_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Result<Json<CheckoutResponse>> {
    let cart = state.cart_summary(&session).await;
    if cart.is_empty {
        return Err(StoreError::EmptyCart);
    }

    Ok(Json(CheckoutResponse {
        total_price: cart.total_price,
        cart,
    }))
}

/// Handler for GET /search?query=
///
/// Case-insensitive substring search over titles and categories.
pub async fn search_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<BooksResponse>> {
    let Query(params) = params?;
    let term = params.term()?;
    let books = state.catalog.search(term);

    let message = if books.is_empty() {
        format!("No books found for \"{}\"", term)
    } else {
        format!("Found {} book(s) for \"{}\"", books.len(), term)
    };

    Ok(Json(BooksResponse {
        books,
        categories: state.catalog.list_categories(),
        current_category: None,
        search_query: Some(term.to_string()),
        message: Some(message),
        cart: state.cart_summary(&session).await,
    }))
}

/// Handler for GET /metrics
///
/// Returns the current request metrics snapshot.
pub async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    let metrics = state.metrics.read().await;
    Json(metrics.snapshot())
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(
        state.started_at.elapsed().as_secs_f64(),
    ))
}
