//! API Middleware
//!
//! Request timing and session cookie handling wrapped around the handlers.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};

use super::handlers::AppState;
use super::routes::route_name;
use crate::sessions::{SessionId, SESSION_COOKIE};

/// Counts the request, times the handler and records the result per route.
///
/// The request is counted before the handler runs, so `GET /metrics` sees
/// itself in `total_requests` but not in the timings.
pub async fn track_performance(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    state.metrics.write().await.record_request();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| route_name(p.as_str()))
        .unwrap_or("unknown");

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    state.metrics.write().await.record_response(route, elapsed);
    info!(
        "{} {} - {} - {:.2}ms",
        method,
        path,
        response.status().as_u16(),
        elapsed.as_secs_f64() * 1000.0
    );

    response
}

/// Resolves the caller's session from its cookie, opening a new one if needed.
///
/// The session id is handed to handlers as an `Extension<SessionId>`. A new
/// session is announced to the browser with a `Set-Cookie` header.
pub async fn attach_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let presented = session_from_cookies(req.headers());

    let (session, created) = {
        let mut sessions = state.sessions.write().await;
        match presented {
            Some(id) if sessions.contains(&id) => {
                sessions.touch(&id);
                (id, false)
            }
            _ => (sessions.create(), true),
        }
    };

    req.extensions_mut().insert(session);
    let mut response = next.run(req).await;

    if created {
        let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session);
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!("Could not encode session cookie: {}", e),
        }
    }

    response
}

/// Extracts a well-formed session id from the `Cookie` headers.
pub fn session_from_cookies(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.parse().ok())
}
