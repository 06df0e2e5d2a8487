//! Sessions Module
//!
//! One cart per browser session, identified by a cookie.

mod session;
mod store;

pub use session::{Session, SessionId};
pub use store::SessionStore;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "bookstore_session";
