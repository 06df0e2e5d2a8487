//! Bookstore - A small online bookstore demo server
//!
//! Serves a fixed catalog of books, a session-scoped shopping cart and
//! in-process request metrics over HTTP.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod sessions;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
