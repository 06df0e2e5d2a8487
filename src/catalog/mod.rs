//! Catalog Module
//!
//! The fixed in-memory list of books and its lookup helpers.

mod book;
mod money;
mod store;

pub use book::Book;
pub use money::Money;
pub use store::Catalog;
