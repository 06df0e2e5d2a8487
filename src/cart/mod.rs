//! Cart Module
//!
//! Per-session shopping cart: add, remove, update, clear and totals.

mod entry;
mod store;


pub use entry::{CartEntry, Quantity};
pub use store::Cart;
