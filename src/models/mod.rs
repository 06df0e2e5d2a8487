//! Request and Response models for the bookstore API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! parsing form bodies and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{
    AddToCart, AddToCartForm, RemoveFromCartForm, SearchParams, UpdateCart, UpdateCartForm,
};
pub use responses::{
    BooksResponse, CartItemView, CartResponse, CartSummary, CategoriesResponse, CheckoutResponse,
    ErrorResponse, HealthResponse,
};
