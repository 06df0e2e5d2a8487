//! Book Module
//!
//! Defines the immutable catalog record.

use serde::Serialize;

use super::Money;

// == Book ==
/// A purchasable book. The title is its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    /// Unique title
    pub title: String,
    /// Category name as displayed
    pub category: String,
    /// Unit price
    pub price: Money,
    /// Relative path of the cover image
    pub image: String,
}

impl Book {
    /// Creates a new book record.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            price,
            image: image.into(),
        }
    }

    /// Case-insensitive category comparison.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive substring match on title or category.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}
