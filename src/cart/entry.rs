//! Cart Entry Module
//!
//! One line item of a cart and the quantity type it carries.

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::{Book, Money};

// == Quantity ==
/// A positive item count. Zero and negative counts are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single item.
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// Returns `None` for zero.
    pub fn new(n: u32) -> Option<Self> {
        NonZeroU32::new(n).map(Self)
    }

    /// Returns the count as a plain integer.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Adds two quantities, `None` if the sum exceeds `u32::MAX`.
    pub fn checked_add(self, other: Quantity) -> Option<Quantity> {
        self.0.checked_add(other.get()).map(Quantity)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// == Cart Entry ==
/// A book reference and how many copies of it are in the cart.
#[derive(Debug, Clone)]
pub struct CartEntry {
    /// The catalog record
    pub book: Arc<Book>,
    /// Number of copies, always at least one
    pub quantity: Quantity,
}

impl CartEntry {
    // == Constructor ==
    pub fn new(book: Arc<Book>, quantity: Quantity) -> Self {
        Self { book, quantity }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.book.price * self.quantity.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_rejects_zero() {
        assert!(Quantity::new(0).is_none());
        assert_eq!(Quantity::new(3).unwrap().get(), 3);
        assert_eq!(Quantity::ONE.get(), 1);
    }

    #[test]
    fn test_quantity_checked_add() {
        let two = Quantity::new(2).unwrap();
        assert_eq!(two.checked_add(Quantity::ONE).unwrap().get(), 3);

        let max = Quantity::new(u32::MAX).unwrap();
        assert!(max.checked_add(Quantity::ONE).is_none());
    }

    #[test]
    fn test_line_total() {
        let book = Arc::new(Book::new("1984", "Dystopia", Money::from_cents(899), "1984.jpg"));
        let entry = CartEntry::new(book, Quantity::new(3).unwrap());
        assert_eq!(entry.line_total(), Money::from_cents(2697));
    }
}
