//! Cart Store Module
//!
//! Title-keyed line items with merge-on-add semantics.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::cart::{CartEntry, Quantity};
use crate::catalog::{Book, Money};
use crate::error::{Result, StoreError};

// == Cart ==
/// A shopping cart owned by one session.
///
/// Every stored entry has a quantity of at least one; setting a quantity to
/// zero or below removes the entry instead.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    /// Line items keyed by book title
    entries: HashMap<String, CartEntry>,
}

impl Cart {
    // == Constructor ==
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Adds copies of a book, merging with an existing line item.
    ///
    /// Returns the resulting quantity for that title. A merge that would
    /// exceed `u32::MAX` is rejected and leaves the cart unchanged.
    pub fn add(&mut self, book: Arc<Book>, quantity: Quantity) -> Result<Quantity> {
        let merged = match self.entries.get_mut(&book.title) {
            Some(entry) => {
                entry.quantity = entry.quantity.checked_add(quantity).ok_or_else(|| {
                    StoreError::InvalidQuantity("Quantity is too large!".to_string())
                })?;
                entry.quantity
            }
            None => {
                self.entries
                    .insert(book.title.clone(), CartEntry::new(book.clone(), quantity));
                quantity
            }
        };

        debug!("Cart add: {} x{} (now {})", book.title, quantity, merged);
        Ok(merged)
    }

    // == Remove ==
    /// Removes a line item. Absent titles are ignored.
    ///
    /// Returns true if an entry was removed.
    pub fn remove(&mut self, title: &str) -> bool {
        let removed = self.entries.remove(title).is_some();
        if removed {
            debug!("Cart remove: {}", title);
        }
        removed
    }

    // == Set Quantity ==
    /// Overwrites the quantity of an existing line item.
    ///
    /// A quantity of zero or below removes the entry. Titles not in the cart
    /// are reported as `NotInCart` and leave the cart unchanged.
    pub fn set_quantity(&mut self, title: &str, quantity: i64) -> Result<()> {
        if !self.entries.contains_key(title) {
            return Err(StoreError::NotInCart(title.to_string()));
        }

        if quantity <= 0 {
            self.remove(title);
            return Ok(());
        }

        let quantity = u32::try_from(quantity)
            .ok()
            .and_then(Quantity::new)
            .ok_or_else(|| StoreError::InvalidQuantity("Quantity is too large!".to_string()))?;
        if let Some(entry) = self.entries.get_mut(title) {
            entry.quantity = quantity;
        }
        debug!("Cart update: {} = {}", title, quantity);
        Ok(())
    }

    // == Clear ==
    /// Removes every line item.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Looks up a line item by title.
    #[cfg(test)]
    pub fn get(&self, title: &str) -> Option<&CartEntry> {
        self.entries.get(title)
    }

    /// Iterates over line items in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.entries.values()
    }

    /// Number of distinct titles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Totals ==
    /// Sum of price times quantity over all entries.
    pub fn total_price(&self) -> Money {
        self.entries.values().map(CartEntry::line_total).sum()
    }

    /// Sum of quantities over all entries.
    pub fn total_items(&self) -> u64 {
        self.entries
            .values()
            .map(|e| u64::from(e.quantity.get()))
            .sum()
    }

    /// Returns true if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
