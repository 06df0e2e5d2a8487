//! Catalog Store Module
//!
//! Read-only lookups over the fixed list of books.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::{Book, Money};

// == Catalog ==
/// The fixed set of purchasable books.
///
/// Books are handed out as `Arc<Book>` so carts can hold references to the
/// catalog records without copying them.
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Arc<Book>>,
}

impl Catalog {
    // == Constructor ==
    /// Creates a catalog from an arbitrary list of books.
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books.into_iter().map(Arc::new).collect(),
        }
    }

    /// The four books the store ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Book::new(
                "The Great Gatsby",
                "Fiction",
                Money::from_cents(1099),
                "images/books/the_great_gatsby.jpg",
            ),
            Book::new("1984", "Dystopia", Money::from_cents(899), "images/books/1984.jpg"),
            Book::new(
                "I Ching",
                "Traditional",
                Money::from_cents(1899),
                "images/books/I-Ching.jpg",
            ),
            Book::new(
                "Moby Dick",
                "Adventure",
                Money::from_cents(1249),
                "images/books/moby_dick.jpg",
            ),
        ])
    }

    /// All books in catalog order.
    pub fn all(&self) -> &[Arc<Book>] {
        &self.books
    }

    /// Number of books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the catalog has no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // == Find By Title ==
    /// Exact title lookup. Absence is not an error.
    pub fn find_by_title(&self, title: &str) -> Option<Arc<Book>> {
        self.books.iter().find(|b| b.title == title).cloned()
    }

    // == Find By Category ==
    /// Case-insensitive category filter.
    ///
    /// `None` or an empty string returns the whole catalog.
    pub fn find_by_category(&self, category: Option<&str>) -> Vec<Arc<Book>> {
        match category {
            None | Some("") => self.books.clone(),
            Some(category) => self
                .books
                .iter()
                .filter(|b| b.in_category(category))
                .cloned()
                .collect(),
        }
    }

    // == List Categories ==
    /// Distinct category names.
    pub fn list_categories(&self) -> BTreeSet<String> {
        self.books.iter().map(|b| b.category.clone()).collect()
    }

    /// Number of books in each category.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for book in &self.books {
            *counts.entry(book.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    // == Search ==
    /// Case-insensitive substring search over title and category.
    pub fn search(&self, query: &str) -> Vec<Arc<Book>> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| b.matches(&needle))
            .cloned()
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn titles(books: &[Arc<Book>]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 4);
        assert_eq!(
            titles(catalog.all()),
            vec!["The Great Gatsby", "1984", "I Ching", "Moby Dick"]
        );
    }

    #[test]
    fn test_find_by_title_found() {
        let catalog = Catalog::seeded();
        let book = catalog.find_by_title("1984").unwrap();
        assert_eq!(book.category, "Dystopia");
        assert_eq!(book.price, Money::from_cents(899));
    }

    #[test]
    fn test_find_by_title_is_exact() {
        let catalog = Catalog::seeded();
        assert!(catalog.find_by_title("Nonexistent Book").is_none());
        assert!(catalog.find_by_title("the great gatsby").is_none());
        assert!(catalog.find_by_title("").is_none());
    }

    #[test]
    fn test_find_by_category_case_insensitive() {
        let catalog = Catalog::seeded();
        let lower = catalog.find_by_category(Some("fiction"));
        let upper = catalog.find_by_category(Some("FICTION"));
        assert_eq!(titles(&lower), vec!["The Great Gatsby"]);
        assert_eq!(titles(&lower), titles(&upper));
    }

    #[test]
    fn test_find_by_category_blank_returns_all() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.find_by_category(None).len(), 4);
        assert_eq!(catalog.find_by_category(Some("")).len(), 4);
    }

    #[test]
    fn test_find_by_category_unknown() {
        let catalog = Catalog::seeded();
        assert!(catalog.find_by_category(Some("Poetry")).is_empty());
    }

    #[test]
    fn test_list_categories() {
        let catalog = Catalog::seeded();
        let categories = catalog.list_categories();
        assert_eq!(categories.len(), 4);
        for c in ["Fiction", "Dystopia", "Traditional", "Adventure"] {
            assert!(categories.contains(c));
        }
    }

    #[test]
    fn test_category_counts_with_duplicates() {
        let catalog = Catalog::new(vec![
            Book::new("A", "Fiction", Money::from_cents(100), "a.jpg"),
            Book::new("B", "Fiction", Money::from_cents(200), "b.jpg"),
            Book::new("C", "Poetry", Money::from_cents(300), "c.jpg"),
        ]);
        let counts = catalog.category_counts();
        assert_eq!(counts["Fiction"], 2);
        assert_eq!(counts["Poetry"], 1);
        assert_eq!(catalog.list_categories().len(), 2);
    }

    #[test]
    fn test_search_title_and_category() {
        let catalog = Catalog::seeded();
        assert_eq!(titles(&catalog.search("MOBY")), vec!["Moby Dick"]);
        assert_eq!(titles(&catalog.search("dysto")), vec!["1984"]);
        assert!(catalog.search("cookbook").is_empty());
    }
}
