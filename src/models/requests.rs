//! Request DTOs for the bookstore API
//!
//! Form bodies arrive as raw strings and are parsed here into typed commands
//! before they reach the cart.

use serde::Deserialize;

use crate::cart::Quantity;
use crate::error::{Result, StoreError};

const MSG_TITLE_REQUIRED: &str = "Book title is required!";
const MSG_QUANTITY_REQUIRED: &str = "Quantity is required!";
const MSG_WHOLE_NUMBER: &str = "Quantity must be a whole number!";
const MSG_INVALID_QUANTITY: &str = "Invalid quantity! Please enter a valid whole number.";
const MSG_AT_LEAST_ONE: &str = "Quantity must be at least 1!";
const MSG_TOO_LARGE: &str = "Quantity is too large!";

// == Quantity Parsing ==
/// Parses a form quantity as a signed whole number.
///
/// Rejects blank, decimal and non-numeric input. Nothing is coerced.
pub fn parse_whole_number(raw: &str) -> Result<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(StoreError::InvalidQuantity(MSG_QUANTITY_REQUIRED.to_string()));
    }
    if raw.contains('.') {
        return Err(StoreError::InvalidQuantity(MSG_WHOLE_NUMBER.to_string()));
    }
    raw.parse::<i64>()
        .map_err(|_| StoreError::InvalidQuantity(MSG_INVALID_QUANTITY.to_string()))
}

/// Parses a form quantity that must be a positive count.
pub fn parse_quantity(raw: &str) -> Result<Quantity> {
    let n = parse_whole_number(raw)?;
    if n < 1 {
        return Err(StoreError::InvalidQuantity(MSG_AT_LEAST_ONE.to_string()));
    }
    u32::try_from(n)
        .ok()
        .and_then(Quantity::new)
        .ok_or_else(|| StoreError::InvalidQuantity(MSG_TOO_LARGE.to_string()))
}

fn require_title(title: Option<String>) -> Result<String> {
    match title {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(StoreError::InvalidRequest(MSG_TITLE_REQUIRED.to_string())),
    }
}

// == Add To Cart ==
/// Form body for `POST /add-to-cart`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddToCartForm {
    pub title: Option<String>,
    /// Absent means one copy; present but blank is rejected
    pub quantity: Option<String>,
}

/// Validated add-to-cart command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddToCart {
    pub title: String,
    pub quantity: Quantity,
}

impl AddToCartForm {
    /// Validates the form into a command.
    pub fn parse(self) -> Result<AddToCart> {
        let title = require_title(self.title)?;
        let quantity = match self.quantity {
            None => Quantity::ONE,
            Some(raw) => parse_quantity(&raw)?,
        };
        Ok(AddToCart { title, quantity })
    }
}

// == Update Cart ==
/// Form body for `POST /update-cart`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCartForm {
    pub title: Option<String>,
    pub quantity: Option<String>,
}

/// Validated quantity update. Zero or below removes the line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCart {
    pub title: String,
    pub quantity: i64,
}

impl UpdateCartForm {
    /// Validates the form into a command.
    pub fn parse(self) -> Result<UpdateCart> {
        let title = require_title(self.title)?;
        let quantity = parse_whole_number(self.quantity.as_deref().unwrap_or(""))?;
        Ok(UpdateCart { title, quantity })
    }
}

// == Remove From Cart ==
/// Form body for `POST /remove-from-cart`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoveFromCartForm {
    pub title: Option<String>,
}

impl RemoveFromCartForm {
    /// Returns the title to remove.
    pub fn parse(self) -> Result<String> {
        require_title(self.title)
    }
}

// == Search ==
/// Query string for `GET /search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

impl SearchParams {
    /// Returns the trimmed search term, rejecting blanks.
    pub fn term(&self) -> Result<&str> {
        let term = self.query.trim();
        if term.is_empty() {
            return Err(StoreError::InvalidRequest(
                "Please enter a search term!".to_string(),
            ));
        }
        Ok(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quantity_error(raw: &str) -> String {
        parse_quantity(raw).unwrap_err().to_string()
    }

    #[test]
    fn test_parse_quantity_valid() {
        assert_eq!(parse_quantity("3").unwrap().get(), 3);
        assert_eq!(parse_quantity("  7 ").unwrap().get(), 7);
        assert_eq!(parse_quantity("4294967295").unwrap().get(), u32::MAX);
    }

    #[test]
    fn test_parse_quantity_rejections() {
        assert_eq!(quantity_error(""), MSG_QUANTITY_REQUIRED);
        assert_eq!(quantity_error("   "), MSG_QUANTITY_REQUIRED);
        assert_eq!(quantity_error("2.5"), MSG_WHOLE_NUMBER);
        assert_eq!(quantity_error("abc"), MSG_INVALID_QUANTITY);
        assert_eq!(quantity_error("0"), MSG_AT_LEAST_ONE);
        assert_eq!(quantity_error("-1"), MSG_AT_LEAST_ONE);
        assert_eq!(quantity_error("4294967296"), MSG_TOO_LARGE);
        assert_eq!(quantity_error("99999999999999999999"), MSG_INVALID_QUANTITY);
    }

    #[test]
    fn test_parse_whole_number_allows_non_positive() {
        assert_eq!(parse_whole_number("0").unwrap(), 0);
        assert_eq!(parse_whole_number("-2").unwrap(), -2);
        assert!(parse_whole_number("1.0").is_err());
    }

    #[test]
    fn test_add_form_defaults_missing_quantity() {
        let form = AddToCartForm {
            title: Some("1984".to_string()),
            quantity: None,
        };
        let cmd = form.parse().unwrap();
        assert_eq!(cmd.title, "1984");
        assert_eq!(cmd.quantity, Quantity::ONE);
    }

    #[test]
    fn test_add_form_honors_quantity() {
        let form = AddToCartForm {
            title: Some("1984".to_string()),
            quantity: Some("5".to_string()),
        };
        assert_eq!(form.parse().unwrap().quantity.get(), 5);
    }

    #[test]
    fn test_add_form_rejects_blank_quantity() {
        let form = AddToCartForm {
            title: Some("1984".to_string()),
            quantity: Some("".to_string()),
        };
        assert!(matches!(form.parse(), Err(StoreError::InvalidQuantity(_))));
    }

    #[test]
    fn test_add_form_requires_title() {
        let form = AddToCartForm {
            title: Some("  ".to_string()),
            quantity: None,
        };
        assert!(matches!(form.parse(), Err(StoreError::InvalidRequest(_))));
        assert!(AddToCartForm::default().parse().is_err());
    }

    #[test]
    fn test_update_form() {
        let form = UpdateCartForm {
            title: Some("1984".to_string()),
            quantity: Some("0".to_string()),
        };
        assert_eq!(form.parse().unwrap().quantity, 0);

        let missing = UpdateCartForm {
            title: Some("1984".to_string()),
            quantity: None,
        };
        assert!(matches!(missing.parse(), Err(StoreError::InvalidQuantity(_))));
    }

    #[test]
    fn test_form_deserialize() {
        let form: AddToCartForm = serde_json::from_str(r#"{"title": "1984", "quantity": "2"}"#).unwrap();
        assert_eq!(form.title.as_deref(), Some("1984"));
        assert_eq!(form.quantity.as_deref(), Some("2"));
    }

    #[test]
    fn test_search_term() {
        let params = SearchParams {
            query: "  gatsby ".to_string(),
        };
        assert_eq!(params.term().unwrap(), "gatsby");
        assert!(SearchParams::default().term().is_err());
    }
}
