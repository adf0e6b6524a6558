//! Candidate item validator
//!
//! Rules, checked in this order:
//! - `name` present, a string, non-empty after trimming
//! - `price`, if present, a number >= 0 (absent is fine, never defaulted)
//! - `description`, if present, a string
//! - `category`, if present, a string
//!
//! A present `null` counts as present. The candidate is never mutated.

use serde_json::Value;

use super::errors::{
    ValidationError, ValidationResult, CATEGORY_INVALID, DESCRIPTION_INVALID, NAME_REQUIRED,
    PRICE_INVALID,
};
use crate::item::NewItem;

/// Check a candidate against every rule, collecting all violations.
pub fn validate(candidate: &Value) -> ValidationResult<()> {
    let field = |key: &str| candidate.as_object().and_then(|obj| obj.get(key));
    let mut details = Vec::new();

    let name_ok = matches!(field("name"), Some(Value::String(s)) if !s.trim().is_empty());
    if !name_ok {
        details.push(NAME_REQUIRED.to_string());
    }

    if let Some(price) = field("price") {
        let price_ok = price.as_f64().map(|p| p >= 0.0).unwrap_or(false);
        if !price_ok {
            details.push(PRICE_INVALID.to_string());
        }
    }

    if let Some(description) = field("description") {
        if !description.is_string() {
            details.push(DESCRIPTION_INVALID.to_string());
        }
    }

    if let Some(category) = field("category") {
        if !category.is_string() {
            details.push(CATEGORY_INVALID.to_string());
        }
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(details))
    }
}

/// Validate a candidate and convert it into a `NewItem` unchanged.
pub fn validate_new_item(candidate: Value) -> ValidationResult<NewItem> {
    validate(&candidate)?;
    serde_json::from_value(candidate).map_err(|e| ValidationError::new(vec![e.to_string()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details(candidate: Value) -> Vec<String> {
        validate(&candidate).unwrap_err().details
    }

    #[test]
    fn test_valid_candidate_passes_unchanged() {
        let candidate = json!({"name": "Novo Item", "price": 15.99, "description": "Nova"});
        let item = validate_new_item(candidate).unwrap();
        assert_eq!(item.name, "Novo Item");
        assert_eq!(item.price, serde_json::Number::from_f64(15.99));
        assert_eq!(item.description.as_deref(), Some("Nova"));
    }

    #[test]
    fn test_zero_price_is_accepted() {
        assert!(validate(&json!({"name": "Free", "price": 0})).is_ok());
    }

    #[test]
    fn test_absent_price_is_not_defaulted() {
        let item = validate_new_item(json!({"name": "Priceless"})).unwrap();
        assert_eq!(item.price, None);
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(details(json!({"price": 15.99})), vec![NAME_REQUIRED]);
    }

    #[test]
    fn test_blank_and_non_string_names() {
        assert_eq!(details(json!({"name": "   "})), vec![NAME_REQUIRED]);
        assert_eq!(details(json!({"name": 123})), vec![NAME_REQUIRED]);
        assert_eq!(details(json!({"name": null})), vec![NAME_REQUIRED]);
    }

    #[test]
    fn test_price_rules() {
        assert_eq!(details(json!({"name": "x", "price": -10})), vec![PRICE_INVALID]);
        assert_eq!(details(json!({"name": "x", "price": "15.99"})), vec![PRICE_INVALID]);
        assert_eq!(details(json!({"name": "x", "price": null})), vec![PRICE_INVALID]);
    }

    #[test]
    fn test_description_and_category_must_be_strings() {
        assert_eq!(details(json!({"name": "x", "description": 123})), vec![DESCRIPTION_INVALID]);
        assert_eq!(details(json!({"name": "x", "category": ["a"]})), vec![CATEGORY_INVALID]);
        assert!(validate(&json!({"name": "x", "description": ""})).is_ok());
    }

    #[test]
    fn test_all_violations_collected_in_order() {
        let err = validate(&json!({"name": "", "price": -1, "description": false})).unwrap_err();
        assert_eq!(err.details, vec![NAME_REQUIRED, PRICE_INVALID, DESCRIPTION_INVALID]);
        assert_eq!(err.to_string(), "Invalid data");
    }

    #[test]
    fn test_non_object_candidate_fails_name_only() {
        assert_eq!(details(json!([1, 2, 3])), vec![NAME_REQUIRED]);
        assert_eq!(details(json!("name")), vec![NAME_REQUIRED]);
    }
}
