//! Validation error type

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Violation message for a missing or blank name
pub const NAME_REQUIRED: &str = "Name is required and must be a non-empty string";
/// Violation message for a non-numeric or negative price
pub const PRICE_INVALID: &str = "Price must be a positive number";
/// Violation message for a non-string description
pub const DESCRIPTION_INVALID: &str = "Description must be a string";
/// Violation message for a non-string category
pub const CATEGORY_INVALID: &str = "Category must be a string";

/// A candidate item broke one or more shape rules.
///
/// `details` keeps the order the rules were checked in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid data")]
pub struct ValidationError {
    pub details: Vec<String>,
}

impl ValidationError {
    pub fn new(details: Vec<String>) -> Self {
        Self { details }
    }
}
