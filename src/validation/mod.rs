//! # Item Validation
//!
//! Shape checks on untyped create-request bodies before they reach the
//! store. Every rule runs; all violations are reported together.

pub mod errors;
pub mod validator;

pub use errors::{ValidationError, ValidationResult};
pub use validator::{validate, validate_new_item};
