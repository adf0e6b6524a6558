//! # Catalog Items
//!
//! The record type stored in the collection and the validated candidate
//! accepted by the create endpoint.

pub mod types;

pub use types::{Item, ItemId, NewItem};
