//! # Items Query Engine
//!
//! Free-text filter, then page slicing, then metadata describing the
//! filtered set.

pub mod engine;
pub mod params;

pub use engine::{query, ItemsPage, PageMetadata};
pub use params::{parse_int, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE};
