//! # Item Store
//!
//! The collection lives in one JSON file holding an array of items.
//! Every write rewrites the whole file through a temp-file rename, and
//! appends are serialized so concurrent creates cannot lose each other.

pub mod errors;
pub mod id;
pub mod item_store;

pub use errors::{StoreError, StoreResult};
pub use id::IdGenerator;
pub use item_store::ItemStore;
