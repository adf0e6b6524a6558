//! catalogd - A small item catalog backed by a single JSON file
//!
//! Paginated and searchable listing, creation with shape validation, and
//! cached aggregate statistics, served over HTTP.

pub mod cli;
pub mod http_server;
pub mod item;
pub mod query;
pub mod stats;
pub mod store;
pub mod validation;
