//! # Catalog HTTP Server Module
//!
//! Axum server exposing the item catalog.
//!
//! # Endpoints
//!
//! - `GET /api/items?page=&limit=&q=` - Paginated, searchable listing
//! - `GET /api/items/:id` - Single item
//! - `POST /api/items` - Create an item
//! - `GET /api/stats` - Item count and average price

pub mod config;
pub mod errors;
pub mod item_routes;
pub mod server;
pub mod state;
pub mod stats_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
pub use state::CatalogState;
