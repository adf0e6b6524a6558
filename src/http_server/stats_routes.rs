//! Stats HTTP Routes

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::errors::ApiResult;
use super::item_routes::route_not_found;
use super::state::CatalogState;
use crate::stats::Stats;

/// Create stats routes
pub fn stats_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/api/stats", get(stats_handler).fallback(route_not_found))
        .with_state(state)
}

async fn stats_handler(State(state): State<Arc<CatalogState>>) -> ApiResult<Json<Stats>> {
    let stats = state.stats.get(&state.store)?;
    Ok(Json(stats))
}
