//! Item HTTP Routes
//!
//! Listing with search and pagination, lookup by id, and creation.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{Map, Value};

use super::errors::{ApiError, ApiResult};
use super::state::CatalogState;
use crate::item::Item;
use crate::query::{parse_int, query, ItemsPage, PageRequest};
use crate::validation::validate_new_item;

/// Create item routes
pub fn item_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route(
            "/api/items",
            get(list_items_handler)
                .post(create_item_handler)
                .fallback(route_not_found),
        )
        .route(
            "/api/items/:id",
            get(get_item_handler).fallback(route_not_found),
        )
        .with_state(state)
}

/// Fallback for unknown paths and unsupported methods
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

async fn list_items_handler(
    State(state): State<Arc<CatalogState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ItemsPage>> {
    let request = PageRequest::from_raw(
        params.get("page").map(String::as_str),
        params.get("limit").map(String::as_str),
        params.get("q").map(String::as_str),
    );

    let items = state.store.load()?;
    Ok(Json(query(items, &request)))
}

async fn get_item_handler(
    State(state): State<Arc<CatalogState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Item>> {
    let id = parse_int(&raw_id).ok_or(ApiError::ItemNotFound)?;

    state
        .store
        .find(id)?
        .map(Json)
        .ok_or(ApiError::ItemNotFound)
}

async fn create_item_handler(
    State(state): State<Arc<CatalogState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Item>)> {
    let candidate = match body {
        Ok(Json(value)) => value,
        // A request without a JSON body is validated as an empty object.
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Map::new()),
        Err(rejection) => return Err(ApiError::MalformedBody(rejection.body_text())),
    };

    let new_item = validate_new_item(candidate)?;
    let item = state.store.append(new_item)?;

    tracing::info!(id = item.id, name = %item.name, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}
