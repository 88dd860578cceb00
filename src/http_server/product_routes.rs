//! Product HTTP Routes
//!
//! Read-only endpoints over the product store:
//!
//! - `GET /products?limit=<N>` - all products, optionally the first N
//! - `GET /products/:pid` - a single product by id
//!
//! Query and path integers are read leniently: leading whitespace, an
//! optional sign, then leading digits. Anything else counts as "no value".

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use crate::store::{ProductStore, Record, RecordId};

// ==================
// Shared State
// ==================

/// Product route state shared across handlers
pub struct ProductsState {
    /// Store every handler reads through
    pub store: ProductStore,
}

impl ProductsState {
    /// Wraps the store the routes will serve
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }
}

// ==================
// Routes
// ==================

/// Create product routes
pub fn product_routes(state: Arc<ProductsState>) -> Router {
    Router::new()
        .route("/products", get(list_products_handler))
        .route("/products/:pid", get(get_product_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_products_handler(
    State(state): State<Arc<ProductsState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Record>>> {
    let mut products = state.store.list().await.map_err(ApiError::ListFailed)?;

    // Repeated keys are allowed; the first `limit` wins
    let limit = params
        .iter()
        .find(|(key, _)| key == "limit")
        .and_then(|(_, value)| parse_limit(value));
    if let Some(limit) = limit {
        products.truncate(limit);
    }

    Ok(Json(products))
}

async fn get_product_handler(
    State(state): State<Arc<ProductsState>>,
    Path(pid): Path<String>,
) -> ApiResult<Json<Record>> {
    let Some(id) = parse_product_id(&pid) else {
        return Err(ApiError::ProductNotFound);
    };

    state
        .store
        .get_by_id(id)
        .await
        .map_err(ApiError::FetchFailed)?
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}

// ==================
// Helper Functions
// ==================

/// Parses a leading integer: optional whitespace, optional sign, digits.
/// Trailing characters are ignored. Returns `None` if no digits lead.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// A limit applies only when it is a positive integer.
fn parse_limit(raw: &str) -> Option<usize> {
    parse_leading_int(raw)
        .filter(|n| *n > 0)
        .and_then(|n| usize::try_from(n).ok())
}

/// Negative or non-numeric ids can never match a stored product.
fn parse_product_id(raw: &str) -> Option<RecordId> {
    parse_leading_int(raw).and_then(|n| RecordId::try_from(n).ok())
}
