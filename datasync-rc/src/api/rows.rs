//! Validation row endpoints
//!
//! Listing, single-row lookup, and partial updates. A PATCH body may carry
//! any combination of computed value, comment, re-extraction fields, and
//! admin decision; the store validates the whole patch before mutating.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use datasync_common::ValidationRow;

use crate::api::ApiError;
use crate::store::RowPatch;
use crate::AppState;

/// Row listing response
#[derive(Debug, Serialize)]
pub struct RowListResponse {
    pub total_rows: usize,
    pub rows: Vec<ValidationRow>,
}

/// GET /api/rows
///
/// Returns all rows in insertion order.
pub async fn list_rows(State(state): State<AppState>) -> Json<RowListResponse> {
    let store = state.store.read().await;
    let rows = store.list_rows().to_vec();
    Json(RowListResponse {
        total_rows: rows.len(),
        rows,
    })
}

/// GET /api/rows/:id
pub async fn get_row(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ValidationRow>, ApiError> {
    let store = state.store.read().await;
    Ok(Json(store.get_row(id)?.clone()))
}

/// PATCH /api/rows/:id
///
/// Applies a partial update and returns the updated row. An invalid patch
/// (unknown id, too-short comment) mutates nothing.
pub async fn patch_row(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<RowPatch>,
) -> Result<Json<ValidationRow>, ApiError> {
    let mut store = state.store.write().await;
    let row = store.apply_patch(id, &patch)?;
    Ok(Json(row))
}
