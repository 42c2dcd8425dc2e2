//! Re-extraction (rETL) endpoints
//!
//! Starting an execution requires a chosen source system; the started job
//! is counted as pending. The stats and error table back the dashboard
//! rETL section.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use datasync_common::{Error, SourceSystem};

use crate::api::ApiError;
use crate::stats::{RetlError, RetlStats};
use crate::AppState;

/// Request body for POST /api/retl/execute
#[derive(Debug, Deserialize)]
pub struct ExecuteRetlRequest {
    /// Missing selection is a validation error, not a default
    #[serde(default)]
    pub source: Option<SourceSystem>,
}

/// Started-job acknowledgement
#[derive(Debug, Serialize)]
pub struct ExecuteRetlResponse {
    pub started: bool,
    pub source: SourceSystem,
    pub message: String,
}

/// Query parameters for GET /api/retl/errors
#[derive(Debug, Deserialize)]
pub struct ErrorsQuery {
    /// Optional source filter
    pub source: Option<SourceSystem>,
}

/// Failed-job listing response
#[derive(Debug, Serialize)]
pub struct RetlErrorsResponse {
    pub total: usize,
    pub errors: Vec<RetlError>,
}

/// POST /api/retl/execute
///
/// Starts a re-extraction pass from the chosen source system. Rejected
/// with `missing_source_selection` when no source is given.
pub async fn execute_retl(
    State(state): State<AppState>,
    Json(request): Json<ExecuteRetlRequest>,
) -> Result<Json<ExecuteRetlResponse>, ApiError> {
    let source = request.source.ok_or(Error::MissingSourceSelection)?;

    let mut log = state.retl_log.write().await;
    log.record_started();
    info!("rETL execution started for {}", source.display_name());

    Ok(Json(ExecuteRetlResponse {
        started: true,
        source,
        message: format!("rETL execution started for {source}"),
    }))
}

/// GET /api/retl/stats
pub async fn get_retl_stats(State(state): State<AppState>) -> Json<RetlStats> {
    let log = state.retl_log.read().await;
    Json(log.stats())
}

/// GET /api/retl/errors?source=SFDC
pub async fn get_retl_errors(
    State(state): State<AppState>,
    Query(query): Query<ErrorsQuery>,
) -> Json<RetlErrorsResponse> {
    let log = state.retl_log.read().await;
    let mut errors = log.errors();
    if let Some(source) = query.source {
        errors.retain(|e| e.source == source);
    }
    Json(RetlErrorsResponse {
        total: errors.len(),
        errors,
    })
}
