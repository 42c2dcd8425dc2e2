//! Aggregate statistics endpoints

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::store::Summary;
use crate::AppState;

/// Records assessment card values for the dashboard
///
/// `pending` counts rows still awaiting an admin decision.
#[derive(Debug, Serialize)]
pub struct RecordsAssessment {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub pending: usize,
    pub pass_rate: f64,
}

/// GET /api/summary
///
/// Derives counts by scanning all rows.
pub async fn get_summary(State(state): State<AppState>) -> Json<Summary> {
    let store = state.store.read().await;
    Json(store.summary())
}

/// GET /api/dashboard/records
pub async fn get_records_assessment(State(state): State<AppState>) -> Json<RecordsAssessment> {
    let store = state.store.read().await;
    let summary = store.summary();
    Json(RecordsAssessment {
        total: summary.total,
        pass: summary.pass_count,
        fail: summary.fail_count,
        pending: store.pending_review_count(),
        pass_rate: summary.pass_rate,
    })
}
