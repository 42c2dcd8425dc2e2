//! Email notification endpoints
//!
//! Dispatching a row notification validates the body before anything is
//! recorded, then appends to the activity log. There is no SMTP backend;
//! the log is the system of record the dashboard reads.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use datasync_common::Error;

use crate::api::ApiError;
use crate::stats::{EmailActivity, EmailStats, EmailStatus};
use crate::AppState;

/// Request body for POST /api/rows/:id/email
#[derive(Debug, Deserialize)]
pub struct SendEmailRequest {
    pub recipient: String,
    /// Defaults to "Validation <status> - <parameter>"
    #[serde(default)]
    pub subject: Option<String>,
    pub body: String,
}

/// Dispatch acknowledgement
#[derive(Debug, Serialize)]
pub struct SendEmailResponse {
    pub activity: EmailActivity,
}

/// Query parameters for GET /api/email/activity
#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    /// Optional status filter: "sent", "failed", or "draft"
    pub status: Option<EmailStatus>,
}

/// Activity listing response, newest first
#[derive(Debug, Serialize)]
pub struct ActivityResponse {
    pub total: usize,
    pub activity: Vec<EmailActivity>,
}

/// POST /api/rows/:id/email
///
/// Sends a notification about one validation row. Rejected with
/// `empty_email_body` when the body is empty or whitespace; the row must
/// exist.
pub async fn send_row_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, ApiError> {
    if request.body.trim().is_empty() {
        return Err(Error::EmptyEmailBody.into());
    }
    if request.recipient.trim().is_empty() {
        return Err(Error::InvalidInput("recipient is required".to_string()).into());
    }

    let (status, parameter) = {
        let store = state.store.read().await;
        let row = store.get_row(id)?;
        (row.status, row.parameter.clone())
    };
    let subject = request
        .subject
        .unwrap_or_else(|| format!("Validation {status} - {parameter}"));

    let mut log = state.email_log.write().await;
    let activity = log.record_sent(&request.recipient, &subject);
    info!("Email dispatched to {} ({})", activity.recipient, subject);

    Ok(Json(SendEmailResponse { activity }))
}

/// GET /api/email/stats
pub async fn get_email_stats(State(state): State<AppState>) -> Json<EmailStats> {
    let log = state.email_log.read().await;
    Json(log.stats())
}

/// GET /api/email/activity?status=sent
pub async fn get_email_activity(
    State(state): State<AppState>,
    Query(query): Query<ActivityQuery>,
) -> Json<ActivityResponse> {
    let log = state.email_log.read().await;
    let activity = log.activity(query.status);
    Json(ActivityResponse {
        total: activity.len(),
        activity,
    })
}
