//! datasync-rc library - Reconciliation Console module
//!
//! HTTP service over the in-memory validation record store: row
//! reconciliation, review workflow, and the dashboard read models.

use std::sync::Arc;

use axum::Router;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::stats::{AdoptionReport, EmailLog, RetlLog};
use crate::store::ValidationRecordStore;

pub mod api;
pub mod stats;
pub mod store;

/// Application state shared across HTTP handlers
///
/// The store and logs sit behind RwLock so concurrent requests over the
/// HTTP API are serialized per collection; rows additionally carry version
/// stamps for optimistic concurrency on the client side.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ValidationRecordStore>>,
    pub email_log: Arc<RwLock<EmailLog>>,
    pub retl_log: Arc<RwLock<RetlLog>>,
    pub adoption: Arc<AdoptionReport>,
}

impl AppState {
    /// Create application state from pre-built collections
    pub fn new(
        store: ValidationRecordStore,
        email_log: EmailLog,
        retl_log: RetlLog,
        adoption: AdoptionReport,
    ) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            email_log: Arc::new(RwLock::new(email_log)),
            retl_log: Arc::new(RwLock::new(retl_log)),
            adoption: Arc::new(adoption),
        }
    }

    /// State seeded with the standard sample data
    pub fn seeded(tolerance: f64) -> Self {
        Self::new(
            ValidationRecordStore::with_sample_data(tolerance),
            EmailLog::with_sample_data(),
            RetlLog::with_sample_data(),
            AdoptionReport::with_sample_data(),
        )
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/rows", get(api::list_rows))
        .route("/api/rows/:id", get(api::get_row).patch(api::patch_row))
        .route("/api/rows/:id/email", post(api::send_row_email))
        .route("/api/summary", get(api::get_summary))
        .route("/api/dashboard/records", get(api::get_records_assessment))
        .route("/api/retl/execute", post(api::execute_retl))
        .route("/api/retl/stats", get(api::get_retl_stats))
        .route("/api/retl/errors", get(api::get_retl_errors))
        .route("/api/email/stats", get(api::get_email_stats))
        .route("/api/email/activity", get(api::get_email_activity))
        .route("/api/adoption/overview", get(api::get_adoption_overview))
        .route("/api/adoption/users", get(api::get_adoption_users))
        .route("/api/adoption/weekly", get(api::get_adoption_weekly))
        .route("/api/adoption/engagement", get(api::get_adoption_engagement))
        .route(
            "/api/adoption/activity_types",
            get(api::get_adoption_activity_types),
        )
        .route(
            "/api/adoption/top_contributors",
            get(api::get_adoption_top_contributors),
        )
        .route("/api/build_info", get(api::get_build_info))
        .merge(api::health_routes())
        // Enable CORS for the browser dashboard client
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
