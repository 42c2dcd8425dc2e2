//! Adoption metrics endpoints
//!
//! Read-only views over the seeded adoption snapshot: overview cards,
//! per-user activity, weekly trend, engagement distribution, activity-type
//! breakdown, and the top-contributor ranking.

use axum::extract::State;
use axum::Json;

use crate::stats::{
    ActivityTypeCount, AdoptionOverview, EngagementSlice, UserActivity, WeeklyActivity,
};
use crate::AppState;

/// GET /api/adoption/overview
pub async fn get_adoption_overview(State(state): State<AppState>) -> Json<AdoptionOverview> {
    Json(state.adoption.overview())
}

/// GET /api/adoption/users
pub async fn get_adoption_users(State(state): State<AppState>) -> Json<Vec<UserActivity>> {
    Json(state.adoption.users().to_vec())
}

/// GET /api/adoption/weekly
pub async fn get_adoption_weekly(State(state): State<AppState>) -> Json<Vec<WeeklyActivity>> {
    Json(state.adoption.weekly().to_vec())
}

/// GET /api/adoption/engagement
pub async fn get_adoption_engagement(State(state): State<AppState>) -> Json<Vec<EngagementSlice>> {
    Json(state.adoption.engagement().to_vec())
}

/// GET /api/adoption/activity_types
pub async fn get_adoption_activity_types(
    State(state): State<AppState>,
) -> Json<Vec<ActivityTypeCount>> {
    Json(state.adoption.activity_types().to_vec())
}

/// GET /api/adoption/top_contributors
pub async fn get_adoption_top_contributors(
    State(state): State<AppState>,
) -> Json<Vec<UserActivity>> {
    Json(state.adoption.top_contributors())
}
