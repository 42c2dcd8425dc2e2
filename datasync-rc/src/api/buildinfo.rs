//! Build information endpoint

use axum::Json;
use serde::Serialize;

/// Build identification captured by build.rs
#[derive(Debug, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub build_timestamp: &'static str,
    pub build_profile: &'static str,
}

/// GET /api/build_info
///
/// Names the exact build for display in the dashboard footer.
pub async fn get_build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: env!("GIT_HASH"),
        build_timestamp: env!("BUILD_TIMESTAMP"),
        build_profile: env!("BUILD_PROFILE"),
    })
}
