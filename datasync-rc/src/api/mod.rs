//! HTTP API handlers for datasync-rc

pub mod adoption;
pub mod buildinfo;
pub mod email;
pub mod error;
pub mod health;
pub mod retl;
pub mod rows;
pub mod summary;

pub use adoption::{
    get_adoption_activity_types, get_adoption_engagement, get_adoption_overview,
    get_adoption_top_contributors, get_adoption_users, get_adoption_weekly,
};
pub use buildinfo::get_build_info;
pub use email::{get_email_activity, get_email_stats, send_row_email};
pub use error::ApiError;
pub use health::health_routes;
pub use retl::{execute_retl, get_retl_errors, get_retl_stats};
pub use rows::{get_row, list_rows, patch_row};
pub use summary::{get_records_assessment, get_summary};
