//! # DataSync Common Library
//!
//! Shared code for DataSync reconciliation services including:
//! - Domain model (ValidationRow, SourceSystem, AdminDecision)
//! - Reconciliation tolerance policy and status derivation
//! - Error taxonomy
//! - Configuration loading

pub mod config;
pub mod error;
pub mod model;
pub mod reconcile;

pub use error::{Error, Result};
pub use model::{AdminDecision, RowStatus, SourceSystem, ValidationRow};
