//! Domain model for reconciliation records
//!
//! One `ValidationRow` compares a computed figure against the values
//! independently recorded by the upstream source systems. The original
//! dashboards named the same systems inconsistently ("SFDC" vs
//! "Salesforce", "NS" vs "NetSuite"); `SourceSystem` unifies them into a
//! single enum used by both the per-source value map and the
//! re-extraction source selector.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upstream source system whose values are reconciled
///
/// Serialized under the canonical short keys; deserialization also accepts
/// the long display names (case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SourceSystem {
    /// Salesforce
    #[serde(rename = "SFDC", alias = "Salesforce")]
    Sfdc,
    /// NetSuite
    #[serde(rename = "NS", alias = "NetSuite")]
    NetSuite,
    /// ZSCM
    #[serde(rename = "ZSCM")]
    Zscm,
}

impl SourceSystem {
    /// All recognized source systems, in canonical display order
    pub const ALL: [SourceSystem; 3] = [
        SourceSystem::Sfdc,
        SourceSystem::NetSuite,
        SourceSystem::Zscm,
    ];

    /// Canonical short key used on the wire ("SFDC", "NS", "ZSCM")
    pub fn key(&self) -> &'static str {
        match self {
            SourceSystem::Sfdc => "SFDC",
            SourceSystem::NetSuite => "NS",
            SourceSystem::Zscm => "ZSCM",
        }
    }

    /// Human-readable system name
    pub fn display_name(&self) -> &'static str {
        match self {
            SourceSystem::Sfdc => "Salesforce",
            SourceSystem::NetSuite => "NetSuite",
            SourceSystem::Zscm => "ZSCM",
        }
    }
}

impl fmt::Display for SourceSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Reconciliation outcome for a row
///
/// Always derived from the tolerance check, never settable directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Pass,
    Fail,
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowStatus::Pass => f.write_str("pass"),
            RowStatus::Fail => f.write_str("fail"),
        }
    }
}

/// Human review outcome for a row
///
/// Unset initially; overwritable without restriction (no one-way locking
/// after a decision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminDecision {
    Approved,
    Rejected,
}

/// One reconciled metric compared across source systems
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRow {
    /// Unique row UUID (stable, immutable)
    pub id: Uuid,
    /// Name of the compared metric (e.g., "Total Revenue")
    pub parameter: String,
    /// Independently recorded value per source system
    pub source_values: BTreeMap<SourceSystem, f64>,
    /// The system's own calculation; mutable post-creation
    pub computed_value: f64,
    /// Derived reconciliation outcome
    pub status: RowStatus,
    /// Free-text annotation; at least 10 words once set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Row needs a re-extraction (rETL) pass
    pub reextraction_required: bool,
    /// Upstream source to re-pull from; independent of the flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reextraction_source: Option<SourceSystem>,
    /// Human review outcome; unset until first decision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_decision: Option<AdminDecision>,
    /// Optimistic-concurrency stamp, incremented on every successful mutation
    pub version: u64,
}
