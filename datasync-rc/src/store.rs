//! In-memory validation record store
//!
//! Holds the authoritative collection of `ValidationRow` entities in
//! insertion order and exposes the mutation operations plus derived
//! aggregates. Rows are seeded at startup; no create or delete operation
//! exists. All operations validate before mutating, so a failed call
//! leaves the row untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use datasync_common::reconcile::{self, MIN_COMMENT_WORDS};
use datasync_common::{AdminDecision, Error, Result, RowStatus, SourceSystem, ValidationRow};

/// Derived summary statistics over all rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub pass_count: usize,
    pub fail_count: usize,
    /// Percentage rounded to one decimal place; 0.0 when there are no rows
    pub pass_rate: f64,
}

/// Partial update applied to a single row
///
/// All fields optional; the whole patch is validated before any field is
/// applied, so an invalid patch mutates nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RowPatch {
    pub computed_value: Option<f64>,
    pub comment: Option<String>,
    pub reextraction_required: Option<bool>,
    pub reextraction_source: Option<SourceSystem>,
    pub admin_decision: Option<AdminDecision>,
}

/// Authoritative collection of validation rows
pub struct ValidationRecordStore {
    rows: Vec<ValidationRow>,
    tolerance: f64,
}

impl ValidationRecordStore {
    /// Create an empty store with the given relative tolerance
    pub fn new(tolerance: f64) -> Self {
        Self {
            rows: Vec::new(),
            tolerance,
        }
    }

    /// Create a store seeded with the standard sample rows
    pub fn with_sample_data(tolerance: f64) -> Self {
        let mut store = Self::new(tolerance);
        store.seed_row(
            "Total Revenue",
            [
                (SourceSystem::Sfdc, 1_250_000.0),
                (SourceSystem::NetSuite, 1_248_500.0),
                (SourceSystem::Zscm, 1_250_000.0),
            ],
            1_249_500.0,
            false,
        );
        store.seed_row(
            "Active Customers",
            [
                (SourceSystem::Sfdc, 450.0),
                (SourceSystem::NetSuite, 452.0),
                (SourceSystem::Zscm, 450.0),
            ],
            450.0,
            true,
        );
        store.seed_row(
            "Monthly Orders",
            [
                (SourceSystem::Sfdc, 3420.0),
                (SourceSystem::NetSuite, 3420.0),
                (SourceSystem::Zscm, 3425.0),
            ],
            3421.0,
            false,
        );
        store
    }

    /// Append a seed row; status is derived, not hand-assigned
    pub fn seed_row<I>(
        &mut self,
        parameter: &str,
        source_values: I,
        computed_value: f64,
        reextraction_required: bool,
    ) -> Uuid
    where
        I: IntoIterator<Item = (SourceSystem, f64)>,
    {
        let source_values: BTreeMap<SourceSystem, f64> = source_values.into_iter().collect();
        let status =
            reconcile::derive_status(computed_value, source_values.values(), self.tolerance);
        let id = Uuid::new_v4();
        self.rows.push(ValidationRow {
            id,
            parameter: parameter.to_string(),
            source_values,
            computed_value,
            status,
            comment: None,
            reextraction_required,
            reextraction_source: None,
            admin_decision: None,
            version: 1,
        });
        id
    }

    /// All rows in insertion order
    pub fn list_rows(&self) -> &[ValidationRow] {
        &self.rows
    }

    /// Look up a single row by id
    pub fn get_row(&self, id: Uuid) -> Result<&ValidationRow> {
        self.rows
            .iter()
            .find(|row| row.id == id)
            .ok_or_else(|| Error::NotFound(format!("row {id}")))
    }

    fn get_row_mut(&mut self, id: Uuid) -> Result<&mut ValidationRow> {
        self.rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| Error::NotFound(format!("row {id}")))
    }

    /// Overwrite the computed value and re-derive the row's status
    ///
    /// Idempotent: re-applying the current value changes nothing, including
    /// the version stamp.
    pub fn update_computed_value(&mut self, id: Uuid, value: f64) -> Result<&ValidationRow> {
        let tolerance = self.tolerance;
        let row = self.get_row_mut(id)?;
        if row.computed_value != value {
            row.computed_value = value;
            let status = reconcile::derive_row_status(row, tolerance);
            row.status = status;
            row.version += 1;
        }
        Ok(&*row)
    }

    /// Store a comment, enforcing the minimum word count
    ///
    /// On rejection the prior comment is left unchanged; accepted text is
    /// stored verbatim.
    pub fn set_comment(&mut self, id: Uuid, text: &str) -> Result<&ValidationRow> {
        let words = reconcile::word_count(text);
        if words < MIN_COMMENT_WORDS {
            return Err(Error::CommentTooShort {
                got: words,
                min: MIN_COMMENT_WORDS,
            });
        }
        let row = self.get_row_mut(id)?;
        if row.comment.as_deref() != Some(text) {
            row.comment = Some(text.to_string());
            row.version += 1;
        }
        Ok(&*row)
    }

    /// Record a human review decision; unconditionally overwritable
    pub fn set_admin_decision(&mut self, id: Uuid, decision: AdminDecision) -> Result<&ValidationRow> {
        let row = self.get_row_mut(id)?;
        if row.admin_decision != Some(decision) {
            row.admin_decision = Some(decision);
            row.version += 1;
        }
        Ok(&*row)
    }

    /// Set the re-extraction-required flag
    pub fn set_reextraction_required(&mut self, id: Uuid, value: bool) -> Result<&ValidationRow> {
        let row = self.get_row_mut(id)?;
        if row.reextraction_required != value {
            row.reextraction_required = value;
            row.version += 1;
        }
        Ok(&*row)
    }

    /// Choose the upstream source to re-pull from
    ///
    /// Independent of the required flag: setting one never touches the
    /// other.
    pub fn set_reextraction_source(
        &mut self,
        id: Uuid,
        source: SourceSystem,
    ) -> Result<&ValidationRow> {
        let row = self.get_row_mut(id)?;
        if row.reextraction_source != Some(source) {
            row.reextraction_source = Some(source);
            row.version += 1;
        }
        Ok(&*row)
    }

    /// Apply a partial update atomically
    ///
    /// The whole patch is validated first (row existence, comment length);
    /// only then are fields applied. The version stamp advances at most
    /// once per patch, and only when some field actually changes, so
    /// re-sending a row's current values is a no-op.
    pub fn apply_patch(&mut self, id: Uuid, patch: &RowPatch) -> Result<ValidationRow> {
        // Validate everything before mutating anything
        self.get_row(id)?;
        if let Some(text) = &patch.comment {
            let words = reconcile::word_count(text);
            if words < MIN_COMMENT_WORDS {
                return Err(Error::CommentTooShort {
                    got: words,
                    min: MIN_COMMENT_WORDS,
                });
            }
        }

        let tolerance = self.tolerance;
        let row = self.get_row_mut(id)?;

        let changed = patch
            .computed_value
            .map_or(false, |v| row.computed_value != v)
            || patch
                .comment
                .as_deref()
                .map_or(false, |t| row.comment.as_deref() != Some(t))
            || patch
                .reextraction_required
                .map_or(false, |v| row.reextraction_required != v)
            || patch
                .reextraction_source
                .map_or(false, |s| row.reextraction_source != Some(s))
            || patch
                .admin_decision
                .map_or(false, |d| row.admin_decision != Some(d));
        if !changed {
            return Ok(row.clone());
        }
        row.version += 1;

        if let Some(value) = patch.computed_value {
            row.computed_value = value;
            let status = reconcile::derive_row_status(row, tolerance);
            row.status = status;
        }
        if let Some(text) = &patch.comment {
            row.comment = Some(text.clone());
        }
        if let Some(required) = patch.reextraction_required {
            row.reextraction_required = required;
        }
        if let Some(source) = patch.reextraction_source {
            row.reextraction_source = Some(source);
        }
        if let Some(decision) = patch.admin_decision {
            row.admin_decision = Some(decision);
        }

        Ok(row.clone())
    }

    /// Derive summary statistics by scanning all rows
    pub fn summary(&self) -> Summary {
        let total = self.rows.len();
        let pass_count = self
            .rows
            .iter()
            .filter(|row| row.status == RowStatus::Pass)
            .count();
        let fail_count = total - pass_count;
        Summary {
            total,
            pass_count,
            fail_count,
            pass_rate: reconcile::pass_rate(pass_count, total),
        }
    }

    /// Rows still awaiting a human review decision
    pub fn pending_review_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.admin_decision.is_none())
            .count()
    }
}
