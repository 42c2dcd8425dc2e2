//! Reconciliation tolerance policy and derived statistics
//!
//! A row passes when every source value agrees with the computed value
//! within a relative tolerance. The tolerance defaults to 0.25%, chosen so
//! the known-good sample data reconciles the same way it always has
//! (passing rows deviate at most 0.12%, the failing row by 0.44%).

use crate::model::{RowStatus, ValidationRow};

/// Default relative tolerance for the pass/fail check (0.25%)
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 0.0025;

/// Minimum comment length, in whitespace-separated words
pub const MIN_COMMENT_WORDS: usize = 10;

/// Derive pass/fail for a computed value against its source values
///
/// Pass requires `|source - computed| <= tolerance * |computed|` for every
/// source. A computed value of exactly zero passes only when all sources
/// are exactly zero; a non-finite computed value always fails.
pub fn derive_status<'a, I>(computed: f64, sources: I, tolerance: f64) -> RowStatus
where
    I: IntoIterator<Item = &'a f64>,
{
    if !computed.is_finite() {
        return RowStatus::Fail;
    }

    for &source in sources {
        let within = if computed == 0.0 {
            source == 0.0
        } else {
            (source - computed).abs() <= tolerance * computed.abs()
        };
        if !within {
            return RowStatus::Fail;
        }
    }
    RowStatus::Pass
}

/// Re-derive a row's status from its current values
pub fn derive_row_status(row: &ValidationRow, tolerance: f64) -> RowStatus {
    derive_status(row.computed_value, row.source_values.values(), tolerance)
}

/// Count whitespace-separated words in a comment candidate
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Pass rate as a percentage, rounded to one decimal place
///
/// Reports 0.0 when there are no rows.
pub fn pass_rate(pass_count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let rate = pass_count as f64 / total as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_revenue_row_passes() {
        // Total Revenue: max deviation 1500 of 1249500 (~0.12%)
        let sources = [1_250_000.0, 1_248_500.0, 1_250_000.0];
        assert_eq!(
            derive_status(1_249_500.0, sources.iter(), DEFAULT_RELATIVE_TOLERANCE),
            RowStatus::Pass
        );
    }

    #[test]
    fn sample_customers_row_fails() {
        // Active Customers: 452 vs 450 (~0.44%) exceeds tolerance
        let sources = [450.0, 452.0, 450.0];
        assert_eq!(
            derive_status(450.0, sources.iter(), DEFAULT_RELATIVE_TOLERANCE),
            RowStatus::Fail
        );
    }

    #[test]
    fn sample_orders_row_passes() {
        // Monthly Orders: max deviation 4 of 3421 (~0.117%)
        let sources = [3420.0, 3420.0, 3425.0];
        assert_eq!(
            derive_status(3421.0, sources.iter(), DEFAULT_RELATIVE_TOLERANCE),
            RowStatus::Pass
        );
    }

    #[test]
    fn zero_computed_requires_all_zero_sources() {
        assert_eq!(
            derive_status(0.0, [0.0, 0.0].iter(), DEFAULT_RELATIVE_TOLERANCE),
            RowStatus::Pass
        );
        assert_eq!(
            derive_status(0.0, [0.0, 1.0].iter(), DEFAULT_RELATIVE_TOLERANCE),
            RowStatus::Fail
        );
    }

    #[test]
    fn non_finite_computed_fails() {
        assert_eq!(
            derive_status(f64::NAN, [1.0].iter(), DEFAULT_RELATIVE_TOLERANCE),
            RowStatus::Fail
        );
        assert_eq!(
            derive_status(f64::INFINITY, [1.0].iter(), DEFAULT_RELATIVE_TOLERANCE),
            RowStatus::Fail
        );
    }

    #[test]
    fn no_sources_passes_trivially() {
        let empty: [f64; 0] = [];
        assert_eq!(
            derive_status(42.0, empty.iter(), DEFAULT_RELATIVE_TOLERANCE),
            RowStatus::Pass
        );
    }

    #[test]
    fn word_count_splits_on_whitespace() {
        assert_eq!(word_count("short text"), 2);
        assert_eq!(word_count("  leading   and trailing  spaces  "), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(
            word_count("this is a sufficiently long comment with exactly ten words"),
            10
        );
    }

    #[test]
    fn pass_rate_rounds_to_one_decimal() {
        assert_eq!(pass_rate(2, 3), 66.7);
        assert_eq!(pass_rate(1, 3), 33.3);
        assert_eq!(pass_rate(3, 3), 100.0);
        assert_eq!(pass_rate(0, 5), 0.0);
    }

    #[test]
    fn pass_rate_zero_rows_reports_zero() {
        assert_eq!(pass_rate(0, 0), 0.0);
    }
}
