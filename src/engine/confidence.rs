//! Confidence scoring and the needs-review rule.
//!
//! ```text
//! confidence   = clamp(1 - 0.12 * missing - 0.08 * warnings, 0.05, 1.0)
//! needs_review = warnings > 0 || missing >= 2
//! ```
//!
//! `warnings` counts the `summary_missing` tag itself, so a record with any
//! gap in its summary always needs review.

use crate::model::{Meta, Summary, Warning};

pub(crate) const MIN_CONFIDENCE: f64 = 0.05;
pub(crate) const MAX_CONFIDENCE: f64 = 1.0;

const MISSING_FIELD_PENALTY: f64 = 0.12;
const WARNING_PENALTY: f64 = 0.08;

pub(crate) fn clamp_confidence(value: f64) -> f64 {
    value.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bounded confidence for a record with `missing` null summary fields and
/// `warnings` warning tags.
pub(crate) fn score(missing: usize, warnings: usize) -> f64 {
    let raw = MAX_CONFIDENCE - MISSING_FIELD_PENALTY * missing as f64 - WARNING_PENALTY * warnings as f64;
    round_to_hundredths(clamp_confidence(raw))
}

pub(crate) fn needs_review(missing: usize, warnings: usize) -> bool {
    warnings > 0 || missing >= 2
}

/// Drop any earlier `summary_missing` tag and append the one `summary`
/// calls for. Returns the number of missing fields.
pub(crate) fn push_summary_missing(summary: &Summary, warnings: &mut Vec<Warning>) -> usize {
    warnings.retain(|warning| !warning.is_summary_missing());
    let missing = summary.missing_fields();
    let count = missing.len();
    if count > 0 {
        warnings.push(Warning::SummaryMissing(missing));
    }
    count
}

/// Meta for a heuristically parsed record.
pub(crate) fn finalize_meta(summary: &Summary, mut warnings: Vec<Warning>) -> Meta {
    let missing = push_summary_missing(summary, &mut warnings);
    Meta { confidence: score(missing, warnings.len()), needs_review: needs_review(missing, warnings.len()), warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SummaryField;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn full_summary() -> Summary {
        Summary {
            date: NaiveDate::from_ymd_opt(2026, 2, 7),
            calories_kcal: Some(238.0),
            duration_min: Some(54.0),
            volume_kg: Some(7402.0),
            exercises_count: Some(6.0),
            sets_total: Some(22.0),
            reps_total: Some(254.0),
            intensity_kg_per_min: Some(137.0),
        }
    }

    #[rstest]
    #[case(0, 0, 1.0)]
    #[case(0, 1, 0.92)]
    #[case(1, 1, 0.8)]
    #[case(2, 1, 0.68)]
    #[case(8, 1, 0.05)]
    #[case(0, 20, 0.05)]
    fn score_is_bounded_and_rounded(#[case] missing: usize, #[case] warnings: usize, #[case] expected: f64) {
        assert_eq!(score(missing, warnings), expected);
    }

    #[test]
    fn complete_record_is_fully_trusted() {
        let meta = finalize_meta(&full_summary(), Vec::new());
        assert_eq!(meta, Meta { confidence: 1.0, needs_review: false, warnings: Vec::new() });
    }

    #[test]
    fn a_single_gap_still_needs_review_through_its_warning() {
        let summary = Summary { date: None, ..full_summary() };
        let meta = finalize_meta(&summary, Vec::new());

        assert_eq!(meta.warnings, vec![Warning::SummaryMissing(vec![SummaryField::Date])]);
        assert_eq!(meta.confidence, 0.8);
        assert!(meta.needs_review);
    }

    #[test]
    fn summary_missing_is_never_duplicated() {
        let summary = Summary { calories_kcal: None, ..full_summary() };
        let mut warnings = vec![
            Warning::SummaryMissing(vec![SummaryField::Date]),
            Warning::SetsCountMismatch("스쿼트".to_string()),
        ];

        assert_eq!(push_summary_missing(&summary, &mut warnings), 1);
        assert_eq!(
            warnings,
            vec![
                Warning::SetsCountMismatch("스쿼트".to_string()),
                Warning::SummaryMissing(vec![SummaryField::CaloriesKcal]),
            ]
        );
    }
}
