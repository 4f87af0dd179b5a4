//! Summary metrics.
//!
//! The summary text is every line above the first exercise header (or the
//! whole text when there is nothing above it). Metrics are read in two passes:
//!
//! 1. `DIRECT_RULES`: a number immediately followed by its unit label.
//! 2. `LABEL_ROWS`: for fields still missing, a row of label words (searched
//!    in the whole text) whose values OCR placed on the line above. Those
//!    values are often fused with neighbouring digits, so they are pulled
//!    back under a per-field ceiling.

pub(crate) mod helpers;
mod rules;

use crate::engine::{ScannedLine, numbers_in};
use crate::model::{Summary, SummaryField};
use helpers::{find_date, line_has_all_keywords, sanitize_metric};
use rules::{DIRECT_RULES, LABEL_ROWS, LabelRow};

/// Summary plus the fields that came from a label row rather than a unit label.
#[derive(Debug, Clone, Default)]
pub(crate) struct SummaryExtraction {
    pub summary: Summary,
    pub from_label_rows: Vec<SummaryField>,
}

/// Extract the summary from `lines`, where `first_header` is the index of the
/// first exercise header (or `lines.len()` when there is none).
pub(crate) fn extract_summary(lines: &[ScannedLine], first_header: usize) -> SummaryExtraction {
    let head = &lines[..first_header.min(lines.len())];
    let scope = if head.is_empty() { lines } else { head };
    let text = scope.iter().map(|line| line.text.as_str()).collect::<Vec<_>>().join("\n");

    let mut summary = Summary { date: find_date(&text), ..Summary::default() };
    for rule in DIRECT_RULES {
        if let Some(slot) = summary.metric_mut(rule.field) {
            *slot = (rule.extract)(&text);
        }
    }

    let texts: Vec<&str> = lines.iter().map(|line| line.text.as_str()).collect();
    let mut from_label_rows = Vec::new();
    for row in LABEL_ROWS {
        fill_from_label_row(row, &texts, &mut summary, &mut from_label_rows);
    }

    SummaryExtraction { summary, from_label_rows }
}

fn fill_from_label_row(row: &LabelRow, texts: &[&str], summary: &mut Summary, filled: &mut Vec<SummaryField>) {
    let Some(label_idx) = texts.iter().position(|text| line_has_all_keywords(text, &row.labels)) else {
        return;
    };
    if label_idx == 0 {
        return;
    }

    let values = numbers_in(texts[label_idx - 1]);
    if values.len() < 4 {
        return;
    }

    for (value, field) in values.iter().zip(row.slots) {
        let Some(field) = field else { continue };
        let Some(slot) = summary.metric_mut(field) else { continue };
        if slot.is_none() {
            *slot = Some(sanitize_metric(field, value.trunc()));
            filled.push(field);
        }
    }
    log::debug!("[summary] {} label row at line {label_idx}: {:?}", row.name, values);
}
