//! Engine run metrics.
//!
//! - `Parser::run` for normal operation.
//! - `Parser::run_with_metrics` for profiling, debugging regressions, and
//!   inspecting how each line and block was read.
//!
//! Traces are only collected on the heuristic route; a codec parse has no
//! lines to classify and leaves them empty.

use super::format::InputFormat;
use crate::model::{ParsedResult, SummaryField};
use crate::rules::header::HeaderSource;
use crate::rules::sets::BlockMode;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Default, Clone, Serialize)]
pub struct RunMetrics {
    /// Total elapsed time for [`Parser::run_with_metrics`](super::Parser::run_with_metrics).
    pub total: Duration,
    /// Codec parse attempt (zero when the input was not tagged).
    pub codec: Duration,
    /// Cleaning and scanning lines.
    pub scan: Duration,
    /// Header classification and summary extraction.
    pub classify: Duration,
    /// Set extraction over all blocks.
    pub sets: Duration,
}

/// How one cleaned line was classified.
#[derive(Debug, Clone, Serialize)]
pub struct LineTrace {
    pub index: usize,
    pub text: String,
    /// `Some` when the line was taken as an exercise header.
    pub header: Option<HeaderSource>,
    /// Name of the rule that rejected the line as a header.
    pub rejected_by: Option<&'static str>,
}

/// How one exercise block was read.
#[derive(Debug, Clone, Serialize)]
pub struct BlockTrace {
    /// Index of the header line.
    pub header_index: usize,
    /// Raw header text.
    pub header: String,
    /// Name after canonicalization.
    pub name: String,
    pub mode: BlockMode,
    pub lines: usize,
    pub sets: usize,
    pub max_weight: Option<f64>,
    pub inferred_by: Option<&'static str>,
    /// Whether the exercise made it into the result.
    pub kept: bool,
}

/// Parser output bundled with timing information and traces.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub result: ParsedResult,
    /// Route the input actually took (a tagged input that fails to decode
    /// reports [`InputFormat::RawOcr`]).
    pub format: InputFormat,
    pub metrics: RunMetrics,
    pub lines: Vec<LineTrace>,
    pub blocks: Vec<BlockTrace>,
    /// Summary fields read from a label row.
    pub label_row_fields: Vec<SummaryField>,
}
