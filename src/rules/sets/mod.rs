//! Per-exercise set extraction.
//!
//! A block is every line between an exercise header and the next header. Its
//! shape picks the mode:
//!
//! ```text
//! block ── any `Total Reps:` line? ── yes ──▶ reps_only_sets  (bodyweight)
//!                   │
//!                   no ──────────────────────▶ weighted_sets   (weight x reps)
//! ```
//!
//! Neither mode fails. A block that cannot be read yields no sets and at most
//! one warning; the caller drops exercises without sets.

pub(crate) mod helpers;
pub(crate) mod inference;
mod rules;
#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::engine::{LineFlags, ScannedLine};
use crate::model::{ParsedSet, Warning};

/// Which reading a block got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockMode {
    RepsOnly,
    Weighted,
}

/// Result of reading one block.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BlockOutcome {
    pub mode: BlockMode,
    pub sets: Vec<ParsedSet>,
    pub warning: Option<Warning>,
    /// Last `MAX Weight:` value seen in a weighted block.
    pub max_weight: Option<f64>,
    /// Set when weights (or bodyweight sets) were inferred instead of read.
    pub inferred_by: Option<&'static str>,
}

impl BlockOutcome {
    fn new(mode: BlockMode) -> Self {
        BlockOutcome { mode, sets: Vec::new(), warning: None, max_weight: None, inferred_by: None }
    }
}

/// Read the sets of the block under header `name` (the raw header line).
pub(crate) fn extract_sets(name: &str, block: &[ScannedLine]) -> BlockOutcome {
    if block.iter().any(|line| line.has(LineFlags::TOTAL_REPS)) {
        rules::reps_only_sets(name, block)
    } else {
        rules::weighted_sets(name, block)
    }
}
