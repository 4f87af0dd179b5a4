//! Parsing engine.
//!
//! This module is the entry point used by `api.rs`. It routes input to one of
//! two parse routines and assembles the final [`ParsedResult`](crate::ParsedResult).
//!
//! ## How the parts work together
//!
//! ```text
//! input ── InputFormat::sniff ──┬─ Normalized ─▶ codec::parse_normalized ──┐
//!          (format.rs)          │                 (None => RawOcr route)   │
//!                               └─ RawOcr                                  │
//!                                    │                                     │
//!                    clean_lines (preprocess.rs)                           │
//!                                    │                                     │
//!                    scan_lines  (scan.rs: LineFlags, alias keys)          │
//!                                    │                                     │
//!               ┌────────────────────┼──────────────────────┐              │
//!               v                    v                      v              │
//!     rules::header         rules::summary          rules::sets            │
//!     (veto chain)          (direct + metric rows)  (per block)            │
//!               └────────────────────┼──────────────────────┘              │
//!                                    v                                     │
//!                    confidence.rs (score + needs_review)                  │
//!                                    │                                     │
//!                                    v                                     v
//!                              ParsedResult ◀── alias overrides post-pass ─┘
//! ```
//!
//! ## Responsibilities by module
//!
//! - `format.rs`: the two-variant format sniff.
//! - `preprocess.rs`: badge stripping, whitespace collapsing, noise-line removal.
//! - `scan.rs`: per-line coarse flags computed once and shared by all rules.
//! - `parser.rs`: orchestration, block slicing, canonicalization.
//! - `confidence.rs`: bounded confidence and the needs-review rule.
//! - `metrics.rs`: optional timing and per-line/per-block traces.
//!
//! ## Debugging
//!
//! The engine logs through the `log` facade: routing decisions at `debug`,
//! per-line header verdicts at `trace`.

#[path = "engine/confidence.rs"]
mod confidence;
#[path = "engine/format.rs"]
mod format;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/preprocess.rs"]
mod preprocess;
#[path = "engine/scan.rs"]
mod scan;

pub(crate) use confidence::{clamp_confidence, needs_review, push_summary_missing, round_to_hundredths};
pub use format::InputFormat;
pub use metrics::{BlockTrace, LineTrace, RunMetrics, RunResult};
pub use parser::Parser;
pub(crate) use preprocess::{clean_lines, collapse_whitespace};
pub(crate) use scan::{LineFlags, ScannedLine, finite_number, numbers_in, scan_lines};
