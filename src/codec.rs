//! Normalized text codec.
//!
//! A line-oriented text form of [`ParsedResult`] used as the interchange
//! format with the external normalization step. Whatever the serializer
//! writes, the parser reads back.
//!
//! ```text
//! [SUMMARY]
//! split=가슴/삼두
//! weight_unit=kg
//! date=2026-02-01                 YYYY-MM-DD or unknown
//! calories_kcal=185               number or unknown (same for the six below)
//! ...
//!
//! [EXERCISE 1] 라잉 덤벨 풀오버
//! set1: weight=6kg reps=12        weight=<n>kg | weight=bodyweight
//!
//! [META]
//! confidence=0.92
//! needs_review=true
//! warnings=sets_count_mismatch:스쿼트
//! ```
//!
//! `split` and `weight_unit` are informational and ignored on the way back.

#[path = "codec/parse.rs"]
mod parse;
#[path = "codec/serialize.rs"]
mod serialize;

pub use parse::parse_normalized;
pub use serialize::{detect_split, to_normalized_text};

use crate::model::{ParsedResult, Warning};
use serde::{Deserialize, Serialize};

/// Normalized text of a parse plus the meta a caller usually wants next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizeOcrResult {
    pub normalized_text: String,
    pub confidence: f64,
    pub needs_review: bool,
    pub warnings: Vec<Warning>,
}

impl NormalizeOcrResult {
    /// Serialize `parsed`, taking `split` from `raw_text`.
    pub fn from_parsed(parsed: &ParsedResult, raw_text: &str) -> Self {
        NormalizeOcrResult {
            normalized_text: to_normalized_text(parsed, raw_text),
            confidence: parsed.meta.confidence,
            needs_review: parsed.meta.needs_review,
            warnings: parsed.meta.warnings.clone(),
        }
    }
}
