//! Exercise header classification.
//!
//! Each cleaned line is either an exercise name (a *header*) or data. Header
//! lines delimit exercise blocks: a block runs from just after its header up
//! to the next header or the end of the text.
//!
//! ```text
//! line ──▶ ALIAS_HIT? ── yes ──▶ Header(Alias)          alias hits are authoritative
//!              │
//!              no
//!              v
//!          VETO_CHAIN ── first veto fires ──▶ Data { rule }
//!              │
//!          QUALIFICATION_CHAIN ── first failure ──▶ Data { rule }
//!              │
//!              v
//!          Header(Heuristic)
//! ```
//!
//! Both chains are ordered lists of named predicates, so a single rule can be
//! tested (and traced) on its own.

pub(crate) mod predicates;
mod rules;
#[cfg(test)]
mod tests;

use crate::engine::{LineFlags, ScannedLine};
use serde::Serialize;

pub(crate) use rules::{QUALIFICATION_CHAIN, VETO_CHAIN};

/// A named line predicate. When `test` returns true the line is not a header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VetoRule {
    pub name: &'static str,
    pub test: fn(&ScannedLine) -> bool,
}

/// Why a line was accepted as a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderSource {
    /// The line contains a known alias key.
    Alias,
    /// The line survived the veto and qualification chains.
    Heuristic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderVerdict {
    Header(HeaderSource),
    Data { rule: &'static str },
}

impl HeaderVerdict {
    pub(crate) fn is_header(self) -> bool {
        matches!(self, HeaderVerdict::Header(_))
    }
}

/// Name of the first veto or qualification rule that rejects `line`.
pub(crate) fn first_rejection(line: &ScannedLine) -> Option<&'static str> {
    VETO_CHAIN.iter().chain(QUALIFICATION_CHAIN.iter()).find(|rule| (rule.test)(line)).map(|rule| rule.name)
}

pub(crate) fn classify(line: &ScannedLine) -> HeaderVerdict {
    if line.has(LineFlags::ALIAS_HIT) {
        return HeaderVerdict::Header(HeaderSource::Alias);
    }
    match first_rejection(line) {
        Some(rule) => HeaderVerdict::Data { rule },
        None => HeaderVerdict::Header(HeaderSource::Heuristic),
    }
}

/// Classify every line; the result is parallel to `lines`.
pub(crate) fn classify_all(lines: &[ScannedLine]) -> Vec<HeaderVerdict> {
    lines
        .iter()
        .map(|line| {
            let verdict = classify(line);
            log::trace!("[header] #{} {:?} \"{}\"", line.index, verdict, line.text);
            verdict
        })
        .collect()
}
