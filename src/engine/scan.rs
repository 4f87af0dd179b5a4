//! Per-line scanning (coarse pre-classification).
//!
//! Every cleaned line is scanned once up front. The scan records cheap,
//! reusable facts (`LineFlags`) and the normalized alias key so the header,
//! summary and set rules never recompute them.
//!
//! ## Design notes
//!
//! - Flags are coarse: a rule that needs exact semantics still runs its own
//!   regex. A flag only has to be a faithful answer to its own question.
//! - `ALIAS_HIT` depends on the registry in use, which is why scanning takes
//!   the registry by reference instead of reaching for the built-in one.

use super::preprocess::is_hangul_syllable;
use crate::registry::{AliasRegistry, normalize_name_key};

bitflags::bitflags! {
    /// Coarse facts about a single cleaned line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineFlags: u16 {
        /// Contains an ASCII digit.
        const HAS_DIGITS  = 1 << 0;
        /// Contains an ASCII letter.
        const HAS_LATIN   = 1 << 1;
        /// Contains a Hangul syllable (가..힣).
        const HAS_HANGUL  = 1 << 2;
        /// Starts with `MAX Weight:` (case-insensitive).
        const MAX_WEIGHT  = 1 << 3;
        /// Starts with `Total Reps:` (case-insensitive).
        const TOTAL_REPS  = 1 << 4;
        /// Contains at least two numeric tokens.
        const MULTI_NUM   = 1 << 5;
        /// Contains a known exercise alias key.
        const ALIAS_HIT   = 1 << 6;
    }
}

/// A cleaned line plus everything the rules want to know about it.
#[derive(Debug, Clone)]
pub(crate) struct ScannedLine {
    pub index: usize,
    pub text: String,
    pub flags: LineFlags,
    /// Canonical name when `ALIAS_HIT` is set.
    pub alias: Option<String>,
}

impl ScannedLine {
    pub(crate) fn scan(index: usize, text: String, registry: &AliasRegistry) -> Self {
        let mut flags = LineFlags::empty();

        if text.bytes().any(|b| b.is_ascii_digit()) {
            flags |= LineFlags::HAS_DIGITS;
        }
        if text.bytes().any(|b| b.is_ascii_alphabetic()) {
            flags |= LineFlags::HAS_LATIN;
        }
        if text.chars().any(is_hangul_syllable) {
            flags |= LineFlags::HAS_HANGUL;
        }
        if regex!(r"(?i)^MAX Weight:").is_match(&text) {
            flags |= LineFlags::MAX_WEIGHT;
        }
        if regex!(r"(?i)^Total Reps:").is_match(&text) {
            flags |= LineFlags::TOTAL_REPS;
        }
        if numbers_in(&text).len() >= 2 {
            flags |= LineFlags::MULTI_NUM;
        }

        let alias = registry.lookup_key(&normalize_name_key(&text)).map(str::to_string);
        if alias.is_some() {
            flags |= LineFlags::ALIAS_HIT;
        }

        ScannedLine { index, text, flags, alias }
    }

    pub(crate) fn has(&self, flag: LineFlags) -> bool {
        self.flags.contains(flag)
    }

    pub(crate) fn numbers(&self) -> Vec<f64> {
        numbers_in(&self.text)
    }
}

/// Scan all cleaned lines against `registry`.
pub(crate) fn scan_lines(lines: Vec<String>, registry: &AliasRegistry) -> Vec<ScannedLine> {
    lines.into_iter().enumerate().map(|(index, text)| ScannedLine::scan(index, text, registry)).collect()
}

/// Every `123` or `12.5` token in `text`, in order. Runs too long to fit a
/// finite `f64` are skipped.
pub(crate) fn numbers_in(text: &str) -> Vec<f64> {
    regex!(r"[0-9]+(?:\.[0-9]+)?").find_iter(text).filter_map(|m| finite_number(m.as_str())).collect()
}

/// Parse a digit token, rejecting anything that overflows to infinity.
pub(crate) fn finite_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> ScannedLine {
        ScannedLine::scan(0, text.to_string(), AliasRegistry::builtin())
    }

    #[test]
    fn flags_describe_the_line() {
        let max = scan("MAX Weight: 60kg | 1RM: 81kg");
        assert!(max.has(LineFlags::MAX_WEIGHT | LineFlags::HAS_DIGITS | LineFlags::HAS_LATIN | LineFlags::MULTI_NUM));
        assert!(!max.has(LineFlags::HAS_HANGUL));

        let reps = scan("total reps: 45X");
        assert!(reps.has(LineFlags::TOTAL_REPS));
        assert!(!reps.has(LineFlags::MULTI_NUM));

        let header = scan("바벨 플랫 벤치 프레스");
        assert!(header.has(LineFlags::HAS_HANGUL | LineFlags::ALIAS_HIT));
        assert_eq!(header.alias.as_deref(), Some("바벨 플랫 벤치 프레스"));
    }

    #[test]
    fn numbers_keep_leading_zeros_and_decimals() {
        assert_eq!(numbers_in("015 20 더"), vec![15.0, 20.0]);
        assert_eq!(numbers_in("15 17.5 20"), vec![15.0, 17.5, 20.0]);
        assert_eq!(numbers_in("12X 10X"), vec![12.0, 10.0]);
        assert!(numbers_in("no digits").is_empty());
    }

    #[test]
    fn overlong_digit_runs_are_not_numbers() {
        let run = "9".repeat(400);
        assert_eq!(finite_number(&run), None);
        assert_eq!(numbers_in(&format!("1 {run} 2")), vec![1.0, 2.0]);
        assert!(!scan(&format!("{run} 40")).has(LineFlags::MULTI_NUM));
    }
}
