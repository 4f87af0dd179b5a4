//! Input format sniffing.

use serde::Serialize;
use std::fmt;

/// The literal tag that marks normalized text.
pub(crate) const SUMMARY_TAG: &str = "[SUMMARY]";

/// Which parse routine an input is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// `[SUMMARY]/[EXERCISE n]/[META]` text produced by the codec (or by the
    /// external normalization step that speaks it).
    Normalized,
    /// Raw OCR text scraped from a screenshot.
    RawOcr,
}

impl InputFormat {
    /// Pure sniff: the presence of the literal `[SUMMARY]` tag decides.
    pub fn sniff(input: &str) -> InputFormat {
        if input.contains(SUMMARY_TAG) { InputFormat::Normalized } else { InputFormat::RawOcr }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InputFormat::Normalized => "normalized",
            InputFormat::RawOcr => "raw_ocr",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_on_the_literal_tag_only() {
        assert_eq!(InputFormat::sniff("[SUMMARY]\ndate=2026-02-07"), InputFormat::Normalized);
        assert_eq!(InputFormat::sniff("noise [SUMMARY] noise"), InputFormat::Normalized);
        assert_eq!(InputFormat::sniff("[summary]\ndate=2026-02-07"), InputFormat::RawOcr);
        assert_eq!(InputFormat::sniff("2026.02.07\n238 KCAL"), InputFormat::RawOcr);
    }
}
