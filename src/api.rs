use crate::codec::NormalizeOcrResult;
use crate::engine::{self, BlockTrace, InputFormat, LineTrace};
use crate::model::{ParsedResult, SummaryField};
use crate::registry::{AliasOverride, AliasRegistry};
use serde::Serialize;
use std::time::Duration;

/// Options that affect a single parse.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Exact-key name overrides applied after parsing. They beat the
    /// registry's canonicalization on either route.
    pub alias_overrides: Vec<AliasOverride>,
}

/// Additional details returned by [`parse_verbose_with`].
///
/// Meant for debugging heuristics: which rule rejected each line, how each
/// block was read, and where the time went. Line and block traces are empty
/// when the input decoded as normalized text.
#[derive(Debug, Clone, Serialize)]
pub struct ParseDetails {
    /// Route the input took.
    pub format: InputFormat,
    pub total: Duration,
    pub codec: Duration,
    pub scan: Duration,
    pub classify: Duration,
    pub sets: Duration,
    pub lines: Vec<LineTrace>,
    pub blocks: Vec<BlockTrace>,
    /// Summary fields recovered from a metric label row.
    pub label_row_fields: Vec<SummaryField>,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub result: ParsedResult,
    pub elapsed: Duration,
    pub details: ParseDetails,
}

/// The process-wide built-in alias registry.
pub fn default_registry() -> &'static AliasRegistry {
    AliasRegistry::builtin()
}

/// Parse OCR text (or normalized text) with the built-in registry.
///
/// # Example
/// ```
/// use liftscan::parse;
///
/// let out = parse("2026.02.07\n238 KCAL 54 min 7402 kg\n벤치프레스\n20 40 60\n12X 10X 8X");
/// assert_eq!(out.summary.calories_kcal, Some(238.0));
/// assert_eq!(out.exercises[0].raw_name, "바벨 플랫 벤치 프레스");
/// assert_eq!(out.exercises[0].sets.len(), 3);
/// assert!(out.meta.needs_review);
/// ```
pub fn parse(text: &str) -> ParsedResult {
    parse_with(text, &Options::default())
}

/// Parse `text` with the built-in registry and the given `options`.
pub fn parse_with(text: &str, options: &Options) -> ParsedResult {
    parse_with_registry(text, default_registry(), options)
}

/// Parse `text` against a caller-built registry.
///
/// ```
/// use liftscan::{AliasEntry, AliasRegistry, Options, parse_with_registry};
///
/// let registry = AliasRegistry::new(vec![AliasEntry::new("Kettlebell Swing", ["케틀벨스윙", "kb swing"])]).unwrap();
/// let out = parse_with_registry("KB Swing\n24 24\n15X 15X", &registry, &Options::default());
/// assert_eq!(out.exercises[0].raw_name, "Kettlebell Swing");
/// ```
pub fn parse_with_registry(text: &str, registry: &AliasRegistry, options: &Options) -> ParsedResult {
    engine::Parser::new(text, registry).run(options)
}

/// Parse `text` and return traces and timings along with the record.
///
/// The default [`parse_with`] path does not allocate these traces.
pub fn parse_verbose_with(text: &str, options: &Options) -> ParseResultVerbose {
    let run = engine::Parser::new(text, default_registry()).run_with_metrics(options);

    let details = ParseDetails {
        format: run.format,
        total: run.metrics.total,
        codec: run.metrics.codec,
        scan: run.metrics.scan,
        classify: run.metrics.classify,
        sets: run.metrics.sets,
        lines: run.lines,
        blocks: run.blocks,
        label_row_fields: run.label_row_fields,
    };

    ParseResultVerbose { result: run.result, elapsed: run.metrics.total, details }
}

/// Parse raw OCR text and re-emit it as normalized text.
///
/// ```
/// use liftscan::normalize_ocr_text;
///
/// let out = normalize_ocr_text("가슴 삼두\n2026.02.01\n덤벨 인클라인 벤치 프레스\n17.5 20 20 20\n12X 12X 12X 12X");
/// assert!(out.normalized_text.contains("split=가슴/삼두"));
/// assert!(out.normalized_text.contains("[EXERCISE 1] 덤벨 인클라인 벤치 프레스"));
/// assert!(out.normalized_text.contains("set1: weight=17.5kg reps=12"));
/// ```
pub fn normalize_ocr_text(raw_text: &str) -> NormalizeOcrResult {
    NormalizeOcrResult::from_parsed(&parse(raw_text), raw_text)
}
