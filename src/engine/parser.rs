//! Routing and the heuristic parse.
//!
//! `Parser` is the operational core of the engine:
//!
//! - Sniff the input format and route it (see `format.rs`).
//! - For normalized text, decode it with the codec. Text that carries the tag
//!   but decodes to nothing is re-routed to the heuristic parse.
//! - For raw OCR text, clean and scan lines, classify headers, extract the
//!   summary, read every exercise block and score the result.
//! - Apply caller-supplied alias overrides last, whatever the route.
//!
//! ## Block slicing
//!
//! ```text
//! line:  0 1 2 3 4 5 6 7 8 9
//! head:        H       H
//!        └─────┘└─────┘└───┘
//!        summary block0 block1
//! ```
//!
//! The output is deterministic for the same input, registry and options.

use super::confidence::finalize_meta;
use super::format::InputFormat;
use super::metrics::{BlockTrace, LineTrace, RunMetrics, RunResult};
use super::preprocess::clean_lines;
use super::scan::{ScannedLine, scan_lines};
use crate::Options;
use crate::codec;
use crate::model::{ParsedExercise, ParsedResult, SummaryField};
use crate::registry::{AliasRegistry, apply_alias_overrides};
use crate::rules::header::{HeaderVerdict, classify_all};
use crate::rules::sets::extract_sets;
use crate::rules::summary::{SummaryExtraction, extract_summary};
use std::time::Instant;

/// Parser over a single input, bound to an alias registry.
///
/// ```text
/// new() -> run() / run_with_metrics()
///            ├─ Normalized: codec::parse_normalized ──(None)──┐
///            └─ RawOcr: parse_raw ◀───────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    input: &'a str,
    registry: &'a AliasRegistry,
}

/// Traces gathered along the heuristic route.
#[derive(Debug, Default)]
struct Traces {
    lines: Vec<LineTrace>,
    blocks: Vec<BlockTrace>,
    label_row_fields: Vec<SummaryField>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, registry: &'a AliasRegistry) -> Self {
        Parser { input, registry }
    }

    /// Parse the input. Never fails; gaps end up in `meta.warnings`.
    pub fn run(&self, options: &Options) -> ParsedResult {
        self.execute(options, false).result
    }

    /// Like [`Parser::run`], also returning timings and per-line/per-block traces.
    pub fn run_with_metrics(&self, options: &Options) -> RunResult {
        self.execute(options, true)
    }

    fn execute(&self, options: &Options, collect: bool) -> RunResult {
        let started = Instant::now();
        let mut metrics = RunMetrics::default();
        let mut traces = Traces::default();

        let mut format = InputFormat::sniff(self.input);
        log::debug!("[route] sniffed {format}");

        let decoded = match format {
            InputFormat::Normalized => {
                let codec_started = Instant::now();
                let decoded = codec::parse_normalized(self.input);
                metrics.codec = codec_started.elapsed();
                if decoded.is_none() {
                    log::debug!("[route] tagged input has no date and no exercises; parsing as raw OCR");
                    format = InputFormat::RawOcr;
                }
                decoded
            }
            InputFormat::RawOcr => None,
        };

        let mut result = match decoded {
            Some(result) => result,
            None => self.parse_raw(&mut metrics, &mut traces, collect),
        };

        if !options.alias_overrides.is_empty() {
            result = apply_alias_overrides(result, &options.alias_overrides);
        }

        metrics.total = started.elapsed();
        RunResult {
            result,
            format,
            metrics,
            lines: traces.lines,
            blocks: traces.blocks,
            label_row_fields: traces.label_row_fields,
        }
    }

    fn parse_raw(&self, metrics: &mut RunMetrics, traces: &mut Traces, collect: bool) -> ParsedResult {
        let phase = Instant::now();
        let lines = scan_lines(clean_lines(self.input), self.registry);
        metrics.scan = phase.elapsed();

        let phase = Instant::now();
        let verdicts = classify_all(&lines);
        let headers: Vec<usize> =
            verdicts.iter().enumerate().filter(|(_, verdict)| verdict.is_header()).map(|(idx, _)| idx).collect();
        let first_header = headers.first().copied().unwrap_or(lines.len());
        let SummaryExtraction { summary, from_label_rows } = extract_summary(&lines, first_header);
        metrics.classify = phase.elapsed();
        log::debug!("[parse] {} lines, {} headers, summary scope {first_header}", lines.len(), headers.len());

        let phase = Instant::now();
        let mut exercises = Vec::new();
        let mut warnings = Vec::new();
        for (pos, &header_idx) in headers.iter().enumerate() {
            let end = headers.get(pos + 1).copied().unwrap_or(lines.len());
            let header = &lines[header_idx];
            let block = &lines[header_idx + 1..end];

            let outcome = extract_sets(&header.text, block);
            let name = self.registry.canonicalize(&header.text);
            let kept = !outcome.sets.is_empty();
            log::debug!("[block] \"{}\" -> \"{name}\": {:?}, {} sets", header.text, outcome.mode, outcome.sets.len());

            if collect {
                traces.blocks.push(BlockTrace {
                    header_index: header_idx,
                    header: header.text.clone(),
                    name: name.clone(),
                    mode: outcome.mode,
                    lines: block.len(),
                    sets: outcome.sets.len(),
                    max_weight: outcome.max_weight,
                    inferred_by: outcome.inferred_by,
                    kept,
                });
            }

            warnings.extend(outcome.warning);
            if kept {
                exercises.push(ParsedExercise { raw_name: name, sets: outcome.sets });
            }
        }
        metrics.sets = phase.elapsed();

        if collect {
            traces.lines = lines.iter().zip(&verdicts).map(|(line, verdict)| line_trace(line, *verdict)).collect();
            traces.label_row_fields = from_label_rows;
        }

        let meta = finalize_meta(&summary, warnings);
        ParsedResult { summary, exercises, meta }
    }
}

fn line_trace(line: &ScannedLine, verdict: HeaderVerdict) -> LineTrace {
    let (header, rejected_by) = match verdict {
        HeaderVerdict::Header(source) => (Some(source), None),
        HeaderVerdict::Data { rule } => (None, Some(rule)),
    };
    LineTrace { index: line.index, text: line.text.clone(), header, rejected_by }
}
