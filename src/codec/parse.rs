use crate::engine::{clamp_confidence, finite_number, needs_review, push_summary_missing, round_to_hundredths};
use crate::model::{Meta, ParsedExercise, ParsedResult, ParsedSet, Summary, SummaryField, Warning};
use chrono::NaiveDate;

/// Confidence assumed when the text carries none.
const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Decode normalized text.
///
/// Returns `None` when the text has neither an exercise nor a date, which
/// tells the caller to parse it as raw OCR instead. Names are taken as
/// written; exercises without sets are dropped.
pub fn parse_normalized(text: &str) -> Option<ParsedResult> {
    let mut summary = Summary::default();
    let mut exercises: Vec<ParsedExercise> = Vec::new();
    let mut current: Option<ParsedExercise> = None;
    let mut confidence = DEFAULT_CONFIDENCE;
    let mut flagged = false;
    let mut warnings: Vec<Warning> = Vec::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(caps) = regex!(r"(?i)^\[EXERCISE\s+[0-9]+\]\s*(.+)$").captures(line) {
            flush(&mut current, &mut exercises);
            current = Some(ParsedExercise { raw_name: caps[1].to_string(), sets: Vec::new() });
            continue;
        }

        if let Some(exercise) = current.as_mut() {
            if let Some(set) = set_line(line) {
                exercise.sets.push(set);
                continue;
            }
        }

        let Some(caps) = regex!(r"(?i)^([a-z_]+)\s*=\s*(.+)$").captures(line) else {
            continue;
        };
        let key = caps[1].to_lowercase();
        let value = caps[2].trim();

        match key.as_str() {
            "date" => summary.date = date_value(value),
            "confidence" => {
                if let Some(parsed) = number_value(value) {
                    confidence = clamp_confidence(parsed);
                }
            }
            "needs_review" => flagged = value.eq_ignore_ascii_case("true"),
            "warnings" => warnings = warning_list(value),
            other => {
                if let Some(slot) = SummaryField::from_key(other).and_then(|field| summary.metric_mut(field)) {
                    *slot = number_value(value);
                }
            }
        }
    }
    flush(&mut current, &mut exercises);

    if exercises.is_empty() && summary.date.is_none() {
        return None;
    }

    let missing = push_summary_missing(&summary, &mut warnings);
    let meta = Meta {
        confidence: round_to_hundredths(confidence),
        needs_review: flagged || needs_review(missing, warnings.len()),
        warnings,
    };
    Some(ParsedResult { summary, exercises, meta })
}

fn flush(current: &mut Option<ParsedExercise>, exercises: &mut Vec<ParsedExercise>) {
    if let Some(exercise) = current.take().filter(|exercise| !exercise.sets.is_empty()) {
        exercises.push(exercise);
    }
}

/// `set2: weight=17.5kg reps=12` / `set1: weight=bodyweight reps=15`
fn set_line(line: &str) -> Option<ParsedSet> {
    let caps = regex!(
        r"(?i)^set[0-9]+\s*:\s*weight\s*=\s*([0-9]+(?:\.[0-9]+)?|bodyweight)(?:kg)?\s*reps\s*=\s*([0-9]+)$"
    )
    .captures(line)?;
    let reps = caps[2].parse::<u32>().ok()?;
    let weight = &caps[1];
    if weight.eq_ignore_ascii_case("bodyweight") {
        Some(ParsedSet::bodyweight(reps))
    } else {
        finite_number(weight).map(|weight| ParsedSet::weighted(weight, reps))
    }
}

fn date_value(value: &str) -> Option<NaiveDate> {
    if !regex!(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Leading number of `value` (`185kcal` reads as 185); `unknown` and text
/// without a leading number read as `None`.
fn number_value(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("unknown") {
        return None;
    }
    regex!(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)")
        .find(value)
        .and_then(|m| finite_number(m.as_str()))
}

/// Comma-separated tags. A `summary_missing` tag lists its fields with commas
/// too, so bare field names following it are folded back into it.
fn warning_list(value: &str) -> Vec<Warning> {
    let mut warnings: Vec<Warning> = Vec::new();
    for tag in value.split(',').map(str::trim).filter(|tag| !tag.is_empty()) {
        if let (Some(field), Some(Warning::SummaryMissing(fields))) = (SummaryField::from_key(tag), warnings.last_mut())
        {
            fields.push(field);
            continue;
        }
        warnings.push(Warning::from_tag(tag));
    }
    warnings
}
