use crate::engine::collapse_whitespace;
use crate::model::{ParsedResult, ParsedSet, SummaryField};

const UNKNOWN: &str = "unknown";

/// Render `parsed` as normalized text; `raw_text` only feeds the `split` line.
pub fn to_normalized_text(parsed: &ParsedResult, raw_text: &str) -> String {
    let mut lines: Vec<String> = vec![
        "[SUMMARY]".to_string(),
        format!("split={}", detect_split(raw_text)),
        "weight_unit=kg".to_string(),
    ];

    for field in SummaryField::ALL {
        let value = match field {
            SummaryField::Date => parsed.summary.date.map(|date| date.format("%Y-%m-%d").to_string()),
            other => parsed.summary.metric(other).map(|value| value.to_string()),
        };
        lines.push(format!("{field}={}", value.as_deref().unwrap_or(UNKNOWN)));
    }
    lines.push(String::new());

    for (idx, exercise) in parsed.exercises.iter().enumerate() {
        lines.push(format!("[EXERCISE {}] {}", idx + 1, exercise.raw_name));
        for (set_idx, set) in exercise.sets.iter().enumerate() {
            lines.push(format!("set{}: weight={} reps={}", set_idx + 1, weight_token(set), set.reps));
        }
        lines.push(String::new());
    }

    let warnings: Vec<String> = parsed.meta.warnings.iter().map(ToString::to_string).collect();
    lines.push("[META]".to_string());
    lines.push(format!("confidence={}", parsed.meta.confidence));
    lines.push(format!("needs_review={}", parsed.meta.needs_review));
    lines.push(format!("warnings={}", warnings.join(",")));

    lines.join("\n").trim().to_string()
}

fn weight_token(set: &ParsedSet) -> String {
    match set.weight_kg {
        Some(weight) => format!("{weight}kg"),
        None => "bodyweight".to_string(),
    }
}

/// The routine title of a screenshot (`가슴 삼두` -> `가슴/삼두`): the first
/// line mentioning a muscle group, or `unknown`.
pub fn detect_split(raw_text: &str) -> String {
    raw_text
        .lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .find(|line| regex!(r"(?i)가슴|등|하체|어깨|삼두|이두|복근|코어").is_match(line))
        .map(|line| line.replace(' ', "/"))
        .unwrap_or_else(|| UNKNOWN.to_string())
}
