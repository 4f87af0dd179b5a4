use crate::engine::{LineFlags, ScannedLine};

/// Muscle-group words used as routine/split titles ("가슴 삼두", "back biceps").
const ROUTINE_MUSCLE_KEYWORDS: &[&str] = &[
    "가슴", "등", "하체", "어깨", "삼두", "이두", "복근", "코어", "전신", "cardio", "chest", "back", "legs", "shoulders",
    "triceps", "biceps", "core",
];

// --- Vetoes -------------------------------------------------------------------

/// `MAX Weight: 60kg | 1RM: 81kg`
pub fn is_max_weight_line(line: &ScannedLine) -> bool {
    line.has(LineFlags::MAX_WEIGHT)
}

/// `Total Reps: 45`
pub fn is_total_reps_line(line: &ScannedLine) -> bool {
    line.has(LineFlags::TOTAL_REPS)
}

/// Digits, dots and spaces only.
pub fn is_numeric_only(line: &ScannedLine) -> bool {
    regex!(r"^[0-9.\s]+$").is_match(&line.text)
}

/// Contains a `12x` / `12 X` rep-count token. Word boundaries are ASCII, so
/// Hangul glued to the token (`벤치10x`) still counts as a boundary.
pub fn has_rep_token(line: &ScannedLine) -> bool {
    regex!(r"(?i)(?-u:\b)[0-9]+\s*x(?-u:\b)").is_match(&line.text)
}

/// Contains one of the summary unit labels (`KCAL`, `min`, `kg`, `kg/min`,
/// `EXERCISES`, `sets`, `reps`) as a whole word.
pub fn has_summary_label(line: &ScannedLine) -> bool {
    regex!(r"(?i)(?-u:\b)(?:kcal|min|kg|exercises|sets|reps)(?-u:\b)").is_match(&line.text)
}

/// `2026.02.07` on its own.
pub fn is_bare_date(line: &ScannedLine) -> bool {
    regex!(r"^[0-9]{4}[./-][0-9]{2}[./-][0-9]{2}$").is_match(&line.text)
}

/// Any metric label word, even glued to other text (`15sets`).
pub fn has_metric_keyword(line: &ScannedLine) -> bool {
    regex!(r"(?i)workout|calories|duration|volume|exercises|sets|reps|intensity").is_match(&line.text)
}

/// Two or more numbers and no alias: a data row, not a name.
pub fn is_numeric_row(line: &ScannedLine) -> bool {
    line.has(LineFlags::MULTI_NUM) && !line.has(LineFlags::ALIAS_HIT)
}

pub fn has_top_badge(line: &ScannedLine) -> bool {
    regex!(r"(?i)top\s*[0-9]+%").is_match(&line.text)
}

/// At most four tokens, every one a muscle-group keyword.
pub fn is_routine_title(line: &ScannedLine) -> bool {
    let cleaned = regex!(r"[^A-Za-z0-9_가-힣\s]").replace_all(&line.text, " ").to_lowercase();
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > 4 {
        return false;
    }
    tokens.iter().all(|token| ROUTINE_MUSCLE_KEYWORDS.contains(token))
}

// --- Qualification failures ---------------------------------------------------

pub fn lacks_letters(line: &ScannedLine) -> bool {
    !line.flags.intersects(LineFlags::HAS_LATIN | LineFlags::HAS_HANGUL)
}

/// `ys`, `AN`, `abc`
pub fn is_short_latin_token(line: &ScannedLine) -> bool {
    regex!(r"(?i)^[a-z]{1,3}$").is_match(&line.text)
}

pub fn is_too_short_without_hangul(line: &ScannedLine) -> bool {
    !line.has(LineFlags::HAS_HANGUL) && line.text.chars().count() < 4
}

/// Latin-only lines must name a recognizable movement.
pub fn lacks_exercise_word(line: &ScannedLine) -> bool {
    !line.has(LineFlags::HAS_HANGUL)
        && !regex!(r"(?i)bench|press|curl|squat|pull|deadlift|row|raise|lunge").is_match(&line.text)
}
