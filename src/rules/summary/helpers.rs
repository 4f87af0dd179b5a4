use crate::engine::finite_number;
use crate::model::SummaryField;
use chrono::NaiveDate;

/// Plausibility ceiling for a metric read from a label row.
pub fn ceiling(field: SummaryField) -> f64 {
    match field {
        SummaryField::CaloriesKcal => 999.0,
        SummaryField::DurationMin => 300.0,
        SummaryField::VolumeKg => 50_000.0,
        SummaryField::ExercisesCount => 100.0,
        SummaryField::SetsTotal => 300.0,
        SummaryField::RepsTotal => 5_000.0,
        SummaryField::IntensityKgPerMin => 5_000.0,
        SummaryField::Date => f64::INFINITY,
    }
}

/// Undo OCR digit fusion: drop trailing digits while the value is above the
/// field's ceiling (`23841` calories becomes `238`). Non-finite input is
/// returned as is.
pub fn sanitize_metric(field: SummaryField, value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return value;
    }
    let limit = ceiling(field);
    let mut sanitized = value;
    while sanitized > limit && sanitized >= 10.0 {
        sanitized = (sanitized / 10.0).floor();
    }
    sanitized
}

/// First `20YY.MM.DD` (or `-`, `/`) that is a real calendar date.
pub fn find_date(text: &str) -> Option<NaiveDate> {
    regex!(r"(20[0-9]{2})[./-]([0-9]{2})[./-]([0-9]{2})").captures_iter(text).find_map(|caps| {
        let year = caps[1].parse::<i32>().ok()?;
        let month = caps[2].parse::<u32>().ok()?;
        let day = caps[3].parse::<u32>().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

/// Leading integer capture of `re` in `text`.
pub fn first_int(re: &regex::Regex, text: &str) -> Option<f64> {
    re.captures(text).and_then(|caps| caps.get(1)).and_then(|m| finite_number(m.as_str()))
}

pub fn line_has_all_keywords(line: &str, keywords: &[&str]) -> bool {
    let lowered = line.to_lowercase();
    keywords.iter().all(|keyword| lowered.contains(keyword))
}
