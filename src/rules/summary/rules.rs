use crate::engine::finite_number;
use crate::model::SummaryField;
use crate::rules::summary::helpers::first_int;

/// A summary metric read straight from its unit label (`238 KCAL`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct DirectRule {
    pub field: SummaryField,
    pub extract: fn(&str) -> Option<f64>,
}

/// A row of four metric labels whose values sit on the line just above it.
///
/// `slots[i]` names the field the i-th number of the value line feeds, or
/// `None` when that column is not a summary metric (the workout counter).
#[derive(Debug, Clone, Copy)]
pub(crate) struct LabelRow {
    pub name: &'static str,
    pub labels: [&'static str; 4],
    pub slots: [Option<SummaryField>; 4],
}

pub(crate) static DIRECT_RULES: &[DirectRule] = &[
    DirectRule { field: SummaryField::CaloriesKcal, extract: calories },
    DirectRule { field: SummaryField::DurationMin, extract: duration },
    DirectRule { field: SummaryField::VolumeKg, extract: volume },
    DirectRule { field: SummaryField::ExercisesCount, extract: exercises },
    DirectRule { field: SummaryField::SetsTotal, extract: sets },
    DirectRule { field: SummaryField::RepsTotal, extract: reps },
    DirectRule { field: SummaryField::IntensityKgPerMin, extract: intensity },
];

pub(crate) static LABEL_ROWS: &[LabelRow] = &[
    LabelRow {
        name: "top",
        labels: ["workout", "calories", "duration", "volume"],
        slots: [None, Some(SummaryField::CaloriesKcal), Some(SummaryField::DurationMin), Some(SummaryField::VolumeKg)],
    },
    LabelRow {
        name: "bottom",
        labels: ["exercises", "sets", "reps", "intensity"],
        slots: [
            Some(SummaryField::ExercisesCount),
            Some(SummaryField::SetsTotal),
            Some(SummaryField::RepsTotal),
            Some(SummaryField::IntensityKgPerMin),
        ],
    },
];

fn calories(text: &str) -> Option<f64> {
    first_int(regex!(r"(?i)([0-9]+)\s*KCAL(?-u:\b)"), text)
}

fn duration(text: &str) -> Option<f64> {
    first_int(regex!(r"(?i)([0-9]+)\s*min(?-u:\b)"), text)
}

/// `7402 kg`, but not the `kg/min` of the intensity label.
fn volume(text: &str) -> Option<f64> {
    let per_min = regex!(r"(?i)^\s*/\s*min");
    regex!(r"(?i)([0-9]+)\s*kg")
        .captures_iter(text)
        .find(|caps| caps.get(0).is_some_and(|m| !per_min.is_match(&text[m.end()..])))
        .and_then(|caps| finite_number(&caps[1]))
}

fn intensity(text: &str) -> Option<f64> {
    first_int(regex!(r"(?i)([0-9]+)\s*kg\s*/\s*min"), text)
}

fn exercises(text: &str) -> Option<f64> {
    first_int(regex!(r"(?i)([0-9]+)\s*EXERCISES"), text)
}

fn sets(text: &str) -> Option<f64> {
    first_int(regex!(r"(?i)([0-9]+)\s*sets"), text)
}

fn reps(text: &str) -> Option<f64> {
    first_int(regex!(r"(?i)([0-9]+)\s*reps"), text)
}
