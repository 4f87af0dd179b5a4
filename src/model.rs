//! Output data model.
//!
//! [`ParsedResult`] is the only thing the engine hands back. Every field is
//! best-effort: summary values are `None` when they could not be recovered and
//! the gaps are reported through [`Meta::warnings`].

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A parsed workout record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedResult {
    pub summary: Summary,
    /// Exercises in the order they appear in the source text.
    pub exercises: Vec<ParsedExercise>,
    pub meta: Meta,
}

/// Aggregate metrics shown at the top of a workout screenshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub date: Option<NaiveDate>,
    pub calories_kcal: Option<f64>,
    pub duration_min: Option<f64>,
    pub volume_kg: Option<f64>,
    pub exercises_count: Option<f64>,
    pub sets_total: Option<f64>,
    pub reps_total: Option<f64>,
    pub intensity_kg_per_min: Option<f64>,
}

/// Names of the [`Summary`] fields, in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryField {
    Date,
    CaloriesKcal,
    DurationMin,
    VolumeKg,
    ExercisesCount,
    SetsTotal,
    RepsTotal,
    IntensityKgPerMin,
}

impl SummaryField {
    pub const ALL: [SummaryField; 8] = [
        SummaryField::Date,
        SummaryField::CaloriesKcal,
        SummaryField::DurationMin,
        SummaryField::VolumeKg,
        SummaryField::ExercisesCount,
        SummaryField::SetsTotal,
        SummaryField::RepsTotal,
        SummaryField::IntensityKgPerMin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SummaryField::Date => "date",
            SummaryField::CaloriesKcal => "calories_kcal",
            SummaryField::DurationMin => "duration_min",
            SummaryField::VolumeKg => "volume_kg",
            SummaryField::ExercisesCount => "exercises_count",
            SummaryField::SetsTotal => "sets_total",
            SummaryField::RepsTotal => "reps_total",
            SummaryField::IntensityKgPerMin => "intensity_kg_per_min",
        }
    }

    pub fn from_key(key: &str) -> Option<SummaryField> {
        SummaryField::ALL.into_iter().find(|field| field.as_str() == key)
    }
}

impl fmt::Display for SummaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Summary {
    /// Numeric value of `field`. Always `None` for [`SummaryField::Date`].
    pub fn metric(&self, field: SummaryField) -> Option<f64> {
        match field {
            SummaryField::Date => None,
            SummaryField::CaloriesKcal => self.calories_kcal,
            SummaryField::DurationMin => self.duration_min,
            SummaryField::VolumeKg => self.volume_kg,
            SummaryField::ExercisesCount => self.exercises_count,
            SummaryField::SetsTotal => self.sets_total,
            SummaryField::RepsTotal => self.reps_total,
            SummaryField::IntensityKgPerMin => self.intensity_kg_per_min,
        }
    }

    /// Mutable slot for a numeric field; `None` for [`SummaryField::Date`].
    pub fn metric_mut(&mut self, field: SummaryField) -> Option<&mut Option<f64>> {
        match field {
            SummaryField::Date => None,
            SummaryField::CaloriesKcal => Some(&mut self.calories_kcal),
            SummaryField::DurationMin => Some(&mut self.duration_min),
            SummaryField::VolumeKg => Some(&mut self.volume_kg),
            SummaryField::ExercisesCount => Some(&mut self.exercises_count),
            SummaryField::SetsTotal => Some(&mut self.sets_total),
            SummaryField::RepsTotal => Some(&mut self.reps_total),
            SummaryField::IntensityKgPerMin => Some(&mut self.intensity_kg_per_min),
        }
    }

    pub fn is_present(&self, field: SummaryField) -> bool {
        match field {
            SummaryField::Date => self.date.is_some(),
            other => self.metric(other).is_some(),
        }
    }

    /// Fields that are still `None`, in canonical order.
    pub fn missing_fields(&self) -> Vec<SummaryField> {
        SummaryField::ALL.into_iter().filter(|field| !self.is_present(*field)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedExercise {
    pub raw_name: String,
    pub sets: Vec<ParsedSet>,
}

/// One set. `weight_kg == None` means bodyweight only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParsedSet {
    pub weight_kg: Option<f64>,
    pub reps: u32,
}

impl ParsedSet {
    pub fn weighted(weight_kg: f64, reps: u32) -> Self {
        ParsedSet { weight_kg: Some(weight_kg), reps }
    }

    pub fn bodyweight(reps: u32) -> Self {
        ParsedSet { weight_kg: None, reps }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Always within `[0.05, 1.0]`.
    pub confidence: f64,
    pub needs_review: bool,
    pub warnings: Vec<Warning>,
}

impl Default for Meta {
    fn default() -> Self {
        Meta { confidence: 1.0, needs_review: false, warnings: Vec::new() }
    }
}

/// A colon-delimited warning tag such as `sets_count_mismatch:스쿼트`.
///
/// Tags that are not produced by this engine (for example ones coming back
/// from the normalization step) survive as [`Warning::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Warning {
    SummaryMissing(Vec<SummaryField>),
    SetsCountMismatch(String),
    RepsOnlySetsTooShort(String),
    Other(String),
}

const SUMMARY_MISSING: &str = "summary_missing";
const SETS_COUNT_MISMATCH: &str = "sets_count_mismatch";
const REPS_ONLY_SETS_TOO_SHORT: &str = "reps_only_sets_too_short";

impl Warning {
    pub fn is_summary_missing(&self) -> bool {
        matches!(self, Warning::SummaryMissing(_))
    }

    /// Parse a tag, keeping anything unrecognized verbatim.
    pub fn from_tag(tag: &str) -> Warning {
        let Some((kind, detail)) = tag.split_once(':') else {
            return Warning::Other(tag.to_string());
        };

        match kind {
            SUMMARY_MISSING => {
                let fields: Option<Vec<SummaryField>> =
                    detail.split(',').map(|key| SummaryField::from_key(key.trim())).collect();
                match fields {
                    Some(fields) if !fields.is_empty() => Warning::SummaryMissing(fields),
                    _ => Warning::Other(tag.to_string()),
                }
            }
            SETS_COUNT_MISMATCH => Warning::SetsCountMismatch(detail.to_string()),
            REPS_ONLY_SETS_TOO_SHORT => Warning::RepsOnlySetsTooShort(detail.to_string()),
            _ => Warning::Other(tag.to_string()),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::SummaryMissing(fields) => {
                let keys: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
                write!(f, "{SUMMARY_MISSING}:{}", keys.join(","))
            }
            Warning::SetsCountMismatch(name) => write!(f, "{SETS_COUNT_MISMATCH}:{name}"),
            Warning::RepsOnlySetsTooShort(name) => write!(f, "{REPS_ONLY_SETS_TOO_SHORT}:{name}"),
            Warning::Other(tag) => f.write_str(tag),
        }
    }
}

impl From<String> for Warning {
    fn from(value: String) -> Self {
        Warning::from_tag(&value)
    }
}

impl From<Warning> for String {
    fn from(value: Warning) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("summary_missing:date,calories_kcal", Warning::SummaryMissing(vec![SummaryField::Date, SummaryField::CaloriesKcal]))]
    #[case("sets_count_mismatch:)겨 J a", Warning::SetsCountMismatch(")겨 J a".to_string()))]
    #[case("reps_only_sets_too_short:풀 업", Warning::RepsOnlySetsTooShort("풀 업".to_string()))]
    #[case("summary_missing:weight", Warning::Other("summary_missing:weight".to_string()))]
    #[case("low_light", Warning::Other("low_light".to_string()))]
    fn warning_tags_parse_and_print_back(#[case] tag: &str, #[case] expected: Warning) {
        let parsed = Warning::from_tag(tag);
        assert_eq!(parsed, expected);
        assert_eq!(parsed.to_string(), tag);
    }

    #[test]
    fn missing_fields_follow_canonical_order() {
        let summary = Summary { calories_kcal: Some(238.0), volume_kg: Some(7402.0), ..Summary::default() };

        assert_eq!(
            summary.missing_fields(),
            vec![
                SummaryField::Date,
                SummaryField::DurationMin,
                SummaryField::ExercisesCount,
                SummaryField::SetsTotal,
                SummaryField::RepsTotal,
                SummaryField::IntensityKgPerMin,
            ]
        );
    }

    #[test]
    fn serializes_to_the_collaborator_json_shape() {
        let result = ParsedResult {
            summary: Summary {
                date: NaiveDate::from_ymd_opt(2026, 2, 7),
                calories_kcal: Some(238.0),
                ..Summary::default()
            },
            exercises: vec![ParsedExercise { raw_name: "풀 업".to_string(), sets: vec![ParsedSet::bodyweight(15)] }],
            meta: Meta {
                confidence: 0.4,
                needs_review: true,
                warnings: vec![Warning::SummaryMissing(vec![SummaryField::DurationMin])],
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["summary"]["date"], "2026-02-07");
        assert_eq!(json["summary"]["duration_min"], serde_json::Value::Null);
        assert_eq!(json["exercises"][0]["sets"][0]["weight_kg"], serde_json::Value::Null);
        assert_eq!(json["meta"]["warnings"][0], "summary_missing:duration_min");

        let back: ParsedResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
