//! User-maintained alias overrides.
//!
//! Overrides are persisted outside this crate and handed in as plain rows.
//! They run after parsing as an exact-key pass and beat the built-in
//! canonicalization.

use super::normalize_name_key;
use crate::model::ParsedResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One override row: an already-normalized alias key and the name to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasOverride {
    pub alias_key: String,
    pub canonical_name: String,
}

impl AliasOverride {
    pub fn new(alias_key: impl Into<String>, canonical_name: impl Into<String>) -> Self {
        AliasOverride { alias_key: alias_key.into(), canonical_name: canonical_name.into() }
    }

    /// Build an override from the alias as the user typed it; the key is
    /// derived with [`normalize_name_key`].
    pub fn from_raw(alias_raw: &str, canonical_name: &str) -> Self {
        AliasOverride { alias_key: normalize_name_key(alias_raw), canonical_name: canonical_name.trim().to_string() }
    }
}

/// Replace `raw_name`s whose normalized key exactly equals an override key.
///
/// When two rows share a key the later one wins.
pub fn apply_alias_overrides(mut parsed: ParsedResult, overrides: &[AliasOverride]) -> ParsedResult {
    if overrides.is_empty() {
        return parsed;
    }

    let by_key: HashMap<&str, &str> =
        overrides.iter().map(|row| (row.alias_key.as_str(), row.canonical_name.as_str())).collect();

    for exercise in &mut parsed.exercises {
        if let Some(mapped) = by_key.get(normalize_name_key(&exercise.raw_name).as_str()) {
            log::debug!("[alias_override] '{}' -> '{}'", exercise.raw_name, mapped);
            exercise.raw_name = (*mapped).to_string();
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParsedExercise, ParsedSet};
    use pretty_assertions::assert_eq;

    fn parsed_with(names: &[&str]) -> ParsedResult {
        ParsedResult {
            exercises: names
                .iter()
                .map(|name| ParsedExercise { raw_name: name.to_string(), sets: vec![ParsedSet::weighted(20.0, 12)] })
                .collect(),
            ..ParsedResult::default()
        }
    }

    #[test]
    fn replaces_names_by_exact_normalized_key() {
        let overrides = vec![AliasOverride::from_raw("케틀벨 스윙", "Kettlebell Swing")];
        let out = apply_alias_overrides(parsed_with(&["케틀벨  스윙!", "스쿼트"]), &overrides);

        let names: Vec<&str> = out.exercises.iter().map(|e| e.raw_name.as_str()).collect();
        assert_eq!(names, vec!["Kettlebell Swing", "스쿼트"]);
    }

    #[test]
    fn partial_keys_do_not_match() {
        let overrides = vec![AliasOverride::new("스윙", "Swing")];
        let out = apply_alias_overrides(parsed_with(&["케틀벨 스윙"]), &overrides);
        assert_eq!(out.exercises[0].raw_name, "케틀벨 스윙");
    }

    #[test]
    fn later_rows_win() {
        let overrides = vec![AliasOverride::new("스쿼트", "Back Squat"), AliasOverride::new("스쿼트", "High-bar Squat")];
        let out = apply_alias_overrides(parsed_with(&["스쿼트"]), &overrides);
        assert_eq!(out.exercises[0].raw_name, "High-bar Squat");
    }
}
