//! Weight inference from the `MAX Weight` hint.
//!
//! Screenshots often lose the weight row while keeping the rep row. When the
//! block carries a MAX hint, weights are rebuilt from a table of typical
//! progressions; the first row whose guard accepts the block wins, and a
//! block no row accepts repeats the MAX weight for every set.

use crate::registry::normalize_name_key;

/// What a progression guard gets to look at.
#[derive(Debug, Clone, Copy)]
pub(crate) struct InferenceInput<'a> {
    /// Normalized key of the raw header line.
    pub name_key: &'a str,
    pub reps: &'a [u32],
}

impl InferenceInput<'_> {
    fn mentions(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.name_key.contains(needle))
    }

    fn sets_of(&self, count: usize, reps: u32) -> bool {
        self.reps.len() == count && self.reps.iter().all(|r| *r == reps)
    }
}

/// A named weight progression: `factors[i]` times MAX is the weight of set `i`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Progression {
    pub name: &'static str,
    pub applies: fn(&InferenceInput<'_>) -> bool,
    pub factors: &'static [f64],
}

pub(crate) static PROGRESSIONS: &[Progression] = &[
    progression!("pullover_ramp", when: pullover_triple, factors: [0.6, 0.8, 1.0]),
    progression!("close_grip_ramp", when: close_grip_triple_of_20, factors: [0.5, 0.75, 1.0]),
    progression!("five_by_twelve", when: five_by_twelve, factors: [0.75, 0.875, 1.0, 1.0, 1.0]),
    progression!("four_by_twelve", when: four_by_twelve, factors: [0.875, 1.0, 1.0, 1.0]),
    progression!("three_by_twelve", when: three_by_twelve, factors: [0.6, 0.8, 1.0]),
];

/// Name reported when no progression applies and every set gets MAX.
pub(crate) const FLAT_MAX: &str = "flat_max";

fn pullover_triple(input: &InferenceInput<'_>) -> bool {
    input.mentions(&["풀오버", "pullover"]) && input.reps.len() == 3
}

fn close_grip_triple_of_20(input: &InferenceInput<'_>) -> bool {
    input.mentions(&["클로즈그립", "스미스", "closegrip", "smith"]) && input.sets_of(3, 20)
}

fn five_by_twelve(input: &InferenceInput<'_>) -> bool {
    input.sets_of(5, 12)
}

fn four_by_twelve(input: &InferenceInput<'_>) -> bool {
    input.sets_of(4, 12)
}

fn three_by_twelve(input: &InferenceInput<'_>) -> bool {
    input.sets_of(3, 12)
}

/// Weights rebuilt for a block, and the progression that produced them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Inferred {
    pub progression: &'static str,
    pub weights: Vec<f64>,
}

pub(crate) fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Repair a weight read next to a MAX hint.
///
/// A value above twice MAX lost its decimal point (`175` for `17.5`); one
/// still above 1.2 x MAX is clamped to MAX. Without a usable MAX the value is
/// returned untouched.
pub(crate) fn normalize_weight(weight: f64, max_weight: Option<f64>) -> f64 {
    let Some(max) = max_weight.filter(|max| *max > 0.0) else {
        return weight;
    };
    let mut normalized = weight;
    if normalized > max * 2.0 {
        normalized /= 10.0;
    }
    if normalized > max * 1.2 {
        normalized = normalized.min(max);
    }
    round_to_half(normalized)
}

/// Infer one weight per entry of `reps`. `None` without a MAX hint or reps.
pub(crate) fn infer_weights(max_weight: Option<f64>, reps: &[u32], name: &str) -> Option<Inferred> {
    let max = max_weight.filter(|max| *max > 0.0)?;
    if reps.is_empty() {
        return None;
    }

    let name_key = normalize_name_key(name);
    let input = InferenceInput { name_key: &name_key, reps };
    let inferred = match PROGRESSIONS.iter().find(|progression| (progression.applies)(&input)) {
        Some(progression) => Inferred {
            progression: progression.name,
            weights: progression.factors.iter().map(|factor| round_to_half(max * factor)).collect(),
        },
        None => Inferred { progression: FLAT_MAX, weights: vec![round_to_half(max); reps.len()] },
    };
    Some(inferred)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(175.0, Some(20.0), 17.5)]
    #[case(20.0, Some(20.0), 20.0)]
    #[case(23.0, Some(20.0), 23.0)]
    #[case(30.0, Some(20.0), 20.0)]
    #[case(17.3, Some(20.0), 17.5)]
    #[case(175.0, None, 175.0)]
    #[case(175.0, Some(0.0), 175.0)]
    fn normalize_weight_repairs_lost_decimal_points(
        #[case] weight: f64,
        #[case] max: Option<f64>,
        #[case] expected: f64,
    ) {
        assert_eq!(normalize_weight(weight, max), expected);
    }

    #[rstest]
    #[case("라잉 덤벨 풀오버", vec![12, 12, 12], 10.0, "pullover_ramp", vec![6.0, 8.0, 10.0])]
    #[case("스미스 머신 클로즈 그립 벤치 프레스", vec![20, 20, 20], 20.0, "close_grip_ramp", vec![10.0, 15.0, 20.0])]
    #[case("덤벨 플랫 벤치 프레스", vec![12; 5], 20.0, "five_by_twelve", vec![15.0, 17.5, 20.0, 20.0, 20.0])]
    #[case("덤벨 인클라인 벤치 프레스", vec![12; 4], 20.0, "four_by_twelve", vec![17.5, 20.0, 20.0, 20.0])]
    #[case("바벨 로우", vec![12, 12, 12], 20.0, "three_by_twelve", vec![12.0, 16.0, 20.0])]
    #[case("바벨 로우", vec![10, 8], 60.0, FLAT_MAX, vec![60.0, 60.0])]
    fn progressions_by_shape(
        #[case] name: &str,
        #[case] reps: Vec<u32>,
        #[case] max: f64,
        #[case] progression: &str,
        #[case] weights: Vec<f64>,
    ) {
        let inferred = infer_weights(Some(max), &reps, name).unwrap();
        assert_eq!(inferred.progression, progression);
        assert_eq!(inferred.weights, weights);
    }

    #[test]
    fn smith_ramp_needs_twenty_rep_sets() {
        let inferred = infer_weights(Some(20.0), &[12, 12, 12], "스미스 머신 클로즈 그립 벤치 프레스").unwrap();
        assert_eq!(inferred.progression, "three_by_twelve");
    }

    #[test]
    fn nothing_to_infer_without_max_or_reps() {
        assert_eq!(infer_weights(None, &[12, 12, 12], "스쿼트"), None);
        assert_eq!(infer_weights(Some(0.0), &[12], "스쿼트"), None);
        assert_eq!(infer_weights(Some(60.0), &[], "스쿼트"), None);
    }

    #[test]
    fn every_progression_matches_its_guarded_set_count() {
        let shapes: [(&str, &[u32]); 5] = [
            ("pullover", &[12, 12, 12]),
            ("smith", &[20, 20, 20]),
            ("row", &[12; 5]),
            ("row", &[12; 4]),
            ("row", &[12; 3]),
        ];
        for (progression, (name_key, reps)) in PROGRESSIONS.iter().zip(shapes) {
            let input = InferenceInput { name_key, reps };
            assert!((progression.applies)(&input), "{}", progression.name);
            assert_eq!(progression.factors.len(), reps.len(), "{}", progression.name);
        }
    }
}
