use crate::engine::{LineFlags, ScannedLine};
use crate::model::{ParsedSet, Warning};
use crate::rules::sets::helpers::{broadcast, max_weight_kg, rep_counts, total_reps_hint};
use crate::rules::sets::inference::{infer_weights, normalize_weight};
use crate::rules::sets::{BlockMode, BlockOutcome};

/// Bodyweight block introduced by a `Total Reps:` line.
///
/// Every number on a multi-number line is a rep count. With fewer than two of
/// those, a total divisible by three is read as three equal sets.
pub(crate) fn reps_only_sets(name: &str, block: &[ScannedLine]) -> BlockOutcome {
    let mut reps: Vec<u32> = Vec::new();
    let mut hint: Option<u32> = None;

    for line in block {
        if line.has(LineFlags::TOTAL_REPS) {
            hint = total_reps_hint(&line.text);
            continue;
        }
        if line.has(LineFlags::MAX_WEIGHT) {
            continue;
        }
        let numbers = line.numbers();
        if numbers.len() >= 2 {
            reps.extend(numbers.iter().map(|value| value.trunc() as u32));
        }
    }

    let mut outcome = BlockOutcome::new(BlockMode::RepsOnly);
    if reps.len() >= 2 {
        outcome.sets = reps.into_iter().map(ParsedSet::bodyweight).collect();
        return outcome;
    }

    if reps.is_empty() {
        let per_set = hint.filter(|total| total % 3 == 0).map(|total| total / 3);
        if let Some(per_set) = per_set.filter(|per_set| (1..=100).contains(per_set)) {
            outcome.sets = vec![ParsedSet::bodyweight(per_set); 3];
            outcome.inferred_by = Some("total_reps_thirds");
            return outcome;
        }
    }

    outcome.warning = Some(Warning::RepsOnlySetsTooShort(name.to_string()));
    outcome
}

/// Weighted block: a weight row and a rep row, possibly with a MAX hint.
///
/// The last row of each kind wins. Missing or short weight rows are rebuilt
/// from the MAX hint, a single-entry row is stretched to the other row's
/// length, and whatever still disagrees is truncated with a warning.
pub(crate) fn weighted_sets(name: &str, block: &[ScannedLine]) -> BlockOutcome {
    let mut outcome = BlockOutcome::new(BlockMode::Weighted);
    let mut weights: Vec<f64> = Vec::new();
    let mut reps: Vec<u32> = Vec::new();

    for line in block {
        if line.has(LineFlags::MAX_WEIGHT) {
            outcome.max_weight = max_weight_kg(&line.text);
            continue;
        }
        let counts = rep_counts(&line.text);
        if !counts.is_empty() {
            reps = counts;
            continue;
        }
        let numbers = line.numbers();
        if numbers.len() >= 2 {
            weights = numbers.into_iter().map(|value| normalize_weight(value, outcome.max_weight)).collect();
        }
    }

    // A short weight row is only replaced when inference covers every rep.
    let inferred = if weights.is_empty() {
        infer_weights(outcome.max_weight, &reps, name)
    } else if weights.len() < reps.len() {
        infer_weights(outcome.max_weight, &reps, name).filter(|inferred| inferred.weights.len() == reps.len())
    } else {
        None
    };
    if let Some(inferred) = inferred {
        weights = inferred.weights;
        outcome.inferred_by = Some(inferred.progression);
    }

    if weights.is_empty() && reps.is_empty() {
        return outcome;
    }

    if weights.len() != reps.len() {
        if reps.len() == 1 && weights.len() > 1 {
            broadcast(&mut reps, weights.len());
        } else if weights.len() == 1 && reps.len() > 1 {
            broadcast(&mut weights, reps.len());
        }
    }
    if weights.len() != reps.len() {
        log::debug!("[sets] {name}: {} weights vs {} reps", weights.len(), reps.len());
        outcome.warning = Some(Warning::SetsCountMismatch(name.to_string()));
    }

    outcome.sets = weights.into_iter().zip(reps).map(|(weight, reps)| ParsedSet::weighted(weight, reps)).collect();
    outcome
}
