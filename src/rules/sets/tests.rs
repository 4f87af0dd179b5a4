use super::*;
use crate::AliasRegistry;
use crate::engine::{clean_lines, scan_lines};
use pretty_assertions::assert_eq;

fn block(text: &str) -> Vec<ScannedLine> {
    scan_lines(clean_lines(text), AliasRegistry::builtin())
}

fn weighted(pairs: &[(f64, u32)]) -> Vec<ParsedSet> {
    pairs.iter().map(|(weight, reps)| ParsedSet::weighted(*weight, *reps)).collect()
}

#[test]
fn weight_and_rep_rows_pair_up() {
    let outcome = extract_sets("바벨 플랫 벤치 프레스", &block("MAX Weight: 60kg | 1RM: 81kg\n20 40 60 60\n12X 10X 5X 5X"));

    assert_eq!(outcome.mode, BlockMode::Weighted);
    assert_eq!(outcome.max_weight, Some(60.0));
    assert_eq!(outcome.sets, weighted(&[(20.0, 12), (40.0, 10), (60.0, 5), (60.0, 5)]));
    assert_eq!(outcome.warning, None);
    assert_eq!(outcome.inferred_by, None);
}

#[test]
fn lost_decimal_points_are_restored_against_max() {
    let outcome = extract_sets("덤벨 인클라인 벤치 프레스", &block("MAX Weight: 20kg | 1RM: 28kg &\n175 20 20 20 ^\n12X 12X 12X 12X"));
    assert_eq!(outcome.sets, weighted(&[(17.5, 12), (20.0, 12), (20.0, 12), (20.0, 12)]));
}

#[test]
fn missing_weight_row_is_inferred_from_max() {
    let outcome = extract_sets("라잉 덤벨 풀오버", &block("MAX Weight: 10kg | 1RM: 1418 }\n12X 12X 12X"));
    assert_eq!(outcome.sets, weighted(&[(6.0, 12), (8.0, 12), (10.0, 12)]));
    assert_eq!(outcome.inferred_by, Some("pullover_ramp"));
}

#[test]
fn short_weight_row_is_replaced_when_inference_covers_every_rep() {
    let outcome =
        extract_sets("스미스 머신 클로즈 그립 벤치 프레스", &block("MAX Weight: 20kg | 1RM: 33kg\n015 20\n20X 20X 20X +"));
    assert_eq!(outcome.sets, weighted(&[(10.0, 20), (15.0, 20), (20.0, 20)]));
    assert_eq!(outcome.inferred_by, Some("close_grip_ramp"));
    assert_eq!(outcome.warning, None);
}

#[test]
fn single_rep_count_is_stretched_over_the_weights() {
    let outcome = extract_sets("스쿼트", &block("20 40 60\n10X"));
    assert_eq!(outcome.sets, weighted(&[(20.0, 10), (40.0, 10), (60.0, 10)]));
    assert_eq!(outcome.warning, None);
}

#[test]
fn mismatched_rows_truncate_with_a_warning() {
    let outcome = extract_sets("스쿼트", &block("20 40 60\n12X 10X"));
    assert_eq!(outcome.sets, weighted(&[(20.0, 12), (40.0, 10)]));
    assert_eq!(outcome.warning, Some(Warning::SetsCountMismatch("스쿼트".to_string())));
}

#[test]
fn weights_without_reps_yield_nothing_but_a_warning() {
    let outcome = extract_sets("스쿼트", &block("20 40 60"));
    assert!(outcome.sets.is_empty());
    assert_eq!(outcome.warning, Some(Warning::SetsCountMismatch("스쿼트".to_string())));
}

#[test]
fn empty_block_is_silent() {
    let outcome = extract_sets("스쿼트", &block("MAX Weight: 60kg"));
    assert!(outcome.sets.is_empty());
    assert_eq!(outcome.warning, None);
}

#[test]
fn reps_only_block_reads_every_number_as_reps() {
    let outcome = extract_sets("풀 업", &block("Total Reps: 45\n15 15 15"));
    assert_eq!(outcome.mode, BlockMode::RepsOnly);
    assert_eq!(outcome.sets, vec![ParsedSet::bodyweight(15); 3]);
}

#[test]
fn reps_only_total_splits_into_three_sets() {
    let outcome = extract_sets("풀업 ㄱ", &block("Total Reps: 45X"));
    assert_eq!(outcome.sets, vec![ParsedSet::bodyweight(15); 3]);
    assert_eq!(outcome.inferred_by, Some("total_reps_thirds"));
    assert_eq!(outcome.warning, None);
}

#[test]
fn reps_only_total_that_does_not_split_warns() {
    for text in ["Total Reps: 44", "Total Reps: 303", "Total Reps: 0", "Total Reps: ?"] {
        let outcome = extract_sets("풀 업", &block(text));
        assert!(outcome.sets.is_empty(), "{text}");
        assert_eq!(outcome.warning, Some(Warning::RepsOnlySetsTooShort("풀 업".to_string())), "{text}");
    }
}

#[test]
fn helpers_read_their_tokens() {
    assert_eq!(helpers::max_weight_kg("MAX Weight: 22.5kg | 1RM: 30kg"), Some(22.5));
    assert_eq!(helpers::max_weight_kg("MAX Weight: ?? kg"), None);
    assert_eq!(helpers::total_reps_hint("total reps: 45X"), Some(45));
    assert_eq!(helpers::rep_counts("12X 10 x 5X fs"), vec![12, 10, 5]);

    let mut single = vec![8];
    helpers::broadcast(&mut single, 3);
    assert_eq!(single, vec![8, 8, 8]);
}
