use super::*;
use crate::AliasRegistry;
use rstest::rstest;

fn line(text: &str) -> ScannedLine {
    ScannedLine::scan(0, text.to_string(), AliasRegistry::builtin())
}

#[rstest]
#[case("MAX Weight: 60kg | 1RM: 81kg", "max_weight_line")]
#[case("Total Reps: 45", "total_reps_line")]
#[case("20 40 60 60", "numeric_only")]
#[case("12X 10X 5X 5X", "rep_token")]
#[case("케틀벨10x", "rep_token")]
#[case("238 KCAL 54 min 7402 kg", "summary_label")]
#[case("케틀벨kg", "summary_label")]
#[case("2026-02-07", "bare_date")]
#[case("February 7, Evening Workout", "metric_keyword")]
#[case("4 15sets 204 eps 114", "metric_keyword")]
#[case("015 20 더", "numeric_row")]
#[case("덤벨 Top 3%", "top_badge")]
#[case("가슴 삼두", "routine_title")]
#[case("Back Biceps", "routine_title")]
#[case("@@", "no_letters")]
#[case("ys", "short_latin_token")]
#[case("a b", "too_short")]
#[case("ㅣ ai", "no_exercise_word")]
#[case("8, \"Oa", "no_exercise_word")]
fn each_rule_rejects_its_own_shape(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(first_rejection(&line(text)), Some(expected), "line: {text}");
}

#[rstest]
#[case("바벨 플랫 벤치 프레스", HeaderSource::Alias)]
#[case("풀업 ㄱ", HeaderSource::Alias)]
#[case("Cable Crossover Press", HeaderSource::Heuristic)]
#[case("케틀벨 스윙", HeaderSource::Heuristic)]
#[case("AN ) 「 [그", HeaderSource::Heuristic)]
fn headers_and_their_source(#[case] text: &str, #[case] source: HeaderSource) {
    assert_eq!(classify(&line(text)), HeaderVerdict::Header(source), "line: {text}");
}

#[test]
fn alias_hits_override_the_veto_chain() {
    // Two numbers would normally veto the line as a data row.
    let noisy = line("스쿼트 3 4");
    assert!(noisy.has(LineFlags::ALIAS_HIT));
    assert_eq!(classify(&noisy), HeaderVerdict::Header(HeaderSource::Alias));

    let unknown = line("케틀벨 3 4");
    assert_eq!(classify(&unknown), HeaderVerdict::Data { rule: "numeric_row" });
}

#[test]
fn veto_order_is_first_match_wins() {
    // Both a bare date and numeric-only; numeric_only comes first.
    assert_eq!(first_rejection(&line("2026.02.07")), Some("numeric_only"));
    let names: Vec<&str> = VETO_CHAIN.iter().map(|rule| rule.name).collect();
    assert_eq!(names.first(), Some(&"max_weight_line"));
    assert_eq!(names.last(), Some(&"routine_title"));
}

#[test]
fn classify_all_is_parallel_to_input() {
    let lines: Vec<ScannedLine> = ["2026.02.07", "스쿼트", "20 40 60", "12X 10X"]
        .iter()
        .enumerate()
        .map(|(idx, text)| ScannedLine::scan(idx, text.to_string(), AliasRegistry::builtin()))
        .collect();

    let verdicts = classify_all(&lines);
    assert_eq!(verdicts.len(), 4);
    let headers: Vec<bool> = verdicts.iter().map(|v| v.is_header()).collect();
    assert_eq!(headers, vec![false, true, false, false]);
}
