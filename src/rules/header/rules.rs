use super::VetoRule;
use super::predicates;

/// Vetoes, evaluated in order; the first that fires marks the line as data.
pub(crate) static VETO_CHAIN: &[VetoRule] = &[
    veto!("max_weight_line" => predicates::is_max_weight_line),
    veto!("total_reps_line" => predicates::is_total_reps_line),
    veto!("numeric_only" => predicates::is_numeric_only),
    veto!("rep_token" => predicates::has_rep_token),
    veto!("summary_label" => predicates::has_summary_label),
    veto!("bare_date" => predicates::is_bare_date),
    veto!("metric_keyword" => predicates::has_metric_keyword),
    veto!("numeric_row" => predicates::is_numeric_row),
    veto!("top_badge" => predicates::has_top_badge),
    veto!("routine_title" => predicates::is_routine_title),
];

/// What a surviving line still has to look like to count as a header.
pub(crate) static QUALIFICATION_CHAIN: &[VetoRule] = &[
    veto!("no_letters" => predicates::lacks_letters),
    veto!("short_latin_token" => predicates::is_short_latin_token),
    veto!("too_short" => predicates::is_too_short_without_hangul),
    veto!("no_exercise_word" => predicates::lacks_exercise_word),
];
