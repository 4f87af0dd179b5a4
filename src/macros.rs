/// Compile a regex literal once and hand out a `&'static Regex`.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a named entry of the header veto chain.
///
/// ```text
/// veto!("rep_token" => predicates::has_rep_token)
/// ```
macro_rules! veto {
    ($name:literal => $test:path) => {
        $crate::rules::header::VetoRule { name: $name, test: $test }
    };
}

/// Declare a weight progression row: a name, a guard and the fractions of the
/// MAX weight hint applied set by set.
macro_rules! progression {
    ($name:literal, when: $guard:path, factors: [ $($f:expr),* $(,)? ]) => {
        $crate::rules::sets::inference::Progression { name: $name, applies: $guard, factors: &[ $($f),* ] }
    };
}
