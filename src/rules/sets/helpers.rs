use crate::engine::finite_number;

/// `MAX Weight: 60kg | 1RM: 81kg` -> `60`
pub fn max_weight_kg(line: &str) -> Option<f64> {
    regex!(r"(?i)MAX\s*Weight:\s*([0-9]+(?:\.[0-9]+)?)\s*kg")
        .captures(line)
        .and_then(|caps| finite_number(&caps[1]))
}

/// `Total Reps: 45X` -> `45`
pub fn total_reps_hint(line: &str) -> Option<u32> {
    regex!(r"(?i)Total Reps:\s*([0-9]+)").captures(line).and_then(|caps| caps[1].parse::<u32>().ok())
}

/// Every `12X` / `12 x` token of a rep row, in order.
pub fn rep_counts(line: &str) -> Vec<u32> {
    regex!(r"([0-9]+)\s*[xX]").captures_iter(line).filter_map(|caps| caps[1].parse::<u32>().ok()).collect()
}

/// Stretch a single-entry list to `len` copies of that entry.
pub fn broadcast<T: Copy>(values: &mut Vec<T>, len: usize) {
    if let [only] = values.as_slice() {
        *values = vec![*only; len];
    }
}
