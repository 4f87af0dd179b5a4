//! Line preprocessing.
//!
//! Line order is the only structural signal downstream rules get (there are no
//! coordinates in OCR text), so this step never reorders, only drops.

/// Split `raw` into cleaned, non-noise lines.
///
/// - strips "Top N%" ranking badges wherever they appear,
/// - collapses runs of whitespace and trims,
/// - drops lines with no ASCII letter, digit, Hangul syllable or Japanese
///   kana/kanji (the registry carries Japanese aliases).
pub(crate) fn clean_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            let without_badge = regex!(r"(?i)\s*Top\s*[0-9]+%").replace_all(line, "");
            collapse_whitespace(&without_badge)
        })
        .filter(|line| !line.is_empty())
        .filter(|line| has_signal(line))
        .collect()
}

pub(crate) fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn has_signal(line: &str) -> bool {
    line.chars().any(|c| c.is_ascii_alphanumeric() || is_hangul_syllable(c) || is_japanese(c))
}

fn is_japanese(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}')
}

pub(crate) fn is_hangul_syllable(c: char) -> bool {
    ('가'..='힣').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_badges_and_noise_lines() {
        let raw = "\r\n  바벨 플랫 벤치 프레스   Top 30%\r\nTop 34%\n@\n  ㅣ  \n20   40\t60\n";
        assert_eq!(clean_lines(raw), vec!["바벨 플랫 벤치 프레스", "20 40 60"]);
    }

    #[test]
    fn keeps_line_order() {
        let raw = "b line\na line\n3 2 1";
        assert_eq!(clean_lines(raw), vec!["b line", "a line", "3 2 1"]);
    }

    #[test]
    fn japanese_lines_are_kept() {
        assert_eq!(clean_lines("ベンチプレス\n「」\n懸垂"), vec!["ベンチプレス", "懸垂"]);
    }

    #[test]
    fn jamo_only_lines_are_noise() {
        assert!(clean_lines("ㄱ ㄴ ㅣ").is_empty());
        assert_eq!(clean_lines("풀업 ㄱ"), vec!["풀업 ㄱ"]);
    }
}
