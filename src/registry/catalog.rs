//! Built-in exercise catalog.
//!
//! Canonical names are Korean, matching what the tracker app displays. Keys
//! may carry spaces or punctuation; they are normalized when the registry is
//! built. Within a muscle group, entries whose keys contain another entry's
//! key are declared first.

use super::AliasEntry;

type Row = (&'static str, &'static [&'static str]);

const CATALOG: &[Row] = &[
    // Chest
    (
        "덤벨 인클라인 벤치 프레스",
        &[
            "덤벨인클라인벤치프레스",
            "인클라인벤치프레스",
            "inclinebenchpress",
            "inclinedumbbellpress",
            "インクラインベンチプレス",
            "インクラインダンベルプレス",
        ],
    ),
    (
        "덤벨 플랫 벤치 프레스",
        &["덤벨플랫벤치프레스", "덤벨벤치프레스", "dumbbellbenchpress", "dumbbellflatbenchpress", "ダンベルベンチプレス"],
    ),
    (
        "스미스 머신 클로즈 그립 벤치 프레스",
        &[
            "스미스머신클로즈그립벤치프레스",
            "클로즈그립벤치프레스",
            "closegripbenchpress",
            "smithmachineclosegripbenchpress",
            "スミスマシンクローズグリップベンチプレス",
        ],
    ),
    (
        "바벨 플랫 벤치 프레스",
        &["바벨플랫벤치프레스", "벤치프레스", "benchpress", "barbellbenchpress", "ベンチプレス", "バーベルベンチプレス"],
    ),
    ("라잉 덤벨 풀오버", &["라잉덤벨풀오버", "덤벨풀오버", "풀오버", "dumbbellpullover", "lyingdumbbellpullover", "ダンベルプルオーバー"]),
    // Back
    ("풀 업", &["풀업", "풀 업", "pullup", "pull up", "chinup", "chin up", "懸垂", "チンニング", "プルアップ"]),
    ("랫 풀다운", &["랫풀다운", "latpulldown", "latpull-down", "ラットプルダウン"]),
    ("바벨 로우", &["바벨로우", "barbellrow", "bentoverrow", "ベントオーバーロー", "バーベルロー"]),
    ("시티드 케이블 로우", &["시티드케이블로우", "seatedcablerow", "cablerow", "シーテッドロー", "ケーブルロー"]),
    ("루마니안 데드리프트", &["루마니안데드리프트", "romaniandeadlift", "rdl", "ルーマニアンデッドリフト"]),
    ("데드리프트", &["데드리프트", "deadlift", "デッドリフト"]),
    // Legs
    ("스쿼트", &["스쿼트", "squat", "スクワット"]),
    ("레그 프레스", &["레그프레스", "legpress", "レッグプレス"]),
    ("레그 익스텐션", &["레그익스텐션", "legextension", "レッグエクステンション"]),
    ("레그 컬", &["레그컬", "legcurl", "レッグカール"]),
    ("런지", &["런지", "lunge", "ランジ"]),
    ("힙 쓰러스트", &["힙쓰러스트", "hipthrust", "ヒップスラスト"]),
    ("카프 레이즈", &["카프레이즈", "calfraise", "カーフレイズ"]),
    // Shoulders
    ("숄더 프레스", &["숄더프레스", "shoulderpress", "overheadpress", "ショルダープレス"]),
    ("사이드 레터럴 레이즈", &["사이드레터럴레이즈", "lateralraise", "side raise", "サイドレイズ"]),
    ("리어 델트 플라이", &["리어델트플라이", "reardeltfly", "reversefly", "リアデルトフライ"]),
    ("업라이트 로우", &["업라이트로우", "uprightrow", "アップライトロー"]),
    // Arms
    ("덤벨 바이셉 컬", &["덤벨바이셉컬", "덤벨컬", "bicepscurl", "dumbbellcurl", "ダンベルカール"]),
    ("해머 컬", &["해머컬", "hammercurl", "ハンマーカール"]),
    ("트라이셉 푸시다운", &["트라이셉푸시다운", "tricepspushdown", "cablepushdown", "トライセプスプッシュダウン"]),
    (
        "오버헤드 트라이셉 익스텐션",
        &[
            "오버헤드트라이셉익스텐션",
            "tricepsoverheadextension",
            "overheadtricepsextension",
            "オーバーヘッドトライセプスエクステンション",
        ],
    ),
    // Core / cardio
    ("크런치", &["크런치", "crunch", "クランチ"]),
    ("플랭크", &["플랭크", "plank", "プランク"]),
    ("레그 레이즈", &["레그레이즈", "legraise", "レッグレイズ"]),
    ("런닝", &["런닝", "러닝", "running", "ランニング"]),
    ("사이클", &["사이클", "cycling", "bike", "バイク"]),
];

pub(super) fn entries() -> Vec<AliasEntry> {
    CATALOG.iter().map(|(canonical, keys)| AliasEntry::new(*canonical, keys.iter().copied())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::normalize_name_key;

    #[test]
    fn every_row_has_a_usable_key() {
        for (canonical, keys) in CATALOG {
            assert!(keys.iter().any(|key| !normalize_name_key(key).is_empty()), "no usable key for {canonical}");
        }
    }

    #[test]
    fn canonical_names_resolve_to_themselves() {
        let registry = crate::AliasRegistry::builtin();
        for (canonical, _) in CATALOG {
            assert_eq!(registry.canonicalize(canonical), *canonical);
        }
    }
}
