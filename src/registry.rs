//! Exercise alias registry.
//!
//! The registry maps the many ways an exercise name shows up in OCR output
//! (Korean, English, Japanese, with or without spacing and punctuation) onto a
//! single canonical display name.
//!
//! ```text
//! catalog (declaration order) ──▶ AliasRegistry::new
//!                                   ├─ entries: canonical names
//!                                   └─ ordered: [(normalized key, entry)]   substring scan
//! ```
//!
//! ## Matching
//!
//! A candidate is normalized with [`normalize_name_key`] and matches an entry
//! when it *contains* one of the entry's normalized keys. Decorated or partial
//! OCR lines (`"풀업 ㄱ"`, `"바벨 플랫 벤치 프레스 Top 30%"`) still hit. When
//! several entries match, the first one in declaration order wins.
//!
//! ## Invariants
//!
//! - The registry is immutable after construction. The built-in one is a
//!   process-wide `Lazy` static and is shared by every parse call.
//! - `ordered` is sorted by entry declaration order, so the first substring
//!   hit in `ordered` is also the first matching entry. Catalogs therefore list
//!   specific names (`덤벨 플랫 벤치 프레스`) before generic ones (`벤치프레스`).

#[path = "registry/catalog.rs"]
mod catalog;
#[path = "registry/overrides.rs"]
mod overrides;

pub use overrides::{AliasOverride, apply_alias_overrides};

use crate::error::RegistryError;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<AliasRegistry> = Lazy::new(|| AliasRegistry::build(catalog::entries()));

/// Normalize a name into an alias key: lowercase, with whitespace,
/// punctuation and symbol code points removed.
///
/// ```
/// use liftscan::normalize_name_key;
///
/// assert_eq!(normalize_name_key("Bench-Press (Barbell)"), "benchpressbarbell");
/// assert_eq!(normalize_name_key("바벨 플랫 벤치 프레스"), "바벨플랫벤치프레스");
/// ```
pub fn normalize_name_key(name: &str) -> String {
    regex!(r"[\s\p{P}\p{S}]+").replace_all(&name.to_lowercase(), "").into_owned()
}

/// A canonical exercise name and the raw keys that map onto it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    pub canonical: String,
    pub keys: Vec<String>,
}

impl AliasEntry {
    pub fn new(canonical: impl Into<String>, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        AliasEntry { canonical: canonical.into(), keys: keys.into_iter().map(Into::into).collect() }
    }
}

#[derive(Debug, Clone)]
struct IndexedKey {
    key: String,
    entry: usize,
}

/// Immutable alias registry with a precomputed normalized-key index.
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    entries: Vec<AliasEntry>,
    ordered: Vec<IndexedKey>,
}

impl AliasRegistry {
    /// Build a registry from caller-supplied entries.
    ///
    /// Every entry needs a non-blank canonical name and at least one key
    /// that is non-empty after normalization.
    pub fn new(entries: Vec<AliasEntry>) -> Result<Self, RegistryError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.canonical.trim().is_empty() {
                return Err(RegistryError::EmptyCanonical { index });
            }
            if entry.keys.iter().all(|key| normalize_name_key(key).is_empty()) {
                return Err(RegistryError::NoUsableKeys { canonical: entry.canonical.clone() });
            }
        }
        Ok(Self::build(entries))
    }

    /// The built-in registry, built on first use.
    pub fn builtin() -> &'static AliasRegistry {
        &BUILTIN
    }

    fn build(entries: Vec<AliasEntry>) -> Self {
        let mut ordered = Vec::new();

        for (idx, entry) in entries.iter().enumerate() {
            for raw in &entry.keys {
                let key = normalize_name_key(raw);
                if key.is_empty() {
                    continue;
                }
                ordered.push(IndexedKey { key, entry: idx });
            }
        }

        AliasRegistry { entries, ordered }
    }

    /// Canonical name for an already-normalized key, by containment.
    pub(crate) fn lookup_key(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        self.ordered
            .iter()
            .find(|indexed| key.contains(indexed.key.as_str()))
            .map(|indexed| self.entries[indexed.entry].canonical.as_str())
    }

    /// Canonical name for `text`, or `None` when no alias key is contained in it.
    pub fn lookup_canonical(&self, text: &str) -> Option<&str> {
        self.lookup_key(&normalize_name_key(text))
    }

    /// Map a header line onto its canonical name, falling back to the
    /// whitespace-collapsed original text.
    pub fn canonicalize(&self, name: &str) -> String {
        let trimmed = name.split_whitespace().collect::<Vec<_>>().join(" ");
        match self.lookup_canonical(&trimmed) {
            Some(canonical) => canonical.to_string(),
            None => trimmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("벤치프레스")]
    #[case("바벨 플랫 벤치 프레스")]
    #[case("bench press")]
    #[case("Barbell Bench Press")]
    #[case("ベンチプレス")]
    fn bench_press_variants_share_one_canonical(#[case] header: &str) {
        let registry = AliasRegistry::builtin();
        assert_eq!(registry.lookup_canonical(header), Some("바벨 플랫 벤치 프레스"), "header: {header}");
    }

    #[test]
    fn specific_entries_shadow_generic_keys() {
        let registry = AliasRegistry::builtin();
        assert_eq!(registry.canonicalize("바벨플랫벤치프레스"), "바벨 플랫 벤치 프레스");
        assert_eq!(registry.canonicalize("덤벨 플랫 벤치 프레스"), "덤벨 플랫 벤치 프레스");
        assert_eq!(registry.canonicalize("Dumbbell Bench Press"), "덤벨 플랫 벤치 프레스");
        assert_eq!(registry.canonicalize("루마니안 데드리프트"), "루마니안 데드리프트");
    }

    #[test]
    fn decorated_ocr_text_still_matches() {
        let registry = AliasRegistry::builtin();
        assert_eq!(registry.canonicalize("풀업 ㄱ"), "풀 업");
        assert_eq!(registry.canonicalize("  Lat   Pull-Down  "), "랫 풀다운");
    }

    #[test]
    fn first_declared_entry_wins_on_overlap() {
        let generic_first = AliasRegistry::new(vec![
            AliasEntry::new("Squat", ["squat"]),
            AliasEntry::new("Front Squat", ["frontsquat"]),
        ])
        .unwrap();
        assert_eq!(generic_first.lookup_canonical("front squat"), Some("Squat"));

        let specific_first = AliasRegistry::new(vec![
            AliasEntry::new("Front Squat", ["frontsquat"]),
            AliasEntry::new("Squat", ["squat"]),
        ])
        .unwrap();
        assert_eq!(specific_first.lookup_canonical("front squat"), Some("Front Squat"));
        assert_eq!(specific_first.lookup_canonical("back squat"), Some("Squat"));
    }

    #[test]
    fn unknown_names_fall_back_to_collapsed_text() {
        let registry = AliasRegistry::builtin();
        assert_eq!(registry.lookup_canonical("케틀벨  스윙"), None);
        assert_eq!(registry.canonicalize("  케틀벨  스윙 "), "케틀벨 스윙");
    }

    #[test]
    fn rejects_entries_without_usable_keys() {
        let err = AliasRegistry::new(vec![AliasEntry::new("Plank", ["  ", "--"])]).unwrap_err();
        assert_eq!(err, RegistryError::NoUsableKeys { canonical: "Plank".to_string() });

        let err = AliasRegistry::new(vec![AliasEntry::new(" ", ["plank"])]).unwrap_err();
        assert_eq!(err, RegistryError::EmptyCanonical { index: 0 });
    }
}
