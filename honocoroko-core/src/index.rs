//! Lookup index builder
//!
//! Derives the hash maps both engines read from the ordered tables. The build
//! order is what decides collisions, so every map is constructed by walking an
//! explicit ordered list.

use crate::mappings::{
    CONSONANTS, NUMBERS, PHONETIC_APPROXIMATIONS, PUNCTUATION, SPECIAL_MARKS, VOWELS, VOWEL_MARKS,
};
use crate::types::{CharacterMapping, MappingCategory};
use hashbrown::HashMap;
use std::sync::OnceLock;

#[cfg(feature = "logging")]
use tracing::debug;

type ForwardMap = HashMap<String, &'static str>;

/// Read-only lookup structures derived from the mapping tables
#[derive(Debug, Clone)]
pub struct LookupIndex {
    forward: ForwardMap,
    consonants: ForwardMap,
    vowels: ForwardMap,
    vowel_marks: ForwardMap,
    numbers: ForwardMap,
    punctuation: ForwardMap,
    phonetic: ForwardMap,
    reverse: HashMap<&'static str, &'static str>,
    max_reverse_key_len: usize,
}

impl LookupIndex {
    /// Build every index from the static tables
    pub fn build() -> Self {
        let index = Self {
            forward: build_forward(MappingCategory::all().iter().flat_map(|c| c.table())),
            consonants: build_forward(CONSONANTS),
            vowels: build_forward(VOWELS),
            vowel_marks: build_forward(VOWEL_MARKS),
            numbers: build_forward(NUMBERS),
            punctuation: build_forward(PUNCTUATION),
            phonetic: build_forward(PHONETIC_APPROXIMATIONS),
            reverse: build_reverse(reverse_priority()),
            max_reverse_key_len: 0,
        };

        let max_reverse_key_len = index
            .reverse
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);

        #[cfg(feature = "logging")]
        debug!(
            "Built lookup index: {} forward keys, {} reverse keys (longest {} chars)",
            index.forward.len(),
            index.reverse.len(),
            max_reverse_key_len
        );

        Self {
            max_reverse_key_len,
            ..index
        }
    }

    /// Get or initialize the process-wide index
    pub fn global() -> &'static LookupIndex {
        static INSTANCE: OnceLock<LookupIndex> = OnceLock::new();
        INSTANCE.get_or_init(LookupIndex::build)
    }

    /// Flat forward lookup across every category, keyed by lower-cased Latin
    pub fn lookup_latin(&self, latin: &str) -> Option<&'static str> {
        self.forward.get(latin.to_lowercase().as_str()).copied()
    }

    /// Consonant table lookup (exact key)
    pub fn consonant(&self, latin: &str) -> Option<&'static str> {
        self.consonants.get(latin).copied()
    }

    /// Independent vowel lookup (exact key)
    pub fn vowel(&self, latin: &str) -> Option<&'static str> {
        self.vowels.get(latin).copied()
    }

    /// Dependent vowel mark lookup (exact key)
    pub fn vowel_mark(&self, latin: &str) -> Option<&'static str> {
        self.vowel_marks.get(latin).copied()
    }

    /// Digit lookup
    pub fn number(&self, latin: &str) -> Option<&'static str> {
        self.numbers.get(latin).copied()
    }

    /// Punctuation lookup
    pub fn punctuation(&self, latin: &str) -> Option<&'static str> {
        self.punctuation.get(latin).copied()
    }

    /// Phonetic approximation lookup, case-insensitive
    pub fn phonetic(&self, latin: &str) -> Option<&'static str> {
        self.phonetic.get(latin.to_lowercase().as_str()).copied()
    }

    /// Reverse lookup: Javanese grapheme to Latin form
    pub fn reverse(&self, javanese: &str) -> Option<&'static str> {
        self.reverse.get(javanese).copied()
    }

    /// Length in chars of the longest reverse key
    pub fn max_reverse_key_len(&self) -> usize {
        self.max_reverse_key_len
    }

    /// Number of keys in the flat forward map
    pub fn forward_len(&self) -> usize {
        self.forward.len()
    }

    /// Number of keys in the reverse map
    pub fn reverse_len(&self) -> usize {
        self.reverse.len()
    }
}

impl Default for LookupIndex {
    fn default() -> Self {
        Self::build()
    }
}

/// Later entries overwrite earlier ones on a lower-cased key collision
fn build_forward<'a>(entries: impl IntoIterator<Item = &'a CharacterMapping>) -> ForwardMap {
    let mut map = ForwardMap::new();
    for m in entries {
        map.insert(m.latin.to_lowercase(), m.javanese);
    }
    map
}

/// Earlier entries win: a key is only inserted if it is absent
fn build_reverse<'a>(
    entries: impl IntoIterator<Item = &'a CharacterMapping>,
) -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::new();
    for m in entries {
        map.entry(m.javanese).or_insert(m.latin);
    }
    map
}

/// Reverse priority, highest first: vowel marks, multi-letter consonants
/// ending in the inherent vowel, independent vowels, digits, punctuation,
/// special marks, phonetic approximations.
///
/// Murda consonants and the single-letter consonant aliases never take part.
fn reverse_priority() -> impl Iterator<Item = &'static CharacterMapping> {
    let syllables = CONSONANTS
        .iter()
        .filter(|m| m.latin.chars().count() > 1 && m.latin.ends_with('a'));

    VOWEL_MARKS
        .iter()
        .chain(syllables)
        .chain(VOWELS)
        .chain(NUMBERS)
        .chain(PUNCTUATION)
        .chain(SPECIAL_MARKS)
        .chain(PHONETIC_APPROXIMATIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_is_shared() {
        let a = LookupIndex::global() as *const LookupIndex;
        let b = LookupIndex::global() as *const LookupIndex;
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_lookups() {
        let index = LookupIndex::global();
        assert_eq!(index.consonant("ka"), Some("\u{A98F}"));
        assert_eq!(index.consonant("nga"), Some("\u{A994}"));
        assert_eq!(index.consonant("k"), Some("\u{A98F}"));
        assert_eq!(index.consonant("x"), None);
        assert_eq!(index.vowel("o"), Some("\u{A98E}"));
        assert_eq!(index.vowel_mark("o"), Some("\u{A9BA}\u{A9B4}"));
        assert_eq!(index.number("7"), Some("\u{A9D7}"));
        assert_eq!(index.punctuation("("), Some("\u{A9CC}"));
        assert_eq!(index.phonetic("F"), Some("\u{A9A5}\u{A9B3}"));
    }

    #[test]
    fn test_flat_forward_last_write_wins() {
        let index = LookupIndex::global();
        // special marks come after consonants
        assert_eq!(index.lookup_latin("h"), Some("\u{A983}"));
        assert_eq!(index.lookup_latin("r"), Some("\u{A982}"));
        // vowel marks come after vowels
        assert_eq!(index.lookup_latin("i"), Some("\u{A9B6}"));
        assert_eq!(index.lookup_latin("a"), Some("\u{A984}"));
        // murda consonants come after consonants and fold to the same key
        assert_eq!(index.lookup_latin("na"), Some("\u{A99F}"));
        assert_eq!(index.lookup_latin("NA"), Some("\u{A99F}"));
        assert_eq!(index.lookup_latin("ca"), Some("\u{A995}"));
        assert_eq!(index.lookup_latin("?"), None);
    }

    #[test]
    fn test_reverse_priority() {
        let index = LookupIndex::global();
        // syllables win over single-letter aliases and phonetic q
        assert_eq!(index.reverse("\u{A98F}"), Some("ka"));
        assert_eq!(index.reverse("\u{A9B2}"), Some("ha"));
        // vowel marks, not vowels, own their glyphs
        assert_eq!(index.reverse("\u{A9B6}"), Some("i"));
        assert_eq!(index.reverse("\u{A986}"), Some("i"));
        assert_eq!(index.reverse("\u{A9BA}"), Some("é"));
        assert_eq!(index.reverse("\u{A9BA}\u{A9B4}"), Some("o"));
        assert_eq!(index.reverse("\u{A9C0}"), Some("/"));
        assert_eq!(index.reverse("\u{A9A5}\u{A9B3}"), Some("f"));
        assert_eq!(index.reverse("\u{A98F}\u{A9C0}\u{A9B1}"), Some("x"));
    }

    #[test]
    fn test_reverse_excludes_murda() {
        let index = LookupIndex::global();
        assert_eq!(index.reverse("\u{A99F}"), None);
    }

    #[test]
    fn test_reverse_key_len_fits_window() {
        let index = LookupIndex::global();
        assert_eq!(index.max_reverse_key_len(), 3);
        assert!(index.max_reverse_key_len() <= crate::constants::MAX_REVERSE_WINDOW);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = LookupIndex::build();
        let b = LookupIndex::build();
        for m in MappingCategory::all().iter().flat_map(|c| c.table()) {
            assert_eq!(a.reverse(m.javanese), b.reverse(m.javanese));
            assert_eq!(a.lookup_latin(m.latin), b.lookup_latin(m.latin));
        }
        assert_eq!(a.forward_len(), b.forward_len());
        assert_eq!(a.reverse_len(), b.reverse_len());
    }
}
