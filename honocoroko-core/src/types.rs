//! Core types: mapping pairs, categories, direction tags and options

use crate::error::TransliterationError;
use crate::mappings;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// One Latin form paired with the Javanese form it transliterates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CharacterMapping {
    /// Latin grapheme cluster, 1 to 3 chars
    pub latin: &'static str,

    /// Javanese glyph sequence forming a single visual unit
    pub javanese: &'static str,
}

impl CharacterMapping {
    /// Create a new mapping pair
    pub const fn new(latin: &'static str, javanese: &'static str) -> Self {
        Self { latin, javanese }
    }
}

/// The named groups the mapping tables are split into.
///
/// Declaration order is the order categories are concatenated when the flat
/// forward index is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MappingCategory {
    /// Aksara nglegena, with and without the inherent vowel
    Consonants,
    /// Aksara swara (independent vowels)
    Vowels,
    /// Sandhangan (dependent vowel marks)
    VowelMarks,
    /// Aksara murda (honorific capitals)
    MurdaConsonants,
    /// Digits 0-9
    Numbers,
    /// Pada (punctuation)
    Punctuation,
    /// Cecak, layar, wignyan and pangkon
    SpecialMarks,
    /// Stand-ins for Latin sounds Javanese lacks
    PhoneticApproximations,
}

impl MappingCategory {
    /// All categories in declaration order
    pub const fn all() -> [MappingCategory; 8] {
        [
            MappingCategory::Consonants,
            MappingCategory::Vowels,
            MappingCategory::VowelMarks,
            MappingCategory::MurdaConsonants,
            MappingCategory::Numbers,
            MappingCategory::Punctuation,
            MappingCategory::SpecialMarks,
            MappingCategory::PhoneticApproximations,
        ]
    }

    /// Human-readable category name
    pub const fn name(&self) -> &'static str {
        match self {
            MappingCategory::Consonants => "consonants",
            MappingCategory::Vowels => "vowels",
            MappingCategory::VowelMarks => "vowelMarks",
            MappingCategory::MurdaConsonants => "murdaConsonants",
            MappingCategory::Numbers => "numbers",
            MappingCategory::Punctuation => "punctuation",
            MappingCategory::SpecialMarks => "specialMarks",
            MappingCategory::PhoneticApproximations => "phoneticApproximations",
        }
    }

    /// The static table backing this category
    pub const fn table(&self) -> &'static [CharacterMapping] {
        match self {
            MappingCategory::Consonants => mappings::CONSONANTS,
            MappingCategory::Vowels => mappings::VOWELS,
            MappingCategory::VowelMarks => mappings::VOWEL_MARKS,
            MappingCategory::MurdaConsonants => mappings::MURDA_CONSONANTS,
            MappingCategory::Numbers => mappings::NUMBERS,
            MappingCategory::Punctuation => mappings::PUNCTUATION,
            MappingCategory::SpecialMarks => mappings::SPECIAL_MARKS,
            MappingCategory::PhoneticApproximations => mappings::PHONETIC_APPROXIMATIONS,
        }
    }
}

impl fmt::Display for MappingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which engine a dispatch goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    /// Latin → Javanese
    ToHonocoroko,
    /// Javanese → Latin
    FromHonocoroko,
}

impl Direction {
    /// Canonical tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            Direction::ToHonocoroko => "toHonocoroko",
            Direction::FromHonocoroko => "fromHonocoroko",
        }
    }

    /// The opposite direction
    pub const fn reversed(&self) -> Direction {
        match self {
            Direction::ToHonocoroko => Direction::FromHonocoroko,
            Direction::FromHonocoroko => Direction::ToHonocoroko,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = TransliterationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toHonocoroko" | "toScript" | "to" => Ok(Direction::ToHonocoroko),
            "fromHonocoroko" | "fromScript" | "from" => Ok(Direction::FromHonocoroko),
            other => Err(TransliterationError::UnknownDirection(other.to_string())),
        }
    }
}

/// Per-call options shared by both engines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransliterationOptions {
    /// Send preserve-set symbols through the mapping chain instead of copying them
    pub convert_special_chars: bool,

    /// Make the `try_*` entry points fail on the first unmapped character
    pub strict: bool,
}

impl TransliterationOptions {
    /// Default options: preserve symbols, lenient
    pub fn new() -> Self {
        Self::default()
    }

    /// Set special-character conversion
    pub fn convert_special_chars(mut self, enabled: bool) -> Self {
        self.convert_special_chars = enabled;
        self
    }

    /// Set strict mode
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }
}
