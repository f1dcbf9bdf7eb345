//! Library entry for honocoroko-cli used by integration tests and embedding.

pub mod commands;

use honocoroko_core::{Direction, MappingCategory};

// Re-export commands for convenience
pub use commands::*;

/// Direction selector for the `convert` subcommand
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum DirectionArg {
    /// Latin to Javanese
    #[value(name = "toHonocoroko", aliases = ["toScript", "to"])]
    To,
    /// Javanese to Latin
    #[value(name = "fromHonocoroko", aliases = ["fromScript", "from"])]
    From,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::To => Direction::ToHonocoroko,
            DirectionArg::From => Direction::FromHonocoroko,
        }
    }
}

/// Category selector for the `table` subcommand
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CategoryArg {
    /// Consonant syllables and single-letter aliases
    Consonants,
    /// Independent vowels
    Vowels,
    /// Dependent vowel marks
    VowelMarks,
    /// Murda consonants
    Murda,
    /// Digits
    Numbers,
    /// Punctuation
    Punctuation,
    /// Cecak, layar, wignyan, pangkon
    SpecialMarks,
    /// Phonetic approximations
    Phonetic,
}

impl From<CategoryArg> for MappingCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Consonants => MappingCategory::Consonants,
            CategoryArg::Vowels => MappingCategory::Vowels,
            CategoryArg::VowelMarks => MappingCategory::VowelMarks,
            CategoryArg::Murda => MappingCategory::MurdaConsonants,
            CategoryArg::Numbers => MappingCategory::Numbers,
            CategoryArg::Punctuation => MappingCategory::Punctuation,
            CategoryArg::SpecialMarks => MappingCategory::SpecialMarks,
            CategoryArg::Phonetic => MappingCategory::PhoneticApproximations,
        }
    }
}
