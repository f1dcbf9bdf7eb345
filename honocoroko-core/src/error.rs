//! Error types for transliteration operations

use crate::types::Direction;

/// Errors surfaced by the fallible entry points.
///
/// The plain engines never fail; these only come from direction parsing and
/// strict mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransliterationError {
    /// Direction tag did not name either engine
    #[error("Unknown transliteration direction: {0:?}")]
    UnknownDirection(String),

    /// Strict mode hit a character with no mapping
    #[error("No {direction} mapping for {character:?} at offset {offset}")]
    Unmapped {
        /// The engine that was running.
        direction: Direction,
        /// Char offset of the offending character in the input.
        offset: usize,
        /// The offending character.
        character: char,
    },
}
