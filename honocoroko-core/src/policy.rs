//! Special-character policy shared by both engines

use crate::constants::PRESERVED_CHARS;
use crate::types::TransliterationOptions;

/// Whether `c` belongs to the fixed ASCII preserve-set
pub fn is_special_char(c: char) -> bool {
    PRESERVED_CHARS.contains(&c)
}

/// Whether `c` bypasses every lookup and is copied verbatim.
///
/// True only for preserve-set symbols while conversion is off.
pub fn is_preserved(c: char, options: &TransliterationOptions) -> bool {
    !options.convert_special_chars && is_special_char(c)
}
