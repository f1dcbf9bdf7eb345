//! Fixed glyphs, character classes and scan limits

/// Pangkon (virama): kills the inherent vowel of the preceding consonant
pub const PANGKON: char = '\u{A9C0}';

/// Cecak telu: the diacritic used to build phonetic approximations (f, v, z)
pub const CECAK_TELU: char = '\u{A9B3}';

/// Longest candidate, in chars, the reverse engine tries at each position
pub const MAX_REVERSE_WINDOW: usize = 4;

/// Longest Latin cluster, in chars, the forward engine tries at each position
pub const MAX_FORWARD_WINDOW: usize = 3;

/// ASCII symbols copied verbatim unless special-character conversion is on
pub const PRESERVED_CHARS: &[char] = &[
    '?', '!', '@', '#', '$', '%', '^', '&', '*', '-', '_', '=', '+', '[', ']', '{', '}', '|',
    '\\', ';', '\'', '<', '>', '/', '`', '~',
];

/// Latin vowels, including the taling vowel `é`
pub const LATIN_VOWELS: &[char] = &['a', 'i', 'u', 'e', 'é', 'o'];

/// Latin consonant letters (lower case)
pub const LATIN_CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// The vowel every consonant glyph carries unless marked otherwise
pub const INHERENT_VOWEL: char = 'a';
