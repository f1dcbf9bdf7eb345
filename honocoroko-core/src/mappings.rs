//! Static mapping tables between Latin and Javanese forms
//!
//! Each table is an ordered slice. Order matters: the index builder walks the
//! tables in a fixed sequence and collisions resolve by position, so entries
//! must not be reordered casually.

use crate::types::CharacterMapping as M;

/// Aksara nglegena. Syllables with the inherent vowel come first, then the
/// bare single-letter aliases that share their glyph.
pub const CONSONANTS: &[M] = &[
    M::new("ha", "\u{A9B2}"),
    M::new("na", "\u{A9A4}"),
    M::new("ca", "\u{A995}"),
    M::new("ra", "\u{A9AB}"),
    M::new("ka", "\u{A98F}"),
    M::new("da", "\u{A9A2}"),
    M::new("ta", "\u{A9A0}"),
    M::new("sa", "\u{A9B1}"),
    M::new("wa", "\u{A9AE}"),
    M::new("la", "\u{A9AD}"),
    M::new("pa", "\u{A9A5}"),
    M::new("dha", "\u{A99D}"),
    M::new("ja", "\u{A997}"),
    M::new("ya", "\u{A9AA}"),
    M::new("nya", "\u{A99A}"),
    M::new("ma", "\u{A9A9}"),
    M::new("ga", "\u{A992}"),
    M::new("ba", "\u{A9A7}"),
    M::new("tha", "\u{A99B}"),
    M::new("nga", "\u{A994}"),
    M::new("h", "\u{A9B2}"),
    M::new("n", "\u{A9A4}"),
    M::new("c", "\u{A995}"),
    M::new("r", "\u{A9AB}"),
    M::new("k", "\u{A98F}"),
    M::new("d", "\u{A9A2}"),
    M::new("t", "\u{A9A0}"),
    M::new("s", "\u{A9B1}"),
    M::new("w", "\u{A9AE}"),
    M::new("l", "\u{A9AD}"),
    M::new("p", "\u{A9A5}"),
    M::new("j", "\u{A997}"),
    M::new("y", "\u{A9AA}"),
    M::new("m", "\u{A9A9}"),
    M::new("g", "\u{A992}"),
    M::new("b", "\u{A9A7}"),
];

/// Aksara swara
pub const VOWELS: &[M] = &[
    M::new("a", "\u{A984}"),
    M::new("i", "\u{A986}"),
    M::new("u", "\u{A988}"),
    M::new("e", "\u{A98C}"),
    M::new("o", "\u{A98E}"),
];

/// Sandhangan: wulu, suku, taling, pepet, taling tarung
pub const VOWEL_MARKS: &[M] = &[
    M::new("i", "\u{A9B6}"),
    M::new("u", "\u{A9B8}"),
    M::new("é", "\u{A9BA}"),
    M::new("e", "\u{A9BC}"),
    M::new("o", "\u{A9BA}\u{A9B4}"),
];

/// Aksara murda. Latin forms are case-significant.
pub const MURDA_CONSONANTS: &[M] = &[
    M::new("Na", "\u{A99F}"),
    M::new("Ka", "\u{A991}"),
    M::new("Ta", "\u{A9A1}"),
    M::new("Sa", "\u{A9AF}"),
    M::new("Pa", "\u{A9A6}"),
    M::new("Ga", "\u{A993}"),
    M::new("Ba", "\u{A9A8}"),
];

/// Angka Jawa, in numeric order
pub const NUMBERS: &[M] = &[
    M::new("0", "\u{A9D0}"),
    M::new("1", "\u{A9D1}"),
    M::new("2", "\u{A9D2}"),
    M::new("3", "\u{A9D3}"),
    M::new("4", "\u{A9D4}"),
    M::new("5", "\u{A9D5}"),
    M::new("6", "\u{A9D6}"),
    M::new("7", "\u{A9D7}"),
    M::new("8", "\u{A9D8}"),
    M::new("9", "\u{A9D9}"),
];

/// Pada lingsa, lungsi, pangkat, the paired quotes and the parentheses
pub const PUNCTUATION: &[M] = &[
    M::new(",", "\u{A9C8}"),
    M::new(".", "\u{A9C9}"),
    M::new(":", "\u{A9C7}"),
    M::new("\"", "\u{A9CA}\u{A9CB}"),
    M::new("(", "\u{A9CC}"),
    M::new(")", "\u{A9CD}"),
];

/// Cecak, layar, wignyan, pangkon
pub const SPECIAL_MARKS: &[M] = &[
    M::new("ng", "\u{A981}"),
    M::new("r", "\u{A982}"),
    M::new("h", "\u{A983}"),
    M::new("/", "\u{A9C0}"),
];

/// Latin letters with no native phoneme. f, v and z take cecak telu on a
/// related base; q collapses to ka; x is ka + pangkon + sa.
pub const PHONETIC_APPROXIMATIONS: &[M] = &[
    M::new("f", "\u{A9A5}\u{A9B3}"),
    M::new("v", "\u{A9AE}\u{A9B3}"),
    M::new("z", "\u{A997}\u{A9B3}"),
    M::new("q", "\u{A98F}"),
    M::new("x", "\u{A98F}\u{A9C0}\u{A9B1}"),
];
