//! Latin → Javanese engine
//!
//! A single left-to-right scan. At each position the longest Latin unit wins:
//! a three-letter cluster, a two-letter syllable, a consonant followed by a
//! vowel, then a lone consonant (which takes a pangkon when another consonant
//! follows), an independent vowel, or a phonetic approximation. Anything
//! else is copied through and reported.

use crate::constants::{
    INHERENT_VOWEL, LATIN_CONSONANTS, LATIN_VOWELS, MAX_FORWARD_WINDOW, PANGKON,
};
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::index::LookupIndex;
use crate::policy::is_preserved;
use crate::types::{Direction, TransliterationOptions};
use crate::windows::CharWindows;

#[cfg(feature = "logging")]
use tracing::debug;

/// Transliterate Latin text to Javanese script.
///
/// Unmapped characters are passed through and reported via [`TracingSink`].
pub fn to_honocoroko(text: &str, options: &TransliterationOptions) -> String {
    to_honocoroko_with(text, options, &TracingSink)
}

/// Transliterate Latin text to Javanese script, reporting unmapped
/// characters to `sink`
pub fn to_honocoroko_with(
    text: &str,
    options: &TransliterationOptions,
    sink: &dyn DiagnosticSink,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let index = LookupIndex::global();
    let input = CharWindows::new(text);
    let mut out = String::with_capacity(text.len() * 3);
    let mut key = String::with_capacity(8);
    let mut unmapped = 0usize;
    let mut pos = 0;

    #[cfg(feature = "logging")]
    debug!("Starting forward scan of {} chars", input.len());

    while let Some(c) = input.get(pos) {
        if is_preserved(c, options) || c.is_whitespace() {
            out.push(c);
            pos += 1;
            continue;
        }

        let Some(unit) = input.window(pos, 1) else {
            break;
        };

        if let Some(glyph) = index.number(unit).or_else(|| index.punctuation(unit)) {
            out.push_str(glyph);
            pos += 1;
            continue;
        }

        // nga, nya, dha, tha
        if let Some(glyph) = input
            .window(pos, MAX_FORWARD_WINDOW)
            .and_then(|w| index.consonant(w))
        {
            out.push_str(glyph);
            pos += MAX_FORWARD_WINDOW;
            continue;
        }

        if let Some(next) = input.get(pos + 1) {
            if let Some(glyph) = input.window(pos, 2).and_then(|w| index.consonant(w)) {
                out.push_str(glyph);
                pos += 2;
                continue;
            }

            if is_latin_vowel(next) {
                if let Some(glyph) = consonant_base(index, c, &mut key) {
                    out.push_str(glyph);
                    out.push_str(vowel_mark(index, next));
                    pos += 2;
                    continue;
                }
            }
        }

        if let Some(glyph) = consonant_base(index, c, &mut key) {
            out.push_str(glyph);
            if input
                .get(pos + 1)
                .is_some_and(|next| is_latin_consonant(index, next))
            {
                out.push(PANGKON);
            }
            pos += 1;
            continue;
        }

        if let Some(glyph) = index.vowel(unit).or_else(|| index.phonetic(unit)) {
            out.push_str(glyph);
            pos += 1;
            continue;
        }

        sink.report(&Diagnostic::new(Direction::ToHonocoroko, pos, c));
        unmapped += 1;
        out.push(c);
        pos += 1;
    }

    #[cfg(feature = "logging")]
    debug!(
        "Forward scan complete: {} chars in, {} chars out, {} unmapped",
        input.len(),
        out.chars().count(),
        unmapped
    );
    #[cfg(not(feature = "logging"))]
    let _ = unmapped;

    out
}

/// Whether `c` is a Latin vowel (case-insensitive, includes `é`)
pub fn is_latin_vowel(c: char) -> bool {
    LATIN_VOWELS.contains(&fold_case(c))
}

/// Whether `c` reads as a consonant: its lower-case form, alone or with the
/// inherent vowel, is a consonant key, or it is a Latin consonant letter
pub fn is_latin_consonant(index: &LookupIndex, c: char) -> bool {
    let lower = fold_case(c);
    let mut key = String::with_capacity(8);
    consonant_base(index, lower, &mut key).is_some() || LATIN_CONSONANTS.contains(lower)
}

/// Glyph for `c` plus the inherent vowel, falling back to `c` alone
fn consonant_base(index: &LookupIndex, c: char, key: &mut String) -> Option<&'static str> {
    key.clear();
    key.push(c);
    key.push(INHERENT_VOWEL);
    index
        .consonant(key)
        .or_else(|| index.consonant(&key[..c.len_utf8()]))
}

/// Mark overriding the inherent vowel; empty for the inherent vowel itself
fn vowel_mark(index: &LookupIndex, vowel: char) -> &'static str {
    let vowel = fold_case(vowel);
    if vowel == INHERENT_VOWEL {
        return "";
    }
    let mut buf = [0u8; 4];
    index.vowel_mark(vowel.encode_utf8(&mut buf)).unwrap_or("")
}

/// Single-char lower case; chars whose lower case expands are left alone
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{NullSink, RecordingSink};

    fn convert(text: &str) -> String {
        to_honocoroko_with(text, &TransliterationOptions::default(), &NullSink)
    }

    #[test]
    fn test_basic_consonants() {
        assert_eq!(convert("ha"), "ꦲ");
        assert_eq!(convert("na"), "ꦤ");
        assert_eq!(convert("ca"), "ꦕ");
        assert_eq!(convert("ra"), "ꦫ");
        assert_eq!(convert("ka"), "ꦏ");
    }

    #[test]
    fn test_three_letter_clusters() {
        assert_eq!(convert("nga"), "ꦔ");
        assert_eq!(convert("nya"), "ꦚ");
        assert_eq!(convert("dha"), "ꦝ");
        assert_eq!(convert("tha"), "ꦛ");
    }

    #[test]
    fn test_vowel_marks() {
        assert_eq!(convert("ba"), "ꦧ");
        assert_eq!(convert("bi"), "ꦧꦶ");
        assert_eq!(convert("bu"), "ꦧꦸ");
        assert_eq!(convert("be"), "ꦧꦼ");
        assert_eq!(convert("bé"), "ꦧꦺ");
        assert_eq!(convert("bo"), "ꦧꦺꦴ");
    }

    #[test]
    fn test_uppercase_vowel_mark() {
        assert_eq!(convert("bI"), "ꦧꦶ");
        assert_eq!(convert("bA"), "ꦧ");
    }

    #[test]
    fn test_syllables() {
        assert_eq!(convert("bisa"), "ꦧꦶꦱ");
        assert_eq!(convert("biso"), "ꦧꦶꦱꦺꦴ");
    }

    #[test]
    fn test_pangkon_between_consonants() {
        assert_eq!(convert("bakso"), "ꦧꦏ꧀ꦱꦺꦴ");
        assert_eq!(convert("ng"), "ꦤ꧀ꦒ");
    }

    #[test]
    fn test_trailing_consonant_has_no_pangkon() {
        assert_eq!(convert("k"), "ꦏ");
        assert_eq!(convert("tak"), "ꦠꦏ");
    }

    #[test]
    fn test_standalone_vowels() {
        assert_eq!(convert("a"), "ꦄ");
        assert_eq!(convert("i"), "ꦆ");
        assert_eq!(convert("aku"), "ꦄꦏꦸ");
    }

    #[test]
    fn test_phonetic_approximations() {
        assert_eq!(convert("f"), "ꦥ꦳");
        assert_eq!(convert("v"), "ꦮ꦳");
        assert_eq!(convert("z"), "ꦗ꦳");
        assert_eq!(convert("q"), "ꦏ");
        assert_eq!(convert("x"), "ꦏ꧀ꦱ");
        assert_eq!(convert("F"), "ꦥ꦳");
    }

    #[test]
    fn test_numbers_and_punctuation() {
        assert_eq!(convert("123"), "꧑꧒꧓");
        assert_eq!(convert("9876543210"), "꧙꧘꧗꧖꧕꧔꧓꧒꧑꧐");
        assert_eq!(convert(","), "꧈");
        assert_eq!(convert("."), "꧉");
        assert_eq!(convert(":"), "꧇");
        assert_eq!(convert("\""), "꧊꧋");
    }

    #[test]
    fn test_preserves_special_chars() {
        assert_eq!(convert("hana?"), "ꦲꦤ?");
        assert_eq!(convert("cara!"), "ꦕꦫ!");
        assert_eq!(convert("test@domain"), "ꦠꦼꦱ꧀ꦠ@ꦢꦺꦴꦩꦆꦤ");
    }

    #[test]
    fn test_whitespace_kept_in_place() {
        assert_eq!(convert("ha na\tca\nra"), "ꦲ ꦤ\tꦕ\nꦫ");
    }

    #[test]
    fn test_empty() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_unmapped_reported() {
        let sink = RecordingSink::new();
        let out = to_honocoroko_with("ha€", &TransliterationOptions::default(), &sink);
        assert_eq!(out, "ꦲ€");

        let records = sink.diagnostics();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].character, '€');
        assert_eq!(records[0].offset, 2);
        assert_eq!(records[0].direction, Direction::ToHonocoroko);
    }

    #[test]
    fn test_convert_special_chars_reports() {
        let sink = RecordingSink::new();
        let options = TransliterationOptions::new().convert_special_chars(true);
        let out = to_honocoroko_with("ha?", &options, &sink);
        assert_eq!(out, "ꦲ?");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_preserved_chars_not_reported() {
        let sink = RecordingSink::new();
        to_honocoroko_with("ha?", &TransliterationOptions::default(), &sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_consonant_detection() {
        let index = LookupIndex::global();
        assert!(is_latin_consonant(index, 'k'));
        assert!(is_latin_consonant(index, 'K'));
        assert!(is_latin_consonant(index, 'x'));
        assert!(!is_latin_consonant(index, 'a'));
        assert!(!is_latin_consonant(index, '1'));
        assert!(is_latin_vowel('É'));
        assert!(!is_latin_vowel('y'));
    }
}
