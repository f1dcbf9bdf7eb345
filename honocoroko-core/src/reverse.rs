//! Javanese → Latin engine
//!
//! Several Javanese units span more than one codepoint (taling tarung, the
//! paired quote, the cecak telu approximations, ka + pangkon + sa), so each
//! position tries the longest candidate first and never splits a known unit.

use crate::constants::MAX_REVERSE_WINDOW;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::index::LookupIndex;
use crate::policy::is_preserved;
use crate::types::{Direction, TransliterationOptions};
use crate::windows::CharWindows;

#[cfg(feature = "logging")]
use tracing::debug;

/// Transliterate Javanese script to Latin text.
///
/// Unmapped characters are passed through and reported via [`TracingSink`].
pub fn from_honocoroko(text: &str, options: &TransliterationOptions) -> String {
    from_honocoroko_with(text, options, &TracingSink)
}

/// Transliterate Javanese script to Latin text, reporting unmapped
/// characters to `sink`
pub fn from_honocoroko_with(
    text: &str,
    options: &TransliterationOptions,
    sink: &dyn DiagnosticSink,
) -> String {
    if text.is_empty() {
        return String::new();
    }

    let index = LookupIndex::global();
    let input = CharWindows::new(text);
    let mut out = String::with_capacity(text.len());
    let mut unmapped = 0usize;
    let mut pos = 0;

    #[cfg(feature = "logging")]
    debug!("Starting reverse scan of {} chars", input.len());

    while let Some(c) = input.get(pos) {
        if is_preserved(c, options) {
            out.push(c);
            pos += 1;
            continue;
        }

        match longest_match(index, &input, pos) {
            Some((len, latin)) => {
                out.push_str(latin);
                pos += len;
            }
            None => {
                if !c.is_whitespace() {
                    sink.report(&Diagnostic::new(Direction::FromHonocoroko, pos, c));
                    unmapped += 1;
                }
                out.push(c);
                pos += 1;
            }
        }
    }

    #[cfg(feature = "logging")]
    debug!(
        "Reverse scan complete: {} chars in, {} chars out, {} unmapped",
        input.len(),
        out.chars().count(),
        unmapped
    );
    #[cfg(not(feature = "logging"))]
    let _ = unmapped;

    out
}

/// Longest reverse-index hit starting at `pos`, as (chars consumed, Latin form)
fn longest_match(
    index: &LookupIndex,
    input: &CharWindows<'_>,
    pos: usize,
) -> Option<(usize, &'static str)> {
    (1..=MAX_REVERSE_WINDOW).rev().find_map(|len| {
        input
            .window(pos, len)
            .and_then(|w| index.reverse(w))
            .map(|latin| (len, latin))
    })
}
