//! Direction dispatcher and strict-mode entry points

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::TransliterationError;
use crate::forward::to_honocoroko_with;
use crate::reverse::from_honocoroko_with;
use crate::types::{Direction, TransliterationOptions};
use std::sync::OnceLock;

/// Route `text` to the engine named by `direction`
pub fn transliterate(text: &str, direction: Direction, options: &TransliterationOptions) -> String {
    transliterate_with(text, direction, options, &TracingSink)
}

/// Route `text` to the engine named by `direction`, reporting unmapped
/// characters to `sink`
pub fn transliterate_with(
    text: &str,
    direction: Direction,
    options: &TransliterationOptions,
    sink: &dyn DiagnosticSink,
) -> String {
    match direction {
        Direction::ToHonocoroko => to_honocoroko_with(text, options, sink),
        Direction::FromHonocoroko => from_honocoroko_with(text, options, sink),
    }
}

/// Fallible dispatch.
///
/// With `options.strict` set, the first unmapped character becomes
/// [`TransliterationError::Unmapped`]. Every diagnostic is still forwarded to
/// `sink` first. Without strict mode this always returns `Ok`.
pub fn try_transliterate(
    text: &str,
    direction: Direction,
    options: &TransliterationOptions,
    sink: &dyn DiagnosticSink,
) -> crate::Result<String> {
    let first = FirstUnmapped::new(sink);
    let out = transliterate_with(text, direction, options, &first);

    match first.get() {
        Some(d) if options.strict => Err(TransliterationError::Unmapped {
            direction: d.direction,
            offset: d.offset,
            character: d.character,
        }),
        _ => Ok(out),
    }
}

/// Fallible Latin → Javanese; see [`try_transliterate`]
pub fn try_to_honocoroko(
    text: &str,
    options: &TransliterationOptions,
) -> crate::Result<String> {
    try_transliterate(text, Direction::ToHonocoroko, options, &TracingSink)
}

/// Fallible Javanese → Latin; see [`try_transliterate`]
pub fn try_from_honocoroko(
    text: &str,
    options: &TransliterationOptions,
) -> crate::Result<String> {
    try_transliterate(text, Direction::FromHonocoroko, options, &TracingSink)
}

/// Forwards every diagnostic and remembers the first one
struct FirstUnmapped<'a> {
    inner: &'a dyn DiagnosticSink,
    first: OnceLock<Diagnostic>,
}

impl<'a> FirstUnmapped<'a> {
    fn new(inner: &'a dyn DiagnosticSink) -> Self {
        Self {
            inner,
            first: OnceLock::new(),
        }
    }

    fn get(&self) -> Option<&Diagnostic> {
        self.first.get()
    }
}

impl DiagnosticSink for FirstUnmapped<'_> {
    fn report(&self, diagnostic: &Diagnostic) {
        let _ = self.first.set(*diagnostic);
        self.inner.report(diagnostic);
    }
}
