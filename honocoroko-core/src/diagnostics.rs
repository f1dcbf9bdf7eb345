//! Observability hook for characters the engines cannot map
//!
//! An unmapped character never changes the output: it is copied through and
//! reported to a [`DiagnosticSink`]. Sinks are passed by reference into each
//! call, so tests can collect reports without touching process output.

use crate::types::Direction;
use core::fmt;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[cfg(feature = "logging")]
use tracing::warn;

/// A single unmapped character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Engine that produced the report
    pub direction: Direction,

    /// Char offset in the input
    pub offset: usize,

    /// The character that was passed through
    pub character: char,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(direction: Direction, offset: usize, character: char) -> Self {
        Self {
            direction,
            offset,
            character,
        }
    }

    /// Numeric codepoint of the character
    pub fn codepoint(&self) -> u32 {
        self.character as u32
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::ToHonocoroko => {
                write!(f, "No mapping found for character: {}", self.character)
            }
            Direction::FromHonocoroko => write!(
                f,
                "No reverse mapping found for character: {} (U+{:04X})",
                self.character,
                self.codepoint()
            ),
        }
    }
}

/// Receives diagnostics. Implementations must not panic.
pub trait DiagnosticSink {
    /// Called once per unmapped character, in input order
    fn report(&self, diagnostic: &Diagnostic);
}

/// Routes diagnostics to `tracing` at WARN level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    #[cfg(feature = "logging")]
    fn report(&self, diagnostic: &Diagnostic) {
        warn!(
            direction = %diagnostic.direction,
            offset = diagnostic.offset,
            codepoint = diagnostic.codepoint(),
            "{}",
            diagnostic
        );
    }

    #[cfg(not(feature = "logging"))]
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Discards diagnostics
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Collects diagnostics in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.records().clone()
    }

    /// Number of diagnostics reported so far
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Whether nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take every record, leaving the sink empty
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.records())
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.records().push(*diagnostic);
    }
}
