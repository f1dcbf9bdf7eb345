//! # Honocoroko Core
//!
//! Bidirectional transliteration between Latin script and the Javanese script
//! (Hanacaraka / Honocoroko).
//!
//! ## Modules
//!
//! - `constants`: Fixed glyphs, character classes and scan limits
//! - `types`: Core types (CharacterMapping, MappingCategory, Direction, options)
//! - `mappings`: The static, ordered mapping tables
//! - `index`: Lookup index builder (forward, per-category and reverse maps)
//! - `policy`: Special-character preservation gate
//! - `diagnostics`: Observability hook for unmapped characters
//! - `forward`: Latin → Javanese engine
//! - `reverse`: Javanese → Latin engine
//! - `transliterate`: Direction dispatcher and strict-mode entry points

#![warn(missing_docs)]

pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod forward;
pub mod index;
pub mod mappings;
pub mod policy;
pub mod reverse;
pub mod transliterate;
pub mod types;
mod windows;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, DiagnosticSink, NullSink, RecordingSink, TracingSink};
pub use error::TransliterationError;
pub use forward::{to_honocoroko, to_honocoroko_with};
pub use index::LookupIndex;
pub use reverse::{from_honocoroko, from_honocoroko_with};
pub use transliterate::{
    transliterate, transliterate_with, try_from_honocoroko, try_to_honocoroko, try_transliterate,
};
pub use types::{CharacterMapping, Direction, MappingCategory, TransliterationOptions};

/// Result type alias for fallible transliteration operations
pub type Result<T> = core::result::Result<T, TransliterationError>;
