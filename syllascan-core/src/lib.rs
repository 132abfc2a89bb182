//! Core extraction engine for the syllascan ecosystem.
//!
//! Takes unstructured syllabus text (pasted, OCR'd, or PDF-extracted —
//! provenance doesn't matter once it's plain text) and produces
//! candidate assignment and recurring-class records with normalized
//! dates, inferred types, and duplicate filtering. Everything here is
//! pure, synchronous text processing: no I/O, no shared state, safe to
//! call concurrently.

pub mod dates;
pub mod dedupe;
pub mod draft;
pub mod error;
pub mod parse;
pub mod record;
pub mod scan;
pub mod times;
pub mod weekdays;

// Re-export the public surface at crate root for convenience
pub use dedupe::{Identity, dedupe_against_existing};
pub use draft::{Draft, DraftKind, assemble_drafts, drafts_from_json, drafts_to_json};
pub use error::{SyllascanError, SyllascanResult};
pub use parse::parse_text;
pub use record::*;
