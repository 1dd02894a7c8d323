//! Deterministic Kotlin fixture rendering and document chunking.

pub mod chunk;
pub mod kotlin;

pub use chunk::{DEFAULT_MAX_PER_CHUNK, document_entries, split_document};
pub use kotlin::{
    DOCUMENT_FOOTER, ENTRY_MARKER, LevelStyle, RenderOptions, render_document, render_entry,
};
