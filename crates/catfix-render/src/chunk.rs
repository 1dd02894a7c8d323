//! Splits a generated document into bounded-size fragments.
//!
//! Fragments break on entry boundaries, never on raw byte counts, so each
//! fragment is a self-contained document: the original header and footer
//! are duplicated into every fragment around its batch of entries.

use crate::kotlin::{DOCUMENT_FOOTER, ENTRY_MARKER};

/// Default number of entries per fragment.
pub const DEFAULT_MAX_PER_CHUNK: usize = 150;

/// Splits a document into fragments of at most `max_per_chunk` entries.
///
/// A document without entry markers comes back as a single fragment; a blank
/// document yields an empty sequence. Any internal failure degrades to the
/// original, unsplit document as a single-element sequence.
pub fn split_document(document: &str, max_per_chunk: usize) -> Vec<String> {
    split_entries(document, max_per_chunk)
        .unwrap_or_else(|| vec![document.to_string()])
}

fn split_entries(document: &str, max_per_chunk: usize) -> Option<Vec<String>> {
    if document.trim().is_empty() {
        return Some(Vec::new());
    }
    let starts: Vec<usize> = document
        .match_indices(ENTRY_MARKER)
        .map(|(index, _)| index)
        .collect();
    if starts.is_empty() {
        return Some(vec![document.to_string()]);
    }
    if max_per_chunk == 0 {
        return None;
    }

    let header = &document[..starts[0]];
    let (entries_end, footer) = match document.strip_suffix(DOCUMENT_FOOTER) {
        Some(stripped) => (stripped.len(), DOCUMENT_FOOTER),
        None => (document.len(), ""),
    };
    // A marker inside the footer region would mean the document was not
    // produced by the renderer; bail out and keep it whole.
    if *starts.last()? >= entries_end {
        return None;
    }

    let mut entries = Vec::with_capacity(starts.len());
    for (position, start) in starts.iter().enumerate() {
        let end = starts.get(position + 1).copied().unwrap_or(entries_end);
        entries.push(document[*start..end].trim());
    }

    let fragments = entries
        .chunks(max_per_chunk)
        .map(|batch| format!("{header}{}\n{footer}", batch.join("\n\n")))
        .collect();
    Some(fragments)
}

/// Entry texts of a document, trimmed, in order. Used by callers that need
/// to account for entries across fragments.
pub fn document_entries(document: &str) -> Vec<&str> {
    let starts: Vec<usize> = document
        .match_indices(ENTRY_MARKER)
        .map(|(index, _)| index)
        .collect();
    let entries_end = document
        .strip_suffix(DOCUMENT_FOOTER)
        .map_or(document.len(), str::len);
    starts
        .iter()
        .enumerate()
        .filter(|(_, start)| **start < entries_end)
        .map(|(position, start)| {
            let end = starts.get(position + 1).copied().unwrap_or(entries_end);
            document[*start..end].trim()
        })
        .collect()
}
