//! CSV table reading with encoding, delimiter, and header-row discovery.
//!
//! Catalogue exports often carry preamble rows (filters, export metadata)
//! above the real header. The reader parses the whole table, then scans for
//! the first row containing the fixed marker column set before splitting
//! headers from data rows.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Marker column names that identify the true header row.
const HEADER_MARKERS: [&str; 6] = ["ID", "Code", "Name", "Path", "Level", "Leaf"];

/// A fully parsed catalogue table split into header and data rows.
#[derive(Debug, Clone)]
pub struct CsvTable {
    /// Cells of the discovered header row.
    pub headers: Vec<String>,
    /// Data rows strictly after the header row. Rows are not padded; short
    /// rows surface as out-of-bounds cells during extraction.
    pub rows: Vec<Vec<String>>,
    /// Zero-based index of the header row within the parsed table, kept so
    /// diagnostics can reference absolute file positions.
    pub header_index: usize,
}

impl CsvTable {
    /// Absolute 1-based file row number of a data row.
    pub fn file_row(&self, data_index: usize) -> usize {
        self.header_index + 2 + data_index
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Finds the first row containing every marker column name; defaults to the
/// first row when no row matches.
pub fn detect_header_row(rows: &[Vec<String>]) -> usize {
    rows.iter()
        .position(|row| {
            HEADER_MARKERS
                .iter()
                .all(|marker| row.iter().any(|cell| cell == marker))
        })
        .unwrap_or(0)
}

/// Reads a catalogue table from a file.
pub fn read_table(path: &Path, encoding: &str, delimiter: u8) -> Result<CsvTable> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    parse_table(&bytes, encoding, delimiter)
}

/// Parses raw table bytes using the configured encoding and delimiter.
pub fn parse_table(bytes: &[u8], encoding: &str, delimiter: u8) -> Result<CsvTable> {
    let codec = encoding_rs::Encoding::for_label(encoding.as_bytes()).ok_or_else(|| {
        IngestError::UnknownEncoding {
            label: encoding.to_string(),
        }
    })?;
    let (decoded, used, had_errors) = codec.decode(bytes);
    if had_errors {
        warn!(
            encoding = used.name(),
            "malformed byte sequences replaced while decoding CSV"
        );
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(decoded.as_bytes());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            message: e.to_string(),
        })?;
        raw_rows.push(record.iter().map(normalize_cell).collect());
    }
    if raw_rows.is_empty() {
        return Err(IngestError::EmptyTable);
    }

    let header_index = detect_header_row(&raw_rows);
    debug!(header_index, rows = raw_rows.len(), "header row discovered");
    let headers = raw_rows[header_index].clone();
    let rows = raw_rows.split_off(header_index + 1);
    Ok(CsvTable {
        headers,
        rows,
        header_index,
    })
}
