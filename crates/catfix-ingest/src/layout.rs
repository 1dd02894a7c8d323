//! Structural validation of the discovered header row.
//!
//! Builds the name-to-offset map once per run so row extraction works on
//! integer indices. Missing required columns fail here, before any data row
//! is touched, with an error naming every absent header.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use catfix_model::{AttributeField, ColumnMap, PackageSizeBucket};

use crate::error::{IngestError, Result};

/// Boolean indicator headers checked for package-size resolution, in the
/// fixed priority order. The `Heavy shipping` header maps to the `Heavy`
/// bucket; the others map to themselves.
const INDICATOR_HEADERS: [&str; 4] = [
    "All shippable",
    "Heavy shipping",
    "Light bulky",
    "Heavy bulky",
];

fn indicator_bucket(header: &str) -> PackageSizeBucket {
    match header {
        "Heavy shipping" => PackageSizeBucket::Heavy,
        other => PackageSizeBucket::from_label(other),
    }
}

/// Column offsets resolved against a validated header row.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    pub leaf: usize,
    pub category_id: usize,
    pub level: usize,
    pub path: usize,
    /// Offsets for every configured attribute column present in the header.
    pub attributes: BTreeMap<AttributeField, usize>,
    /// Offset of the free-text package-size column, when configured.
    pub package_size: Option<usize>,
    /// Configured condition labels in order, with their offsets when the
    /// header carries them.
    pub conditions: Vec<(String, Option<usize>)>,
    /// Present package-size indicator columns, in priority order.
    pub indicators: Vec<(PackageSizeBucket, usize)>,
}

fn find(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|header| header == name)
}

fn require(headers: &[String], name: &str) -> Result<usize> {
    find(headers, name).ok_or_else(|| IngestError::MissingColumns {
        columns: vec![name.to_string()],
    })
}

impl ColumnLayout {
    /// Validates the header row against the column configuration and records
    /// every offset needed for extraction.
    pub fn from_headers(headers: &[String], columns: &ColumnMap) -> Result<ColumnLayout> {
        let missing: Vec<String> = columns
            .required_columns()
            .into_iter()
            .filter(|name| find(headers, name).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns { columns: missing });
        }

        let mut attributes = BTreeMap::new();
        for field in AttributeField::ALL {
            let Some(name) = columns.attribute_column(field) else {
                continue;
            };
            match find(headers, name) {
                Some(offset) => {
                    attributes.insert(field, offset);
                }
                None => {
                    // Extended attribute columns are best-effort; required
                    // ones were caught above.
                    debug!(field = %field, column = name, "attribute column not in header row");
                }
            }
        }

        let conditions = columns
            .conditions
            .iter()
            .map(|label| {
                let offset = find(headers, label);
                if offset.is_none() {
                    warn!(condition = label.as_str(), "condition column not found in header row");
                }
                (label.clone(), offset)
            })
            .collect();

        let indicators = INDICATOR_HEADERS
            .into_iter()
            .filter_map(|header| {
                find(headers, header).map(|offset| (indicator_bucket(header), offset))
            })
            .collect();

        Ok(ColumnLayout {
            leaf: require(headers, &columns.leaf)?,
            category_id: require(headers, &columns.category_id)?,
            level: require(headers, &columns.level)?,
            path: require(headers, &columns.path)?,
            attributes,
            package_size: columns.package_size.as_deref().and_then(|name| find(headers, name)),
            conditions,
            indicators,
        })
    }
}
