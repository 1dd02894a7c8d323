//! Per-row extraction of category records.
//!
//! Row processing is independent and order-preserving: the output sequence
//! keeps input row order, with rows that fail integer parsing or bounds
//! checks elided. Row-level failures only warn; structural and
//! configuration problems abort before the first row.

use std::collections::BTreeMap;

use tracing::{info, warn};

use catfix_model::{
    AttributeValue, CategoryRecord, GeneratorConfig, PackageSizeBucket, capability,
};

use crate::error::Result;
use crate::layout::ColumnLayout;
use crate::table::CsvTable;

/// Extraction policy knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Drop non-leaf rows during extraction instead of deferring the leaf
    /// filter to the rendered accessor.
    pub leaf_only: bool,
}

/// Records plus row accounting for the caller's summary.
#[derive(Debug)]
pub struct Extraction {
    /// Extracted records in input row order.
    pub records: Vec<CategoryRecord>,
    /// Data rows seen below the header.
    pub rows_read: usize,
    /// Rows dropped because of parse or bounds failures.
    pub rows_skipped: usize,
    /// Non-leaf rows dropped by the leaf-only policy.
    pub rows_filtered: usize,
}

fn cell<'a>(row: &'a [String], index: usize) -> Option<&'a str> {
    row.get(index).map(String::as_str)
}

fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("TRUE")
}

/// Resolves the package-size bucket for one row.
///
/// Priority: boolean indicator columns in fixed order, then the free-text
/// package-size column (blank and `"-"` are ignored), then the default.
fn resolve_package_size(row: &[String], layout: &ColumnLayout) -> PackageSizeBucket {
    for (bucket, offset) in &layout.indicators {
        if cell(row, *offset).is_some_and(is_true) {
            return bucket.clone();
        }
    }
    if let Some(offset) = layout.package_size
        && let Some(value) = cell(row, offset)
        && !value.is_empty()
        && value != "-"
    {
        return PackageSizeBucket::from_label(value);
    }
    PackageSizeBucket::default()
}

/// Extracts category records from a parsed table.
///
/// Validates the configuration and the header row first; both failure modes
/// are fatal and happen before any data row is read.
pub fn extract_records(
    table: &CsvTable,
    config: &GeneratorConfig,
    options: ExtractOptions,
) -> Result<Extraction> {
    config.validate()?;
    let layout = ColumnLayout::from_headers(&table.headers, &config.csv.columns)?;
    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        "CSV structure validated"
    );

    let mut records = Vec::new();
    let mut rows_skipped = 0usize;
    let mut rows_filtered = 0usize;

    for (index, row) in table.rows.iter().enumerate() {
        let row_number = table.file_row(index);

        let Some(leaf_cell) = cell(row, layout.leaf) else {
            warn!(row = row_number, "leaf indicator column out of bounds, skipping row");
            rows_skipped += 1;
            continue;
        };
        let is_leaf = is_true(leaf_cell);
        if options.leaf_only && !is_leaf {
            rows_filtered += 1;
            continue;
        }

        let Some(category_id) = cell(row, layout.category_id)
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|id| *id >= 1)
        else {
            warn!(
                row = row_number,
                value = cell(row, layout.category_id).unwrap_or(""),
                "invalid category id, skipping row"
            );
            rows_skipped += 1;
            continue;
        };

        let Some(category_level) = cell(row, layout.level)
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|level| *level >= 1)
        else {
            warn!(
                row = row_number,
                value = cell(row, layout.level).unwrap_or(""),
                "invalid category level, skipping row"
            );
            rows_skipped += 1;
            continue;
        };

        let path = cell(row, layout.path).unwrap_or("").to_string();

        let mut attributes = BTreeMap::new();
        let mut field_flags = BTreeMap::new();
        for (field, offset) in &layout.attributes {
            let value = cell(row, *offset)
                .map(AttributeValue::from_cell)
                .unwrap_or_default();
            if value.is_enabled() {
                field_flags.insert(*field, capability(*field).flags());
            }
            attributes.insert(*field, value);
        }

        let package_size = resolve_package_size(row, &layout);
        let shipping_size_ids = config
            .mappings
            .shipping_ids(package_size.label())
            .unwrap_or_else(|| config.mappings.all_shippable_ids())
            .to_vec();

        let condition_counts: BTreeMap<String, u32> = layout
            .conditions
            .iter()
            .map(|(label, offset)| {
                let available = offset
                    .and_then(|o| cell(row, o))
                    .is_some_and(is_true);
                (label.clone(), u32::from(available))
            })
            .collect();

        records.push(CategoryRecord {
            category_id,
            category_level,
            is_leaf,
            path,
            attributes,
            field_flags,
            package_size,
            shipping_size_ids,
            condition_counts,
        });
    }

    info!(
        records = records.len(),
        skipped = rows_skipped,
        filtered = rows_filtered,
        "extraction complete"
    );
    Ok(Extraction {
        records,
        rows_read: table.rows.len(),
        rows_skipped,
        rows_filtered,
    })
}
