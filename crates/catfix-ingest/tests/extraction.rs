//! End-to-end extraction tests over on-disk CSV files.

use std::io::Write;

use tempfile::NamedTempFile;

use catfix_ingest::{ExtractOptions, IngestError, extract_records, read_table};
use catfix_model::{AttributeField, AttributeValue, GeneratorConfig, PackageSizeBucket};

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn file_not_found_is_reported() {
    let result = read_table(std::path::Path::new("/nonexistent/categories.csv"), "utf-8", b';');
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn export_with_preamble_extracts_in_order() {
    let file = write_csv(concat!(
        "Catalogue export;;;;;;;;;;;;;\n",
        ";;;;;;;;;;;;;\n",
        "ID;Code;Name;Path;Level;Leaf;Brand;Colour;Material;Size group;Author;Title;ISBN;Package size\n",
        "10;C10;Pens;Root>Office>Pens;3;TRUE;TRUE;TRUE;;;;;;\n",
        "bad;C11;Broken;Root>Office;2;TRUE;;;;;;;;\n",
        "12;C12;Paper;Root>Office>Paper;3;FALSE;;TRUE;TRUE;;;;;Heavy\n",
    ));

    let config = GeneratorConfig::ad_hoc(file.path(), "out.kt");
    let table = read_table(file.path(), "utf-8", b';').expect("read table");
    assert_eq!(table.header_index, 2);

    let extraction = extract_records(&table, &config, ExtractOptions::default()).expect("extract");
    assert_eq!(extraction.rows_read, 3);
    assert_eq!(extraction.rows_skipped, 1);

    let ids: Vec<u64> = extraction.records.iter().map(|r| r.category_id).collect();
    assert_eq!(ids, vec![10, 12]);

    let pens = &extraction.records[0];
    assert!(pens.is_leaf);
    assert_eq!(pens.package_size, PackageSizeBucket::AllShippable);
    assert!(pens.field_flags.contains_key(&AttributeField::Brand));
    assert!(pens.field_flags.contains_key(&AttributeField::Colour));

    let paper = &extraction.records[1];
    assert!(!paper.is_leaf);
    assert_eq!(paper.package_size, PackageSizeBucket::Heavy);
    assert_eq!(
        paper.shipping_size_ids,
        config.mappings.shipping_ids("Heavy").unwrap().to_vec()
    );
    assert_eq!(
        paper.attributes.get(&AttributeField::Material),
        Some(&AttributeValue::Enabled)
    );
}

#[test]
fn legacy_x_marker_enables_attributes() {
    let file = write_csv(concat!(
        "ID;Code;Name;Path;Level;Leaf;Brand;Colour;Material;Size group;Author;Title;ISBN;Package size\n",
        "7;C7;Books;Root>Books;2;TRUE;x;;;;x;;;\n",
    ));
    let config = GeneratorConfig::ad_hoc(file.path(), "out.kt");
    let table = read_table(file.path(), "utf-8", b';').expect("read table");
    let extraction = extract_records(&table, &config, ExtractOptions::default()).expect("extract");

    let record = &extraction.records[0];
    assert!(record.field_flags.contains_key(&AttributeField::Brand));
    assert!(record.field_flags.contains_key(&AttributeField::Author));
    // Author is an upload-form-only capability.
    let author_flags = record.field_flags[&AttributeField::Author];
    assert!(author_flags.upload_form);
    assert!(!author_flags.filter);
}
