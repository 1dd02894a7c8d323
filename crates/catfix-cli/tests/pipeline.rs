//! End-to-end pipeline tests for the CLI crate.

use std::fs;

use tempfile::tempdir;

use catfix_cli::pipeline::{
    GenerateRequest, SplitRequest, run_generate, run_split,
};
use catfix_model::GeneratorConfig;
use catfix_render::{ENTRY_MARKER, LevelStyle};

const HEADER: &str = "ID;Code;Name;Path;Level;Leaf;Brand;Colour;Material;Size group;Author;Title;ISBN;Package size";

fn request(config: GeneratorConfig) -> GenerateRequest {
    GenerateRequest {
        config,
        leaf_only: false,
        level_style: LevelStyle::Direct,
    }
}

#[test]
fn generate_writes_document() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("categories.csv");
    let output_path = dir.path().join("out").join("models.kt");
    fs::write(
        &csv_path,
        format!(
            "{HEADER}\n100;C100;Binders;Root>A>B;3;TRUE;TRUE;Red;;;;;;\n101;C101;Pens;Root>A>C;3;FALSE;;;;;;;;Heavy\n"
        ),
    )
    .unwrap();

    let config = GeneratorConfig::ad_hoc(&csv_path, &output_path);
    let outcome = run_generate(&request(config)).expect("generate");

    assert_eq!(outcome.rows_read, 2);
    assert_eq!(outcome.rows_skipped, 0);
    assert_eq!(outcome.records, 2);
    assert_eq!(outcome.output_path, output_path);

    let document = fs::read_to_string(&output_path).expect("output file");
    assert_eq!(document.len(), outcome.document_bytes);
    assert_eq!(document.matches(ENTRY_MARKER).count(), 2);
    assert!(document.contains("categoryId = 100L,"));
    assert!(document.contains("isLeafCategory = false,"));
    assert!(document.contains("VintedPackageTypes.HEAVY_SMALL.id"));
}

#[test]
fn zero_records_leave_no_file_behind() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("categories.csv");
    let output_path = dir.path().join("models.kt");
    fs::write(&csv_path, format!("{HEADER}\nabc;C1;A;Root;1;TRUE;;;;;;;;\n")).unwrap();

    let config = GeneratorConfig::ad_hoc(&csv_path, &output_path);
    let error = run_generate(&request(config)).expect_err("must fail");
    assert!(error.to_string().contains("no category records extracted"));
    assert!(!output_path.exists());
}

#[test]
fn leaf_only_generation_filters_rows() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("categories.csv");
    let output_path = dir.path().join("models.kt");
    fs::write(
        &csv_path,
        format!(
            "{HEADER}\n1;C1;A;Root;1;TRUE;;;;;;;;\n2;C2;B;Root;1;FALSE;;;;;;;;\n"
        ),
    )
    .unwrap();

    let config = GeneratorConfig::ad_hoc(&csv_path, &output_path);
    let outcome = run_generate(&GenerateRequest {
        config,
        leaf_only: true,
        level_style: LevelStyle::Direct,
    })
    .expect("generate");
    assert_eq!(outcome.records, 1);
    assert_eq!(outcome.rows_filtered, 1);
}

#[test]
fn split_writes_numbered_fragments() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("categories.csv");
    let output_path = dir.path().join("models.kt");
    let mut content = format!("{HEADER}\n");
    for id in 1..=5 {
        content.push_str(&format!("{id};C{id};Cat{id};Root>{id};2;TRUE;;;;;;;;\n"));
    }
    fs::write(&csv_path, content).unwrap();

    let config = GeneratorConfig::ad_hoc(&csv_path, &output_path);
    run_generate(&request(config)).expect("generate");

    let fragments_dir = dir.path().join("fragments");
    let outcome = run_split(&SplitRequest {
        input: output_path.clone(),
        output_dir: fragments_dir.clone(),
        max_per_chunk: 2,
    })
    .expect("split");

    assert_eq!(outcome.entries, 5);
    assert_eq!(outcome.fragments.len(), 3);
    assert_eq!(
        outcome.fragments[0],
        fragments_dir.join("models_part01.kt")
    );
    for (index, path) in outcome.fragments.iter().enumerate() {
        let fragment = fs::read_to_string(path).expect("fragment file");
        let expected = if index < 2 { 2 } else { 1 };
        assert_eq!(fragment.matches(ENTRY_MARKER).count(), expected);
    }
}
