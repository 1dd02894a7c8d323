//! Pipeline orchestration: extract, render, write.
//!
//! Rendering only runs once extraction fully completes, and nothing is
//! written when zero records survive, so a partial or empty document never
//! reaches the output path.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use catfix_ingest::{ExtractOptions, extract_records, read_table};
use catfix_model::GeneratorConfig;
use catfix_render::{LevelStyle, RenderOptions, document_entries, render_document, split_document};

/// One generation run.
#[derive(Debug)]
pub struct GenerateRequest {
    pub config: GeneratorConfig,
    /// Drop non-leaf rows at extraction time.
    pub leaf_only: bool,
    /// How `categoryLevel` is rendered.
    pub level_style: LevelStyle,
}

/// Counters and paths reported after a generation run.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub output_path: PathBuf,
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub rows_filtered: usize,
    pub records: usize,
    pub document_bytes: usize,
}

/// Runs extraction and rendering, then writes the document.
pub fn run_generate(request: &GenerateRequest) -> Result<GenerateOutcome> {
    let config = &request.config;
    config.validate().context("validate configuration")?;
    let delimiter = config.csv.delimiter_byte().context("resolve delimiter")?;

    let span = info_span!("generate", csv = %config.csv.file_path.display());
    let _guard = span.enter();

    let table = read_table(&config.csv.file_path, &config.csv.encoding, delimiter)
        .context("read catalogue table")?;
    let extraction = extract_records(
        &table,
        config,
        ExtractOptions {
            leaf_only: request.leaf_only,
        },
    )
    .context("extract category records")?;

    if extraction.records.is_empty() {
        bail!("no category records extracted; output not written");
    }

    let document = render_document(
        &extraction.records,
        config,
        RenderOptions {
            level_style: request.level_style,
        },
    );

    let output_path = &config.output.kotlin_file;
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory: {}", parent.display()))?;
    }
    fs::write(output_path, &document)
        .with_context(|| format!("write output file: {}", output_path.display()))?;
    info!(path = %output_path.display(), records = extraction.records.len(), "document written");

    Ok(GenerateOutcome {
        output_path: output_path.clone(),
        rows_read: extraction.rows_read,
        rows_skipped: extraction.rows_skipped,
        rows_filtered: extraction.rows_filtered,
        records: extraction.records.len(),
        document_bytes: document.len(),
    })
}

/// One chunking run over a previously generated document.
#[derive(Debug)]
pub struct SplitRequest {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub max_per_chunk: usize,
}

/// Fragment files written by a chunking run.
#[derive(Debug)]
pub struct SplitOutcome {
    pub fragments: Vec<PathBuf>,
    pub entries: usize,
}

/// Splits a generated document into bounded fragments and writes each as a
/// numbered file next to the original stem.
pub fn run_split(request: &SplitRequest) -> Result<SplitOutcome> {
    let document = fs::read_to_string(&request.input)
        .with_context(|| format!("read document: {}", request.input.display()))?;
    let entries = document_entries(&document).len();
    let fragments = split_document(&document, request.max_per_chunk);

    fs::create_dir_all(&request.output_dir)
        .with_context(|| format!("create output directory: {}", request.output_dir.display()))?;
    let stem = request
        .input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("document");

    let mut written = Vec::with_capacity(fragments.len());
    for (index, fragment) in fragments.iter().enumerate() {
        let path = request
            .output_dir
            .join(format!("{stem}_part{:02}.kt", index + 1));
        fs::write(&path, fragment)
            .with_context(|| format!("write fragment: {}", path.display()))?;
        written.push(path);
    }
    info!(fragments = written.len(), entries, "document split");

    Ok(SplitOutcome {
        fragments: written,
        entries,
    })
}
