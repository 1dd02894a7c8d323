//! YAML configuration loading.
//!
//! The file layout mirrors [`GeneratorConfig`] directly: a `csv` block with
//! `file_path`, `encoding`, `delimiter` and `columns`, an `output` block
//! with `kotlin_file`, and a `mappings` block with `conditions` and
//! `package_sizes`.

use std::path::Path;

use anyhow::{Context, Result};

use catfix_model::GeneratorConfig;

/// Loads and validates a generator configuration from a YAML file.
pub fn load_config(path: &Path) -> Result<GeneratorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read configuration file: {}", path.display()))?;
    let config: GeneratorConfig = serde_yaml::from_str(&text)
        .with_context(|| format!("parse configuration file: {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("validate configuration file: {}", path.display()))?;
    Ok(config)
}
