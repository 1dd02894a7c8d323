//! Generator configuration.
//!
//! The configuration is constructed once per run (from a YAML file or the
//! in-process ad hoc default) and is read-only afterwards. Its serde layout
//! mirrors the on-disk file: a `csv` source block, an `output` block, and
//! the `mappings` tables.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bucket::ALL_SHIPPABLE;
use crate::error::ConfigError;
use crate::record::AttributeField;

/// Complete configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Source file location and parse parameters.
    pub csv: CsvSource,
    /// Output destination.
    pub output: OutputConfig,
    /// Condition and package-size lookup tables.
    pub mappings: Mappings,
}

/// Source CSV location, encoding, delimiter, and column names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvSource {
    /// Path of the catalogue export.
    pub file_path: PathBuf,
    /// Text encoding label understood by `encoding_rs` (e.g. `utf-8`).
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// Cell delimiter, a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Semantic field to CSV header mapping.
    pub columns: ColumnMap,
}

impl CsvSource {
    /// Returns the delimiter as a raw byte for the CSV reader.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        let mut bytes = self.delimiter.bytes();
        match (bytes.next(), bytes.next()) {
            (Some(byte), None) if byte.is_ascii() => Ok(byte),
            _ => Err(ConfigError::InvalidDelimiter(self.delimiter.clone())),
        }
    }
}

/// Output destination block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the Kotlin file to write.
    pub kotlin_file: PathBuf,
}

/// Column-name mapping from semantic fields to literal CSV header text.
///
/// `leaf`, `category_id`, `level`, `path`, `brand` and `colour` are always
/// required; the remaining attribute columns participate only when
/// configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMap {
    pub leaf: String,
    pub category_id: String,
    pub level: String,
    pub path: String,
    pub brand: String,
    pub colour: String,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub size_group: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub package_size: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub language_book: Option<String>,
    #[serde(default)]
    pub video_game_rating: Option<String>,
    #[serde(default)]
    pub video_game_platform: Option<String>,
    #[serde(default)]
    pub internal_memory_capacity: Option<String>,
    #[serde(default)]
    pub sim_lock: Option<String>,
    /// Ordered condition-label header names.
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl ColumnMap {
    /// Returns the configured header for an attribute field, when any.
    pub fn attribute_column(&self, field: AttributeField) -> Option<&str> {
        match field {
            AttributeField::Brand => Some(self.brand.as_str()),
            AttributeField::Colour => Some(self.colour.as_str()),
            AttributeField::Material => self.material.as_deref(),
            AttributeField::SizeGroup => self.size_group.as_deref(),
            AttributeField::Pattern => self.pattern.as_deref(),
            AttributeField::Size => self.size.as_deref(),
            AttributeField::Author => self.author.as_deref(),
            AttributeField::Title => self.title.as_deref(),
            AttributeField::Isbn => self.isbn.as_deref(),
            AttributeField::LanguageBook => self.language_book.as_deref(),
            AttributeField::VideoGameRating => self.video_game_rating.as_deref(),
            AttributeField::VideoGamePlatform => self.video_game_platform.as_deref(),
            AttributeField::InternalMemoryCapacity => self.internal_memory_capacity.as_deref(),
            AttributeField::SimLock => self.sim_lock.as_deref(),
        }
    }

    /// Headers whose absence from the discovered header row is fatal:
    /// the six always-required columns plus any configured optional
    /// attribute or package-size column.
    pub fn required_columns(&self) -> Vec<&str> {
        let mut required = vec![
            self.leaf.as_str(),
            self.category_id.as_str(),
            self.path.as_str(),
            self.brand.as_str(),
            self.colour.as_str(),
            self.level.as_str(),
        ];
        for optional in [
            self.material.as_deref(),
            self.size_group.as_deref(),
            self.author.as_deref(),
            self.title.as_deref(),
            self.isbn.as_deref(),
            self.package_size.as_deref(),
        ]
        .into_iter()
        .flatten()
        {
            required.push(optional);
        }
        required
    }
}

/// Lookup tables mapping human-readable labels to output identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mappings {
    /// Condition label to output identifier.
    pub conditions: BTreeMap<String, String>,
    /// Package-size bucket name to ordered output identifiers.
    pub package_sizes: BTreeMap<String, Vec<String>>,
}

impl Mappings {
    /// Shipping identifiers for a bucket name, when mapped.
    pub fn shipping_ids(&self, bucket: &str) -> Option<&[String]> {
        self.package_sizes.get(bucket).map(Vec::as_slice)
    }

    /// Shipping identifiers for the universal fallback bucket.
    ///
    /// [`GeneratorConfig::validate`] guarantees the entry exists before any
    /// row is processed.
    pub fn all_shippable_ids(&self) -> &[String] {
        self.shipping_ids(ALL_SHIPPABLE).unwrap_or(&[])
    }

    /// Output identifier for a condition label, when mapped.
    pub fn condition_id(&self, label: &str) -> Option<&str> {
        self.conditions.get(label).map(String::as_str)
    }
}

impl GeneratorConfig {
    /// Validates cross-field invariants. Fatal before any row is read.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.csv.delimiter_byte()?;
        if !self.mappings.package_sizes.contains_key(ALL_SHIPPABLE) {
            return Err(ConfigError::MissingFallbackBucket(ALL_SHIPPABLE));
        }
        Ok(())
    }

    /// Builds the in-process default configuration for ad hoc single-file
    /// use: superset column names, the standard condition labels, and the
    /// stock package-size tables.
    pub fn ad_hoc(csv_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        GeneratorConfig {
            csv: CsvSource {
                file_path: csv_path.into(),
                encoding: default_encoding(),
                delimiter: default_delimiter(),
                columns: ColumnMap {
                    leaf: "Leaf".to_string(),
                    category_id: "ID".to_string(),
                    level: "Level".to_string(),
                    path: "Path".to_string(),
                    brand: "Brand".to_string(),
                    colour: "Colour".to_string(),
                    material: Some("Material".to_string()),
                    size_group: Some("Size group".to_string()),
                    author: Some("Author".to_string()),
                    title: Some("Title".to_string()),
                    isbn: Some("ISBN".to_string()),
                    package_size: Some("Package size".to_string()),
                    pattern: Some("Pattern".to_string()),
                    size: Some("Size".to_string()),
                    language_book: Some("Book language".to_string()),
                    video_game_rating: Some("Video game rating".to_string()),
                    video_game_platform: Some("Video game platform".to_string()),
                    internal_memory_capacity: Some("Internal memory capacity".to_string()),
                    sim_lock: Some("SIM lock".to_string()),
                    conditions: vec![
                        "New with tags".to_string(),
                        "New without tags".to_string(),
                        "Very good".to_string(),
                        "Good".to_string(),
                        "Satisfactory".to_string(),
                        "Not fully functional".to_string(),
                    ],
                },
            },
            output: OutputConfig {
                kotlin_file: output_path.into(),
            },
            mappings: Mappings {
                conditions: BTreeMap::from([
                    (
                        "New with tags".to_string(),
                        "VintedConditionTypes.NEW_WITH_TAGS.id".to_string(),
                    ),
                    (
                        "New without tags".to_string(),
                        "VintedConditionTypes.NEW_WITHOUT_TAGS.id".to_string(),
                    ),
                    (
                        "Very good".to_string(),
                        "VintedConditionTypes.VERY_GOOD.id".to_string(),
                    ),
                    (
                        "Good".to_string(),
                        "VintedConditionTypes.GOOD.id".to_string(),
                    ),
                    (
                        "Satisfactory".to_string(),
                        "VintedConditionTypes.SATISFACTORY.id".to_string(),
                    ),
                    (
                        "Not fully functional".to_string(),
                        "VintedConditionTypes.NOT_FULLY_FUNCTIONAL.id".to_string(),
                    ),
                ]),
                package_sizes: BTreeMap::from([
                    (
                        ALL_SHIPPABLE.to_string(),
                        vec![
                            "VintedPackageTypes.SMALL.id".to_string(),
                            "VintedPackageTypes.MEDIUM.id".to_string(),
                            "VintedPackageTypes.LARGE.id".to_string(),
                        ],
                    ),
                    (
                        "Light bulky".to_string(),
                        vec![
                            "VintedPackageTypes.BULKY_SMALL.id".to_string(),
                            "VintedPackageTypes.BULKY_MEDIUM.id".to_string(),
                            "VintedPackageTypes.BULKY_LARGE.id".to_string(),
                            "VintedPackageTypes.BULKY_X_LARGE.id".to_string(),
                        ],
                    ),
                    (
                        "Heavy".to_string(),
                        vec![
                            "VintedPackageTypes.HEAVY_SMALL.id".to_string(),
                            "VintedPackageTypes.HEAVY_MEDIUM.id".to_string(),
                            "VintedPackageTypes.HEAVY_LARGE.id".to_string(),
                        ],
                    ),
                    (
                        "Heavy bulky".to_string(),
                        vec![
                            "VintedPackageTypes.HEAVY_BULKY_SMALL.id".to_string(),
                            "VintedPackageTypes.HEAVY_BULKY_MEDIUM.id".to_string(),
                            "VintedPackageTypes.HEAVY_BULKY_LARGE.id".to_string(),
                        ],
                    ),
                ]),
            },
        }
    }
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

fn default_delimiter() -> String {
    ";".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ad_hoc_config_validates() {
        let config = GeneratorConfig::ad_hoc("categories.csv", "out.kt");
        config.validate().expect("ad hoc config must be valid");
        assert_eq!(config.csv.delimiter_byte().unwrap(), b';');
        assert_eq!(config.mappings.all_shippable_ids().len(), 3);
    }

    #[test]
    fn required_columns_track_configured_optionals() {
        let mut config = GeneratorConfig::ad_hoc("categories.csv", "out.kt");
        assert!(
            config
                .csv
                .columns
                .required_columns()
                .contains(&"Size group")
        );

        config.csv.columns.size_group = None;
        let required = config.csv.columns.required_columns();
        assert!(!required.contains(&"Size group"));
        // The six core columns never drop out.
        for core in ["Leaf", "ID", "Path", "Brand", "Colour", "Level"] {
            assert!(required.contains(&core), "{core} missing");
        }
        // Extended fields are optional even when configured.
        assert!(!required.contains(&"Pattern"));
    }

    #[test]
    fn multi_byte_delimiter_is_rejected() {
        let mut config = GeneratorConfig::ad_hoc("categories.csv", "out.kt");
        config.csv.delimiter = ";;".to_string();
        assert!(matches!(
            config.validate(),
            Err(crate::ConfigError::InvalidDelimiter(_))
        ));
    }

    #[test]
    fn missing_fallback_bucket_is_rejected() {
        let mut config = GeneratorConfig::ad_hoc("categories.csv", "out.kt");
        config.mappings.package_sizes.remove(ALL_SHIPPABLE);
        assert!(matches!(
            config.validate(),
            Err(crate::ConfigError::MissingFallbackBucket(_))
        ));
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = GeneratorConfig::ad_hoc("categories.csv", "out.kt");
        let json = serde_json::to_string(&config).expect("serialize config");
        let round: GeneratorConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(round.csv.columns.leaf, "Leaf");
        assert_eq!(round.mappings.conditions.len(), 6);
    }

    #[test]
    fn sparse_column_map_deserializes_with_defaults() {
        let json = r#"{
            "csv": {
                "file_path": "categories.csv",
                "columns": {
                    "leaf": "Leaf",
                    "category_id": "ID",
                    "level": "Level",
                    "path": "Path",
                    "brand": "Brand",
                    "colour": "Colour"
                }
            },
            "output": { "kotlin_file": "out.kt" },
            "mappings": { "conditions": {}, "package_sizes": { "All shippable": [] } }
        }"#;
        let config: GeneratorConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.csv.encoding, "utf-8");
        assert_eq!(config.csv.delimiter, ";");
        assert!(config.csv.columns.material.is_none());
        assert!(config.csv.columns.conditions.is_empty());
        config.validate().expect("sparse config is valid");
    }
}
