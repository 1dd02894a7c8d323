//! Data model for the category fixture transpiler.
//!
//! Holds the run configuration, the extracted [`CategoryRecord`] shape, the
//! package-size buckets, and the static per-field capability table shared by
//! the extractor and the renderer.

pub mod bucket;
pub mod config;
pub mod error;
pub mod fields;
pub mod record;

pub use bucket::{ALL_SHIPPABLE, PackageSizeBucket};
pub use config::{ColumnMap, CsvSource, GeneratorConfig, Mappings, OutputConfig};
pub use error::{ConfigError, Result};
pub use fields::{
    CONDITION_VISIBLE, DEFAULT_CONDITION_TYPE_IDS, FieldCapability, PRICE_FILTER, STATUS_FILTER,
    capability,
};
pub use record::{AttributeField, AttributeValue, CategoryRecord, FieldTypeFlags};
