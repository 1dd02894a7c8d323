//! Category records extracted from the catalogue export.
//!
//! One [`CategoryRecord`] is produced per surviving CSV data row. Records
//! are created once during extraction, held in input order for rendering,
//! and never mutated afterwards.

use std::collections::BTreeMap;
use std::fmt;

use crate::bucket::PackageSizeBucket;

/// Catalogue attribute columns carried by the export.
///
/// Declaration order is the fixed rendering order for visibility lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeField {
    Brand,
    Colour,
    Material,
    SizeGroup,
    Pattern,
    Size,
    Author,
    Title,
    Isbn,
    LanguageBook,
    VideoGameRating,
    VideoGamePlatform,
    InternalMemoryCapacity,
    SimLock,
}

impl AttributeField {
    /// Every attribute field, in rendering order.
    pub const ALL: [AttributeField; 14] = [
        AttributeField::Brand,
        AttributeField::Colour,
        AttributeField::Material,
        AttributeField::SizeGroup,
        AttributeField::Pattern,
        AttributeField::Size,
        AttributeField::Author,
        AttributeField::Title,
        AttributeField::Isbn,
        AttributeField::LanguageBook,
        AttributeField::VideoGameRating,
        AttributeField::VideoGamePlatform,
        AttributeField::InternalMemoryCapacity,
        AttributeField::SimLock,
    ];

    /// Returns the semantic key used in column configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeField::Brand => "brand",
            AttributeField::Colour => "colour",
            AttributeField::Material => "material",
            AttributeField::SizeGroup => "size_group",
            AttributeField::Pattern => "pattern",
            AttributeField::Size => "size",
            AttributeField::Author => "author",
            AttributeField::Title => "title",
            AttributeField::Isbn => "isbn",
            AttributeField::LanguageBook => "language_book",
            AttributeField::VideoGameRating => "video_game_rating",
            AttributeField::VideoGamePlatform => "video_game_platform",
            AttributeField::InternalMemoryCapacity => "internal_memory_capacity",
            AttributeField::SimLock => "sim_lock",
        }
    }
}

impl fmt::Display for AttributeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-state attribute cell value.
///
/// Modeled as an explicit tagged variant rather than a nullable boolean so
/// "absent" and "false" cannot be confused.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttributeValue {
    /// Cell was empty.
    #[default]
    Unset,
    /// Cell carried the boolean-true marker.
    Enabled,
    /// Cell carried any other literal text, retained verbatim.
    Text(String),
}

impl AttributeValue {
    /// Parses a raw cell per the tri-state rule: `"TRUE"` (case-insensitive)
    /// or the legacy `"x"` marker enables the attribute, an empty cell leaves
    /// it unset, and any other text is kept as a literal value.
    pub fn from_cell(cell: &str) -> AttributeValue {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            AttributeValue::Unset
        } else if trimmed.eq_ignore_ascii_case("TRUE") || trimmed == "x" {
            AttributeValue::Enabled
        } else {
            AttributeValue::Text(trimmed.to_string())
        }
    }

    /// Returns true for the boolean-true state.
    pub fn is_enabled(&self) -> bool {
        matches!(self, AttributeValue::Enabled)
    }
}

/// Visibility switches derived for an enabled attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTypeFlags {
    /// Field appears on the upload form.
    pub upload_form: bool,
    /// Field appears in catalogue filters.
    pub filter: bool,
}

/// One processed catalogue row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    /// Category identifier, always >= 1.
    pub category_id: u64,
    /// Hierarchy depth, always >= 1.
    pub category_level: u32,
    /// Whether the category has no children.
    pub is_leaf: bool,
    /// Free-text hierarchy path, empty when the export omits it.
    pub path: String,
    /// Tri-state attribute cells keyed by field.
    pub attributes: BTreeMap<AttributeField, AttributeValue>,
    /// Visibility flags, present only for enabled attributes.
    pub field_flags: BTreeMap<AttributeField, FieldTypeFlags>,
    /// Resolved package-size bucket.
    pub package_size: PackageSizeBucket,
    /// Shipping-size identifiers looked up for the bucket.
    pub shipping_size_ids: Vec<String>,
    /// Per-condition availability: 1 when the condition cell was true.
    pub condition_counts: BTreeMap<String, u32>,
}
