//! Static per-field capability table.
//!
//! Maps each attribute field to the output identifiers it contributes when
//! enabled: one for upload-form visibility, one for filter visibility.
//! Expressed as data rather than branching logic so the table stays
//! auditable and testable in isolation.

use crate::record::{AttributeField, FieldTypeFlags};

/// Upload-form visibility identifier appended to every entry.
pub const CONDITION_VISIBLE: &str = "VintedUploadItemFieldTypes.CONDITION_VISIBLE";

/// Filter identifiers appended to every entry.
pub const STATUS_FILTER: &str = "VintedFilterTypes.STATUS";
pub const PRICE_FILTER: &str = "VintedFilterTypes.PRICE";

/// Fallback condition identifiers, pre-sorted lexicographically.
///
/// Substituted whenever a category enables no condition at all, so a
/// rendered entry never carries an empty condition set.
pub const DEFAULT_CONDITION_TYPE_IDS: [&str; 5] = [
    "VintedConditionTypes.GOOD.id",
    "VintedConditionTypes.NEW_WITHOUT_TAGS.id",
    "VintedConditionTypes.NEW_WITH_TAGS.id",
    "VintedConditionTypes.SATISFACTORY.id",
    "VintedConditionTypes.VERY_GOOD.id",
];

/// Output identifiers an enabled attribute contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCapability {
    /// Upload-form visibility identifier, when the field is an upload field.
    pub upload_id: Option<&'static str>,
    /// Filter identifier, when the field is filterable.
    pub filter_id: Option<&'static str>,
}

impl FieldCapability {
    /// Derives the visibility flags implied by this capability row.
    pub fn flags(&self) -> FieldTypeFlags {
        FieldTypeFlags {
            upload_form: self.upload_id.is_some(),
            filter: self.filter_id.is_some(),
        }
    }
}

/// Returns the capability row for a field.
///
/// Note that `size_group` carries its own `SIZE_GROUP` filter and never the
/// `SIZE` one; only the distinct `size` field implies the `SIZE` filter.
pub fn capability(field: AttributeField) -> FieldCapability {
    let (upload_id, filter_id): (Option<&'static str>, Option<&'static str>) = match field {
        AttributeField::Brand => (
            Some("VintedUploadItemFieldTypes.BRAND_VISIBLE"),
            Some("VintedFilterTypes.BRAND"),
        ),
        AttributeField::Colour => (
            Some("VintedUploadItemFieldTypes.COLOR_VISIBLE"),
            Some("VintedFilterTypes.COLOR"),
        ),
        AttributeField::Material => (
            Some("VintedUploadItemFieldTypes.MATERIAL_VISIBLE"),
            Some("VintedFilterTypes.MATERIAL"),
        ),
        AttributeField::SizeGroup => (
            Some("VintedUploadItemFieldTypes.SIZE_GROUP_VISIBLE"),
            Some("VintedFilterTypes.SIZE_GROUP"),
        ),
        AttributeField::Pattern => (Some("VintedUploadItemFieldTypes.PATTERN_VISIBLE"), None),
        AttributeField::Size => (
            Some("VintedUploadItemFieldTypes.SIZE_VISIBLE"),
            Some("VintedFilterTypes.SIZE"),
        ),
        AttributeField::Author => (Some("VintedUploadItemFieldTypes.AUTHOR_VISIBLE"), None),
        AttributeField::Title => (Some("VintedUploadItemFieldTypes.TITLE_VISIBLE"), None),
        AttributeField::Isbn => (Some("VintedUploadItemFieldTypes.ISBN_VISIBLE"), None),
        AttributeField::LanguageBook => (
            Some("VintedUploadItemFieldTypes.BOOK_LANGUAGE_VISIBLE"),
            None,
        ),
        AttributeField::VideoGameRating => (
            Some("VintedUploadItemFieldTypes.VIDEO_GAME_RATING_VISIBLE"),
            None,
        ),
        AttributeField::VideoGamePlatform => (
            Some("VintedUploadItemFieldTypes.VIDEO_GAME_PLATFORM_VISIBLE"),
            Some("VintedFilterTypes.VIDEO_GAME_PLATFORM"),
        ),
        AttributeField::InternalMemoryCapacity => (
            Some("VintedUploadItemFieldTypes.INTERNAL_MEMORY_CAPACITY_VISIBLE"),
            None,
        ),
        AttributeField::SimLock => (Some("VintedUploadItemFieldTypes.SIM_LOCK_VISIBLE"), None),
    };
    FieldCapability {
        upload_id,
        filter_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_is_an_upload_field() {
        for field in AttributeField::ALL {
            assert!(
                capability(field).upload_id.is_some(),
                "{field} has no upload identifier"
            );
        }
    }

    #[test]
    fn book_fields_are_never_filterable() {
        for field in [
            AttributeField::Author,
            AttributeField::Title,
            AttributeField::Isbn,
        ] {
            let cap = capability(field);
            assert!(cap.filter_id.is_none(), "{field} must be upload-only");
            assert!(!cap.flags().filter);
            assert!(cap.flags().upload_form);
        }
    }

    #[test]
    fn size_group_does_not_imply_size_filter() {
        let size_group = capability(AttributeField::SizeGroup);
        let size = capability(AttributeField::Size);
        assert_eq!(size_group.filter_id, Some("VintedFilterTypes.SIZE_GROUP"));
        assert_eq!(size.filter_id, Some("VintedFilterTypes.SIZE"));
    }

    #[test]
    fn default_condition_ids_are_sorted_and_complete() {
        let mut sorted = DEFAULT_CONDITION_TYPE_IDS;
        sorted.sort_unstable();
        assert_eq!(sorted, DEFAULT_CONDITION_TYPE_IDS);
        assert_eq!(DEFAULT_CONDITION_TYPE_IDS.len(), 5);
    }
}
