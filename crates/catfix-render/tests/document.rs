//! Snapshot and structural tests for full document rendering.

use std::collections::BTreeMap;

use catfix_model::{
    AttributeField, AttributeValue, CategoryRecord, GeneratorConfig, PackageSizeBucket, capability,
};
use catfix_render::{RenderOptions, document_entries, render_document, split_document};

fn snapshot_config() -> GeneratorConfig {
    let mut config = GeneratorConfig::ad_hoc("categories.csv", "out.kt");
    config.mappings.conditions = BTreeMap::from([
        (
            "Good".to_string(),
            "VintedConditionTypes.GOOD.id".to_string(),
        ),
        (
            "New with tags".to_string(),
            "VintedConditionTypes.NEW_WITH_TAGS.id".to_string(),
        ),
    ]);
    config.mappings.package_sizes = BTreeMap::from([(
        "All shippable".to_string(),
        vec!["VintedPackageTypes.SMALL.id".to_string()],
    )]);
    config
}

fn binder_record() -> CategoryRecord {
    CategoryRecord {
        category_id: 100,
        category_level: 3,
        is_leaf: true,
        path: "Root>A>B".to_string(),
        attributes: BTreeMap::from([
            (AttributeField::Brand, AttributeValue::Enabled),
            (
                AttributeField::Colour,
                AttributeValue::Text("Red".to_string()),
            ),
        ]),
        field_flags: BTreeMap::from([(
            AttributeField::Brand,
            capability(AttributeField::Brand).flags(),
        )]),
        package_size: PackageSizeBucket::AllShippable,
        shipping_size_ids: vec!["VintedPackageTypes.SMALL.id".to_string()],
        condition_counts: BTreeMap::from([
            ("Good".to_string(), 1),
            ("New with tags".to_string(), 1),
        ]),
    }
}

#[test]
fn single_record_document_snapshot() {
    let document = render_document(
        &[binder_record()],
        &snapshot_config(),
        RenderOptions::default(),
    );
    insta::assert_snapshot!(document.trim_end(), @r#"
// Generated CategoryLaunchDataProviderModel entries
// Total categories: 1
//
// Condition mapping:
// Good = VintedConditionTypes.GOOD.id
// New with tags = VintedConditionTypes.NEW_WITH_TAGS.id
//
// Package size mapping:
// All shippable = setOf(VintedPackageTypes.SMALL.id)

object CategoryLaunchData {

    fun allCategories(): List<CategoryLaunchDataProviderModel> = listOf(
        CategoryLaunchDataProviderModel(
            categoryId = 100L,
            categoryLevel = 3,
            path = "Root>A>B",
            isLeafCategory = true,
            expectedFieldsVisibility = listOf(VintedUploadItemFieldTypes.BRAND_VISIBLE, VintedUploadItemFieldTypes.CONDITION_VISIBLE),
            expectedFiltersVisibility = listOf(VintedFilterTypes.BRAND, VintedFilterTypes.STATUS, VintedFilterTypes.PRICE),
            expectedConditionTypeIds = setOf(VintedConditionTypes.GOOD.id, VintedConditionTypes.NEW_WITH_TAGS.id),
            expectedPackageSizeIds = setOf(VintedPackageTypes.SMALL.id),
            expectedSizeGroupsIds = listOf(),
            brandId = supplyTestsHelper.getDefaultBrandId(100L)
        ),
    )

    fun leafCategories(): List<CategoryLaunchDataProviderModel> =
        allCategories().filter { it.isLeafCategory }
}
"#);
}

#[test]
fn rendered_document_round_trips_through_chunker() {
    let mut records = Vec::new();
    for id in 1..=5 {
        let mut record = binder_record();
        record.category_id = id;
        records.push(record);
    }
    let document = render_document(&records, &snapshot_config(), RenderOptions::default());
    let original_entries = document_entries(&document);
    assert_eq!(original_entries.len(), 5);

    let fragments = split_document(&document, 2);
    assert_eq!(fragments.len(), 3);
    let rejoined: Vec<String> = fragments
        .iter()
        .flat_map(|fragment| {
            document_entries(fragment)
                .into_iter()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();
    assert_eq!(rejoined, original_entries);
}
