//! Kotlin fixture document rendering.
//!
//! Rendering is pure and order-preserving: the same record sequence always
//! produces a byte-identical document, with entries in extraction order
//! between a fixed preamble and closing boilerplate.

use catfix_model::{
    AttributeField, CONDITION_VISIBLE, CategoryRecord, DEFAULT_CONDITION_TYPE_IDS,
    GeneratorConfig, PRICE_FILTER, STATUS_FILTER, capability,
};

/// Literal token opening every rendered entry; the chunker splits on it.
pub const ENTRY_MARKER: &str = "CategoryLaunchDataProviderModel(";

/// Fixed closing boilerplate terminating every rendered document.
pub const DOCUMENT_FOOTER: &str = "    )\n\n    fun leafCategories(): List<CategoryLaunchDataProviderModel> =\n        allCategories().filter { it.isLeafCategory }\n}\n";

/// How `categoryLevel` is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelStyle {
    /// Raw integer.
    #[default]
    Direct,
    /// `CategoryLevel` constant reference with a trailing `.id`.
    NamedConstant,
}

/// Rendering knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub level_style: LevelStyle,
}

/// Renders the full record sequence into one document.
pub fn render_document(
    records: &[CategoryRecord],
    config: &GeneratorConfig,
    options: RenderOptions,
) -> String {
    let mut document = document_header(records.len(), config, options);
    let entries: Vec<String> = records
        .iter()
        .map(|record| render_entry(record, config, options))
        .collect();
    document.push_str(&entries.join("\n\n"));
    if !entries.is_empty() {
        document.push('\n');
    }
    document.push_str(DOCUMENT_FOOTER);
    document
}

/// Renders one record as a fixture entry.
pub fn render_entry(
    record: &CategoryRecord,
    config: &GeneratorConfig,
    options: RenderOptions,
) -> String {
    let fields = field_visibility(record).join(", ");
    let filters = filter_visibility(record).join(", ");
    let conditions = condition_type_ids(record, config).join(", ");
    let shipping = record.shipping_size_ids.join(", ");
    let level = match options.level_style {
        LevelStyle::Direct => record.category_level.to_string(),
        LevelStyle::NamedConstant => format!("{}.id", level_constant(record.category_level)),
    };

    let mut entry = String::new();
    entry.push_str("        ");
    entry.push_str(ENTRY_MARKER);
    entry.push('\n');
    entry.push_str(&format!(
        "            categoryId = {}L,\n",
        record.category_id
    ));
    entry.push_str(&format!("            categoryLevel = {level},\n"));
    entry.push_str(&format!(
        "            path = \"{}\",\n",
        kotlin_string(&record.path)
    ));
    entry.push_str(&format!(
        "            isLeafCategory = {},\n",
        record.is_leaf
    ));
    entry.push_str(&format!(
        "            expectedFieldsVisibility = listOf({fields}),\n"
    ));
    entry.push_str(&format!(
        "            expectedFiltersVisibility = listOf({filters}),\n"
    ));
    entry.push_str(&format!(
        "            expectedConditionTypeIds = setOf({conditions}),\n"
    ));
    entry.push_str(&format!(
        "            expectedPackageSizeIds = setOf({shipping}),\n"
    ));
    entry.push_str("            expectedSizeGroupsIds = listOf(),\n");
    entry.push_str(&format!(
        "            brandId = supplyTestsHelper.getDefaultBrandId({}L)\n",
        record.category_id
    ));
    entry.push_str("        ),");
    entry
}

fn document_header(total: usize, config: &GeneratorConfig, options: RenderOptions) -> String {
    let mut header = String::new();
    header.push_str("// Generated CategoryLaunchDataProviderModel entries\n");
    header.push_str(&format!("// Total categories: {total}\n"));
    header.push_str("//\n// Condition mapping:\n");
    for (label, id) in &config.mappings.conditions {
        header.push_str(&format!("// {label} = {id}\n"));
    }
    header.push_str("//\n// Package size mapping:\n");
    for (bucket, ids) in &config.mappings.package_sizes {
        header.push_str(&format!("// {bucket} = setOf({})\n", ids.join(", ")));
    }
    if options.level_style == LevelStyle::NamedConstant {
        header.push_str(concat!(
            "\n",
            "enum class CategoryLevel(val id: Long) {\n",
            "    ROOT_CATEGORY(1L),\n",
            "    L2(2L),\n",
            "    L3(3L),\n",
            "    L4(4L),\n",
            "    L5(5L),\n",
            "    L6(6L),\n",
            "    L7(7L)\n",
            "}\n",
        ));
    }
    header.push_str("\nobject CategoryLaunchData {\n\n");
    header.push_str("    fun allCategories(): List<CategoryLaunchDataProviderModel> = listOf(\n");
    header
}

/// Upload-form visibility identifiers in fixed field order, with the
/// condition field appended unconditionally.
fn field_visibility(record: &CategoryRecord) -> Vec<&'static str> {
    let mut identifiers = Vec::new();
    for field in AttributeField::ALL {
        if record
            .field_flags
            .get(&field)
            .is_some_and(|flags| flags.upload_form)
            && let Some(id) = capability(field).upload_id
        {
            identifiers.push(id);
        }
    }
    identifiers.push(CONDITION_VISIBLE);
    identifiers
}

/// Filter identifiers in fixed field order, with the status and price
/// filters appended unconditionally.
fn filter_visibility(record: &CategoryRecord) -> Vec<&'static str> {
    let mut identifiers = Vec::new();
    for field in AttributeField::ALL {
        if record
            .field_flags
            .get(&field)
            .is_some_and(|flags| flags.filter)
            && let Some(id) = capability(field).filter_id
        {
            identifiers.push(id);
        }
    }
    identifiers.push(STATUS_FILTER);
    identifiers.push(PRICE_FILTER);
    identifiers
}

/// Mapped identifiers of the conditions available for a record, sorted
/// lexicographically; never empty thanks to the fixed default set.
fn condition_type_ids(record: &CategoryRecord, config: &GeneratorConfig) -> Vec<String> {
    let mut ids: Vec<String> = record
        .condition_counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .filter_map(|(label, _)| config.mappings.condition_id(label))
        .map(str::to_string)
        .collect();
    ids.sort_unstable();
    if ids.is_empty() {
        ids = DEFAULT_CONDITION_TYPE_IDS
            .iter()
            .map(|id| (*id).to_string())
            .collect();
    }
    ids
}

fn level_constant(level: u32) -> String {
    match level {
        1 => "CategoryLevel.ROOT_CATEGORY".to_string(),
        n => format!("CategoryLevel.L{n}"),
    }
}

/// Escapes a value for use inside a Kotlin string literal.
fn kotlin_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '$' => escaped.push_str("\\$"),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}
