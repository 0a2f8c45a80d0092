//! FILENAME: grouping-engine/src/engine.rs
//! Grouping Engine - The calculation core that transforms a record page
//! into a group tree and a flattened item list.
//!
//! Algorithm:
//! 1. Select grouping levels from the leading columns
//! 2. Recursively partition the records by each level's distinct formatted
//!    values, in first-occurrence order
//! 3. At the deepest level, project each record into a typed item and
//!    overlay the ancestor group values
//! 4. Thread a running cursor through the recursion so every group carries
//!    its flattened start offset and count
//!
//! The tree and the item list come out of the same traversal; that is what
//! keeps their ordering and counts consistent.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use dataset::{ColumnMeta, FieldValue, PageState, Record, RecordPage};

use crate::definition::GroupingDefinition;
use crate::view::{DisplayColumn, Group, GroupingResult, GroupingStats, Item};

/// Width applied when column metadata carries no hint.
const DEFAULT_COLUMN_WIDTH: u16 = 100;

/// Ancestor grouping values along the current recursion path, outermost
/// first. Level counts are small, so the stack stays inline.
type AncestorStack = SmallVec<[(String, String); 4]>;

// ============================================================================
// GROUPING CALCULATOR
// ============================================================================

/// The main calculation engine for one grouping pass.
struct GroupingCalculator<'a> {
    page: &'a RecordPage,
    levels: &'a [String],

    /// Flattened items, pushed in leaf emission order.
    items: Vec<Item>,
}

impl<'a> GroupingCalculator<'a> {
    fn new(page: &'a RecordPage, levels: &'a [String]) -> Self {
        GroupingCalculator {
            page,
            levels,
            items: Vec::new(),
        }
    }

    fn calculate(mut self, page: PageState) -> GroupingResult {
        let records: Vec<&'a Record> = self.page.records_in_order().collect();
        let total_records = records.len();

        let mut ancestors = AncestorStack::new();
        let groups = self.build_group_level(&records, 0, "", 0, &mut ancestors);

        let grouped_records = self.items.len();
        let excluded_records = total_records - grouped_records;
        if excluded_records > 0 {
            log::warn!(
                "grouping pass dropped {} of {} record(s) lacking a formatted value at a grouping level",
                excluded_records,
                total_records
            );
        }

        GroupingResult {
            groups,
            items: self.items,
            page,
            stats: GroupingStats {
                total_records,
                grouped_records,
                excluded_records,
            },
        }
    }

    /// Builds one level of the group tree over `subset`, emitting leaf items
    /// along the way. `start` is the flattened offset of the first item this
    /// call will emit; the returned sibling groups occupy contiguous ranges
    /// from there.
    fn build_group_level(
        &mut self,
        subset: &[&'a Record],
        depth: usize,
        parent_key: &str,
        start: usize,
        ancestors: &mut AncestorStack,
    ) -> Vec<Group> {
        let levels = self.levels;
        let field = levels[depth].as_str();

        // Distinct formatted values at this level, first-occurrence order.
        // Records without a formatted value here drop out of the pass.
        let mut seen: FxHashSet<&'a str> = FxHashSet::default();
        let mut distinct: Vec<&'a str> = Vec::new();
        for record in subset {
            if let Some(value) = record.formatted_value(field) {
                if !value.is_empty() && seen.insert(value) {
                    distinct.push(value);
                }
            }
        }

        let deepest = depth + 1 == levels.len();
        let mut groups = Vec::with_capacity(distinct.len());
        let mut cursor = start;

        for value in distinct {
            let matching: Vec<&'a Record> = subset
                .iter()
                .copied()
                .filter(|r| r.formatted_value(field) == Some(value))
                .collect();

            let key = if parent_key.is_empty() {
                value.to_string()
            } else {
                format!("{}-{}", parent_key, value)
            };

            ancestors.push((field.to_string(), value.to_string()));
            let (children, count) = if deepest {
                for record in &matching {
                    let mut item = project_record(record, self.page.columns());
                    for (level_field, label) in ancestors.iter() {
                        item.set(level_field.clone(), FieldValue::Text(label.clone()));
                    }
                    self.items.push(item);
                }
                (Vec::new(), matching.len())
            } else {
                let children =
                    self.build_group_level(&matching, depth + 1, &key, cursor, ancestors);
                let count: usize = children.iter().map(|g| g.count).sum();
                (children, count)
            };
            ancestors.pop();

            groups.push(Group {
                key,
                label: value.to_string(),
                start_index: cursor,
                count,
                depth,
                is_collapsed: true,
                children,
            });

            cursor += count;
        }

        groups
    }
}

// ============================================================================
// PUBLIC OPERATIONS
// ============================================================================

/// Executes one grouping pass over a page.
///
/// Zero levels (including absent column metadata) produce empty groups AND
/// empty items; the flat, ungrouped listing is the separate `project_flat`
/// operation, never an implicit fallback.
pub fn group_records(page: &RecordPage, definition: &GroupingDefinition) -> GroupingResult {
    let levels = definition.select_levels(page.columns());
    log::debug!(
        "grouping pass: {} record(s), {} level(s), page {}",
        page.record_count(),
        levels.len(),
        definition.page.page_number
    );

    if levels.is_empty() {
        return GroupingResult::empty(definition.page, page.record_count());
    }

    GroupingCalculator::new(page, &levels).calculate(definition.page)
}

/// The explicit no-grouping fallback: one item per record in page order.
/// Nothing is excluded and no ancestor overlay applies.
pub fn project_flat(page: &RecordPage) -> Vec<Item> {
    page.records_in_order()
        .map(|record| project_record(record, page.columns()))
        .collect()
}

/// Derives the columns shown for the flattened items: every declared column
/// whose name is not a grouping level, in declaration order.
pub fn project_display_columns(columns: &[ColumnMeta], levels: &[String]) -> Vec<DisplayColumn> {
    columns
        .iter()
        .filter(|column| !levels.iter().any(|level| level == &column.name))
        .map(|column| DisplayColumn {
            label: column.display_name.clone(),
            field_key: column.name.clone(),
            width_hint: column.width_hint.unwrap_or(DEFAULT_COLUMN_WIDTH),
        })
        .collect()
}

// ============================================================================
// ITEM PROJECTION
// ============================================================================

/// Projects one record into a typed item.
///
/// The record id is stamped first; then, per declared column, the formatted
/// value wins over the raw value, except that dates and entity references
/// keep their typed raw variant so consumers match on the variant instead of
/// sniffing strings. Columns with neither representation stay absent.
fn project_record(record: &Record, columns: &[ColumnMeta]) -> Item {
    let mut item = Item::new();
    item.set("id", FieldValue::Text(record.id().to_string()));

    for column in columns {
        let raw = record.raw_value(&column.name);
        let formatted = record.formatted_value(&column.name);
        let value = match (raw, formatted) {
            (
                Some(
                    typed @ (FieldValue::Date(_)
                    | FieldValue::Entity(_)
                    | FieldValue::EntityList(_)),
                ),
                _,
            ) => typed.clone(),
            (_, Some(formatted)) => FieldValue::Text(formatted.to_string()),
            (Some(raw), None) => raw.clone(),
            (None, None) => continue,
        };
        item.set(column.name.clone(), value);
    }

    item
}
