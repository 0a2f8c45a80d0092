//! FILENAME: grouping-engine/src/view.rs
//! Grouping View - Renderable output for the frontend.
//!
//! The group tree and the flattened item list are two projections of the
//! same traversal and must stay consistent: walking `groups` depth-first in
//! emission order visits `items` exactly once, in order, and every group's
//! `[start_index, start_index + count)` range indexes into `items`.

use serde::{Deserialize, Serialize};

use dataset::{FieldValue, PageState};

// ============================================================================
// GROUP TREE
// ============================================================================

/// One node of the group hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Path-qualified key: ancestor labels joined with '-' (e.g. "East-A").
    pub key: String,

    /// The group's formatted value at its level.
    pub label: String,

    /// Offset of the group's first leaf item in the flattened item list.
    pub start_index: usize,

    /// Number of leaf items transitively under this group.
    pub count: usize,

    /// Nesting depth (0 = outermost).
    pub depth: usize,

    /// Whether the group starts collapsed in the view.
    #[serde(default = "default_collapsed")]
    pub is_collapsed: bool,

    /// Child groups, in emission order. Empty for leaf groups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Group>,
}

fn default_collapsed() -> bool {
    true
}

impl Group {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// One past the last flattened index covered by this group.
    pub fn end_index(&self) -> usize {
        self.start_index + self.count
    }
}

// ============================================================================
// FLATTENED ITEMS
// ============================================================================

/// One projected value of a flattened item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemField {
    pub name: String,
    pub value: FieldValue,
}

/// A flattened leaf record: a typed, insertion-ordered mapping from column
/// name to value. Columns without a value are absent rather than null-filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    fields: Vec<ItemField>,
}

impl Item {
    pub fn new() -> Self {
        Item { fields: Vec::new() }
    }

    /// Inserts a value, overwriting in place when the name is already set.
    /// Overwriting keeps the field's original position.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.value = value,
            None => self.fields.push(ItemField { name, value }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// The record id this item was projected from, used by callers to route
    /// selection and navigation.
    pub fn record_id(&self) -> Option<&str> {
        match self.get("id") {
            Some(FieldValue::Text(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemField> {
        self.fields.iter()
    }
}

// ============================================================================
// DISPLAY COLUMNS
// ============================================================================

/// A column shown for the flattened items: the declared columns minus the
/// grouping levels, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayColumn {
    /// Header label (the column's display name).
    pub label: String,

    /// Column identifier used to read item values.
    pub field_key: String,

    /// Rendering width hint.
    pub width_hint: u16,
}

// ============================================================================
// PASS STATISTICS
// ============================================================================

/// Counts describing one grouping pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingStats {
    /// Records on the consumed page.
    pub total_records: usize,

    /// Records that contributed an item.
    pub grouped_records: usize,

    /// Records dropped for lacking a formatted value at a traversed level.
    pub excluded_records: usize,
}

// ============================================================================
// RESULT
// ============================================================================

/// The complete output of one grouping pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupingResult {
    /// Top-level groups in emission order.
    pub groups: Vec<Group>,

    /// Flattened leaf items, ordered to match a depth-first walk of `groups`.
    pub items: Vec<Item>,

    /// The paging position this pass consumed, returned unchanged.
    pub page: PageState,

    pub stats: GroupingStats,
}

impl GroupingResult {
    /// An empty result for the degenerate inputs (no levels, no records,
    /// no columns).
    pub fn empty(page: PageState, total_records: usize) -> Self {
        GroupingResult {
            groups: Vec::new(),
            items: Vec::new(),
            page,
            stats: GroupingStats {
                total_records,
                ..GroupingStats::default()
            },
        }
    }

    /// Sum of top-level group counts; equals `items.len()` by construction.
    pub fn total_count(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_set_overwrites_in_place() {
        let mut item = Item::new();
        item.set("region", FieldValue::Text("East".to_string()));
        item.set("amount", FieldValue::Number(10.0));
        item.set("region", FieldValue::Text("West".to_string()));

        assert_eq!(item.len(), 2);
        assert_eq!(
            item.get("region"),
            Some(&FieldValue::Text("West".to_string()))
        );
        // Overwrite must not move the field to the end.
        assert_eq!(item.iter().next().unwrap().name, "region");
    }

    #[test]
    fn test_record_id_reads_text_id() {
        let mut item = Item::new();
        item.set("id", FieldValue::Text("rec-7".to_string()));
        assert_eq!(item.record_id(), Some("rec-7"));
        assert_eq!(Item::new().record_id(), None);
    }

    #[test]
    fn test_group_end_index() {
        let group = Group {
            key: "East".to_string(),
            label: "East".to_string(),
            start_index: 2,
            count: 3,
            depth: 0,
            is_collapsed: true,
            children: Vec::new(),
        };
        assert!(group.is_leaf());
        assert_eq!(group.end_index(), 5);
    }
}
