//! FILENAME: dataset/src/value.rs
//! PURPOSE: Defines the tagged value variant carried by record fields.
//! CONTEXT: Replaces an untyped key/value bag: dates and entity references
//! keep their own variants so consumers dispatch with a match instead of
//! pattern-sniffing strings at render time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reference to another record (a lookup/relationship value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,

    /// Primary display name of the referenced record, when known.
    #[serde(default)]
    pub name: Option<String>,

    /// Logical type of the referenced record (e.g. "account").
    #[serde(default)]
    pub entity_type: Option<String>,
}

impl EntityRef {
    pub fn new(id: impl Into<String>) -> Self {
        EntityRef {
            id: id.into(),
            name: None,
            entity_type: None,
        }
    }

    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        EntityRef {
            id: id.into(),
            name: Some(name.into()),
            entity_type: None,
        }
    }

    /// Display label: the name when present, otherwise the raw id.
    pub fn display_label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// The raw value held by one field of one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Empty,
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    Entity(EntityRef),
    EntityList(Vec<EntityRef>),
}

impl FieldValue {
    /// Returns the display string for this value.
    /// Dates render as `dd.mm.yyyy`; entity references render their name,
    /// falling back to the id; lists join their members with ", ".
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Boolean(b) => {
                if *b { "TRUE" } else { "FALSE" }.to_string()
            }
            FieldValue::Date(d) => d.format("%d.%m.%Y").to_string(),
            FieldValue::Entity(e) => e.display_label().to_string(),
            FieldValue::EntityList(list) => list
                .iter()
                .map(|e| e.display_label())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Returns true for the `Empty` variant.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

/// Parses an ISO-8601 / RFC 3339 timestamp (e.g. "2024-03-05T10:30:00.000Z")
/// into a UTC date-time. Returns None for anything else.
pub fn parse_iso_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_trims_whole_values() {
        assert_eq!(FieldValue::Number(42.0).display_string(), "42");
        assert_eq!(FieldValue::Number(1.5).display_string(), "1.5");
    }

    #[test]
    fn test_date_display_format() {
        let date = parse_iso_timestamp("2024-03-05T10:30:00.000Z").unwrap();
        assert_eq!(FieldValue::Date(date).display_string(), "05.03.2024");
    }

    #[test]
    fn test_entity_display_falls_back_to_id() {
        let named = EntityRef::named("rec-1", "Contoso");
        assert_eq!(FieldValue::Entity(named).display_string(), "Contoso");

        let unnamed = EntityRef::new("rec-2");
        assert_eq!(FieldValue::Entity(unnamed).display_string(), "rec-2");
    }

    #[test]
    fn test_entity_list_display_joins_members() {
        let list = FieldValue::EntityList(vec![
            EntityRef::named("a", "Alpha"),
            EntityRef::new("b"),
        ]);
        assert_eq!(list.display_string(), "Alpha, b");
    }

    #[test]
    fn test_parse_iso_timestamp_rejects_plain_text() {
        assert!(parse_iso_timestamp("not a date").is_none());
        assert!(parse_iso_timestamp("2024-03-05").is_none());
        assert!(parse_iso_timestamp("2024-03-05T10:30:00.000Z").is_some());
    }
}
