//! FILENAME: tests/common/mod.rs
//! Fixtures for grouping engine integration tests.

use dataset::{ColumnMeta, FieldValue, Record, RecordPage};

/// Region/Team sales dataset used across the grouping tests.
pub struct SalesFixture;

impl SalesFixture {
    /// Column declarations. The two leading columns double as the default
    /// grouping levels.
    pub fn columns() -> Vec<ColumnMeta> {
        vec![
            ColumnMeta::new("region", "Region").with_width(120),
            ColumnMeta::new("team", "Team").with_width(80),
            ColumnMeta::new("rep", "Sales Rep"),
            ColumnMeta::new("amount", "Amount").with_width(90),
        ]
    }

    /// One sales record. An empty string for a text column stands for a
    /// value the source could not format, so the field stays absent.
    pub fn record(id: &str, region: &str, team: &str, rep: &str, amount: f64) -> Record {
        let mut record = Record::new(id);
        for (column, value) in [("region", region), ("team", team), ("rep", rep)] {
            if !value.is_empty() {
                record.set_formatted(column, value);
                record.set_raw(column, FieldValue::Text(value.to_string()));
            }
        }
        record.set_formatted("amount", format!("{:.2}", amount));
        record.set_raw("amount", FieldValue::Number(amount));
        record
    }

    /// Builds a page from `(id, region, team, rep, amount)` rows in order.
    pub fn page(rows: &[(&str, &str, &str, &str, f64)]) -> RecordPage {
        let order: Vec<String> = rows.iter().map(|r| r.0.to_string()).collect();
        let records: Vec<Record> = rows
            .iter()
            .map(|(id, region, team, rep, amount)| Self::record(id, region, team, rep, *amount))
            .collect();
        RecordPage::from_parts(Self::columns(), order, records)
            .expect("fixture page must be well-formed")
    }

    /// The five-record, single-field example: regions East, East, West,
    /// West, West.
    pub fn regions_page() -> RecordPage {
        Self::page(&[
            ("r1", "East", "A", "Ann", 100.0),
            ("r2", "East", "A", "Bob", 250.0),
            ("r3", "West", "A", "Cyd", 75.0),
            ("r4", "West", "B", "Dee", 310.0),
            ("r5", "West", "B", "Eli", 40.0),
        ])
    }
}
