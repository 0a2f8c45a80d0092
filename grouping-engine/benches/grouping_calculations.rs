//! FILENAME: benches/grouping_calculations.rs
//! Criterion benchmarks for the grouping pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dataset::{ColumnMeta, FieldValue, Record, RecordPage};
use grouping_engine::{group_records, GroupingDefinition};

/// Builds a synthetic sales page with repeating region/team/rep values so
/// every grouping level has a realistic cardinality.
fn build_page(rows: usize) -> RecordPage {
    let columns = vec![
        ColumnMeta::new("region", "Region"),
        ColumnMeta::new("team", "Team"),
        ColumnMeta::new("rep", "Sales Rep"),
        ColumnMeta::new("amount", "Amount"),
    ];

    let regions = ["North", "South", "East", "West"];
    let teams = ["Alpha", "Beta", "Gamma"];

    let mut order = Vec::with_capacity(rows);
    let mut records = Vec::with_capacity(rows);
    for i in 0..rows {
        let id = format!("rec-{}", i);
        let mut record = Record::new(id.as_str());
        record.set_formatted("region", regions[i % regions.len()]);
        record.set_formatted("team", teams[i % teams.len()]);
        record.set_formatted("rep", format!("Rep {}", i % 17));
        record.set_formatted("amount", format!("{}.00", i % 900));
        record.set_raw("amount", FieldValue::Number((i % 900) as f64));
        order.push(id);
        records.push(record);
    }

    RecordPage::from_parts(columns, order, records).expect("bench page must be well-formed")
}

fn bench_grouping(c: &mut Criterion) {
    let page = build_page(5_000);

    let two_levels = GroupingDefinition::default();
    c.bench_function("group_records_5k_two_levels", |b| {
        b.iter(|| group_records(black_box(&page), black_box(&two_levels)))
    });

    let three_levels = GroupingDefinition::with_level_count(3);
    c.bench_function("group_records_5k_three_levels", |b| {
        b.iter(|| group_records(black_box(&page), black_box(&three_levels)))
    });
}

criterion_group!(benches, bench_grouping);
criterion_main!(benches);
