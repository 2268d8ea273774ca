//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles
//! separately.

#![allow(dead_code)]

use slate::data::{bucket_values, count_categories, Intervals, TableData};
use slate::model::AppModel;
use slate::theme::Theme;

/// Fixed-advance text measurer: 7px per char, no font needed
pub fn measure(text: &str) -> f32 {
    text.chars().count() as f32 * 7.0
}

/// Build a table with a header and `data_rows` rows of (name, class, cost)
pub fn sample_table(data_rows: usize) -> TableData {
    let classes = ["Guard", "Sniper", "Caster", "Medic"];
    let mut rows = vec![vec![
        "name".to_string(),
        "class".to_string(),
        "cost".to_string(),
    ]];
    for i in 0..data_rows {
        rows.push(vec![
            format!("op{}", i),
            classes[i % classes.len()].to_string(),
            format!("{}", 5 + (i % 30)),
        ]);
    }
    TableData::from_rows(rows)
}

/// Create a test model over `sample_table(data_rows)`.
///
/// The window is 800x700: the content rect below the mode bar leaves room
/// for exactly 20 visible table rows.
pub fn test_model(data_rows: usize) -> AppModel {
    let table = sample_table(data_rows);
    let intervals = Intervals::new(5, 5, 6);
    let categories = count_categories(&table, 1);
    let buckets = bucket_values(&table, 2, &intervals);

    AppModel::from_data(
        table,
        categories,
        buckets,
        intervals,
        1,
        2,
        Theme::default(),
        (800, 700),
        measure,
    )
}
