//! Benchmarks for the pure chart math hot paths
//!
//! Run with: cargo bench charts

use slate::data::{bucket_values, count_categories, CategoryCounts, Intervals, TableData};
use slate::render::layout::TableLayout;
use slate::render::pie::allocate_slices;
use slate::render::scale::nice_ceiling;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_table(rows: usize) -> TableData {
    let classes = ["Guard", "Sniper", "Caster", "Medic", "Defender", "Vanguard"];
    let mut raw = vec![vec![
        "name".to_string(),
        "class".to_string(),
        "cost".to_string(),
    ]];
    for i in 0..rows {
        raw.push(vec![
            format!("operator-{}", i),
            classes[i % classes.len()].to_string(),
            format!("{}", 5 + (i % 30)),
        ]);
    }
    TableData::from_rows(raw)
}

// ============================================================================
// Column width computation
// ============================================================================

#[divan::bench(args = [100, 1_000, 10_000])]
fn column_widths(bencher: divan::Bencher, rows: usize) {
    let table = make_table(rows);
    bencher.bench_local(|| {
        divan::black_box(TableLayout::from_data(
            divan::black_box(&table),
            |s| s.chars().count() as f32 * 7.0,
        ))
    });
}

// ============================================================================
// Aggregation
// ============================================================================

#[divan::bench(args = [1_000, 10_000])]
fn aggregate_categories(bencher: divan::Bencher, rows: usize) {
    let table = make_table(rows);
    bencher.bench_local(|| divan::black_box(count_categories(divan::black_box(&table), 1)));
}

#[divan::bench(args = [1_000, 10_000])]
fn aggregate_buckets(bencher: divan::Bencher, rows: usize) {
    let table = make_table(rows);
    let intervals = Intervals::new(5, 5, 6);
    bencher.bench_local(|| {
        divan::black_box(bucket_values(divan::black_box(&table), 2, &intervals))
    });
}

// ============================================================================
// Slice allocation and axis scaling
// ============================================================================

#[divan::bench(args = [8, 64, 512])]
fn slice_allocation(bencher: divan::Bencher, categories: usize) {
    let counts = CategoryCounts::from_pairs(
        (0..categories).map(|i| (format!("category-{}", i), (i % 17 + 1) as u32)),
    );
    bencher.bench_local(|| divan::black_box(allocate_slices(divan::black_box(&counts))));
}

#[divan::bench]
fn nice_ceiling_sweep() {
    for raw in 1..1000 {
        divan::black_box(nice_ceiling(divan::black_box(raw as f64)));
    }
}
