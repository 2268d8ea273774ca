//! Ingestion integration tests - file loading, delimiter detection and the
//! full parse → aggregate pipeline

use std::io::Write;

use slate::data::{
    bucket_values, count_categories, detect_delimiter, load_csv_file, Delimiter, Intervals,
};
use slate::render::pie::allocate_slices;

fn write_temp(ext: &str, content: &str) -> tempfile::TempPath {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", ext))
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file.into_temp_path()
}

#[test]
fn test_load_csv_by_extension() {
    let path = write_temp("csv", "name,class,cost\nSilverAsh,Guard,19\nExusiai,Sniper,11\n");
    let data = load_csv_file(&path, None).unwrap();

    assert_eq!(data.row_count(), 3);
    assert_eq!(data.get(0, 0), "name");
    assert_eq!(data.get(2, 1), "Sniper");
}

#[test]
fn test_load_tsv_by_extension() {
    let path = write_temp("tsv", "name\tclass\nSilverAsh\tGuard\n");
    let data = load_csv_file(&path, None).unwrap();

    assert_eq!(data.row_count(), 2);
    assert_eq!(data.get(1, 1), "Guard");
}

#[test]
fn test_explicit_delimiter_overrides_extension() {
    let path = write_temp("csv", "name;class\nSilverAsh;Guard\n");
    let data = load_csv_file(&path, Some(Delimiter::Semicolon)).unwrap();

    assert_eq!(data.column_count(), 2);
    assert_eq!(data.get(1, 0), "SilverAsh");
}

#[test]
fn test_missing_file_is_an_error() {
    let err = load_csv_file(std::path::Path::new("/no/such/file.csv"), None).unwrap_err();
    assert!(err.to_string().contains("no/such/file.csv"));
}

#[test]
fn test_content_detection_for_unknown_extension() {
    assert_eq!(detect_delimiter("a|b|c\n1|2|3"), Delimiter::Pipe);
    assert_eq!(detect_delimiter("a;b\n1;2"), Delimiter::Semicolon);
}

#[test]
fn test_full_pipeline_from_file_to_charts() {
    let path = write_temp(
        "csv",
        "name,class,cost\n\
         SilverAsh,Guard,19\n\
         Exusiai,Sniper,11\n\
         Eyjafjalla,Caster,21\n\
         Saria,Defender,23\n\
         Thorns,Guard,17\n\
         W,Sniper,13\n\
         bad-row-no-cost,Specialist,n/a\n",
    );
    let data = load_csv_file(&path, None).unwrap();

    let categories = count_categories(&data, 1);
    assert_eq!(categories.get("Guard"), 2);
    assert_eq!(categories.get("Sniper"), 2);
    assert_eq!(categories.total(), 7);

    let slices = allocate_slices(&categories);
    assert_eq!(slices.iter().map(|s| s.sweep_deg).sum::<i32>(), 360);

    let intervals = Intervals::new(5, 5, 6);
    let buckets = bucket_values(&data, 2, &intervals);
    // the unparsable cost row is skipped
    assert_eq!(buckets.total(), 6);
    assert_eq!(buckets.get("[10,15)"), 2);
    assert_eq!(buckets.get("[15,20)"), 2);
    assert_eq!(buckets.get("[20,25)"), 2);
}
