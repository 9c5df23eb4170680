//! Loader, export, and sample round trips against real files.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use callscope_analysis::report::RecordsReport;
use callscope_analysis::{enrich, normalize, ColumnMapping};
use callscope_core::errors::{CallscopeErrorCode, LoadError};
use callscope_core::types::{CellValue, TalkTimeUnit};
use callscope_io::sample::{extract_sample, write_sample, SampleOptions};
use callscope_io::{fingerprint, load_table, write_report, LoadOptions};

fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/calls")
        .join(name)
}

#[test]
fn csv_cells_are_typed() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "calls.csv",
        "Date,Agent,Status,Minutes\n2024-03-04 09:00,Alice,ANSWERED,2.5\n2024-03-04 09:05,,DROPPED,\n",
    );
    let table = load_table(&path, &LoadOptions::default()).unwrap();
    assert_eq!(table.columns(), &["Date", "Agent", "Status", "Minutes"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, 3), &CellValue::Number(2.5));
    assert_eq!(table.cell(1, 1), &CellValue::Empty);
    assert_eq!(table.cell(1, 3), &CellValue::Empty);
}

#[test]
fn configured_delimiter_is_used() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "calls.txt", "a;b\n1;x\n");
    let options = LoadOptions {
        delimiter: b';',
        ..LoadOptions::default()
    };
    let table = load_table(&path, &options).unwrap();
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.cell(0, 1), &CellValue::Text("x".into()));
}

#[test]
fn ragged_rows_are_padded() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "ragged.csv", "a,b,c\n1\n1,2,3,4\n");
    let table = load_table(&path, &LoadOptions::default()).unwrap();
    assert_eq!(table.rows()[0].len(), 3);
    assert_eq!(table.rows()[1].len(), 3);
}

#[test]
fn load_failures_are_fatal() {
    let dir = TempDir::new().unwrap();

    let header_only = write(&dir, "empty.csv", "a,b\n");
    let err = load_table(&header_only, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::EmptyDataset { .. }));
    assert_eq!(err.error_code(), "EMPTY_DATASET");

    let json = write(&dir, "calls.json", "{}");
    let err = load_table(&json, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");

    let missing = dir.path().join("missing.csv");
    let err = load_table(&missing, &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));

    let missing_sheet = dir.path().join("missing.xlsx");
    let err = load_table(&missing_sheet, &LoadOptions::default()).unwrap_err();
    assert_eq!(err.error_code(), "LOAD_ERROR");
}

#[test]
fn fixture_runs_through_the_pipeline_and_exports() {
    let table = load_table(&fixture("mapped_calls.csv"), &LoadOptions::default()).unwrap();
    let mapping = ColumnMapping::split("Call Date", "Call Time")
        .with_agent("Agent Name")
        .with_outcome("Disposition")
        .with_talk_time("Talk Seconds", TalkTimeUnit::Seconds);
    let records = enrich(&normalize(&table, &mapping).unwrap()).unwrap();
    assert_eq!(records.len(), table.row_count());
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 3, 4));

    let out = TempDir::new().unwrap();
    let path = write_report(&RecordsReport(&records), &out.path().join("exports")).unwrap();
    assert!(path.ends_with("call_records.csv"));
    let body = fs::read_to_string(&path).unwrap();
    assert_eq!(body.lines().count(), records.len() + 1);
    assert!(body.starts_with("row,call_datetime,date"));
}

#[test]
fn sample_extraction_round_trips_through_csv() {
    let table = load_table(&fixture("sample_source.csv"), &LoadOptions::default()).unwrap();
    let sample = extract_sample(&table, &SampleOptions { rows: 5, seed: 42 });
    assert_eq!(sample.row_count(), 5);

    let out = TempDir::new().unwrap();
    let path = out.path().join("sample.csv");
    write_sample(&sample, &path).unwrap();
    let reloaded = load_table(&path, &LoadOptions::default()).unwrap();
    assert_eq!(reloaded.row_count(), 5);
    assert_eq!(reloaded.columns(), sample.columns());
}

#[test]
fn fingerprint_tracks_content() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.csv", "x,y\n1,2\n");
    let b = write(&dir, "b.csv", "x,y\n1,2\n");
    let c = write(&dir, "c.csv", "x,y\n1,3\n");
    let load = |p: &PathBuf| fingerprint(&load_table(p, &LoadOptions::default()).unwrap());
    assert_eq!(load(&a), load(&b));
    assert_ne!(load(&a), load(&c));
}
