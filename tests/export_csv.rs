//! Tests for CSV export of a missing-data report.

use schema_gap::config::{NOT_AVAILABLE_PLACEHOLDER, REPORT_CSV_HEADERS, UTF8_BOM};
use schema_gap::export::{export_csv, report_rows, write_report_csv};
use schema_gap::{run_audit_blocking, AuditRequest, MissingDataReport};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::{article_reference, page_with_json_ld, rich_competitor};

fn sample_report() -> MissingDataReport {
    let unicode_competitor = page_with_json_ld(
        &[r#"{"@type": "Recipe", "name": "Crème brûlée"}"#],
        "",
    );
    run_audit_blocking(
        AuditRequest::new(article_reference())
            .with_competitor("Acme", rich_competitor())
            .with_competitor("Pâtisserie", unicode_competitor),
    )
    .expect("audit should run")
    .report
}

fn read_back(bytes: &[u8]) -> Vec<csv::StringRecord> {
    let text = std::str::from_utf8(bytes).expect("export should be UTF-8");
    let body = text.strip_prefix(UTF8_BOM).expect("export should start with a BOM");
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let headers = reader.headers().expect("header row").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), REPORT_CSV_HEADERS.to_vec());
    reader.records().map(|r| r.expect("valid record")).collect()
}

#[test]
fn test_export_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("gaps.csv");
    let report = sample_report();

    let count = export_csv(&report, Some(output.as_path())).expect("export should succeed");
    let bytes = std::fs::read(&output).expect("output should exist");
    let records = read_back(&bytes);

    assert_eq!(count, records.len());
    assert_eq!(count, report_rows(&report).unwrap().len());
}

#[test]
fn test_rows_keep_report_order_and_unicode() {
    let report = sample_report();
    let mut buffer = Vec::new();
    write_report_csv(&report, &mut buffer).unwrap();
    let records = read_back(&buffer);

    let first_cells: Vec<&str> = records.iter().map(|r| &r[0]).collect();
    let expected: Vec<String> = report
        .missing_types
        .keys()
        .cloned()
        .chain(report.missing_properties.iter().map(|row| row.label.clone()))
        .collect();
    assert_eq!(first_cells, expected);

    let recipe = records.iter().find(|r| &r[0] == "Recipe").expect("Recipe row");
    assert_eq!(&recipe[1], "Pâtisserie");
    assert!(recipe[4].contains("Crème brûlée"));
    assert!(recipe[3].contains("\"@type\": \"Recipe\""));

    let article = records
        .iter()
        .find(|r| &r[0] == "Article (missing properties)")
        .expect("Article row");
    assert_eq!(&article[1], "Acme");
    assert_eq!(&article[2], "publisher");
}

#[test]
fn test_placeholder_for_absent_example() {
    let mut report = MissingDataReport::default();
    report.missing_types.insert(
        "Course".to_string(),
        schema_gap::MissingTypeEntry {
            competitors_with_type: vec!["A".to_string()],
            competitor_example: None,
            canonical_example: schema_gap::resolve("Course"),
        },
    );
    let mut buffer = Vec::new();
    assert_eq!(write_report_csv(&report, &mut buffer).unwrap(), 1);
    let records = read_back(&buffer);
    assert_eq!(&records[0][4], NOT_AVAILABLE_PLACEHOLDER);
}

#[test]
fn test_export_to_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("missing").join("gaps.csv");
    let result = export_csv(&sample_report(), Some(output.as_path()));
    assert!(matches!(result, Err(schema_gap::ExportError::IoError(_))));
}
