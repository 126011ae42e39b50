//! End-to-end tests for the CLI command layer.

use specforge_cli::cli::{IngestArgs, PreviewArgs};
use specforge_cli::commands::{execute_ingest, execute_preview};
use specforge_cli::config::OutputFormat;
use specforge_cli::Formatter;
use specforge_store::SqliteStore;
use std::fs;

const SHEET: &str = "\
Battery

57Wh Rechargeable Li-ion Battery with Rapid Charge

Battery Life

MobileMark® 2018: up to 12.5 hr
JEITA 2.0: up to 18.1 hr

Notes:

Power Adapter
65W USB-C slim adapter
";

#[tokio::test]
async fn test_ingest_stores_specifications() {
    let dir = tempfile::tempdir().unwrap();
    let sheet_path = dir.path().join("e14.txt");
    fs::write(&sheet_path, SHEET).unwrap();

    let mut store = SqliteStore::new(dir.path().join("test.db")).unwrap();
    let formatter = Formatter::new(OutputFormat::Table, false);

    let args = IngestArgs {
        file: sheet_path,
        profile: "thinkpad".to_string(),
        brand: "Lenovo".to_string(),
        model: "ThinkPad E14 Gen 5".to_string(),
        variant: Some("Intel".to_string()),
    };
    execute_ingest(args, &mut store, &formatter).await.unwrap();

    assert!(store.count_specifications().unwrap() >= 3);
    let laptop = store
        .find_laptop("Lenovo", "ThinkPad E14 Gen 5", Some("Intel"))
        .unwrap();
    assert!(laptop.is_some());
}

#[tokio::test]
async fn test_ingest_reingest_replaces_rows() {
    let dir = tempfile::tempdir().unwrap();
    let sheet_path = dir.path().join("e14.txt");
    fs::write(&sheet_path, SHEET).unwrap();

    let mut store = SqliteStore::new(dir.path().join("test.db")).unwrap();
    let formatter = Formatter::new(OutputFormat::Table, false);

    let args = IngestArgs {
        file: sheet_path.clone(),
        profile: "thinkpad".to_string(),
        brand: "Lenovo".to_string(),
        model: "ThinkPad E14 Gen 5".to_string(),
        variant: None,
    };
    execute_ingest(args, &mut store, &formatter).await.unwrap();

    let first_count = store.count_specifications().unwrap();
    assert!(first_count >= 3);

    // Full-replace semantics: a second ingest must not duplicate rows.
    let args = IngestArgs {
        file: sheet_path,
        profile: "thinkpad".to_string(),
        brand: "Lenovo".to_string(),
        model: "ThinkPad E14 Gen 5".to_string(),
        variant: None,
    };
    execute_ingest(args, &mut store, &formatter).await.unwrap();
    assert_eq!(store.count_specifications().unwrap(), first_count);
}

#[tokio::test]
async fn test_ingest_unknown_profile_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let sheet_path = dir.path().join("e14.txt");
    fs::write(&sheet_path, SHEET).unwrap();

    let mut store = SqliteStore::new(dir.path().join("test.db")).unwrap();
    let formatter = Formatter::new(OutputFormat::Table, false);

    let args = IngestArgs {
        file: sheet_path,
        profile: "chromebook".to_string(),
        brand: "Acme".to_string(),
        model: "X1".to_string(),
        variant: None,
    };
    let result = execute_ingest(args, &mut store, &formatter).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_preview_runs_on_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::new(dir.path().join("test.db")).unwrap();
    let formatter = Formatter::new(OutputFormat::Json, false);

    let args = PreviewArgs {
        limit: 10,
        categories: false,
    };
    execute_preview(args, &store, &formatter).await.unwrap();

    let args = PreviewArgs {
        limit: 10,
        categories: true,
    };
    execute_preview(args, &store, &formatter).await.unwrap();
}
