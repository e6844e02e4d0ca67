mod common;

use common::{create_zip, init_logger, snapshot};
use std::fs;
use tempfile::TempDir;
use zipflat_lib::{run, Operation, OrganizerConfig};

#[test]
fn test_monthly_archives_merge_into_categories() {
    init_logger();
    let tmp = TempDir::new().unwrap();
    let src = tmp.path();

    // Each month ships the same category layout under a differently named wrapper
    create_zip(
        src,
        "2510.zip",
        &[
            ("月次資料_10月/01-Sales/oct.xlsx", b"oct"),
            ("月次資料_10月/readme.txt", b"october readme"),
            ("__MACOSX/月次資料_10月/._readme.txt", b"fork"),
        ],
    );
    create_zip(
        src,
        "2511.zip",
        &[
            ("月次資料_11月/01-Sales/nov.xlsx", b"nov"),
            ("月次資料_11月/02-Costs/nov.csv", b"nov costs"),
            ("月次資料_11月/readme.txt", b"november readme"),
            ("__MACOSX/月次資料_11月/._readme.txt", b"fork"),
        ],
    );

    let config = OrganizerConfig::new(src, src.join("2510-2511"));
    let report = run(&config).unwrap();

    assert_eq!(
        snapshot(&config.dest_dir),
        vec![
            "01-Sales/",
            "01-Sales/nov.xlsx",
            "01-Sales/oct.xlsx",
            "02-Costs/",
            "02-Costs/nov.csv",
            "readme.txt",
        ]
    );
    assert_eq!(
        fs::read_to_string(config.dest_dir.join("readme.txt")).unwrap(),
        "november readme"
    );
    assert!(!report.has_failures());
    assert_eq!(report.count(Operation::Extract), 2);
    assert_eq!(report.count(Operation::RemoveJunk), 1);
    // Archives are left in place
    assert!(src.join("2510.zip").exists());
    assert!(src.join("2511.zip").exists());
}

#[test]
fn test_corrupt_archive_does_not_abort_batch() {
    init_logger();
    let tmp = TempDir::new().unwrap();
    let src = tmp.path();
    create_zip(src, "a.zip", &[("First/one.txt", b"1")]);
    fs::write(src.join("b.zip"), b"PK\x03\x04 truncated garbage").unwrap();
    create_zip(src, "c.zip", &[("Third/three.txt", b"3")]);

    let config = OrganizerConfig::from_source(src);
    let report = run(&config).unwrap();

    assert_eq!(snapshot(&config.dest_dir), vec!["one.txt", "three.txt"]);
    let summary = report.summary();
    assert_eq!(summary.archives_extracted, 2);
    assert_eq!(summary.archives_failed, 1);
    assert_eq!(summary.failures, 1);
}

#[test]
fn test_rerun_is_stable() {
    init_logger();
    let tmp = TempDir::new().unwrap();
    let src = tmp.path();
    create_zip(src, "pack.zip", &[("Wrap/01-Docs/a.txt", b"a"), ("Wrap/b.txt", b"b")]);

    let config = OrganizerConfig::from_source(src);
    run(&config).unwrap();
    let first = snapshot(&config.dest_dir);

    // Extracting again recreates the wrapper, which merges back into the same layout
    let report = run(&config).unwrap();
    assert_eq!(snapshot(&config.dest_dir), first);
    assert!(!report.has_failures());
}

#[test]
fn test_empty_source_creates_destination() {
    init_logger();
    let tmp = TempDir::new().unwrap();
    let config = OrganizerConfig::new(tmp.path(), tmp.path().join("out/nested"));

    let report = run(&config).unwrap();

    assert!(config.dest_dir.is_dir());
    assert!(report.entries.is_empty());
}

#[test]
fn test_missing_source_is_setup_error() {
    init_logger();
    let tmp = TempDir::new().unwrap();
    let config = OrganizerConfig::new(tmp.path().join("absent"), tmp.path().join("out"));

    let err = run(&config).unwrap_err();
    assert!(err.to_string().contains("Failed to read source"));
}
