use std::fs;
use std::io;

use pwgen::error::PwgenError;
use pwgen::logging::{error_log_path, file_subscriber, log_error};
use tempfile::tempdir;

#[test]
fn test_errors_are_appended_with_cause_chain() {
    let dir = tempdir().expect("Failed to create temp directory");
    let log_path = error_log_path(dir.path());
    fs::write(&log_path, "earlier entry\n").unwrap();

    let subscriber = file_subscriber(dir.path()).expect("Failed to open error log");
    let error = PwgenError::from_io("/tmp/pw.txt", io::Error::other("disk full"));
    tracing::subscriber::with_default(subscriber, || log_error(&error));

    let contents = fs::read_to_string(&log_path).unwrap();
    assert!(contents.starts_with("earlier entry\n"));
    assert!(contents.contains("ERROR"));
    assert!(contents.contains("I/O error on /tmp/pw.txt"));
    assert!(contents.contains("caused by: disk full"));
}

#[test]
fn test_missing_log_directory_is_created() {
    let dir = tempdir().expect("Failed to create temp directory");
    let log_dir = dir.path().join("pwgen").join("logs");

    let subscriber = file_subscriber(&log_dir).expect("Failed to open error log");
    tracing::subscriber::with_default(subscriber, || log_error(&PwgenError::ConfigDir));

    let contents = fs::read_to_string(error_log_path(&log_dir)).unwrap();
    assert!(contents.contains("Could not determine configuration directory"));
}

#[test]
fn test_unusable_log_directory_is_an_error_not_a_panic() {
    let dir = tempdir().expect("Failed to create temp directory");
    let blocker = dir.path().join("not-a-directory");
    fs::write(&blocker, "plain file").unwrap();

    assert!(file_subscriber(&blocker.join("logs")).is_err());
}
