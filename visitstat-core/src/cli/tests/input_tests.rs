use crate::cli::load_log_lines;
use crate::test_helpers::SAMPLE_LOGS;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn loads_every_line_in_order() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, SAMPLE_LOGS.join("\n")).unwrap();

    // Act
    let lines = load_log_lines(&path).unwrap();

    // Assert
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], SAMPLE_LOGS[0]);
    assert_eq!(lines[5], SAMPLE_LOGS[5]);
}

#[test]
fn handles_crlf_and_trailing_newline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, "a\r\nb\r\n").unwrap();

    let lines = load_log_lines(&path).unwrap();

    assert_eq!(lines, vec!["a", "b"]);
}

#[test]
fn missing_file_reports_its_path() {
    let err = load_log_lines(Path::new("/nonexistent/access.log")).unwrap_err();

    assert_eq!(err.path, Path::new("/nonexistent/access.log"));
    assert!(err.to_string().contains("/nonexistent/access.log"));
}
