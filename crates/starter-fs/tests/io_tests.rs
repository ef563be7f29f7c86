//! Tests for atomic I/O operations

use pretty_assertions::assert_eq;
use starter_fs::io::{read_text, write_atomic, write_text};
use tempfile::TempDir;

#[test]
fn test_write_then_read_roundtrip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.txt");

    write_text(&path, "hello world").unwrap();
    let content = read_text(&path).unwrap();

    assert_eq!(content, "hello world");
}

#[test]
fn test_write_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("a").join("b").join("c.txt");

    write_text(&path, "nested").unwrap();

    assert!(path.is_file());
    assert_eq!(read_text(&path).unwrap(), "nested");
}

#[test]
fn test_write_overwrites_existing_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.txt");

    write_text(&path, "first").unwrap();
    write_text(&path, "second").unwrap();

    assert_eq!(read_text(&path).unwrap(), "second");
}

#[test]
fn test_write_leaves_no_temp_file_behind() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.txt");

    write_atomic(&path, b"content").unwrap();

    let entries: Vec<_> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["file.txt".to_string()]);
}

#[test]
fn test_read_missing_file_reports_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.txt");

    let err = read_text(&path).unwrap_err();

    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn test_write_preserves_utf8_content() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.txt");

    let content = "const greeting = 'héllo wörld — ünïcode';\n";
    write_text(&path, content).unwrap();

    assert_eq!(read_text(&path).unwrap(), content);
}
