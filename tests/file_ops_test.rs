use std::fs;

use notepad::app::App;
use notepad::document::{self, DocumentError};
use tempfile::TempDir;

// ─── Helpers ─────────────────────────────────────────────────────────────

fn write(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════
// A. Save then Open
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn saved_buffer_reopens_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round.txt");

    let mut app = App::new();
    app.handle_event(crossterm::event::Event::Paste("hello".to_string()));
    assert!(app.write_to(&path));

    let mut reopened = App::new();
    assert!(reopened.open_path(&path));
    assert_eq!(reopened.content(), "hello");
}

#[test]
fn multiline_and_trailing_newline_survive() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "multi.txt", b"one\ntwo\n\nfour\n");

    let mut app = App::new();
    assert!(app.open_path(&path));
    assert_eq!(app.content(), "one\ntwo\n\nfour\n");

    let copy = dir.path().join("copy.txt");
    assert!(app.write_to(&copy));
    assert_eq!(fs::read(&copy).unwrap(), b"one\ntwo\n\nfour\n");
}

#[test]
fn unicode_content_survives() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "u.txt", "héllo wörld ✓".as_bytes());
    let mut app = App::new();
    assert!(app.open_path(&path));
    assert_eq!(app.content(), "héllo wörld ✓");
}

#[test]
fn save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "over.txt", b"a much longer original text");
    let mut app = App::new();
    app.handle_event(crossterm::event::Event::Paste("short".to_string()));
    assert!(app.write_to(&path));
    assert_eq!(fs::read_to_string(&path).unwrap(), "short");
}

// ═══════════════════════════════════════════════════════════════════════
// B. Merge
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn merge_newline_terminated_files() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"a\n");
    let b = write(&dir, "b.txt", b"b\n");

    let mut app = App::new();
    assert!(app.merge_paths(&a, &b));
    assert_eq!(app.content(), "a\nb\n");
}

#[test]
fn merge_terminates_every_line() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"x\ny");
    let b = write(&dir, "b.txt", b"z\n");
    assert_eq!(document::merge_files(&a, &b).unwrap(), "x\ny\nz\n");
}

#[test]
fn merge_with_empty_file() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"");
    let b = write(&dir, "b.txt", b"only");
    assert_eq!(document::merge_files(&a, &b).unwrap(), "only\n");
}

#[test]
fn merge_same_file_twice() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.txt", b"dup");
    assert_eq!(document::merge_files(&a, &a).unwrap(), "dup\ndup\n");
}

#[test]
fn merge_error_names_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone.txt");
    let a = write(&dir, "a.txt", b"a");
    let err = document::merge_files(&missing, &a).unwrap_err();
    assert!(matches!(err, DocumentError::Read { .. }));
    assert_eq!(err.path(), missing.as_path());
}

// ═══════════════════════════════════════════════════════════════════════
// C. Failures
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn open_directory_fails_without_changes() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new();
    app.handle_event(crossterm::event::Event::Paste("unchanged".to_string()));
    assert!(!app.open_path(dir.path()));
    assert_eq!(app.content(), "unchanged");
    assert_eq!(app.file_path(), None);
}

#[test]
fn write_error_reports_save_message() {
    let dir = TempDir::new().unwrap();
    let err = document::write_file(&dir.path().join("nope").join("x.txt"), "x").unwrap_err();
    assert_eq!(err.user_message(), document::SAVE_ERROR);
}

#[test]
fn read_error_reports_open_message() {
    let dir = TempDir::new().unwrap();
    let err = document::read_file(&dir.path().join("nope.txt")).unwrap_err();
    assert_eq!(err.user_message(), document::OPEN_ERROR);
    assert!(err.to_string().contains("nope.txt"));
}
