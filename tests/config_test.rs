use std::path::PathBuf;

use notepad::components::file_picker::FileFilter;
use notepad::config::Config;
use tempfile::TempDir;

#[test]
fn defaults_without_arguments() {
    let config = Config::from_args(["notepad"], None).unwrap();
    assert_eq!(config.file, None);
    assert_eq!(config.start_dir, std::env::current_dir().unwrap());
    assert_eq!(config.default_filter, FileFilter::Text);
    assert_eq!(config.log_file, None);
    assert_eq!(config.log_filter, "info");
}

#[test]
fn positional_file_is_kept_as_given() {
    let config = Config::from_args(["notepad", "notes.txt"], None).unwrap();
    assert_eq!(config.file, Some(PathBuf::from("notes.txt")));
}

#[test]
fn dir_and_all_files_flags() {
    let dir = TempDir::new().unwrap();
    let dir_arg = dir.path().to_str().unwrap();
    let config = Config::from_args(["notepad", "--dir", dir_arg, "--all-files"], None).unwrap();
    assert_eq!(config.start_dir, dir.path());
    assert_eq!(config.default_filter, FileFilter::All);
}

#[test]
fn relative_dir_is_made_absolute() {
    let config = Config::from_args(["notepad", "--dir", "."], None).unwrap();
    assert!(config.start_dir.is_absolute());
    assert_eq!(
        std::fs::canonicalize(&config.start_dir).unwrap(),
        std::fs::canonicalize(std::env::current_dir().unwrap()).unwrap()
    );
    assert!(config.start_dir.parent().is_some_and(|p| !p.as_os_str().is_empty()));
}

#[test]
fn dir_must_exist() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let err = Config::from_args(["notepad", "--dir", missing.to_str().unwrap()], None).unwrap_err();
    assert!(err.to_string().contains("Not a directory"));
}

#[test]
fn log_file_and_filter() {
    let config = Config::from_args(
        ["notepad", "--log-file", "/tmp/notepad.log"],
        Some("notepad=debug".to_string()),
    )
    .unwrap();
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/notepad.log")));
    assert_eq!(config.log_filter, "notepad=debug");
}

#[test]
fn blank_log_filter_falls_back_to_info() {
    let config = Config::from_args(["notepad"], Some("  ".to_string())).unwrap();
    assert_eq!(config.log_filter, "info");
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Config::from_args(["notepad", "--bogus"], None).is_err());
}
