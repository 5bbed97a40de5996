//! Tests for loading configuration from disk.

use std::io::Write;
use tictactoe::{AppConfig, ScoringPolicy};

#[test]
fn test_load_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
scoring = "every-match"
log_file = "rounds.log"
x_color = "green"
"#
    )
    .expect("write");

    let config = AppConfig::load(Some(file.path())).expect("loads");
    assert_eq!(*config.scoring(), ScoringPolicy::EveryMatch);
    assert_eq!(config.log_file().to_str(), Some("rounds.log"));
    assert_eq!(config.x_color(), "green");
    assert_eq!(config.o_color(), "red");
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "scoring = ").expect("write");
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
