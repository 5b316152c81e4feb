use std::fs;

use tempfile::TempDir;

use super::*;

#[test]
fn test_config_path_location() {
    let path = config_path();
    assert!(path.is_some());
    let path = path.unwrap();
    assert!(path.to_string_lossy().contains(".config/mentions"));
    assert!(path.to_string_lossy().ends_with("config.toml"));
}

#[test]
fn test_parse_config_empty() {
    assert_eq!(parse_config("").unwrap(), Config::default());
}

#[test]
fn test_parse_config_invalid_toml() {
    let err = parse_config("[trigger\nmarker = ").unwrap_err();
    assert!(matches!(err, MentionError::Config(_)));
    assert!(err.to_string().contains("Invalid config file"));
}

#[test]
fn test_load_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[trigger]\nmarker = \"@\"\nclosing = \"\"\n").unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.trigger.marker, "@");
    assert_eq!(config.mention_config().unwrap().closing_trigger(), None);
}

#[test]
fn test_load_from_missing_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config_from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, MentionError::Io(_)));
}

#[test]
fn test_load_from_path_with_bad_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "trigger = 5").unwrap();

    assert!(matches!(
        load_config_from_path(&path),
        Err(MentionError::Config(_))
    ));
}
