//! Tests for config loading

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_uses_defaults_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from_path(&dir.path().join("nope.toml"));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let file = write_config("[suggest]\nresults_limit = 3\n");
    let result = load_config_from_path(file.path());

    assert_eq!(result.config.suggest.results_limit, 3);
    assert!(result.warning.is_none());
}

#[test]
fn test_malformed_file_falls_back_with_warning() {
    let file = write_config("[suggest\nresults_limit = ");
    let result = load_config_from_path(file.path());

    assert_eq!(result.config, Config::default());
    let warning = result.warning.expect("malformed config should warn");
    assert!(warning.contains("Invalid config file"));
}

#[test]
fn test_zero_results_limit_is_rejected() {
    let file = write_config("[suggest]\nresults_limit = 0\n");
    let result = load_config_from_path(file.path());

    assert_eq!(result.config.suggest.results_limit, 9);
    assert!(result.warning.unwrap().contains("results_limit"));
}

#[test]
fn test_oversized_results_limit_is_rejected() {
    let file = write_config("[suggest]\nresults_limit = 70000\n");
    let result = load_config_from_path(file.path());

    assert_eq!(result.config.suggest.results_limit, 9);
    assert!(result.warning.unwrap().contains("between 1 and 100"));
}

#[test]
fn test_largest_results_limit_is_accepted() {
    let file = write_config("[suggest]\nresults_limit = 100\n");
    let result = load_config_from_path(file.path());

    assert_eq!(result.config.suggest.results_limit, MAX_RESULTS_LIMIT);
    assert!(result.warning.is_none());
}

#[test]
fn test_config_path_ends_with_lexi_config() {
    if let Some(path) = config_path() {
        assert!(path.ends_with(".config/lexi/config.toml"));
    }
}
