// tests/config_tests.rs
use std::io::Write;

use edittrail::config::Config;
use tempfile::NamedTempFile;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.max_locations, 1000);
    assert_eq!(config.effective_max_locations(), 1000);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_locations = 250").unwrap();

    let config = Config::load_from(file.path());
    assert_eq!(config.max_locations, 250);
}

#[test]
fn test_missing_file_gives_defaults() {
    let config = Config::load_from(std::path::Path::new("/nonexistent/edittrail.toml"));
    assert_eq!(config.max_locations, 1000);
}

#[test]
fn test_missing_option_gives_default() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# nothing configured").unwrap();

    let config = Config::load_from(file.path());
    assert_eq!(config.max_locations, 1000);
}

#[test]
fn test_non_numeric_option_falls_back_to_default() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_locations = \"lots\"").unwrap();

    let config = Config::load_from(file.path());
    assert_eq!(config.max_locations, 1000);
}

#[test]
fn test_malformed_toml_falls_back_to_default() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_locations = = 5").unwrap();

    let config = Config::load_from(file.path());
    assert_eq!(config.max_locations, 1000);
}

#[test]
fn test_floor_of_two() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "max_locations = 1").unwrap();

    let config = Config::load_from(file.path());
    // The raw value is preserved; the floor applies when it is used.
    assert_eq!(config.max_locations, 1);
    assert_eq!(config.effective_max_locations(), 2);
}

#[test]
fn test_round_trip() {
    let config = Config { max_locations: 42 };
    let toml_string = toml::to_string_pretty(&config).unwrap();

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(toml_string.as_bytes()).unwrap();

    let loaded = Config::load_from(file.path());
    assert_eq!(loaded.max_locations, 42);
}
