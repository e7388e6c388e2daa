//! Command-line parsing and override tests.

mod common;

use clap::Parser;
use common::temp_config;
use pawmatch::cli::Cli;
use pawmatch::config::{Config, ConfigError, ConfigStore};
use std::path::PathBuf;

#[test]
fn test_no_args_leaves_config_untouched() {
    let cli = Cli::try_parse_from(["pawmatch"]).unwrap();
    let config = cli.apply(Config::default()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_repeatable_filters_override_config() {
    let cli = Cli::try_parse_from([
        "pawmatch",
        "--breed",
        "Pug",
        "--breed",
        "Boxer",
        "--zip",
        "10001",
        "--age-min",
        "2",
        "--sort",
        "name:asc",
        "--page-size",
        "50",
    ])
    .unwrap();

    let mut base = Config::default();
    base.query.breeds = vec!["Husky".to_string()];
    let config = cli.apply(base).unwrap();

    assert_eq!(config.query.breeds, vec!["Pug", "Boxer"]);
    assert_eq!(config.query.zip_codes, vec!["10001"]);
    assert_eq!(config.query.age_min, Some(2));
    assert_eq!(config.query.sort, "name:asc");
    assert_eq!(config.query.page_size, 50);
}

#[test]
fn test_overrides_are_validated() {
    let cli = Cli::try_parse_from(["pawmatch", "--age-min", "10", "--age-max", "3"]).unwrap();
    let err = cli.apply(Config::default()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));

    let cli = Cli::try_parse_from(["pawmatch", "--base-url", "localhost:9000"]).unwrap();
    assert!(cli.apply(Config::default()).is_err());
}

#[test]
fn test_explicit_config_path_is_loaded() {
    let (_dir, path) = temp_config("[query]\npage_size = 7\n");
    let cli = Cli {
        config: Some(path.clone()),
        ..Cli::default()
    };

    let (config, loaded_from) = cli.load_config().unwrap();
    assert_eq!(config.query.page_size, 7);
    assert_eq!(loaded_from, path);
}

#[test]
fn test_log_file_flag() {
    let cli = Cli::try_parse_from(["pawmatch", "--log-file", "/tmp/paw.log"]).unwrap();
    assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/paw.log")));
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["pawmatch", "--color", "red"]).is_err());
}

#[test]
fn test_overrides_survive_config_reload() {
    let (_dir, path) = temp_config("[query]\nbreeds = [\"Boxer\"]\n");
    let cli = Cli::parse_from(["pawmatch", "--breed", "Pug"]);
    let config = cli.apply(Config::load_from(&path).unwrap()).unwrap();
    let overrides = cli.clone();
    let store = ConfigStore::new(config, path.clone()).with_overrides(move |c| overrides.apply(c));

    std::fs::write(&path, "[query]\nbreeds = [\"Boxer\"]\nage_min = 3\n").unwrap();
    let key = store.reload().unwrap();

    assert_eq!(key.filter.breeds, vec!["Pug".to_string()]);
    assert_eq!(key.filter.age_min, Some(3));
    assert_eq!(store.get().query.breeds, vec!["Pug".to_string()]);
}

#[test]
fn test_reload_rejects_file_that_breaks_overrides() {
    let (_dir, path) = temp_config("[query]\nage_max = 10\n");
    let cli = Cli::parse_from(["pawmatch", "--age-min", "5"]);
    let config = cli.apply(Config::load_from(&path).unwrap()).unwrap();
    let overrides = cli.clone();
    let store = ConfigStore::new(config, path.clone()).with_overrides(move |c| overrides.apply(c));

    std::fs::write(&path, "[query]\nage_max = 2\n").unwrap();
    assert!(matches!(store.reload(), Err(ConfigError::ValidationError { .. })));
    assert_eq!(store.get().query.age_max, Some(10));
}
