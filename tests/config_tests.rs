mod common;

use caresync::config::Config;
use caresync::errors::AppError;
use common::temp_home;
use std::fs;

#[test]
fn partial_config_file_falls_back_per_field() {
    let home = temp_home("config_partial");
    let path = home.join("caresync.conf");
    fs::write(&path, "trend_unit: mmol/L\n").unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.trend_unit, "mmol/L");
    assert_eq!(cfg.database, Config::database_file().to_string_lossy());
    assert_eq!(cfg.trend_low, 125.0);
    assert_eq!(cfg.trend_high, 200.0);
    assert!(cfg.trust_banner);
    assert_eq!(cfg.share_base_url, "https://caresync.health/timeline");
}

#[test]
fn missing_config_file_gives_defaults() {
    let home = temp_home("config_missing");
    let cfg = Config::load_from(&home.join("absent.conf")).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn inverted_trend_bounds_are_rejected() {
    let home = temp_home("config_bounds");
    let path = home.join("caresync.conf");
    fs::write(&path, "trend_low: 250\ntrend_high: 100\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn absolute_database_path_is_kept() {
    let home = temp_home("config_abs");
    let db = home.join("custom.sqlite");
    assert_eq!(Config::resolve_database(&db.to_string_lossy()), db);
}

#[test]
fn relative_database_path_lives_in_config_dir() {
    assert_eq!(
        Config::resolve_database("rel.sqlite"),
        Config::config_dir().join("rel.sqlite")
    );
}
