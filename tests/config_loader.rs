use std::fs;

use moviefinder::config::{Config, ConfigError};
use moviefinder::repository::{CatalogRepository, MovieRepository, RepositoryError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.screen.searching_placeholder, "Searching Movie...");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.catalog.latency_ms, 0);
    assert!(config.catalog.unavailable.is_empty());
    assert_eq!(config.catalog.movies.len(), 3);
}

/// Test that a full config file is parsed.
#[test]
fn test_load_full_config() {
    let (_dir, path) = write_config(
        r#"[screen]
searching_placeholder = "Hold on..."

[logging]
level = "debug"

[catalog]
latency_ms = 25
unavailable = ["Heat"]

[[catalog.movies]]
title = "Heat"
rating_summary = "IMDB: 8.3"
poster_url = "https://img/heat.jpg"

[[catalog.movies]]
title = "Arrival"
"#,
    );

    let config = Config::load_from(&path).expect("config loads");
    assert_eq!(config.screen.searching_placeholder, "Hold on...");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.catalog.latency_ms, 25);
    assert_eq!(config.catalog.unavailable, vec!["Heat".to_string()]);
    assert_eq!(config.catalog.movies.len(), 2);
    assert_eq!(config.catalog.movies[1].title, "Arrival");
    assert!(config.catalog.movies[1].rating_summary.is_empty());
}

/// Test that omitted sections fall back to defaults.
#[test]
fn test_empty_file_uses_section_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).expect("config loads");
    assert_eq!(config, Config::default());
}

/// Test that malformed TOML is reported as a parse error with the path.
#[test]
fn test_parse_error() {
    let (_dir, path) = write_config("[screen\nsearching_placeholder = 1");
    let err = Config::load_from(&path).expect_err("parse fails");
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

/// Test that validation runs on load.
#[test]
fn test_duplicate_titles_fail_validation() {
    let (_dir, path) = write_config(
        r#"[[catalog.movies]]
title = "Heat"

[[catalog.movies]]
title = " heat "
"#,
    );
    let err = Config::load_from(&path).expect_err("validation fails");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

/// Test that a loaded catalog drives the repository.
#[tokio::test]
async fn test_catalog_from_file_answers_lookups() {
    let (_dir, path) = write_config(
        r#"[catalog]
unavailable = ["Solaris"]

[[catalog.movies]]
title = "Stalker"
rating_summary = "IMDB: 8.0"
"#,
    );
    let config = Config::load_from(&path).expect("config loads");
    let repository = CatalogRepository::from_config(&config.catalog);

    let movie = repository.search_movie("stalker").await.expect("lookup");
    assert_eq!(movie.rating_summary(), "IMDB: 8.0");

    let err = repository.search_movie("Solaris").await.expect_err("fault");
    assert!(matches!(err, RepositoryError::Unavailable { .. }));
}
