//! Loading configuration files from disk
//!
//! Uses the shared documents under test-fixtures/configs and temporary
//! files for the error paths.

use std::fs;
use std::path::PathBuf;

use deck_config::model::{ImageProtocol, MaxColumnsAlignment, ValidateOverflows};
use deck_config::{
    ConfigLoader, Error, ErrorKind, Presence, SnippetLanguage, load_file, MAX_CONFIG_SIZE,
};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    // crates/deck-config -> ../../test-fixtures
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/configs")
        .join(name)
}

#[test]
fn test_full_fixture_loads_cleanly() {
    let resolution = load_file(fixture("full.yaml")).unwrap();
    assert!(resolution.is_clean(), "{}", resolution.diagnostics);

    let config = resolution.config;
    assert_eq!(config.defaults.theme.as_deref(), Some("tokyonight-storm"));
    assert_eq!(config.defaults.image_protocol, ImageProtocol::KittyLocal);
    assert_eq!(config.defaults.validate_overflows, ValidateOverflows::WhenPresenting);
    assert_eq!(config.defaults.column_limit(), Some((100, MaxColumnsAlignment::Left)));
    assert_eq!(config.defaults.incremental_lists.pause_after, Some(false));
    assert_eq!(config.bindings.exit, vec!["<c-c>", "Q"]);
    assert_eq!(config.bindings.next_fast, vec!["n"]);
    assert_eq!(config.export.dimensions.map(|d| d.columns), Some(135));
    assert_eq!(config.mermaid.scale, 3);
    assert_eq!(config.typst.ppi, 400);
    assert_eq!(config.options.command_prefix.as_deref(), Some("cmd:"));
    assert_eq!(config.options.strict_front_matter_parsing, None);
    assert_eq!(config.snippet.render.threads, 4);

    let kotlin = config.snippet.exec.executor(&SnippetLanguage::Kotlin).unwrap();
    assert_eq!(kotlin.environment.get("JAVA_OPTS").map(String::as_str), Some("-Xmx512m"));
    assert_eq!(kotlin.hidden_line_prefix.as_deref(), Some("// "));

    assert_eq!(config.speaker_notes.publish_socket().unwrap().port(), 5000);
    let transition = config.slide_transition().unwrap();
    assert_eq!((transition.duration_millis, transition.frames), (750, 45));
}

#[test]
fn test_broken_fixture_reports_every_fault() {
    let resolution = load_file(fixture("broken.yaml")).unwrap();
    assert_snapshot!(resolution.diagnostics.to_string(), @r"
    defaults.image_protocol: invalid value 'kitty-fast', expected one of: auto, iterm2, iterm2-multipart, kitty-local, kitty-remote, sixel, ascii
    defaults.max_columns: 70000 exceeds the uint16 maximum of 65535
    mermaid.scale: -1 is below the minimum of 0
    options.incremental_list: unknown field 'incremental_list' in `OptionsConfig`
    snippet.exec.custom.rust.filename: missing required field 'filename' in `LanguageSnippetExecutionConfig`
    transition.animation.style: unknown variant 'fade', expected one of: slide_horizontal
    ");

    // Everything that was valid survives next to the recovered defaults.
    let config = resolution.config;
    assert_eq!(config.defaults.theme.as_deref(), Some("dark"));
    assert_eq!(config.defaults.image_protocol, ImageProtocol::Auto);
    assert_eq!(config.defaults.max_columns, u16::MAX);
    assert_eq!(config.mermaid.scale, 2);
    assert!(config.snippet.exec.custom.is_empty());
    assert_eq!(config.transition, Presence::Absent);
}

#[test]
fn test_json_fixture() {
    let resolution = load_file(fixture("minimal.json")).unwrap();
    assert!(resolution.is_clean());
    assert_eq!(resolution.config.defaults.max_columns, 80);
    assert_eq!(resolution.config.transition, Presence::Null);
}

#[test]
fn test_toml_fixture() {
    let resolution = load_file(fixture("deck.toml")).unwrap();
    assert!(resolution.is_clean(), "{}", resolution.diagnostics);
    assert_eq!(resolution.config.defaults.theme.as_deref(), Some("light"));
    assert_eq!(resolution.config.defaults.validate_overflows, ValidateOverflows::Always);
    assert_eq!(resolution.config.mermaid.scale, 4);
    assert!(resolution.config.snippet.exec.executor(&SnippetLanguage::Ruby).is_some());
}

#[test]
fn test_non_object_fixture_yields_defaults() {
    let resolution = load_file(fixture("not-an-object.yaml")).unwrap();
    assert_eq!(resolution.diagnostics.len(), 1);
    assert_eq!(resolution.diagnostics.as_slice()[0].kind, ErrorKind::TypeMismatch);
    assert_eq!(resolution.config, Default::default());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = load_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_unsupported_extension_is_rejected_before_reading() {
    let err = load_file("/definitely/not/here/config.ini").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

#[test]
fn test_oversized_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let padding = "#".repeat(MAX_CONFIG_SIZE as usize + 1);
    fs::write(&path, padding).unwrap();

    let err = load_file(&path).unwrap_err();
    match err {
        Error::ConfigTooLarge { size, max, .. } => {
            assert_eq!(size, MAX_CONFIG_SIZE + 1);
            assert_eq!(max, MAX_CONFIG_SIZE);
        }
        other => panic!("expected ConfigTooLarge, got {other}"),
    }
}

#[test]
fn test_custom_size_limit() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"typst": {"ppi": 200}}"#).unwrap();

    assert!(ConfigLoader::with_max_size(4).load(&path).is_err());
    let resolution = ConfigLoader::new().load(&path).unwrap();
    assert_eq!(resolution.config.typst.ppi, 200);
}

#[test]
fn test_parse_error_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ \"defaults\": ").unwrap();

    let err = load_file(&path).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("Failed to parse JSON config from"), "{message}");
    assert!(message.contains("config.json"), "{message}");
}

#[test]
fn test_empty_file_is_default_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "").unwrap();

    let resolution = load_file(&path).unwrap();
    assert!(resolution.is_clean());
    assert_eq!(resolution.config, Default::default());
}
