//! Configuration tests
//!
//! Round-trip guards: every field written by `to_toml()` must parse back into
//! the same value, so new fields can't be forgotten in the template.

use super::*;
use std::collections::HashMap;

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).unwrap_or_else(|e| panic!("TOML:\n{}\nError: {}", toml_str, e))
}

fn no_env(_: &str) -> Option<String> {
    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let reloaded = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(reloaded.theme, config.theme);
    assert_eq!(reloaded.content_path, None);
    assert_eq!(reloaded.animation, config.animation);
    assert_eq!(reloaded.features, config.features);
    assert_eq!(reloaded.logging, config.logging);
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.theme = "Dracula".to_string();
    config.content_path = Some(PathBuf::from("/home/ada/my \"folio\".toml"));
    config.animation.typing_speed_ms = 12;
    config.animation.pause_end_ms = 500;
    config.features.logs_panel = true;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let reloaded = Config::from_sources(parse(&config.to_toml()), no_env);

    assert_eq!(reloaded.theme, "Dracula");
    assert_eq!(reloaded.content_path, config.content_path);
    assert_eq!(reloaded.animation, config.animation);
    assert_eq!(reloaded.features, config.features);
    assert_eq!(reloaded.logging, config.logging);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "Nord"
content_path = "/from/file.toml"

[animation]
typing_speed_ms = 50
"#,
    );
    let env: HashMap<&str, &str> = [
        ("FOLIO_THEME", "Gruvbox"),
        ("FOLIO_CONTENT", "/from/env.toml"),
        ("FOLIO_TYPING_SPEED", "7"),
        ("FOLIO_NO_TUI", "TRUE"),
    ]
    .into_iter()
    .collect();

    let config = Config::from_sources(file, |k| env.get(k).map(|v| v.to_string()));

    assert_eq!(config.theme, "Gruvbox");
    assert_eq!(config.content_path, Some(PathBuf::from("/from/env.toml")));
    assert_eq!(config.animation.typing_speed_ms, 7);
    assert!(!config.enable_tui);
}

#[test]
fn test_file_overrides_defaults() {
    let file = parse(
        r#"
[animation]
pause_end_ms = 900

[features]
role_rotation = false

[logging]
level = "debug"
file_rotation = "never"
"#,
    );
    let config = Config::from_sources(file, no_env);

    assert_eq!(config.theme, DEFAULT_THEME);
    assert!(config.enable_tui);
    assert_eq!(config.animation.pause_end_ms, 900);
    assert_eq!(config.animation.typing_speed_ms, 30);
    assert!(!config.features.role_rotation);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Never);
}

#[test]
fn test_unparseable_env_speed_is_ignored() {
    let config = Config::from_sources(FileConfig::default(), |k| {
        (k == "FOLIO_TYPING_SPEED").then(|| "fast".to_string())
    });
    assert_eq!(config.animation.typing_speed_ms, 30);
}

#[test]
fn test_zero_intervals_fall_back_to_defaults() {
    let file = parse("[animation]\nrole_interval_ms = 0\ncaret_blink_ms = 0\n");
    let config = Config::from_sources(file, no_env);
    assert_eq!(config.animation.role_interval_ms, 3000);
    assert_eq!(config.animation.caret_blink_ms, 500);
}

#[test]
fn test_blank_content_path_means_builtin() {
    let config = Config::from_sources(parse("content_path = \"  \"\n"), no_env);
    assert_eq!(config.content_path, None);
}

#[test]
fn test_animation_timing_conversion() {
    let animation = AnimationConfig::default();
    let timing = animation.timing();
    assert_eq!(timing.typing_speed.as_millis(), 30);
    assert_eq!(timing.delete_speed().as_millis(), 15);
    assert_eq!(timing.pause_end.as_millis(), 2000);
}

#[test]
fn test_tilde_content_path_expands_to_home() {
    let home = PathBuf::from("/home/ada");
    assert_eq!(
        expand_home("~/portfolio.toml", Some(home.clone())),
        home.join("portfolio.toml")
    );
    assert_eq!(expand_home("~", Some(home.clone())), home);
    assert_eq!(
        expand_home("~ada/x.toml", Some(home.clone())),
        PathBuf::from("~ada/x.toml")
    );
    assert_eq!(
        expand_home("/abs/x.toml", Some(home)),
        PathBuf::from("/abs/x.toml")
    );
    assert_eq!(expand_home("~/x.toml", None), PathBuf::from("~/x.toml"));
}

#[test]
fn test_template_content_path_resolves_under_home() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let config = Config::from_sources(parse("content_path = \"~/portfolio.toml\"\n"), no_env);
    assert_eq!(config.content_path, Some(home.join("portfolio.toml")));

    // Env values get the same treatment
    let config = Config::from_sources(FileConfig::default(), |k| {
        (k == "FOLIO_CONTENT").then(|| "~/env.toml".to_string())
    });
    assert_eq!(config.content_path, Some(home.join("env.toml")));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "theme = \n").unwrap();
    let err = Config::read_file_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
}

#[test]
fn test_missing_file_means_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = Config::read_file_config(&dir.path().join("absent.toml")).unwrap();
    assert!(file.theme.is_none());
    assert!(file.content_path.is_none());
}
