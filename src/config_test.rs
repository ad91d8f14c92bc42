#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_sections_in_page_order() {
    let config = Config::default();
    assert_eq!(config.sections, vec!["home", "about", "projects", "skills", "hobbies", "experience", "contact"]);
}

#[test]
fn default_timings_and_offsets() {
    let config = Config::default();
    assert_eq!(config.header_offset_px, 70.0);
    assert_eq!(config.section_lookahead_px, 100.0);
    assert_eq!(config.skill_bar_delay_ms, 200);
    assert_eq!(config.intro_start_delay_ms, 1000);
    assert_eq!(config.intro_char_interval_ms, 100);
    assert_eq!(config.ripple_lifetime_ms, 1000);
    assert_eq!(config.notification_lifetime_ms, 5000);
    assert_eq!(config.storage_key, "theme");
}

#[test]
fn default_log_level_is_info() {
    assert_eq!(Config::default().log_level().unwrap(), log::Level::Info);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
}

#[test]
fn from_json_overrides_subset() {
    let config = Config::from_json(r#"{"intro_text":"Hi, I'm Ada","parallax_factor":0.5}"#).unwrap();
    assert_eq!(config.intro_text, "Hi, I'm Ada");
    assert_eq!(config.parallax_factor, 0.5);
    assert_eq!(config.header_offset_px, 70.0);
}

#[test]
fn from_json_rejects_malformed() {
    assert!(matches!(Config::from_json("{not json"), Err(ConfigError::Json(_))));
}

#[test]
fn from_json_rejects_empty_sections() {
    assert!(matches!(Config::from_json(r#"{"sections":[]}"#), Err(ConfigError::NoSections)));
}

#[test]
fn from_json_rejects_duplicate_sections() {
    let err = Config::from_json(r#"{"sections":["home","about","home"]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateSection(ref id) if id == "home"));
}

#[test]
fn from_json_rejects_unknown_log_level() {
    let err = Config::from_json(r#"{"log_level":"loud"}"#).unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: loud");
}

#[test]
fn from_json_accepts_any_case_log_level() {
    let config = Config::from_json(r#"{"log_level":"DEBUG"}"#).unwrap();
    assert_eq!(config.log_level().unwrap(), log::Level::Debug);
}
