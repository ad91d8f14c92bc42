//! Runtime configuration.
//!
//! Every knob has a default matching the shipped page. A page may override
//! any subset with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "intro_text": "Hi, I'm Ada", "log_level": "debug" }
//! </script>
//! ```
//!
//! ERROR HANDLING
//! ==============
//! [`Config::from_json`] returns a [`ConfigError`] for malformed or
//! inconsistent input; the browser host logs it and keeps the defaults, so a
//! bad config block never disables the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_LOG_LEVEL, DEFAULT_SECTIONS, HEADER_OFFSET_PX, INTRO_CHAR_INTERVAL_MS, INTRO_START_DELAY_MS, INTRO_TEXT,
    NOTIFICATION_LIFETIME_MS, PARALLAX_FACTOR, RIPPLE_LIFETIME_MS, SECTION_LOOKAHEAD_PX, SKILL_BAR_DELAY_MS,
    THEME_STORAGE_KEY,
};

/// Error returned by [`Config::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config lists no sections")]
    NoSections,
    #[error("duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Section ids in document order, topmost first.
    pub sections: Vec<String>,
    pub header_offset_px: f64,
    pub section_lookahead_px: f64,
    pub skill_bar_delay_ms: u32,
    pub intro_text: String,
    pub intro_start_delay_ms: u32,
    pub intro_char_interval_ms: u32,
    pub parallax_factor: f64,
    pub ripple_lifetime_ms: u32,
    pub notification_lifetime_ms: u32,
    pub storage_key: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTIONS.iter().map(|s| (*s).to_owned()).collect(),
            header_offset_px: HEADER_OFFSET_PX,
            section_lookahead_px: SECTION_LOOKAHEAD_PX,
            skill_bar_delay_ms: SKILL_BAR_DELAY_MS,
            intro_text: INTRO_TEXT.to_owned(),
            intro_start_delay_ms: INTRO_START_DELAY_MS,
            intro_char_interval_ms: INTRO_CHAR_INTERVAL_MS,
            parallax_factor: PARALLAX_FACTOR,
            ripple_lifetime_ms: RIPPLE_LIFETIME_MS,
            notification_lifetime_ms: NOTIFICATION_LIFETIME_MS,
            storage_key: THEME_STORAGE_KEY.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON override block. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, an empty or duplicated
    /// section list, or an unrecognized log level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::NoSections);
        }
        let mut seen = HashSet::new();
        for id in &self.sections {
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::DuplicateSection(id.clone()));
            }
        }
        self.log_level()?;
        Ok(())
    }

    /// The configured console log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLogLevel`] if `log_level` is not a `log` level name.
    pub fn log_level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }
}
