//! Light/dark theme state.
//!
//! The theme is read from the preference store once, mirrored into the
//! `data-theme` attribute on `<body>`, and written back on every toggle.
//! Unknown stored values fall back to [`Theme::Light`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::effect::{Effect, Target};
use crate::store::PreferenceStore;

/// The two page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored / attribute representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Returns `None` for anything but `"light"` / `"dark"`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle button: the sun offers a way out of dark mode.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

/// Owns the current theme and its persisted copy.
pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Load the persisted theme from `store`, defaulting to light.
    pub fn load(store: S, key: &str) -> Self {
        let current = match store.get(key) {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("ignoring unknown stored theme {raw:?}");
                Theme::Light
            }),
            None => Theme::Light,
        };
        Self { store, key: key.to_owned(), current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Effects that bring the DOM in line with the current theme.
    #[must_use]
    pub fn apply(&self) -> Vec<Effect> {
        vec![
            Effect::SetAttribute { target: Target::Body, name: "data-theme", value: self.current.as_str().to_owned() },
            Effect::SetClassName { target: Target::ThemeIcon, value: self.current.icon_class() },
            // Header background is theme-driven by the stylesheet; drop any inline override.
            Effect::SetStyle { target: Target::Header, property: "background", value: String::new() },
        ]
    }

    /// Flip the theme, persist it, and return the DOM updates.
    ///
    /// A failed write is logged; the page still switches theme for this session.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.current = self.current.toggled();
        if let Err(err) = self.store.set(&self.key, self.current.as_str()) {
            log::warn!("theme not persisted: {err}");
        }
        log::debug!("theme toggled to {}", self.current.as_str());
        self.apply()
    }

    /// Give the store back, e.g. to simulate a reload.
    pub fn into_store(self) -> S {
        self.store
    }
}
