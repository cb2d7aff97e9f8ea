//! Persisted display preferences: colour theme and font scale.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::StorageKeys;
use crate::constants::{
    BASE_FONT_PX, FONT_SCALE_DEFAULT, FONT_SCALE_LOAD_CEILING, FONT_SCALE_LOAD_FLOOR,
    FONT_SCALE_MAX, FONT_SCALE_MIN, FONT_SCALE_STEP,
};
use crate::i18n;
use crate::store::KeyValueStore;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreferenceError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error("font scale `{0}` is not a number")]
    InvalidScale(String),
    #[error("font scale {0} is outside the accepted range")]
    ScaleOutOfRange(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }

    /// Toggle label for this theme, both at load and after each switch.
    #[must_use]
    pub fn label(self) -> String {
        i18n::t(&format!("theme.label.{}", self.as_str()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(PreferenceError::UnknownTheme(other.to_string())),
        }
    }
}

/// Parse a stored font scale, accepting only values strictly inside the
/// load window. The window is wider than the runtime step bounds so that a
/// value such as `1.55` written earlier still loads.
///
/// # Errors
///
/// Returns an error if `raw` is not a number or falls outside the window.
pub fn parse_stored_scale(raw: &str) -> Result<f64, PreferenceError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| PreferenceError::InvalidScale(raw.to_string()))?;
    if value.is_finite() && value > FONT_SCALE_LOAD_FLOOR && value < FONT_SCALE_LOAD_CEILING {
        Ok(value)
    } else {
        Err(PreferenceError::ScaleOutOfRange(value))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub font_scale: f64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            font_scale: FONT_SCALE_DEFAULT,
        }
    }
}

impl Preferences {
    /// Root font size in pixels for the current scale.
    #[must_use]
    pub fn base_font_px(&self) -> f64 {
        BASE_FONT_PX * self.font_scale
    }

    /// CSS length for the root `font-size`.
    #[must_use]
    pub fn root_font_size(&self) -> String {
        format!("{}px", self.base_font_px())
    }
}

/// Owns the in-memory preferences and the store they persist to.
pub struct PreferencesController<S: KeyValueStore> {
    prefs: Preferences,
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> PreferencesController<S> {
    /// Controller holding the defaults. Call [`Self::load`] to pick up
    /// stored values.
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self {
            prefs: Preferences::default(),
            store,
            keys,
        }
    }

    pub fn with_default_keys(store: S) -> Self {
        Self::new(store, StorageKeys::default())
    }

    #[must_use]
    pub const fn preferences(&self) -> Preferences {
        self.prefs
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.prefs.theme
    }

    #[must_use]
    pub const fn font_scale(&self) -> f64 {
        self.prefs.font_scale
    }

    /// Read both preferences. Anything missing or invalid keeps the value
    /// already held.
    pub fn load(&mut self) -> Preferences {
        if let Some(raw) = self.read(&self.keys.theme) {
            match raw.parse::<Theme>() {
                Ok(theme) => self.prefs.theme = theme,
                Err(err) => log::debug!("keeping theme {}: {err}", self.prefs.theme),
            }
        }
        if let Some(raw) = self.read(&self.keys.font_scale) {
            match parse_stored_scale(&raw) {
                Ok(scale) => self.prefs.font_scale = scale,
                Err(err) => log::debug!("keeping font scale {}: {err}", self.prefs.font_scale),
            }
        }
        self.prefs
    }

    /// Step the font scale up. Returns `false` without touching anything
    /// once the scale has reached the upper bound.
    pub fn increase_font(&mut self) -> bool {
        if self.prefs.font_scale >= FONT_SCALE_MAX {
            return false;
        }
        self.set_scale(round2(self.prefs.font_scale + FONT_SCALE_STEP).min(FONT_SCALE_MAX));
        true
    }

    /// Step the font scale down. Returns `false` at the lower bound.
    pub fn decrease_font(&mut self) -> bool {
        if self.prefs.font_scale <= FONT_SCALE_MIN {
            return false;
        }
        self.set_scale(round2(self.prefs.font_scale - FONT_SCALE_STEP).max(FONT_SCALE_MIN));
        true
    }

    /// Flip the theme, persist it and return the new value.
    pub fn toggle_theme(&mut self) -> Theme {
        self.prefs.theme = self.prefs.theme.toggled();
        self.write(&self.keys.theme, self.prefs.theme.as_str());
        self.prefs.theme
    }

    fn set_scale(&mut self, scale: f64) {
        self.prefs.font_scale = scale;
        self.write(&self.keys.font_scale, &scale.to_string());
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store.get_item(key).unwrap_or_else(|err| {
            log::warn!("reading preference `{key}` failed: {err}");
            None
        })
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set_item(key, value) {
            log::warn!("persisting preference `{key}` failed: {err}");
        }
    }
}
