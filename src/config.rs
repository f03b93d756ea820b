//! Names of every page collaborator the theme toggle touches.
//!
//! Defaults match the stock page markup. A page can override any subset by
//! putting a JSON object in the root element's `data-theme-config` attribute.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ROOT_CLASS: &str = "light";
pub const DEFAULT_HIDDEN_CLASS: &str = "hidden";
pub const DEFAULT_SUN_ID: &str = "icon-sun";
pub const DEFAULT_MOON_ID: &str = "icon-moon";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";

/// Root attribute carrying a JSON config override.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-config";

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Persisted storage key.
    pub storage_key: String,
    /// Class on the root element that marks the light theme.
    pub root_class: String,
    /// Class that hides an indicator.
    pub hidden_class: String,
    pub sun_id: String,
    pub moon_id: String,
    pub toggle_id: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            root_class: DEFAULT_ROOT_CLASS.to_owned(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_owned(),
            sun_id: DEFAULT_SUN_ID.to_owned(),
            moon_id: DEFAULT_MOON_ID.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config from the optional root attribute value.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, ThemeError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Self::from_json(json),
        }
    }

    /// Reject empty names, class names or ids containing whitespace, and
    /// element ids that collide.
    ///
    /// A class name with whitespace makes `classList.add` throw, which would
    /// leave the root flag applied with the indicators untouched.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.trim().is_empty() {
            return Err(ThemeError::Config("storage_key must not be empty".to_owned()));
        }

        let tokens = [
            ("root_class", &self.root_class),
            ("hidden_class", &self.hidden_class),
            ("sun_id", &self.sun_id),
            ("moon_id", &self.moon_id),
            ("toggle_id", &self.toggle_id),
        ];
        for (name, value) in tokens {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{name} must not be empty")));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(ThemeError::Config(format!("{name} must not contain whitespace: '{value}'")));
            }
        }

        let ids = [&self.sun_id, &self.moon_id, &self.toggle_id];
        for (i, id) in ids.iter().enumerate() {
            if ids[i + 1..].contains(id) {
                return Err(ThemeError::Config(format!("element id '{id}' is used twice")));
            }
        }
        Ok(())
    }

    /// True when every field equals its default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
