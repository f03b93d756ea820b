//! Two-valued theme state and its persisted string encoding.
//!
//! DESIGN
//! ======
//! The stored value is interpreted with a single rule: exactly `"light"` is
//! LIGHT and everything else (absent, `"dark"`, `"Light"`, corrupted data) is
//! DARK. The rule is deliberately lenient and must stay that way so pages
//! never fail to load because of a bad stored value.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    Light,
    /// Used whenever no usable preference is stored.
    #[default]
    Dark,
}

impl ThemeState {
    /// Lowercase name written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a persisted preference.
    #[must_use]
    pub fn from_persisted(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Map the presence of the root style flag to a state.
    #[must_use]
    pub fn from_root_flag(present: bool) -> Self {
        if present { Self::Light } else { Self::Dark }
    }

    /// The other state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
