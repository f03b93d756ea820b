//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use theme_toggle::{ThemeConfig, ThemeError};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PKG_DIR: &str = "pkg";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the wasm-bindgen output served under `/pkg`.
    pub pkg_dir: PathBuf,
    pub theme: ThemeConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `THEME_PKG_DIR`: default `pkg`
    /// - `THEME_STORAGE_KEY`: localStorage key, default `theme`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let pkg_dir = PathBuf::from(lookup("THEME_PKG_DIR").unwrap_or_else(|| DEFAULT_PKG_DIR.to_owned()));

        let mut theme = ThemeConfig::default();
        if let Some(key) = lookup("THEME_STORAGE_KEY") {
            theme.storage_key = key;
        }
        theme.validate()?;

        Ok(Self { port, pkg_dir, theme })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
