//! Error taxonomy for the theme controller and its host bindings.

/// Errors produced while binding to or mutating the page.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// No `window` global (not running in a browser page).
    #[error("no window available")]
    NoWindow,

    /// The window has no document.
    #[error("no document available")]
    NoDocument,

    /// A referenced element does not exist on the page.
    #[error("missing element: #{id}")]
    MissingElement { id: String },

    /// Adding, removing, or toggling a class failed.
    #[error("class list update failed for '{class}': {message}")]
    ClassList { class: String, message: String },

    /// Reading or writing persisted storage failed.
    #[error("storage access failed: {0}")]
    Storage(String),

    /// The page exposes no persistent storage.
    #[error("persistent storage unavailable")]
    StorageUnavailable,

    /// The click listener could not be attached.
    #[error("listener registration failed: {0}")]
    Listener(String),

    /// Theme configuration is malformed or invalid.
    #[error("invalid theme config: {0}")]
    Config(String),
}

impl ThemeError {
    /// Stable machine-readable code for log fields.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NoWindow => "E_NO_WINDOW",
            Self::NoDocument => "E_NO_DOCUMENT",
            Self::MissingElement { .. } => "E_MISSING_ELEMENT",
            Self::ClassList { .. } => "E_CLASS_LIST",
            Self::Storage(_) => "E_STORAGE",
            Self::StorageUnavailable => "E_STORAGE_UNAVAILABLE",
            Self::Listener(_) => "E_LISTENER",
            Self::Config(_) => "E_CONFIG",
        }
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
