//! Crate error type.
//!
//! Nothing on the page is fatal: these errors surface at the edges (config
//! load, storage writes, string parsing) and callers log them and fall back
//! to defaults.

/// Errors raised by config loading, theme parsing and preference storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    /// A theme string was neither `light` nor `dark`.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),

    /// The inline JSON config could not be deserialized.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A config value was present but unusable.
    #[error("invalid config field {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Writing to the preference store failed.
    #[error("preference storage failed: {0}")]
    Storage(String),
}
