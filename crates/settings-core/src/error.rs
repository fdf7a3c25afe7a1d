//! Error types for settings-core

use settings_host::ConfigurationTarget;
use std::fmt;

/// Result type for settings-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a dual reader a key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOrigin {
    /// The current configuration key
    Current,
    /// The deprecated key it replaces
    Deprecated,
}

impl fmt::Display for KeyOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyOrigin::Current => f.write_str("current"),
            KeyOrigin::Deprecated => f.write_str("deprecated"),
        }
    }
}

/// Errors that can occur while reading or writing scoped configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A reader was constructed with an empty or whitespace-only key name
    #[error("Configuration key name is empty ({which} key)")]
    KeyEmpty { which: KeyOrigin },

    /// The host does not know the key at all
    #[error("Configuration key not recognized by the host: {key}")]
    KeyUnrecognized { key: String },

    /// No scope holds a valid value, not even the declared default
    #[error("No effective value for {key}: no scope, including default, holds a valid value")]
    NoEffectiveValue { key: String },

    /// A typed value could not be converted for the host
    #[error("Value for {key} could not be serialized: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The host rejected a write
    #[error("Failed to write {key} at {target} scope: {source}")]
    WriteFailed {
        key: String,
        target: ConfigurationTarget,
        #[source]
        source: settings_host::Error,
    },
}
