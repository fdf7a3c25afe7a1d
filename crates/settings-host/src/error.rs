//! Error types for settings-host

/// Result type for settings-host operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by a configuration host
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A workspace-scoped write was attempted with no workspace open
    #[error("Unable to write to workspace settings: no workspace is open")]
    NoWorkspace,

    /// A folder-scoped write was attempted with no workspace folder open
    #[error("Unable to write to folder settings: no workspace folder is open")]
    NoWorkspaceFolder,

    /// The host does not know the key at all
    #[error("Unknown configuration key: {key}")]
    UnknownKey { key: String },

    /// A language-scoped write was requested without a language id
    #[error("Cannot write a language override for {key}: no language in scope")]
    MissingLanguage { key: String },

    /// Host snapshot could not be parsed
    #[error(transparent)]
    Snapshot(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_names_the_key() {
        let err = Error::UnknownKey {
            key: "editor.bracketPairs".to_string(),
        };
        assert!(err.to_string().contains("editor.bracketPairs"));
    }

    #[test]
    fn missing_language_names_the_key() {
        let err = Error::MissingLanguage {
            key: "ext.pairs".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("ext.pairs"), "got: {}", display);
        assert!(display.contains("no language"), "got: {}", display);
    }
}
