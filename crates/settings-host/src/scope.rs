//! Scope tiers and write targets
//!
//! The eight scopes form a single linear precedence chain. Declaration order
//! below is that chain, lowest first, so the derived `Ord` is the precedence
//! used everywhere.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tier in the configuration precedence hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    Default,
    Global,
    Workspace,
    WorkspaceFolder,
    DefaultLanguage,
    GlobalLanguage,
    WorkspaceLanguage,
    WorkspaceFolderLanguage,
}

impl Scope {
    /// All scopes, lowest precedence first.
    pub const ALL: [Scope; 8] = [
        Scope::Default,
        Scope::Global,
        Scope::Workspace,
        Scope::WorkspaceFolder,
        Scope::DefaultLanguage,
        Scope::GlobalLanguage,
        Scope::WorkspaceLanguage,
        Scope::WorkspaceFolderLanguage,
    ];

    /// All scopes, highest precedence first. This is the scan order for
    /// effective value resolution.
    pub const PRECEDENCE: [Scope; 8] = [
        Scope::WorkspaceFolderLanguage,
        Scope::WorkspaceLanguage,
        Scope::GlobalLanguage,
        Scope::DefaultLanguage,
        Scope::WorkspaceFolder,
        Scope::Workspace,
        Scope::Global,
        Scope::Default,
    ];

    /// Whether this scope holds values for the active document's language.
    pub fn is_language(self) -> bool {
        matches!(
            self,
            Scope::DefaultLanguage
                | Scope::GlobalLanguage
                | Scope::WorkspaceLanguage
                | Scope::WorkspaceFolderLanguage
        )
    }

    /// The non-language counterpart of this scope.
    pub fn base(self) -> Scope {
        match self {
            Scope::Default | Scope::DefaultLanguage => Scope::Default,
            Scope::Global | Scope::GlobalLanguage => Scope::Global,
            Scope::Workspace | Scope::WorkspaceLanguage => Scope::Workspace,
            Scope::WorkspaceFolder | Scope::WorkspaceFolderLanguage => Scope::WorkspaceFolder,
        }
    }

    /// The language-specific counterpart of this scope.
    pub fn language(self) -> Scope {
        match self.base() {
            Scope::Global => Scope::GlobalLanguage,
            Scope::Workspace => Scope::WorkspaceLanguage,
            Scope::WorkspaceFolder => Scope::WorkspaceFolderLanguage,
            _ => Scope::DefaultLanguage,
        }
    }

    /// The user-writable target behind this scope, if any.
    ///
    /// Default values come from the extension manifest and are never
    /// writable; language scopes map to the target of their base tier.
    pub fn target(self) -> Option<ConfigurationTarget> {
        match self.base() {
            Scope::Global => Some(ConfigurationTarget::Global),
            Scope::Workspace => Some(ConfigurationTarget::Workspace),
            Scope::WorkspaceFolder => Some(ConfigurationTarget::WorkspaceFolder),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Default => "default",
            Scope::Global => "global",
            Scope::Workspace => "workspace",
            Scope::WorkspaceFolder => "workspaceFolder",
            Scope::DefaultLanguage => "defaultLanguage",
            Scope::GlobalLanguage => "globalLanguage",
            Scope::WorkspaceLanguage => "workspaceLanguage",
            Scope::WorkspaceFolderLanguage => "workspaceFolderLanguage",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| format!("unknown scope: {}", s))
    }
}

/// A scope the user can write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigurationTarget {
    Global,
    Workspace,
    WorkspaceFolder,
}

impl ConfigurationTarget {
    /// All writable targets, lowest precedence first.
    pub const ALL: [ConfigurationTarget; 3] = [
        ConfigurationTarget::Global,
        ConfigurationTarget::Workspace,
        ConfigurationTarget::WorkspaceFolder,
    ];

    /// The non-language scope this target writes to.
    pub fn scope(self) -> Scope {
        match self {
            ConfigurationTarget::Global => Scope::Global,
            ConfigurationTarget::Workspace => Scope::Workspace,
            ConfigurationTarget::WorkspaceFolder => Scope::WorkspaceFolder,
        }
    }

    /// The language scope a language override write lands in.
    pub fn language_scope(self) -> Scope {
        self.scope().language()
    }
}

impl fmt::Display for ConfigurationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.scope().fmt(f)
    }
}

/// Context a read or write is evaluated in.
///
/// `resource` selects the workspace folder, `language_id` selects which
/// language overrides populate the language scopes. An absent context reads
/// only the non-language tiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopeContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
}

impl ScopeContext {
    pub fn for_language(language_id: impl Into<String>) -> Self {
        Self {
            resource: None,
            language_id: Some(language_id.into()),
        }
    }

    pub fn for_resource(resource: impl Into<String>) -> Self {
        Self {
            resource: Some(resource.into()),
            language_id: None,
        }
    }

    pub fn with_language(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = Some(language_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn precedence_is_all_reversed() {
        let mut reversed = Scope::ALL;
        reversed.reverse();
        assert_eq!(reversed, Scope::PRECEDENCE);
    }

    #[test]
    fn derived_order_matches_chain() {
        for pair in Scope::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn language_scopes_outrank_every_base_scope() {
        for scope in Scope::ALL {
            if scope.is_language() {
                assert!(scope > Scope::WorkspaceFolder);
            }
        }
    }

    #[rstest]
    #[case(Scope::Default, None)]
    #[case(Scope::Global, Some(ConfigurationTarget::Global))]
    #[case(Scope::Workspace, Some(ConfigurationTarget::Workspace))]
    #[case(Scope::WorkspaceFolder, Some(ConfigurationTarget::WorkspaceFolder))]
    #[case(Scope::DefaultLanguage, None)]
    #[case(Scope::GlobalLanguage, Some(ConfigurationTarget::Global))]
    #[case(Scope::WorkspaceLanguage, Some(ConfigurationTarget::Workspace))]
    #[case(Scope::WorkspaceFolderLanguage, Some(ConfigurationTarget::WorkspaceFolder))]
    fn target_follows_base_tier(#[case] scope: Scope, #[case] expected: Option<ConfigurationTarget>) {
        assert_eq!(scope.target(), expected);
    }

    #[rstest]
    #[case(Scope::Global, Scope::GlobalLanguage)]
    #[case(Scope::WorkspaceLanguage, Scope::WorkspaceLanguage)]
    #[case(Scope::Default, Scope::DefaultLanguage)]
    fn language_counterpart(#[case] scope: Scope, #[case] expected: Scope) {
        assert_eq!(scope.language(), expected);
        assert_eq!(expected.base(), scope.base());
    }

    #[test]
    fn scope_names_round_trip_through_from_str() {
        for scope in Scope::ALL {
            assert_eq!(scope.to_string().parse::<Scope>(), Ok(scope));
        }
        assert!("user".parse::<Scope>().is_err());
    }

    #[test]
    fn scope_serializes_camel_case() {
        let json = serde_json::to_string(&Scope::WorkspaceFolderLanguage).unwrap();
        assert_eq!(json, "\"workspaceFolderLanguage\"");
    }

    #[test]
    fn target_language_scope() {
        assert_eq!(
            ConfigurationTarget::WorkspaceFolder.language_scope(),
            Scope::WorkspaceFolderLanguage
        );
    }
}
