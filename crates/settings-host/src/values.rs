//! Per-scope value sets

use crate::scope::Scope;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One optional value per scope, as reported by the host for a single key.
///
/// Field names follow the host's inspection shape (`defaultValue`,
/// `globalLanguageValue`, ...), so raw inspection results deserialize
/// directly into [`RawScopedValues`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScopedValues<V> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<V>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_value: Option<V>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_value: Option<V>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_folder_value: Option<V>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language_value: Option<V>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_language_value: Option<V>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_language_value: Option<V>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_folder_language_value: Option<V>,
}

/// Untyped values straight from the host, before validation.
pub type RawScopedValues = ScopedValues<Value>;

impl<V> Default for ScopedValues<V> {
    fn default() -> Self {
        Self {
            default_value: None,
            global_value: None,
            workspace_value: None,
            workspace_folder_value: None,
            default_language_value: None,
            global_language_value: None,
            workspace_language_value: None,
            workspace_folder_language_value: None,
        }
    }
}

impl<V> ScopedValues<V> {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, scope: Scope) -> &Option<V> {
        match scope {
            Scope::Default => &self.default_value,
            Scope::Global => &self.global_value,
            Scope::Workspace => &self.workspace_value,
            Scope::WorkspaceFolder => &self.workspace_folder_value,
            Scope::DefaultLanguage => &self.default_language_value,
            Scope::GlobalLanguage => &self.global_language_value,
            Scope::WorkspaceLanguage => &self.workspace_language_value,
            Scope::WorkspaceFolderLanguage => &self.workspace_folder_language_value,
        }
    }

    fn slot_mut(&mut self, scope: Scope) -> &mut Option<V> {
        match scope {
            Scope::Default => &mut self.default_value,
            Scope::Global => &mut self.global_value,
            Scope::Workspace => &mut self.workspace_value,
            Scope::WorkspaceFolder => &mut self.workspace_folder_value,
            Scope::DefaultLanguage => &mut self.default_language_value,
            Scope::GlobalLanguage => &mut self.global_language_value,
            Scope::WorkspaceLanguage => &mut self.workspace_language_value,
            Scope::WorkspaceFolderLanguage => &mut self.workspace_folder_language_value,
        }
    }

    /// The value at `scope`, if present.
    pub fn get(&self, scope: Scope) -> Option<&V> {
        self.slot(scope).as_ref()
    }

    /// Replace the value at `scope`, returning the previous one.
    pub fn set(&mut self, scope: Scope, value: Option<V>) -> Option<V> {
        std::mem::replace(self.slot_mut(scope), value)
    }

    /// Builder form of [`ScopedValues::set`].
    pub fn with(mut self, scope: Scope, value: V) -> Self {
        self.set(scope, Some(value));
        self
    }

    pub fn contains(&self, scope: Scope) -> bool {
        self.slot(scope).is_some()
    }

    pub fn is_empty(&self) -> bool {
        Scope::ALL.iter().all(|scope| !self.contains(*scope))
    }

    /// Present values, lowest precedence first.
    pub fn iter(&self) -> impl Iterator<Item = (Scope, &V)> {
        Scope::ALL
            .into_iter()
            .filter_map(move |scope| self.get(scope).map(|value| (scope, value)))
    }

    /// The value at the highest-precedence scope that holds one.
    pub fn highest(&self) -> Option<(Scope, &V)> {
        Scope::PRECEDENCE
            .into_iter()
            .find_map(|scope| self.get(scope).map(|value| (scope, value)))
    }

    /// Map every present value, dropping those for which `f` returns `None`.
    pub fn filter_map<U>(mut self, mut f: impl FnMut(Scope, V) -> Option<U>) -> ScopedValues<U> {
        let mut out = ScopedValues::default();
        for scope in Scope::ALL {
            if let Some(value) = self.slot_mut(scope).take() {
                out.set(scope, f(scope, value));
            }
        }
        out
    }
}
