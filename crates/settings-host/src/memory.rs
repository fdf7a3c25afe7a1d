//! In-memory configuration host
//!
//! [`MemoryHost`] holds the whole configuration state of an editor session in
//! a [`HostSnapshot`]: which workspace containers are open, the registered
//! keys, and their values per tier and per language. Snapshots are plain
//! serde types, so a host can be seeded from JSON:
//!
//! ```json
//! {
//!   "workspace": true,
//!   "keys": {
//!     "ext.pairs": {
//!       "defaultValue": ["()", "[]"],
//!       "globalValue": ["{}"],
//!       "languages": { "rust": { "workspaceValue": ["<>"] } }
//!     }
//!   }
//! }
//! ```

use crate::host::{ConfigurationInspector, ConfigurationWriter};
use crate::key::KeyName;
use crate::scope::{ConfigurationTarget, Scope, ScopeContext};
use crate::values::RawScopedValues;
use crate::{Error, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Values of one key across the four base tiers.
///
/// Used both for the plain tiers and for a single language's overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_folder_value: Option<Value>,
}

impl TierValues {
    fn slot_mut(&mut self, scope: Scope) -> &mut Option<Value> {
        match scope.base() {
            Scope::Global => &mut self.global_value,
            Scope::Workspace => &mut self.workspace_value,
            Scope::WorkspaceFolder => &mut self.workspace_folder_value,
            _ => &mut self.default_value,
        }
    }

    /// Value at the base tier of `scope`.
    pub fn get(&self, scope: Scope) -> Option<&Value> {
        match scope.base() {
            Scope::Global => self.global_value.as_ref(),
            Scope::Workspace => self.workspace_value.as_ref(),
            Scope::WorkspaceFolder => self.workspace_folder_value.as_ref(),
            _ => self.default_value.as_ref(),
        }
    }

    pub fn set(&mut self, scope: Scope, value: Option<Value>) {
        *self.slot_mut(scope) = value;
    }

    pub fn is_empty(&self) -> bool {
        self.default_value.is_none()
            && self.global_value.is_none()
            && self.workspace_value.is_none()
            && self.workspace_folder_value.is_none()
    }
}

/// A registered key with its plain and per-language values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeySnapshot {
    #[serde(flatten)]
    pub values: TierValues,

    /// Language overrides keyed by language id
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, TierValues>,
}

/// Complete state of a [`MemoryHost`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSnapshot {
    /// Whether a workspace is open (workspace-scoped writes need one)
    #[serde(default)]
    pub workspace: bool,

    /// Whether a workspace folder is open (folder-scoped writes need one)
    #[serde(default)]
    pub workspace_folder: bool,

    /// Registered keys by full dotted name
    #[serde(default)]
    pub keys: BTreeMap<String, KeySnapshot>,
}

const BASE_TIERS: [Scope; 4] = [
    Scope::Default,
    Scope::Global,
    Scope::Workspace,
    Scope::WorkspaceFolder,
];

/// Configuration host kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryHost {
    state: RwLock<HostSnapshot>,
}

impl MemoryHost {
    /// An empty host with no workspace open and no keys registered.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: HostSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Seed a host from a JSON [`HostSnapshot`].
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: HostSnapshot = serde_json::from_str(json)?;
        tracing::debug!(keys = snapshot.keys.len(), "Loaded host snapshot");
        Ok(Self::from_snapshot(snapshot))
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> HostSnapshot {
        self.state.read().clone()
    }

    /// Open a workspace.
    pub fn with_workspace(self) -> Self {
        self.state.write().workspace = true;
        self
    }

    /// Open a workspace folder (and the workspace containing it).
    pub fn with_workspace_folder(self) -> Self {
        {
            let mut state = self.state.write();
            state.workspace = true;
            state.workspace_folder = true;
        }
        self
    }

    pub fn set_workspace_open(&self, open: bool) {
        self.state.write().workspace = open;
    }

    pub fn set_workspace_folder_open(&self, open: bool) {
        self.state.write().workspace_folder = open;
    }

    /// Register `name`, replacing its declared default.
    ///
    /// Values already stored for the key are kept.
    pub fn register(&self, name: &str, default: Option<Value>) {
        let mut state = self.state.write();
        state.keys.entry(name.to_string()).or_default().values.default_value = default;
    }

    /// Store a value at any base tier, including `default`.
    ///
    /// Unlike [`ConfigurationWriter::update`] this bypasses the workspace
    /// checks, so tests can describe states the editor would refuse to write.
    /// Language scopes go through [`MemoryHost::set_for_language`]; passing
    /// one here fails with [`Error::MissingLanguage`].
    pub fn set(&self, name: &str, scope: Scope, value: Option<Value>) -> Result<()> {
        if scope.is_language() {
            return Err(Error::MissingLanguage {
                key: name.to_string(),
            });
        }
        let mut state = self.state.write();
        let entry = state
            .keys
            .get_mut(name)
            .ok_or_else(|| Error::UnknownKey {
                key: name.to_string(),
            })?;
        entry.values.set(scope, value);
        Ok(())
    }

    /// Store a language override at the tier of `scope`.
    pub fn set_for_language(
        &self,
        name: &str,
        language_id: &str,
        scope: Scope,
        value: Option<Value>,
    ) -> Result<()> {
        let mut state = self.state.write();
        let entry = state
            .keys
            .get_mut(name)
            .ok_or_else(|| Error::UnknownKey {
                key: name.to_string(),
            })?;
        write_language_tier(entry, language_id, scope, value);
        Ok(())
    }

    /// The stored value at `scope`, reading language scopes for `language_id`.
    pub fn value(&self, name: &str, scope: Scope, language_id: Option<&str>) -> Option<Value> {
        let state = self.state.read();
        let entry = state.keys.get(name)?;
        if scope.is_language() {
            entry.languages.get(language_id?)?.get(scope).cloned()
        } else {
            entry.values.get(scope).cloned()
        }
    }
}

fn write_language_tier(entry: &mut KeySnapshot, language_id: &str, scope: Scope, value: Option<Value>) {
    let tier = entry.languages.entry(language_id.to_string()).or_default();
    tier.set(scope, value);
    if tier.is_empty() {
        entry.languages.remove(language_id);
    }
}

impl ConfigurationInspector for MemoryHost {
    fn inspect(&self, key: &KeyName, scope: Option<&ScopeContext>) -> Option<RawScopedValues> {
        let state = self.state.read();
        let entry = state.keys.get(&key.full_name())?;

        let mut raw = RawScopedValues::new();
        for tier in BASE_TIERS {
            raw.set(tier, entry.values.get(tier).cloned());
        }

        let language = scope
            .and_then(|s| s.language_id.as_deref())
            .and_then(|id| entry.languages.get(id));
        if let Some(overrides) = language {
            for tier in BASE_TIERS {
                raw.set(tier.language(), overrides.get(tier).cloned());
            }
        }

        Some(raw)
    }
}

#[async_trait]
impl ConfigurationWriter for MemoryHost {
    async fn update(
        &self,
        key: &KeyName,
        value: Option<Value>,
        target: ConfigurationTarget,
        scope: Option<&ScopeContext>,
        language_override: bool,
    ) -> Result<()> {
        let name = key.full_name();
        let mut state = self.state.write();

        match target {
            ConfigurationTarget::Workspace if !state.workspace => return Err(Error::NoWorkspace),
            ConfigurationTarget::WorkspaceFolder if !state.workspace_folder => {
                return Err(Error::NoWorkspaceFolder);
            }
            _ => {}
        }

        let entry = state
            .keys
            .get_mut(&name)
            .ok_or_else(|| Error::UnknownKey { key: name.clone() })?;

        let clearing = value.is_none();
        if language_override {
            let language_id = scope
                .and_then(|s| s.language_id.as_deref())
                .ok_or_else(|| Error::MissingLanguage { key: name.clone() })?;
            write_language_tier(entry, language_id, target.scope(), value);
        } else {
            entry.values.set(target.scope(), value);
        }

        tracing::debug!(key = %name, %target, language_override, clearing, "Updated configuration value");
        Ok(())
    }
}
