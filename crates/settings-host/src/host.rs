//! Collaborator traits implemented by a configuration host

use crate::Result;
use crate::key::KeyName;
use crate::scope::{ConfigurationTarget, ScopeContext};
use crate::values::RawScopedValues;
use async_trait::async_trait;
use serde_json::Value;

/// Read side of the host: per-scope inspection of a single key.
pub trait ConfigurationInspector: Send + Sync {
    /// Inspect every scope of `key` under the optional scope context.
    ///
    /// Returns `None` when the host does not recognise the key at all. A
    /// recognised key with nothing set returns an empty value set.
    fn inspect(&self, key: &KeyName, scope: Option<&ScopeContext>) -> Option<RawScopedValues>;
}

/// Write side of the host.
#[async_trait]
pub trait ConfigurationWriter: Send + Sync {
    /// Persist `value` for `key` at `target`, or clear it when `value` is `None`.
    ///
    /// With `language_override` set the value is written for the language
    /// carried by `scope` instead of the plain target.
    async fn update(
        &self,
        key: &KeyName,
        value: Option<Value>,
        target: ConfigurationTarget,
        scope: Option<&ScopeContext>,
        language_override: bool,
    ) -> Result<()>;
}

/// A host that can both inspect and update configuration.
pub trait ConfigurationHost: ConfigurationInspector + ConfigurationWriter {}

impl<H: ConfigurationInspector + ConfigurationWriter + ?Sized> ConfigurationHost for H {}
