//! Single-key scoped reader
//!
//! [`ScopedReader`] reads one configuration key from the host, validates the
//! value found at each of the eight scopes independently, and resolves the
//! effective value by precedence: the highest scope holding a valid value
//! wins. Nothing is cached; every call queries the host again.

use crate::error::{Error, KeyOrigin, Result};
use crate::validate::Validator;
use serde::Serialize;
use serde_json::Value;
use settings_host::{ConfigurationHost, ConfigurationTarget, KeyName, Scope, ScopeContext, ScopedValues};
use std::fmt;
use std::sync::Arc;

/// The validated per-scope view of a key together with its effective value.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveResult<T> {
    /// Valid values by scope; invalid and unset scopes are absent
    pub values: ScopedValues<T>,

    /// Value at the highest-precedence scope present in `values`
    pub effective_value: T,

    /// Scope `effective_value` was taken from
    pub source: Scope,
}

/// Typed reader for one configuration key.
pub struct ScopedReader<T> {
    host: Arc<dyn ConfigurationHost>,
    key: KeyName,
    validator: Validator<T>,
}

impl<T> fmt::Debug for ScopedReader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedReader")
            .field("key", &self.key)
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl<T> ScopedReader<T> {
    /// Create a reader for the dotted key `name`.
    ///
    /// Fails with [`Error::KeyEmpty`] when `name` is empty or whitespace.
    pub fn new(host: Arc<dyn ConfigurationHost>, name: &str, validator: Validator<T>) -> Result<Self> {
        Self::for_origin(host, name, validator, KeyOrigin::Current)
    }

    pub(crate) fn for_origin(
        host: Arc<dyn ConfigurationHost>,
        name: &str,
        validator: Validator<T>,
        origin: KeyOrigin,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::KeyEmpty { which: origin });
        }
        Ok(Self {
            host,
            key: KeyName::split(name),
            validator,
        })
    }

    pub fn key(&self) -> &KeyName {
        &self.key
    }

    /// Validated values for every scope.
    ///
    /// A value the validator rejects reads as absent. Fails with
    /// [`Error::KeyUnrecognized`] when the host does not know the key.
    pub fn inspect_all(&self, scope: Option<&ScopeContext>) -> Result<ScopedValues<T>> {
        let raw = self
            .host
            .inspect(&self.key, scope)
            .ok_or_else(|| Error::KeyUnrecognized {
                key: self.key.full_name(),
            })?;

        Ok(raw.filter_map(|tier, value| {
            let typed = self.validator.validate(&value);
            if typed.is_none() {
                tracing::trace!(key = %self.key, scope = %tier, "Discarding invalid value");
            }
            typed
        }))
    }

    /// Resolve the effective value.
    ///
    /// Scans from `workspaceFolderLanguage` down to `default` and takes the
    /// first valid value. Fails with [`Error::NoEffectiveValue`] when every
    /// scope is absent, which means the key's declared default is missing or
    /// invalid.
    pub fn read(&self, scope: Option<&ScopeContext>) -> Result<EffectiveResult<T>>
    where
        T: Clone,
    {
        let values = self.inspect_all(scope)?;
        let (source, effective_value) = values
            .highest()
            .map(|(source, value)| (source, value.clone()))
            .ok_or_else(|| Error::NoEffectiveValue {
                key: self.key.full_name(),
            })?;

        tracing::debug!(key = %self.key, %source, "Resolved effective value");
        Ok(EffectiveResult {
            values,
            effective_value,
            source,
        })
    }

    /// Write an untyped value at `target`; `None` clears the scope.
    pub async fn set_raw_value_at(&self, target: ConfigurationTarget, value: Option<Value>) -> Result<()> {
        self.write(target, value, None).await
    }

    /// Write `value` at `target`; `None` clears the scope.
    ///
    /// Host failures such as a folder write with no folder open surface as
    /// [`Error::WriteFailed`].
    pub async fn set_value_at(&self, target: ConfigurationTarget, value: Option<&T>) -> Result<()>
    where
        T: Serialize,
    {
        let value = self.to_raw(value)?;
        self.write(target, value, None).await
    }

    /// Write `value` as a language override for the language in `scope`.
    pub async fn set_language_value_at(
        &self,
        target: ConfigurationTarget,
        scope: &ScopeContext,
        value: Option<&T>,
    ) -> Result<()>
    where
        T: Serialize,
    {
        let value = self.to_raw(value)?;
        self.write(target, value, Some(scope)).await
    }

    fn to_raw(&self, value: Option<&T>) -> Result<Option<Value>>
    where
        T: Serialize,
    {
        value
            .map(serde_json::to_value)
            .transpose()
            .map_err(|source| Error::InvalidValue {
                key: self.key.full_name(),
                source,
            })
    }

    async fn write(
        &self,
        target: ConfigurationTarget,
        value: Option<Value>,
        language_scope: Option<&ScopeContext>,
    ) -> Result<()> {
        let language_override = language_scope.is_some();
        tracing::debug!(
            key = %self.key,
            %target,
            language_override,
            clearing = value.is_none(),
            "Writing configuration value"
        );
        self.host
            .update(&self.key, value, target, language_scope, language_override)
            .await
            .map_err(|source| Error::WriteFailed {
                key: self.key.full_name(),
                target,
                source,
            })
    }
}
