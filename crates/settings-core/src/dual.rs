//! Reader for a configuration key and the deprecated key it replaces
//!
//! A [`DualScopedReader`] owns two [`ScopedReader`]s, one per key, and merges
//! their sixteen scoped values into one effective value. Each side carries a
//! transform into the shared output type `E`; the winning value goes through
//! its side's transform.
//!
//! # Merge order
//!
//! [`MergeOrder::Interleaved`] (the default) treats the deprecated key as a
//! fallback within each tier:
//!
//! ```text
//! workspaceFolderLanguage(current), workspaceFolderLanguage(deprecated),
//! workspaceLanguage(current),       workspaceLanguage(deprecated),
//! ...
//! default(current),                 default(deprecated)
//! ```
//!
//! [`MergeOrder::Stratified`] ranks every current-key tier above every
//! deprecated-key tier. The two differ when the deprecated key is set at a
//! higher tier than the highest current-key value.

use crate::error::{Error, KeyOrigin, Result};
use crate::reader::ScopedReader;
use crate::validate::Validator;
use serde::Serialize;
use settings_host::{ConfigurationHost, ConfigurationTarget, Scope, ScopeContext, ScopedValues};
use std::fmt;
use std::sync::Arc;

type Transform<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// Name, validator and output transform for one side of a dual reader.
pub struct KeySpec<T, E> {
    name: String,
    validator: Validator<T>,
    transform: Transform<T, E>,
}

impl<T, E> KeySpec<T, E> {
    pub fn new(
        name: impl Into<String>,
        validator: Validator<T>,
        transform: impl Fn(T) -> E + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            validator,
            transform: Arc::new(transform),
        }
    }
}

impl<T: 'static> KeySpec<T, T> {
    /// A side whose values are used unchanged.
    pub fn identity(name: impl Into<String>, validator: Validator<T>) -> Self {
        Self::new(name, validator, |value| value)
    }
}

/// Order in which the sixteen current/deprecated slots are scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeOrder {
    /// Current and deprecated alternate within each tier; current wins ties.
    #[default]
    Interleaved,
    /// All current-key tiers first, then all deprecated-key tiers.
    Stratified,
}

impl MergeOrder {
    /// Slots in scan order, highest precedence first.
    pub fn slots(self) -> [(KeyOrigin, Scope); 16] {
        std::array::from_fn(|i| match self {
            MergeOrder::Interleaved => {
                let origin = if i % 2 == 0 {
                    KeyOrigin::Current
                } else {
                    KeyOrigin::Deprecated
                };
                (origin, Scope::PRECEDENCE[i / 2])
            }
            MergeOrder::Stratified => {
                let origin = if i < 8 {
                    KeyOrigin::Current
                } else {
                    KeyOrigin::Deprecated
                };
                (origin, Scope::PRECEDENCE[i % 8])
            }
        })
    }
}

/// Where a dual reader's effective value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueSource {
    pub origin: KeyOrigin,
    pub scope: Scope,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.origin, self.scope)
    }
}

/// Both validated views plus the merged effective value.
#[derive(Debug, Clone, PartialEq)]
pub struct DualEffectiveResult<T, D, E> {
    pub current: ScopedValues<T>,
    pub deprecated: ScopedValues<D>,
    pub effective_value: E,
    pub source: ValueSource,
}

/// Targets moved from the deprecated key to the current key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: Vec<ConfigurationTarget>,
}

impl MigrationReport {
    pub fn is_empty(&self) -> bool {
        self.migrated.is_empty()
    }
}

struct Side<T, E> {
    reader: ScopedReader<T>,
    transform: Transform<T, E>,
}

/// Reader merging a current key with its deprecated predecessor.
pub struct DualScopedReader<T, D, E> {
    current: Side<T, E>,
    deprecated: Side<D, E>,
    merge_order: MergeOrder,
}

impl<T, D, E> fmt::Debug for DualScopedReader<T, D, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualScopedReader")
            .field("current", &self.current.reader)
            .field("deprecated", &self.deprecated.reader)
            .field("merge_order", &self.merge_order)
            .finish()
    }
}

impl<T, D, E> DualScopedReader<T, D, E> {
    /// Create readers for both keys on the same host.
    ///
    /// The current key's name is checked first; an empty name on either side
    /// fails with [`Error::KeyEmpty`] naming that side.
    pub fn new(
        host: Arc<dyn ConfigurationHost>,
        current: KeySpec<T, E>,
        deprecated: KeySpec<D, E>,
    ) -> Result<Self> {
        let current = Side {
            reader: ScopedReader::for_origin(
                Arc::clone(&host),
                &current.name,
                current.validator,
                KeyOrigin::Current,
            )?,
            transform: current.transform,
        };
        let deprecated = Side {
            reader: ScopedReader::for_origin(
                host,
                &deprecated.name,
                deprecated.validator,
                KeyOrigin::Deprecated,
            )?,
            transform: deprecated.transform,
        };
        Ok(Self {
            current,
            deprecated,
            merge_order: MergeOrder::default(),
        })
    }

    pub fn with_merge_order(mut self, merge_order: MergeOrder) -> Self {
        self.merge_order = merge_order;
        self
    }

    pub fn merge_order(&self) -> MergeOrder {
        self.merge_order
    }

    pub fn current(&self) -> &ScopedReader<T> {
        &self.current.reader
    }

    pub fn deprecated(&self) -> &ScopedReader<D> {
        &self.deprecated.reader
    }

    /// Validated values of the current key, without merging.
    pub fn inspect_all(&self, scope: Option<&ScopeContext>) -> Result<ScopedValues<T>> {
        self.current.reader.inspect_all(scope)
    }

    /// Validated values of the deprecated key, without merging.
    pub fn depr_inspect_all(&self, scope: Option<&ScopeContext>) -> Result<ScopedValues<D>> {
        self.deprecated.reader.inspect_all(scope)
    }

    /// The merged effective value.
    pub fn read(&self, scope: Option<&ScopeContext>) -> Result<E>
    where
        T: Clone,
        D: Clone,
    {
        self.read_detailed(scope).map(|result| result.effective_value)
    }

    /// The merged effective value with both per-scope views and its source.
    pub fn read_detailed(&self, scope: Option<&ScopeContext>) -> Result<DualEffectiveResult<T, D, E>>
    where
        T: Clone,
        D: Clone,
    {
        let current = self.current.reader.inspect_all(scope)?;
        let deprecated = self.deprecated.reader.inspect_all(scope)?;

        let (source, effective_value) = self
            .merge_order
            .slots()
            .into_iter()
            .find_map(|(origin, tier)| {
                let value = match origin {
                    KeyOrigin::Current => current
                        .get(tier)
                        .map(|value| (self.current.transform)(value.clone())),
                    KeyOrigin::Deprecated => deprecated
                        .get(tier)
                        .map(|value| (self.deprecated.transform)(value.clone())),
                }?;
                Some((ValueSource { origin, scope: tier }, value))
            })
            .ok_or_else(|| Error::NoEffectiveValue {
                key: format!(
                    "{} or deprecated {}",
                    self.current.reader.key(),
                    self.deprecated.reader.key()
                ),
            })?;

        tracing::debug!(
            key = %self.current.reader.key(),
            %source,
            merge_order = ?self.merge_order,
            "Resolved effective value"
        );
        Ok(DualEffectiveResult {
            current,
            deprecated,
            effective_value,
            source,
        })
    }

    /// User-writable targets at which the deprecated key holds a valid value.
    pub fn user_defined_deprecated_scopes(&self) -> Result<Vec<ConfigurationTarget>> {
        let deprecated = self.deprecated.reader.inspect_all(None)?;
        Ok(ConfigurationTarget::ALL
            .into_iter()
            .filter(|target| deprecated.contains(target.scope()))
            .collect())
    }

    /// Whether the user has set the deprecated key anywhere they can write.
    pub fn has_user_defined_deprecated_values(&self) -> Result<bool> {
        Ok(!self.user_defined_deprecated_scopes()?.is_empty())
    }
}

impl<T: Serialize, D> DualScopedReader<T, D, T> {
    /// Move user-set deprecated values to the current key.
    ///
    /// For each of global, workspace and workspace folder: read the
    /// deprecated value, write its normalized form to the current key at the
    /// same target, then clear the deprecated key there. The deprecated value
    /// is only cleared after the write succeeded; a failed write stops the
    /// migration with the remaining targets untouched.
    pub async fn migrate(&self) -> Result<MigrationReport> {
        let mut report = MigrationReport::default();

        for target in ConfigurationTarget::ALL {
            let value = self
                .deprecated
                .reader
                .inspect_all(None)?
                .set(target.scope(), None);
            let Some(value) = value else {
                continue;
            };

            let normalized = (self.deprecated.transform)(value);
            self.current
                .reader
                .set_value_at(target, Some(&normalized))
                .await?;
            self.deprecated.reader.set_raw_value_at(target, None).await?;

            tracing::debug!(
                from = %self.deprecated.reader.key(),
                to = %self.current.reader.key(),
                %target,
                "Migrated deprecated configuration value"
            );
            report.migrated.push(target);
        }

        Ok(report)
    }
}
