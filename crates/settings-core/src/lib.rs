//! Typed, validated configuration reads for editor extensions.
//!
//! This crate wraps a configuration host's per-scope inspection with:
//!
//! - **Validation**: each scope's raw value is checked by a [`Validator`];
//!   invalid values read as absent instead of failing
//! - **Scope resolution**: [`ScopedReader`] picks the value at the
//!   highest-precedence scope that holds a valid one
//! - **Deprecated keys**: [`DualScopedReader`] merges a key with the
//!   deprecated key it replaces, normalizes deprecated values into the
//!   current shape, and migrates user-set deprecated values
//!
//! The host itself is injected as an `Arc<dyn ConfigurationHost>` from
//! `settings-host`; readers keep no state between calls.
//!
//! # Example
//!
//! ```ignore
//! use settings_core::{ScopedReader, Validator};
//! use settings_host::MemoryHost;
//! use std::sync::Arc;
//!
//! let host = Arc::new(MemoryHost::new());
//! host.register("ext.tabSize", Some(serde_json::json!(4)));
//!
//! let reader = ScopedReader::new(host, "ext.tabSize", Validator::<u32>::deserialize())?;
//! let result = reader.read(None)?;
//! assert_eq!(result.effective_value, 4);
//! ```

pub mod dual;
pub mod error;
pub mod reader;
pub mod validate;

pub use dual::{
    DualEffectiveResult, DualScopedReader, KeySpec, MergeOrder, MigrationReport, ValueSource,
};
pub use error::{Error, KeyOrigin, Result};
pub use reader::{EffectiveResult, ScopedReader};
pub use validate::Validator;
