//! Configuration host boundary for scoped settings.
//!
//! This crate describes everything the readers in `settings-core` need from
//! the editor host, and nothing more:
//!
//! - **Scopes**: the eight-tier precedence chain ([`Scope`]) and the three
//!   user-writable targets ([`ConfigurationTarget`])
//! - **Per-scope values**: [`ScopedValues`], one optional value per scope
//! - **Key addressing**: [`KeyName`] splits `a.b.c` into section `a.b` and leaf `c`
//! - **Collaborator traits**: [`ConfigurationInspector`] (synchronous reads)
//!   and [`ConfigurationWriter`] (asynchronous writes)
//! - **In-memory host**: [`MemoryHost`], a substitutable host backed by a
//!   JSON-loadable [`HostSnapshot`]
//!
//! # Architecture
//!
//! ```text
//!            settings-core (ScopedReader, DualScopedReader)
//!                        |
//!                  settings-host
//!                        |
//!        +---------------+---------------+
//!        |                               |
//!   editor host adapter             MemoryHost
//! ```

pub mod error;
pub mod host;
pub mod key;
pub mod memory;
pub mod scope;
pub mod values;

pub use error::{Error, Result};
pub use host::{ConfigurationHost, ConfigurationInspector, ConfigurationWriter};
pub use key::KeyName;
pub use memory::{HostSnapshot, KeySnapshot, MemoryHost, TierValues};
pub use scope::{ConfigurationTarget, Scope, ScopeContext};
pub use values::{RawScopedValues, ScopedValues};
