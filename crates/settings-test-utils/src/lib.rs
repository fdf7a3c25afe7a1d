//! Shared test utilities for the scoped-settings workspace.
//!
//! This crate provides standardised fixtures so test suites do not each
//! redefine validators and host setup. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`brackets`] - bracket-pair validators and the deprecated-pair normalizer
//! - [`fixtures`] - [`MemoryHost`](settings_host::MemoryHost) loading from `test-fixtures/hosts`
//! - [`logging`] - tracing subscriber for test output

pub mod brackets;
pub mod fixtures;
pub mod logging;
