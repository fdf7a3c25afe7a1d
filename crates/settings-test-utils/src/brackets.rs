//! Bracket-pair configuration used across the test suites.
//!
//! The current key stores pairs as two-character strings (`"()"`). The
//! deprecated key it replaces stored them as objects
//! (`{ "open": "(", "close": ")" }`); [`join_pairs`] normalizes the old shape
//! into the new one.

use serde::{Deserialize, Serialize};
use settings_core::{DualScopedReader, KeySpec, Result, Validator};
use settings_host::ConfigurationHost;
use std::sync::Arc;

/// Current bracket-pair key.
pub const PAIRS_KEY: &str = "ext.bracketPairs";

/// Deprecated key replaced by [`PAIRS_KEY`].
pub const LEGACY_PAIRS_KEY: &str = "ext.legacyBracketPairs";

/// Deprecated bracket-pair shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPair {
    pub open: String,
    pub close: String,
}

impl BracketPair {
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
        }
    }
}

/// Lists of strings that are each exactly two characters long.
pub fn two_char_pairs() -> Validator<Vec<String>> {
    Validator::deserialize_where(|pairs: &Vec<String>| {
        pairs.iter().all(|pair| pair.chars().count() == 2)
    })
}

/// Lists of single-character open/close objects.
pub fn legacy_pairs() -> Validator<Vec<BracketPair>> {
    Validator::deserialize_where(|pairs: &Vec<BracketPair>| {
        pairs
            .iter()
            .all(|pair| pair.open.chars().count() == 1 && pair.close.chars().count() == 1)
    })
}

/// Normalize deprecated pairs into the current string form.
pub fn join_pairs(pairs: Vec<BracketPair>) -> Vec<String> {
    pairs
        .into_iter()
        .map(|pair| format!("{}{}", pair.open, pair.close))
        .collect()
}

/// Dual reader over [`PAIRS_KEY`] and [`LEGACY_PAIRS_KEY`].
pub fn pairs_reader(
    host: Arc<dyn ConfigurationHost>,
) -> Result<DualScopedReader<Vec<String>, Vec<BracketPair>, Vec<String>>> {
    DualScopedReader::new(
        host,
        KeySpec::identity(PAIRS_KEY, two_char_pairs()),
        KeySpec::new(LEGACY_PAIRS_KEY, legacy_pairs(), join_pairs),
    )
}

/// Owned strings from string literals.
pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
