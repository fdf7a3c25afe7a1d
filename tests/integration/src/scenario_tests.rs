//! End-to-end read scenarios
//!
//! Each test loads a host snapshot from `test-fixtures/hosts`, builds a reader
//! the way an extension would, and checks the effective value.

use pretty_assertions::assert_eq;
use serde_json::json;
use settings_core::{
    DualScopedReader, Error, KeyOrigin, KeySpec, MergeOrder, ScopedReader, Validator, ValueSource,
};
use settings_host::{ConfigurationTarget, Scope, ScopeContext};
use settings_test_utils::brackets::{
    LEGACY_PAIRS_KEY, PAIRS_KEY, join_pairs, legacy_pairs, pairs_reader, strings, two_char_pairs,
};
use settings_test_utils::{fixtures, logging};

const GOOD_DEFAULT: &str = "ext.goodDefault";

#[test]
fn default_value_is_effective_when_nothing_else_is_set() {
    let _ = logging::init();
    let host = fixtures::load_host("good-default");
    let reader = ScopedReader::new(host, GOOD_DEFAULT, two_char_pairs()).unwrap();

    let result = reader.read(None).unwrap();
    assert_eq!(result.effective_value, strings(&["()", "[]"]));
    assert_eq!(result.source, Scope::Default);
}

#[test]
fn invalid_global_value_falls_back_to_default() {
    let _ = logging::init();
    let host = fixtures::load_host("invalid-global");
    let reader = ScopedReader::new(host.clone(), GOOD_DEFAULT, two_char_pairs()).unwrap();

    let result = reader.read(None).unwrap();
    assert_eq!(result.effective_value, strings(&["()", "[]"]));
    assert!(!result.values.contains(Scope::Global));

    // The raw value is still there; only the reader ignores it.
    assert_eq!(
        host.value(GOOD_DEFAULT, Scope::Global, None),
        Some(json!(["(())", "{}"]))
    );
}

#[test]
fn deprecated_default_fills_missing_current_default() {
    let _ = logging::init();
    let host = fixtures::load_host("legacy-default");
    let reader = pairs_reader(host).unwrap();

    let result = reader.read_detailed(None).unwrap();
    assert_eq!(result.effective_value, strings(&["()"]));
    assert_eq!(
        result.source,
        ValueSource {
            origin: KeyOrigin::Deprecated,
            scope: Scope::Default,
        }
    );
    assert!(result.current.is_empty());
}

#[test]
fn current_key_wins_over_deprecated_at_same_tier() {
    let _ = logging::init();
    let host = fixtures::load_host("same-tier");
    let reader = DualScopedReader::new(
        host,
        KeySpec::identity(PAIRS_KEY, Validator::<Vec<String>>::deserialize()),
        KeySpec::new(LEGACY_PAIRS_KEY, legacy_pairs(), join_pairs),
    )
    .unwrap();

    assert_eq!(reader.read(None).unwrap(), strings(&["a"]));

    // Both sides are still inspectable without merging.
    let deprecated = reader.depr_inspect_all(None).unwrap();
    assert!(deprecated.contains(Scope::Workspace));
    let current = reader.inspect_all(None).unwrap();
    assert_eq!(current.get(Scope::Workspace), Some(&strings(&["a"])));
}

#[test]
fn deprecated_language_value_shadows_current_default() {
    let host = fixtures::load_host("legacy-user-values");
    let reader = pairs_reader(host).unwrap();
    let rust = ScopeContext::for_language("rust");

    let interleaved = reader.read_detailed(Some(&rust)).unwrap();
    assert_eq!(interleaved.effective_value, strings(&["||"]));
    assert_eq!(interleaved.source.scope, Scope::WorkspaceLanguage);

    // Without a language in scope, the deprecated global value wins.
    assert_eq!(reader.read(None).unwrap(), strings(&["<>"]));
}

#[test]
fn stratified_order_prefers_any_current_value() {
    let host = fixtures::load_host("legacy-user-values");
    let reader = pairs_reader(host)
        .unwrap()
        .with_merge_order(MergeOrder::Stratified);
    let rust = ScopeContext::for_language("rust");

    let result = reader.read_detailed(Some(&rust)).unwrap();
    assert_eq!(result.effective_value, strings(&["()"]));
    assert_eq!(
        result.source,
        ValueSource {
            origin: KeyOrigin::Current,
            scope: Scope::Default,
        }
    );
}

#[test]
fn unregistered_key_is_reported() {
    let host = fixtures::load_host("good-default");
    let reader = ScopedReader::new(host, "ext.notDeclared", two_char_pairs()).unwrap();
    let err = reader.read(None).unwrap_err();
    assert!(matches!(err, Error::KeyUnrecognized { .. }));
}

#[tokio::test]
async fn written_value_round_trips_through_read() {
    let host = fixtures::load_host("legacy-default");
    let reader = ScopedReader::new(host, PAIRS_KEY, two_char_pairs()).unwrap();

    let valid = strings(&["{}"]);
    reader
        .set_value_at(ConfigurationTarget::Workspace, Some(&valid))
        .await
        .unwrap();
    assert_eq!(reader.inspect_all(None).unwrap().get(Scope::Workspace), Some(&valid));

    let invalid = strings(&["{{}}"]);
    reader
        .set_value_at(ConfigurationTarget::Workspace, Some(&invalid))
        .await
        .unwrap();
    assert!(!reader.inspect_all(None).unwrap().contains(Scope::Workspace));
}
