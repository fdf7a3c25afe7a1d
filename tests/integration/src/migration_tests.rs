//! End-to-end migration of deprecated values to the current key

use pretty_assertions::assert_eq;
use serde_json::json;
use settings_core::{Error, KeyOrigin};
use settings_host::{ConfigurationTarget, Scope, ScopeContext};
use settings_test_utils::brackets::{LEGACY_PAIRS_KEY, PAIRS_KEY, pairs_reader, strings};
use settings_test_utils::{fixtures, logging};

#[tokio::test]
async fn migrate_moves_global_value_to_current_key() {
    let _ = logging::init();
    let host = fixtures::load_host("legacy-user-values");
    let reader = pairs_reader(host.clone()).unwrap();

    assert!(reader.has_user_defined_deprecated_values().unwrap());
    assert_eq!(host.value(PAIRS_KEY, Scope::Global, None), None);

    let report = reader.migrate().await.unwrap();
    assert_eq!(report.migrated, vec![ConfigurationTarget::Global]);

    assert_eq!(host.value(PAIRS_KEY, Scope::Global, None), Some(json!(["<>"])));
    assert_eq!(host.value(LEGACY_PAIRS_KEY, Scope::Global, None), None);
    assert!(!reader.has_user_defined_deprecated_values().unwrap());

    let result = reader.read_detailed(None).unwrap();
    assert_eq!(result.effective_value, strings(&["<>"]));
    assert_eq!(result.source.origin, KeyOrigin::Current);
}

#[tokio::test]
async fn migrate_leaves_defaults_and_language_overrides() {
    let host = fixtures::load_host("legacy-user-values");
    let reader = pairs_reader(host.clone()).unwrap();

    reader.migrate().await.unwrap();

    assert!(host.value(LEGACY_PAIRS_KEY, Scope::Default, None).is_some());
    assert!(
        host.value(LEGACY_PAIRS_KEY, Scope::WorkspaceLanguage, Some("rust"))
            .is_some()
    );
    let rust = ScopeContext::for_language("rust");
    assert_eq!(reader.read(Some(&rust)).unwrap(), strings(&["||"]));
}

#[tokio::test]
async fn second_migrate_changes_nothing() {
    let host = fixtures::load_host("legacy-user-values");
    let reader = pairs_reader(host.clone()).unwrap();

    let first = reader.migrate().await.unwrap();
    assert!(!first.is_empty());
    let after_first = host.snapshot();

    let second = reader.migrate().await.unwrap();
    assert!(second.is_empty());
    assert_eq!(host.snapshot(), after_first);
}

#[tokio::test]
async fn failed_write_stops_before_clearing() {
    let host = fixtures::load_host("legacy-user-values");
    host.set(
        LEGACY_PAIRS_KEY,
        Scope::Workspace,
        Some(json!([{ "open": "[", "close": "]" }])),
    )
    .unwrap();
    host.set_workspace_open(false);
    let reader = pairs_reader(host.clone()).unwrap();

    let err = reader.migrate().await.unwrap_err();
    assert!(matches!(
        err,
        Error::WriteFailed {
            target: ConfigurationTarget::Workspace,
            ..
        }
    ));

    // Global migrated before the failure; workspace kept its deprecated value.
    assert_eq!(host.value(PAIRS_KEY, Scope::Global, None), Some(json!(["<>"])));
    assert_eq!(host.value(LEGACY_PAIRS_KEY, Scope::Global, None), None);
    assert_eq!(
        host.value(LEGACY_PAIRS_KEY, Scope::Workspace, None),
        Some(json!([{ "open": "[", "close": "]" }]))
    );
    assert_eq!(
        reader.user_defined_deprecated_scopes().unwrap(),
        vec![ConfigurationTarget::Workspace]
    );
}
