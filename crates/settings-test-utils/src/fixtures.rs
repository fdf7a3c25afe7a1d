//! Host snapshots stored under `test-fixtures/hosts`.

use settings_host::MemoryHost;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

/// Directory holding the JSON host snapshots.
pub fn hosts_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/hosts")
}

/// Load `test-fixtures/hosts/<name>.json` into a fresh host.
///
/// Panics if the fixture is missing or malformed.
pub fn load_host(name: &str) -> Arc<MemoryHost> {
    let path = hosts_dir().join(format!("{}.json", name));
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    let host = MemoryHost::from_json(&content)
        .unwrap_or_else(|e| panic!("invalid fixture {}: {}", path.display(), e));
    Arc::new(host)
}
