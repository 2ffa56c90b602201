//! Fixture loading shared by the integration tests.

use antisync_markup::{load, Entry, LoadError};
use serde_json::Value;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn try_load(target: &str, name: &str) -> Result<Entry, LoadError> {
    load(target, fixture_path(name))
}

/// Parse a fixture and check that its canonical map agrees with the entry.
pub fn load_fixture(target: &str, name: &str) -> Entry {
    let entry = try_load(target, name)
        .unwrap_or_else(|e| panic!("failed to parse fixture {name}: {e}"));
    verify_map(&entry);
    entry
}

fn text(value: Option<&str>) -> Option<Value> {
    value.map(|s| Value::String(s.to_string()))
}

pub fn verify_map(entry: &Entry) {
    let map = entry.to_map();
    assert_eq!(map.get("id").cloned(), entry.public_id().map(Value::from));
    assert_eq!(map.get("url").cloned(), text(entry.redirect_url()));
    assert_eq!(
        map.get("signature").cloned(),
        Some(Value::String(entry.signature()))
    );
    if entry.redirect_url().is_none() {
        assert_eq!(map.get("body").cloned(), text(Some(entry.content())));
        assert_eq!(map.get("summary").cloned(), text(entry.summary()));
        assert_eq!(map.get("title").cloned(), text(entry.title()));
    }
}
