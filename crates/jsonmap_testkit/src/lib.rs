//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file as text.
pub fn fixture_text(name: &str) -> String {
	let path = fixture_path(name);
	std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()))
}

/// Parse text with `serde_json`, panicking with the text on failure.
pub fn oracle(text: &str) -> serde_json::Value {
	serde_json::from_str(text).unwrap_or_else(|err| panic!("not valid json ({err}): {text}"))
}

/// Assert that two JSON texts hold the same document, ignoring layout and key order.
pub fn assert_same_json(actual: &str, expected: &str) {
	assert_eq!(oracle(actual), oracle(expected), "json mismatch\nactual: {actual}\nexpected: {expected}");
}
