use std::path::Path;

use crate::error::CliError;
use crate::source::{Compression, JsonDocument};

#[test]
fn plain_text_is_kept() {
	let doc = JsonDocument::from_bytes(br#"{"a":1}"#.to_vec()).expect("document decodes");
	assert_eq!(doc.compression, Compression::None);
	assert_eq!(doc.raw_len, 7);
	assert_eq!(doc.text(), r#"{"a":1}"#);
}

#[test]
fn zstd_input_is_inflated() {
	let compressed = zstd::stream::encode_all(&b"[1, 2, 3]"[..], 3).expect("zstd encodes");
	let raw_len = compressed.len();

	let doc = JsonDocument::from_bytes(compressed).expect("document decodes");
	assert_eq!(doc.compression.as_str(), "zstd");
	assert_eq!(doc.raw_len, raw_len);
	assert_eq!(doc.text(), "[1, 2, 3]");
}

#[test]
fn byte_order_mark_is_dropped() {
	let doc = JsonDocument::from_bytes(b"\xEF\xBB\xBFnull".to_vec()).expect("document decodes");
	assert_eq!(doc.text(), "null");
}

#[test]
fn invalid_utf8_reports_offset() {
	let err = JsonDocument::from_bytes(b"[\"ab\xFF\"]".to_vec()).expect_err("invalid utf-8 should fail");
	assert!(matches!(err, CliError::InvalidUtf8 { at: 4 }));
}

#[test]
fn missing_file_is_io_error() {
	let err = JsonDocument::open(Path::new("/nonexistent/jsonmap/doc.json")).expect_err("missing file should fail");
	assert!(matches!(err, CliError::Io(_)));
}
