use std::fmt;

use crate::json::{JsonError, Result};

/// Parsed dotted key path such as `owner.address.city`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
	/// Object keys from the root inward.
	pub segments: Vec<String>,
}

impl FieldPath {
	/// Parse dotted key syntax; every segment must be non-empty.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(JsonError::InvalidFieldPath { path: input.to_owned() });
		}

		let mut segments = Vec::new();
		for segment in input.split('.') {
			let segment = segment.trim();
			if segment.is_empty() || segment.contains(['"', '{', '}', '[', ']', ',', ':']) {
				return Err(JsonError::InvalidFieldPath { path: input.to_owned() });
			}
			segments.push(segment.to_owned());
		}

		Ok(Self { segments })
	}

	/// Final key of the path.
	pub fn leaf(&self) -> &str {
		self.segments.last().map(String::as_str).unwrap_or_default()
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("."))
	}
}
