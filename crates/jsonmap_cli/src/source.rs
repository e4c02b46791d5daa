use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::{CliError, Result};

/// Largest document text accepted after decompression.
const MAX_TEXT_BYTES: u64 = 512 * 1024 * 1024;
const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// How an input file was stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Plain text.
	None,
	/// A zstd frame around the text.
	Zstd,
}

impl Compression {
	fn detect(raw: &[u8]) -> Self {
		if raw.starts_with(&ZSTD_MAGIC) { Self::Zstd } else { Self::None }
	}

	/// Stable lowercase label used in command output.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Input document text handed to the parser.
#[derive(Debug, Clone)]
pub struct JsonDocument {
	/// Storage format of the input.
	pub compression: Compression,
	/// Input size in bytes as stored.
	pub raw_len: usize,
	text: String,
}

impl JsonDocument {
	/// Read `path` and decode it into text.
	pub fn open(path: &Path) -> Result<Self> {
		let raw = fs::read(path)?;
		debug!("{}: {} bytes", path.display(), raw.len());
		Self::from_bytes(raw)
	}

	/// Decode stored bytes: unwrap zstd, drop a byte-order mark, require UTF-8.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let raw_len = raw.len();
		let compression = Compression::detect(&raw);
		let mut bytes = match compression {
			Compression::Zstd => inflate(&raw)?,
			Compression::None => raw,
		};

		if bytes.starts_with(UTF8_BOM) {
			bytes.drain(..UTF8_BOM.len());
		}

		let text = String::from_utf8(bytes).map_err(|err| CliError::InvalidUtf8 {
			at: err.utf8_error().valid_up_to(),
		})?;

		Ok(Self {
			compression,
			raw_len,
			text,
		})
	}

	/// Document text.
	pub fn text(&self) -> &str {
		&self.text
	}
}

fn inflate(raw: &[u8]) -> Result<Vec<u8>> {
	let decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	decoder.take(MAX_TEXT_BYTES + 1).read_to_end(&mut out)?;
	if out.len() as u64 > MAX_TEXT_BYTES {
		return Err(CliError::DecompressedTooLarge { limit: MAX_TEXT_BYTES });
	}
	Ok(out)
}

#[cfg(test)]
mod tests;
