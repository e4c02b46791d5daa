use jsonmap::json::JsonError;
use thiserror::Error;

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by `jsonmap` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading an input or settings file failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document bytes are not valid UTF-8.
	#[error("document is not valid utf-8 (valid up to byte {at})")]
	InvalidUtf8 {
		/// Length of the valid prefix.
		at: usize,
	},
	/// A compressed document expands past the input limit.
	#[error("decompressed document exceeds {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum accepted text size.
		limit: u64,
	},
	/// Settings file is not a valid settings object.
	#[error("settings: {0}")]
	Settings(#[from] serde_json::Error),
	/// Parsing or field selection failed.
	#[error(transparent)]
	Json(#[from] JsonError),
}
