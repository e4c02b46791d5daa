use std::fs;
use std::path::Path;

use jsonmap::json::ConverterSettings;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to encode json output: {err}"),
	}
}

/// Converter settings as stored in a settings file; absent keys keep defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SettingsFile {
	pub indentation_enabled: Option<bool>,
	pub date_format: Option<String>,
	pub throw_on_error: Option<bool>,
}

impl SettingsFile {
	/// Overlay file values on `base`.
	pub(crate) fn apply(self, base: ConverterSettings) -> ConverterSettings {
		ConverterSettings {
			indentation_enabled: self.indentation_enabled.unwrap_or(base.indentation_enabled),
			date_format: self.date_format.unwrap_or(base.date_format),
			throw_on_error: self.throw_on_error.unwrap_or(base.throw_on_error),
		}
	}
}

/// Parse settings file text.
pub(crate) fn parse_settings(text: &str) -> Result<SettingsFile> {
	Ok(serde_json::from_str(text)?)
}

/// Load converter settings, starting from defaults when no file is given.
pub(crate) fn load_settings(path: Option<&Path>) -> Result<ConverterSettings> {
	let Some(path) = path else {
		return Ok(ConverterSettings::default());
	};

	let text = fs::read_to_string(path)?;
	let settings = parse_settings(&text)?.apply(ConverterSettings::default());
	debug!("loaded settings from {}: {settings:?}", path.display());
	Ok(settings)
}
