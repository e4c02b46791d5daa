/// Options shared by serialization and deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterSettings {
	/// Emit two-space indented output instead of compact text.
	pub indentation_enabled: bool,
	/// Date pattern carried for callers; no date types are mapped.
	pub date_format: String,
	/// Abort on the first field conversion error instead of keeping the default.
	pub throw_on_error: bool,
}

impl Default for ConverterSettings {
	fn default() -> Self {
		Self {
			indentation_enabled: false,
			date_format: "yyyy-MM-ddTHH:mm:ss.fffZ".to_owned(),
			throw_on_error: true,
		}
	}
}

impl ConverterSettings {
	/// Preset for human-readable output.
	pub fn pretty() -> Self {
		Self {
			indentation_enabled: true,
			..Self::default()
		}
	}

	/// Preset that logs field conversion errors and keeps going.
	pub fn lenient() -> Self {
		Self {
			throw_on_error: false,
			..Self::default()
		}
	}
}
