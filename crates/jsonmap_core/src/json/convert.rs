use std::any::Any;
use std::sync::{Arc, OnceLock};

use log::debug;

use crate::json::{
	ConverterSettings, Deserializer, InclusionTable, Mapped, Result, SchemaCache, Serializer, Value, is_array_shape, parse,
};

/// Serialize `value` to compact JSON with default settings.
pub fn serialize<T: Mapped>(value: &T) -> Result<String> {
	shared().serialize(value)
}

/// Deserialize a `T` from JSON text with default settings.
pub fn deserialize<T: Mapped>(text: &str) -> Result<T> {
	shared().deserialize(text)
}

fn shared() -> &'static Converter {
	static SHARED: OnceLock<Converter> = OnceLock::new();
	SHARED.get_or_init(Converter::default)
}

/// Settings plus a schema cache; safe to share between threads.
#[derive(Default)]
pub struct Converter {
	settings: ConverterSettings,
	schemas: SchemaCache,
}

impl Converter {
	/// Create a converter with its own schema cache.
	pub fn new(settings: ConverterSettings) -> Self {
		Self {
			settings,
			schemas: SchemaCache::new(),
		}
	}

	/// Active settings.
	pub fn settings(&self) -> &ConverterSettings {
		&self.settings
	}

	/// Inclusion table for `T`, built on first use.
	pub fn schema<T: Mapped>(&self) -> Result<Arc<InclusionTable>> {
		self.schemas.get_or_build(T::type_desc())
	}

	/// Serialize `value` to JSON text.
	pub fn serialize<T: Mapped>(&self, value: &T) -> Result<String> {
		let ty = T::type_desc();
		let mut ser = Serializer::new(&self.settings);
		ser.write_any(value as &dyn Any, ty)?;
		let text = ser.finish();
		debug!("serialized {} ({} bytes)", ty.name, text.len());
		Ok(text)
	}

	/// Deserialize a `T` from JSON text.
	///
	/// The target's inclusion table is built (or fetched) before parsing, so
	/// configuration errors surface before the text is read. Blank text yields
	/// an empty sequence for array targets and a parse error otherwise.
	pub fn deserialize<T: Mapped>(&self, text: &str) -> Result<T> {
		let ty = T::type_desc();
		let table = self.schemas.get_or_build(ty)?;

		let value = if text.trim().is_empty() && is_array_shape(ty) {
			Value::Array(Vec::new())
		} else {
			parse(text, &table)?
		};

		debug!("parsed {} bytes for {}", text.len(), ty.name);
		Deserializer::new(&self.settings).read(&value)
	}
}
