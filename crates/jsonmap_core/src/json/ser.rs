use std::any::Any;

use crate::json::{ConverterSettings, DataType, JsonError, JsonWriter, Kind, Result, TypeDesc, classify};

/// Walks an instance through its descriptor and writes JSON text.
///
/// Objects emit fields in declaration order, `None` becomes `null`, and
/// strings are quoted without escaping.
pub struct Serializer {
	writer: JsonWriter,
}

impl Serializer {
	/// Create a serializer writing with the given settings.
	pub fn new(settings: &ConverterSettings) -> Self {
		Self {
			writer: JsonWriter::from_settings(settings),
		}
	}

	/// Write `value`, which must be an instance of `ty`.
	pub fn write_any(&mut self, value: &dyn Any, ty: &'static TypeDesc) -> Result<()> {
		if value.type_id() != ty.id {
			return Err(mismatch(ty));
		}

		match &ty.kind {
			Kind::Optional(option) => {
				return match (option.get)(value) {
					Some(inner) => self.write_any(inner, (option.inner)()),
					None => {
						self.writer.null();
						Ok(())
					}
				};
			}
			Kind::Boxed(boxed) => {
				let inner = (boxed.get)(value).ok_or_else(|| mismatch(ty))?;
				return self.write_any(inner, (boxed.inner)());
			}
			_ => {}
		}

		match classify(Some(ty)) {
			DataType::String => self.write_string(value, ty),
			DataType::Number => {
				let kind = ty.number_kind().ok_or_else(|| mismatch(ty))?;
				self.writer.number(&kind.format(value)?);
				Ok(())
			}
			DataType::Boolean => {
				let flag = value.downcast_ref::<bool>().ok_or_else(|| mismatch(ty))?;
				self.writer.boolean(*flag);
				Ok(())
			}
			DataType::Null => {
				self.writer.null();
				Ok(())
			}
			DataType::Array => self.write_array(value, ty),
			DataType::Object => self.write_object(value, ty),
		}
	}

	/// Return the written text.
	pub fn finish(self) -> String {
		self.writer.finish()
	}

	fn write_string(&mut self, value: &dyn Any, ty: &'static TypeDesc) -> Result<()> {
		let text = match &ty.kind {
			Kind::Enum(item) => (item.name_of)(value),
			_ => value.downcast_ref::<String>().map(String::as_str),
		};
		let text = text.ok_or_else(|| mismatch(ty))?;
		self.writer.string(text);
		Ok(())
	}

	fn write_array(&mut self, value: &dyn Any, ty: &'static TypeDesc) -> Result<()> {
		let array = ty.as_array().ok_or_else(|| mismatch(ty))?;
		let len = (array.len)(value).ok_or_else(|| mismatch(ty))?;
		let element = (array.element)();

		self.writer.begin_array();
		for index in 0..len {
			let item = (array.get)(value, index).ok_or_else(|| mismatch(ty))?;
			self.write_any(item, element)?;
		}
		self.writer.end_array();
		Ok(())
	}

	fn write_object(&mut self, value: &dyn Any, ty: &'static TypeDesc) -> Result<()> {
		let object = ty.as_object().ok_or_else(|| mismatch(ty))?;

		self.writer.begin_object();
		for field in &object.fields {
			let item = (field.get)(value).ok_or_else(|| mismatch(ty))?;
			self.writer.key(field.name);
			self.write_any(item, (field.ty)())?;
		}
		self.writer.end_object();
		Ok(())
	}
}

fn mismatch(ty: &'static TypeDesc) -> JsonError {
	JsonError::DescriptorMismatch { type_name: ty.name }
}
