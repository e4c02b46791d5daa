use log::warn;

use crate::json::{
	AnyBox, ConverterSettings, DataType, ErrorCategory, JsonError, Kind, Mapped, Result, TypeDesc, Value, classify,
};

/// Builds typed instances from a parsed value tree.
pub struct Deserializer<'s> {
	settings: &'s ConverterSettings,
}

impl<'s> Deserializer<'s> {
	/// Create a deserializer using `settings`.
	pub fn new(settings: &'s ConverterSettings) -> Self {
		Self { settings }
	}

	/// Map `value` to a `T`.
	pub fn read<T: Mapped>(&self, value: &Value) -> Result<T> {
		let ty = T::type_desc();
		let built = self.read_value(value, ty)?;
		built.downcast::<T>().map(|built| *built).map_err(|_| mismatch(ty))
	}

	/// Map `value` to a boxed instance of `ty`.
	pub fn read_value(&self, value: &Value, ty: &'static TypeDesc) -> Result<AnyBox> {
		match &ty.kind {
			Kind::Optional(option) => {
				if value.is_null() {
					return Ok((option.none)());
				}
				let inner = self.read_value(value, (option.inner)())?;
				return (option.some)(inner).ok_or_else(|| mismatch(ty));
			}
			Kind::Boxed(boxed) => {
				let inner = self.read_value(value, (boxed.inner)())?;
				return (boxed.wrap)(inner).ok_or_else(|| mismatch(ty));
			}
			_ => {}
		}

		match classify(Some(ty)) {
			DataType::String => self.read_string(value, ty),
			DataType::Number => {
				let kind = ty.number_kind().ok_or_else(|| mismatch(ty))?;
				match value {
					Value::Number(text) | Value::String(text) => kind.parse(text),
					other => Err(shape(ty, "number", other)),
				}
			}
			DataType::Boolean => match value {
				Value::Bool(flag) => Ok(Box::new(*flag)),
				other => Err(shape(ty, "boolean", other)),
			},
			DataType::Null => Err(shape(ty, "null", value)),
			DataType::Array => self.read_array(value, ty),
			DataType::Object => self.read_object(value, ty),
		}
	}

	/// Build an object: default instance, then every present non-null field.
	///
	/// Missing keys keep the field default. With `throw_on_error` unset a
	/// conversion error is logged and the field keeps its default as well.
	pub fn read_object(&self, value: &Value, ty: &'static TypeDesc) -> Result<AnyBox> {
		let object = ty.as_object().ok_or_else(|| mismatch(ty))?;
		let construct = object.construct.ok_or(JsonError::Uninstantiable { type_name: ty.name })?;
		let Value::Object(members) = value else {
			return Err(shape(ty, "object", value));
		};

		let mut instance = construct();
		for field in &object.fields {
			let Some(item) = members.get(field.name) else {
				continue;
			};
			let field_ty = (field.ty)();
			if item.is_null() && !field_ty.is_nullable() {
				continue;
			}

			let converted = match self.read_value(item, field_ty) {
				Ok(converted) => converted,
				Err(err) if !self.settings.throw_on_error && err.category() == ErrorCategory::Conversion => {
					warn!("{}.{}: {err}; keeping default", ty.name, field.name);
					continue;
				}
				Err(err) => return Err(err),
			};

			if !(field.set)(&mut *instance, converted) {
				return Err(mismatch(field_ty));
			}
		}

		Ok(instance)
	}

	/// Build a sequence from an array value.
	///
	/// `null` elements are dropped, so the result may be shorter than the input.
	pub fn read_array(&self, value: &Value, ty: &'static TypeDesc) -> Result<AnyBox> {
		let array = ty.as_array().ok_or_else(|| mismatch(ty))?;
		let Value::Array(items) = value else {
			return Err(shape(ty, "array", value));
		};

		let element = (array.element)();
		let mut out = (array.new)(items.len());
		for item in items.iter().filter(|item| !item.is_null()) {
			let converted = self.read_value(item, element)?;
			if !(array.push)(&mut *out, converted) {
				return Err(mismatch(element));
			}
		}

		Ok(out)
	}

	fn read_string(&self, value: &Value, ty: &'static TypeDesc) -> Result<AnyBox> {
		match (&ty.kind, value) {
			(Kind::Enum(item), Value::String(name)) => {
				(item.from_name)(name).ok_or_else(|| JsonError::UnknownVariant {
					type_name: ty.name,
					name: name.to_string(),
				})
			}
			(Kind::Enum(_), other) => Err(shape(ty, "string", other)),
			(_, Value::String(text) | Value::Number(text)) => Ok(Box::new(text.to_string())),
			(_, other) => Err(shape(ty, "string", other)),
		}
	}
}

fn mismatch(ty: &'static TypeDesc) -> JsonError {
	JsonError::DescriptorMismatch { type_name: ty.name }
}

fn shape(ty: &'static TypeDesc, expected: &'static str, got: &Value) -> JsonError {
	JsonError::TypeMismatch {
		type_name: ty.name,
		expected,
		got: got.kind_name(),
	}
}

#[cfg(test)]
mod tests;
