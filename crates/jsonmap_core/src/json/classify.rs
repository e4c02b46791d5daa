use crate::json::{Kind, TypeDesc};

/// JSON-level shape of a type or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
	/// Quoted text, including enum variant names.
	String,
	/// Any integral or floating type.
	Number,
	/// `true` or `false`.
	Boolean,
	/// Absent type or value.
	Null,
	/// Homogeneous sequence.
	Array,
	/// Record with named fields.
	Object,
}

/// Classify a type descriptor; `None` stands for an absent value.
///
/// `Option` and `Box` are transparent. Unit enums travel as their variant
/// names and classify as strings.
pub fn classify(ty: Option<&'static TypeDesc>) -> DataType {
	let Some(ty) = ty else {
		return DataType::Null;
	};

	match ty.resolve().kind {
		Kind::String | Kind::Enum(_) => DataType::String,
		Kind::Number(_) => DataType::Number,
		Kind::Boolean => DataType::Boolean,
		Kind::Array(_) => DataType::Array,
		Kind::Object(_) | Kind::Optional(_) | Kind::Boxed(_) => DataType::Object,
	}
}

/// Whether values of `ty` are structured (object or array) rather than scalar.
pub fn is_object_shape(ty: &'static TypeDesc) -> bool {
	!matches!(ty.resolve().kind, Kind::String | Kind::Number(_) | Kind::Boolean | Kind::Enum(_))
}

/// Whether `ty` is a homogeneous sequence.
pub fn is_array_shape(ty: &'static TypeDesc) -> bool {
	matches!(ty.resolve().kind, Kind::Array(_))
}

/// Innermost element type after unwrapping nested sequences.
pub fn element_type(ty: &'static TypeDesc) -> &'static TypeDesc {
	let mut ty = ty.resolve();
	while let Kind::Array(array) = &ty.kind {
		ty = (array.element)().resolve();
	}
	ty
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::json::Mapped;

	#[test]
	fn scalars_classify_by_kind() {
		assert_eq!(classify(Some(String::type_desc())), DataType::String);
		assert_eq!(classify(Some(i64::type_desc())), DataType::Number);
		assert_eq!(classify(Some(f32::type_desc())), DataType::Number);
		assert_eq!(classify(Some(bool::type_desc())), DataType::Boolean);
		assert_eq!(classify(None), DataType::Null);
	}

	#[test]
	fn wrappers_are_transparent() {
		assert_eq!(classify(Some(<Option<u8>>::type_desc())), DataType::Number);
		assert_eq!(classify(Some(<Box<Vec<u8>>>::type_desc())), DataType::Array);
		assert!(is_array_shape(<Option<Vec<bool>>>::type_desc()));
		assert!(!is_object_shape(<Option<String>>::type_desc()));
	}

	#[test]
	fn element_type_unwraps_nested_sequences() {
		let ty = <Vec<Vec<Option<i32>>>>::type_desc();
		assert!(is_object_shape(ty), "sequences are structured");
		assert_eq!(element_type(ty).name, "i32");
	}
}
