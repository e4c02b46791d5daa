use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Coarse grouping of [`JsonError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
	/// Target type or field selection cannot be used; reported before parsing.
	Configuration,
	/// Input text is structurally malformed.
	Parse,
	/// A value could not be converted to or from its field type.
	Conversion,
}

/// Errors produced while parsing and mapping JSON documents.
#[derive(Debug, Error)]
pub enum JsonError {
	/// Target object type has no constructor.
	#[error("type {type_name} cannot be instantiated")]
	Uninstantiable {
		/// Offending type name.
		type_name: &'static str,
	},
	/// Field path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Input ended where a value was required.
	#[error("unexpected end of input at offset {at}, expected {expected}")]
	UnexpectedEof {
		/// Byte offset where input ran out.
		at: usize,
		/// Token that was expected.
		expected: &'static str,
	},
	/// No closing quote before end of input.
	#[error("unterminated string starting at offset {at}")]
	UnterminatedString {
		/// Byte offset of the opening quote.
		at: usize,
	},
	/// No closing brace before end of input.
	#[error("unterminated object starting at offset {at}")]
	UnterminatedObject {
		/// Byte offset of the opening brace.
		at: usize,
	},
	/// No closing bracket before end of input.
	#[error("unterminated array starting at offset {at}")]
	UnterminatedArray {
		/// Byte offset of the opening bracket.
		at: usize,
	},
	/// Character does not start any recognized token here.
	#[error("unexpected {found:?} at offset {at}, expected {expected}")]
	UnexpectedToken {
		/// Byte offset of the character.
		at: usize,
		/// Character found.
		found: char,
		/// Token that was expected.
		expected: &'static str,
	},
	/// Number text does not parse as the field's numeric type.
	#[error("cannot parse {text:?} as {target}")]
	InvalidNumber {
		/// Raw number text.
		text: String,
		/// Target numeric type name.
		target: &'static str,
	},
	/// Value shape does not match the target type.
	#[error("type mismatch for {type_name}: expected {expected}, got {got}")]
	TypeMismatch {
		/// Target type name.
		type_name: &'static str,
		/// Expected value kind.
		expected: &'static str,
		/// Actual value kind.
		got: &'static str,
	},
	/// String does not name a variant of the target enum.
	#[error("unknown variant {name:?} for {type_name}")]
	UnknownVariant {
		/// Target enum type name.
		type_name: &'static str,
		/// Received variant name.
		name: String,
	},
	/// Floating value has no JSON representation.
	#[error("non-finite number in {type_name} cannot be serialized")]
	NonFiniteNumber {
		/// Numeric type name.
		type_name: &'static str,
	},
	/// Runtime value does not match the descriptor used to access it.
	#[error("descriptor mismatch for {type_name}")]
	DescriptorMismatch {
		/// Descriptor type name.
		type_name: &'static str,
	},
}

impl JsonError {
	/// Return the category this error belongs to.
	pub fn category(&self) -> ErrorCategory {
		match self {
			Self::Uninstantiable { .. } | Self::InvalidFieldPath { .. } => ErrorCategory::Configuration,
			Self::UnexpectedEof { .. }
			| Self::UnterminatedString { .. }
			| Self::UnterminatedObject { .. }
			| Self::UnterminatedArray { .. }
			| Self::UnexpectedToken { .. } => ErrorCategory::Parse,
			Self::InvalidNumber { .. }
			| Self::TypeMismatch { .. }
			| Self::UnknownVariant { .. }
			| Self::NonFiniteNumber { .. }
			| Self::DescriptorMismatch { .. } => ErrorCategory::Conversion,
		}
	}

	/// Byte offset into the input for parse errors.
	pub fn offset(&self) -> Option<usize> {
		match self {
			Self::UnexpectedEof { at, .. }
			| Self::UnterminatedString { at }
			| Self::UnterminatedObject { at }
			| Self::UnterminatedArray { at }
			| Self::UnexpectedToken { at, .. } => Some(*at),
			_ => None,
		}
	}
}
