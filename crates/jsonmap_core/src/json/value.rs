use std::collections::BTreeMap;

/// Object members keyed by field name.
pub type ObjectMap = BTreeMap<Box<str>, Value>;

/// Type-erased parsed JSON.
///
/// Numbers stay as their source text until a field descriptor decides the
/// concrete numeric type. Strings keep their raw content, escapes included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
	/// `null`, also produced for lenient literals starting with `n`.
	#[default]
	Null,
	/// `true` or `false`.
	Bool(bool),
	/// Number text, trailing whitespace trimmed.
	Number(Box<str>),
	/// Raw content between the quotes.
	String(Box<str>),
	/// Ordered elements.
	Array(Vec<Value>),
	/// Members keyed by name; a repeated key keeps the later value.
	Object(ObjectMap),
}

impl Value {
	/// Stable label for the value kind.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "boolean",
			Self::Number(_) => "number",
			Self::String(_) => "string",
			Self::Array(_) => "array",
			Self::Object(_) => "object",
		}
	}

	/// Whether this is the `null` literal.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Text of a number or string value.
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Number(text) | Self::String(text) => Some(text),
			_ => None,
		}
	}

	/// Look up an object member.
	pub fn get(&self, key: &str) -> Option<&Value> {
		match self {
			Self::Object(members) => members.get(key),
			_ => None,
		}
	}

	/// Borrow array elements.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}
}
