/// Token class decided from a single lookahead byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
	/// `{`
	StartObject,
	/// `}`
	EndObject,
	/// `[`
	StartArray,
	/// `]`
	EndArray,
	/// `:`
	Colon,
	/// `,`
	Comma,
	/// `"`
	Quote,
	/// Space, tab, line feed, or carriage return.
	Whitespace,
	/// Digit or `-`.
	Number,
	/// `t` or `f`.
	Boolean,
	/// `n`.
	Null,
	/// Anything else; only valid inside a string.
	String,
}

impl Token {
	/// Classify one input byte.
	pub fn classify(byte: u8) -> Self {
		match byte {
			b'0'..=b'9' | b'-' => Self::Number,
			b'{' => Self::StartObject,
			b'}' => Self::EndObject,
			b'[' => Self::StartArray,
			b']' => Self::EndArray,
			b'"' => Self::Quote,
			b',' => Self::Comma,
			b':' => Self::Colon,
			b' ' | b'\t' | b'\n' | b'\r' => Self::Whitespace,
			b't' | b'f' => Self::Boolean,
			b'n' => Self::Null,
			_ => Self::String,
		}
	}

	/// Whether the token carries no value and is skipped between values.
	pub fn is_noise(self) -> bool {
		matches!(self, Self::Whitespace | Self::Comma | Self::Colon)
	}

	/// Whether the token ends a scalar value.
	pub fn is_value_end(self) -> bool {
		matches!(self, Self::Comma | Self::EndArray | Self::EndObject)
	}
}
