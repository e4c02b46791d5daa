use log::trace;

use crate::json::{Inclusion, InclusionTable, JsonError, ObjectMap, Result, Token, Value, skip_value};

/// Parse `text` into a value tree, keeping only keys the table includes.
///
/// Only whitespace may follow the root value.
pub fn parse(text: &str, table: &InclusionTable) -> Result<Value> {
	let mut parser = Parser::new(text, table);
	let value = parser.parse_value()?;
	parser.finish()?;
	Ok(value)
}

/// Recursive-descent parser guided by an [`InclusionTable`].
///
/// The parser owns its scan position and the current nesting path. Objects
/// consult the table for every key: leaves are kept whole with every key
/// inside them, nested entries are parsed with the deeper path active, and
/// absent keys are skipped.
pub struct Parser<'a> {
	text: &'a str,
	bytes: &'a [u8],
	pos: usize,
	path: String,
	table: &'a InclusionTable,
	/// Number of enclosing leaf values; the table is not consulted while nonzero.
	keep_depth: usize,
}

impl<'a> Parser<'a> {
	/// Create a parser positioned at the start of `text` with the root path.
	pub fn new(text: &'a str, table: &'a InclusionTable) -> Self {
		Self {
			text,
			bytes: text.as_bytes(),
			pos: 0,
			path: String::new(),
			table,
			keep_depth: 0,
		}
	}

	/// Current byte offset.
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Current nesting path.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Parse the next value.
	pub fn parse_value(&mut self) -> Result<Value> {
		self.skip_noise();
		let Some(byte) = self.peek() else {
			return Err(JsonError::UnexpectedEof {
				at: self.pos,
				expected: "value",
			});
		};

		match Token::classify(byte) {
			Token::StartObject => self.parse_object(),
			Token::StartArray => self.parse_array(),
			Token::Quote => Ok(Value::String(self.parse_string()?.into())),
			Token::Number => Ok(Value::Number(self.scan_scalar().into())),
			Token::Boolean => Ok(Value::Bool(self.scan_scalar().starts_with('t'))),
			Token::Null => {
				self.scan_scalar();
				Ok(Value::Null)
			}
			Token::EndObject | Token::EndArray | Token::Colon | Token::Comma | Token::Whitespace | Token::String => {
				Err(self.unexpected("value"))
			}
		}
	}

	/// Fail unless only whitespace remains.
	pub fn finish(&mut self) -> Result<()> {
		while let Some(byte) = self.peek() {
			if Token::classify(byte) != Token::Whitespace {
				return Err(self.unexpected("end of input"));
			}
			self.pos += 1;
		}
		Ok(())
	}

	fn parse_object(&mut self) -> Result<Value> {
		let start = self.pos;
		self.pos += 1;
		let mut members = ObjectMap::new();

		loop {
			self.skip_noise();
			let Some(byte) = self.peek() else {
				return Err(JsonError::UnterminatedObject { at: start });
			};
			match Token::classify(byte) {
				Token::EndObject => {
					self.pos += 1;
					break;
				}
				Token::Quote => {}
				_ => return Err(self.unexpected("object key")),
			}

			let key = self.parse_string()?;
			if self.keep_depth > 0 {
				let value = self.parse_value()?;
				members.insert(key.into(), value);
				continue;
			}

			let table = self.table;
			match table.lookup(&self.path, key) {
				Some(Inclusion::Leaf) => {
					let value = self.parse_whole()?;
					members.insert(key.into(), value);
				}
				Some(Inclusion::Nested(deeper)) => {
					let saved = std::mem::replace(&mut self.path, deeper.to_string());
					let value = self.parse_value();
					self.path = saved;
					members.insert(key.into(), value?);
				}
				None => {
					trace!("skipping {key:?} at path {:?}", self.path);
					self.pos = skip_value(self.bytes, self.pos)?;
				}
			}
		}

		Ok(Value::Object(members))
	}

	fn parse_whole(&mut self) -> Result<Value> {
		self.keep_depth += 1;
		let value = self.parse_value();
		self.keep_depth -= 1;
		value
	}

	fn parse_array(&mut self) -> Result<Value> {
		let start = self.pos;
		self.pos += 1;
		let mut items = Vec::new();

		loop {
			self.skip_noise();
			match self.peek() {
				None => return Err(JsonError::UnterminatedArray { at: start }),
				Some(b']') => {
					self.pos += 1;
					break;
				}
				Some(_) => items.push(self.parse_value()?),
			}
		}

		Ok(Value::Array(items))
	}

	/// Raw content between the quote at `pos` and the next unescaped quote.
	fn parse_string(&mut self) -> Result<&'a str> {
		let text = self.text;
		let start = self.pos;
		let mut pos = start + 1;

		while pos < self.bytes.len() {
			match self.bytes[pos] {
				b'\\' => pos += 2,
				b'"' => {
					self.pos = pos + 1;
					return Ok(&text[start + 1..pos]);
				}
				_ => pos += 1,
			}
		}

		Err(JsonError::UnterminatedString { at: start })
	}

	/// Span up to the next `,`, `]`, `}` or end of input, trailing whitespace trimmed.
	fn scan_scalar(&mut self) -> &'a str {
		let text = self.text;
		let start = self.pos;
		while let Some(byte) = self.peek() {
			if Token::classify(byte).is_value_end() {
				break;
			}
			self.pos += 1;
		}
		text[start..self.pos].trim_end()
	}

	fn skip_noise(&mut self) {
		while let Some(byte) = self.peek() {
			if !Token::classify(byte).is_noise() {
				break;
			}
			self.pos += 1;
		}
	}

	fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	fn unexpected(&self, expected: &'static str) -> JsonError {
		let found = self.text.get(self.pos..).and_then(|rest| rest.chars().next()).unwrap_or(char::REPLACEMENT_CHARACTER);
		JsonError::UnexpectedToken {
			at: self.pos,
			found,
			expected,
		}
	}
}
