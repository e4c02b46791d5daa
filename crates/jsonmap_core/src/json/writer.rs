use crate::json::{ConverterSettings, Value};

const INDENT: &str = "  ";

struct Frame {
	object: bool,
	empty: bool,
}

/// Incremental JSON text builder, compact or two-space indented.
///
/// Strings are written verbatim between quotes; callers pass raw content.
pub struct JsonWriter {
	out: String,
	pretty: bool,
	frames: Vec<Frame>,
}

impl JsonWriter {
	/// Create a writer; `pretty` enables indentation.
	pub fn new(pretty: bool) -> Self {
		Self {
			out: String::new(),
			pretty,
			frames: Vec::new(),
		}
	}

	/// Create a writer honouring `indentation_enabled`.
	pub fn from_settings(settings: &ConverterSettings) -> Self {
		Self::new(settings.indentation_enabled)
	}

	/// Open an object.
	pub fn begin_object(&mut self) {
		self.before_value();
		self.out.push('{');
		self.frames.push(Frame { object: true, empty: true });
	}

	/// Close the innermost object.
	pub fn end_object(&mut self) {
		self.close('}');
	}

	/// Open an array.
	pub fn begin_array(&mut self) {
		self.before_value();
		self.out.push('[');
		self.frames.push(Frame { object: false, empty: true });
	}

	/// Close the innermost array.
	pub fn end_array(&mut self) {
		self.close(']');
	}

	/// Write an object key; the next value call supplies its value.
	pub fn key(&mut self, name: &str) {
		self.separate();
		self.out.push('"');
		self.out.push_str(name);
		self.out.push_str(if self.pretty { "\": " } else { "\":" });
	}

	/// Write quoted raw string content.
	pub fn string(&mut self, text: &str) {
		self.before_value();
		self.out.push('"');
		self.out.push_str(text);
		self.out.push('"');
	}

	/// Write literal number text.
	pub fn number(&mut self, text: &str) {
		self.before_value();
		self.out.push_str(text);
	}

	/// Write `true` or `false`.
	pub fn boolean(&mut self, value: bool) {
		self.before_value();
		self.out.push_str(if value { "true" } else { "false" });
	}

	/// Write `null`.
	pub fn null(&mut self) {
		self.before_value();
		self.out.push_str("null");
	}

	/// Return the text written so far.
	pub fn finish(self) -> String {
		self.out
	}

	fn before_value(&mut self) {
		if self.frames.last().is_some_and(|frame| !frame.object) {
			self.separate();
		}
	}

	fn separate(&mut self) {
		let depth = self.frames.len();
		let Some(frame) = self.frames.last_mut() else {
			return;
		};
		if !frame.empty {
			self.out.push(',');
		}
		frame.empty = false;
		if self.pretty {
			self.newline(depth);
		}
	}

	fn close(&mut self, closer: char) {
		let frame = self.frames.pop();
		if self.pretty && frame.is_some_and(|frame| !frame.empty) {
			self.newline(self.frames.len());
		}
		self.out.push(closer);
	}

	fn newline(&mut self, depth: usize) {
		self.out.push('\n');
		for _ in 0..depth {
			self.out.push_str(INDENT);
		}
	}
}

/// Render a value tree as JSON text; object keys follow map order.
pub fn write_value(value: &Value, settings: &ConverterSettings) -> String {
	let mut writer = JsonWriter::from_settings(settings);
	emit(&mut writer, value);
	writer.finish()
}

fn emit(writer: &mut JsonWriter, value: &Value) {
	match value {
		Value::Null => writer.null(),
		Value::Bool(value) => writer.boolean(*value),
		Value::Number(text) => writer.number(text),
		Value::String(text) => writer.string(text),
		Value::Array(items) => {
			writer.begin_array();
			for item in items {
				emit(writer, item);
			}
			writer.end_array();
		}
		Value::Object(members) => {
			writer.begin_object();
			for (key, item) in members {
				writer.key(key);
				emit(writer, item);
			}
			writer.end_object();
		}
	}
}
