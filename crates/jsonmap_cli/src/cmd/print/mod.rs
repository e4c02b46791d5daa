use std::fmt::{self, Write};

use jsonmap::json::Value;

/// Output truncation limits for printed value trees.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of members printed for a single object.
	pub max_members: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_members: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Render one parsed value tree as indented text.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	Tree { value, options }.to_string()
}

struct Tree<'a> {
	value: &'a Value,
	options: PrintOptions,
}

impl fmt::Display for Tree<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_value(f, self.value, 0, 0, self.options)
	}
}

fn write_value(out: &mut impl Write, value: &Value, indent: usize, depth: u32, options: PrintOptions) -> fmt::Result {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => writeln!(out, "{pad}null"),
		Value::Bool(v) => writeln!(out, "{pad}{v}"),
		Value::Number(v) => writeln!(out, "{pad}{v}"),
		Value::String(v) => writeln!(out, "{pad}\"{}\"", truncate(v, options.max_string_len)),
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				return writeln!(out, "{pad}[... {} items]", items.len());
			}
			writeln!(out, "{pad}[")?;
			for item in items.iter().take(options.max_array_items) {
				write_value(out, item, indent + 2, depth + 1, options)?;
			}
			if items.len() > options.max_array_items {
				writeln!(out, "{pad}  ... {} more", items.len() - options.max_array_items)?;
			}
			writeln!(out, "{pad}]")
		}
		Value::Object(members) => {
			if depth >= options.max_print_depth {
				return writeln!(out, "{pad}{{ ... {} members }}", members.len());
			}
			writeln!(out, "{pad}{{")?;
			for (key, item) in members.iter().take(options.max_members) {
				write!(out, "{pad}  {key} = ")?;
				if matches!(item, Value::Object(_) | Value::Array(_)) {
					out.write_char('\n')?;
					write_value(out, item, indent + 4, depth + 1, options)?;
				} else {
					write_value(out, item, 0, depth + 1, options)?;
				}
			}
			if members.len() > options.max_members {
				writeln!(out, "{pad}  ... {} more members", members.len() - options.max_members)?;
			}
			writeln!(out, "{pad}}}")
		}
	}
}

fn truncate(text: &str, max: usize) -> String {
	match text.char_indices().nth(max) {
		Some((cut, _)) => format!("{}...", &text[..cut]),
		None => text.to_owned(),
	}
}
