use std::path::PathBuf;

use jsonmap::json::{InclusionTable, Value, parse};

use crate::cmd::util::emit_json;
use crate::error::Result;
use crate::source::JsonDocument;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print document size, root shape, per-kind value counts, and nesting depth.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let doc = JsonDocument::open(&path)?;
	let value = parse(doc.text(), &InclusionTable::passthrough())?;
	let stats = ValueStats::collect(&value);

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: doc.compression.as_str(),
			raw_bytes: doc.raw_len,
			text_bytes: doc.text().len(),
			root_kind: value.kind_name(),
			max_depth: stats.max_depth,
			counts: stats.counts,
			object_keys: stats.object_keys,
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", doc.compression.as_str());
	println!("raw_bytes: {}", doc.raw_len);
	println!("text_bytes: {}", doc.text().len());
	println!("root_kind: {}", value.kind_name());
	println!("max_depth: {}", stats.max_depth);
	println!("object_keys: {}", stats.object_keys);
	println!("counts:");
	println!("  null: {}", stats.counts.null);
	println!("  boolean: {}", stats.counts.boolean);
	println!("  number: {}", stats.counts.number);
	println!("  string: {}", stats.counts.string);
	println!("  array: {}", stats.counts.array);
	println!("  object: {}", stats.counts.object);

	Ok(())
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub(crate) struct KindCounts {
	null: usize,
	boolean: usize,
	number: usize,
	string: usize,
	array: usize,
	object: usize,
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct ValueStats {
	counts: KindCounts,
	object_keys: usize,
	max_depth: usize,
}

impl ValueStats {
	pub(crate) fn collect(value: &Value) -> Self {
		let mut stats = Self::default();
		stats.visit(value, 1);
		stats
	}

	fn visit(&mut self, value: &Value, depth: usize) {
		self.max_depth = self.max_depth.max(depth);
		match value {
			Value::Null => self.counts.null += 1,
			Value::Bool(_) => self.counts.boolean += 1,
			Value::Number(_) => self.counts.number += 1,
			Value::String(_) => self.counts.string += 1,
			Value::Array(items) => {
				self.counts.array += 1;
				for item in items {
					self.visit(item, depth + 1);
				}
			}
			Value::Object(members) => {
				self.counts.object += 1;
				self.object_keys += members.len();
				for item in members.values() {
					self.visit(item, depth + 1);
				}
			}
		}
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	raw_bytes: usize,
	text_bytes: usize,
	root_kind: &'static str,
	max_depth: usize,
	counts: KindCounts,
	object_keys: usize,
}

#[cfg(test)]
mod tests;
