use std::path::PathBuf;

use jsonmap::json::{InclusionTable, Value, parse};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::emit_json;
use crate::error::Result;
use crate::source::JsonDocument;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Dotted key path to keep; repeatable. Everything is kept when omitted.
	#[arg(long = "keep", value_name = "PATH")]
	pub keep: Vec<String>,
	#[arg(long)]
	pub json: bool,
}

/// Parse a document through an inclusion table and print the kept tree.
pub fn run(args: Args) -> Result<()> {
	let Args { path, keep, json } = args;

	let table = if keep.is_empty() {
		InclusionTable::passthrough()
	} else {
		InclusionTable::from_field_paths(&keep)?
	};

	let doc = JsonDocument::open(&path)?;
	let value = parse(doc.text(), &table)?;

	if json {
		let payload = ParseJson {
			path: path.display().to_string(),
			keep,
			passthrough: table.is_passthrough(),
			table_entries: table.len(),
			root_kind: value.kind_name(),
			value: TreeJson(&value),
		};
		emit_json(&payload);
		return Ok(());
	}

	print!("{}", render_value(&value, PrintOptions::default()));
	Ok(())
}

#[derive(serde::Serialize)]
struct ParseJson<'a> {
	path: String,
	keep: Vec<String>,
	passthrough: bool,
	table_entries: usize,
	root_kind: &'static str,
	value: TreeJson<'a>,
}

/// Serde view of a parsed tree; numbers keep integer form when they fit.
pub(crate) struct TreeJson<'a>(pub(crate) &'a Value);

impl Serialize for TreeJson<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self.0 {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(value) => serializer.serialize_bool(*value),
			Value::Number(text) => {
				if let Ok(value) = text.parse::<i64>() {
					serializer.serialize_i64(value)
				} else if let Ok(value) = text.parse::<u64>() {
					serializer.serialize_u64(value)
				} else if let Ok(value) = text.parse::<f64>() {
					serializer.serialize_f64(value)
				} else {
					serializer.serialize_str(text)
				}
			}
			Value::String(text) => serializer.serialize_str(text),
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(&TreeJson(item))?;
				}
				seq.end()
			}
			Value::Object(members) => {
				let mut map = serializer.serialize_map(Some(members.len()))?;
				for (key, item) in members {
					map.serialize_entry(&**key, &TreeJson(item))?;
				}
				map.end()
			}
		}
	}
}
