use std::path::PathBuf;

use jsonmap::json::{InclusionTable, parse, write_value};

use crate::cmd::util::load_settings;
use crate::error::Result;
use crate::source::JsonDocument;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Indent output with two spaces; overrides the settings file.
	#[arg(long)]
	pub pretty: bool,
	/// JSON file with converter settings.
	#[arg(long, value_name = "FILE")]
	pub settings: Option<PathBuf>,
}

/// Re-emit a document through the JSON writer.
pub fn run(args: Args) -> Result<()> {
	let Args { path, pretty, settings } = args;

	let mut settings = load_settings(settings.as_deref())?;
	if pretty {
		settings.indentation_enabled = true;
	}

	let doc = JsonDocument::open(&path)?;
	let value = parse(doc.text(), &InclusionTable::passthrough())?;
	println!("{}", write_value(&value, &settings));
	Ok(())
}
