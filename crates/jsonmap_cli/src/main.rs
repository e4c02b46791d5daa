#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod error;
mod source;

#[derive(Parser)]
#[command(name = "jsonmap", about = "Schema-filtered JSON inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize document size, shape, and nesting.
	Info(cmd::info::Args),
	/// Parse a document, optionally keeping only selected key paths.
	Parse(cmd::parse::Args),
	/// Re-emit a document compact or indented.
	Fmt(cmd::fmt::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> error::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Parse(args) => cmd::parse::run(args),
		Commands::Fmt(args) => cmd::fmt::run(args),
	}
}
