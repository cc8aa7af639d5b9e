//! Convert a Tile World solution file to its JSON document form.
//!
//! # Usage
//!
//! ```bash
//! tws2json solutions.tws             # print the document to stdout
//! tws2json solutions.tws out.json    # write the document to a file
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tws_rs::json;
use tws_rs::prelude::*;

#[derive(Parser)]
#[command(name = "tws2json")]
#[command(version)]
#[command(about = "Convert a Tile World solution file to JSON", long_about = None)]
struct Cli {
	/// Input solution file
	#[arg(value_name = "INPUT_TWS")]
	input: PathBuf,

	/// Output JSON file; stdout when omitted
	#[arg(value_name = "OUTPUT_JSON")]
	output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
	let cli = Cli::parse();

	let file = TwsFile::open(&cli.input)
		.with_context(|| format!("failed to read {}", cli.input.display()))?;
	let document = json::file_to_document(&file);
	let text = serde_json::to_string_pretty(&document)?;

	match &cli.output {
		Some(path) => fs::write(path, text + "\n")
			.with_context(|| format!("failed to write {}", path.display()))?,
		None => writeln!(io::stdout(), "{text}")?,
	}
	Ok(())
}
