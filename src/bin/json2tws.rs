//! Convert a JSON solution document back into a Tile World solution file.
//!
//! # Usage
//!
//! ```bash
//! json2tws solutions.json solutions.tws
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tws_rs::json;

#[derive(Parser)]
#[command(name = "json2tws")]
#[command(version)]
#[command(about = "Convert a JSON solution document to a Tile World solution file", long_about = None)]
struct Cli {
	/// Input JSON document
	#[arg(value_name = "INPUT_JSON")]
	input: PathBuf,

	/// Output solution file
	#[arg(value_name = "OUTPUT_TWS")]
	output: PathBuf,
}

fn main() -> anyhow::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
	let cli = Cli::parse();

	let text = fs::read_to_string(&cli.input)
		.with_context(|| format!("failed to read {}", cli.input.display()))?;
	let document: serde_json::Value =
		serde_json::from_str(&text).context("error parsing json")?;
	let file = json::document_to_file(&document)?;
	file.save(&cli.output)
		.with_context(|| format!("failed to write {}", cli.output.display()))?;

	log::info!("wrote {} levels to {}", file.levels.len(), cli.output.display());
	Ok(())
}
