//! Dump the moves of every solution in a Tile World solution file.
//!
//! Prints one line per move: the tick it happens on and its direction.
//! Useful for eyeballing what a solution actually does without going
//! through the JSON notation.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::error;
use tws_rs::prelude::*;

#[derive(Parser)]
#[command(name = "tws2txt")]
#[command(version)]
#[command(about = "Dump the moves of a Tile World solution file as plain text", long_about = None)]
struct Cli {
	/// Input solution file
	#[arg(value_name = "INPUT_TWS")]
	input: PathBuf,

	/// Also dump each level's raw move data as hex
	#[arg(long)]
	hex: bool,
}

fn main() -> anyhow::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
	let cli = Cli::parse();

	let file = TwsFile::open(&cli.input)
		.with_context(|| format!("failed to read {}", cli.input.display()))?;

	if let Some(levelset) = &file.levelset {
		println!("levelset {levelset}");
	}
	for level in &file.levels {
		if level.number == 0 || !level.has_solution() {
			continue;
		}
		let solution = match expand(level) {
			Ok(solution) => solution,
			Err(err) => {
				error!("{err}");
				continue;
			}
		};
		println!("level {}", level.number);
		if cli.hex {
			println!("data {}", hex::encode(&level.data[16..]));
		}
		for action in &solution.moves {
			match action.dir {
				Direction::Mouse { dx, dy } => {
					println!("{:8} mouse {} {}", action.when, dx, dy);
				}
				dir => println!("{:8} {}", action.when, dir.mask().unwrap_or(0)),
			}
		}
	}
	Ok(())
}
