//! File format support for Tile World solution data.

pub mod tws;

// Re-export main file types
pub use tws::{
	File as TwsFile, Header, LevelData, Reader, Record, Ruleset, Writer, contract, expand,
};
