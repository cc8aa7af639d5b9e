//! Core data types and codecs for Tile World solution (`.tws`) files.
//!
//! A solution file stores one compressed move stream per level behind a
//! small container header. This crate provides both directions of every
//! translation the converters need:
//!
//! - **Container**: [`file::tws`] reads and writes the container framing
//!   (header, level records, set-name and padding records).
//! - **Binary codec**: [`file::tws::expand`] and [`file::tws::contract`]
//!   translate between a level's compressed move data and a [`moves::Solution`].
//! - **Notation**: [`notation::parse`] and [`notation::compress`] translate
//!   between move lists and the textual move notation (`"4U.d+r*3U;2R"`).
//! - **Document**: [`json`] maps whole files to and from the JSON document
//!   form used by the command-line converters.
//!
//! # Examples
//!
//! ```
//! use tws_types::file::tws::{contract, expand};
//! use tws_types::moves::Solution;
//! use tws_types::notation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parsed = notation::parse("4U2R")?;
//! let mut solution = Solution::new();
//! solution.moves = parsed.moves;
//!
//! // Pack the moves into a level record and unpack them again.
//! let record = contract(&solution, 1, *b"BDHP", parsed.time as i32)?;
//! let reloaded = expand(&record)?;
//! assert_eq!(reloaded.moves, solution.moves);
//!
//! assert_eq!(notation::compress(&reloaded.moves, parsed.time)?, "4U2R");
//! # Ok(())
//! # }
//! ```

mod error;

pub mod file;
pub mod json;
pub mod moves;
pub mod notation;
pub mod prelude;

pub use error::{DocumentError, NotationError, TwsError};

// Re-export commonly used types at the crate root for convenience
pub use file::{Header, LevelData, Reader, Record, Ruleset, TwsFile, Writer};
pub use moves::{Action, Direction, MoveList, Solution};
