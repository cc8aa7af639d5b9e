//! Prelude module for `tws_types`.
//!
//! This module provides a convenient way to import the commonly used types
//! and operations in one go.
//!
//! # Examples
//!
//! ```no_run
//! use tws_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = TwsFile::open("solutions.tws")?;
//! for level in &file.levels {
//!     if level.has_solution() {
//!         let solution = expand(level)?;
//!         println!("level {}: {} moves", level.number, solution.moves.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Container types
#[doc(inline)]
pub use crate::file::tws::{File as TwsFile, Header, LevelData, Reader, Record, Ruleset, Writer};

// Solution codec
#[doc(inline)]
pub use crate::file::tws::{contract, expand};

// Move primitives
#[doc(inline)]
pub use crate::moves::{
	Action, Direction, MAXIMUM_TICK_COUNT, MoveList, Solution, TIME_NIL,
};

// Move notation
#[doc(inline)]
pub use crate::notation::{ParsedMoves, compress, parse};

// Errors
#[doc(inline)]
pub use crate::error::{DocumentError, NotationError, TwsError};

// Re-export the file module for advanced usage
#[doc(inline)]
pub use crate::file;
