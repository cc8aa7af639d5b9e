//! The textual move-notation mini-language.
//!
//! A move string is a sequence of optionally counted chunks:
//!
//! | Notation    | Meaning                                             |
//! |-------------|-----------------------------------------------------|
//! | `U D L R`   | a 4-tick move north/south/west/east                 |
//! | `u d l r`   | a 1-tick move                                       |
//! | `U+L`, `d+r`| a diagonal move; both letters share the same case   |
//! | `.`         | wait 4 ticks                                        |
//! | `,`         | wait 1 tick                                         |
//! | `17R`, `3.` | a repeat count for the following move or wait       |
//! | `*.`        | a mouse click on the player itself                  |
//! | `*3U;2R`    | a mouse click at a relative offset, one or two axis components |
//! | space       | ignored                                             |
//!
//! [`parse`] turns a move string into an action list; [`compress`] renders
//! an action list back into its canonical string form.

mod compress;
mod parse;

pub use compress::compress;
pub use parse::{ParsedMoves, parse};

use crate::moves::Direction;

fn is_upper_move(c: u8) -> bool {
	matches!(c, b'U' | b'D' | b'L' | b'R')
}

fn is_lower_move(c: u8) -> bool {
	matches!(c, b'u' | b'd' | b'l' | b'r')
}

fn letter_direction(c: u8) -> Option<Direction> {
	match c {
		b'U' | b'u' => Some(Direction::North),
		b'D' | b'd' => Some(Direction::South),
		b'L' | b'l' => Some(Direction::West),
		b'R' | b'r' => Some(Direction::East),
		_ => None,
	}
}

/// Combines two cardinal letters into a diagonal; degenerate pairs such as
/// north with south (or north with north) have no direction.
fn combine(first: Direction, second: Direction) -> Option<Direction> {
	let mask = first.mask()? | second.mask()?;
	Direction::from_mask(mask).filter(|dir| dir.is_diagonal())
}
