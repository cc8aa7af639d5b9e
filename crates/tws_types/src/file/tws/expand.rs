//! Expansion of compressed solution data into move lists.
//!
//! The move data is a stream of variable-width values, one per move (or
//! three, for the packed form). The low two bits of the first byte select
//! the format; bit diagrams below are little-endian, matching the format's
//! own documentation.
//!
//! | Low bits | Bytes | Layout                                             |
//! |----------|-------|----------------------------------------------------|
//! | `00`     | 1     | `00DDEEFF`: three orthogonal moves, 4 ticks each   |
//! | `01`     | 1     | `NNDDDTTT`: 3-bit direction, 3-bit time            |
//! | `10`     | 2     | `NNDDDTTT TTTTTTTT`: 3-bit direction, 11-bit time  |
//! | `11`, bit 4 clear | 4   | `11DD0TTT` + 3 time bytes: 2-bit direction, 27-bit time |
//! | `11`, bit 4 set   | 2-5 | `11NN1DDD DDDDDDTT` + N time bytes: 9-bit direction |
//!
//! Time fields store the gap to the previous move less one; the very first
//! move of a solution is stored without the decrement.

use crate::error::TwsError;
use crate::moves::{Action, Direction, Solution};

use super::LevelData;
use super::constants::SOLUTION_HEADER_SIZE;

/// Direction for a compact index already masked to its field width.
fn index_dir(index: u8) -> Direction {
	Direction::from_index(index).unwrap_or(Direction::Nil)
}

/// Expand a level's solution data into an actual list of moves.
///
/// The record must carry move data; see [`LevelData::has_solution`]. The
/// running tick counter is not clamped to the 23-bit timer bound, matching
/// the original decoder.
pub fn expand(level: &LevelData) -> Result<Solution, TwsError> {
	let data = &level.data;
	if data.len() <= SOLUTION_HEADER_SIZE {
		return Err(TwsError::MissingSolution {
			level: level.number,
		});
	}

	let mut solution = Solution::new();
	solution.flags = data[6];
	solution.rndslidedir = index_dir(data[7] & 0x07);
	solution.stepping = (data[7] >> 3) & 0x07;
	solution.rndseed = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);

	let truncated = || TwsError::TruncatedSolution {
		level: level.number,
	};

	let mut when: i64 = -1;
	let mut pos = SOLUTION_HEADER_SIZE;
	while pos < data.len() {
		let first = data[pos];
		match first & 0x03 {
			0x00 => {
				for shift in [2u8, 4, 6] {
					when += 4;
					solution
						.moves
						.push(Action::new(when as u32, index_dir((first >> shift) & 0x03)));
				}
				pos += 1;
			}
			0x01 => {
				when += i64::from((first >> 5) & 0x07) + 1;
				solution
					.moves
					.push(Action::new(when as u32, index_dir((first >> 2) & 0x07)));
				pos += 1;
			}
			0x02 => {
				let second = *data.get(pos + 1).ok_or_else(truncated)?;
				when += i64::from((first >> 5) & 0x07) + (i64::from(second) << 3) + 1;
				solution
					.moves
					.push(Action::new(when as u32, index_dir((first >> 2) & 0x07)));
				pos += 2;
			}
			_ => {
				if first & 0x10 != 0 {
					let extra = usize::from((first >> 2) & 0x03);
					if pos + 2 + extra > data.len() {
						return Err(truncated());
					}
					let second = data[pos + 1];
					let code = u16::from((first >> 5) & 0x07) | (u16::from(second & 0x3F) << 3);
					let dir = Direction::from_code(code).ok_or(TwsError::UnknownDirection {
						level: level.number,
						code,
					})?;
					when += i64::from((second >> 6) & 0x03);
					for k in 0..extra {
						when += i64::from(data[pos + 2 + k]) << (2 + 8 * k);
					}
					when += 1;
					solution.moves.push(Action::new(when as u32, dir));
					pos += 2 + extra;
				} else {
					if pos + 4 > data.len() {
						return Err(truncated());
					}
					when += i64::from((first >> 5) & 0x07)
						| (i64::from(data[pos + 1]) << 3)
						| (i64::from(data[pos + 2]) << 11)
						| (i64::from(data[pos + 3]) << 19);
					when += 1;
					solution
						.moves
						.push(Action::new(when as u32, index_dir((first >> 2) & 0x03)));
					pos += 4;
				}
			}
		}
	}
	Ok(solution)
}
