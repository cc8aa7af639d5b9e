//! Contraction of move lists into compressed solution data.
//!
//! Each move is stored in the smallest format that fits it (see the table
//! in [`expand`](super::expand)): one byte for an orthogonal move up to
//! eight ticks after the last, two bytes up to 2^11 ticks, four bytes
//! beyond that. Mouse moves, and diagonal moves too far from their
//! predecessor for the 3-bit direction formats, use the variable-length
//! 9-bit-direction form. Three consecutive orthogonal moves exactly four
//! ticks apart pack into a single byte.

use crate::error::TwsError;
use crate::moves::{Action, Solution};

use super::LevelData;
use super::constants::SOLUTION_HEADER_SIZE;

/// Packs three consecutive orthogonal moves at 4-tick spacing into one
/// byte, when the moves starting at `start` qualify.
fn triple_pack(moves: &[Action], start: usize) -> Option<u8> {
	let window = moves.get(start..start + 3)?;
	let spacing_a = i64::from(window[1].when) - i64::from(window[0].when);
	let spacing_b = i64::from(window[2].when) - i64::from(window[1].when);
	if spacing_a != 4 || spacing_b != 4 {
		return None;
	}
	let mut packed = 0u8;
	for (slot, action) in window.iter().enumerate() {
		if !action.dir.is_orthogonal() {
			return None;
		}
		packed |= action.dir.index()? << (2 + 2 * slot);
	}
	Some(packed)
}

/// Take the given solution and compress it into the record payload for the
/// given level.
///
/// An empty move list contracts to a password-only record. Moves must be
/// strictly ordered in time.
pub fn contract(
	solution: &Solution,
	number: u16,
	password: [u8; 4],
	besttime: i32,
) -> Result<LevelData, TwsError> {
	let moves = solution.moves.as_slice();
	if moves.is_empty() {
		return Ok(LevelData::password_only(number, password));
	}

	// Size pre-pass: worst-case allowance for the first move, then the
	// format each later move lands in when considered in isolation.
	let mut size = SOLUTION_HEADER_SIZE + 5;
	for pair in moves.windows(2) {
		let gap = i64::from(pair[1].when) - i64::from(pair[0].when);
		size += if !pair[1].dir.is_orthogonal() {
			5
		} else if gap <= 1 << 3 {
			1
		} else if gap <= 1 << 11 {
			2
		} else {
			4
		};
	}

	let mut data = Vec::with_capacity(size);
	data.extend_from_slice(&number.to_le_bytes());
	data.extend_from_slice(&password);
	data.push(solution.flags);
	let rsdir = solution
		.rndslidedir
		.index()
		.ok_or(TwsError::UnknownDirection {
			level: number,
			code: solution.rndslidedir.code().unwrap_or(0),
		})?;
	data.push(rsdir | ((solution.stepping & 0x07) << 3));
	data.extend_from_slice(&solution.rndseed.to_le_bytes());
	data.extend_from_slice(&besttime.to_le_bytes());

	let mut when: i64 = -1;
	let mut index = 0;
	while index < moves.len() {
		let action = moves[index];
		let delta = i64::from(action.when) - when - 1;
		if delta < 0 {
			return Err(TwsError::BadDelta {
				level: number,
				index,
				delta,
			});
		}
		when = i64::from(action.when);
		let dir = action.dir;

		if dir.is_mouse() || (dir.is_diagonal() && delta >= 1 << 11) {
			let code = dir.code().ok_or(TwsError::UnknownDirection {
				level: number,
				code: 0,
			})?;
			let first = data.len();
			data.push(0x13 | (((code & 0x07) as u8) << 5));
			data.push(((code >> 3) & 0x3F) as u8 | (((delta & 0x03) as u8) << 6));
			if delta >= 1 << 2 {
				data.push(((delta >> 2) & 0xFF) as u8);
				if delta < 1 << 10 {
					data[first] |= 1 << 2;
				} else {
					data.push(((delta >> 10) & 0xFF) as u8);
					if delta < 1 << 18 {
						data[first] |= 2 << 2;
					} else {
						data.push(((delta >> 18) & 0xFF) as u8);
						data[first] |= 3 << 2;
					}
				}
			}
		} else if delta == 3
			&& let Some(packed) = triple_pack(moves, index)
		{
			data.push(packed);
			when = i64::from(moves[index + 2].when);
			index += 2;
		} else {
			let diridx = dir.index().ok_or(TwsError::UnknownDirection {
				level: number,
				code: dir.code().unwrap_or(0),
			})?;
			if delta < 1 << 3 {
				data.push(0x01 | (diridx << 2) | ((delta as u8) << 5));
			} else if delta < 1 << 11 {
				data.push(0x02 | (diridx << 2) | (((delta << 5) & 0xE0) as u8));
				data.push(((delta >> 3) & 0xFF) as u8);
			} else {
				data.push(0x03 | (diridx << 2) | (((delta << 5) & 0xE0) as u8));
				data.push(((delta >> 3) & 0xFF) as u8);
				data.push(((delta >> 11) & 0xFF) as u8);
				data.push(((delta >> 19) & 0xFF) as u8);
			}
		}
		index += 1;
	}

	Ok(LevelData {
		number,
		password,
		besttime,
		data,
	})
}
