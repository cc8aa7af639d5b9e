//! Benchmark helper utilities for `tws-rs`.
//!
//! Real solution files are a few kilobytes per level, dominated by short
//! orthogonal moves with occasional long pauses. The generator below
//! produces deterministic synthetic move lists with roughly that mix so the
//! codec benchmarks exercise every opcode format without needing test data
//! on disk.

use tws_types::moves::{Action, Direction, MoveList};

/// Generates a deterministic move list of the given length.
///
/// The pattern cycles through short fast moves, 4-tick runs (which the
/// binary codec turns into triple-packs), diagonals, long pauses, and the
/// occasional mouse click.
pub fn generate_moves(len: usize) -> MoveList {
	let mut moves = MoveList::with_capacity(len);
	let mut when = 0u32;
	for n in 0..len {
		let dir = match n % 11 {
			0 | 3 | 5 => Direction::North,
			1 | 6 => Direction::East,
			2 | 7 => Direction::South,
			4 | 8 => Direction::West,
			9 => Direction::NorthWest,
			_ => Direction::Mouse {
				dx: (n % 19) as i8 - 9,
				dy: (n % 7) as i8 - 3,
			},
		};
		moves.push(Action::new(when, dir));
		when += match n % 13 {
			0..=5 => 4,
			6..=9 => 1,
			10 => 9,
			11 => 150,
			_ => 3000,
		};
	}
	moves
}

/// Common benchmark sizes.
pub mod sizes {
	/// A short solution, a few seconds of play.
	pub const SHORT: usize = 100;
	/// A typical full-level solution.
	pub const TYPICAL: usize = 1_000;
	/// A marathon solution near the timer bound.
	pub const LONG: usize = 10_000;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generated_moves_are_strictly_increasing() {
		let moves = generate_moves(sizes::TYPICAL);
		assert_eq!(moves.len(), sizes::TYPICAL);
		for pair in moves.as_slice().windows(2) {
			assert!(pair[0].when < pair[1].when);
		}
	}
}
