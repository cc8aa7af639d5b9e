//! Move and direction primitives shared by all solution codecs.
//!
//! A direction has up to three equivalent encodings in the solution format:
//!
//! | Encoding | Width  | Covers                          |
//! |----------|--------|---------------------------------|
//! | mask     | 4 bits | cardinals (N=1, W=2, S=4, E=8) and diagonals (OR of two bits) |
//! | index    | 3 bits | cardinals and diagonals, in the fixed order N W S E NW SW NE SE |
//! | code     | 9 bits | everything above plus relative mouse targets |
//!
//! Mouse targets address a 19×19 square around the player and are coded as
//! `16 + (dy + 9) * 19 + (dx + 9)`, so every mouse code is ≥ 16.

use std::fmt::Display;

/// The gameplay timer is forced to remain within 23 bits, so gameplay of a
/// single level cannot exceed 4 days 20 hours 30 minutes and 30.4 seconds.
pub const MAXIMUM_TICK_COUNT: u32 = 0x007F_FFFF;

/// A magic number used to indicate an undefined time value.
pub const TIME_NIL: i32 = 0x7FFF_FFFF;

/// Smallest relative mouse offset along either axis.
pub const MOUSE_RANGE_MIN: i8 = -9;

/// Largest relative mouse offset along either axis.
pub const MOUSE_RANGE_MAX: i8 = 9;

/// Width of the square of reachable mouse targets.
pub const MOUSE_RANGE: u16 = 19;

/// A move direction: one of the four cardinals, one of the four diagonals,
/// a relative mouse target, or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// No direction.
	Nil,
	/// North (up).
	North,
	/// West (left).
	West,
	/// South (down).
	South,
	/// East (right).
	East,
	/// North and west combined (Lynx diagonal).
	NorthWest,
	/// South and west combined (Lynx diagonal).
	SouthWest,
	/// North and east combined (Lynx diagonal).
	NorthEast,
	/// South and east combined (Lynx diagonal).
	SouthEast,
	/// A relative mouse target (MS ruleset). `(0, 0)` is a click on the
	/// player itself.
	Mouse {
		/// Horizontal offset, positive toward the east.
		dx: i8,
		/// Vertical offset, positive toward the south.
		dy: i8,
	},
}

impl Direction {
	/// Directions in compact-index order.
	const BY_INDEX: [Direction; 8] = [
		Direction::North,
		Direction::West,
		Direction::South,
		Direction::East,
		Direction::NorthWest,
		Direction::SouthWest,
		Direction::NorthEast,
		Direction::SouthEast,
	];

	/// Returns the direction for a 3-bit compact index, or `None` when the
	/// index is out of range.
	pub fn from_index(index: u8) -> Option<Direction> {
		Self::BY_INDEX.get(usize::from(index)).copied()
	}

	/// Returns the 3-bit compact index of a cardinal or diagonal direction.
	pub fn index(self) -> Option<u8> {
		match self {
			Direction::North => Some(0),
			Direction::West => Some(1),
			Direction::South => Some(2),
			Direction::East => Some(3),
			Direction::NorthWest => Some(4),
			Direction::SouthWest => Some(5),
			Direction::NorthEast => Some(6),
			Direction::SouthEast => Some(7),
			_ => None,
		}
	}

	/// Returns the 4-bit direction mask. `Nil` maps to 0; mouse targets have
	/// no mask.
	pub fn mask(self) -> Option<u8> {
		match self {
			Direction::Nil => Some(0),
			Direction::North => Some(1),
			Direction::West => Some(2),
			Direction::South => Some(4),
			Direction::East => Some(8),
			Direction::NorthWest => Some(3),
			Direction::SouthWest => Some(6),
			Direction::NorthEast => Some(9),
			Direction::SouthEast => Some(12),
			Direction::Mouse { .. } => None,
		}
	}

	/// Returns the direction for a 4-bit mask, or `None` when the mask does
	/// not name a cardinal or diagonal (e.g. north and south combined).
	pub fn from_mask(mask: u8) -> Option<Direction> {
		match mask {
			0 => Some(Direction::Nil),
			1 => Some(Direction::North),
			2 => Some(Direction::West),
			4 => Some(Direction::South),
			8 => Some(Direction::East),
			3 => Some(Direction::NorthWest),
			6 => Some(Direction::SouthWest),
			9 => Some(Direction::NorthEast),
			12 => Some(Direction::SouthEast),
			_ => None,
		}
	}

	/// Returns the 9-bit wire code: the mask for directional values, or the
	/// mouse-target encoding for mouse values. `Nil` has no wire code.
	pub fn code(self) -> Option<u16> {
		match self {
			Direction::Nil => None,
			Direction::Mouse { dx, dy } => Some(
				16 + u16::from((dy - MOUSE_RANGE_MIN) as u8) * MOUSE_RANGE
					+ u16::from((dx - MOUSE_RANGE_MIN) as u8),
			),
			dir => dir.mask().map(u16::from),
		}
	}

	/// Decodes a 9-bit wire code. Values below 16 must be a valid direction
	/// mask; values from 16 up address the 19×19 mouse square.
	pub fn from_code(code: u16) -> Option<Direction> {
		if code == 0 {
			return None;
		}
		if code < 16 {
			return Direction::from_mask(code as u8).filter(|dir| *dir != Direction::Nil);
		}
		let offset = code - 16;
		if offset >= MOUSE_RANGE * MOUSE_RANGE {
			return None;
		}
		let dx = (offset % MOUSE_RANGE) as i8 + MOUSE_RANGE_MIN;
		let dy = (offset / MOUSE_RANGE) as i8 + MOUSE_RANGE_MIN;
		Some(Direction::Mouse { dx, dy })
	}

	/// Builds a mouse target, checking that both offsets are within range.
	pub fn mouse(dx: i8, dy: i8) -> Option<Direction> {
		if (MOUSE_RANGE_MIN..=MOUSE_RANGE_MAX).contains(&dx)
			&& (MOUSE_RANGE_MIN..=MOUSE_RANGE_MAX).contains(&dy)
		{
			Some(Direction::Mouse { dx, dy })
		} else {
			None
		}
	}

	/// True for cardinals and diagonals.
	pub fn is_directional(self) -> bool {
		!matches!(self, Direction::Nil | Direction::Mouse { .. })
	}

	/// True for the four cardinal directions.
	pub fn is_orthogonal(self) -> bool {
		matches!(
			self,
			Direction::North | Direction::West | Direction::South | Direction::East
		)
	}

	/// True for the four diagonal directions.
	pub fn is_diagonal(self) -> bool {
		matches!(
			self,
			Direction::NorthWest
				| Direction::SouthWest
				| Direction::NorthEast
				| Direction::SouthEast
		)
	}

	/// True for mouse targets.
	pub fn is_mouse(self) -> bool {
		matches!(self, Direction::Mouse { .. })
	}
}

impl Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Direction::Nil => write!(f, "nil"),
			Direction::North => write!(f, "north"),
			Direction::West => write!(f, "west"),
			Direction::South => write!(f, "south"),
			Direction::East => write!(f, "east"),
			Direction::NorthWest => write!(f, "north+west"),
			Direction::SouthWest => write!(f, "south+west"),
			Direction::NorthEast => write!(f, "north+east"),
			Direction::SouthEast => write!(f, "south+east"),
			Direction::Mouse { dx, dy } => write!(f, "mouse({dx},{dy})"),
		}
	}
}

/// A single move of a solution: a direction and the tick it happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
	/// Absolute tick count of the move.
	pub when: u32,
	/// Direction of the move.
	pub dir: Direction,
}

impl Action {
	/// Creates a new action.
	pub fn new(when: u32, dir: Direction) -> Self {
		Self { when, dir }
	}
}

/// An ordered list of moves. Appending is amortized O(1), clearing keeps the
/// allocation, and cloning yields an independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
	moves: Vec<Action>,
}

impl MoveList {
	/// Creates an empty move list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty move list with room for `capacity` moves.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			moves: Vec::with_capacity(capacity),
		}
	}

	/// Appends a move to the end of the list.
	pub fn push(&mut self, action: Action) {
		self.moves.push(action);
	}

	/// Removes all moves, keeping the allocation for reuse.
	pub fn clear(&mut self) {
		self.moves.clear();
	}

	/// Number of moves in the list.
	pub fn len(&self) -> usize {
		self.moves.len()
	}

	/// True when the list holds no moves.
	pub fn is_empty(&self) -> bool {
		self.moves.is_empty()
	}

	/// Iterates over the moves in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, Action> {
		self.moves.iter()
	}

	/// The moves as a slice, in insertion order.
	pub fn as_slice(&self) -> &[Action] {
		&self.moves
	}

	/// The final move, if any.
	pub fn last(&self) -> Option<&Action> {
		self.moves.last()
	}
}

impl From<Vec<Action>> for MoveList {
	fn from(moves: Vec<Action>) -> Self {
		Self { moves }
	}
}

impl<'a> IntoIterator for &'a MoveList {
	type Item = &'a Action;
	type IntoIter = std::slice::Iter<'a, Action>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// All the data needed to reconstruct one level's solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
	/// The actual moves of the solution.
	pub moves: MoveList,
	/// The PRNG's initial seed.
	pub rndseed: u32,
	/// Other solution flags (currently unused by the format).
	pub flags: u8,
	/// The random slide's initial direction. The wire format has no way to
	/// say "none", so this defaults to north (compact index 0).
	pub rndslidedir: Direction,
	/// The timer offset, in `0..=7`.
	pub stepping: u8,
}

impl Default for Solution {
	fn default() -> Self {
		Self {
			moves: MoveList::new(),
			rndseed: 0,
			flags: 0,
			rndslidedir: Direction::North,
			stepping: 0,
		}
	}
}

impl Solution {
	/// Creates an empty solution.
	pub fn new() -> Self {
		Self::default()
	}

	/// Resets the solution for reuse between levels, keeping the move-list
	/// allocation.
	pub fn clear(&mut self) {
		self.moves.clear();
		self.rndseed = 0;
		self.flags = 0;
		self.rndslidedir = Direction::North;
		self.stepping = 0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_index_roundtrip() {
		for index in 0..8 {
			let dir = Direction::from_index(index).unwrap();
			assert_eq!(dir.index(), Some(index));
			assert!(dir.is_directional());
		}
		assert_eq!(Direction::from_index(8), None);
	}

	#[test]
	fn test_mask_roundtrip() {
		for mask in [1u8, 2, 4, 8, 3, 6, 9, 12] {
			let dir = Direction::from_mask(mask).unwrap();
			assert_eq!(dir.mask(), Some(mask));
		}
		assert_eq!(Direction::from_mask(5), None);
		assert_eq!(Direction::from_mask(7), None);
		assert_eq!(Direction::from_mask(0), Some(Direction::Nil));
	}

	#[test]
	fn test_classification() {
		assert!(Direction::North.is_orthogonal());
		assert!(!Direction::North.is_diagonal());
		assert!(Direction::SouthEast.is_diagonal());
		assert!(!Direction::SouthEast.is_orthogonal());
		assert!(Direction::Mouse { dx: 0, dy: 0 }.is_mouse());
		assert!(!Direction::Mouse { dx: 0, dy: 0 }.is_directional());
		assert!(!Direction::Nil.is_directional());
	}

	#[test]
	fn test_mouse_code() {
		// A click on the player itself sits at the center of the square.
		let center = Direction::Mouse { dx: 0, dy: 0 };
		assert_eq!(center.code(), Some(16 + 9 * 19 + 9));
		assert_eq!(Direction::from_code(16 + 9 * 19 + 9), Some(center));

		let dir = Direction::Mouse { dx: 2, dy: -3 };
		assert_eq!(dir.code(), Some(16 + 6 * 19 + 11));
		assert_eq!(Direction::from_code(141), Some(dir));

		assert_eq!(Direction::from_code(16), Some(Direction::Mouse { dx: -9, dy: -9 }));
		assert_eq!(
			Direction::from_code(16 + 19 * 19 - 1),
			Some(Direction::Mouse { dx: 9, dy: 9 })
		);
		assert_eq!(Direction::from_code(16 + 19 * 19), None);
	}

	#[test]
	fn test_directional_code_is_mask() {
		assert_eq!(Direction::East.code(), Some(8));
		assert_eq!(Direction::from_code(8), Some(Direction::East));
		assert_eq!(Direction::from_code(0), None);
		assert_eq!(Direction::from_code(5), None);
	}

	#[test]
	fn test_mouse_range_check() {
		assert!(Direction::mouse(9, -9).is_some());
		assert!(Direction::mouse(10, 0).is_none());
		assert!(Direction::mouse(0, -10).is_none());
	}

	#[test]
	fn test_move_list_clear_keeps_capacity() {
		let mut list = MoveList::with_capacity(16);
		for n in 0..10 {
			list.push(Action::new(n, Direction::North));
		}
		let copy = list.clone();
		list.clear();
		assert!(list.is_empty());
		assert_eq!(copy.len(), 10);
	}
}
