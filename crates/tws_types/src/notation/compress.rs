//! The move-notation compressor.
//!
//! Streams actions through three stages: each action becomes a 1-tick move,
//! a staged move is promoted to a 4-tick move when enough idle time follows
//! it, and equal consecutive moves are run-length encoded. Leftover idle
//! time between moves becomes a wait. Mouse actions bypass promotion and
//! run-length encoding; they are always single 1-tick clicks.

use crate::error::NotationError;
use crate::moves::{Action, Direction, MoveList};

#[derive(Debug, Clone, Copy)]
struct Staged {
	dir: Direction,
	duration: u32,
}

#[derive(Debug, Clone, Copy)]
struct Run {
	dir: Direction,
	duration: u32,
	count: u32,
}

#[derive(Debug, Default)]
struct Compressor {
	out: String,
	last_when: Option<u32>,
	staged: Option<Staged>,
	run: Option<Run>,
}

impl Compressor {
	fn add_move(&mut self, index: usize, action: Action) -> Result<(), NotationError> {
		if action.dir == Direction::Nil {
			return Err(NotationError::UnknownDirection { index });
		}
		// Ticks between the previous move and this one; the first move is
		// treated as falling one tick after an imaginary predecessor.
		let mut delta = match self.last_when {
			Some(last) => i64::from(action.when) - i64::from(last),
			None => 1,
		};
		if delta <= 0 {
			return Err(NotationError::BadDelta { index, delta });
		}

		if let Some(staged) = &mut self.staged
			&& staged.dir.is_directional()
			&& staged.duration == 1
			&& delta >= 4
		{
			staged.duration = 4;
			delta -= 3;
		}

		// The previous move is final now; send it along.
		self.push_staged(index)?;

		if delta > 1 {
			self.flush_run(index)?;
			self.emit_wait((delta - 1) as u32);
		}

		self.staged = Some(Staged {
			dir: action.dir,
			duration: 1,
		});
		self.last_when = Some(action.when);
		Ok(())
	}

	/// Feeds the staged move into the run-length accumulator. Mouse moves
	/// never carry a repeat count, so they are written out directly.
	fn push_staged(&mut self, index: usize) -> Result<(), NotationError> {
		let Some(staged) = self.staged.take() else {
			return Ok(());
		};
		if staged.dir.is_mouse() {
			self.flush_run(index)?;
			self.print_mouse(staged.dir);
			return Ok(());
		}
		if let Some(run) = &mut self.run
			&& run.dir == staged.dir
			&& run.duration == staged.duration
		{
			run.count += 1;
			return Ok(());
		}
		self.flush_run(index)?;
		self.run = Some(Run {
			dir: staged.dir,
			duration: staged.duration,
			count: 1,
		});
		Ok(())
	}

	fn flush_run(&mut self, index: usize) -> Result<(), NotationError> {
		let Some(run) = self.run.take() else {
			return Ok(());
		};
		if run.count > 1 {
			self.out.push_str(&run.count.to_string());
		}
		self.print_direction(run.dir, run.duration, index)
	}

	fn print_direction(
		&mut self,
		dir: Direction,
		duration: u32,
		index: usize,
	) -> Result<(), NotationError> {
		let (first, second) =
			direction_letters(dir).ok_or(NotationError::UnknownDirection { index })?;
		let slow = duration == 4;
		self.out.push(if slow { first.to_ascii_uppercase() } else { first });
		if let Some(second) = second {
			self.out.push('+');
			self.out
				.push(if slow { second.to_ascii_uppercase() } else { second });
		}
		Ok(())
	}

	fn print_mouse(&mut self, dir: Direction) {
		let Direction::Mouse { dx, dy } = dir else {
			return;
		};
		self.out.push('*');
		if dx == 0 && dy == 0 {
			self.out.push('.');
			return;
		}
		if dy != 0 {
			if dy.abs() != 1 {
				self.out.push_str(&dy.abs().to_string());
			}
			self.out.push(if dy < 0 { 'U' } else { 'D' });
		}
		if dx != 0 {
			if dy != 0 {
				self.out.push(';');
			}
			if dx.abs() != 1 {
				self.out.push_str(&dx.abs().to_string());
			}
			self.out.push(if dx < 0 { 'L' } else { 'R' });
		}
	}

	fn emit_wait(&mut self, ticks: u32) {
		match ticks {
			0 => {}
			1 => self.out.push(','),
			2 => self.out.push_str(",,"),
			4 => self.out.push('.'),
			n => {
				self.out.push_str(&n.to_string());
				self.out.push(',');
			}
		}
	}

	fn finish(mut self, solution_time: u32, moves: usize) -> Result<String, NotationError> {
		let Some(last) = self.last_when else {
			return Ok(self.out);
		};
		let mut wait = i64::from(solution_time) - i64::from(last) - 1;
		if let Some(staged) = &mut self.staged
			&& staged.dir.is_directional()
			&& staged.duration == 1
			&& wait >= 2
		{
			staged.duration = 4;
			wait -= 3;
		}
		let index = moves.saturating_sub(1);
		self.push_staged(index)?;
		self.flush_run(index)?;
		if wait > 0 {
			self.emit_wait(wait as u32);
		}
		Ok(self.out)
	}
}

/// The lowercase letter pair for a direction; `None` for anything that has
/// no letter form.
fn direction_letters(dir: Direction) -> Option<(char, Option<char>)> {
	match dir {
		Direction::North => Some(('u', None)),
		Direction::West => Some(('l', None)),
		Direction::South => Some(('d', None)),
		Direction::East => Some(('r', None)),
		Direction::NorthWest => Some(('u', Some('l'))),
		Direction::NorthEast => Some(('u', Some('r'))),
		Direction::SouthWest => Some(('d', Some('l'))),
		Direction::SouthEast => Some(('d', Some('r'))),
		_ => None,
	}
}

/// Convert a list of moves to its canonical textual representation.
///
/// `solution_time` is the total solution time in ticks; idle time after the
/// last move becomes a trailing wait.
pub fn compress(moves: &MoveList, solution_time: u32) -> Result<String, NotationError> {
	let mut compressor = Compressor::default();
	for (index, action) in moves.iter().enumerate() {
		compressor.add_move(index, *action)?;
	}
	compressor.finish(solution_time, moves.len())
}
