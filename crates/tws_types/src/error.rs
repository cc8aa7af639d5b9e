//! Error types for solution-file, notation, and document handling.

use thiserror::Error;

/// Errors that can occur when reading or writing `.tws` solution files.
#[derive(Debug, Error)]
pub enum TwsError {
	/// The file does not start with the solution-file signature
	#[error("not a valid solution file")]
	InvalidSignature,

	/// Ruleset byte outside the known set
	#[error("unknown ruleset ({0})")]
	BadRuleset(u8),

	/// The stream ended inside a record
	#[error("unexpected EOF")]
	Truncated,

	/// A record length that is neither password-only nor large enough to
	/// hold a solution header
	#[error("invalid data in solution file")]
	InvalidRecord {
		/// Declared record length in bytes
		size: u32,
	},

	/// The opcode stream ended in the middle of a value
	#[error("level {level}: truncated solution data")]
	TruncatedSolution {
		/// Number of the level being expanded
		level: u16,
	},

	/// The record carries no move data
	#[error("level {level}: no solution data")]
	MissingSolution {
		/// Number of the level being expanded
		level: u16,
	},

	/// A direction value outside the closed direction set
	#[error("level {level}: unknown direction ({code})")]
	UnknownDirection {
		/// Number of the level being translated
		level: u16,
		/// Offending 9-bit direction code
		code: u16,
	},

	/// Move times that do not strictly increase
	#[error("level {level}: bad delta ({delta}) at move {index}")]
	BadDelta {
		/// Number of the level being compressed
		level: u16,
		/// Index of the offending move
		index: usize,
		/// The non-positive inter-move gap
		delta: i64,
	},

	/// The reader hit a fatal error earlier and cannot continue
	#[error("solution file reader is in a failed state")]
	Failed,

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Errors from the textual move-notation parser and compressor.
#[derive(Debug, Error)]
pub enum NotationError {
	/// Unexpected character in a move string
	#[error("parse error at column {column}")]
	ParseError {
		/// One-based column of the offending character
		column: usize,
	},

	/// A move string that would push the game timer past its 23-bit bound
	#[error("time limit exceeded at column {column}")]
	TickOverflow {
		/// One-based column of the move that overflowed the timer
		column: usize,
	},

	/// Non-positive time delta between consecutive moves
	#[error("move {index}: bad delta ({delta})")]
	BadDelta {
		/// Index of the offending move
		index: usize,
		/// The non-positive inter-move gap
		delta: i64,
	},

	/// A direction that cannot be written in move notation
	#[error("move {index}: unknown direction")]
	UnknownDirection {
		/// Index of the offending move
		index: usize,
	},
}

/// Errors from converting the structured JSON document. Per-level problems
/// are logged and skipped by the conversion layer; these are the fatal,
/// document-level kinds.
#[derive(Debug, Error)]
pub enum DocumentError {
	/// The document root is not an object
	#[error("expected an object")]
	NotAnObject,

	/// The object does not carry the expected class tag
	#[error("expected object to have class \"{expected}\"")]
	WrongClass {
		/// The class tag that was expected
		expected: &'static str,
	},

	/// The document has no solutions array
	#[error("no solutions")]
	MissingSolutions,

	/// The document names no usable ruleset
	#[error("missing or unknown ruleset")]
	BadRuleset,

	/// Solution-file error while building or writing the container
	#[error(transparent)]
	Tws(#[from] TwsError),

	/// Notation error while parsing or rendering a move string
	#[error(transparent)]
	Notation(#[from] NotationError),
}
