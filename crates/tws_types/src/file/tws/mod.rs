//! `.tws` solution-file container support.
//!
//! ## File layout
//!
//! All integers are little-endian. The file starts with a fixed preamble:
//!
//! | Offset | Size | Field                               |
//! |--------|------|-------------------------------------|
//! | 0      | 4    | signature (`35 33 9B 99`)           |
//! | 4      | 1    | ruleset (1 = Lynx, 2 = MS)          |
//! | 5      | 2    | flags; carries the current level    |
//! | 7      | 1    | size of the extra header bytes      |
//! | 8      | N    | extra header bytes, kept opaque     |
//!
//! After the preamble come level records, each framed by a 4-byte length.
//! A length of `0xFFFFFFFF` ends the container, a length of 0 is padding.
//! A record of length 6 holds only a level number and password. Any other
//! record starts with a 16-byte solution header:
//!
//! | Offset | Size | Field                                   |
//! |--------|------|-----------------------------------------|
//! | 0      | 2    | level number                            |
//! | 2      | 4    | level password (four ASCII characters)  |
//! | 6      | 1    | solution flags                          |
//! | 7      | 1    | random slide index (bits 0..2), stepping (bits 3..5) |
//! | 8      | 4    | initial PRNG seed                       |
//! | 12     | 4    | solution time in ticks, or `TIME_NIL`   |
//! | 16     | ..   | compressed move data (see [`expand`])   |
//!
//! A record whose level number is 0 and whose password starts with a NUL
//! byte carries the level-set name instead of a solution.

mod contract;
mod expand;

use std::io::{self, Read, Write as _};
use std::path::Path;

use crate::error::TwsError;
use crate::moves::TIME_NIL;

pub use contract::contract;
pub use expand::expand;

/// Constants of the container format.
pub mod constants {
	/// The signature bytes of the solution files.
	pub const SIGNATURE: u32 = 0x999B_3335;

	/// Size of the fixed per-level solution header.
	pub const SOLUTION_HEADER_SIZE: usize = 16;

	/// Record length of a password-only level.
	pub const PASSWORD_ONLY_SIZE: usize = 6;

	/// Record length marking the end of the container.
	pub const END_MARKER: u32 = 0xFFFF_FFFF;

	/// Longest level-set name a set-name record can carry.
	pub const MAX_SETNAME: usize = 255;
}

use constants::{END_MARKER, MAX_SETNAME, PASSWORD_ONLY_SIZE, SIGNATURE, SOLUTION_HEADER_SIZE};

/// The rulesets a solution file can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ruleset {
	/// The Lynx ruleset.
	Lynx = 1,
	/// The Microsoft ruleset.
	Ms = 2,
}

impl Ruleset {
	/// Converts the ruleset byte of the file header.
	pub fn from_u8(value: u8) -> Result<Self, TwsError> {
		match value {
			1 => Ok(Self::Lynx),
			2 => Ok(Self::Ms),
			_ => Err(TwsError::BadRuleset(value)),
		}
	}

	/// Converts `Ruleset` to its file-header byte.
	pub fn to_u8(self) -> u8 {
		self as u8
	}

	/// The lowercase name used in the document form.
	pub fn name(self) -> &'static str {
		match self {
			Self::Lynx => "lynx",
			Self::Ms => "ms",
		}
	}

	/// Looks a ruleset up by its document name.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"lynx" => Some(Self::Lynx),
			"ms" => Some(Self::Ms),
			_ => None,
		}
	}
}

impl std::fmt::Display for Ruleset {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// The fixed file preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
	/// Ruleset the solutions were recorded under.
	pub ruleset: Ruleset,
	/// Option flags. The original tools store the set's current level
	/// number here.
	pub flags: u16,
	/// Unrecognized trailing header bytes, preserved as-is.
	pub extra: Vec<u8>,
}

impl Header {
	/// Creates a header for the given ruleset with no flags or extra bytes.
	pub fn new(ruleset: Ruleset) -> Self {
		Self {
			ruleset,
			flags: 0,
			extra: Vec::new(),
		}
	}

	/// Reads the file preamble from the given reader.
	pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, TwsError> {
		let mut buffer = [0u8; 8];
		reader
			.read_exact(&mut buffer)
			.map_err(|_| TwsError::InvalidSignature)?;
		let signature = u32::from_le_bytes([buffer[0], buffer[1], buffer[2], buffer[3]]);
		if signature != SIGNATURE {
			return Err(TwsError::InvalidSignature);
		}
		let ruleset = Ruleset::from_u8(buffer[4])?;
		let flags = u16::from_le_bytes([buffer[5], buffer[6]]);
		let extrasize = usize::from(buffer[7]);
		let mut extra = vec![0u8; extrasize];
		reader
			.read_exact(&mut extra)
			.map_err(|_| TwsError::InvalidSignature)?;
		Ok(Self {
			ruleset,
			flags,
			extra,
		})
	}

	/// Writes the file preamble to the given writer. Extra bytes beyond 255
	/// cannot be represented and are dropped.
	pub fn to_writer<W: io::Write>(&self, writer: &mut W) -> Result<(), TwsError> {
		writer.write_all(&SIGNATURE.to_le_bytes())?;
		writer.write_all(&[self.ruleset.to_u8()])?;
		writer.write_all(&self.flags.to_le_bytes())?;
		let extra = &self.extra[..self.extra.len().min(255)];
		writer.write_all(&[extra.len() as u8])?;
		writer.write_all(extra)?;
		Ok(())
	}
}

/// One level record of a solution file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelData {
	/// Numerical ID of the level.
	pub number: u16,
	/// The level's four-character password.
	pub password: [u8; 4],
	/// Time of the best solution in ticks, or [`TIME_NIL`].
	pub besttime: i32,
	/// Raw record payload exactly as framed on disk. Empty when the record
	/// was synthesized without data; see [`LevelData::password_only`].
	pub data: Vec<u8>,
}

impl LevelData {
	/// Creates a record that carries only a level number and password.
	pub fn password_only(number: u16, password: [u8; 4]) -> Self {
		let mut data = Vec::with_capacity(PASSWORD_ONLY_SIZE);
		data.extend_from_slice(&number.to_le_bytes());
		data.extend_from_slice(&password);
		Self {
			number,
			password,
			besttime: TIME_NIL,
			data,
		}
	}

	/// True when the record carries compressed move data.
	pub fn has_solution(&self) -> bool {
		self.data.len() > SOLUTION_HEADER_SIZE
	}

	/// True when the record holds only a number and password.
	pub fn is_password_only(&self) -> bool {
		self.data.len() == PASSWORD_ONLY_SIZE
	}

	/// The password as text, for the document form.
	pub fn password_text(&self) -> String {
		String::from_utf8_lossy(&self.password).into_owned()
	}
}

/// A successfully framed record from the container body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
	/// The level-set name record (level 0 with a NUL password).
	SetName(String),
	/// An ordinary level record.
	Level(LevelData),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
	Header,
	Body,
	Eof,
	Error,
}

/// Streaming reader for `.tws` containers.
///
/// Drives the record-framing state machine: the preamble is read on first
/// use, then [`Reader::next_record`] yields records until the end marker or
/// the end of the stream. Padding records are skipped silently. Once a read
/// fails, the reader stays failed.
#[derive(Debug)]
pub struct Reader<R> {
	inner: R,
	state: ReaderState,
	header: Option<Header>,
}

impl<R: Read> Reader<R> {
	/// Creates a reader over the given byte stream.
	pub fn new(inner: R) -> Self {
		Self {
			inner,
			state: ReaderState::Header,
			header: None,
		}
	}

	/// Reads the file preamble if it has not been read yet, and returns it.
	pub fn header(&mut self) -> Result<&Header, TwsError> {
		if self.state == ReaderState::Header {
			match Header::from_reader(&mut self.inner) {
				Ok(header) => {
					self.header = Some(header);
					self.state = ReaderState::Body;
				}
				Err(err) => {
					self.state = ReaderState::Error;
					return Err(err);
				}
			}
		}
		self.header.as_ref().ok_or(TwsError::Failed)
	}

	/// Returns the next record, or `None` at the end of the container.
	pub fn next_record(&mut self) -> Result<Option<Record>, TwsError> {
		if self.state == ReaderState::Header {
			self.header()?;
		}
		loop {
			match self.state {
				ReaderState::Body => {}
				ReaderState::Eof => return Ok(None),
				_ => return Err(TwsError::Failed),
			}
			let mut length = [0u8; 4];
			match self.inner.read_exact(&mut length) {
				Ok(()) => {}
				Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
					self.state = ReaderState::Eof;
					return Ok(None);
				}
				Err(err) => {
					self.state = ReaderState::Error;
					return Err(err.into());
				}
			}
			let size = u32::from_le_bytes(length);
			if size == END_MARKER {
				self.state = ReaderState::Eof;
				return Ok(None);
			}
			if size == 0 {
				// padding record
				continue;
			}
			match self.read_record(size) {
				Ok(record) => return Ok(Some(record)),
				Err(err) => {
					self.state = ReaderState::Error;
					return Err(err);
				}
			}
		}
	}

	fn read_record(&mut self, size: u32) -> Result<Record, TwsError> {
		let size = size as usize;
		if size <= SOLUTION_HEADER_SIZE && size != PASSWORD_ONLY_SIZE {
			return Err(TwsError::InvalidRecord { size: size as u32 });
		}
		let mut data = vec![0u8; size];
		self.inner.read_exact(&mut data).map_err(|err| {
			if err.kind() == io::ErrorKind::UnexpectedEof {
				TwsError::Truncated
			} else {
				TwsError::Io(err)
			}
		})?;
		let number = u16::from_le_bytes([data[0], data[1]]);
		let mut password = [0u8; 4];
		password.copy_from_slice(&data[2..6]);
		if size == PASSWORD_ONLY_SIZE {
			return Ok(Record::Level(LevelData {
				number,
				password,
				besttime: TIME_NIL,
				data,
			}));
		}
		let besttime = i32::from_le_bytes([data[12], data[13], data[14], data[15]]);
		if number == 0 && password[0] == 0 {
			let name = &data[SOLUTION_HEADER_SIZE..];
			let name = &name[..name.len().min(MAX_SETNAME)];
			let name = match name.iter().position(|&byte| byte == 0) {
				Some(nul) => &name[..nul],
				None => name,
			};
			return Ok(Record::SetName(String::from_utf8_lossy(name).into_owned()));
		}
		Ok(Record::Level(LevelData {
			number,
			password,
			besttime,
			data,
		}))
	}
}

/// Streaming writer for `.tws` containers, the mirror image of [`Reader`].
#[derive(Debug)]
pub struct Writer<W: io::Write> {
	inner: W,
}

impl<W: io::Write> Writer<W> {
	/// Creates a writer and emits the file preamble.
	pub fn new(mut inner: W, header: &Header) -> Result<Self, TwsError> {
		header.to_writer(&mut inner)?;
		Ok(Self { inner })
	}

	/// Writes the level-set name as a set-name record.
	pub fn write_setname(&mut self, name: &str) -> Result<(), TwsError> {
		let bytes = name.as_bytes();
		let bytes = &bytes[..bytes.len().min(MAX_SETNAME - 1)];
		let size = (bytes.len() + 1 + SOLUTION_HEADER_SIZE) as u32;
		self.inner.write_all(&size.to_le_bytes())?;
		self.inner.write_all(&[0u8; SOLUTION_HEADER_SIZE])?;
		self.inner.write_all(bytes)?;
		self.inner.write_all(&[0u8])?;
		Ok(())
	}

	/// Writes one level record. A record with no payload is written in the
	/// password-only form.
	pub fn write_level(&mut self, level: &LevelData) -> Result<(), TwsError> {
		if level.data.is_empty() {
			self.inner
				.write_all(&(PASSWORD_ONLY_SIZE as u32).to_le_bytes())?;
			self.inner.write_all(&level.number.to_le_bytes())?;
			self.inner.write_all(&level.password)?;
		} else {
			self.inner
				.write_all(&(level.data.len() as u32).to_le_bytes())?;
			self.inner.write_all(&level.data)?;
		}
		Ok(())
	}

	/// Writes the end-of-container marker and returns the underlying writer.
	pub fn finish(mut self) -> Result<W, TwsError> {
		self.inner.write_all(&END_MARKER.to_le_bytes())?;
		Ok(self.inner)
	}
}

/// An entire solution file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
	/// The file preamble.
	pub header: Header,
	/// The level-set name, when the file carries a set-name record.
	pub levelset: Option<String>,
	/// The level records, in file order.
	pub levels: Vec<LevelData>,
}

impl File {
	/// Creates an empty solution file for the given ruleset.
	pub fn new(ruleset: Ruleset) -> Self {
		Self {
			header: Header::new(ruleset),
			levelset: None,
			levels: Vec::new(),
		}
	}

	/// Reads a whole solution file from the given reader.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self, TwsError> {
		let mut records = Reader::new(reader);
		let header = records.header()?.clone();
		let mut file = Self {
			header,
			levelset: None,
			levels: Vec::new(),
		};
		while let Some(record) = records.next_record()? {
			match record {
				Record::SetName(name) => {
					if file.levelset.is_none() {
						file.levelset = Some(name);
					}
				}
				Record::Level(level) => file.levels.push(level),
			}
		}
		Ok(file)
	}

	/// Opens and reads a solution file from the given path.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, TwsError> {
		let file = std::fs::File::open(path)?;
		Self::from_reader(io::BufReader::new(file))
	}

	/// Writes the whole solution file, including the end marker, and returns
	/// the underlying writer.
	pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<W, TwsError> {
		let mut records = Writer::new(writer, &self.header)?;
		if let Some(name) = &self.levelset {
			records.write_setname(name)?;
		}
		for level in &self.levels {
			records.write_level(level)?;
		}
		records.finish()
	}

	/// Writes the solution file to the given path.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TwsError> {
		let file = std::fs::File::create(path)?;
		let mut writer = self.to_writer(io::BufWriter::new(file))?;
		writer.flush()?;
		Ok(())
	}
}
