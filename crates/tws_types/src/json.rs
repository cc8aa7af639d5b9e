//! Conversion between solution files and their JSON document form.
//!
//! The document is handled as an opaque [`serde_json::Value`] tree rather
//! than a fixed schema, so unknown fields can be warned about and skipped
//! field by field. Per-level problems are logged and the level skipped;
//! only document-level problems abort a conversion.
//!
//! The document root is an object of class `"tws"` with `ruleset`,
//! optional `currentlevel` and `levelset`, a `generator` tag, and a
//! `solutions` array of objects of class `"solution"`.

use log::{error, warn};
use serde_json::{Map, Value};

use crate::error::DocumentError;
use crate::file::tws::{File, LevelData, Ruleset, contract, expand};
use crate::moves::{Direction, Solution, TIME_NIL};
use crate::notation;

/// Class tag of the document root.
const CLASS_TWS: &str = "tws";

/// Class tag of each solution entry.
const CLASS_SOLUTION: &str = "solution";

/// Generator tag written into produced documents.
const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Convert a solution file into its JSON document form.
///
/// Levels whose move data cannot be expanded or rendered are logged and
/// skipped; the conversion continues with the remaining levels.
pub fn file_to_document(file: &File) -> Value {
	let mut root = Map::new();
	root.insert("class".into(), Value::from(CLASS_TWS));
	root.insert("ruleset".into(), Value::from(file.header.ruleset.name()));
	if file.header.flags != 0 {
		root.insert("currentlevel".into(), Value::from(file.header.flags));
	}
	if let Some(levelset) = &file.levelset {
		root.insert("levelset".into(), Value::from(levelset.as_str()));
	}
	root.insert("generator".into(), Value::from(GENERATOR));

	let mut solutions = Vec::new();
	for level in &file.levels {
		if level.number == 0 {
			continue;
		}
		match level_to_document(level) {
			Ok(value) => solutions.push(value),
			Err(err) => error!("{err}"),
		}
	}
	root.insert("solutions".into(), Value::Array(solutions));
	Value::Object(root)
}

fn level_to_document(level: &LevelData) -> Result<Value, DocumentError> {
	let mut entry = Map::new();
	entry.insert("class".into(), Value::from(CLASS_SOLUTION));
	entry.insert("number".into(), Value::from(level.number));
	entry.insert("password".into(), Value::from(level.password_text()));
	if !level.has_solution() {
		return Ok(Value::Object(entry));
	}

	let solution = expand(level)?;
	let time = if level.besttime == TIME_NIL {
		0
	} else {
		level.besttime.max(0) as u32
	};
	let moves = notation::compress(&solution.moves, time)?;
	entry.insert(
		"rndslidedir".into(),
		Value::from(solution.rndslidedir.mask().unwrap_or(0)),
	);
	entry.insert("stepping".into(), Value::from(solution.stepping));
	entry.insert("rndseed".into(), Value::from(solution.rndseed));
	entry.insert("moves".into(), Value::from(moves));
	Ok(Value::Object(entry))
}

/// Convert a JSON document into an in-memory solution file.
///
/// Solutions that cannot be converted are logged and skipped; a document
/// without a usable root object, class, ruleset, or solutions array is an
/// error.
pub fn document_to_file(document: &Value) -> Result<File, DocumentError> {
	let root = document.as_object().ok_or(DocumentError::NotAnObject)?;
	if root.get("class").and_then(Value::as_str) != Some(CLASS_TWS) {
		return Err(DocumentError::WrongClass {
			expected: CLASS_TWS,
		});
	}
	let ruleset = ruleset_value(root.get("ruleset")).ok_or(DocumentError::BadRuleset)?;

	let mut file = File::new(ruleset);
	match root.get("currentlevel") {
		None => {}
		Some(value) => match value.as_u64() {
			Some(level) if level <= u64::from(u16::MAX) => file.header.flags = level as u16,
			_ => warn!("expected \"currentlevel\" to be a small integer"),
		},
	}
	if let Some(name) = root.get("levelset").and_then(Value::as_str) {
		file.levelset = Some(name.to_owned());
	}

	let solutions = root
		.get("solutions")
		.and_then(Value::as_array)
		.ok_or(DocumentError::MissingSolutions)?;
	for (position, entry) in solutions.iter().enumerate() {
		match solution_to_level(entry) {
			Ok(Some(level)) => file.levels.push(level),
			Ok(None) => warn!("skipping solution {position}"),
			Err(err) => error!("solution {position}: {err}"),
		}
	}
	Ok(file)
}

fn ruleset_value(value: Option<&Value>) -> Option<Ruleset> {
	match value? {
		Value::Number(number) => {
			let byte = u8::try_from(number.as_u64()?).ok()?;
			Ruleset::from_u8(byte).ok()
		}
		Value::String(name) => {
			let ruleset = Ruleset::from_name(name);
			if ruleset.is_none() {
				warn!("unknown ruleset \"{name}\"");
			}
			ruleset
		}
		_ => None,
	}
}

/// Converts one solution object into a level record. Returns `Ok(None)` for
/// entries that should be skipped with a warning.
fn solution_to_level(entry: &Value) -> Result<Option<LevelData>, DocumentError> {
	let Some(object) = entry.as_object() else {
		warn!("solution is not an object");
		return Ok(None);
	};

	let mut number: u16 = 0;
	let mut password: Option<[u8; 4]> = None;
	let mut moves: Option<&str> = None;
	let mut solution = Solution::new();

	for (key, value) in object {
		match key.as_str() {
			"class" => {
				if value.as_str() != Some(CLASS_SOLUTION) {
					warn!("expected solution entry to have class \"solution\"");
					return Ok(None);
				}
			}
			"number" => match value.as_u64() {
				Some(n) if n <= u64::from(u16::MAX) => number = n as u16,
				_ => warn!("expected \"number\" to be a number"),
			},
			"password" => match value.as_str() {
				Some(text) => {
					if text.len() != 4 {
						warn!("password is not 4 characters");
					}
					let mut buffer = [0u8; 4];
					for (slot, byte) in buffer.iter_mut().zip(text.bytes()) {
						*slot = byte;
					}
					password = Some(buffer);
				}
				None => warn!("expected \"password\" to be a string"),
			},
			"rndslidedir" => {
				let dir = value
					.as_u64()
					.and_then(|n| u8::try_from(n).ok())
					.and_then(Direction::from_mask);
				match dir {
					Some(dir) if dir.is_directional() => solution.rndslidedir = dir,
					_ => warn!("expected \"rndslidedir\" to be a direction"),
				}
			}
			"stepping" => match value.as_u64() {
				Some(n) if n <= 7 => solution.stepping = n as u8,
				_ => warn!("expected \"stepping\" to be an integer in 0..=7"),
			},
			"rndseed" => match value.as_u64() {
				Some(n) if n <= u64::from(u32::MAX) => solution.rndseed = n as u32,
				_ => warn!("expected \"rndseed\" to be an integer"),
			},
			"moves" => match value.as_str() {
				Some(text) => moves = Some(text),
				None => warn!("expected \"moves\" to be a string"),
			},
			_ => warn!("ignoring unknown field \"{key}\""),
		}
	}

	if let Some(text) = moves {
		let parsed = notation::parse(text)?;
		if parsed.moves.is_empty() && password.is_none() {
			return Ok(None);
		}
		solution.moves = parsed.moves;
		let level = contract(
			&solution,
			number,
			password.unwrap_or_default(),
			parsed.time as i32,
		)?;
		Ok(Some(level))
	} else if let Some(password) = password {
		Ok(Some(LevelData::password_only(number, password)))
	} else {
		Ok(None)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::moves::Action;

	#[test_log::test]
	fn test_document_to_file_basic() {
		let document = json!({
			"class": "tws",
			"ruleset": "ms",
			"currentlevel": 3,
			"levelset": "CHIPS",
			"solutions": [
				{
					"class": "solution",
					"number": 1,
					"password": "BDHP",
					"rndseed": 672,
					"moves": "4U"
				},
				{"class": "solution", "number": 2, "password": "JXMJ"}
			]
		});
		let file = document_to_file(&document).unwrap();
		assert_eq!(file.header.ruleset, Ruleset::Ms);
		assert_eq!(file.header.flags, 3);
		assert_eq!(file.levelset.as_deref(), Some("CHIPS"));
		assert_eq!(file.levels.len(), 2);

		let first = &file.levels[0];
		assert_eq!(first.number, 1);
		assert_eq!(first.besttime, 15);
		let solution = expand(first).unwrap();
		assert_eq!(solution.rndseed, 672);
		assert_eq!(solution.moves.len(), 4);
		assert_eq!(
			solution.moves.as_slice()[3],
			Action::new(12, Direction::North)
		);

		assert!(file.levels[1].is_password_only());
	}

	#[test_log::test]
	fn test_ruleset_forms() {
		for (value, expected) in [
			(json!("lynx"), Ruleset::Lynx),
			(json!("ms"), Ruleset::Ms),
			(json!(1), Ruleset::Lynx),
			(json!(2), Ruleset::Ms),
		] {
			assert_eq!(ruleset_value(Some(&value)), Some(expected));
		}
		assert_eq!(ruleset_value(Some(&json!("msx"))), None);
		assert_eq!(ruleset_value(Some(&json!(3))), None);
		assert_eq!(ruleset_value(None), None);
	}

	#[test]
	fn test_document_errors() {
		assert!(matches!(
			document_to_file(&json!([])),
			Err(DocumentError::NotAnObject)
		));
		assert!(matches!(
			document_to_file(&json!({"class": "dat"})),
			Err(DocumentError::WrongClass { .. })
		));
		assert!(matches!(
			document_to_file(&json!({"class": "tws"})),
			Err(DocumentError::BadRuleset)
		));
		assert!(matches!(
			document_to_file(&json!({"class": "tws", "ruleset": "ms"})),
			Err(DocumentError::MissingSolutions)
		));
	}

	#[test_log::test]
	fn test_bad_solutions_are_skipped() {
		let document = json!({
			"class": "tws",
			"ruleset": 1,
			"solutions": [
				{"class": "solution", "number": 1, "password": "AAAA", "moves": "4x"},
				{"class": "solution", "number": 2},
				{"class": "solution", "number": 3, "password": "CCCC", "moves": "ul"},
				{"class": "wrong"},
				42
			]
		});
		let file = document_to_file(&document).unwrap();
		// only the parseable level with a password survives
		assert_eq!(file.levels.len(), 1);
		assert_eq!(file.levels[0].number, 3);
	}

	#[test_log::test]
	fn test_file_to_document_roundtrip() {
		let document = json!({
			"class": "tws",
			"ruleset": "lynx",
			"levelset": "intro",
			"solutions": [
				{
					"class": "solution",
					"number": 1,
					"password": "BDHP",
					"rndslidedir": 4,
					"stepping": 2,
					"rndseed": 12345,
					"moves": "UL2D,r"
				}
			]
		});
		let file = document_to_file(&document).unwrap();
		let output = file_to_document(&file);

		assert_eq!(output["class"], "tws");
		assert_eq!(output["ruleset"], "lynx");
		assert_eq!(output["levelset"], "intro");
		let entry = &output["solutions"][0];
		assert_eq!(entry["class"], "solution");
		assert_eq!(entry["number"], 1);
		assert_eq!(entry["password"], "BDHP");
		assert_eq!(entry["rndslidedir"], 4);
		assert_eq!(entry["stepping"], 2);
		assert_eq!(entry["rndseed"], 12345);
		assert_eq!(entry["moves"], "UL2D,r");
	}

	#[test_log::test]
	fn test_unknown_fields_are_ignored() {
		let document = json!({
			"class": "tws",
			"ruleset": "ms",
			"generator": "somebody else",
			"solutions": [
				{"class": "solution", "number": 5, "password": "WXYZ", "favorite": true}
			]
		});
		let file = document_to_file(&document).unwrap();
		assert_eq!(file.levels.len(), 1);
		assert_eq!(file.levels[0].number, 5);
	}
}
