//! End-to-end conversion tests driving the public API the way the
//! command-line tools do.

use serde_json::{Value, json};
use tws_rs::json::{document_to_file, file_to_document};
use tws_rs::prelude::*;

/// Bytes of an empty container: the preamble and the end marker.
fn empty_container(ruleset: u8) -> Vec<u8> {
	let mut bytes = vec![0x35, 0x33, 0x9B, 0x99, ruleset, 0, 0, 0];
	bytes.extend_from_slice(&[0xFF; 4]);
	bytes
}

#[test]
fn test_empty_container_to_document() {
	let file = TwsFile::from_reader(&empty_container(1)[..]).unwrap();
	let document = file_to_document(&file);
	assert_eq!(document["class"], "tws");
	assert_eq!(document["ruleset"], "lynx");
	assert_eq!(document["solutions"], json!([]));
}

#[test]
fn test_password_only_container_to_document() {
	let mut bytes = vec![0x35, 0x33, 0x9B, 0x99, 2, 0, 0, 0];
	bytes.extend_from_slice(&6u32.to_le_bytes());
	bytes.extend_from_slice(&3u16.to_le_bytes());
	bytes.extend_from_slice(b"ABCD");
	bytes.extend_from_slice(&[0xFF; 4]);

	let file = TwsFile::from_reader(&bytes[..]).unwrap();
	let document = file_to_document(&file);
	assert_eq!(document["ruleset"], "ms");
	let entry = &document["solutions"][0];
	assert_eq!(entry["class"], "solution");
	assert_eq!(entry["number"], 3);
	assert_eq!(entry["password"], "ABCD");
	assert!(entry.get("moves").is_none());
}

#[test]
fn test_document_to_container_and_back() {
	let document = json!({
		"class": "tws",
		"ruleset": "lynx",
		"currentlevel": 2,
		"levelset": "CCLP1",
		"solutions": [
			{
				"class": "solution",
				"number": 1,
				"password": "BDHP",
				"rndslidedir": 1,
				"stepping": 0,
				"rndseed": 105218718,
				"moves": "3U2R,D,u+l*2D;R"
			},
			{"class": "solution", "number": 2, "password": "JXMJ"}
		]
	});

	// Document to container bytes.
	let file = document_to_file(&document).unwrap();
	let bytes = file.to_writer(Vec::new()).unwrap();

	// Container bytes back to a document.
	let reloaded = TwsFile::from_reader(&bytes[..]).unwrap();
	assert_eq!(reloaded.header.flags, 2);
	assert_eq!(reloaded.levelset.as_deref(), Some("CCLP1"));
	let output = file_to_document(&reloaded);

	assert_eq!(output["class"], "tws");
	assert_eq!(output["ruleset"], "lynx");
	assert_eq!(output["currentlevel"], 2);
	assert_eq!(output["levelset"], "CCLP1");

	let entry = &output["solutions"][0];
	assert_eq!(entry["number"], 1);
	assert_eq!(entry["password"], "BDHP");
	assert_eq!(entry["rndslidedir"], 1);
	assert_eq!(entry["stepping"], 0);
	assert_eq!(entry["rndseed"], 105218718);
	assert_eq!(entry["moves"], "3U2R,D,u+l*2D;R");

	let entry = &output["solutions"][1];
	assert_eq!(entry["number"], 2);
	assert_eq!(entry["password"], "JXMJ");
	assert!(entry.get("moves").is_none());
}

#[test]
fn test_container_roundtrip_preserves_bytes() {
	// A container assembled through the writer survives read + rewrite
	// byte for byte.
	let parsed = parse("4U.2d+r*3L").unwrap();
	let mut solution = Solution::new();
	solution.rndseed = 0xCAFE;
	solution.moves = parsed.moves;
	let level = contract(&solution, 7, *b"PQRS", parsed.time as i32).unwrap();

	let mut file = TwsFile::new(Ruleset::Ms);
	file.levelset = Some("roundtrip".to_owned());
	file.levels.push(level);
	file.levels.push(LevelData::password_only(8, *b"TUVW"));

	let bytes = file.to_writer(Vec::new()).unwrap();
	let reloaded = TwsFile::from_reader(&bytes[..]).unwrap();
	let bytes_again = reloaded.to_writer(Vec::new()).unwrap();
	assert_eq!(bytes, bytes_again);
}

#[test]
fn test_document_pipeline_is_stable() {
	// Once through the pipeline, a document reproduces itself exactly.
	let document = json!({
		"class": "tws",
		"ruleset": "ms",
		"solutions": [
			{
				"class": "solution",
				"number": 34,
				"password": "FAKE",
				"rndslidedir": 1,
				"stepping": 0,
				"rndseed": 1,
				"moves": "UL2D,r*.4U"
			}
		]
	});
	let once = file_to_document(&document_to_file(&document).unwrap());
	let twice = file_to_document(&document_to_file(&once).unwrap());
	assert_eq!(once, twice);

	let moves_in: &Value = &document["solutions"][0]["moves"];
	let moves_out: &Value = &once["solutions"][0]["moves"];
	assert_eq!(moves_in, moves_out);
}
