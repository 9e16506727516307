//! End-to-end scenarios exercising the full BIN/BIN2/JPN stack through the
//! public `pos-tools` API, rather than a single codec or stream in
//! isolation.

use pos_stream::bin_stream::{BinPosInputStream, BinPosOutputStream};
use pos_stream::driver::{convert, ConvertOptions};
use pos_stream::stream::{PosInputStream, PosOutputStream};
use pos_types::codec::jpn;
use pos_types::data::PosData;
use pos_types::position::testing::TestPosition;
use pos_types::position::{CastleRight, Color, Piece, PositionBuild};
use pos_types::{codec::bin, PosBuffer};

fn starting_position() -> TestPosition {
	let mut pos = TestPosition::empty_standard();
	let back_rank = [4u8, 2, 3, 5, 6, 3, 2, 4];
	for (file, &piece_type) in back_rank.iter().enumerate() {
		if piece_type == 6 {
			continue;
		}
		pos.put_piece(
			Piece {
				color: Color::White,
				piece_type,
			},
			file as u16,
		);
		pos.put_piece(
			Piece {
				color: Color::Black,
				piece_type,
			},
			56 + file as u16,
		);
	}
	for file in 0..8u16 {
		pos.put_piece(
			Piece {
				color: Color::White,
				piece_type: 1,
			},
			8 + file,
		);
		pos.put_piece(
			Piece {
				color: Color::Black,
				piece_type: 1,
			},
			48 + file,
		);
	}
	for right in [
		CastleRight::WhiteKingside,
		CastleRight::WhiteQueenside,
		CastleRight::BlackKingside,
		CastleRight::BlackQueenside,
	] {
		pos.set_castle(right);
	}
	pos
}

/// S1: a standard start position encoded to BIN, decoded, and re-encoded
/// must yield bytewise-identical records.
#[test]
fn s1_bin_round_trip_is_bytewise_stable() {
	let mut pos = starting_position();
	let first = bin::encode(&PosData::new(&mut pos)).unwrap();

	let mut decoded_pos = TestPosition::empty_standard();
	let mut decoded = PosData::new(&mut decoded_pos);
	bin::decode(&first, &mut decoded).unwrap();

	let second = bin::encode(&decoded).unwrap();
	assert_eq!(first, second);
}

/// S6: JPN output for a full start position has exactly 64 hex piece
/// strings, `"m":0`, no `"n"` field, and zeroed score/move/result.
#[test]
fn s6_jpn_start_position_shape() {
	let mut pos = starting_position();
	let buf = jpn::encode(&PosData::new(&mut pos)).unwrap();
	let PosBuffer::Jpn(text) = &buf else { panic!("expected Jpn buffer") };

	let value: serde_json::Value = serde_json::from_str(text).unwrap();
	let pieces = value["p"].as_array().unwrap();
	assert_eq!(pieces.len(), 64);

	assert!(text.contains("\"m\":0"));
	assert!(!text.contains("\"n\":"));
	assert!(text.contains("\"sc\":0"));
	assert!(text.contains("\"mv\":\"0000\""));
	assert!(text.contains("\"r\":0"));
}

/// Writes a 10-record BIN file (`data[0] == i` for `i in 0..10`) under a
/// fresh scratch directory and returns `(dir, input_path)`.
fn write_ten_records(label: &str) -> (std::path::PathBuf, std::path::PathBuf) {
	let dir = std::env::temp_dir().join(format!("pos_stream_scenarios_{label}_{}", std::process::id()));
	std::fs::create_dir_all(&dir).unwrap();
	let input_path = dir.join("in.bin");

	let file = std::fs::File::create(&input_path).unwrap();
	let mut stream = BinPosOutputStream::new(file);
	for i in 0..10u8 {
		let mut buf = PosBuffer::new_bin();
		let PosBuffer::Bin(data) = &mut buf else {
			unreachable!()
		};
		data[0] = i;
		stream.write(&buf).unwrap();
	}

	(dir, input_path)
}

/// Property 7 / S5: `--skip 3 --count 2` over a 10-record BIN file produces
/// exactly records 3 and 4, and reports skipped=3, processed=2.
#[test]
fn property7_skip_and_count_windowing() {
	let (dir, input_path) = write_ten_records("windowing");
	let output_path = dir.join("out.bin");

	let options = ConvertOptions {
		input_path: input_path.to_str().unwrap().to_string(),
		output_path: output_path.to_str().unwrap().to_string(),
		skip: 3,
		count: Some(2),
		rescore: false,
		depth: 0,
		nodes: 0,
	};
	let report = convert::<TestPosition>(options, None, TestPosition::empty_standard).unwrap();
	assert_eq!(report.skipped, 3);
	assert_eq!(report.processed, 2);

	let file = std::fs::File::open(&output_path).unwrap();
	let mut stream = BinPosInputStream::new(file);
	let first = stream.read().unwrap().unwrap();
	assert_eq!(first.as_bytes()[0], 3);
	let second = stream.read().unwrap().unwrap();
	assert_eq!(second.as_bytes()[0], 4);
	assert!(stream.read().unwrap().is_none());

	std::fs::remove_dir_all(&dir).unwrap();
}

/// `--count 0` normalizes to "exactly one record", matching the `extract`
/// front end's own convention rather than processing nothing.
#[test]
fn count_zero_normalizes_to_one_record() {
	let (dir, input_path) = write_ten_records("count_zero");
	let output_path = dir.join("out.bin");

	let options = ConvertOptions {
		input_path: input_path.to_str().unwrap().to_string(),
		output_path: output_path.to_str().unwrap().to_string(),
		skip: 0,
		count: Some(0),
		rescore: false,
		depth: 0,
		nodes: 0,
	};
	let report = convert::<TestPosition>(options, None, TestPosition::empty_standard).unwrap();
	assert_eq!(report.skipped, 0);
	assert_eq!(report.processed, 1);

	let file = std::fs::File::open(&output_path).unwrap();
	let mut stream = BinPosInputStream::new(file);
	let first = stream.read().unwrap().unwrap();
	assert_eq!(first.as_bytes()[0], 0);
	assert!(stream.read().unwrap().is_none());

	std::fs::remove_dir_all(&dir).unwrap();
}
