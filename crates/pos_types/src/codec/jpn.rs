//! The `jpn` codec: a single-line JSON object, one square per hex-coded
//! piece byte.
//!
//! Each piece byte packs a color bit in its high nibble and the piece type
//! in its low nibble (`0x00` means the square is empty); the board is
//! walked in the same native rank-descending, file-ascending order as BIN.
//! Castling rights and en passant squares are not part of this format.

use std::fmt::Write as _;

use crate::buffer::PosBuffer;
use crate::data::PosData;
use crate::error::{DecodeError, EncodeError};
use crate::position::{Color, Piece, PositionBuild, PositionView};

fn piece_byte(piece: Option<Piece>) -> u8 {
	match piece {
		None => 0,
		Some(p) => ((p.color.as_bit() as u8) << 4) | (p.piece_type & 0x0F),
	}
}

fn byte_to_piece(byte: u8) -> Option<Piece> {
	if byte == 0 {
		return None;
	}
	Some(Piece {
		color: Color::from_bit(u32::from(byte >> 4)),
		piece_type: byte & 0x0F,
	})
}

/// Encodes `pd` into a JPN record.
pub fn encode<P: PositionView>(pd: &PosData<'_, P>) -> Result<PosBuffer, EncodeError> {
	let pos = &*pd.pos;
	let variant = pos.variant();

	let mut out = String::new();
	out.push_str("{\"p\":[");

	let mut first = true;
	for rank in (0..=variant.max_rank).rev() {
		for file in 0..=variant.max_file {
			if !first {
				out.push(',');
			}
			first = false;
			let sq = pos.square(file, rank);
			let byte = piece_byte(pos.piece_on(sq));
			write!(out, "\"{}\"", hex::encode([byte])).expect("writing to a String never fails");
		}
	}
	out.push(']');

	write!(out, ",\"m\":{}", pd.game_ply).expect("writing to a String never fails");

	if pos.rule50_count() != 0 {
		write!(out, ",\"n\":{}", pos.rule50_count()).expect("writing to a String never fails");
	}

	if variant.free_drops {
		out.push_str(",\"d\":[");
		let mut first = true;
		for color in [Color::White, Color::Black] {
			for &pt in &variant.piece_types {
				if !first {
					out.push(',');
				}
				first = false;
				write!(out, "{}", pos.count_in_hand(color, pt)).expect("writing to a String never fails");
			}
		}
		out.push(']');
	}

	write!(
		out,
		",\"sc\":{},\"mv\":\"{}\",\"r\":{}",
		pd.score,
		hex::encode(pd.mv.to_be_bytes()),
		pd.game_result
	)
	.expect("writing to a String never fails");

	out.push('}');

	Ok(PosBuffer::Jpn(out))
}

/// Decodes a JPN record into `pd`.
///
/// The upstream format this codec mirrors never implemented a decode path;
/// this one follows [`encode`]'s field layout exactly.
pub fn decode<P: PositionBuild>(buf: &PosBuffer, pd: &mut PosData<'_, P>) -> Result<(), DecodeError> {
	let PosBuffer::Jpn(text) = buf else {
		return Err(DecodeError::BufferTooShort {
			expected: 2,
			actual: buf.len(),
		});
	};
	let value: serde_json::Value = serde_json::from_str(text)?;
	let obj = value
		.as_object()
		.ok_or_else(|| DecodeError::InvalidFen("JPN record is not a JSON object".into()))?;

	let pieces = obj
		.get("p")
		.and_then(|v| v.as_array())
		.ok_or_else(|| DecodeError::InvalidFen("JPN record missing \"p\" field".into()))?;

	let variant = pd.pos.variant();
	let mut iter = pieces.iter();
	for rank in (0..=variant.max_rank).rev() {
		for file in 0..=variant.max_file {
			let hex_str = iter
				.next()
				.and_then(|v| v.as_str())
				.ok_or_else(|| DecodeError::InvalidFen("JPN record has too few board squares".into()))?;
			let bytes = hex::decode(hex_str).map_err(|e| DecodeError::InvalidFen(e.to_string()))?;
			let byte = *bytes
				.first()
				.ok_or_else(|| DecodeError::InvalidFen("JPN piece byte is empty".into()))?;
			if let Some(piece) = byte_to_piece(byte) {
				let sq = pd.pos.square(file, rank);
				pd.pos.put_piece(piece, sq);
			}
		}
	}

	let ply = obj
		.get("m")
		.and_then(|v| v.as_u64())
		.ok_or_else(|| DecodeError::InvalidFen("JPN record missing \"m\" field".into()))?;
	pd.game_ply = ply as u16;
	pd.pos.set_game_ply(ply as u32);

	let rule50 = obj.get("n").and_then(|v| v.as_u64()).unwrap_or(0);
	pd.pos.set_rule50(rule50 as u32);

	if variant.free_drops {
		let hand = obj
			.get("d")
			.and_then(|v| v.as_array())
			.ok_or_else(|| DecodeError::InvalidFen("JPN record missing \"d\" field for a drop variant".into()))?;
		let mut hand_iter = hand.iter();
		for color in [Color::White, Color::Black] {
			for &pt in &variant.piece_types {
				let count = hand_iter
					.next()
					.and_then(|v| v.as_u64())
					.ok_or_else(|| DecodeError::InvalidFen("JPN record has too few hand counts".into()))?;
				pd.pos.set_in_hand(color, pt, count as u32);
			}
		}
	}

	pd.score = obj
		.get("sc")
		.and_then(|v| v.as_i64())
		.ok_or_else(|| DecodeError::InvalidFen("JPN record missing \"sc\" field".into()))? as i16;

	let mv_hex = obj
		.get("mv")
		.and_then(|v| v.as_str())
		.ok_or_else(|| DecodeError::InvalidFen("JPN record missing \"mv\" field".into()))?;
	let mv_bytes = hex::decode(mv_hex).map_err(|e| DecodeError::InvalidFen(e.to_string()))?;
	if mv_bytes.len() != 2 {
		return Err(DecodeError::InvalidFen("JPN \"mv\" field is not 2 bytes of hex".into()));
	}
	pd.mv = u16::from_be_bytes([mv_bytes[0], mv_bytes[1]]);

	pd.game_result = obj
		.get("r")
		.and_then(|v| v.as_i64())
		.ok_or_else(|| DecodeError::InvalidFen("JPN record missing \"r\" field".into()))? as i8;

	if !pd.pos.finalize() {
		return Err(DecodeError::PositionInvalid);
	}

	Ok(())
}
