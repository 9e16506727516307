//! Human-readable text codecs.
//!
//! `fen` implements standard Forsyth-Edwards notation for the 8x8 standard
//! chess variant. `plain` and `epd` are registered (so [`super::PosCodec`]
//! can report their name and extension) but never implemented upstream;
//! they report [`crate::error::UnimplementedCodecError`] on every call.

use crate::buffer::PosBuffer;
use crate::data::PosData;
use crate::error::{CodecError, DecodeError, EncodeError, UnimplementedCodecError};
use crate::position::{CASTLE_RIGHTS, CastleRight, Color, Piece, PositionBuild, PositionView};

const PIECE_LETTERS: [(u8, char); 6] = [(1, 'p'), (2, 'n'), (3, 'b'), (4, 'r'), (5, 'q'), (6, 'k')];

fn letter_for(piece_type: u8) -> Option<char> {
	PIECE_LETTERS.iter().find(|&&(pt, _)| pt == piece_type).map(|&(_, c)| c)
}

fn piece_type_for(letter: char) -> Option<u8> {
	PIECE_LETTERS
		.iter()
		.find(|&&(_, c)| c == letter.to_ascii_lowercase())
		.map(|&(pt, _)| pt)
}

fn fullmove_number(game_ply: u32, stm: Color) -> u32 {
	1 + (game_ply.saturating_sub(u32::from(stm == Color::Black))) / 2
}

fn game_ply_from_fullmove(fullmove: u32, stm: Color) -> u32 {
	2 * fullmove.saturating_sub(1) + u32::from(stm == Color::Black)
}

/// Encodes `pd` as a standard FEN record. Only the 8x8 standard chess
/// variant is supported.
pub fn encode<P: PositionView>(pd: &PosData<'_, P>) -> Result<PosBuffer, EncodeError> {
	let pos = &*pd.pos;
	let variant = pos.variant();

	let mut fen = String::new();
	for rank in (0..=variant.max_rank).rev() {
		let mut empty_run = 0u32;
		for file in 0..=variant.max_file {
			let sq = pos.square(file, rank);
			match pos.piece_on(sq) {
				None => empty_run += 1,
				Some(piece) => {
					if empty_run > 0 {
						fen.push_str(&empty_run.to_string());
						empty_run = 0;
					}
					let letter = letter_for(piece.piece_type).ok_or(EncodeError::UnsupportedTrailing(
						"FEN only supports the standard six chess piece types",
					))?;
					fen.push(if piece.color == Color::White {
						letter.to_ascii_uppercase()
					} else {
						letter
					});
				}
			}
		}
		if empty_run > 0 {
			fen.push_str(&empty_run.to_string());
		}
		if rank != 0 {
			fen.push('/');
		}
	}

	fen.push(' ');
	fen.push(if pos.side_to_move() == Color::White { 'w' } else { 'b' });

	fen.push(' ');
	let mut any_castle = false;
	for (right, letter) in CASTLE_RIGHTS.into_iter().zip(['K', 'Q', 'k', 'q']) {
		if pos.can_castle(right) {
			fen.push(letter);
			any_castle = true;
		}
	}
	if !any_castle {
		fen.push('-');
	}

	fen.push(' ');
	match pos.ep_squares().first() {
		None => fen.push('-'),
		Some(&sq) => {
			let file = sq % (variant.max_file as u16 + 1);
			let rank = sq / (variant.max_file as u16 + 1);
			fen.push((b'a' + file as u8) as char);
			fen.push((b'1' + rank as u8) as char);
		}
	}

	fen.push(' ');
	fen.push_str(&pos.rule50_count().to_string());

	fen.push(' ');
	fen.push_str(&fullmove_number(pos.game_ply(), pos.side_to_move()).to_string());

	Ok(PosBuffer::Fen(fen))
}

/// Decodes a FEN record into `pd`.
pub fn decode<P: PositionBuild>(buf: &PosBuffer, pd: &mut PosData<'_, P>) -> Result<(), DecodeError> {
	let PosBuffer::Fen(fen) = buf else {
		return Err(DecodeError::BufferTooShort {
			expected: 1,
			actual: buf.len(),
		});
	};
	let mut fields = fen.split_whitespace();

	let placement = fields.next().ok_or_else(|| DecodeError::InvalidFen("missing piece placement field".into()))?;
	let variant = pd.pos.variant();
	let mut rank = variant.max_rank;
	let mut file = 0u8;
	for ch in placement.chars() {
		match ch {
			'/' => {
				rank = rank.checked_sub(1).ok_or_else(|| DecodeError::InvalidFen("too many ranks in FEN".into()))?;
				file = 0;
			}
			'1'..='8' => {
				file += ch.to_digit(10).expect("matched digit") as u8;
			}
			c => {
				let piece_type = piece_type_for(c).ok_or_else(|| DecodeError::InvalidFen(format!("unknown FEN piece letter {c:?}")))?;
				let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
				let sq = pd.pos.square(file, rank);
				pd.pos.put_piece(Piece { color, piece_type }, sq);
				file += 1;
			}
		}
	}

	let stm_field = fields.next().ok_or_else(|| DecodeError::InvalidFen("missing side to move field".into()))?;
	let stm = match stm_field {
		"w" => Color::White,
		"b" => Color::Black,
		other => return Err(DecodeError::InvalidFen(format!("invalid side to move {other:?}"))),
	};
	pd.pos.set_side_to_move(stm);

	let castle_field = fields.next().ok_or_else(|| DecodeError::InvalidFen("missing castling field".into()))?;
	for (right, letter) in CASTLE_RIGHTS.into_iter().zip(['K', 'Q', 'k', 'q']) {
		if castle_field.contains(letter) {
			pd.pos.set_castle(right);
		}
	}

	let ep_field = fields.next().ok_or_else(|| DecodeError::InvalidFen("missing en passant field".into()))?;
	if ep_field != "-" {
		let mut chars = ep_field.chars();
		let file_ch = chars.next().ok_or_else(|| DecodeError::InvalidFen("empty en passant field".into()))?;
		let rank_ch = chars.next().ok_or_else(|| DecodeError::InvalidFen("truncated en passant field".into()))?;
		let file = (file_ch as u8).wrapping_sub(b'a');
		let rank = (rank_ch as u8).wrapping_sub(b'1');
		pd.pos.set_ep_square(pd.pos.square(file, rank));
	}

	let rule50 = fields
		.next()
		.and_then(|s| s.parse::<u32>().ok())
		.ok_or_else(|| DecodeError::InvalidFen("missing or invalid halfmove clock field".into()))?;
	pd.pos.set_rule50(rule50);

	let fullmove = fields
		.next()
		.and_then(|s| s.parse::<u32>().ok())
		.ok_or_else(|| DecodeError::InvalidFen("missing or invalid fullmove number field".into()))?;
	let game_ply = game_ply_from_fullmove(fullmove, stm);
	pd.pos.set_game_ply(game_ply);
	pd.game_ply = game_ply as u16;

	if !pd.pos.finalize() {
		return Err(DecodeError::PositionInvalid);
	}

	Ok(())
}

/// Always-unimplemented `plain` codec, kept registered for `name()`/`ext()`
/// lookups to match the upstream registry.
pub mod plain {
	use super::*;

	/// Always fails: the upstream `plain` codec was never implemented.
	pub fn encode<P: PositionView>(_pd: &PosData<'_, P>) -> Result<PosBuffer, CodecError> {
		Err(UnimplementedCodecError::NotImplemented("plain").into())
	}

	/// Always fails: the upstream `plain` codec was never implemented.
	pub fn decode<P: PositionBuild>(_buf: &PosBuffer, _pd: &mut PosData<'_, P>) -> Result<(), CodecError> {
		Err(UnimplementedCodecError::NotImplemented("plain").into())
	}
}

/// Always-unimplemented `epd` codec, kept registered for `name()`/`ext()`
/// lookups to match the upstream registry.
pub mod epd {
	use super::*;

	/// Always fails: the upstream `epd` codec was never implemented.
	pub fn encode<P: PositionView>(_pd: &PosData<'_, P>) -> Result<PosBuffer, CodecError> {
		Err(UnimplementedCodecError::NotImplemented("epd").into())
	}

	/// Always fails: the upstream `epd` codec was never implemented.
	pub fn decode<P: PositionBuild>(_buf: &PosBuffer, _pd: &mut PosData<'_, P>) -> Result<(), CodecError> {
		Err(UnimplementedCodecError::NotImplemented("epd").into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::position::testing::TestPosition;

	fn starting_position() -> TestPosition {
		let mut pos = TestPosition::empty_standard();
		for file in 0..8u8 {
			pos.put_piece(
				Piece {
					color: Color::White,
					piece_type: 1,
				},
				pos.square(file, 1),
			);
			pos.put_piece(
				Piece {
					color: Color::Black,
					piece_type: 1,
				},
				pos.square(file, 6),
			);
		}
		let back_rank = [4u8, 2, 3, 5, 6, 3, 2, 4];
		for (file, &pt) in back_rank.iter().enumerate() {
			if pt == 6 {
				continue; // king already placed by empty_standard
			}
			pos.put_piece(
				Piece {
					color: Color::White,
					piece_type: pt,
				},
				pos.square(file as u8, 0),
			);
			pos.put_piece(
				Piece {
					color: Color::Black,
					piece_type: pt,
				},
				pos.square(file as u8, 7),
			);
		}
		pos.set_castle(CastleRight::WhiteKingside);
		pos.set_castle(CastleRight::WhiteQueenside);
		pos.set_castle(CastleRight::BlackKingside);
		pos.set_castle(CastleRight::BlackQueenside);
		pos
	}

	#[test]
	fn encodes_starting_position() {
		let mut pos = starting_position();
		let pd = PosData::new(&mut pos);
		let buf = encode(&pd).unwrap();
		let PosBuffer::Fen(fen) = &buf else { panic!("expected text buffer") };
		assert_eq!(fen, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
	}

	#[test]
	fn round_trips_through_decode() {
		let mut pos = starting_position();
		pos.set_rule50(0);
		pos.set_game_ply(0);
		let pd = PosData::new(&mut pos);
		let buf = encode(&pd).unwrap();

		let mut decoded_pos = TestPosition::empty_standard();
		let mut decoded = PosData::new(&mut decoded_pos);
		decode(&buf, &mut decoded).unwrap();

		assert_eq!(decoded.pos.side_to_move(), Color::White);
		assert!(decoded.pos.can_castle(CastleRight::WhiteKingside));
		assert!(decoded.pos.can_castle(CastleRight::BlackQueenside));
		assert_eq!(
			decoded.pos.piece_on(decoded.pos.square(0, 0)),
			Some(Piece {
				color: Color::White,
				piece_type: 4
			})
		);
	}

	#[test]
	fn plain_and_epd_report_unimplemented() {
		let mut pos = TestPosition::empty_standard();
		let pd = PosData::new(&mut pos);
		assert!(matches!(plain::encode(&pd), Err(CodecError::Unimplemented(_))));
		assert!(matches!(epd::encode(&pd), Err(CodecError::Unimplemented(_))));
	}
}
