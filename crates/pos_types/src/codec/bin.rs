//! The `bin` codec: a fixed 72-byte record with the main payload packed
//! from bit `0` and a trailer (score, move, ply, result) fixed at bit `512`.
//!
//! BIN always requires the variant to have a king ([`PositionView::nnue_king`]
//! must return `Some`); the king's square is carried in a dedicated 7-bit
//! field per color, and every other occupied square is Huffman-coded (see
//! [`super::huffman`]).

use crate::bitstream::Bitstream;
use crate::buffer::PosBuffer;
use crate::codec::huffman;
use crate::data::PosData;
use crate::error::{DecodeError, EncodeError};
use crate::position::{CASTLE_RIGHTS, Color, Piece, PositionBuild, PositionView};

/// Bit offset of the trailer within the 72-byte (576-bit) record.
const TRAILER_OFFSET: usize = 512;

/// Encodes `pd` into a fresh BIN record.
pub fn encode<P: PositionView>(pd: &PosData<'_, P>) -> Result<PosBuffer, EncodeError> {
	let pos = &*pd.pos;
	let variant = pos.variant();
	let king_type = pos.nnue_king().ok_or(EncodeError::UnsupportedTrailing(
		"BIN requires the variant to have a king piece type",
	))?;

	let mut buf = PosBuffer::new_bin();
	let PosBuffer::Bin(data) = &mut buf else {
		unreachable!("new_bin always returns Bin")
	};
	let mut stream = Bitstream::new(data.as_mut_slice());

	stream.write_one_bit(pos.side_to_move() == Color::Black);

	// BIN always carries a king (checked above), so the king-square field
	// is never the out-of-board sentinel some variants without a king
	// would need.
	for color in [Color::White, Color::Black] {
		let sq = pos.to_variant_square(pos.king_square(color));
		stream.write_n_bit(sq as u32, 7);
	}

	for rank in (0..=variant.max_rank).rev() {
		for file in 0..=variant.max_file {
			let sq = pos.square(file, rank);
			let piece = pos.piece_on(sq);
			if let Some(p) = piece {
				if p.piece_type == king_type {
					continue;
				}
			}
			let (code, bits) = huffman::code_for(piece.map(|p| p.piece_type), &variant);
			stream.write_n_bit(code, bits);
			if let Some(p) = piece {
				stream.write_one_bit(p.color == Color::Black);
			}
		}
	}

	for color in [Color::White, Color::Black] {
		for &pt in &variant.piece_types {
			stream.write_n_bit(pos.count_in_hand(color, pt), 7);
		}
	}

	for right in CASTLE_RIGHTS {
		stream.write_one_bit(pos.can_castle(right));
	}

	match pos.ep_squares().first() {
		None => stream.write_one_bit(false),
		Some(&sq) => {
			stream.write_one_bit(true);
			stream.write_n_bit(pos.to_variant_square(sq) as u32, 7);
		}
	}
	if pos.ep_squares().len() > 1 {
		log::warn!(
			"BIN codec can only encode one en passant square, dropping {} additional squares",
			pos.ep_squares().len() - 1
		);
	}

	let rule50 = pos.rule50_count();
	stream.write_n_bit(rule50 & 0x3F, 6);

	let fm = 1 + (pos.game_ply() - u32::from(pos.side_to_move() == Color::Black)) / 2;
	stream.write_n_bit(fm & 0xFF, 8);
	stream.write_n_bit((fm >> 8) & 0xFF, 8);
	stream.write_n_bit((rule50 >> 6) & 0x1, 1);

	let resume_at = stream.cursor();
	stream.set_cursor(TRAILER_OFFSET);
	stream.write_n_bit(pd.score as u16 as u32, 16);
	stream.write_n_bit(pd.mv as u32, 16);
	stream.write_n_bit(pd.game_ply as u32, 16);
	stream.write_n_bit(pd.game_result as u8 as u32, 8);
	stream.set_cursor(resume_at);

	Ok(buf)
}

/// Decodes a BIN record into `pd`, calling [`PositionBuild::finalize`] before
/// returning.
pub fn decode<P: PositionBuild>(buf: &PosBuffer, pd: &mut PosData<'_, P>) -> Result<(), DecodeError> {
	let PosBuffer::Bin(data) = buf else {
		return Err(DecodeError::BufferTooShort {
			expected: PosBuffer::BIN_SIZE,
			actual: buf.len(),
		});
	};
	let mut data = **data;
	let variant = pd.pos.variant();
	let king_type = pd.pos.nnue_king().ok_or(DecodeError::NoKingType)?;

	let mut stream = Bitstream::new(&mut data);

	let stm_bit = stream.try_read_one_bit()?;
	let stm = Color::from_bit(stm_bit as u32);
	pd.pos.set_side_to_move(stm);

	for color in [Color::White, Color::Black] {
		let variant_sq = stream.try_read_n_bit(7)?;
		let sq = pd.pos.from_variant_square(variant_sq as u16);
		pd.pos.put_piece(
			Piece {
				color,
				piece_type: king_type,
			},
			sq,
		);
	}

	for rank in (0..=variant.max_rank).rev() {
		for file in 0..=variant.max_file {
			let sq = pd.pos.square(file, rank);
			if pd.pos.piece_on(sq).map(|p| p.piece_type) == Some(king_type) {
				continue;
			}
			let index = huffman::read_index(|| stream.try_read_one_bit())?;
			if index == 0 {
				continue;
			}
			let color_bit = stream.try_read_one_bit()?;
			let piece_type = variant
				.piece_type_at((index - 1) as u8)
				.ok_or(DecodeError::UnknownPieceCode {
					code: index as u32,
					bits: 5,
				})?;
			pd.pos.put_piece(
				Piece {
					color: Color::from_bit(color_bit as u32),
					piece_type,
				},
				sq,
			);
		}
	}

	for color in [Color::White, Color::Black] {
		for &pt in &variant.piece_types {
			let count = stream.try_read_n_bit(7)?;
			pd.pos.set_in_hand(color, pt, count);
		}
	}

	for right in CASTLE_RIGHTS {
		if stream.try_read_one_bit()? {
			pd.pos.set_castle(right);
		}
	}

	if stream.try_read_one_bit()? {
		let variant_sq = stream.try_read_n_bit(7)?;
		let sq = pd.pos.from_variant_square(variant_sq as u16);
		pd.pos.set_ep_square(sq);
	}

	let mut n_move = stream.try_read_n_bit(6)?;
	let mut game_ply = stream.try_read_n_bit(8)?;
	game_ply |= stream.try_read_n_bit(8)? << 8;
	n_move |= stream.try_read_n_bit(1)? << 6;
	let game_ply = 2 * game_ply.saturating_sub(1) + u32::from(stm == Color::Black);

	pd.pos.set_rule50(n_move);
	pd.pos.set_game_ply(game_ply);

	let resume_at = stream.cursor();
	stream.set_cursor(TRAILER_OFFSET);
	pd.score = stream.try_read_n_bit(16)? as i16;
	pd.mv = stream.try_read_n_bit(16)? as u16;
	pd.game_ply = stream.try_read_n_bit(16)? as u16;
	pd.game_result = stream.try_read_n_bit(8)? as i8;
	stream.set_cursor(resume_at);

	if !pd.pos.finalize() {
		return Err(DecodeError::PositionInvalid);
	}

	Ok(())
}
