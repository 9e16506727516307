//! The `bin2` codec: a variable-length record (occupancy bitmap + packed
//! piece codes) whose size is carried by the file framing rather than a
//! fixed record width.
//!
//! Layout, in write order: ply count (16 bits), one occupancy bit per
//! square, one [`PieceCode`] per occupied square, hand counts (only for
//! drop variants), the halfmove clock (8 bits), four castling bits, the en
//! passant flag/square, then the trailer (score, move, result) appended at
//! the end of the stream.

use crate::bitstream::Bitstream;
use crate::buffer::PosBuffer;
use crate::data::PosData;
use crate::error::{DecodeError, EncodeError};
use crate::piece_code::PieceCode;
use crate::position::{CASTLE_RIGHTS, Color, Piece, PositionBuild, PositionView};

/// Encodes `pd` into a fresh BIN2 record, sized to exactly as many bytes as
/// this position needs.
pub fn encode<P: PositionView>(pd: &PosData<'_, P>) -> Result<PosBuffer, EncodeError> {
	let pos = &*pd.pos;
	let variant = pos.variant();
	let king_type = pos.nnue_king().ok_or(EncodeError::UnsupportedTrailing(
		"BIN2 requires the variant to have a king piece type",
	))?;
	let bits = PieceCode::calc_code_size(variant.piece_type_count());

	let mut buf = PosBuffer::new_bin2(PosBuffer::BIN2_MAX_SIZE);
	let PosBuffer::Bin2(scratch) = &mut buf else {
		unreachable!("new_bin2 always returns Bin2")
	};
	let mut stream = Bitstream::new(scratch.as_mut_slice());

	stream.write_n_bit(pos.game_ply(), 16);

	let max_sq = pos.to_variant_square(pos.max_square());
	for i in 0..=max_sq {
		let sq = pos.from_variant_square(i);
		stream.write_one_bit(pos.piece_on(sq).is_some());
	}

	for i in 0..=max_sq {
		let sq = pos.from_variant_square(i);
		if let Some(piece) = pos.piece_on(sq) {
			let code = PieceCode::from_piece(piece, king_type, bits);
			stream.write_n_bit(code.code(), code.bits());
		}
	}

	if variant.free_drops {
		for color in [Color::White, Color::Black] {
			for &pt in &variant.piece_types {
				stream.write_n_bit(pos.count_in_hand(color, pt), 7);
			}
		}
	}

	stream.write_n_bit(pos.rule50_count(), 8);

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

	stream.write_n_bit(pd.score as u16 as u32, 16);
	stream.write_n_bit(pd.mv as u32, 16);
	stream.write_n_bit(pd.game_result as u8 as u32, 8);

	let size = stream.size_bytes();
	let PosBuffer::Bin2(scratch) = &mut buf else {
		unreachable!("new_bin2 always returns Bin2")
	};
	scratch.truncate(size);
	Ok(buf)
}

/// Decodes a BIN2 record into `pd`.
pub fn decode<P: PositionBuild>(buf: &PosBuffer, pd: &mut PosData<'_, P>) -> Result<(), DecodeError> {
	let PosBuffer::Bin2(data) = buf else {
		return Err(DecodeError::BufferTooShort {
			expected: 0,
			actual: buf.len(),
		});
	};
	let variant = pd.pos.variant();
	let king_type = pd.pos.nnue_king().ok_or(DecodeError::NoKingType)?;
	let bits = PieceCode::calc_code_size(variant.piece_type_count());

	let mut data = data.clone();
	let mut stream = Bitstream::new(&mut data);

	let ply_count = stream.try_read_n_bit(16)?;
	pd.game_ply = ply_count as u16;
	pd.pos.set_game_ply(ply_count);

	let max_sq = pd.pos.to_variant_square(pd.pos.max_square());
	let mut occupied = vec![false; max_sq as usize + 1];
	for occ in occupied.iter_mut() {
		*occ = stream.try_read_one_bit()?;
	}

	for (i, &occ) in occupied.iter().enumerate() {
		if !occ {
			continue;
		}
		let code = stream.try_read_n_bit(bits)?;
		let piece_code = PieceCode::from_code(code, bits);
		let piece: Piece = piece_code.to_piece(king_type);
		let sq = pd.pos.from_variant_square(i as u16);
		pd.pos.put_piece(piece, sq);
	}

	if variant.free_drops {
		for color in [Color::White, Color::Black] {
			for &pt in &variant.piece_types {
				let count = stream.try_read_n_bit(7)?;
				pd.pos.set_in_hand(color, pt, count);
			}
		}
	}

	let rule50 = stream.try_read_n_bit(8)?;
	pd.pos.set_rule50(rule50);

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

	pd.score = stream.try_read_n_bit(16)? as i16;
	pd.mv = stream.try_read_n_bit(16)? as u16;
	pd.game_result = stream.try_read_n_bit(8)? as i8;

	if !pd.pos.finalize() {
		return Err(DecodeError::PositionInvalid);
	}

	Ok(())
}
