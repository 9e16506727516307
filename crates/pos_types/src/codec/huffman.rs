//! The 17-entry Huffman table the BIN codec uses for board squares.
//!
//! Entry `0` is the 1-bit code for an empty square. Entries `1..=16` are the
//! 5-bit odd-pattern codes `0b00001` through `0b11111`, indexed by
//! `variant.compact_index(piece_type) + 1`. King squares are never run
//! through this table: the BIN codec writes them as fixed 7-bit square
//! fields up front and skips them in the board-square loop.

use crate::error::DecodeError;
use crate::position::{PieceType, Variant};

/// `(code, bit_width)` for each of the 17 table entries.
pub const TABLE: [(u32, u32); 17] = [
	(0b00000, 1),
	(0b00001, 5),
	(0b00011, 5),
	(0b00101, 5),
	(0b00111, 5),
	(0b01001, 5),
	(0b01011, 5),
	(0b01101, 5),
	(0b01111, 5),
	(0b10001, 5),
	(0b10011, 5),
	(0b10101, 5),
	(0b10111, 5),
	(0b11001, 5),
	(0b11011, 5),
	(0b11101, 5),
	(0b11111, 5),
];

/// Looks up the `(code, bit_width)` pair for an empty square or for
/// `piece_type` within `variant`.
pub fn code_for(piece_type: Option<PieceType>, variant: &Variant) -> (u32, u32) {
	let index = match piece_type {
		None => 0,
		Some(pt) => variant.compact_index(pt).expect("piece type belongs to its own variant") as usize + 1,
	};
	TABLE[index]
}

/// Reads one Huffman-coded board square bit by bit, returning the table
/// index (`0` for empty, `1..=16` for a compact piece-type index plus one).
///
/// Bits accumulate least-significant-bit first, the same order
/// [`crate::bitstream::Bitstream::write_n_bit`] writes a multi-bit value in,
/// so a table code can be compared directly against the accumulator.
pub fn read_index<F>(mut read_bit: F) -> Result<usize, DecodeError>
where
	F: FnMut() -> Result<bool, crate::error::BitstreamError>,
{
	let mut code = 0u32;
	for bits in 1..=5u32 {
		code |= (read_bit()? as u32) << (bits - 1);
		if let Some(index) = TABLE.iter().position(|&(c, b)| b == bits && c == code) {
			return Ok(index);
		}
	}
	Err(DecodeError::HuffmanTableMiss)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn table_codes_are_prefix_free() {
		// Bits accumulate LSB-first (see `read_index`), so entry i's code is
		// a prefix of entry j's only if entry j's *low* bits_i bits match it.
		for (i, &(code_i, bits_i)) in TABLE.iter().enumerate() {
			for (j, &(code_j, bits_j)) in TABLE.iter().enumerate() {
				if i == j {
					continue;
				}
				if bits_i <= bits_j {
					let low_bits = code_j & ((1 << bits_i) - 1);
					assert_ne!(
						low_bits, code_i,
						"entry {i} ({code_i:#b}/{bits_i}) is a prefix of entry {j} ({code_j:#b}/{bits_j})"
					);
				}
			}
		}
	}

	#[test]
	fn round_trips_through_write_n_bit() {
		use crate::bitstream::Bitstream;

		let variant = Variant::standard_chess();
		for pt in std::iter::once(None).chain(variant.piece_types.iter().copied().map(Some)) {
			let (code, bits) = code_for(pt, &variant);
			let mut buf = [0u8; 1];
			{
				let mut w = Bitstream::new(&mut buf);
				w.write_n_bit(code, bits);
			}
			let mut r = Bitstream::new(&mut buf);
			let index = read_index(|| r.try_read_one_bit()).unwrap();
			let expected_index = pt.map_or(0, |pt| variant.compact_index(pt).unwrap() as usize + 1);
			assert_eq!(index, expected_index);
		}
	}

	#[test]
	fn empty_square_is_index_zero() {
		let variant = Variant::standard_chess();
		assert_eq!(code_for(None, &variant), TABLE[0]);
	}

	#[test]
	fn piece_indices_follow_compact_order() {
		let variant = Variant::standard_chess();
		for (i, &pt) in variant.piece_types.iter().enumerate() {
			assert_eq!(code_for(Some(pt), &variant), TABLE[i + 1]);
		}
	}
}
