//! Benchmark helper utilities for `pos-tools`.
//!
//! Builds synthetic [`TestPosition`]s exercising the BIN/BIN2 codecs' two
//! extremes: a near-empty board (two kings only) and a full starting
//! position (32 pieces, both sides' castling rights, one piece in every
//! square).

use pos_types::position::testing::TestPosition;
use pos_types::position::{CastleRight, Color, Piece, PositionBuild};

/// Two bare kings, nothing else on the board.
pub fn bare_kings() -> TestPosition {
	TestPosition::empty_standard()
}

/// The standard chess starting position: 32 pieces, all four castling
/// rights, rule50 and game_ply at zero.
pub fn starting_position() -> TestPosition {
	let mut pos = TestPosition::empty_standard();

	let back_rank = [4u8, 2, 3, 5, 6, 3, 2, 4]; // rook, knight, bishop, queen, king, bishop, knight, rook
	for (file, &piece_type) in back_rank.iter().enumerate() {
		if piece_type == 6 {
			continue; // kings already placed by empty_standard
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

#[cfg(test)]
mod tests {
	use super::*;
	use pos_types::position::{PositionBuild, PositionView};

	#[test]
	fn starting_position_has_32_pieces() {
		let mut pos = starting_position();
		let count = (0..=pos.max_square()).filter(|&sq| pos.piece_on(sq).is_some()).count();
		assert_eq!(count, 32);
		assert!(pos.finalize());
	}
}
