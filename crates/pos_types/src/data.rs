//! The record a codec encodes from or decodes into: a position plus the
//! handful of fields (score, best move, result) that ride alongside it but
//! aren't part of the position itself.

/// A decoded or about-to-be-encoded position record.
///
/// `pos` borrows the caller's position mutably so decode can fill it in
/// directly; encode only reads through the borrow.
pub struct PosData<'a, P> {
	/// The position this record describes.
	pub pos: &'a mut P,
	/// Search score in centipawns (or the host engine's own scale).
	pub score: i16,
	/// Best move, in the host engine's own compact move encoding.
	pub mv: u16,
	/// Ply count from the start of the game, as carried in the BIN/BIN2
	/// trailer (independent of, and sometimes inconsistent with,
	/// `pos.game_ply()` computed from the main payload).
	pub game_ply: u16,
	/// Game result from the side to move's perspective (engine-defined
	/// scale, typically -1/0/1).
	pub game_result: i8,
}

impl<'a, P> PosData<'a, P> {
	/// Wraps `pos` with all trailer fields zeroed.
	pub fn new(pos: &'a mut P) -> Self {
		Self {
			pos,
			score: 0,
			mv: 0,
			game_ply: 0,
			game_result: 0,
		}
	}
}
