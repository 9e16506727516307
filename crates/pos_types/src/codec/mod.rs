//! Position record codecs.
//!
//! Every codec converts between a position (through [`crate::position::PositionView`]/
//! [`crate::position::PositionBuild`]) and a [`crate::buffer::PosBuffer`] record. [`PosCodec`]
//! is the dynamic-dispatch entry point used by file-format-agnostic callers
//! (see [`registry::CodecRegistry`]); the `bin`, `bin2`, `jpn`, `text`
//! submodules hold the actual field-level implementations and are also
//! usable directly by callers who already know which codec they want.

pub mod bin;
pub mod bin2;
pub mod huffman;
pub mod jpn;
pub mod registry;
pub mod text;

use crate::buffer::PosBuffer;
use crate::data::PosData;
use crate::error::CodecError;
use crate::position::{PositionBuild, PositionView};

/// Which on-wire format a [`PosCodec`] reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosCodec {
	/// Fixed 72-byte binary record (`bin.rs`).
	Bin,
	/// Variable-length binary record, max 256 bytes (`bin2.rs`).
	Bin2,
	/// Single-line JSON object (`jpn.rs`).
	Jpn,
	/// Standard Forsyth-Edwards notation (`text.rs`).
	Fen,
	/// Registered but never implemented upstream.
	Plain,
	/// Registered but never implemented upstream.
	Epd,
}

impl PosCodec {
	/// Upstream codec name, as reported by `CodecRegistry::get_name`.
	pub fn name(self) -> &'static str {
		match self {
			PosCodec::Bin => "BIN",
			PosCodec::Bin2 => "BIN2",
			PosCodec::Jpn => "JPN",
			PosCodec::Fen => "FEN",
			PosCodec::Plain => "PLAIN",
			PosCodec::Epd => "EPD",
		}
	}

	/// File extension this codec's records are given on disk, including the
	/// leading dot.
	pub fn ext(self) -> &'static str {
		match self {
			PosCodec::Bin => ".bin",
			PosCodec::Bin2 => ".bin2",
			PosCodec::Jpn => ".jpn",
			PosCodec::Fen => ".fen",
			PosCodec::Plain => ".plain",
			PosCodec::Epd => ".epd",
		}
	}

	/// Whether this codec can decode records (all but `plain`/`epd` can).
	pub fn is_decoder(self) -> bool {
		!matches!(self, PosCodec::Plain | PosCodec::Epd)
	}

	/// Whether this codec can encode records (all but `plain`/`epd` can).
	pub fn is_encoder(self) -> bool {
		!matches!(self, PosCodec::Plain | PosCodec::Epd)
	}

	/// Encodes `pd` with this codec.
	pub fn encode<P: PositionView>(self, pd: &PosData<'_, P>) -> Result<PosBuffer, CodecError> {
		match self {
			PosCodec::Bin => Ok(bin::encode(pd)?),
			PosCodec::Bin2 => Ok(bin2::encode(pd)?),
			PosCodec::Jpn => Ok(jpn::encode(pd)?),
			PosCodec::Fen => Ok(text::encode(pd)?),
			PosCodec::Plain => text::plain::encode(pd),
			PosCodec::Epd => text::epd::encode(pd),
		}
	}

	/// Decodes `buf` into `pd` with this codec.
	pub fn decode<P: PositionBuild>(self, buf: &PosBuffer, pd: &mut PosData<'_, P>) -> Result<(), CodecError> {
		match self {
			PosCodec::Bin => Ok(bin::decode(buf, pd)?),
			PosCodec::Bin2 => Ok(bin2::decode(buf, pd)?),
			PosCodec::Jpn => Ok(jpn::decode(buf, pd)?),
			PosCodec::Fen => Ok(text::decode(buf, pd)?),
			PosCodec::Plain => text::plain::decode(buf, pd),
			PosCodec::Epd => text::epd::decode(buf, pd),
		}
	}
}
