//! Error types for position codecs and bit-level record parsing.

use thiserror::Error;

/// Errors raised by [`crate::bitstream::Bitstream`] while reading bits from a
/// fixed-size buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BitstreamError {
	/// A read reached past the end of the backing buffer.
	#[error("bit cursor {cursor} read past buffer capacity of {capacity_bits} bits")]
	Overflow {
		/// Bit cursor position at the time of the failed read.
		cursor: usize,
		/// Total capacity of the backing buffer, in bits.
		capacity_bits: usize,
	},
}

/// Errors raised while encoding a position into a [`crate::buffer::PosBuffer`].
#[derive(Debug, Error)]
pub enum EncodeError {
	/// The variant exposes more piece types than the target codec's fixed
	/// field widths can represent.
	#[error("piece type count {count} exceeds what this codec's encoding can represent")]
	TooManyPieceTypes {
		/// Number of distinct piece types the variant reports.
		count: usize,
	},

	/// A square, hand count, or other field value didn't fit in its
	/// allotted bit width.
	#[error("value {value} does not fit in {bits} bits")]
	ValueOutOfRange {
		/// The value that was rejected.
		value: u32,
		/// The bit width it was supposed to fit in.
		bits: u32,
	},

	/// The variant reports an en passant square but the codec has no field
	/// for it (should not happen for the codecs in this crate, kept as a
	/// defensive case for future codecs).
	#[error("unsupported trailing state: {0}")]
	UnsupportedTrailing(&'static str),

	/// Serializing the JSON envelope failed.
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// Writing the encoded record failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Errors raised while decoding a [`crate::buffer::PosBuffer`] back into a
/// position.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// The buffer was shorter than the codec's fixed record size.
	#[error("buffer too short: expected at least {expected} bytes, got {actual}")]
	BufferTooShort {
		/// Minimum size the codec requires.
		expected: usize,
		/// Size of the buffer that was actually supplied.
		actual: usize,
	},

	/// A bit read ran past the end of the buffer.
	#[error(transparent)]
	Bitstream(#[from] BitstreamError),

	/// The occupied-square code didn't resolve to any piece type known to
	/// the variant.
	#[error("piece code {code} (bits={bits}) does not match any piece type in this variant")]
	UnknownPieceCode {
		/// Raw decoded type index.
		code: u32,
		/// Bit width the code was decoded with.
		bits: u32,
	},

	/// A Huffman-coded board square ran out of table entries before a
	/// prefix matched.
	#[error("huffman code did not match any table entry")]
	HuffmanTableMiss,

	/// The decoder needed the variant's designated king piece type (for
	/// `nnue_king` square encoding) but the variant didn't provide one.
	#[error("variant has no king piece type, but the record encodes king squares")]
	NoKingType,

	/// Deserializing the JSON envelope failed.
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// A FEN/EPD field was missing or malformed.
	#[error("invalid FEN field: {0}")]
	InvalidFen(String),

	/// The position built from a decoded record failed its own consistency
	/// check (see [`crate::position::PositionBuild::finalize`]).
	#[error("decoded position is not structurally valid")]
	PositionInvalid,

	/// Reading the encoded record failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Errors raised by the text-format codecs that have no encoder/decoder
/// implementation (`plain`, `epd`).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UnimplementedCodecError {
	/// The named codec is registered (for `name()`/`ext()` lookups) but does
	/// not implement encode or decode.
	#[error("codec {0:?} has no encode/decode implementation")]
	NotImplemented(&'static str),
}

/// Umbrella error type covering every operation exposed by a [`crate::codec::PosCodec`].
#[derive(Debug, Error)]
pub enum CodecError {
	/// Encoding failed.
	#[error(transparent)]
	Encode(#[from] EncodeError),

	/// Decoding failed.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// The codec doesn't support the requested direction.
	#[error(transparent)]
	Unimplemented(#[from] UnimplementedCodecError),
}
