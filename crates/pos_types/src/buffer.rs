//! The encoded-record payload a [`crate::codec::PosCodec`] produces or
//! consumes, independent of the file framing that wraps it on disk.

/// A codec's encoded record.
///
/// Each variant's capacity matches its codec's on-wire record: BIN records
/// are always exactly 72 bytes, BIN2 records carry their own length up to
/// 256 bytes, and JPN records are a single JSON object of unbounded size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosBuffer {
	/// A fixed 72-byte BIN record.
	Bin(Box<[u8; 72]>),
	/// A variable-length BIN2 record, at most 256 bytes.
	Bin2(Vec<u8>),
	/// A single JSON object (no trailing newline, no surrounding array
	/// brackets) for the JPN codec.
	Jpn(String),
	/// A single line of Forsyth-Edwards notation for the FEN codec.
	Fen(String),
}

impl PosBuffer {
	/// Maximum record size in bytes for a BIN2 payload; the on-disk framing
	/// stores this length in a `u16`.
	pub const BIN2_MAX_SIZE: usize = 256;

	/// Record size of a BIN buffer.
	pub const BIN_SIZE: usize = 72;

	/// Raw bytes of this record, as they sit on disk for binary codecs.
	/// For the JPN variant, returns the UTF-8 bytes of the JSON text.
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			PosBuffer::Bin(data) => data.as_slice(),
			PosBuffer::Bin2(data) => data.as_slice(),
			PosBuffer::Jpn(text) => text.as_bytes(),
			PosBuffer::Fen(text) => text.as_bytes(),
		}
	}

	/// Number of bytes in this record.
	pub fn len(&self) -> usize {
		self.as_bytes().len()
	}

	/// Whether this record is empty (only possible for a freshly
	/// constructed `Jpn` or `Fen` buffer).
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// A zeroed, `size`-byte BIN2 record ready for a codec to fill in.
	pub fn new_bin2(size: usize) -> Self {
		assert!(size <= Self::BIN2_MAX_SIZE, "BIN2 record {size} exceeds max size");
		PosBuffer::Bin2(vec![0u8; size])
	}

	/// A zeroed BIN record.
	pub fn new_bin() -> Self {
		PosBuffer::Bin(Box::new([0u8; Self::BIN_SIZE]))
	}
}
