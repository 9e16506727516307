//! Error types for file streams and the conversion driver.

use thiserror::Error;

/// Errors raised while reading or writing a position record stream.
#[derive(Debug, Error)]
pub enum StreamError {
	/// The input or output file could not be opened.
	#[error("failed to open {path}: {source}")]
	OpenFailure {
		/// Path that failed to open.
		path: String,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// A record frame started (some bytes of it were read) but the payload
	/// ran short of the length the frame promised.
	#[error("truncated record: expected {expected} bytes, got {actual}")]
	Truncation {
		/// Bytes the frame promised.
		expected: usize,
		/// Bytes actually available.
		actual: usize,
	},

	/// A file's header magic or version bytes didn't match what this stream
	/// expects.
	#[error("header mismatch: expected {expected:?}, got {actual:?}")]
	HeaderMismatch {
		/// Bytes this stream requires.
		expected: Vec<u8>,
		/// Bytes actually read.
		actual: Vec<u8>,
	},

	/// A BIN2 record's length prefix had nonzero top bits, which should
	/// always be `00`.
	#[error("bad record length prefix {0:#06x}: top two bits must be zero")]
	RecordMagicBad(u16),

	/// This stream format was never implemented and its construction always
	/// fails.
	#[error("{0} is not implemented in this build")]
	Decommissioned(&'static str),

	/// Parsing a whole-file JSON stream failed.
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// The underlying I/O operation failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Errors raised by [`crate::driver::convert`].
#[derive(Debug, Error)]
pub enum ConvertError {
	/// No codec is registered for the given file's extension.
	#[error("no codec registered for file: {0}")]
	UnknownFormat(String),

	/// The resolved codec cannot be used in the requested direction.
	#[error("codec {name} cannot be used for {direction}")]
	BadCapability {
		/// Codec name (see [`pos_types::codec::PosCodec::name`]).
		name: &'static str,
		/// `"decoding"` or `"encoding"`.
		direction: &'static str,
	},

	/// Opening, reading, or writing a stream failed.
	#[error(transparent)]
	Stream(#[from] StreamError),

	/// Encoding or decoding a record failed.
	#[error(transparent)]
	Codec(#[from] pos_types::error::CodecError),
}
