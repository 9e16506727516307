//! Binpack (compressed-entry) format: decommissioned.
//!
//! Reading the original sfen-packed compressed-entry format is out of scope;
//! this type exists only so callers resolving a codec by file extension get
//! a clear error instead of a missing variant.

use pos_types::buffer::PosBuffer;

use crate::error::StreamError;
use crate::stream::PosInputStream;

/// Always fails to produce records; construction itself does not fail so
/// that callers can resolve the type before deciding whether to open it.
pub struct BinpackPosInputStream;

impl BinpackPosInputStream {
	/// Returns a stream that errors on the first read.
	pub fn new() -> Self {
		Self
	}
}

impl Default for BinpackPosInputStream {
	fn default() -> Self {
		Self::new()
	}
}

impl PosInputStream for BinpackPosInputStream {
	fn read(&mut self) -> Result<Option<PosBuffer>, StreamError> {
		Err(StreamError::Decommissioned("binpack"))
	}
}
