//! Stream traits a file format implements to be usable by [`crate::driver::convert`].

use pos_types::buffer::PosBuffer;

use crate::error::StreamError;

/// Reads successive records from a position file.
pub trait PosInputStream {
	/// Reads the next record, or `None` at a clean end of file.
	fn read(&mut self) -> Result<Option<PosBuffer>, StreamError>;
}

/// Writes successive records to a position file.
pub trait PosOutputStream {
	/// Writes any file-level header. Called once before the first record;
	/// a no-op for formats without one.
	fn write_header(&mut self) -> Result<(), StreamError> {
		Ok(())
	}

	/// Writes one record.
	fn write(&mut self, buf: &PosBuffer) -> Result<(), StreamError>;

	/// Writes any file-level footer. Called once after the last record; a
	/// no-op for formats without one.
	fn write_footer(&mut self) -> Result<(), StreamError> {
		Ok(())
	}
}
