//! BIN file streams: a raw concatenation of 72-byte records, no header, no
//! footer.

use std::io::{Read, Write};

use pos_types::buffer::PosBuffer;

use crate::error::StreamError;
use crate::stream::{PosInputStream, PosOutputStream};

/// Reads 72-byte BIN records from any [`Read`].
pub struct BinPosInputStream<R> {
	reader: R,
}

impl<R: Read> BinPosInputStream<R> {
	/// Wraps `reader`.
	pub fn new(reader: R) -> Self {
		Self { reader }
	}
}

impl<R: Read> PosInputStream for BinPosInputStream<R> {
	fn read(&mut self) -> Result<Option<PosBuffer>, StreamError> {
		let mut record = [0u8; PosBuffer::BIN_SIZE];
		let mut filled = 0;
		while filled < record.len() {
			let n = self.reader.read(&mut record[filled..])?;
			if n == 0 {
				break;
			}
			filled += n;
		}
		if filled == 0 {
			return Ok(None);
		}
		if filled != record.len() {
			return Err(StreamError::Truncation {
				expected: record.len(),
				actual: filled,
			});
		}
		Ok(Some(PosBuffer::Bin(Box::new(record))))
	}
}

/// Writes 72-byte BIN records to any [`Write`].
pub struct BinPosOutputStream<W> {
	writer: W,
}

impl<W: Write> BinPosOutputStream<W> {
	/// Wraps `writer`.
	pub fn new(writer: W) -> Self {
		Self { writer }
	}
}

impl<W: Write> PosOutputStream for BinPosOutputStream<W> {
	fn write(&mut self, buf: &PosBuffer) -> Result<(), StreamError> {
		self.writer.write_all(buf.as_bytes())?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_multiple_records() {
		let mut out = Vec::new();
		{
			let mut stream = BinPosOutputStream::new(&mut out);
			stream.write(&PosBuffer::new_bin()).unwrap();
			let mut second = PosBuffer::new_bin();
			let PosBuffer::Bin(data) = &mut second else { unreachable!() };
			data[0] = 0xFF;
			stream.write(&second).unwrap();
		}
		assert_eq!(out.len(), 144);

		let mut stream = BinPosInputStream::new(out.as_slice());
		let first = stream.read().unwrap().unwrap();
		assert_eq!(first.as_bytes()[0], 0);
		let second = stream.read().unwrap().unwrap();
		assert_eq!(second.as_bytes()[0], 0xFF);
		assert!(stream.read().unwrap().is_none());
	}

	#[test]
	fn short_read_mid_record_is_truncation() {
		let data = vec![0u8; 10];
		let mut stream = BinPosInputStream::new(data.as_slice());
		assert!(matches!(stream.read(), Err(StreamError::Truncation { .. })));
	}
}
