//! BIN2 file streams: a 5-byte magic header followed by `(u16 length,
//! payload)` frames. The length prefix's top two bits are reserved and must
//! be zero.

use std::io::{Read, Write};

use pos_types::buffer::PosBuffer;

use crate::error::StreamError;
use crate::stream::{PosInputStream, PosOutputStream};

/// File magic written once before the first record.
pub const MAGIC: [u8; 5] = [0xC2, 0x34, 0x56, 0x78, 0x20];

/// Reads BIN2 records, verifying [`MAGIC`] on the first call.
pub struct Bin2PosInputStream<R> {
	reader: R,
	header_checked: bool,
}

impl<R: Read> Bin2PosInputStream<R> {
	/// Wraps `reader`.
	pub fn new(reader: R) -> Self {
		Self {
			reader,
			header_checked: false,
		}
	}

	fn check_header(&mut self) -> Result<(), StreamError> {
		if self.header_checked {
			return Ok(());
		}
		let mut magic = [0u8; MAGIC.len()];
		self.reader.read_exact(&mut magic).map_err(|_| StreamError::HeaderMismatch {
			expected: MAGIC.to_vec(),
			actual: Vec::new(),
		})?;
		if magic != MAGIC {
			return Err(StreamError::HeaderMismatch {
				expected: MAGIC.to_vec(),
				actual: magic.to_vec(),
			});
		}
		self.header_checked = true;
		Ok(())
	}
}

impl<R: Read> PosInputStream for Bin2PosInputStream<R> {
	fn read(&mut self) -> Result<Option<PosBuffer>, StreamError> {
		self.check_header()?;

		let mut len_bytes = [0u8; 2];
		let mut filled = 0;
		while filled < len_bytes.len() {
			let n = self.reader.read(&mut len_bytes[filled..])?;
			if n == 0 {
				break;
			}
			filled += n;
		}
		if filled == 0 {
			return Ok(None);
		}
		if filled != len_bytes.len() {
			return Err(StreamError::Truncation {
				expected: len_bytes.len(),
				actual: filled,
			});
		}

		let raw_len = u16::from_le_bytes(len_bytes);
		if raw_len & 0xC000 != 0 {
			return Err(StreamError::RecordMagicBad(raw_len));
		}

		let len = raw_len as usize;
		let mut payload = vec![0u8; len];
		self.reader.read_exact(&mut payload).map_err(|_| StreamError::Truncation {
			expected: len,
			actual: 0,
		})?;

		Ok(Some(PosBuffer::Bin2(payload)))
	}
}

/// Writes BIN2 records, writing [`MAGIC`] once before the first record.
pub struct Bin2PosOutputStream<W> {
	writer: W,
}

impl<W: Write> Bin2PosOutputStream<W> {
	/// Wraps `writer`.
	pub fn new(writer: W) -> Self {
		Self { writer }
	}
}

impl<W: Write> PosOutputStream for Bin2PosOutputStream<W> {
	fn write_header(&mut self) -> Result<(), StreamError> {
		self.writer.write_all(&MAGIC)?;
		Ok(())
	}

	fn write(&mut self, buf: &PosBuffer) -> Result<(), StreamError> {
		let bytes = buf.as_bytes();
		debug_assert!(bytes.len() <= PosBuffer::BIN2_MAX_SIZE);
		let len = bytes.len() as u16;
		self.writer.write_all(&len.to_le_bytes())?;
		self.writer.write_all(bytes)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_with_header() {
		let mut out = Vec::new();
		{
			let mut stream = Bin2PosOutputStream::new(&mut out);
			stream.write_header().unwrap();
			stream.write(&PosBuffer::Bin2(vec![1, 2, 3])).unwrap();
			stream.write(&PosBuffer::Bin2(vec![4, 5])).unwrap();
		}
		assert_eq!(&out[..5], &MAGIC);

		let mut stream = Bin2PosInputStream::new(out.as_slice());
		let first = stream.read().unwrap().unwrap();
		assert_eq!(first.as_bytes(), &[1, 2, 3]);
		let second = stream.read().unwrap().unwrap();
		assert_eq!(second.as_bytes(), &[4, 5]);
		assert!(stream.read().unwrap().is_none());
	}

	#[test]
	fn missing_magic_is_header_mismatch() {
		let data = vec![0u8; 10];
		let mut stream = Bin2PosInputStream::new(data.as_slice());
		assert!(matches!(stream.read(), Err(StreamError::HeaderMismatch { .. })));
	}

	#[test]
	fn bad_length_prefix_top_bits_is_record_magic_bad() {
		let mut data = MAGIC.to_vec();
		data.extend_from_slice(&0x4000u16.to_le_bytes());
		let mut stream = Bin2PosInputStream::new(data.as_slice());
		assert!(matches!(stream.read(), Err(StreamError::RecordMagicBad(0x4000))));
	}
}
