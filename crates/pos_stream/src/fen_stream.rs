//! FEN file streams: one record per line, no header, no footer, matching
//! how EPD/FEN book files are conventionally laid out on disk.

use std::io::{BufRead, Write};

use pos_types::buffer::PosBuffer;

use crate::error::StreamError;
use crate::stream::{PosInputStream, PosOutputStream};

/// Reads one FEN record per line from any [`BufRead`].
pub struct FenPosInputStream<R> {
	reader: R,
}

impl<R: BufRead> FenPosInputStream<R> {
	/// Wraps `reader`.
	pub fn new(reader: R) -> Self {
		Self { reader }
	}
}

impl<R: BufRead> PosInputStream for FenPosInputStream<R> {
	fn read(&mut self) -> Result<Option<PosBuffer>, StreamError> {
		let mut line = String::new();
		loop {
			line.clear();
			let n = self.reader.read_line(&mut line)?;
			if n == 0 {
				return Ok(None);
			}
			let trimmed = line.trim_end_matches(['\n', '\r']);
			if trimmed.is_empty() {
				continue;
			}
			return Ok(Some(PosBuffer::Fen(trimmed.to_string())));
		}
	}
}

/// Writes one FEN record per line to any [`Write`].
pub struct FenPosOutputStream<W> {
	writer: W,
}

impl<W: Write> FenPosOutputStream<W> {
	/// Wraps `writer`.
	pub fn new(writer: W) -> Self {
		Self { writer }
	}
}

impl<W: Write> PosOutputStream for FenPosOutputStream<W> {
	fn write(&mut self, buf: &PosBuffer) -> Result<(), StreamError> {
		self.writer.write_all(buf.as_bytes())?;
		self.writer.write_all(b"\n")?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_multiple_lines() {
		let mut out = Vec::new();
		{
			let mut stream = FenPosOutputStream::new(&mut out);
			stream.write(&PosBuffer::Fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".to_string())).unwrap();
			stream.write(&PosBuffer::Fen("8/8/8/4k3/8/8/8/4K3 w - - 0 1".to_string())).unwrap();
		}

		let mut stream = FenPosInputStream::new(out.as_slice());
		let first = stream.read().unwrap().unwrap();
		assert_eq!(first.as_bytes(), b"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
		let second = stream.read().unwrap().unwrap();
		assert_eq!(second.as_bytes(), b"8/8/8/4k3/8/8/8/4K3 w - - 0 1");
		assert!(stream.read().unwrap().is_none());
	}

	#[test]
	fn blank_lines_are_skipped() {
		let data = b"line one\n\nline two\n".to_vec();
		let mut stream = FenPosInputStream::new(data.as_slice());
		assert_eq!(stream.read().unwrap().unwrap().as_bytes(), b"line one");
		assert_eq!(stream.read().unwrap().unwrap().as_bytes(), b"line two");
		assert!(stream.read().unwrap().is_none());
	}
}
