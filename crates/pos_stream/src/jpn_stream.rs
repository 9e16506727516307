//! JPN file streams: a single JSON document wrapping all records, rather
//! than one JSON value per record.

use std::io::{Read, Write};

use pos_types::buffer::PosBuffer;

use crate::error::StreamError;
use crate::stream::{PosInputStream, PosOutputStream};

/// Writes a whole-file JSON envelope: `{"header":{...},"variant":"...",
/// "positions":[ ... ]}`. The header is written lazily on the first
/// [`write`](PosOutputStream::write) call if [`write_header`](PosOutputStream::write_header)
/// was never called explicitly; the footer must be written explicitly via
/// [`write_footer`](PosOutputStream::write_footer).
pub struct JpnPosOutputStream<W> {
	writer: W,
	variant: String,
	header_written: bool,
	wrote_first_record: bool,
}

impl<W: Write> JpnPosOutputStream<W> {
	/// Wraps `writer`, embedding `variant` in the envelope header.
	pub fn new(writer: W, variant: impl Into<String>) -> Self {
		Self {
			writer,
			variant: variant.into(),
			header_written: false,
			wrote_first_record: false,
		}
	}
}

impl<W: Write> PosOutputStream for JpnPosOutputStream<W> {
	fn write_header(&mut self) -> Result<(), StreamError> {
		if self.header_written {
			return Ok(());
		}
		write!(
			self.writer,
			"{{\"header\":{{}},\"variant\":{},\"positions\":[",
			serde_json::to_string(&self.variant)?
		)?;
		self.header_written = true;
		Ok(())
	}

	fn write(&mut self, buf: &PosBuffer) -> Result<(), StreamError> {
		self.write_header()?;
		if self.wrote_first_record {
			self.writer.write_all(b",")?;
		}
		self.writer.write_all(buf.as_bytes())?;
		self.wrote_first_record = true;
		Ok(())
	}

	fn write_footer(&mut self) -> Result<(), StreamError> {
		self.write_header()?;
		self.writer.write_all(b"]}")?;
		Ok(())
	}
}

/// Reads a whole-file JPN envelope written by [`JpnPosOutputStream`].
///
/// Unlike every other input stream in this crate, this one is not
/// incremental: the entire file is read and parsed on construction, and
/// [`read`](PosInputStream::read) replays the parsed `"positions"` array.
pub struct JpnPosInputStream {
	records: std::vec::IntoIter<serde_json::Value>,
}

impl JpnPosInputStream {
	/// Reads all of `reader`, parsing it as a JPN envelope.
	pub fn new(mut reader: impl Read) -> Result<Self, StreamError> {
		let mut text = String::new();
		reader.read_to_string(&mut text)?;
		let doc: serde_json::Value = serde_json::from_str(&text)?;
		let positions = doc
			.get("positions")
			.and_then(serde_json::Value::as_array)
			.cloned()
			.unwrap_or_default();
		Ok(Self {
			records: positions.into_iter(),
		})
	}
}

impl PosInputStream for JpnPosInputStream {
	fn read(&mut self) -> Result<Option<PosBuffer>, StreamError> {
		match self.records.next() {
			Some(value) => Ok(Some(PosBuffer::Jpn(serde_json::to_string(&value)?))),
			None => Ok(None),
		}
	}
}
