//! File-level streaming and conversion on top of `pos_types`'s record
//! codecs.
//!
//! Each on-wire file format gets a pair of [`stream::PosInputStream`]/
//! [`stream::PosOutputStream`] implementations ([`bin_stream`], [`bin2_stream`],
//! [`jpn_stream`], [`fen_stream`]; [`binpack_stream`] is a decommissioned stub).
//! [`driver::convert`] drives a full input-to-output conversion, and
//! [`worker::CodecWorker`] is an optional background writer thread for
//! multi-producer record generation.

pub mod bin2_stream;
pub mod bin_stream;
pub mod binpack_stream;
pub mod driver;
pub mod error;
pub mod fen_stream;
pub mod jpn_stream;
pub mod prelude;
pub mod stream;
pub mod worker;

pub use driver::{convert, ConvertOptions, ConvertReport, Rescorer};
pub use error::{ConvertError, StreamError};
pub use stream::{PosInputStream, PosOutputStream};
