//! Core data types and record codecs for bit-packed chess position streams.
//!
//! This crate defines the position capability traits ([`position::PositionView`],
//! [`position::PositionBuild`]) a host chess engine implements, and the
//! record codecs ([`codec`]) that translate between a position and one of
//! several on-wire formats: a fixed-width binary record (`bin`), a
//! variable-length binary record (`bin2`), a JSON object (`jpn`), and
//! standard FEN notation (`fen`; `plain`/`epd` are registered but
//! unimplemented).
//!
//! A host engine implements [`position::PositionView`] (and, for decoding,
//! [`position::PositionBuild`]) over its own position type; from there,
//! `codec::bin::encode(&PosData::new(&mut pos))` produces a 72-byte record.

pub mod bitstream;
pub mod buffer;
pub mod codec;
pub mod data;
pub mod error;
pub mod piece_code;
pub mod position;
pub mod prelude;

pub use buffer::PosBuffer;
pub use codec::PosCodec;
pub use data::PosData;
pub use error::CodecError;
