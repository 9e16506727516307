//! Prelude module for `pos_types`.
//!
//! ```no_run
//! use pos_types::prelude::*;
//! ```

#[doc(inline)]
pub use crate::buffer::PosBuffer;

#[doc(inline)]
pub use crate::codec::PosCodec;

#[doc(inline)]
pub use crate::codec::registry::CodecRegistry;

#[doc(inline)]
pub use crate::data::PosData;

#[doc(inline)]
pub use crate::error::{BitstreamError, CodecError, DecodeError, EncodeError, UnimplementedCodecError};

#[doc(inline)]
pub use crate::piece_code::PieceCode;

#[doc(inline)]
pub use crate::position::{CastleRight, Color, Piece, PieceType, PositionBuild, PositionView, Square, Variant};
