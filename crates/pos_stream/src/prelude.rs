//! Prelude module for `pos_stream`.
//!
//! ```no_run
//! use pos_stream::prelude::*;
//! ```

#[doc(inline)]
pub use crate::bin2_stream::{Bin2PosInputStream, Bin2PosOutputStream};

#[doc(inline)]
pub use crate::bin_stream::{BinPosInputStream, BinPosOutputStream};

#[doc(inline)]
pub use crate::binpack_stream::BinpackPosInputStream;

#[doc(inline)]
pub use crate::driver::{convert, ConvertOptions, ConvertReport, Rescorer};

#[doc(inline)]
pub use crate::error::{ConvertError, StreamError};

#[doc(inline)]
pub use crate::fen_stream::{FenPosInputStream, FenPosOutputStream};

#[doc(inline)]
pub use crate::jpn_stream::{JpnPosInputStream, JpnPosOutputStream};

#[doc(inline)]
pub use crate::stream::{PosInputStream, PosOutputStream};

#[doc(inline)]
pub use crate::worker::{CodecWorker, WorkerCommand};
