//! Lookup tables over the fixed set of [`super::PosCodec`] variants.
//!
//! Mirrors the upstream codec register: codecs are indexed by name and
//! extension for exact lookups, and [`CodecRegistry::get_path`] resolves a
//! file path to a codec by testing each registered codec's extension as a
//! path suffix, in registration order, returning the first match. That's a
//! deliberate divergence from "longest suffix wins": a codec registered
//! earlier with a shorter extension can shadow one registered later with a
//! longer one, exactly as it does upstream.

use std::collections::HashMap;

use super::PosCodec;

/// Registration order, matching the upstream codec register's constructor.
const REGISTRATION_ORDER: [PosCodec; 6] = [
	PosCodec::Bin,
	PosCodec::Bin2,
	PosCodec::Jpn,
	PosCodec::Plain,
	PosCodec::Epd,
	PosCodec::Fen,
];

/// A lookup table from codec name, extension, or file path to a [`PosCodec`].
pub struct CodecRegistry {
	by_name: HashMap<&'static str, PosCodec>,
	by_ext: HashMap<&'static str, PosCodec>,
	ordered: Vec<PosCodec>,
}

impl CodecRegistry {
	/// Builds the registry in the fixed upstream registration order.
	pub fn new() -> Self {
		let mut by_name = HashMap::new();
		let mut by_ext = HashMap::new();
		let mut ordered = Vec::new();
		for codec in REGISTRATION_ORDER {
			by_name.insert(codec.name(), codec);
			by_ext.insert(codec.ext(), codec);
			ordered.push(codec);
		}
		Self { by_name, by_ext, ordered }
	}

	/// Looks up a codec by its exact name (e.g. `"BIN2"`).
	pub fn get_name(&self, name: &str) -> Option<PosCodec> {
		self.by_name.get(name).copied()
	}

	/// Looks up a codec by its exact extension, including the leading dot
	/// (e.g. `".bin2"`).
	pub fn get_ext(&self, ext: &str) -> Option<PosCodec> {
		self.by_ext.get(ext).copied()
	}

	/// Resolves `path` to a codec by testing each registered codec's
	/// extension as a suffix of `path`, in registration order.
	pub fn get_path(&self, path: &str) -> Option<PosCodec> {
		self.ordered.iter().copied().find(|codec| path.ends_with(codec.ext()))
	}
}

impl Default for CodecRegistry {
	fn default() -> Self {
		Self::new()
	}
}
