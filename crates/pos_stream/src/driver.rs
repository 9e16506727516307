//! The `extract`-equivalent conversion loop: decode every record of an
//! input file with one codec, optionally rescore it, and re-encode it with
//! another.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use pos_types::buffer::PosBuffer;
use pos_types::codec::registry::CodecRegistry;
use pos_types::codec::PosCodec;
use pos_types::data::PosData;
use pos_types::position::PositionBuild;

use crate::bin2_stream::{Bin2PosInputStream, Bin2PosOutputStream};
use crate::bin_stream::{BinPosInputStream, BinPosOutputStream};
use crate::binpack_stream::BinpackPosInputStream;
use crate::error::{ConvertError, StreamError};
use crate::fen_stream::{FenPosInputStream, FenPosOutputStream};
use crate::jpn_stream::{JpnPosInputStream, JpnPosOutputStream};
use crate::stream::{PosInputStream, PosOutputStream};

const PROGRESS_INTERVAL: usize = 100_000;

/// Options for [`convert`], mirroring the `extract` command line.
pub struct ConvertOptions {
	/// Path to read records from; its extension resolves the input codec.
	pub input_path: String,
	/// Path to write records to; its extension resolves the output codec.
	pub output_path: String,
	/// Leading records to discard before the first one processed.
	pub skip: usize,
	/// Records to process after `skip`, or `None` for unlimited. `Some(0)`
	/// normalizes to `Some(1)`, matching the `extract` front end's own rule
	/// that `--count 0` means "one record", not "none".
	pub count: Option<usize>,
	/// Whether to replace each record's move/score with a fresh search.
	pub rescore: bool,
	/// Search depth passed to [`Rescorer::search`] when `rescore` is set.
	pub depth: u32,
	/// Node budget passed to [`Rescorer::search`] when `rescore` is set.
	pub nodes: u64,
}

/// Final tally returned by [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertReport {
	/// Records discarded because they fell within `skip`.
	pub skipped: usize,
	/// Records decoded, optionally rescored, and re-encoded.
	pub processed: usize,
}

/// External search collaborator a caller supplies to participate in
/// `--rescore`. Returning `None` leaves the record's move and score
/// unchanged, satisfying the "tolerate empty PVs" requirement without the
/// driver knowing anything about how a search works.
pub trait Rescorer<P> {
	/// Searches `pos` and returns `(best_move, score)` from its principal
	/// variation, or `None` if the search produced no move.
	fn search(&self, pos: &P, depth: u32, nodes: u64) -> Option<(u16, i16)>;
}

fn open_input(path: &str, codec: PosCodec) -> Result<Box<dyn PosInputStream>, StreamError> {
	let file = File::open(path).map_err(|source| StreamError::OpenFailure {
		path: path.to_string(),
		source,
	})?;
	let reader = BufReader::new(file);
	match codec {
		PosCodec::Bin => Ok(Box::new(BinPosInputStream::new(reader))),
		PosCodec::Bin2 => Ok(Box::new(Bin2PosInputStream::new(reader))),
		PosCodec::Jpn => Ok(Box::new(JpnPosInputStream::new(reader)?)),
		PosCodec::Fen => Ok(Box::new(FenPosInputStream::new(reader))),
		_ => Ok(Box::new(BinpackPosInputStream::new())),
	}
}

fn open_output(path: &str, codec: PosCodec) -> Result<Box<dyn PosOutputStream>, StreamError> {
	let file = File::create(path).map_err(|source| StreamError::OpenFailure {
		path: path.to_string(),
		source,
	})?;
	let writer = BufWriter::new(file);
	match codec {
		PosCodec::Bin => Ok(Box::new(BinPosOutputStream::new(writer))),
		PosCodec::Bin2 => Ok(Box::new(Bin2PosOutputStream::new(writer))),
		PosCodec::Jpn => Ok(Box::new(JpnPosOutputStream::new(writer, "standard"))),
		PosCodec::Fen => Ok(Box::new(FenPosOutputStream::new(writer))),
		other => Err(StreamError::Decommissioned(other.name())),
	}
}

fn codec_for(registry: &CodecRegistry, path: &str) -> Result<PosCodec, ConvertError> {
	registry.get_path(path).ok_or_else(|| ConvertError::UnknownFormat(path.to_string()))
}

/// Runs the conversion loop described by `options`, using `search` (if
/// given) to rescore each record. `P` is the caller's own position type,
/// implementing [`PositionBuild`] (and, through it, `PositionView`); `new_position`
/// builds a fresh, empty board for every record (a closure rather than a
/// `Default` bound, since a position's empty state is usually variant-specific).
pub fn convert<P: PositionBuild>(
	options: ConvertOptions,
	search: Option<&dyn Rescorer<P>>,
	mut new_position: impl FnMut() -> P,
) -> Result<ConvertReport, ConvertError> {
	let registry = CodecRegistry::new();
	let codec_in = codec_for(&registry, &options.input_path)?;
	let codec_out = codec_for(&registry, &options.output_path)?;
	if !codec_in.is_decoder() {
		return Err(ConvertError::BadCapability {
			name: codec_in.name(),
			direction: "decoding",
		});
	}
	if !codec_out.is_encoder() {
		return Err(ConvertError::BadCapability {
			name: codec_out.name(),
			direction: "encoding",
		});
	}

	let mut input = open_input(&options.input_path, codec_in)?;
	let mut output = open_output(&options.output_path, codec_out)?;
	output.write_header()?;

	// count=0 means "one record", matching the `extract` front end's own
	// normalization; only `None` (no `--count` given) means unlimited.
	let count = options.count.map(|c| c.max(1));

	let conversion_required = codec_in != codec_out;
	let mut report = ConvertReport::default();
	let mut index = 0usize;

	loop {
		let Some(record) = input.read()? else {
			break;
		};

		if index < options.skip {
			report.skipped += 1;
			index += 1;
			continue;
		}
		if let Some(count) = count {
			if index >= options.skip + count {
				break;
			}
		}

		let out_record = if conversion_required || options.rescore {
			let mut pos = new_position();
			let mut pd = PosData::new(&mut pos);
			codec_in.decode(&record, &mut pd)?;

			if options.rescore {
				if let Some(search) = search {
					if let Some((mv, score)) = search.search(pd.pos, options.depth, options.nodes) {
						pd.mv = mv;
						pd.score = score;
					}
				}
			}

			codec_out.encode(&pd)?
		} else {
			record
		};

		output.write(&out_record)?;
		report.processed += 1;
		index += 1;

		if report.processed % PROGRESS_INTERVAL == 0 {
			log::info!("processed {} records ({} skipped)", report.processed, report.skipped);
		}
	}

	output.write_footer()?;
	log::info!("done: {} processed, {} skipped", report.processed, report.skipped);
	Ok(report)
}

/// Resolves a codec for `path` without running a conversion; exposed for
/// front ends that want to validate arguments before opening files.
pub fn resolve_codec(path: impl AsRef<Path>) -> Option<PosCodec> {
	CodecRegistry::new().get_path(path.as_ref().to_str()?)
}
