//! `extract`: convert a position file from one on-wire codec to another.

use clap::Parser;
use log::error;
use pos_internal::prelude::*;
use pos_types::position::testing::TestPosition;

/// Convert a position record file between BIN, BIN2, JPN, and FEN.
#[derive(Parser, Debug)]
#[command(name = "extract", version)]
struct Args {
	/// Input file path; its extension selects the input codec.
	#[arg(short = 'i', long = "input_file")]
	input_file: String,

	/// Output file path; its extension selects the output codec.
	#[arg(short = 'o', long = "output_file")]
	output_file: String,

	/// Input codec name, overriding extension-based detection. Not yet
	/// supported; passing it is an error.
	#[arg(long = "input_codec")]
	input_codec: Option<String>,

	/// Output codec name, overriding extension-based detection. Not yet
	/// supported; passing it is an error.
	#[arg(long = "output_codec")]
	output_codec: Option<String>,

	/// Leading records to discard before the first one processed.
	#[arg(short = 's', long = "skip", default_value_t = 0)]
	skip: usize,

	/// Records to process after `skip`; omit for unlimited.
	#[arg(short = 'c', long = "count")]
	count: Option<usize>,

	/// Replace each record's move and score with a fresh search.
	#[arg(short = 'r', long = "rescore", default_value_t = false)]
	rescore: bool,

	/// Search depth used when `--rescore` is set.
	#[arg(short = 'd', long = "depth", default_value_t = 0)]
	depth: u32,

	/// Node budget used when `--rescore` is set.
	#[arg(short = 'n', long = "nodes", default_value_t = 0)]
	nodes: u64,
}

fn main() {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let args = Args::parse();

	if args.input_codec.is_some() || args.output_codec.is_some() {
		error!("--input_codec/--output_codec overrides are not supported; codecs are resolved from file extensions");
		std::process::exit(2);
	}

	let options = ConvertOptions {
		input_path: args.input_file,
		output_path: args.output_file,
		skip: args.skip,
		count: args.count,
		rescore: args.rescore,
		depth: args.depth,
		nodes: args.nodes,
	};

	match pos_internal::pos_stream::driver::convert::<TestPosition>(options, None, TestPosition::empty_standard) {
		Ok(report) => {
			log::info!("processed {} records, skipped {}", report.processed, report.skipped);
		}
		Err(e) => {
			error!("conversion failed: {e}");
			std::process::exit(1);
		}
	}
}
