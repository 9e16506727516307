//! Benchmark suite for the BIN and BIN2 codecs.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pos_tools_benches::{bare_kings, starting_position};
use pos_types::codec::{bin, bin2};
use pos_types::data::PosData;
use pos_types::position::testing::TestPosition;
use std::hint::black_box;

fn bench_bin_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("bin_encode");
	for (name, pos) in [("bare_kings", bare_kings()), ("starting_position", starting_position())] {
		let mut pos = pos;
		group.bench_function(BenchmarkId::new("encode", name), |b| {
			b.iter(|| {
				let pd = PosData::new(&mut pos);
				black_box(bin::encode(&pd).unwrap())
			});
		});
	}
	group.finish();
}

fn bench_bin_decode(c: &mut Criterion) {
	let mut group = c.benchmark_group("bin_decode");
	for (name, mut pos) in [("bare_kings", bare_kings()), ("starting_position", starting_position())] {
		let record = bin::encode(&PosData::new(&mut pos)).unwrap();
		group.bench_function(BenchmarkId::new("decode", name), |b| {
			b.iter(|| {
				let mut scratch = TestPosition::empty_standard();
				let mut pd = PosData::new(&mut scratch);
				black_box(bin::decode(&record, &mut pd).unwrap())
			});
		});
	}
	group.finish();
}

fn bench_bin2_round_trip(c: &mut Criterion) {
	let mut group = c.benchmark_group("bin2_round_trip");
	for (name, pos) in [("bare_kings", bare_kings()), ("starting_position", starting_position())] {
		let mut pos = pos;
		group.bench_function(BenchmarkId::new("encode_then_decode", name), |b| {
			b.iter(|| {
				let pd = PosData::new(&mut pos);
				let record = bin2::encode(&pd).unwrap();
				let mut scratch = TestPosition::empty_standard();
				let mut decoded = PosData::new(&mut scratch);
				black_box(bin2::decode(&record, &mut decoded).unwrap());
			});
		});
	}
	group.finish();
}

criterion_group!(benches, bench_bin_encode, bench_bin_decode, bench_bin2_round_trip);
criterion_main!(benches);
