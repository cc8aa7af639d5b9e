//! Benchmark suite for the solution codecs.
//!
//! Measures both directions of the binary move-stream codec and of the
//! textual notation on synthetic move lists of several sizes.
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tws_benches::{generate_moves, sizes};
use tws_types::file::tws::{contract, expand};
use tws_types::moves::Solution;
use tws_types::notation;

const SIZES: [usize; 3] = [sizes::SHORT, sizes::TYPICAL, sizes::LONG];

fn bench_binary_codec(c: &mut Criterion) {
	let mut group = c.benchmark_group("binary_codec");
	for len in SIZES {
		let mut solution = Solution::new();
		solution.moves = generate_moves(len);
		solution.rndseed = 0x1234_5678;
		let solution_time = solution.moves.last().map_or(0, |action| action.when + 1);
		let level = contract(&solution, 1, *b"BDHP", solution_time as i32).unwrap();

		group.throughput(Throughput::Elements(len as u64));
		group.bench_with_input(BenchmarkId::new("contract", len), &solution, |b, solution| {
			b.iter(|| contract(black_box(solution), 1, *b"BDHP", solution_time as i32));
		});
		group.bench_with_input(BenchmarkId::new("expand", len), &level, |b, level| {
			b.iter(|| expand(black_box(level)));
		});
	}
	group.finish();
}

fn bench_notation(c: &mut Criterion) {
	let mut group = c.benchmark_group("notation");
	for len in SIZES {
		let moves = generate_moves(len);
		let solution_time = moves.last().map_or(0, |action| action.when + 1);
		let text = notation::compress(&moves, solution_time).unwrap();

		group.throughput(Throughput::Elements(len as u64));
		group.bench_with_input(BenchmarkId::new("compress", len), &moves, |b, moves| {
			b.iter(|| notation::compress(black_box(moves), solution_time));
		});
		group.bench_with_input(BenchmarkId::new("parse", len), &text, |b, text| {
			b.iter(|| notation::parse(black_box(text)));
		});
	}
	group.finish();
}

criterion_group!(benches, bench_binary_codec, bench_notation);
criterion_main!(benches);
