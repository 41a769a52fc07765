use bwmtf::bwt_algorithms::bwt_sort::{bwt_decode, bwt_encode};
use bwmtf::bwt_algorithms::circular_suffix::CircularSuffixArray;
use bwmtf::tools::mtf::{mtf_decode, mtf_encode};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SIZES: &[usize] = &[1024, 16 * 1024, 128 * 1024];

/// Text made of words in random order. Periodic data would hit the quadratic worst case.
fn test_data(size: usize) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "the ", "spirit ", "of ", "learning ", "both ", "Rust ", "and ", "compression ",
        "techniques ", "block ", "sorting ", "rotation ", "peppers, ", "picked. ",
    ];
    let mut rng = StdRng::seed_from_u64(11);
    let mut data = Vec::with_capacity(size + 16);
    while data.len() < size {
        data.extend_from_slice(WORDS[rng.gen_range(0..WORDS.len())].as_bytes());
    }
    data.truncate(size);
    data
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("circular_suffix");
    group.sample_size(10);
    for &size in SIZES {
        let data = test_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("rank", size), &data, |b, data| {
            b.iter(|| CircularSuffixArray::new(data));
        });
    }
    group.finish();
}

fn bench_bwt(c: &mut Criterion) {
    let mut group = c.benchmark_group("bwt");
    group.sample_size(10);
    for &size in SIZES {
        let data = test_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| bwt_encode(data));
        });

        if let Ok(block) = bwt_encode(&data) {
            group.bench_with_input(BenchmarkId::new("decode", size), &block, |b, block| {
                b.iter(|| bwt_decode(block.first, &block.data));
            });
        }
    }
    group.finish();
}

fn bench_mtf(c: &mut Criterion) {
    let mut group = c.benchmark_group("mtf");
    for &size in SIZES {
        let data = test_data(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| mtf_encode(data));
        });

        let encoded = mtf_encode(&data);
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, enc| {
            b.iter(|| mtf_decode(enc));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ranking, bench_bwt, bench_mtf);
criterion_main!(benches);
