//! Benchmarks for MD5 digest throughput.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use md5_core::{digest, digest_batch, Md5};

/// Generate random data of the specified size.
fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0_u8; size];
    rng.fill(&mut data[..]);
    data
}

/// Benchmark one-shot digests for different input sizes.
fn bench_digest(c: &mut Criterion) {
    let mut group = c.benchmark_group("digest");

    for size in [64, 1024, 8192, 65536, 1048576] {
        let data = generate_random_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("one_shot", size), &data, |b, data| {
            b.iter(|| black_box(digest(black_box(data))));
        });
    }

    group.finish();
}

/// Benchmark streaming updates fed in small chunks.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("streaming");

    let data = generate_random_data(65536);
    for chunk_len in [64, 1024, 8192] {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("chunked_update", chunk_len),
            &data,
            |b, data| {
                b.iter(|| {
                    let mut hasher = Md5::new();
                    for chunk in data.chunks(chunk_len) {
                        hasher.update(black_box(chunk));
                    }
                    black_box(hasher.finalize())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark batched digests over many independent inputs.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for count in [8, 64, 512] {
        let inputs: Vec<Vec<u8>> = (0..count).map(|_| generate_random_data(4096)).collect();

        group.throughput(Throughput::Bytes((count * 4096) as u64));
        group.bench_with_input(BenchmarkId::new("digest_batch", count), &inputs, |b, inputs| {
            b.iter(|| black_box(digest_batch(black_box(inputs))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_digest, bench_streaming, bench_batch);
criterion_main!(benches);
