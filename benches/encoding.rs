use convert_d::FormatRegistry;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const SIZES: [usize; 4] = [64, 1024, 4096, 16384];

fn sample(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode(c: &mut Criterion, id: &str) {
    let registry = FormatRegistry::builtin();
    let mut group = c.benchmark_group(format!("encode_{}", id));

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = sample(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| registry.encode(black_box(id), black_box(data)).unwrap());
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion, id: &str) {
    let registry = FormatRegistry::builtin();
    let mut group = c.benchmark_group(format!("decode_{}", id));

    for size in SIZES {
        let encoded = registry.encode(id, &sample(size)).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &encoded, |b, encoded| {
            b.iter(|| registry.decode(black_box(id), black_box(encoded)).unwrap());
        });
    }
    group.finish();
}

fn bench_hex(c: &mut Criterion) {
    bench_encode(c, "hex");
    bench_decode(c, "hex");
}

fn bench_base32(c: &mut Criterion) {
    bench_encode(c, "base32");
    bench_decode(c, "base32");
}

fn bench_ascii85(c: &mut Criterion) {
    bench_encode(c, "ascii85");
    bench_decode(c, "ascii85");
}

fn bench_crc32(c: &mut Criterion) {
    let mut group = c.benchmark_group("crc32");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let data = sample(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| convert_d::crc32::checksum(black_box(data)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hex, bench_base32, bench_ascii85, bench_crc32);
criterion_main!(benches);
