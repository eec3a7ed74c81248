//! Benchmarks for LEB128 variable-length integers.
//!
//! Covers the single-byte fast case, the maximum-length case and zigzag-encoded
//! signed values for both the 32-bit and 64-bit encodings.

extern crate binstream;

use binstream::ByteStream;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark encoding a value that fits a single byte.
fn bench_put_var_int_small(c: &mut Criterion) {
    let mut stream = ByteStream::with_capacity(16);

    c.bench_function("varint_put_small", |b| {
        b.iter(|| {
            stream.reset();
            stream.put_unsigned_var_int(black_box(42));
        });
    });
}

/// Benchmark encoding `u32::MAX`, the five byte worst case.
fn bench_put_var_int_max(c: &mut Criterion) {
    let mut stream = ByteStream::with_capacity(16);

    c.bench_function("varint_put_max", |b| {
        b.iter(|| {
            stream.reset();
            stream.put_unsigned_var_int(black_box(u32::MAX));
        });
    });
}

/// Benchmark decoding a zigzag-encoded negative 32-bit value.
fn bench_get_var_int_signed(c: &mut Criterion) {
    let mut stream = ByteStream::new();
    stream.put_var_int(-1_000_000);

    c.bench_function("varint_get_signed", |b| {
        b.iter(|| {
            stream.flip();
            black_box(stream.get_var_int().unwrap())
        });
    });
}

/// Benchmark decoding the ten byte `u64::MAX` encoding.
fn bench_get_var_long_max(c: &mut Criterion) {
    let mut stream = ByteStream::new();
    stream.put_unsigned_var_long(u64::MAX);

    c.bench_function("varlong_get_max", |b| {
        b.iter(|| {
            stream.flip();
            black_box(stream.get_unsigned_var_long().unwrap())
        });
    });
}

/// Benchmark rejecting an unterminated sequence.
fn bench_get_var_int_too_long(c: &mut Criterion) {
    let mut stream = ByteStream::from_bytes(&[0x80; 8]);

    c.bench_function("varint_get_too_long", |b| {
        b.iter(|| black_box(stream.get_unsigned_var_int().is_err()));
    });
}

criterion_group!(
    benches,
    // Encoding
    bench_put_var_int_small,
    bench_put_var_int_max,
    // Decoding
    bench_get_var_int_signed,
    bench_get_var_long_max,
    bench_get_var_int_too_long,
);
criterion_main!(benches);
