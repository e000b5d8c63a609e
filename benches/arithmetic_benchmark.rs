// ============================================================================
// Bignum Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Multiplication - Schoolbook vs Karatsuba around the threshold
// 2. Division - Single-word fast path and Algorithm D
// 3. String I/O - Chunked parse and format
// 4. Math Extensions - sqrt, gcd, factorial
//
// Architecture Notes:
// - Karatsuba takes over at KARATSUBA_THRESHOLD words (~2560 bits)
// ============================================================================

use bignum_engine::integer::KARATSUBA_THRESHOLD;
use bignum_engine::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Deterministic operand with roughly `words` 32-bit words.
fn operand(words: usize, seed: u64) -> BigInteger {
    let mut state = seed;
    let mut digits = String::with_capacity(words * 10);
    digits.push('9');
    while digits.len() < words * 32 * 30103 / 100000 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        digits.push_str(&format!("{:09}", (state >> 33) % 1_000_000_000));
    }
    digits.parse().expect("generated digits are valid")
}

// ============================================================================
// Multiplication Benchmarks
// ============================================================================

fn benchmark_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for words in [8, KARATSUBA_THRESHOLD / 2, KARATSUBA_THRESHOLD, 4 * KARATSUBA_THRESHOLD] {
        let a = operand(words, 1);
        let b = operand(words, 2);
        group.bench_with_input(BenchmarkId::new("words", words), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a * b));
        });
    }

    group.finish();
}

// ============================================================================
// Division Benchmarks
// ============================================================================

fn benchmark_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("divide");

    let dividend = operand(200, 3);
    let single = BigInteger::from(1_000_000_007u64);
    group.bench_function("single_word", |bench| {
        bench.iter(|| black_box(dividend.div_rem(&single)));
    });

    for words in [2, 50, 150] {
        let divisor = operand(words, 4);
        group.bench_with_input(BenchmarkId::new("knuth_d", words), &divisor, |bench, divisor| {
            bench.iter(|| black_box(dividend.div_rem(divisor)));
        });
    }

    group.finish();
}

// ============================================================================
// String I/O Benchmarks
// ============================================================================

fn benchmark_string_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_io");

    for words in [10, 100, 1000] {
        let value = operand(words, 5);
        let text = value.to_string();
        group.bench_with_input(BenchmarkId::new("parse", words), &text, |bench, text| {
            bench.iter(|| black_box(text.parse::<BigInteger>()));
        });
        group.bench_with_input(BenchmarkId::new("format", words), &value, |bench, value| {
            bench.iter(|| black_box(value.to_string()));
        });
    }

    group.finish();
}

// ============================================================================
// Math Extension Benchmarks
// ============================================================================

fn benchmark_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("math");

    let two = BigDecimal::from(2);
    for scale in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("sqrt", scale), &scale, |bench, &scale| {
            bench.iter(|| black_box(math::sqrt(&two, scale)));
        });
    }

    let a = operand(64, 6);
    let b = operand(48, 7);
    group.bench_function("gcd", |bench| {
        bench.iter(|| black_box(math::gcd(&a, &b)));
    });

    let n = BigInteger::from(500);
    group.bench_function("factorial_500", |bench| {
        bench.iter(|| black_box(math::factorial(&n)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_multiplication,
    benchmark_division,
    benchmark_string_io,
    benchmark_math
);

criterion_main!(benches);
