use quickmath::{bits, int};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_inv_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("inv_sqrt");
    group.bench_function("approximate", |b| {
        b.iter(|| bits::inv_sqrt_float(black_box(2.0)))
    });
    group.bench_function("exact", |b| b.iter(|| 1.0 / f32::sqrt(black_box(2.0))));
    group.finish();
}

fn bench_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");
    group.bench_function("approximate", |b| b.iter(|| bits::sqrt_float(black_box(2.0))));
    group.bench_function("exact", |b| b.iter(|| f32::sqrt(black_box(2.0))));
    group.finish();
}

fn bench_exp_ln(c: &mut Criterion) {
    let mut group = c.benchmark_group("exp_ln");
    group.bench_function("approximate exp", |b| {
        b.iter(|| bits::exp_double(black_box(3.0)))
    });
    group.bench_function("exact exp", |b| b.iter(|| f64::exp(black_box(3.0))));
    group.bench_function("approximate ln", |b| b.iter(|| bits::ln_double(black_box(3.0))));
    group.bench_function("exact ln", |b| b.iter(|| f64::ln(black_box(3.0))));
    group.finish();
}

fn bench_pow(c: &mut Criterion) {
    let mut group = c.benchmark_group("pow");
    group.bench_function("approximate", |b| {
        b.iter(|| bits::pow_double(black_box(3.0), black_box(1.7)))
    });
    group.bench_function("exact", |b| {
        b.iter(|| f64::powf(black_box(3.0), black_box(1.7)))
    });
    group.finish();
}

fn bench_int(c: &mut Criterion) {
    let mut group = c.benchmark_group("int");
    group.bench_function("abs branchless", |b| b.iter(|| int::abs_int(black_box(-17))));
    group.bench_function("abs exact", |b| b.iter(|| i32::wrapping_abs(black_box(-17))));
    group.bench_function("log2 table", |b| {
        b.iter(|| int::fast_log2_int(black_box(123_456)))
    });
    group.bench_function("log2 leading zeros", |b| {
        b.iter(|| 31 - i32::leading_zeros(black_box(123_456)) as i32)
    });
    group.finish();
}

criterion_group!(benches, bench_inv_sqrt, bench_sqrt, bench_exp_ln, bench_pow, bench_int);
criterion_main!(benches);
