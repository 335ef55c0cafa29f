//! Criterion benchmarks for the pricing kernel.
//!
//! Measures the normal CDF approximation and full call/put pricing to
//! characterise single-call latency, the figure that matters to a host
//! invoking these functions cell-by-cell.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xlpricer_models::analytical::distributions::norm_cdf;
use xlpricer_models::analytical::BlackScholes;

fn bench_norm_cdf(c: &mut Criterion) {
    let mut group = c.benchmark_group("norm_cdf");

    group.bench_function("central", |b| {
        b.iter(|| norm_cdf(black_box(0.5_f64)));
    });

    group.bench_function("tail", |b| {
        b.iter(|| norm_cdf(black_box(-6.5_f64)));
    });

    group.bench_function("saturated", |b| {
        b.iter(|| norm_cdf(black_box(9.0_f64)));
    });

    group.finish();
}

fn bench_black_scholes(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes");

    let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

    group.bench_function("price_call", |b| {
        b.iter(|| bs.price_call(black_box(100.0), black_box(1.0)));
    });

    group.bench_function("price_put", |b| {
        b.iter(|| bs.price_put(black_box(100.0), black_box(1.0)));
    });

    // Strike sweep, the shape of a host recalculating an option chain
    let strikes: Vec<f64> = (50..150).map(|k| k as f64).collect();
    group.bench_function("price_call_chain_100", |b| {
        b.iter(|| {
            for &strike in &strikes {
                black_box(bs.price_call(black_box(strike), black_box(1.0)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_norm_cdf, bench_black_scholes);
criterion_main!(benches);
