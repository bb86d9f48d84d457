//! Benchmark suite for the minimization pipeline
//!
//! Covers parsing, table construction, and minimization over functions that
//! exercise the interesting algorithm paths: heavy merging, no merging at
//! all (parity), and the covering search (cyclic cover).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quine_logic::{minimize, BoolFunction};

const FUNCTIONS: &[(&str, usize, &str)] = &[
    ("absorbed2", 2, "ab + ab'"),
    ("xor2", 2, "a'b + ab'"),
    ("cyclic3", 3, "a'b'c' + a'b'c + a'bc' + ab'c + abc' + abc"),
    ("majority4", 4, "ab + ac + ad + bc + bd + cd"),
    (
        "parity4",
        4,
        "a'b'c'd + a'b'cd' + a'bc'd' + a'bcd + ab'c'd' + ab'cd + abc'd + abcd'",
    ),
];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (name, num_vars, expression) in FUNCTIONS {
        group.bench_with_input(BenchmarkId::from_parameter(name), expression, |b, expr| {
            b.iter(|| {
                let function = BoolFunction::new(*num_vars, black_box(expr)).unwrap();
                black_box(function);
            });
        });
    }
    group.finish();
}

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for (name, num_vars, expression) in FUNCTIONS {
        let table = BoolFunction::new(*num_vars, expression)
            .unwrap()
            .truth_table()
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &table, |b, table| {
            b.iter(|| {
                let result = minimize(black_box(table));
                black_box(result);
            });
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    for (name, num_vars, expression) in FUNCTIONS {
        group.bench_with_input(BenchmarkId::from_parameter(name), expression, |b, expr| {
            b.iter(|| {
                let function = BoolFunction::new(*num_vars, black_box(expr)).unwrap();
                let result = function.minimize().unwrap();
                black_box(result.expressions());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_minimize, bench_full_pipeline);
criterion_main!(benches);
