use criterion::{black_box, Criterion};
use crate::common::samples::CURVES;

pub fn recompute(c: &mut Criterion) {
    c.bench_function("recompute", |b| {
        for curve in CURVES.iter() {
            let mut curve = curve.clone();
            b.iter(|| black_box(curve.recompute()))
        }
    });
}

pub fn eval(c: &mut Criterion) {
    c.bench_function("eval", |b| {
        for curve in CURVES.iter() {
            b.iter(|| black_box(curve.evaluate(0.5)))
        }
    });
}

pub fn curvature(c: &mut Criterion) {
    c.bench_function("curvature", |b| {
        for curve in CURVES.iter() {
            b.iter(|| black_box(curve.curvature_vector_at(0.5)))
        }
    });
}

pub fn all(c: &mut Criterion) {
    recompute(c);
    eval(c);
    curvature(c);
}
