use criterion::{BenchmarkId, Criterion};
use librequests::url::{join_url, normalize_path, split_authority, split_url};
use std::hint::black_box;

const BASE: &str = "http://a/b/c/d;p?q";

pub fn bench_join(c: &mut Criterion) {
    let mut group = c.benchmark_group("join");
    for reference in ["g", "../../../g", "?y", "//g/x", "https://other.example/"] {
        group.bench_with_input(BenchmarkId::from_parameter(reference), reference, |b, reference| {
            b.iter(|| join_url(black_box(BASE), black_box(reference)));
        });
    }
    group.bench_function("normalize_path", |b| {
        b.iter(|| normalize_path(black_box("/a/./b/../c//d/../../e/")));
    });
    group.finish();
}

pub fn bench_split(c: &mut Criterion) {
    c.bench_function("split_url_and_authority", |b| {
        b.iter(|| {
            let parts = split_url(black_box("https://user:pass@[::1]:8443/a/b?x=1#f"), "", true);
            split_authority(parts.authority).port
        });
    });
}
