use criterion::{BenchmarkId, Criterion, Throughput};
use librequests::url::{SafeSet, quote, quote_plus, unquote, unquote_plus};
use std::hint::black_box;

const INPUTS: &[(&str, &str)] = &[
    ("clean", "/api/v1/devices/sensor-7/readings"),
    ("spaces", "temperature in the living room"),
    ("mixed", "name=Zoë & Co./café?x=1#frag"),
];

pub fn bench_quote(c: &mut Criterion) {
    let mut group = c.benchmark_group("quote");
    for (name, input) in INPUTS {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("quote", name), input, |b, input| {
            b.iter(|| quote(black_box(input), &SafeSet::PATH));
        });
        group.bench_with_input(BenchmarkId::new("quote_plus", name), input, |b, input| {
            b.iter(|| quote_plus(black_box(input), &SafeSet::UNRESERVED));
        });
    }
    group.finish();
}

pub fn bench_unquote(c: &mut Criterion) {
    let mut group = c.benchmark_group("unquote");
    for (name, input) in INPUTS {
        let encoded = quote_plus(input, &SafeSet::NONE).into_owned();
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_with_input(BenchmarkId::new("unquote", name), input, |b, input| {
            b.iter(|| unquote(black_box(input)));
        });
        group.bench_with_input(BenchmarkId::new("unquote_plus", name), &encoded, |b, encoded| {
            b.iter(|| unquote_plus(black_box(encoded)));
        });
    }
    group.finish();
}
