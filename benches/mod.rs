use criterion::{criterion_group, criterion_main};

mod network;
mod url;

criterion_group!(
    benches,
    url::percent::bench_quote,
    url::percent::bench_unquote,
    url::compose::bench_join,
    url::compose::bench_split,
    network::application::http::client::bench_get
);
criterion_main!(benches);
