use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use utf8str::{CharIndex, from_str, from_utf16, to_string, to_uppercase};

fn bench_codec(c: &mut Criterion) {
    let sample = "Foo \u{00a9} bar \u{1d306} baz \u{2603} qux ".repeat(256);
    let bytes = from_str(&sample);
    let units: Vec<u16> = sample.encode_utf16().collect();

    c.bench_function("encode_utf16", |b| {
        b.iter(|| from_utf16(black_box(&units)).unwrap());
    });
    c.bench_function("decode", |b| {
        b.iter(|| to_string(black_box(&bytes)).unwrap());
    });
    c.bench_function("build_index", |b| {
        b.iter(|| CharIndex::build(black_box(&bytes)).unwrap());
    });
    c.bench_function("uppercase", |b| {
        b.iter(|| to_uppercase(black_box(&bytes)).unwrap());
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
