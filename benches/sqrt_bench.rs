use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hello_wasm_bridge::sqrt::int_sqrt;
use hello_wasm_bridge::{Bridge, NegativeInputPolicy};

fn bench_int_sqrt(c: &mut Criterion) {
    c.bench_function("int_sqrt small", |b| {
        b.iter(|| int_sqrt(black_box(36), NegativeInputPolicy::Reject))
    });

    c.bench_function("int_sqrt i32::MAX", |b| {
        b.iter(|| int_sqrt(black_box(i32::MAX), NegativeInputPolicy::Reject))
    });

    c.bench_function("int_sqrt negative rejected", |b| {
        b.iter(|| int_sqrt(black_box(-1), NegativeInputPolicy::Reject))
    });
}

fn bench_greeting(c: &mut Criterion) {
    let bridge = Bridge::default();
    let mut sink = Vec::with_capacity(64);

    c.bench_function("hello_to buffer", |b| {
        b.iter(|| {
            sink.clear();
            bridge.hello_to(&mut sink, black_box(Some("Gabi")))
        })
    });
}

criterion_group!(benches, bench_int_sqrt, bench_greeting);
criterion_main!(benches);
