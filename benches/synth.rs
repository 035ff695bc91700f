#[macro_use] extern crate criterion;
extern crate fixedfloat;

use criterion::{black_box, Criterion};

use fixedfloat::{bit_count, top_set_bit, FixedPoint, FloatBits};

fn bits(c: &mut Criterion) {
    c.bench_function("bit_count", |b| {
        b.iter(|| {
            for w in 1u32..1024 {
                black_box(bit_count(black_box(w.wrapping_mul(0x9E37_79B9))));
            }
        })
    });
    c.bench_function("top_set_bit", |b| {
        b.iter(|| {
            for w in 1u32..1024 {
                black_box(top_set_bit(black_box(w)));
            }
        })
    });
}

fn synth(c: &mut Criterion) {
    c.bench_function("set_bits", |b| {
        b.iter(|| {
            let mut f = FloatBits::new();
            for m in 1u32..1024 {
                f.set_bits(m & 1 == 0, 4, black_box(m));
                black_box(f.value());
            }
        })
    });
}

fn fixed(c: &mut Criterion) {
    c.bench_function("fixed_mul", |b| {
        b.iter(|| {
            let mut acc = FixedPoint::<8>::new(1.0);
            let step = FixedPoint::<8>::new(1.01);
            for _ in 0..1024 {
                acc *= black_box(step);
            }
            black_box(acc.bits())
        })
    });
}

criterion_group!(benches, bits, synth, fixed);
criterion_main!(benches);
