use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rgb::{RGB, RGB8};
use shadex::{convert, describe_color, Explorer, HexColor};

fn benchmark_describe(c: &mut Criterion) {
    let base = HexColor::new(0x33, 0x66, 0xcc);
    c.bench_function("describe_color", |b| {
        b.iter(|| describe_color(black_box(&base)))
    });
    c.bench_function("rgb_to_hsl", |b| {
        b.iter(|| convert::rgb_to_hsl(black_box(RGB8::new(200, 120, 7))))
    });
}

fn benchmark_palette(c: &mut Criterion) {
    let explorer: Explorer = Explorer::default();
    let samples: Vec<RGB<i32>> = (0 .. 6).map(|i| RGB::new(40 * i, 255 - 30 * i, 90)).collect();
    c.bench_function("extract_palette", |b| {
        b.iter(|| explorer.extract_palette(black_box(&samples)))
    });
}

criterion_group!(benches, benchmark_describe, benchmark_palette);
criterion_main!(benches);
