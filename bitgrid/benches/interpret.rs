use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bitgrid::numeric::interpret;
use bitgrid::{BitDisplay, BitStore, BitWidth, Endianness, GrowthDirection};

fn bench_interpret(c: &mut Criterion) {
    let mut store = BitStore::new(128);
    for i in (0..128).step_by(3) {
        store.toggle(i);
    }

    c.bench_function("interpret_128_big", |b| {
        b.iter(|| interpret(black_box(&store), Endianness::Big))
    });
    c.bench_function("interpret_128_little", |b| {
        b.iter(|| interpret(black_box(&store), Endianness::Little))
    });
}

fn bench_grid(c: &mut Criterion) {
    let mut display = BitDisplay::new();
    display.set_bit_width(BitWidth::W128);
    display.set_bits_per_row(16).unwrap();
    display.set_growth_direction(GrowthDirection::Column);

    c.bench_function("grid_128x16_column", |b| b.iter(|| black_box(&display).grid()));
    c.bench_function("toggle_and_interpret_128", |b| {
        b.iter(|| {
            display.toggle_cell(3, 5).unwrap();
            display.interpretation()
        })
    });
}

criterion_group!(benches, bench_interpret, bench_grid);
criterion_main!(benches);
