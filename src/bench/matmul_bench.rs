//! Criterion benchmarks comparing the two loop orders.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use imatmul::{matmul_ijk, matmul_ikj};

fn bench_loop_orders(cr: &mut Criterion) {
    for &size in &[64, 128, 256] {
        let a: Vec<i32> = (0..size * size).map(|i| (i % 100) as i32).collect();
        let b: Vec<i32> = (0..size * size).map(|i| (i % 100) as i32).collect();
        let mut c = vec![0i32; size * size];

        cr.bench_function(&format!("ijk_{size}x{size}"), |bench| {
            bench.iter(|| {
                matmul_ijk(black_box(&a), black_box(&b), &mut c, size, size, size);
            })
        });

        cr.bench_function(&format!("ikj_{size}x{size}"), |bench| {
            bench.iter(|| {
                matmul_ikj(black_box(&a), black_box(&b), &mut c, size, size, size);
            })
        });
    }
}

criterion_group!(benches, bench_loop_orders);
criterion_main!(benches);
