use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_inventory::Inventory;

fn seeded(size: usize) -> Inventory {
    let mut inv = Inventory::new();
    for i in 0..size {
        let code = format!("P-{i:05}");
        let name = if i % 10 == 0 { "Mouse inalámbrico" } else { "Cable" };
        inv.create(code.as_str(), name, "Accesorio de oficina", 1990.0, (i % 50) as i64);
    }
    inv
}

fn bench_find_by_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_text");
    for size in [100usize, 1_000, 5_000] {
        let inv = seeded(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inv, |b, inv| {
            b.iter(|| black_box(inv.find_by_text(black_box("INALÁMBRICO"))))
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    for size in [100usize, 1_000, 5_000] {
        let inv = seeded(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &inv, |b, inv| {
            b.iter(|| black_box(inv.report()))
        });
    }
    group.finish();
}

fn bench_create_delete(c: &mut Criterion) {
    c.bench_function("create_then_delete", |b| {
        let mut inv = seeded(1_000);
        b.iter(|| {
            inv.create("BENCH", "Bench", "", 1.0, 1);
            inv.delete("BENCH");
        })
    });
}

criterion_group!(benches, bench_find_by_text, bench_report, bench_create_delete);
criterion_main!(benches);
