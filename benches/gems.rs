use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bitgems::gems::{self, arith, color};
use bitgems::{ManualClock, SpeedTest};

fn bench_idioms(c: &mut Criterion) {
    let mut group = c.benchmark_group("idioms");
    let values: Vec<u32> = (0..4_096u32).map(|n| n.wrapping_mul(2_654_435_761)).collect();

    group.bench_function("modulo", |b| {
        b.iter(|| values.iter().map(|&n| arith::modulo(black_box(n), 4)).sum::<u32>());
    });
    group.bench_function("modulo_pow2", |b| {
        b.iter(|| values.iter().map(|&n| arith::modulo_pow2(black_box(n), 4)).sum::<u32>());
    });
    group.bench_function("unpack_rgb24_bytes", |b| {
        b.iter(|| {
            for &n in &values {
                black_box(color::unpack_rgb24_bytes(black_box(n & 0x00FF_FFFF)));
            }
        });
    });
    group.bench_function("unpack_rgb24", |b| {
        b.iter(|| {
            for &n in &values {
                black_box(color::unpack_rgb24(black_box(n & 0x00FF_FFFF)));
            }
        });
    });
    group.finish();
}

fn bench_harness_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("speed_test");
    group.sample_size(20);
    group.bench_function("empty_workloads", |b| {
        b.iter(|| {
            // Scripted clock keeps every run computable while measuring only harness cost.
            let clock = ManualClock::new();
            let handle = clock.clone();
            let result = SpeedTest::new()
                .with_clock(clock)
                .compare(
                    || handle.advance(std::time::Duration::from_nanos(2)),
                    || handle.advance(std::time::Duration::from_nanos(1)),
                );
            black_box(result.map(|r| r.percent_gain).unwrap_or_default())
        });
    });
    group.bench_function("gem_mod_pow2_small", |b| {
        let gem = gems::find("mod-pow2").expect("catalogued");
        b.iter(|| {
            let mut pair = gem.workloads(1_024, gems::DEFAULT_SEED);
            let result = SpeedTest::new()
                .trials(2)
                .compare_workloads(&mut pair.baseline, &mut pair.candidate);
            black_box(result.is_ok())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_idioms, bench_harness_overhead);
criterion_main!(benches);
