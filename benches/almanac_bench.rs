use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lunar_almanac::convert::{lunar_to_solar, solar_to_lunar};
use lunar_almanac::{Almanac, LunarDate};

fn convert_bench(c: &mut Criterion) {
    let lunar = LunarDate::new(2099, 12, 1, false).expect("valid lunar date");

    let mut group = c.benchmark_group("convert");
    group.bench_function("solar_to_lunar_2099", |b| {
        b.iter(|| solar_to_lunar(black_box(47_500)).expect("in range"))
    });
    group.bench_function("lunar_to_solar_2099", |b| {
        b.iter(|| lunar_to_solar(black_box(&lunar)))
    });
    group.finish();
}

fn almanac_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("almanac");
    group.bench_function("resolve_and_annotate", |b| {
        b.iter(|| {
            let a = Almanac::from_solar(black_box(2024), black_box(2), black_box(10))
                .expect("in range");
            (a.solar_term(), a.lunar_holiday(), a.five_elements(), a.fetus_god())
        })
    });
    group.finish();
}

criterion_group!(benches, convert_bench, almanac_bench);
criterion_main!(benches);
