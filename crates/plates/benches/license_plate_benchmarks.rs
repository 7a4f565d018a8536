use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use platekit_plates::{
    DefaultLicensePlateHandler, FrenchLicensePlateHandler, LicensePlate, LicensePlateCountry,
    LicensePlateHandler,
};

const FRENCH_INPUTS: [&str; 4] = ["AA-001-AB", "aa  001 -ab", "2928 tw 74", "AA-0001-AB"];

fn bench_handlers(c: &mut Criterion) {
    let mut group = c.benchmark_group("handlers");

    for input in FRENCH_INPUTS {
        group.bench_with_input(BenchmarkId::new("french_normalize", input), input, |b, input| {
            b.iter(|| FrenchLicensePlateHandler.normalize(black_box(input)))
        });
        group.bench_with_input(BenchmarkId::new("french_validate", input), input, |b, input| {
            b.iter(|| FrenchLicensePlateHandler.validate(black_box(input)))
        });
    }

    group.bench_function("default_validate", |b| {
        b.iter(|| DefaultLicensePlateHandler.validate(black_box("ka ab 123")))
    });

    group.finish();
}

fn bench_memoized_validity(c: &mut Criterion) {
    let mut group = c.benchmark_group("license_plate");

    group.bench_function("fresh_is_valid", |b| {
        b.iter(|| {
            let plate = LicensePlate::for_value(black_box("2928 tw 74"))
                .unwrap()
                .with_country(LicensePlateCountry::France);
            plate.is_valid()
        })
    });

    let cached = LicensePlate::for_value("2928 tw 74")
        .unwrap()
        .with_country(LicensePlateCountry::France);
    cached.is_valid();
    group.bench_function("cached_is_valid", |b| b.iter(|| black_box(&cached).is_valid()));

    group.finish();
}

criterion_group!(benches, bench_handlers, bench_memoized_validity);
criterion_main!(benches);
