use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tclass::{DataType, Discrete};

fn criterion_benchmark(c: &mut Criterion) {
    let values: Vec<String> = (0..32).map(|i| format!("class{}", i)).collect();
    let codes: Vec<f32> = (0..1024).map(|i| (i * 7 % 32) as f32).collect();

    let mut group = c.benchmark_group("distance");
    group.bench_function("simple", |b| {
        let dt = Discrete::with_values(&values).unwrap();
        b.iter(|| {
            let mut total = 0.0;
            for pair in codes.windows(2) {
                total += dt.distance(black_box(pair[0]), black_box(pair[1])).unwrap();
            }
            total
        })
    });
    group.bench_function("complex", |b| {
        let mut dt = Discrete::with_values(&values).unwrap();
        dt.set_param("costmetric", "complex").unwrap();
        dt.set_param("cost", "class0 class7 5").unwrap();
        b.iter(|| {
            let mut total = 0.0;
            for pair in codes.windows(2) {
                total += dt.distance(black_box(pair[0]), black_box(pair[1])).unwrap();
            }
            total
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
