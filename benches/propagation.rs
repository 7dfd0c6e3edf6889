use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use orrery::kepler::{calculate_eccentric_anomaly, calculate_true_anomaly};
use orrery::{BodyConfig, Orrery, SimulationConfig, SolverConfig};

pub fn bench_solver<T>(c: &mut Criterion, mean_anomaly: T, eccentricity: T)
where
    T: num_traits::Float + num_traits::FloatConst,
{
    let solver = SolverConfig::default();
    let mut group = c.benchmark_group(std::any::type_name::<T>());
    group.throughput(Throughput::Elements(1));

    group.bench_function("eccentric_anomaly", |b| {
        b.iter(|| {
            calculate_eccentric_anomaly::<T>(
                black_box(eccentricity),
                black_box(mean_anomaly),
                &solver,
            )
        })
    });

    group.bench_function("true_anomaly", |b| {
        b.iter(|| {
            calculate_eccentric_anomaly::<T>(black_box(eccentricity), black_box(mean_anomaly), &solver)
                .map(|ea| calculate_true_anomaly(eccentricity, ea))
        })
    });

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_solver::<f32>(c, 0.1, 0.2);
    bench_solver::<f64>(c, 0.1, 0.2);
    bench_solver::<f64>(c, 0.1, 0.95);

    let mut orrery = Orrery::new(SimulationConfig::default()).unwrap();
    for i in 0..1_000 {
        let e = (i % 90) as f64 / 100.0;
        orrery
            .add_body(
                &BodyConfig::new(format!("body-{i}"), 1.0 + i as f64, 10.0 + i as f64)
                    .with_eccentricity(e)
                    .with_orientation(i as f64 % 30.0, i as f64, 2.0 * i as f64)
                    .with_daylength(24.0),
            )
            .unwrap();
    }

    let mut group = c.benchmark_group("orrery");
    group.throughput(Throughput::Elements(orrery.len() as _));
    group.bench_function("tick_1_000_bodies", |b| {
        let mut elapsed = 0.0;
        b.iter(|| {
            elapsed += 1.0 / 60.0;
            orrery.tick(black_box(elapsed))
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
