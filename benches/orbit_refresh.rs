use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use keplerview::config::ViewConfig;
use keplerview::controller::OrbitCurveController;
use keplerview::ellipse::generate;
use keplerview::orbital_elements::OrbitalElements;
use keplerview::scene::Scene;

/// Random elements inside the control ranges.
fn random_elements(rng: &mut StdRng) -> OrbitalElements {
    OrbitalElements {
        semi_major_axis: rng.random_range(1.0..=20.0),
        eccentricity: rng.random_range(0.0..=0.99),
        inclination: rng.random_range(0.0..=180.0),
        periapsis_argument: rng.random_range(0.0..360.0),
        ascending_node_longitude: rng.random_range(0.0..360.0),
    }
}

fn bench_generate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    c.bench_function("ellipse/generate_100", |b| {
        b.iter_batched(
            || random_elements(&mut rng),
            |el| black_box(generate(el.semi_major_axis, el.eccentricity, 100)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_refresh(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let mut scene = Scene::new();
    let mut ctrl = OrbitCurveController::new(&ViewConfig::default()).unwrap();
    ctrl.build(&mut scene, &OrbitalElements::default()).unwrap();

    c.bench_function("controller/refresh_100", |b| {
        b.iter_batched(
            || random_elements(&mut rng),
            |el| ctrl.refresh(black_box(&mut scene), &el).unwrap(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_generate, bench_refresh);
criterion_main!(benches);
