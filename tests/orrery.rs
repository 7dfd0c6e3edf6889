use std::f64::consts::{FRAC_PI_2, PI};
use std::path::PathBuf;

use approx::assert_abs_diff_eq;
use orrery::{BodyConfig, Error, OrbitKind, Orrery, SimulationClock, SimulationConfig, SystemConfig};

fn bundled_system() -> SystemConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("planets.toml");
    SystemConfig::load(path).unwrap()
}

#[test]
fn bundled_system_loads_every_body() {
    let (orrery, rejected) = Orrery::from_config(&bundled_system()).unwrap();
    assert!(rejected.is_empty());
    assert_eq!(orrery.len(), 7);

    let moon = orrery.find("Moon").unwrap();
    assert_eq!(orrery.parent(moon), orrery.find("Earth"));
    let phobos = orrery.body(orrery.find("Phobos").unwrap()).unwrap();
    assert_eq!(phobos.elements().kind(), OrbitKind::Circular);
}

#[test]
fn bundled_system_stays_finite_over_a_long_run() {
    let (mut orrery, _) = Orrery::from_config(&bundled_system()).unwrap();
    let mut clock = SimulationClock::new();
    clock.set_rate(500.0);

    for _ in 0..2_000 {
        let elapsed = clock.advance(1.0 / 60.0);
        for frame in orrery.tick(elapsed) {
            assert!(!frame.diverged);
            assert!(frame.world_position.is_finite());
        }
    }
}

#[test]
fn eccentric_scenario_at_time_zero() {
    let mut orrery = Orrery::new(SimulationConfig::default()).unwrap();
    let id = orrery
        .add_body(&BodyConfig::new("Eccentric", 10.0, 100.0).with_eccentricity(0.2).with_phase_offset(0.0))
        .unwrap();

    let body = orrery.body(id).unwrap();
    assert_abs_diff_eq!(body.elements().semi_latus_rectum(), 9.6, epsilon = 1e-12);
    assert_eq!(body.true_anomaly(0.0, orrery.simulation()).unwrap(), 0.0);

    let frame = orrery.tick(0.0)[0];
    assert_abs_diff_eq!(frame.world_position.x, 8.0, epsilon = 1e-12);
    assert_abs_diff_eq!(frame.world_position.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(frame.world_position.z, 0.0, epsilon = 1e-12);
}

#[test]
fn circular_scenario_at_quarter_sweep() {
    let mut orrery = Orrery::new(SimulationConfig::default()).unwrap();
    orrery
        .add_body(&BodyConfig::new("Circle", 5.0, 365.0).with_daylength(24.0).with_phase_offset(0.0))
        .unwrap();

    // 16π t / (365 * 24) = π/2
    let elapsed = FRAC_PI_2 * 365.0 * 24.0 / (16.0 * PI);
    let frame = orrery.tick(elapsed)[0];
    assert_abs_diff_eq!(frame.local.orbit_sweep.unwrap(), FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(frame.world_position.x, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(frame.world_position.z, 0.0, epsilon = 1e-9);
}

#[test]
fn dropped_frames_do_not_change_the_physics() {
    let system = bundled_system();
    let (mut smooth, _) = Orrery::from_config(&system).unwrap();
    let (mut stalled, _) = Orrery::from_config(&system).unwrap();

    let mut clock = SimulationClock::new();
    for _ in 0..600 {
        smooth.tick(clock.advance(1.0 / 60.0));
    }

    let target = clock.elapsed();
    assert_eq!(smooth.tick(target), stalled.tick(target));
}

#[test]
fn malformed_body_is_kept_out_of_the_scene() {
    let config = SystemConfig::from_toml_str(
        r#"
        [[body]]
        name = "Good"
        distance_km = 1.0
        period_days = 10.0

        [[body]]
        name = "Hyperbolic"
        distance_km = 1.0
        eccentricity = 1.3
        period_days = 10.0
        "#,
    )
    .unwrap();

    let (mut orrery, rejected) = Orrery::from_config(&config).unwrap();
    assert_eq!(orrery.len(), 1);
    assert!(matches!(
        rejected.as_slice(),
        [Error::Configuration { body, .. }] if body == "Hyperbolic"
    ));
    assert_eq!(orrery.tick(1.0).len(), 1);
}

#[test]
fn invalid_simulation_settings_fail_fast() {
    let config = SystemConfig::from_toml_str("[simulation]\ntime_factor = -1.0\n").unwrap();
    assert!(matches!(Orrery::from_config(&config), Err(Error::Simulation(_))));
}
