// Modified from https://github.com/atbentley/bevy_mod_orbits
// MIT licensed by atbentley <Andrew Bentley>

//! Kepler's equation: mean anomaly from elapsed time, eccentric anomaly by
//! Newton-Raphson, true anomaly from eccentric anomaly.

use std::f64::consts::TAU;

use num_traits::{Float, FloatConst};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const HOURS_PER_DAY: f64 = 24.0;

/// From this eccentricity up, Newton's method starts at `E = π` rather than `E = M`.
const HIGH_ECCENTRICITY: f64 = 0.8;

/// Newton-Raphson stopping rules.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Stop once a Newton step is smaller than this (radians).
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::Simulation(format!(
                "solver tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::Simulation(
                "solver needs at least one iteration".to_string(),
            ));
        }
        Ok(())
    }
}

/// Radians of mean anomaly per unit of `elapsed * mean_motion`, for a period in days.
#[inline]
pub fn calculate_mean_motion(time_factor: f64, period_days: f64) -> f64 {
    time_factor / (period_days * HOURS_PER_DAY)
}

/// `M = n * ((t * n) mod (period * 24)) + phase`, wrapped into `[0, 2π)`.
#[inline]
pub fn calculate_mean_anomaly(
    mean_motion: f64,
    period_days: f64,
    elapsed: f64,
    phase_offset: f64,
) -> f64 {
    let wrapped = (elapsed * mean_motion).rem_euclid(period_days * HOURS_PER_DAY);
    (mean_motion * wrapped + phase_offset).rem_euclid(TAU)
}

/// Solves `E - e sin(E) = M` for `E`.
///
/// Returns the eccentric anomaly produced by the step that met the tolerance,
/// or [`Error::NumericalDivergence`] once `max_iterations` steps have been taken.
#[inline]
pub fn calculate_eccentric_anomaly<T: Float + FloatConst>(
    eccentricity: T,
    mean_anomaly: T,
    solver: &SolverConfig,
) -> Result<T> {
    let e = eccentricity;
    let ma = mean_anomaly;
    let tolerance = T::from(solver.tolerance).unwrap_or_else(T::epsilon);

    let mut ea = if e.to_f64().is_some_and(|e| e >= HIGH_ECCENTRICITY) {
        T::PI()
    } else {
        ma
    };

    for _ in 0..solver.max_iterations {
        let delta = (ea - e * ea.sin() - ma) / (T::one() - e * ea.cos());
        ea = ea - delta;
        if delta.abs() < tolerance {
            return Ok(ea);
        }
    }

    Err(Error::NumericalDivergence {
        eccentricity: e.to_f64().unwrap_or(f64::NAN),
        mean_anomaly: ma.to_f64().unwrap_or(f64::NAN),
        iterations: solver.max_iterations,
    })
}

/// `ν = 2 atan(sqrt((1 + e) / (1 - e)) tan(E / 2))`, normalized into `(-π, π]`.
#[inline]
pub fn calculate_true_anomaly<T: Float + FloatConst>(eccentricity: T, eccentric_anomaly: T) -> T {
    let e = eccentricity;
    let two = T::one() + T::one();
    let half = ((T::one() + e) / (T::one() - e)).sqrt() * (eccentric_anomaly / two).tan();
    normalize_angle(two * half.atan())
}

/// Wraps an angle into `(-π, π]`.
#[inline]
pub fn normalize_angle<T: Float + FloatConst>(angle: T) -> T {
    let pi = T::PI();
    let tau = pi + pi;
    let a = angle % tau;
    if a > pi {
        a - tau
    } else if a <= -pi {
        a + tau
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn residual(e: f64, ea: f64, ma: f64) -> f64 {
        (ea - e * ea.sin() - ma).abs()
    }

    #[test]
    fn circular_orbit_is_identity() {
        let solver = SolverConfig::default();
        let m = PI / 4.0;
        let ea = calculate_eccentric_anomaly(0.0, m, &solver).unwrap();
        assert_abs_diff_eq!(ea, m, epsilon = 1e-10);
        assert_abs_diff_eq!(calculate_true_anomaly(0.0, ea), m, epsilon = 1e-10);
    }

    #[test]
    fn apsides_are_fixed_points() {
        let solver = SolverConfig::default();
        assert_abs_diff_eq!(
            calculate_eccentric_anomaly(0.3, 0.0, &solver).unwrap(),
            0.0,
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(
            calculate_eccentric_anomaly(0.3, PI, &solver).unwrap(),
            PI,
            epsilon = 1e-6
        );
    }

    #[test]
    fn kepler_equation_holds_across_eccentricities() {
        let solver = SolverConfig::default();
        for ei in 0..=99 {
            let e = ei as f64 / 100.0;
            for mi in 0..64 {
                let m = mi as f64 / 64.0 * TAU;
                let ea = calculate_eccentric_anomaly(e, m, &solver).unwrap();
                assert!(
                    residual(e, ea, m) < 1e-4,
                    "e = {e}, M = {m}, E = {ea}"
                );
            }
        }
    }

    #[test]
    fn returns_the_step_that_met_the_tolerance() {
        // A single step from E0 = M lands inside a coarse tolerance. The
        // refined value must come back, not the seed.
        let (e, m) = (0.1, 1.0);
        let solver = SolverConfig {
            tolerance: 0.1,
            max_iterations: 10,
        };
        let expected = m - (m - e * m.sin() - m) / (1.0 - e * m.cos());

        let ea = calculate_eccentric_anomaly(e, m, &solver).unwrap();
        assert_eq!(ea, expected);
        assert!(residual(e, ea, m) < residual(e, m, m));
    }

    #[test]
    fn iteration_bound_reports_divergence() {
        let solver = SolverConfig {
            tolerance: 1e-15,
            max_iterations: 1,
        };
        match calculate_eccentric_anomaly(0.5, 1.0, &solver) {
            Err(Error::NumericalDivergence { iterations, .. }) => assert_eq!(iterations, 1),
            other => panic!("expected divergence, got {other:?}"),
        }
    }

    #[test]
    fn nan_input_diverges_instead_of_hanging() {
        let solver = SolverConfig::default();
        assert!(calculate_eccentric_anomaly(0.5, f64::NAN, &solver).is_err());
    }

    #[test]
    fn true_anomaly_stays_in_range() {
        let solver = SolverConfig::default();
        for e in [0.0, 0.2, 0.5, 0.9, 0.99] {
            for mi in 0..360 {
                let m = (mi as f64).to_radians();
                let ea = calculate_eccentric_anomaly(e, m, &solver).unwrap();
                let nu = calculate_true_anomaly(e, ea);
                assert!(nu > -PI && nu <= PI, "ν = {nu} for e = {e}, M = {m}");
            }
        }
    }

    #[test]
    fn true_anomaly_leads_mean_anomaly_after_periapsis() {
        let solver = SolverConfig::default();
        let m = 0.5;
        let ea = calculate_eccentric_anomaly(0.4, m, &solver).unwrap();
        assert!(ea > m);
        assert!(calculate_true_anomaly(0.4, ea) > ea);
    }

    #[test]
    fn solver_is_generic_over_f32() {
        let ea = calculate_eccentric_anomaly(0.2_f32, 1.0_f32, &SolverConfig::default()).unwrap();
        assert!((ea - 0.2 * ea.sin() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn mean_anomaly_matches_reference_formula() {
        let n = calculate_mean_motion(16.0 * PI, 100.0);
        assert_abs_diff_eq!(n, 16.0 * PI / 2400.0);
        assert_eq!(calculate_mean_anomaly(n, 100.0, 0.0, 0.0), 0.0);

        let t = 10.0;
        assert_abs_diff_eq!(
            calculate_mean_anomaly(n, 100.0, t, 0.0),
            n * (t * n),
            epsilon = 1e-12
        );
        let with_phase = calculate_mean_anomaly(n, 100.0, t, 7.0);
        assert!((0.0..TAU).contains(&with_phase));
    }

    #[test]
    fn normalize_wraps_into_half_open_range() {
        assert_abs_diff_eq!(normalize_angle(2.5 * PI), 0.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(-PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_angle(0.5), 0.5);
    }
}
