use std::f64::consts::TAU;

use crate::config::{BodyConfig, SimulationConfig};
use crate::elements::{OrbitKind, OrbitalElements};
use crate::error::Result;
use crate::kepler::{
    calculate_eccentric_anomaly, calculate_mean_anomaly, calculate_mean_motion,
    calculate_true_anomaly,
};
use crate::propagator::calculate_position;
use crate::rotation::{
    calculate_circular_position, calculate_spin_angle, calculate_sweep_angle, RenderTransform,
    Rotation,
};
use crate::vec::Vec3;

/// A named orbiting body. Ticking it is a pure function of elapsed time.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    name: String,
    elements: OrbitalElements,
}

impl Body {
    pub fn new(name: impl Into<String>, elements: OrbitalElements) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }

    /// Builds the body from raw units. See [`OrbitalElements::from_config`].
    pub fn from_config(
        config: &BodyConfig,
        phase_offset: f64,
        simulation: &SimulationConfig,
    ) -> Result<Self> {
        let elements = OrbitalElements::from_config(config, phase_offset, simulation.distance_scale)?;
        Ok(Self::new(config.name.clone(), elements))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Position and rotation after `elapsed` real seconds.
    pub fn tick(&self, elapsed: f64, simulation: &SimulationConfig) -> Result<RenderTransform> {
        match self.elements.kind() {
            OrbitKind::Circular => Ok(self.circular_transform(elapsed, simulation)),
            OrbitKind::Elliptical => {
                let true_anomaly = self.true_anomaly(elapsed, simulation)?;
                Ok(RenderTransform {
                    position: self.position_at(true_anomaly),
                    spin: self.spin(elapsed, simulation),
                    orbit_sweep: None,
                })
            }
        }
    }

    /// The circular approximation, regardless of eccentricity.
    pub fn circular_transform(&self, elapsed: f64, simulation: &SimulationConfig) -> RenderTransform {
        let el = &self.elements;
        let sweep = calculate_sweep_angle(
            elapsed,
            simulation.time_factor,
            el.period(),
            el.daylength(),
            el.phase_offset(),
        );
        RenderTransform {
            position: calculate_circular_position(sweep, el.semi_major_axis()),
            spin: self.spin(elapsed, simulation),
            orbit_sweep: Some(sweep),
        }
    }

    pub fn spin(&self, elapsed: f64, simulation: &SimulationConfig) -> Rotation {
        Rotation::new(
            self.elements.spin_axis(),
            calculate_spin_angle(elapsed, simulation.time_factor, self.elements.daylength()),
        )
    }

    pub fn mean_anomaly(&self, elapsed: f64, simulation: &SimulationConfig) -> f64 {
        let el = &self.elements;
        let mean_motion = calculate_mean_motion(simulation.time_factor, el.period());
        calculate_mean_anomaly(mean_motion, el.period(), elapsed, el.phase_offset())
    }

    pub fn true_anomaly(&self, elapsed: f64, simulation: &SimulationConfig) -> Result<f64> {
        let mean_anomaly = self.mean_anomaly(elapsed, simulation);
        self.true_anomaly_from_mean(mean_anomaly, simulation)
    }

    fn true_anomaly_from_mean(&self, mean_anomaly: f64, simulation: &SimulationConfig) -> Result<f64> {
        let e = self.elements.eccentricity();
        let eccentric_anomaly = calculate_eccentric_anomaly(e, mean_anomaly, &simulation.solver)?;
        Ok(calculate_true_anomaly(e, eccentric_anomaly))
    }

    /// Elliptical-path position for a true anomaly, whatever the orbit kind.
    pub fn position_at(&self, true_anomaly: f64) -> Vec3<f64> {
        let el = &self.elements;
        calculate_position(
            true_anomaly,
            el.semi_latus_rectum(),
            el.eccentricity(),
            el.orientation(),
        )
    }

    /// Real seconds until the body is back where it started, or `None` if it never moves.
    pub fn orbital_period_secs(&self, simulation: &SimulationConfig) -> Option<f64> {
        let el = &self.elements;
        let mean_motion = calculate_mean_motion(simulation.time_factor, el.period());
        match el.kind() {
            // Mean anomaly advances by mean_motion² per second.
            OrbitKind::Elliptical => Some(TAU / (mean_motion * mean_motion)),
            OrbitKind::Circular if el.daylength() > 0.0 => Some(TAU / mean_motion),
            OrbitKind::Circular => None,
        }
    }

    /// `samples` points evenly spaced in mean anomaly around one orbit.
    pub fn orbit_path(&self, samples: usize, simulation: &SimulationConfig) -> Result<Vec<Vec3<f64>>> {
        let el = &self.elements;
        (0..samples)
            .map(|i| {
                let angle = i as f64 / samples as f64 * TAU;
                match el.kind() {
                    OrbitKind::Circular => Ok(calculate_circular_position(angle, el.semi_major_axis())),
                    OrbitKind::Elliptical => {
                        let true_anomaly = self.true_anomaly_from_mean(angle, simulation)?;
                        Ok(self.position_at(true_anomaly))
                    }
                }
            })
            .collect()
    }
}
