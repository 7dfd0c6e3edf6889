//! Configuration types for loading an orrery from TOML.
//!
//! Bodies are given in raw physical units and converted once when they are
//! added to an [`Orrery`](crate::Orrery). Unknown keys are rejected:
//!
//! ```toml
//! [simulation]
//! time_factor = 50.26548245743669   # 16π: one real second is eight simulated hours
//! distance_scale = 1.0e6            # kilometres per render unit
//! seed = 7                          # phase offsets for bodies that don't set one
//!
//! [simulation.solver]
//! tolerance = 1.0e-4
//! max_iterations = 100
//!
//! [[body]]
//! name = "Earth"
//! radius_km = 6371.0
//! distance_km = 149.6e6
//! eccentricity = 0.0167
//! period_days = 365.256
//! daylength_hours = 23.93
//! axial_tilt_deg = 23.44
//!
//! [[body.satellites]]
//! name = "Moon"
//! distance_km = 384400.0
//! eccentricity = 0.0549
//! inclination_deg = 5.145
//! period_days = 27.32
//! ```

use std::f64::consts::PI;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::kepler::SolverConfig;

/// Default time scale: `16π`, one real second per eight simulated hours.
pub const DEFAULT_TIME_FACTOR: f64 = 16.0 * PI;

/// Global simulation settings shared by every body tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub time_factor: f64,
    /// Physical kilometres per render-space unit.
    pub distance_scale: f64,
    /// Seeds the phase offsets of bodies without an explicit one.
    pub seed: u64,
    pub solver: SolverConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_factor: DEFAULT_TIME_FACTOR,
            distance_scale: 1.0,
            seed: 0,
            solver: SolverConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn with_time_factor(mut self, time_factor: f64) -> Self {
        self.time_factor = time_factor;
        self
    }

    pub fn with_distance_scale(mut self, distance_scale: f64) -> Self {
        self.distance_scale = distance_scale;
        self
    }

    pub fn with_solver(mut self, solver: SolverConfig) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.time_factor.is_finite() && self.time_factor > 0.0) {
            return Err(Error::Simulation(format!(
                "time factor must be positive, got {}",
                self.time_factor
            )));
        }
        if !(self.distance_scale.is_finite() && self.distance_scale > 0.0) {
            return Err(Error::Simulation(format!(
                "distance scale must be positive, got {}",
                self.distance_scale
            )));
        }
        self.solver.validate()
    }
}

/// One body in raw units: kilometres, degrees, days and hours.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub radius_km: f64,
    /// Semi-major axis, or the orbit radius of a circular body.
    pub distance_km: f64,
    #[serde(default)]
    pub eccentricity: f64,
    #[serde(default)]
    pub inclination_deg: f64,
    #[serde(default)]
    pub arg_perigee_deg: f64,
    #[serde(default)]
    pub raan_deg: f64,
    pub period_days: f64,
    #[serde(default)]
    pub daylength_hours: f64,
    #[serde(default)]
    pub axial_tilt_deg: f64,
    /// Randomized from the simulation seed when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase_offset_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub satellites: Vec<BodyConfig>,
}

impl BodyConfig {
    pub fn new(name: impl Into<String>, distance_km: f64, period_days: f64) -> Self {
        Self {
            name: name.into(),
            radius_km: 0.0,
            distance_km,
            eccentricity: 0.0,
            inclination_deg: 0.0,
            arg_perigee_deg: 0.0,
            raan_deg: 0.0,
            period_days,
            daylength_hours: 0.0,
            axial_tilt_deg: 0.0,
            phase_offset_deg: None,
            satellites: Vec::new(),
        }
    }

    pub fn with_radius(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    pub fn with_eccentricity(mut self, eccentricity: f64) -> Self {
        self.eccentricity = eccentricity;
        self
    }

    pub fn with_orientation(mut self, inclination_deg: f64, arg_perigee_deg: f64, raan_deg: f64) -> Self {
        self.inclination_deg = inclination_deg;
        self.arg_perigee_deg = arg_perigee_deg;
        self.raan_deg = raan_deg;
        self
    }

    pub fn with_daylength(mut self, daylength_hours: f64) -> Self {
        self.daylength_hours = daylength_hours;
        self
    }

    pub fn with_axial_tilt(mut self, axial_tilt_deg: f64) -> Self {
        self.axial_tilt_deg = axial_tilt_deg;
        self
    }

    pub fn with_phase_offset(mut self, phase_offset_deg: f64) -> Self {
        self.phase_offset_deg = Some(phase_offset_deg);
        self
    }

    pub fn with_satellite(mut self, satellite: BodyConfig) -> Self {
        self.satellites.push(satellite);
        self
    }
}

/// Top-level file layout: a `[simulation]` table and `[[body]]` entries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default, rename = "body")]
    pub bodies: Vec<BodyConfig>,
}

impl SystemConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
