//! Orbital elements in simulation units, converted and validated once per body.

use std::f64::consts::PI;

use crate::config::BodyConfig;
use crate::error::{Error, Result};
use crate::propagator::{calculate_semi_latus_rectum, Orientation};
use crate::rotation::calculate_spin_axis;
use crate::vec::Vec3;

pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Which formula path a body's position takes. Fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitKind {
    /// `eccentricity == 0`: sine/cosine sweep, no root finding.
    Circular,
    Elliptical,
}

/// Immutable per-body constants in simulation units (render distance, radians, days, hours).
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalElements {
    eccentricity: f64,
    semi_major_axis: f64,
    semi_latus_rectum: f64,
    inclination: f64,
    arg_perigee: f64,
    raan: f64,
    period: f64,
    daylength: f64,
    phase_offset: f64,
    radius: f64,
    orientation: Orientation<f64>,
    spin_axis: Vec3<f64>,
    kind: OrbitKind,
}

impl OrbitalElements {
    /// Converts `config` out of kilometres and degrees. `phase_offset` is in
    /// radians and is used only when the config does not set its own.
    pub fn from_config(config: &BodyConfig, phase_offset: f64, distance_scale: f64) -> Result<Self> {
        validate(config, distance_scale)?;

        let eccentricity = config.eccentricity;
        let semi_major_axis = config.distance_km / distance_scale;
        let inclination = config.inclination_deg * DEG_TO_RAD;
        let arg_perigee = config.arg_perigee_deg * DEG_TO_RAD;
        let raan = config.raan_deg * DEG_TO_RAD;
        let phase_offset = config
            .phase_offset_deg
            .map(|degrees| degrees * DEG_TO_RAD)
            .unwrap_or(phase_offset);

        if !phase_offset.is_finite() {
            return Err(Error::configuration(&config.name, "phase offset must be finite"));
        }

        Ok(Self {
            eccentricity,
            semi_major_axis,
            semi_latus_rectum: calculate_semi_latus_rectum(semi_major_axis, eccentricity),
            inclination,
            arg_perigee,
            raan,
            period: config.period_days,
            daylength: config.daylength_hours,
            phase_offset,
            radius: config.radius_km / distance_scale,
            orientation: Orientation::new(arg_perigee, inclination, raan),
            spin_axis: calculate_spin_axis(config.axial_tilt_deg * DEG_TO_RAD),
            kind: if eccentricity > 0.0 {
                OrbitKind::Elliptical
            } else {
                OrbitKind::Circular
            },
        })
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_latus_rectum
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn arg_perigee(&self) -> f64 {
        self.arg_perigee
    }

    pub fn raan(&self) -> f64 {
        self.raan
    }

    /// Orbital period in days.
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Day length in hours. Zero means the body does not spin.
    pub fn daylength(&self) -> f64 {
        self.daylength
    }

    pub fn phase_offset(&self) -> f64 {
        self.phase_offset
    }

    /// Body radius in render units.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn orientation(&self) -> &Orientation<f64> {
        &self.orientation
    }

    pub fn spin_axis(&self) -> Vec3<f64> {
        self.spin_axis
    }

    pub fn kind(&self) -> OrbitKind {
        self.kind
    }

    /// Closest and farthest distance from the focus.
    pub fn apsides(&self) -> (f64, f64) {
        (
            self.semi_major_axis * (1.0 - self.eccentricity),
            self.semi_major_axis * (1.0 + self.eccentricity),
        )
    }
}

fn validate(config: &BodyConfig, distance_scale: f64) -> Result<()> {
    let body = config.name.as_str();

    if !(distance_scale.is_finite() && distance_scale > 0.0) {
        return Err(Error::configuration(body, format!("distance scale must be positive, got {distance_scale}")));
    }
    if !(config.eccentricity.is_finite() && (0.0..1.0).contains(&config.eccentricity)) {
        return Err(Error::configuration(
            body,
            format!("eccentricity must be in [0, 1), got {}", config.eccentricity),
        ));
    }
    if !(config.period_days.is_finite() && config.period_days > 0.0) {
        return Err(Error::configuration(
            body,
            format!("period must be positive, got {} days", config.period_days),
        ));
    }
    if !(config.distance_km.is_finite() && config.distance_km > 0.0) {
        return Err(Error::configuration(
            body,
            format!("distance must be positive, got {} km", config.distance_km),
        ));
    }
    if !(config.daylength_hours.is_finite() && config.daylength_hours >= 0.0) {
        return Err(Error::configuration(
            body,
            format!("day length must not be negative, got {} hours", config.daylength_hours),
        ));
    }
    if !(config.radius_km.is_finite() && config.radius_km >= 0.0) {
        return Err(Error::configuration(
            body,
            format!("radius must not be negative, got {} km", config.radius_km),
        ));
    }

    let angles = [
        ("inclination", config.inclination_deg),
        ("argument of perigee", config.arg_perigee_deg),
        ("RAAN", config.raan_deg),
        ("axial tilt", config.axial_tilt_deg),
    ];
    if let Some((label, value)) = angles.into_iter().find(|(_, value)| !value.is_finite()) {
        return Err(Error::configuration(body, format!("{label} must be finite, got {value}")));
    }

    Ok(())
}
