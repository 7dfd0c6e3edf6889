//! Axial spin, circular orbital sweep and the per-tick output transform.

use crate::kepler::HOURS_PER_DAY;
use crate::vec::Vec3;

/// Rotation of `angle` radians about a unit `axis`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub axis: Vec3<f64>,
    pub angle: f64,
}

impl Rotation {
    pub const fn new(axis: Vec3<f64>, angle: f64) -> Self {
        Self { axis, angle }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(Vec3::Y, 0.0)
    }
}

/// What the renderer applies to a body's scene node after a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderTransform {
    /// Relative to the body's parent (the scene origin for top-level bodies).
    pub position: Vec3<f64>,
    pub spin: Rotation,
    /// Orbital sweep angle. Only circular orbits report one.
    pub orbit_sweep: Option<f64>,
}

/// Spin angle in radians; zero when the body has no day length.
#[inline]
pub fn calculate_spin_angle(elapsed: f64, time_factor: f64, daylength_hours: f64) -> f64 {
    if daylength_hours > 0.0 {
        elapsed * time_factor / daylength_hours
    } else {
        0.0
    }
}

/// Sweep angle of a circular orbit. Bodies without a day length hold their phase.
#[inline]
pub fn calculate_sweep_angle(
    elapsed: f64,
    time_factor: f64,
    period_days: f64,
    daylength_hours: f64,
    phase_offset: f64,
) -> f64 {
    let sweep = if daylength_hours > 0.0 {
        elapsed * time_factor / (period_days * HOURS_PER_DAY)
    } else {
        0.0
    };
    sweep + phase_offset
}

#[inline]
pub fn calculate_circular_position(sweep: f64, distance: f64) -> Vec3<f64> {
    let (sin, cos) = sweep.sin_cos();
    Vec3::new(sin * distance, 0.0, cos * distance)
}

/// Render-vertical spin axis tipped towards `+z` by `axial_tilt` radians.
#[inline]
pub fn calculate_spin_axis(axial_tilt: f64) -> Vec3<f64> {
    let (sin, cos) = axial_tilt.sin_cos();
    Vec3::new(0.0, cos, sin)
}
