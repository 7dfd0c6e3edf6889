// Modified from https://github.com/atbentley/bevy_mod_orbits
// MIT licensed by atbentley <Andrew Bentley>

//! Perifocal-to-inertial propagation of a position on the orbital ellipse.

use num_traits::Float;

use crate::vec::Vec3;

/// Orbit-plane orientation with its sines and cosines cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation<T> {
    pub arg_perigee_sin: T,
    pub arg_perigee_cos: T,
    pub inclination_sin: T,
    pub inclination_cos: T,
    pub raan_sin: T,
    pub raan_cos: T,
}

impl<T: Float> Orientation<T> {
    pub fn new(arg_perigee: T, inclination: T, raan: T) -> Self {
        let (arg_perigee_sin, arg_perigee_cos) = arg_perigee.sin_cos();
        let (inclination_sin, inclination_cos) = inclination.sin_cos();
        let (raan_sin, raan_cos) = raan.sin_cos();
        Self {
            arg_perigee_sin,
            arg_perigee_cos,
            inclination_sin,
            inclination_cos,
            raan_sin,
            raan_cos,
        }
    }

    /// Position at radial distance `r` and true anomaly `ν`, in render axes.
    ///
    /// The inertial frame is rotated by argument of perigee, inclination and
    /// RAAN (3-1-3); the result is returned as `(x, z, y)` so the orbital
    /// reference plane lies flat in the renderer's horizontal plane.
    #[inline]
    pub fn to_render(&self, true_anomaly: T, r: T) -> Vec3<T> {
        let (nu_sin, nu_cos) = true_anomaly.sin_cos();
        // cos(ω + ν), sin(ω + ν)
        let u_cos = self.arg_perigee_cos * nu_cos - self.arg_perigee_sin * nu_sin;
        let u_sin = self.arg_perigee_sin * nu_cos + self.arg_perigee_cos * nu_sin;

        let x = r * (u_cos * self.raan_cos - self.inclination_cos * u_sin * self.raan_sin);
        let y = r * (u_cos * self.raan_sin + self.inclination_cos * u_sin * self.raan_cos);
        let z = r * u_sin * self.inclination_sin;

        Vec3::new(x, z, y)
    }
}

/// `r = p / (1 + e cos ν)`
#[inline]
pub fn calculate_radial_distance<T: Float>(semi_latus_rectum: T, eccentricity: T, true_anomaly: T) -> T {
    semi_latus_rectum / (T::one() + eccentricity * true_anomaly.cos())
}

#[inline]
pub fn calculate_semi_latus_rectum<T: Float>(semi_major_axis: T, eccentricity: T) -> T {
    semi_major_axis * (T::one() - eccentricity * eccentricity)
}

/// Render-space position for true anomaly `ν` on an orbit.
#[inline]
pub fn calculate_position<T: Float>(
    true_anomaly: T,
    semi_latus_rectum: T,
    eccentricity: T,
    orientation: &Orientation<T>,
) -> Vec3<T> {
    let r = calculate_radial_distance(semi_latus_rectum, eccentricity, true_anomaly);
    orientation.to_render(true_anomaly, r)
}
