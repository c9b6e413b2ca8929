//! Angle utilities for polar line parameters.
//!
//! Line orientations are kept in the signed half-turn range `[-π/2, π/2)`:
//! near zero the line is near vertical, near `±π/2` it is near horizontal.

use std::f32::consts::{FRAC_PI_2, PI};

/// Maps a polar line `(θ, ρ)` onto the equivalent `(θ', ρ')` with
/// `θ' ∈ [-π/2, π/2)`. Shifting `θ` by `π` flips the sign of `ρ`.
#[inline]
pub fn to_signed_half_turn(theta: f32, rho: f32) -> (f32, f32) {
    let mut t = theta.rem_euclid(2.0 * PI);
    let mut r = rho;
    if t >= PI {
        t -= PI;
        r = -r;
    }
    if t >= FRAC_PI_2 {
        t -= PI;
        r = -r;
    }
    if t < -FRAC_PI_2 {
        t = -FRAC_PI_2;
    }
    (t, r)
}

/// Difference between the magnitudes of two orientations.
#[inline]
pub fn orientation_gap(a: f32, b: f32) -> f32 {
    (a.abs() - b.abs()).abs()
}
