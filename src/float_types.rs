// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used for angle and coordinate comparisons across the crate.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-4;
/// Tolerance used for angle and coordinate comparisons across the crate.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-9;

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// One full turn in degrees.
pub const FULL_TURN_DEG: Real = 360.0;

/// Converts degrees to radians.
///
/// Total-value semantics: negative and >360° inputs pass through unchanged,
/// no normalization or clamping.
#[inline]
pub fn degrees_to_radians(deg: Real) -> Real {
    deg * PI / 180.0
}
