//! Test support library
//! Provides various helper functions & utilities for tests.

use bladegen::float_types::Real;

/// Approximate equality within `eps`.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}
