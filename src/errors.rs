//! Validation errors

use crate::float_types::Real;
use std::fmt::Display;

/// All the possible validation issues we might encounter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// (InvalidBladeCount) A layout needs at least one blade
    InvalidBladeCount(usize),
    /// (InvalidRadius) The blade radius must be finite and greater than zero
    InvalidRadius(Real),
    /// (InvalidArcSegments) The arc approximation needs at least one segment
    InvalidArcSegments(usize),
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::InvalidBladeCount(count) => write!(f, "(InvalidBladeCount) a layout needs at least one blade, got: {}", count),
            LayoutError::InvalidRadius(radius) => write!(f, "(InvalidRadius) the blade radius must be finite and greater than zero, got: {}", radius),
            LayoutError::InvalidArcSegments(segments) => write!(f, "(InvalidArcSegments) the arc approximation needs at least one segment, got: {}", segments),
        }
    }
}
