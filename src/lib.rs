//! Parametric radial-blade layout generation for fan-like 2D shapes.
//!
//! Given a blade count and an inter-blade gap angle, [`layout`] produces the
//! ordered angular interval of every blade and the wedge outline for any
//! interval: apex at the origin, a straight edge to the arc start, then a
//! piecewise-linear approximation of the outer arc. [`sketch`] closes those
//! outlines into [`geo`] polygons for a mesh builder, and [`controller`]
//! hosts the increment/decrement command channel a user control surface
//! drives.
//!
//! All operations are pure and single-threaded: a layout is computed once
//! per configuration change and regenerated wholesale on the next one, so
//! the generator is safe to call from inside a render-loop callback.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod controller;
pub mod errors;
pub mod float_types;
pub mod layout;
pub mod sketch;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use controller::{BladeCommand, FanController, MAX_BLADE_COUNT, MIN_BLADE_COUNT};
pub use errors::LayoutError;
pub use layout::{BladeSpec, LayoutConfig, build_blade_outline, compute_blade_intervals};
pub use sketch::BladeSketch;
