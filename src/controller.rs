//! Command channel for blade-count adjustments.
//!
//! The UI emits [`BladeCommand`] messages instead of mutating a counter from
//! its event handlers; the controller owns the configuration, enforces the
//! supported range and regenerates the derived blade specs wholesale on
//! every change.

use crate::errors::LayoutError;
use crate::float_types::Real;
use crate::layout::{BladeSpec, LayoutConfig};
use nalgebra::Point2;

/// Smallest blade count the fan controls allow.
pub const MIN_BLADE_COUNT: usize = 3;
/// Largest blade count the fan controls allow.
pub const MAX_BLADE_COUNT: usize = 16;

/// Messages emitted by a user control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BladeCommand {
    IncrementBladeCount,
    DecrementBladeCount,
}

/// Owns the current layout configuration and the blade specs derived from it.
#[derive(Clone, Debug)]
pub struct FanController {
    config: LayoutConfig,
    blades: Vec<BladeSpec>,
}

impl FanController {
    pub fn new(config: LayoutConfig) -> Self {
        let blades = config.blade_specs();
        Self { config, blades }
    }

    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The current blade intervals, index order.
    pub fn blades(&self) -> &[BladeSpec] {
        &self.blades
    }

    /// The wedge outline of every current blade, index order.
    pub fn outlines(&self) -> Vec<Vec<Point2<Real>>> {
        self.config.blade_outlines()
    }

    /// Applies one command, saturating at the supported range.
    ///
    /// Returns whether the blade count changed; the derived specs are
    /// regenerated only when it did.
    pub fn apply(&mut self, command: BladeCommand) -> bool {
        let count = self.config.blade_count();
        let next = match command {
            BladeCommand::IncrementBladeCount => (count + 1).min(MAX_BLADE_COUNT),
            BladeCommand::DecrementBladeCount => count.saturating_sub(1).max(MIN_BLADE_COUNT),
        };
        if next == count {
            return false;
        }
        self.rebuild(next);
        true
    }

    /// Sets the blade count directly, clamping into the supported range.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidBladeCount`] when `blade_count` is zero; any
    /// positive value is accepted and clamped into
    /// [`MIN_BLADE_COUNT`]..=[`MAX_BLADE_COUNT`].
    pub fn set_blade_count(&mut self, blade_count: usize) -> Result<(), LayoutError> {
        if blade_count < 1 {
            return Err(LayoutError::InvalidBladeCount(blade_count));
        }
        let clamped = blade_count.clamp(MIN_BLADE_COUNT, MAX_BLADE_COUNT);
        if clamped != self.config.blade_count() {
            self.rebuild(clamped);
        }
        Ok(())
    }

    /// `blade_count` has already been clamped into the supported range.
    fn rebuild(&mut self, blade_count: usize) {
        if let Ok(config) = self.config.with_blade_count(blade_count) {
            self.blades = config.blade_specs();
            self.config = config;
        }
    }
}

impl Default for FanController {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
