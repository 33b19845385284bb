mod support;

use bladegen::{
    BladeCommand, FanController, LayoutError, MAX_BLADE_COUNT, MIN_BLADE_COUNT,
    float_types::EPSILON,
    layout::LayoutConfig,
};

use crate::support::approx_eq;

#[test]
fn default_controller_starts_at_three_blades() {
    let controller = FanController::default();
    assert_eq!(controller.config().blade_count(), 3);
    assert_eq!(controller.blades().len(), 3);
}

#[test]
fn increment_regenerates_the_blade_specs() {
    let mut controller = FanController::default();
    assert!(controller.apply(BladeCommand::IncrementBladeCount));

    assert_eq!(controller.config().blade_count(), 4);
    let blades = controller.blades();
    assert_eq!(blades.len(), 4);
    // 4 blades: starts step by 90°
    let step = blades[1].start_angle_rad - blades[0].start_angle_rad;
    assert!(approx_eq(step.to_degrees(), 90.0, EPSILON));
}

#[test]
fn decrement_saturates_at_the_minimum() {
    let mut controller = FanController::default();
    assert_eq!(controller.config().blade_count(), MIN_BLADE_COUNT);
    assert!(!controller.apply(BladeCommand::DecrementBladeCount));
    assert_eq!(controller.config().blade_count(), MIN_BLADE_COUNT);
    assert_eq!(controller.blades().len(), MIN_BLADE_COUNT);
}

#[test]
fn increment_saturates_at_the_maximum() {
    let config = LayoutConfig::new(15, 10.0, 3.0, 20).unwrap();
    let mut controller = FanController::new(config);

    assert!(controller.apply(BladeCommand::IncrementBladeCount));
    assert_eq!(controller.config().blade_count(), MAX_BLADE_COUNT);

    assert!(!controller.apply(BladeCommand::IncrementBladeCount));
    assert_eq!(controller.config().blade_count(), MAX_BLADE_COUNT);
    assert_eq!(controller.blades().len(), MAX_BLADE_COUNT);
}

#[test]
fn setter_clamps_into_the_supported_range() {
    let mut controller = FanController::default();

    controller.set_blade_count(40).unwrap();
    assert_eq!(controller.config().blade_count(), MAX_BLADE_COUNT);

    controller.set_blade_count(1).unwrap();
    assert_eq!(controller.config().blade_count(), MIN_BLADE_COUNT);

    controller.set_blade_count(8).unwrap();
    assert_eq!(controller.config().blade_count(), 8);
    assert_eq!(controller.blades().len(), 8);
}

#[test]
fn setter_rejects_a_zero_count() {
    let mut controller = FanController::default();
    assert_eq!(
        controller.set_blade_count(0),
        Err(LayoutError::InvalidBladeCount(0))
    );
    // state untouched on rejection
    assert_eq!(controller.config().blade_count(), 3);
}

#[test]
fn adjusting_the_count_keeps_the_other_parameters() {
    let config = LayoutConfig::new(5, 7.5, 2.5, 16).unwrap();
    let mut controller = FanController::new(config);
    controller.apply(BladeCommand::IncrementBladeCount);

    let config = controller.config();
    assert_eq!(config.blade_count(), 6);
    assert_eq!(config.gap_deg(), 7.5);
    assert_eq!(config.radius(), 2.5);
    assert_eq!(config.arc_segments(), 16);
}

#[test]
fn outlines_follow_the_current_configuration() {
    let mut controller = FanController::default();
    controller.apply(BladeCommand::IncrementBladeCount);

    let outlines = controller.outlines();
    assert_eq!(outlines.len(), 4);
    for outline in &outlines {
        // default arc segmentation is 20
        assert_eq!(outline.len(), 22);
        assert_eq!(outline[0].x, 0.0);
        assert_eq!(outline[0].y, 0.0);
    }
}
