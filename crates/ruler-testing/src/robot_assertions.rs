//! Assertion helpers for gesture tests.

use ruler_core::TickWindow;

/// Pixel positions recomputed through a different path (scale changes,
/// `f32` products) agree only up to rounding.
pub fn assert_position_near(position: f32, expected: f32, tolerance_px: f32, context: &str) {
    assert!(
        (position - expected).abs() <= tolerance_px,
        "{context}: position {position} is more than {tolerance_px}px from {expected}"
    );
}

/// Assert that a control at rest sits exactly on a grid line.
pub fn assert_on_grid(position: f32, pixels_per_unit: f32, msg: &str) {
    let units = position / pixels_per_unit;
    assert!(
        (units - units.round()).abs() < 1e-3,
        "{}: position {} is not a multiple of {}",
        msg,
        position,
        pixels_per_unit
    );
}

/// Collects the labels of a tick window, left to right.
pub fn labels(window: &TickWindow) -> Vec<String> {
    window.iter().filter_map(|tick| tick.label).collect()
}
