//! Settling a free position onto the nearest grid line.

use crate::axis::BoundedAxis;

/// A grid-aligned rest state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapped {
    pub value: i64,
    pub position: f32,
}

/// Rounds free positions to grid values.
pub struct SnapResolver;

impl SnapResolver {
    /// Nearest grid value to `position`, clamped to the axis, with the
    /// position re-derived from that value.
    pub fn snap(axis: &BoundedAxis, position: f32) -> Snapped {
        let units = if position.is_finite() {
            (position as f64 / axis.pixels_per_unit() as f64).round() as i64
        } else {
            0
        };
        let units = units.clamp(0, axis.unit_count());
        Snapped {
            value: axis.min() + units * axis.unit(),
            position: axis.space().grid_position(units),
        }
    }

    /// Rest state for a value that is already known, e.g. after a zoom.
    pub fn settle_value(axis: &BoundedAxis, value: i64) -> Snapped {
        Self::snap(axis, axis.position_of(value))
    }
}
