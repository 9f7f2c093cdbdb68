//! Closed value range with its pixel projection.

use crate::unit_space::UnitSpace;
use crate::{Result, RulerError};

/// Widest `max - min` an axis accepts. Keeps grid arithmetic inside `i64`
/// and pixel positions inside `f64` integer precision.
pub const MAX_AXIS_SPAN: i64 = 1 << 52;

/// A `[min, max]` range laid out on a [`UnitSpace`] whose origin is `min`.
///
/// Positions run from `0` (at `min`) to [`total_span`](Self::total_span) (at
/// the last grid line not past `max`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundedAxis {
    max: i64,
    space: UnitSpace,
}

impl BoundedAxis {
    pub fn new(min: i64, max: i64, unit: i64, pixels_per_unit: f32) -> Result<Self> {
        if min > max {
            return Err(RulerError::InvalidRange {
                min: min as f64,
                max: max as f64,
            });
        }
        if max.checked_sub(min).map_or(true, |span| span > MAX_AXIS_SPAN) {
            return Err(RulerError::ValueOutOfRange {
                value: max as f64,
                min: min as f64,
                max: min.saturating_add(MAX_AXIS_SPAN) as f64,
            });
        }
        let space = UnitSpace::new(min, unit, pixels_per_unit)?;
        Ok(Self { max, space })
    }

    pub fn min(&self) -> i64 {
        self.space.origin()
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn unit(&self) -> i64 {
        self.space.unit()
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.space.pixels_per_unit()
    }

    pub fn space(&self) -> &UnitSpace {
        &self.space
    }

    /// Re-derives the axis for a new unit and gap, keeping the range.
    pub fn with_unit(&self, unit: i64, pixels_per_unit: f32) -> Result<Self> {
        Ok(Self {
            max: self.max,
            space: self.space.with_unit(unit, pixels_per_unit)?,
        })
    }

    /// Number of whole units between `min` and `max`.
    pub fn unit_count(&self) -> i64 {
        (self.max - self.min()) / self.unit()
    }

    /// Largest grid value that does not exceed `max`.
    pub fn grid_max(&self) -> i64 {
        self.min() + self.unit_count() * self.unit()
    }

    /// Distance from `min` to the last grid line.
    pub fn total_span(&self) -> f32 {
        self.space.grid_position(self.unit_count())
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.min()..=self.max).contains(&value)
    }

    pub fn clamp_value(&self, value: i64) -> i64 {
        value.clamp(self.min(), self.max)
    }

    /// Clamps a free position into `[0, total_span]`. NaN lands on the origin.
    pub fn clamp_position(&self, position: f32) -> f32 {
        if position.is_nan() {
            return 0.0;
        }
        position.clamp(0.0, self.total_span())
    }

    /// Value under a (clamped) position, truncated onto the grid.
    pub fn value_at(&self, position: f32) -> i64 {
        let position = self.clamp_position(position);
        self.clamp_value(self.space.position_to_value(position))
    }

    /// Position of a (clamped) value.
    pub fn position_of(&self, value: i64) -> f32 {
        self.clamp_position(self.space.value_to_position(self.clamp_value(value)))
    }

    /// Value span covered by a viewport of the given width, in whole units.
    pub fn viewport_value_span(&self, viewport_width: f32) -> i64 {
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return 0;
        }
        (viewport_width / self.pixels_per_unit()).floor() as i64 * self.unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenths() -> BoundedAxis {
        // [0, 100] in tenths, 10 px per 0.1
        BoundedAxis::new(0, 1000, 1, 10.0).unwrap()
    }

    #[test]
    fn range_derived_quantities() {
        let axis = tenths();
        assert_eq!(axis.unit_count(), 1000);
        assert_eq!(axis.total_span(), 10_000.0);
        assert_eq!(axis.grid_max(), 1000);
        assert_eq!(axis.viewport_value_span(1080.0), 108);
    }

    #[test]
    fn off_grid_max_is_truncated_for_span() {
        let axis = BoundedAxis::new(0, 50_050, 100, 10.0).unwrap();
        assert_eq!(axis.unit_count(), 500);
        assert_eq!(axis.grid_max(), 50_000);
        assert_eq!(axis.total_span(), 5_000.0);
    }

    #[test]
    fn positions_are_clamped_into_the_span() {
        let axis = tenths();
        assert_eq!(axis.clamp_position(-5.0), 0.0);
        assert_eq!(axis.clamp_position(20_000.0), 10_000.0);
        assert_eq!(axis.clamp_position(f32::NAN), 0.0);
        assert_eq!(axis.value_at(-5.0), 0);
        assert_eq!(axis.value_at(99_999.0), 1000);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            BoundedAxis::new(10, 5, 1, 1.0),
            Err(RulerError::InvalidRange { min: 10.0, max: 5.0 })
        );
    }

    #[test]
    fn spans_beyond_the_limit_are_rejected() {
        let err = BoundedAxis::new(i64::MIN / 2 - 10, i64::MAX / 2 + 10, 100, 6.0);
        assert!(matches!(err, Err(RulerError::ValueOutOfRange { .. })));
        assert!(BoundedAxis::new(i64::MIN, i64::MAX, 1, 1.0).is_err());
        assert!(BoundedAxis::new(-MAX_AXIS_SPAN, 1, 1, 1.0).is_err());

        let half = MAX_AXIS_SPAN / 2;
        let widest = BoundedAxis::new(-half, half, 1 << 20, 1.0).unwrap();
        assert_eq!(widest.unit_count(), 1 << 32);
        assert_eq!(widest.value_at(f32::MAX), widest.grid_max());
    }

    #[test]
    fn degenerate_range_has_zero_span() {
        let axis = BoundedAxis::new(7, 7, 1, 3.0).unwrap();
        assert_eq!(axis.total_span(), 0.0);
        assert_eq!(axis.value_at(42.0), 7);
    }

    #[test]
    fn viewport_span_ignores_bad_widths() {
        let axis = tenths();
        assert_eq!(axis.viewport_value_span(-1.0), 0);
        assert_eq!(axis.viewport_value_span(f32::NAN), 0);
    }
}
