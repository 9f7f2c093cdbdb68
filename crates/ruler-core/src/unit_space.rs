//! Affine mapping between fixed-point values and pixel distances.

use crate::{Result, RulerError};

/// Relative tolerance applied before flooring a position onto the grid.
///
/// Positions are `f32`; a grid position that comes back a few ulps short must
/// still land on its own grid line.
const GRID_EPSILON: f64 = 1e-6;

/// Maps values to distances from the axis origin and back.
///
/// `origin` and `unit` are raw fixed-point values (see [`crate::DecimalScale`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitSpace {
    origin: i64,
    unit: i64,
    pixels_per_unit: f32,
}

impl UnitSpace {
    pub fn new(origin: i64, unit: i64, pixels_per_unit: f32) -> Result<Self> {
        if unit <= 0 {
            return Err(RulerError::InvalidUnit(unit as f64));
        }
        check_gap(pixels_per_unit)?;
        Ok(Self {
            origin,
            unit,
            pixels_per_unit,
        })
    }

    pub fn origin(&self) -> i64 {
        self.origin
    }

    pub fn unit(&self) -> i64 {
        self.unit
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    /// Same origin, new unit and gap.
    pub fn with_unit(self, unit: i64, pixels_per_unit: f32) -> Result<Self> {
        Self::new(self.origin, unit, pixels_per_unit)
    }

    /// `(value - origin) / unit * pixels_per_unit`, with real division so an
    /// off-grid value keeps its exact position.
    pub fn value_to_position(&self, value: i64) -> f32 {
        let units = (value as f64 - self.origin as f64) / self.unit as f64;
        (units * self.pixels_per_unit as f64) as f32
    }

    /// Whole units between the origin and `position`, truncated toward the origin.
    pub fn units_at(&self, position: f32) -> i64 {
        if !position.is_finite() {
            return 0;
        }
        let units = position as f64 / self.pixels_per_unit as f64;
        (units + GRID_EPSILON * units.abs().max(1.0)).floor() as i64
    }

    /// `origin + floor(position / pixels_per_unit) * unit`
    pub fn position_to_value(&self, position: f32) -> i64 {
        self.origin
            .saturating_add(self.units_at(position).saturating_mul(self.unit))
    }

    /// Position of the `units`-th grid line.
    pub fn grid_position(&self, units: i64) -> f32 {
        (units as f64 * self.pixels_per_unit as f64) as f32
    }
}

pub(crate) fn check_gap(pixels_per_unit: f32) -> Result<()> {
    if pixels_per_unit.is_finite() && pixels_per_unit > 0.0 {
        Ok(())
    } else {
        Err(RulerError::InvalidGap(pixels_per_unit))
    }
}
