//! Shared gesture thresholds and their per-control configuration.
//!
//! The constants are in density-independent pixels. [`GestureConfig`] scales
//! them for the device density the host reports.

use ruler_core::{Result, RulerError};

/// Horizontal travel from the press position before a touch becomes a drag.
///
/// Matches Android's `ViewConfiguration` touch slop (8 dp).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Release speed below which the ruler settles instead of flinging (dp/s).
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Release speeds are capped to this magnitude (dp/s).
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Smallest two-finger span that counts as a pinch.
///
/// Platform scale detectors default to roughly 27 mm, which makes pinching a
/// short ruler awkward; the touch slop works better.
pub const MIN_PINCH_SPAN: f32 = DRAG_THRESHOLD;

/// Scroll friction used for flings.
pub const FLING_FRICTION: f32 = 0.015;

/// Gesture thresholds in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub touch_slop: f32,
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
    pub min_pinch_span: f32,
    pub friction: f32,
    pub density: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl GestureConfig {
    /// Defaults scaled for `density` physical pixels per dp.
    pub fn with_density(density: f32) -> Self {
        Self {
            touch_slop: DRAG_THRESHOLD * density,
            min_fling_velocity: MIN_FLING_VELOCITY * density,
            max_fling_velocity: MAX_FLING_VELOCITY * density,
            min_pinch_span: MIN_PINCH_SPAN * density,
            friction: FLING_FRICTION,
            density,
        }
    }

    pub fn touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn fling_velocity(mut self, min: f32, max: f32) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }

    pub fn min_pinch_span(mut self, min_pinch_span: f32) -> Self {
        self.min_pinch_span = min_pinch_span;
        self
    }

    pub fn friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let non_negative = [self.touch_slop, self.min_fling_velocity, self.min_pinch_span];
        if non_negative.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(RulerError::InvalidConfig(
                "slop, minimum fling velocity and pinch span must be finite and non-negative",
            ));
        }
        if !self.max_fling_velocity.is_finite() || self.max_fling_velocity <= 0.0 {
            return Err(RulerError::InvalidConfig("maximum fling velocity must be positive"));
        }
        if !self.friction.is_finite() || self.friction <= 0.0 {
            return Err(RulerError::InvalidConfig("friction must be positive"));
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(RulerError::InvalidConfig("density must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_scales_pixel_thresholds() {
        let config = GestureConfig::with_density(2.0);
        assert_eq!(config.touch_slop, 16.0);
        assert_eq!(config.min_fling_velocity, 100.0);
        assert_eq!(config.max_fling_velocity, 16_000.0);
        assert_eq!(config.friction, FLING_FRICTION);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_nonsense() {
        assert!(GestureConfig::default().touch_slop(-1.0).validate().is_err());
        assert!(GestureConfig::default().fling_velocity(10.0, 0.0).validate().is_err());
        assert!(GestureConfig::default().friction(f32::NAN).validate().is_err());
        assert!(GestureConfig::with_density(0.0).validate().is_err());
    }
}
