//! General-purpose numeric ruler.

use std::time::Duration;

use ruler_core::{BoundedAxis, DecimalScale, LabelFormat, Result, RulerError, TickWindow};
use ruler_foundation::PointerEvent;

use crate::config::NumberRulerConfig;
use crate::control::RulerControl;
use crate::engine::{GestureState, RulerEngine};

const LOG_TARGET: &str = "ruler::number";

/// Longest programmatic scroll, used when crossing the whole range.
const MAX_SCROLL_DURATION_MS: f32 = 2_000.0;

/// Relative slack for values a float ulp short of their grid line.
const GRID_TOLERANCE: f64 = 1e-9;

/// Raw value of the grid line at or below `value`, clamped to the axis.
fn grid_floor(axis: &BoundedAxis, scale: DecimalScale, value: f64) -> i64 {
    let min = scale.to_value(axis.min());
    let unit = scale.to_value(axis.unit());
    let units = (value - min) / unit;
    let units = (units + GRID_TOLERANCE * units.abs().max(1.0)).floor();
    // Float-to-int casts saturate; NaN lands on the first line.
    let units = (units as i64).clamp(0, axis.unit_count());
    axis.min() + units * axis.unit()
}

/// Validated range in fixed-point form.
struct NumberRange {
    scale: DecimalScale,
    axis: BoundedAxis,
    current: i64,
    per_count: u32,
}

impl NumberRange {
    fn resolve(
        min: f64,
        max: f64,
        current: f64,
        unit: f64,
        per_count: u32,
        gap_px: f32,
    ) -> Result<Self> {
        for (name, value) in [("min", min), ("max", max), ("current", current), ("unit", unit)] {
            if !value.is_finite() {
                return Err(RulerError::NonFinite(name));
            }
        }
        if unit <= 0.0 {
            return Err(RulerError::InvalidUnit(unit));
        }
        if min > max {
            return Err(RulerError::InvalidRange { min, max });
        }
        if !(min..=max).contains(&current) {
            return Err(RulerError::ValueOutOfRange {
                value: current,
                min,
                max,
            });
        }
        if per_count == 0 {
            return Err(RulerError::InvalidConfig("per_count must be positive"));
        }

        let scale = DecimalScale::fitting(&[min, max, current, unit]);
        let unit_raw = scale.to_raw(unit)?;
        if unit_raw <= 0 {
            return Err(RulerError::InvalidUnit(unit));
        }
        let axis = BoundedAxis::new(scale.to_raw(min)?, scale.to_raw(max)?, unit_raw, gap_px)?;
        let current = grid_floor(&axis, scale, current);
        Ok(Self {
            scale,
            axis,
            current,
            per_count,
        })
    }
}

/// A ruler over an arbitrary decimal range.
///
/// Values are exchanged as `f64` but held in fixed point, so a 0.1 unit ruler
/// lands exactly on `40.0`, never on `39.99999`.
pub struct NumberRuler {
    scale: DecimalScale,
    per_count: u32,
    gap_px: f32,
    padding_units: u32,
    debug_logging: bool,
    engine: RulerEngine,
    listener: Option<Box<dyn FnMut(f64)>>,
}

impl NumberRuler {
    pub fn new(config: NumberRulerConfig) -> Result<Self> {
        config.gesture.validate()?;
        let gap_px = config.gap.to_px(config.gesture.density);
        let range = NumberRange::resolve(
            config.min_value,
            config.max_value,
            config.current_value,
            config.unit,
            config.per_count,
            gap_px,
        )?;
        Ok(Self {
            scale: range.scale,
            per_count: range.per_count,
            gap_px,
            padding_units: config.padding_units,
            debug_logging: config.debug_logging,
            engine: RulerEngine::new(
                range.axis,
                range.current,
                config.gesture,
                LOG_TARGET,
                config.debug_logging,
            ),
            listener: None,
        })
    }

    pub fn value(&self) -> f64 {
        self.scale.to_value(self.engine.value())
    }

    pub fn min_value(&self) -> f64 {
        self.scale.to_value(self.engine.axis().min())
    }

    pub fn max_value(&self) -> f64 {
        self.scale.to_value(self.engine.axis().max())
    }

    pub fn unit(&self) -> f64 {
        self.scale.to_value(self.engine.axis().unit())
    }

    pub fn per_count(&self) -> u32 {
        self.per_count
    }

    pub fn decimal_scale(&self) -> DecimalScale {
        self.scale
    }

    /// Registers the listener called whenever the selected value changes.
    pub fn on_value_changed(&mut self, listener: impl FnMut(f64) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Jumps to the grid line at or below `value`, clamped to the range.
    /// Stops any motion and always notifies. NaN is ignored.
    pub fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            log::warn!(target: LOG_TARGET, "ignoring NaN value");
            return;
        }
        let raw = grid_floor(self.engine.axis(), self.scale, value);
        self.engine.jump_to(raw);
        gesture_log!(self.debug_logging, LOG_TARGET, "value set to {}", self.value());
        self.notify();
    }

    /// Scrolls to the grid line at or below `value`, taking up to two
    /// seconds for the full range. Out-of-range values are rejected.
    pub fn set_current_value(&mut self, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(RulerError::NonFinite("value"));
        }
        let (min, max) = (self.min_value(), self.max_value());
        if !(min..=max).contains(&value) {
            return Err(RulerError::ValueOutOfRange { value, min, max });
        }
        let axis = self.engine.axis();
        let raw = grid_floor(axis, self.scale, value);
        let span = axis.total_span();
        let distance = (axis.position_of(raw) - self.engine.position()).abs();
        let duration_ms = if span > 0.0 {
            (distance * MAX_SCROLL_DURATION_MS / span).min(MAX_SCROLL_DURATION_MS)
        } else {
            0.0
        };

        let before = self.engine.value();
        self.engine.animate_to(raw, Duration::from_secs_f32(duration_ms / 1000.0));
        self.notify_if_changed(before);
        Ok(())
    }

    /// Replaces range, current value, unit and labelling in one step.
    ///
    /// On error nothing changes.
    pub fn set_range(
        &mut self,
        min: f64,
        max: f64,
        current: f64,
        unit: f64,
        per_count: u32,
    ) -> Result<()> {
        let range = NumberRange::resolve(min, max, current, unit, per_count, self.gap_px)?;
        self.scale = range.scale;
        self.per_count = range.per_count;
        self.engine.reset(range.axis, range.current);
        gesture_log!(
            self.debug_logging,
            LOG_TARGET,
            "range [{min}, {max}] unit {unit} current {}",
            self.value()
        );
        self.notify();
        Ok(())
    }

    /// Ticks under a viewport `viewport_width` px wide, the selection at its
    /// centre. Every `per_count`-th tick is labelled.
    pub fn visible_ticks(&self, viewport_width: f32) -> TickWindow {
        let label_interval = self
            .engine
            .axis()
            .unit()
            .saturating_mul(self.per_count as i64);
        self.engine.tick_window(
            viewport_width,
            self.padding_units,
            label_interval,
            LabelFormat::Decimal(self.scale),
        )
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let before = self.engine.value();
        let response = self.engine.handle_pointer(event);
        self.notify_if_changed(before);
        response.redraw
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        let before = self.engine.value();
        let animating = self.engine.advance(dt);
        self.notify_if_changed(before);
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_animating()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.engine.state()
    }

    pub fn position(&self) -> f32 {
        self.engine.position()
    }

    fn notify_if_changed(&mut self, before: i64) {
        if self.engine.value() != before {
            self.notify();
        }
    }

    fn notify(&mut self) {
        let value = self.value();
        if let Some(listener) = self.listener.as_mut() {
            listener(value);
        }
    }
}

impl RulerControl for NumberRuler {
    fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        NumberRuler::handle_pointer(self, event)
    }

    fn advance(&mut self, dt: Duration) -> bool {
        NumberRuler::advance(self, dt)
    }

    fn is_animating(&self) -> bool {
        NumberRuler::is_animating(self)
    }

    fn gesture_state(&self) -> GestureState {
        NumberRuler::gesture_state(self)
    }

    fn position(&self) -> f32 {
        NumberRuler::position(self)
    }
}
