//! Money-amount ruler with a balance marker.

use std::time::Duration;

use ruler_core::{BoundedAxis, DecimalScale, LabelFormat, Result, RulerError, TickWindow};
use ruler_foundation::PointerEvent;

use crate::config::MoneyRulerConfig;
use crate::control::RulerControl;
use crate::engine::{GestureState, RulerEngine};

const LOG_TARGET: &str = "ruler::money";

/// Whole-amount ruler. Programmatic values are floored to the unit.
pub struct MoneyRuler {
    per_count: u32,
    balance: i64,
    gap_px: f32,
    padding_units: u32,
    debug_logging: bool,
    engine: RulerEngine,
    listener: Option<Box<dyn FnMut(i64)>>,
}

fn money_axis(
    min: i64,
    max: i64,
    current: i64,
    unit: i64,
    per_count: u32,
    gap_px: f32,
) -> Result<BoundedAxis> {
    if unit <= 0 {
        return Err(RulerError::InvalidUnit(unit as f64));
    }
    if min > max {
        return Err(RulerError::InvalidRange {
            min: min as f64,
            max: max as f64,
        });
    }
    if !(min..=max).contains(&current) {
        return Err(RulerError::ValueOutOfRange {
            value: current as f64,
            min: min as f64,
            max: max as f64,
        });
    }
    if per_count == 0 {
        return Err(RulerError::InvalidConfig("per_count must be positive"));
    }
    BoundedAxis::new(min, max, unit, gap_px)
}

/// Largest multiple of `unit` from `origin` not above `value`, saturating
/// at the `i64` limits.
fn floor_to_unit(value: i64, origin: i64, unit: i64) -> i64 {
    let (value, origin, unit) = (value as i128, origin as i128, unit as i128);
    let floored = origin + (value - origin).div_euclid(unit) * unit;
    floored.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

impl MoneyRuler {
    pub fn new(config: MoneyRulerConfig) -> Result<Self> {
        config.gesture.validate()?;
        let gap_px = config.gap.to_px(config.gesture.density);
        let axis = money_axis(
            config.min_value,
            config.max_value,
            config.current_value,
            config.unit,
            config.per_count,
            gap_px,
        )?;
        let current = floor_to_unit(config.current_value, axis.min(), axis.unit());
        let mut ruler = Self {
            per_count: config.per_count,
            balance: 0,
            gap_px,
            padding_units: config.padding_units,
            debug_logging: config.debug_logging,
            engine: RulerEngine::new(
                axis,
                current,
                config.gesture,
                LOG_TARGET,
                config.debug_logging,
            ),
            listener: None,
        };
        ruler.set_balance(config.balance);
        Ok(ruler)
    }

    pub fn value(&self) -> i64 {
        self.engine.value()
    }

    pub fn min_value(&self) -> i64 {
        self.engine.axis().min()
    }

    pub fn max_value(&self) -> i64 {
        self.engine.axis().max()
    }

    pub fn unit(&self) -> i64 {
        self.engine.axis().unit()
    }

    pub fn per_count(&self) -> u32 {
        self.per_count
    }

    pub fn on_value_changed(&mut self, listener: impl FnMut(i64) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Floors `value` to the unit within the range, stops any motion and
    /// notifies. `15_050` with a unit of 100 selects `15_000`.
    pub fn set_value(&mut self, value: f64) {
        if value.is_nan() {
            log::warn!(target: LOG_TARGET, "ignoring NaN value");
            return;
        }
        let axis = *self.engine.axis();
        // Saturating float-to-int cast keeps huge inputs at the range ends.
        let value = (value.floor() as i64).clamp(axis.min(), axis.max());
        let value = floor_to_unit(value, axis.min(), axis.unit());
        self.engine.jump_to(value);
        gesture_log!(self.debug_logging, LOG_TARGET, "value set to {value}");
        self.notify();
    }

    /// Same as [`set_value`](Self::set_value); money values never animate.
    pub fn set_current_value(&mut self, value: f64) {
        self.set_value(value);
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Moves the balance marker. The selection is not touched.
    pub fn set_balance(&mut self, balance: i64) {
        let axis = self.engine.axis();
        self.balance = floor_to_unit(balance, axis.min(), axis.unit());
    }

    /// Replaces range, current value, unit and labelling in one step.
    ///
    /// On error nothing changes. The balance is re-floored to the new unit.
    pub fn set_range(
        &mut self,
        min: i64,
        max: i64,
        current: i64,
        unit: i64,
        per_count: u32,
    ) -> Result<()> {
        let axis = money_axis(min, max, current, unit, per_count, self.gap_px)?;
        self.per_count = per_count;
        self.engine.reset(axis, floor_to_unit(current, min, unit));
        self.set_balance(self.balance);
        gesture_log!(
            self.debug_logging,
            LOG_TARGET,
            "range [{min}, {max}] unit {unit} current {}",
            self.value()
        );
        self.notify();
        Ok(())
    }

    /// Ticks under the viewport with the balance tick flagged as the marker.
    pub fn visible_ticks(&self, viewport_width: f32) -> TickWindow {
        let label_interval = self.unit().saturating_mul(self.per_count as i64);
        self.engine
            .tick_window(
                viewport_width,
                self.padding_units,
                label_interval,
                LabelFormat::Decimal(DecimalScale::INTEGER),
            )
            .with_marker(Some(self.balance))
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
        let value = self.engine.value();
        if let Some(listener) = self.listener.as_mut() {
            listener(value);
        }
    }
}

impl RulerControl for MoneyRuler {
    fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        MoneyRuler::handle_pointer(self, event)
    }

    fn advance(&mut self, dt: Duration) -> bool {
        MoneyRuler::advance(self, dt)
    }

    fn is_animating(&self) -> bool {
        MoneyRuler::is_animating(self)
    }

    fn gesture_state(&self) -> GestureState {
        MoneyRuler::gesture_state(self)
    }

    fn position(&self) -> f32 {
        MoneyRuler::position(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ruler() -> MoneyRuler {
        MoneyRuler::new(MoneyRulerConfig::default()).unwrap()
    }

    #[test]
    fn set_value_floors_to_the_unit() {
        let mut ruler = ruler();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        ruler.on_value_changed(move |value| sink.borrow_mut().push(value));

        ruler.set_value(15_050.0);
        assert_eq!(ruler.value(), 15_000);
        assert_eq!(ruler.position(), 900.0);

        ruler.set_value(99_999.0);
        assert_eq!(ruler.value(), 50_000);
        ruler.set_current_value(-20.0);
        assert_eq!(ruler.value(), 0);
        assert_eq!(*seen.borrow(), vec![15_000, 50_000, 0]);
    }

    #[test]
    fn off_grid_max_floors_to_the_last_tick() {
        let mut ruler = MoneyRuler::new(MoneyRulerConfig::default().max_value(50_050)).unwrap();
        ruler.set_value(50_050.0);
        assert_eq!(ruler.value(), 50_000);
    }

    #[test]
    fn balance_is_floored_and_marked() {
        let mut ruler = MoneyRuler::new(MoneyRulerConfig::default().current_value(15_000)).unwrap();
        ruler.set_balance(15_370);
        assert_eq!(ruler.balance(), 15_300);
        assert_eq!(ruler.value(), 15_000);

        let window = ruler.visible_ticks(360.0);
        let marker: Vec<_> = window.iter().filter(|tick| tick.is_marker).collect();
        assert_eq!(marker.len(), 1);
        assert_eq!(marker[0].raw, 15_300);
        assert_eq!(marker[0].pixel_offset, 180.0 + 18.0);
    }

    #[test]
    fn window_is_padded_by_three_units() {
        let ruler = MoneyRuler::new(MoneyRulerConfig::default().current_value(15_000)).unwrap();
        // 30 units either side of the centre plus three of padding.
        let window = ruler.visible_ticks(360.0);
        assert_eq!(window.first_value(), Some(11_700));
        assert_eq!(window.last_value(), Some(18_300));
        let labels: Vec<_> = window.iter().filter_map(|tick| tick.label).collect();
        assert_eq!(labels.first().map(String::as_str), Some("12000"));
    }

    #[test]
    fn invalid_ranges_leave_the_ruler_untouched() {
        let mut ruler = ruler();
        assert!(ruler.set_range(0, 1_000, 2_000, 100, 10).is_err());
        assert!(ruler.set_range(0, 1_000, 500, 0, 10).is_err());
        assert!(ruler.set_range(10, 0, 5, 1, 10).is_err());
        assert_eq!(ruler.max_value(), 50_000);

        ruler.set_balance(1_234);
        ruler.set_range(0, 10_000, 5_000, 1_000, 5).unwrap();
        assert_eq!(ruler.value(), 5_000);
        assert_eq!(ruler.balance(), 1_000);
        assert_eq!(ruler.unit(), 1_000);
    }

    #[test]
    fn ranges_too_wide_for_the_grid_are_rejected() {
        let mut ruler = ruler();
        assert!(matches!(
            ruler.set_range(i64::MIN / 2 - 10, i64::MAX / 2 + 10, 0, 100, 10),
            Err(RulerError::ValueOutOfRange { .. })
        ));
        assert_eq!(ruler.max_value(), 50_000);
        assert!(MoneyRuler::new(MoneyRulerConfig::default().max_value(i64::MAX)).is_err());

        ruler.set_balance(i64::MIN);
        assert_eq!(ruler.balance(), i64::MIN);
        ruler.set_balance(i64::MAX);
        assert_eq!(ruler.balance(), 9_223_372_036_854_775_800);
    }

    #[test]
    fn negative_fractions_floor_away_from_zero() {
        let mut ruler = MoneyRuler::new(MoneyRulerConfig {
            min_value: -1_000,
            unit: 1,
            ..MoneyRulerConfig::default()
        })
        .unwrap();
        ruler.set_value(-150.5);
        assert_eq!(ruler.value(), -151);
        ruler.set_value(-150.0);
        assert_eq!(ruler.value(), -150);
        ruler.set_value(20.9);
        assert_eq!(ruler.value(), 20);
    }
}
