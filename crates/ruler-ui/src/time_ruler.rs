//! Day-time ruler with pinch zoom.
//!
//! The axis spans one day in seconds. Pinching changes a continuous scale;
//! the scale is quantized onto zoom tiers that decide the tick unit and how
//! often ticks are labelled. Zooming never changes the selected time.

use std::time::Duration;

use ruler_core::{
    BoundedAxis, IntervalSpan, LabelFormat, Result, RulerError, TickWindow, TimeInterval,
    ZoomState, ZoomTier, ZoomTierQuantizer, SECONDS_PER_DAY,
};
use ruler_foundation::PointerEvent;
use smallvec::SmallVec;

use crate::config::TimeRulerConfig;
use crate::control::RulerControl;
use crate::engine::{GestureState, RulerEngine};

const LOG_TARGET: &str = "ruler::time";

/// Boundary a time tick falls on, for choosing its drawn length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeTickLevel {
    SubMinute,
    Minute,
    Hour,
}

impl TimeTickLevel {
    pub fn of(seconds: i64) -> Self {
        if seconds.rem_euclid(3600) == 0 {
            TimeTickLevel::Hour
        } else if seconds.rem_euclid(60) == 0 {
            TimeTickLevel::Minute
        } else {
            TimeTickLevel::SubMinute
        }
    }
}

pub struct TimeRuler {
    quantizer: ZoomTierQuantizer,
    zoom: ZoomState,
    seconds_to_px: f32,
    padding_units: u32,
    debug_logging: bool,
    intervals: Vec<TimeInterval>,
    engine: RulerEngine,
    listener: Option<Box<dyn FnMut(u32)>>,
}

fn day_axis(
    quantizer: &ZoomTierQuantizer,
    zoom: &ZoomState,
    seconds_to_px: f32,
) -> Result<BoundedAxis> {
    let unit = quantizer.tier(zoom.tier_index()).unit_seconds as i64;
    BoundedAxis::new(
        0,
        SECONDS_PER_DAY as i64,
        unit,
        zoom.pixels_per_unit(quantizer, seconds_to_px),
    )
}

impl TimeRuler {
    pub fn new(config: TimeRulerConfig) -> Result<Self> {
        config.gesture.validate()?;
        let seconds_to_px = config.second_gap.to_px(config.gesture.density);
        if !seconds_to_px.is_finite() || seconds_to_px <= 0.0 {
            return Err(RulerError::InvalidGap(seconds_to_px));
        }
        if !config.initial_scale.is_finite() || config.initial_scale <= 0.0 {
            return Err(RulerError::InvalidConfig("initial scale must be positive"));
        }
        let quantizer = ZoomTierQuantizer::new(config.tiers)?;
        let zoom = ZoomState::new(&quantizer, config.initial_scale);
        let axis = day_axis(&quantizer, &zoom, seconds_to_px)?;
        let current = config.current_time.min(SECONDS_PER_DAY) as i64;
        let engine = RulerEngine::new(
            axis,
            current,
            config.gesture,
            LOG_TARGET,
            config.debug_logging,
        )
        .with_pinch(config.gesture.min_pinch_span);

        Ok(Self {
            quantizer,
            zoom,
            seconds_to_px,
            padding_units: config.padding_units,
            debug_logging: config.debug_logging,
            intervals: Vec::new(),
            engine,
            listener: None,
        })
    }

    /// Selected time in seconds since midnight.
    pub fn current_time(&self) -> u32 {
        self.engine.value() as u32
    }

    /// Jumps to `seconds` (clamped to the day) and notifies.
    pub fn set_current_time(&mut self, seconds: u32) {
        self.engine.jump_to(seconds.min(SECONDS_PER_DAY) as i64);
        gesture_log!(self.debug_logging, LOG_TARGET, "time set to {}", self.current_time());
        self.notify();
    }

    pub fn on_value_changed(&mut self, listener: impl FnMut(u32) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Replaces the highlighted intervals. Overlaps are drawn as given.
    pub fn set_time_intervals(&mut self, intervals: Vec<TimeInterval>) {
        self.intervals = intervals;
    }

    pub fn time_intervals(&self) -> &[TimeInterval] {
        &self.intervals
    }

    pub fn scale(&self) -> f32 {
        self.zoom.scale()
    }

    pub fn tier_index(&self) -> usize {
        self.zoom.tier_index()
    }

    pub fn tier(&self) -> ZoomTier {
        *self.quantizer.tier(self.zoom.tier_index())
    }

    pub fn unit_seconds(&self) -> u32 {
        self.tier().unit_seconds
    }

    /// Width of one second at the current scale.
    pub fn pixels_per_second(&self) -> f32 {
        self.engine.axis().pixels_per_unit() / self.engine.axis().unit() as f32
    }

    /// Multiplies the scale by `factor`. Returns whether anything changed.
    pub fn zoom_by(&mut self, factor: f32) -> bool {
        let change = self.zoom.apply_factor(&self.quantizer, factor);
        if !change.scale_changed {
            return false;
        }
        let unit = self.tier().unit_seconds as i64;
        let pixels_per_unit = self.zoom.pixels_per_unit(&self.quantizer, self.seconds_to_px);
        match self.engine.axis().with_unit(unit, pixels_per_unit) {
            Ok(axis) => self.engine.rescale(axis),
            Err(err) => {
                log::warn!(target: LOG_TARGET, "zoom produced an unusable axis: {err}");
                return false;
            }
        }
        if change.tier_changed {
            gesture_log!(
                self.debug_logging,
                LOG_TARGET,
                "scale {:.3} -> tier {} ({}s units)",
                self.scale(),
                self.tier_index(),
                self.unit_seconds()
            );
        }
        true
    }

    /// Ticks under the viewport, labelled `HH:mm` at the tier's interval.
    pub fn visible_ticks(&self, viewport_width: f32) -> TickWindow {
        self.engine.tick_window(
            viewport_width,
            self.padding_units,
            self.tier().label_interval as i64,
            LabelFormat::Clock,
        )
    }

    /// Pixel extents of the intervals that intersect the viewport.
    pub fn visible_intervals(&self, viewport_width: f32) -> SmallVec<[IntervalSpan; 4]> {
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return SmallVec::new();
        }
        let pixels_per_second = self.pixels_per_second();
        let position = self.engine.position();
        self.intervals
            .iter()
            .map(|interval| {
                IntervalSpan::project(*interval, pixels_per_second, position, viewport_width)
            })
            .filter(|span| span.is_visible(viewport_width))
            .collect()
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        let before = self.engine.value();
        let response = self.engine.handle_pointer(event);
        let zoomed = response
            .zoom_factor
            .is_some_and(|factor| self.zoom_by(factor));
        self.notify_if_changed(before);
        response.redraw || zoomed
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
        let time = self.current_time();
        if let Some(listener) = self.listener.as_mut() {
            listener(time);
        }
    }
}

impl RulerControl for TimeRuler {
    fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        TimeRuler::handle_pointer(self, event)
    }

    fn advance(&mut self, dt: Duration) -> bool {
        TimeRuler::advance(self, dt)
    }

    fn is_animating(&self) -> bool {
        TimeRuler::is_animating(self)
    }

    fn gesture_state(&self) -> GestureState {
        TimeRuler::gesture_state(self)
    }

    fn position(&self) -> f32 {
        TimeRuler::position(self)
    }
}
