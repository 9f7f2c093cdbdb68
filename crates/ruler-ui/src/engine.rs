//! Gesture state machine shared by the ruler controls.
//!
//! The engine owns the axis, the selected value and its pixel position, and
//! turns pointer events and frame ticks into position updates. Controls wrap
//! it with their value type, their tick styling and their listener.

use std::time::Duration;

use ruler_animation::{FlingPhysics, FlingSimulator};
use ruler_core::{BoundedAxis, LabelFormat, SnapResolver, TickWindow};
use ruler_foundation::{
    ActivePointers, DragDecision, DragRelease, DragTracker, GestureConfig, PinchDetector,
    PointerEvent, PointerEventKind,
};

/// Where a control is in its gesture lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureState {
    #[default]
    Idle,
    /// A press is being tracked, confirmed as a drag or not yet.
    Dragging,
    /// Decelerating after a release, or scrolling to a requested value.
    Flinging,
    /// Two pointers are pinching (time ruler only).
    Zooming,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct EngineResponse {
    pub redraw: bool,
    /// Scale factor from a pinch update.
    pub zoom_factor: Option<f32>,
}

impl EngineResponse {
    const REDRAW: Self = Self {
        redraw: true,
        zoom_factor: None,
    };
}

pub(crate) struct RulerEngine {
    axis: BoundedAxis,
    value: i64,
    position: f32,
    state: GestureState,
    pointers: ActivePointers,
    drag: DragTracker,
    pinch: Option<PinchDetector>,
    /// The pinch ended with a pointer still down; its next move restarts
    /// drag detection.
    rearm_pending: bool,
    /// The current press stopped a fling short of the grid.
    interrupted_motion: bool,
    motion: Option<FlingSimulator>,
    physics: FlingPhysics,
    log_target: &'static str,
    debug_logging: bool,
}

impl RulerEngine {
    pub fn new(
        axis: BoundedAxis,
        value: i64,
        gesture: GestureConfig,
        log_target: &'static str,
        debug_logging: bool,
    ) -> Self {
        let value = axis.clamp_value(value);
        Self {
            position: axis.position_of(value),
            axis,
            value,
            state: GestureState::Idle,
            pointers: ActivePointers::new(),
            drag: DragTracker::new(gesture),
            pinch: None,
            rearm_pending: false,
            interrupted_motion: false,
            motion: None,
            physics: FlingPhysics::new(gesture.friction, gesture.density),
            log_target,
            debug_logging,
        }
    }

    /// Enables two-finger pinch recognition.
    pub fn with_pinch(mut self, min_span: f32) -> Self {
        self.pinch = Some(PinchDetector::new(min_span));
        self
    }

    pub fn axis(&self) -> &BoundedAxis {
        &self.axis
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Installs a new axis and value, abandoning any gesture or motion.
    pub fn reset(&mut self, axis: BoundedAxis, value: i64) {
        self.cancel_gesture();
        self.axis = axis;
        self.value = axis.clamp_value(value);
        self.position = axis.position_of(self.value);
    }

    /// Swaps in a re-scaled axis over the same range. The value is kept and
    /// the position re-derived from it.
    pub fn rescale(&mut self, axis: BoundedAxis) {
        self.stop_motion();
        self.axis = axis;
        self.value = axis.clamp_value(self.value);
        self.position = axis.position_of(self.value);
    }

    /// Moves straight to `value` (clamped), stopping any motion.
    pub fn jump_to(&mut self, value: i64) {
        if self.stop_motion() && self.state == GestureState::Flinging {
            self.state = GestureState::Idle;
        }
        self.value = self.axis.clamp_value(value);
        self.position = self.axis.position_of(self.value);
    }

    /// Scrolls to `value` over `duration`, settling on the grid at the end.
    pub fn animate_to(&mut self, value: i64, duration: Duration) {
        let target = self.axis.position_of(value);
        if duration.is_zero() || target == self.position {
            self.jump_to(value);
            return;
        }
        gesture_log!(
            self.debug_logging,
            self.log_target,
            "scroll {:.1} -> {:.1} over {:?}",
            self.position,
            target,
            duration
        );
        self.motion = Some(FlingSimulator::scroll_to(
            self.position,
            target,
            duration,
            self.bounds(),
        ));
        self.state = GestureState::Flinging;
    }

    pub fn tick_window(
        &self,
        viewport_width: f32,
        padding_units: u32,
        label_interval: i64,
        format: LabelFormat,
    ) -> TickWindow {
        TickWindow::new(
            &self.axis,
            self.position,
            viewport_width,
            padding_units,
            label_interval,
            format,
        )
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> EngineResponse {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(event),
            PointerEventKind::Move => self.pointer_move(event),
            PointerEventKind::Up => self.pointer_up(event),
            PointerEventKind::Cancel => {
                self.cancel_gesture();
                EngineResponse::default()
            }
        }
    }

    /// Steps the running motion by one frame. Returns whether the control
    /// is still animating afterwards.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let Some(motion) = self.motion.as_mut() else {
            return false;
        };
        let step = motion.step(dt);
        self.move_to(step.position);
        if step.is_complete {
            self.motion = None;
            self.state = GestureState::Idle;
            self.settle();
            gesture_log!(
                self.debug_logging,
                self.log_target,
                "motion settled at {} ({:.1}px)",
                self.value,
                self.position
            );
        }
        !step.is_complete
    }

    fn pointer_down(&mut self, event: &PointerEvent) -> EngineResponse {
        if !event.position.is_finite() {
            log::trace!(target: self.log_target, "ignoring non-finite press");
            return EngineResponse::default();
        }
        let first = self.pointers.is_empty();
        self.pointers.press(event.id, event.position);

        if first {
            self.interrupted_motion = self.stop_motion();
            self.rearm_pending = false;
            self.drag.begin(event.position, event.uptime_ms);
            self.state = GestureState::Dragging;
            gesture_log!(
                self.debug_logging,
                self.log_target,
                "down at {:.1} (interrupted motion: {})",
                event.position.x,
                self.interrupted_motion
            );
            return EngineResponse::default();
        }

        if self.state == GestureState::Zooming || self.pinch.is_none() {
            return EngineResponse::default();
        }
        let Some((a, b)) = self.pointers.pair() else {
            return EngineResponse::default();
        };
        self.stop_motion();
        self.drag.suppress();
        if let Some(pinch) = self.pinch.as_mut() {
            pinch.begin(a, b);
        }
        self.state = GestureState::Zooming;
        gesture_log!(self.debug_logging, self.log_target, "pinch started");
        EngineResponse::default()
    }

    fn pointer_move(&mut self, event: &PointerEvent) -> EngineResponse {
        if !event.position.is_finite() {
            log::trace!(target: self.log_target, "ignoring non-finite move");
            return EngineResponse::default();
        }
        if !self.pointers.update(event.id, event.position) {
            return EngineResponse::default();
        }

        if self.state == GestureState::Zooming {
            let factor = match (self.pinch.as_mut(), self.pointers.pair()) {
                (Some(pinch), Some((a, b))) => pinch.update(a, b),
                _ => None,
            };
            return EngineResponse {
                redraw: false,
                zoom_factor: factor,
            };
        }

        if self.pointers.primary().map(|(id, _)| id) != Some(event.id) {
            return EngineResponse::default();
        }
        if self.rearm_pending {
            self.rearm_pending = false;
            self.drag.rearm(event.position, event.uptime_ms);
            self.state = GestureState::Dragging;
            return EngineResponse::default();
        }

        match self.drag.track(event.position, event.uptime_ms) {
            DragDecision::Drag { dx } => self.move_to(self.position - dx),
            DragDecision::Ignore | DragDecision::Forward => EngineResponse::default(),
        }
    }

    fn pointer_up(&mut self, event: &PointerEvent) -> EngineResponse {
        let was_primary = self.pointers.primary().map(|(id, _)| id) == Some(event.id);
        if self.pointers.release(event.id).is_none() {
            return EngineResponse::default();
        }

        if self.state == GestureState::Zooming {
            if self.pointers.len() < 2 {
                if let Some(pinch) = self.pinch.as_mut() {
                    pinch.end();
                }
                self.state = GestureState::Idle;
                self.rearm_pending = !self.pointers.is_empty();
                if !self.rearm_pending {
                    self.drag.cancel();
                }
                gesture_log!(self.debug_logging, self.log_target, "pinch ended");
            }
            return EngineResponse::default();
        }
        if self.rearm_pending {
            self.rearm_pending = false;
            self.drag.cancel();
            self.state = GestureState::Idle;
            return EngineResponse::default();
        }
        if !was_primary {
            return EngineResponse::default();
        }

        let interrupted = std::mem::take(&mut self.interrupted_motion);
        match self.drag.release(event.position, event.uptime_ms) {
            DragRelease::Tap => {
                self.state = GestureState::Idle;
                if interrupted {
                    self.settle()
                } else {
                    EngineResponse::default()
                }
            }
            DragRelease::Settle => {
                self.state = GestureState::Idle;
                self.settle()
            }
            DragRelease::Fling { velocity } => {
                // Dragging left moves the scale forward.
                let motion = FlingSimulator::fling(
                    self.position,
                    -velocity,
                    self.bounds(),
                    &self.physics,
                );
                gesture_log!(
                    self.debug_logging,
                    self.log_target,
                    "fling from {:.1} at {:.1}px/s towards {:.1}",
                    self.position,
                    -velocity,
                    motion.final_position()
                );
                self.motion = Some(motion);
                self.state = GestureState::Flinging;
                EngineResponse::REDRAW
            }
        }
    }

    /// Drops pointers, drag and motion. No settling.
    fn cancel_gesture(&mut self) {
        if self.state != GestureState::Idle {
            gesture_log!(self.debug_logging, self.log_target, "gesture cancelled");
        }
        self.pointers.clear();
        self.drag.cancel();
        if let Some(pinch) = self.pinch.as_mut() {
            pinch.end();
        }
        self.rearm_pending = false;
        self.interrupted_motion = false;
        self.motion = None;
        self.state = GestureState::Idle;
    }

    /// Force-finishes the running motion in place. Returns whether there was
    /// one.
    fn stop_motion(&mut self) -> bool {
        match self.motion.take() {
            Some(mut motion) => {
                self.position = self.axis.clamp_position(motion.force_finish());
                true
            }
            None => false,
        }
    }

    fn bounds(&self) -> (f32, f32) {
        (0.0, self.axis.total_span())
    }

    fn move_to(&mut self, position: f32) -> EngineResponse {
        let position = self.axis.clamp_position(position);
        let redraw = position != self.position;
        self.position = position;
        self.value = self.axis.value_at(position);
        EngineResponse {
            redraw,
            zoom_factor: None,
        }
    }

    fn settle(&mut self) -> EngineResponse {
        let snapped = SnapResolver::snap(&self.axis, self.position);
        let redraw = snapped.position != self.position;
        self.position = snapped.position;
        self.value = snapped.value;
        EngineResponse {
            redraw,
            zoom_factor: None,
        }
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
