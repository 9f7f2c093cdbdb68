//! Robot-style gesture scripting for ruler controls.
//!
//! A [`GestureRobot`] owns a control and a virtual clock. Each scripted
//! pointer event advances the clock by one frame, so velocities come out the
//! same on every run.
//!
//! # Example
//!
//! ```
//! use ruler_testing::GestureRobot;
//! use ruler_ui::{NumberRuler, NumberRulerConfig};
//!
//! let ruler = NumberRuler::new(NumberRulerConfig::default()).unwrap();
//! let mut robot = GestureRobot::new(ruler);
//! robot.drag_slowly(600.0, 400.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.control().value(), 52.0);
//! ```

use std::time::Duration;

use ruler_foundation::{PointerEvent, PointerId};
use ruler_ui::{GestureState, RulerControl};

/// Default interval between scripted events and pumped frames.
pub const FRAME: Duration = Duration::from_millis(16);

/// Upper bound on frames pumped by [`GestureRobot::wait_for_idle`].
const MAX_IDLE_FRAMES: usize = 10_000;

const PRIMARY: PointerId = 1;
const SECONDARY: PointerId = 2;

/// Drives one control with scripted pointer input.
pub struct GestureRobot<C: RulerControl> {
    control: C,
    now_ms: i64,
    frame: Duration,
    y: f32,
    redraws: usize,
}

impl<C: RulerControl> GestureRobot<C> {
    pub fn new(control: C) -> Self {
        Self {
            control,
            now_ms: 0,
            frame: FRAME,
            y: 0.0,
            redraws: 0,
        }
    }

    /// Uses a different event interval. Shorter frames make faster flicks.
    pub fn with_frame(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    pub fn into_inner(self) -> C {
        self.control
    }

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    /// Number of events that asked for a redraw so far.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    pub fn state(&self) -> GestureState {
        self.control.gesture_state()
    }

    /// Lets time pass without input (and without pumping frames).
    pub fn pause(&mut self, duration: Duration) -> &mut Self {
        self.now_ms += duration.as_millis() as i64;
        self
    }

    pub fn send(&mut self, event: PointerEvent) -> bool {
        let redraw = self.control.handle_pointer(&event);
        if redraw {
            self.redraws += 1;
        }
        redraw
    }

    pub fn press(&mut self, x: f32) -> &mut Self {
        self.send(PointerEvent::down(PRIMARY, x, self.y, self.now_ms));
        self
    }

    pub fn move_to(&mut self, x: f32) -> &mut Self {
        self.tick();
        self.send(PointerEvent::moved(PRIMARY, x, self.y, self.now_ms));
        self
    }

    /// Moves with a vertical component.
    pub fn move_to_xy(&mut self, x: f32, y: f32) -> &mut Self {
        self.tick();
        self.send(PointerEvent::moved(PRIMARY, x, y, self.now_ms));
        self
    }

    pub fn release(&mut self, x: f32) -> &mut Self {
        self.tick();
        self.send(PointerEvent::up(PRIMARY, x, self.y, self.now_ms));
        self
    }

    pub fn cancel(&mut self) -> &mut Self {
        self.tick();
        self.send(PointerEvent::cancel(PRIMARY, self.now_ms));
        self
    }

    /// Press, move in `steps` even frames, release immediately: a flick.
    pub fn fling(&mut self, from_x: f32, to_x: f32, steps: u32) -> &mut Self {
        self.press(from_x);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from_x + (to_x - from_x) * t);
        }
        self.release(to_x)
    }

    /// Drags to `to_x`, holds still, then releases with no velocity.
    pub fn drag_slowly(&mut self, from_x: f32, to_x: f32) -> &mut Self {
        self.press(from_x);
        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from_x + (to_x - from_x) * t);
        }
        self.pause(Duration::from_millis(200));
        self.release(to_x)
    }

    /// Two-finger pinch centred on `center_x`, spreading from `from_span`
    /// to `to_span` in `steps` frames, then lifting both fingers.
    pub fn pinch(&mut self, center_x: f32, from_span: f32, to_span: f32, steps: u32) -> &mut Self {
        let half = from_span / 2.0;
        self.send(PointerEvent::down(PRIMARY, center_x - half, self.y, self.now_ms));
        self.send(PointerEvent::down(SECONDARY, center_x + half, self.y, self.now_ms));
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let half = (from_span + (to_span - from_span) * t) / 2.0;
            self.tick();
            self.send(PointerEvent::moved(PRIMARY, center_x - half, self.y, self.now_ms));
            self.send(PointerEvent::moved(SECONDARY, center_x + half, self.y, self.now_ms));
        }
        let half = to_span / 2.0;
        self.tick();
        self.send(PointerEvent::up(SECONDARY, center_x + half, self.y, self.now_ms));
        self.tick();
        self.send(PointerEvent::up(PRIMARY, center_x - half, self.y, self.now_ms));
        self
    }

    /// Pumps one frame. Returns whether the control is still animating.
    pub fn advance_frame(&mut self) -> bool {
        self.tick();
        self.control.advance(self.frame)
    }

    /// Pumps frames until the control stops animating. Returns the number of
    /// frames pumped.
    ///
    /// Panics if the control is still animating after 10 000 frames.
    pub fn wait_for_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.control.is_animating() {
            self.advance_frame();
            frames += 1;
            assert!(
                frames <= MAX_IDLE_FRAMES,
                "control still animating after {MAX_IDLE_FRAMES} frames"
            );
        }
        frames
    }

    fn tick(&mut self) {
        self.now_ms += self.frame.as_millis() as i64;
    }
}
