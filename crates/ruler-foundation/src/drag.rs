//! Horizontal drag recognition.
//!
//! A press becomes a drag once the pointer has travelled the touch slop
//! horizontally and the latest motion is more horizontal than vertical.
//! Until then samples are absorbed so a tap or a vertical scroll of a parent
//! never nudges the ruler.

use ruler_core::Point;

use crate::gesture_constants::GestureConfig;
use crate::velocity_tracker::VelocityTracker;

/// What a move sample means for the ruler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragDecision {
    /// Absorbed: no press, sub-slop or mostly vertical, or a bad sample.
    Ignore,
    /// Confirmed drag. `dx` is the pointer travel since the previous sample.
    Drag { dx: f32 },
    /// A multi-pointer gesture owns the stream.
    Forward,
}

/// How a press ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragRelease {
    /// Never confirmed as a drag.
    Tap,
    /// Confirmed, released too slowly to fling.
    Settle,
    /// Confirmed and fast enough to fling. Pointer velocity in px/s,
    /// positive to the right, already capped.
    Fling { velocity: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragSession {
    start: Point,
    last: Point,
    moving: bool,
}

#[derive(Clone, Debug)]
pub struct DragTracker {
    config: GestureConfig,
    session: Option<DragSession>,
    velocity: VelocityTracker,
    suppressed: bool,
}

impl DragTracker {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            session: None,
            velocity: VelocityTracker::new(),
            suppressed: false,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// A press is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// The press has been confirmed as a horizontal drag.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|session| session.moving)
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Primary pointer down. Starts a fresh session.
    pub fn begin(&mut self, position: Point, time_ms: i64) {
        self.velocity.clear();
        self.suppressed = false;
        if !position.is_finite() {
            self.session = None;
            return;
        }
        self.velocity.add_sample(time_ms, position.x);
        self.session = Some(DragSession {
            start: position,
            last: position,
            moving: false,
        });
    }

    /// Classifies a move of the primary pointer.
    pub fn track(&mut self, position: Point, time_ms: i64) -> DragDecision {
        if self.suppressed {
            return DragDecision::Forward;
        }
        if !position.is_finite() {
            return DragDecision::Ignore;
        }
        let Some(session) = self.session.as_mut() else {
            return DragDecision::Ignore;
        };

        self.velocity.add_sample(time_ms, position.x);
        let dx = position.x - session.last.x;
        let dy = position.y - session.last.y;
        session.last = position;

        if !session.moving {
            let travelled = (position.x - session.start.x).abs();
            if travelled < self.config.touch_slop || dx.abs() <= dy.abs() {
                return DragDecision::Ignore;
            }
            session.moving = true;
        }
        DragDecision::Drag { dx }
    }

    /// Primary pointer up. Ends the session.
    pub fn release(&mut self, position: Point, time_ms: i64) -> DragRelease {
        let session = self.session.take();
        let suppressed = std::mem::replace(&mut self.suppressed, false);
        let Some(session) = session else {
            return DragRelease::Tap;
        };
        if suppressed || !session.moving {
            return DragRelease::Tap;
        }
        if position.is_finite() {
            self.velocity.add_sample(time_ms, position.x);
        }

        let velocity = self.velocity.velocity_capped(self.config.max_fling_velocity);
        if velocity.abs() >= self.config.min_fling_velocity && velocity != 0.0 {
            DragRelease::Fling { velocity }
        } else {
            DragRelease::Settle
        }
    }

    /// Drops the session without a release.
    pub fn cancel(&mut self) {
        self.session = None;
        self.suppressed = false;
        self.velocity.clear();
    }

    /// Hands the stream to a multi-pointer gesture.
    pub fn suppress(&mut self) {
        self.suppressed = true;
    }

    /// Restarts drag detection from the remaining pointer after a
    /// multi-pointer gesture. The drag must be confirmed again.
    pub fn rearm(&mut self, position: Point, time_ms: i64) {
        self.begin(position, time_ms);
    }
}
