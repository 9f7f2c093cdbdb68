//! Frame-stepped motion of a ruler after release.
//!
//! A [`FlingSimulator`] owns no clock and no thread. The host advances it once
//! per frame with the time since the previous frame and reads back where the
//! ruler should be.

use std::time::Duration;

use crate::decay::{sample_spline, FlingCurve, FlingPhysics};

/// Hard stop for any motion, whatever the numbers say.
pub const FLING_TIME_CEILING: Duration = Duration::from_secs(8);

/// Below this speed (px/s) a fling is considered at rest.
pub const REST_VELOCITY: f32 = 1.0;

/// Result of one frame step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingStep {
    pub position: f32,
    pub is_complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Trajectory {
    /// Released with a velocity, decelerating along the fling spline.
    Decay(FlingCurve),
    /// Travelling `delta` px over `duration_ms` along the same spline shape.
    Target { delta: f32, duration_ms: f32 },
}

/// Deceleration state between a release (or a programmatic scroll) and rest.
///
/// Positions never leave `[lower, upper]`; touching a bound completes the
/// motion on that frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FlingSimulator {
    start_position: f32,
    initial_velocity: f32,
    lower: f32,
    upper: f32,
    trajectory: Trajectory,
    elapsed_ms: f32,
    position: f32,
    finished: bool,
}

impl FlingSimulator {
    /// Starts a fling from `start` at `velocity` px/s (positive increases the
    /// position). A non-finite velocity produces an already finished fling.
    pub fn fling(start: f32, velocity: f32, bounds: (f32, f32), physics: &FlingPhysics) -> Self {
        let (lower, upper) = ordered(bounds);
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };
        let start = clamp(start, lower, upper);
        Self {
            start_position: start,
            initial_velocity: velocity,
            lower,
            upper,
            trajectory: Trajectory::Decay(physics.curve(velocity)),
            elapsed_ms: 0.0,
            position: start,
            finished: velocity == 0.0,
        }
    }

    /// Starts a programmatic scroll from `start` to `target` lasting `duration`.
    pub fn scroll_to(start: f32, target: f32, duration: Duration, bounds: (f32, f32)) -> Self {
        let (lower, upper) = ordered(bounds);
        let start = clamp(start, lower, upper);
        let target = clamp(target, lower, upper);
        Self {
            start_position: start,
            initial_velocity: 0.0,
            lower,
            upper,
            trajectory: Trajectory::Target {
                delta: target - start,
                duration_ms: duration.as_secs_f32() * 1000.0,
            },
            elapsed_ms: 0.0,
            position: start,
            finished: target == start,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn start_position(&self) -> f32 {
        self.start_position
    }

    pub fn initial_velocity(&self) -> f32 {
        self.initial_velocity
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_secs_f32(self.elapsed_ms / 1000.0)
    }

    /// Where the motion would come to rest if left alone.
    pub fn final_position(&self) -> f32 {
        let offset = match self.trajectory {
            Trajectory::Decay(curve) => curve.total_offset(),
            Trajectory::Target { delta, .. } => delta,
        };
        clamp(self.start_position + offset, self.lower, self.upper)
    }

    /// Stops immediately; the current position becomes the rest position.
    pub fn force_finish(&mut self) -> f32 {
        self.finished = true;
        self.position
    }

    /// Advances by `dt` and reports the new position.
    pub fn step(&mut self, dt: Duration) -> FlingStep {
        if self.finished {
            return FlingStep {
                position: self.position,
                is_complete: true,
            };
        }

        self.elapsed_ms += dt.as_secs_f32() * 1000.0;
        let (offset, velocity, reached_end) = match self.trajectory {
            Trajectory::Decay(curve) => {
                let velocity = curve.velocity_at(self.elapsed_ms);
                (
                    curve.offset_at(self.elapsed_ms),
                    velocity,
                    curve.is_finished(self.elapsed_ms) || velocity.abs() < REST_VELOCITY,
                )
            }
            Trajectory::Target { delta, duration_ms } => {
                if duration_ms <= 0.0 || self.elapsed_ms >= duration_ms {
                    (delta, 0.0, true)
                } else {
                    let sample = sample_spline(self.elapsed_ms / duration_ms);
                    (
                        delta * sample.distance,
                        delta * sample.velocity / duration_ms * 1000.0,
                        false,
                    )
                }
            }
        };

        let raw = self.start_position + offset;
        if !raw.is_finite() {
            self.finished = true;
            return FlingStep {
                position: self.position,
                is_complete: true,
            };
        }

        let position = clamp(raw, self.lower, self.upper);
        let hit_bound = (position <= self.lower && velocity < 0.0)
            || (position >= self.upper && velocity > 0.0)
            || position != raw;
        let timed_out = self.elapsed_ms >= FLING_TIME_CEILING.as_secs_f32() * 1000.0;

        self.position = position;
        self.finished = reached_end || hit_bound || timed_out;
        FlingStep {
            position,
            is_complete: self.finished,
        }
    }
}

fn ordered((a, b): (f32, f32)) -> (f32, f32) {
    let a = if a.is_finite() { a } else { 0.0 };
    let b = if b.is_finite() { b } else { a };
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn clamp(value: f32, lower: f32, upper: f32) -> f32 {
    if value.is_nan() {
        lower
    } else {
        value.clamp(lower, upper)
    }
}
