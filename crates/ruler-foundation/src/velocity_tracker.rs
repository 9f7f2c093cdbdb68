//! Release-velocity estimation for horizontal drags.
//!
//! Impulse strategy: the velocity is the one that would carry the kinetic
//! energy imparted by the recent motion. It reacts quickly to the final flick
//! and ignores the slow start of a drag.

use smallvec::SmallVec;

/// Samples kept in the ring.
const HISTORY_SIZE: usize = 20;

/// Samples older than this (relative to the newest) are ignored.
const HORIZON_MS: i64 = 100;

/// A pause this long between consecutive samples means the pointer stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Sample {
    time_ms: i64,
    x: f32,
}

/// Ring of recent `(time, x)` samples.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    ring: [Sample; HISTORY_SIZE],
    /// Slot the next sample goes into.
    head: usize,
    len: usize,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    pub fn sample_count(&self) -> usize {
        self.len
    }

    /// Records a position. Non-finite positions and samples that go back in
    /// time are dropped.
    pub fn add_sample(&mut self, time_ms: i64, x: f32) {
        if !x.is_finite() {
            log::trace!(target: "ruler::velocity", "dropping non-finite sample at {time_ms}ms");
            return;
        }
        if let Some(newest) = self.newest() {
            if time_ms < newest.time_ms {
                log::trace!(
                    target: "ruler::velocity",
                    "dropping out-of-order sample {time_ms}ms < {}ms",
                    newest.time_ms
                );
                return;
            }
        }
        self.ring[self.head] = Sample { time_ms, x };
        self.head = (self.head + 1) % HISTORY_SIZE;
        self.len = (self.len + 1).min(HISTORY_SIZE);
    }

    fn newest(&self) -> Option<Sample> {
        (self.len > 0).then(|| self.ring[(self.head + HISTORY_SIZE - 1) % HISTORY_SIZE])
    }

    /// Samples from newest to oldest.
    fn newest_first(&self) -> impl Iterator<Item = Sample> + '_ {
        (1..=self.len).map(move |back| self.ring[(self.head + HISTORY_SIZE - back) % HISTORY_SIZE])
    }

    /// Velocity in px/s, positive to the right. Zero with fewer than two
    /// usable samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.newest() else {
            return 0.0;
        };

        let mut window: SmallVec<[Sample; HISTORY_SIZE]> = SmallVec::new();
        let mut previous = newest;
        for sample in self.newest_first() {
            let age = newest.time_ms - sample.time_ms;
            let pause = previous.time_ms - sample.time_ms;
            if age > HORIZON_MS || pause > ASSUME_STOPPED_MS {
                break;
            }
            window.push(sample);
            previous = sample;
        }
        if window.len() < 2 {
            return 0.0;
        }

        window.reverse();
        impulse_velocity(&window) * 1000.0
    }

    /// [`velocity`](Self::velocity) clamped to `±max_velocity`. A
    /// non-positive or non-finite cap yields zero.
    pub fn velocity_capped(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if !velocity.is_finite() {
            return 0.0;
        }
        if velocity.abs() > max_velocity {
            log::trace!(target: "ruler::velocity", "capping {velocity} px/s to {max_velocity}");
        }
        velocity.clamp(-max_velocity, max_velocity)
    }
}

/// Impulse velocity in px/ms over samples ordered oldest first.
fn impulse_velocity(samples: &[Sample]) -> f32 {
    let mut work = 0.0f32;
    for (i, pair) in samples.windows(2).enumerate() {
        let dt = (pair[1].time_ms - pair[0].time_ms) as f32;
        if dt == 0.0 {
            continue;
        }
        let segment = (pair[1].x - pair[0].x) / dt;
        let carried = kinetic_energy_to_velocity(work);
        work += (segment - carried) * segment.abs();
        // The first segment starts from rest, so only half its energy counts.
        if i == 0 {
            work *= 0.5;
        }
    }
    kinetic_energy_to_velocity(work)
}

fn kinetic_energy_to_velocity(work: f32) -> f32 {
    work.signum() * (2.0 * work.abs()).sqrt()
}
