//! Read-only time interval overlay.

use crate::clock::SECONDS_PER_DAY;
use crate::{Result, RulerError};

/// A `[start_time, end_time]` span of the day, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start_time: u32,
    end_time: u32,
}

impl TimeInterval {
    /// Requires `start_time < end_time <= SECONDS_PER_DAY`.
    pub fn new(start_time: u32, end_time: u32) -> Result<Self> {
        if start_time >= end_time || end_time > SECONDS_PER_DAY {
            return Err(RulerError::InvalidInterval {
                start: start_time,
                end: end_time,
            });
        }
        Ok(Self {
            start_time,
            end_time,
        })
    }

    pub fn start_time(&self) -> u32 {
        self.start_time
    }

    pub fn end_time(&self) -> u32 {
        self.end_time
    }

    pub fn duration(&self) -> u32 {
        self.end_time - self.start_time
    }
}

/// Horizontal pixel extent of an interval relative to the viewport's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntervalSpan {
    pub interval: TimeInterval,
    pub start_px: f32,
    pub end_px: f32,
}

impl IntervalSpan {
    /// Projects `interval` given the pixel distance of one second, the
    /// current axis position and the viewport width. The indicator sits at
    /// the viewport centre.
    pub fn project(
        interval: TimeInterval,
        pixels_per_second: f32,
        position: f32,
        viewport_width: f32,
    ) -> Self {
        let left = viewport_width * 0.5 - position;
        Self {
            interval,
            start_px: left + interval.start_time as f32 * pixels_per_second,
            end_px: left + interval.end_time as f32 * pixels_per_second,
        }
    }

    /// Whether any part of the span lies inside `[0, viewport_width]`.
    pub fn is_visible(&self, viewport_width: f32) -> bool {
        self.end_px >= 0.0 && self.start_px <= viewport_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_ordering_and_bounds() {
        assert!(TimeInterval::new(0, SECONDS_PER_DAY).is_ok());
        assert_eq!(
            TimeInterval::new(10, 10),
            Err(RulerError::InvalidInterval { start: 10, end: 10 })
        );
        assert!(TimeInterval::new(20, 10).is_err());
        assert!(TimeInterval::new(0, SECONDS_PER_DAY + 1).is_err());
    }

    #[test]
    fn projects_around_the_centre() {
        let interval = TimeInterval::new(3600, 7200).unwrap();
        // 0.2 px per second, current position at 01:00.
        let span = IntervalSpan::project(interval, 0.2, 720.0, 1000.0);
        assert_eq!(span.start_px, 500.0);
        assert_eq!(span.end_px, 1220.0);
        assert!(span.is_visible(1000.0));

        let far = IntervalSpan::project(
            TimeInterval::new(80_000, 80_100).unwrap(),
            0.2,
            0.0,
            1000.0,
        );
        assert!(!far.is_visible(1000.0));
    }
}
