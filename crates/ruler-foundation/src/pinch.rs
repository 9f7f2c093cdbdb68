//! Two-finger scale detection.

use ruler_core::Point;

/// Turns successive two-pointer spans into multiplicative scale factors.
///
/// Spans below the minimum are too noisy to scale from; while the fingers
/// are that close the pinch is paused and resumes from the next good span.
#[derive(Clone, Debug, PartialEq)]
pub struct PinchDetector {
    min_span: f32,
    last_span: Option<f32>,
    active: bool,
}

impl PinchDetector {
    pub fn new(min_span: f32) -> Self {
        Self {
            min_span: if min_span.is_finite() { min_span.max(0.0) } else { 0.0 },
            last_span: None,
            active: false,
        }
    }

    pub fn min_span(&self) -> f32 {
        self.min_span
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// A second pointer went down.
    pub fn begin(&mut self, a: Point, b: Point) {
        self.active = true;
        self.last_span = self.usable_span(a, b);
    }

    /// Pointers moved. Returns `span / previous_span` when both spans are
    /// usable.
    pub fn update(&mut self, a: Point, b: Point) -> Option<f32> {
        if !self.active {
            return None;
        }
        let span = self.usable_span(a, b);
        let previous = std::mem::replace(&mut self.last_span, span);
        let factor = span? / previous?;
        (factor.is_finite() && factor > 0.0).then_some(factor)
    }

    pub fn end(&mut self) {
        self.active = false;
        self.last_span = None;
    }

    fn usable_span(&self, a: Point, b: Point) -> Option<f32> {
        let span = a.distance_to(b);
        (span.is_finite() && span > 0.0 && span >= self.min_span).then_some(span)
    }
}
