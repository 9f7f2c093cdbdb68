//! Visible tick window.
//!
//! Only the ticks under the viewport (plus a few grid units of padding on
//! each side, so ticks never pop in at the edges while panning) are produced.
//! The selection indicator sits at the horizontal centre of the viewport.

use crate::axis::BoundedAxis;
use crate::clock::format_hh_mm;
use crate::decimal::DecimalScale;

/// How major tick labels are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelFormat {
    /// Fixed-point decimal without trailing zeros.
    Decimal(DecimalScale),
    /// Seconds of day as `HH:mm`.
    Clock,
}

impl LabelFormat {
    pub fn format(&self, raw: i64) -> String {
        match self {
            LabelFormat::Decimal(scale) => scale.format(raw),
            LabelFormat::Clock => format_hh_mm(raw.max(0) as u32),
        }
    }

    fn decode(&self, raw: i64) -> f64 {
        match self {
            LabelFormat::Decimal(scale) => scale.to_value(raw),
            LabelFormat::Clock => raw as f64,
        }
    }
}

/// One grid mark for the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct TickDescriptor {
    /// Fixed-point value of the tick.
    pub raw: i64,
    /// Decoded value of the tick.
    pub value: f64,
    /// Horizontal offset from the viewport's left edge.
    pub pixel_offset: f32,
    pub is_major: bool,
    /// Present on major ticks.
    pub label: Option<String>,
    /// Set on the reference marker (the money ruler's balance).
    pub is_marker: bool,
}

/// A restartable, finite description of the visible ticks.
///
/// Cheap to copy; every call to [`iter`](Self::iter) starts from the first
/// tick again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickWindow {
    origin: i64,
    unit: i64,
    first_unit: i64,
    count: usize,
    first_offset: f32,
    gap: f32,
    label_interval: i64,
    marker: Option<i64>,
    format: LabelFormat,
}

impl TickWindow {
    /// Window for `axis` scrolled to `position` in a viewport `viewport_width`
    /// wide, padded by `padding_units` grid units on each side.
    ///
    /// Ticks whose value is a multiple of `label_interval` are major.
    pub fn new(
        axis: &BoundedAxis,
        position: f32,
        viewport_width: f32,
        padding_units: u32,
        label_interval: i64,
        format: LabelFormat,
    ) -> Self {
        let gap = axis.pixels_per_unit();
        let half = viewport_width * 0.5;
        let mut window = Self {
            origin: axis.min(),
            unit: axis.unit(),
            first_unit: 0,
            count: 0,
            first_offset: 0.0,
            gap,
            label_interval: label_interval.max(1),
            marker: None,
            format,
        };
        if !viewport_width.is_finite() || viewport_width <= 0.0 || !position.is_finite() {
            return window;
        }

        let padding = padding_units as i64;
        let first = ((position - half) / gap).floor() as i64 - padding;
        let last = ((position + half) / gap).ceil() as i64 + padding;
        let first = first.max(0);
        let last = last.min(axis.unit_count());
        if first > last {
            return window;
        }

        window.first_unit = first;
        window.count = (last - first + 1) as usize;
        window.first_offset = half + (axis.space().grid_position(first) - position);
        window
    }

    /// Flags `marker` (already on the grid) as the reference tick.
    pub fn with_marker(mut self, marker: Option<i64>) -> Self {
        self.marker = marker;
        self
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Value of the first tick, if any.
    pub fn first_value(&self) -> Option<i64> {
        (!self.is_empty()).then(|| self.value_of(0))
    }

    /// Value of the last tick, if any.
    pub fn last_value(&self) -> Option<i64> {
        (!self.is_empty()).then(|| self.value_of(self.count - 1))
    }

    pub fn iter(&self) -> TickIter {
        TickIter {
            window: *self,
            index: 0,
        }
    }

    fn value_of(&self, index: usize) -> i64 {
        self.origin + (self.first_unit + index as i64) * self.unit
    }

    fn descriptor(&self, index: usize) -> TickDescriptor {
        let raw = self.value_of(index);
        let is_major = raw.rem_euclid(self.label_interval) == 0;
        TickDescriptor {
            raw,
            value: self.format.decode(raw),
            pixel_offset: self.first_offset + index as f32 * self.gap,
            is_major,
            label: is_major.then(|| self.format.format(raw)),
            is_marker: self.marker == Some(raw),
        }
    }
}

impl<'a> IntoIterator for &'a TickWindow {
    type Item = TickDescriptor;
    type IntoIter = TickIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`TickWindow`], from left to right.
#[derive(Clone, Debug)]
pub struct TickIter {
    window: TickWindow,
    index: usize,
}

impl Iterator for TickIter {
    type Item = TickDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.window.count {
            return None;
        }
        let tick = self.window.descriptor(self.index);
        self.index += 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.window.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TickIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenths() -> BoundedAxis {
        BoundedAxis::new(0, 1000, 1, 10.0).unwrap()
    }

    #[test]
    fn covers_viewport_plus_padding() {
        let axis = tenths();
        // value 50.0 centred in a 200 px viewport: 10 units each side.
        let window = TickWindow::new(
            &axis,
            5000.0,
            200.0,
            2,
            10,
            LabelFormat::Decimal(DecimalScale::new(1)),
        );
        assert_eq!(window.first_value(), Some(488));
        assert_eq!(window.last_value(), Some(512));
        assert_eq!(window.len(), 25);
    }

    #[test]
    fn offsets_are_relative_to_the_centred_indicator() {
        let axis = tenths();
        let window = TickWindow::new(
            &axis,
            5000.0,
            200.0,
            2,
            10,
            LabelFormat::Decimal(DecimalScale::new(1)),
        );
        let centre = window.iter().find(|tick| tick.raw == 500).unwrap();
        assert_eq!(centre.pixel_offset, 100.0);
        assert!(centre.is_major);
        assert_eq!(centre.label.as_deref(), Some("50"));
        assert_eq!(centre.value, 50.0);

        let minor = window.iter().find(|tick| tick.raw == 505).unwrap();
        assert!(!minor.is_major);
        assert_eq!(minor.label, None);
        assert_eq!(minor.pixel_offset, 150.0);
    }

    #[test]
    fn clipped_to_the_axis() {
        let axis = tenths();
        let window = TickWindow::new(
            &axis,
            0.0,
            200.0,
            2,
            10,
            LabelFormat::Decimal(DecimalScale::new(1)),
        );
        assert_eq!(window.first_value(), Some(0));
        assert_eq!(window.last_value(), Some(12));

        let window = TickWindow::new(
            &axis,
            10_000.0,
            200.0,
            2,
            10,
            LabelFormat::Decimal(DecimalScale::new(1)),
        );
        assert_eq!(window.last_value(), Some(1000));
    }

    #[test]
    fn iteration_restarts() {
        let axis = tenths();
        let window = TickWindow::new(
            &axis,
            2_345.0,
            120.0,
            2,
            10,
            LabelFormat::Decimal(DecimalScale::new(1)),
        );
        let first: Vec<_> = window.iter().collect();
        let second: Vec<_> = (&window).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(window.iter().len(), window.len());
    }

    #[test]
    fn marker_is_flagged_regardless_of_major() {
        let axis = BoundedAxis::new(0, 50_000, 100, 10.0).unwrap();
        let window = TickWindow::new(
            &axis,
            1_500.0,
            300.0,
            3,
            1_000,
            LabelFormat::Decimal(DecimalScale::INTEGER),
        )
        .with_marker(Some(15_300));
        let markers: Vec<_> = window.iter().filter(|tick| tick.is_marker).collect();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].raw, 15_300);
        assert!(!markers[0].is_major);
    }

    #[test]
    fn clock_labels() {
        let axis = BoundedAxis::new(0, 86_400, 60, 12.0).unwrap();
        let window = TickWindow::new(&axis, 720.0, 240.0, 2, 300, LabelFormat::Clock);
        let labels: Vec<_> = window.iter().filter_map(|tick| tick.label).collect();
        assert_eq!(labels, vec!["00:50", "00:55", "01:00", "01:05", "01:10"]);
    }

    #[test]
    fn empty_for_degenerate_viewports() {
        let axis = tenths();
        for width in [0.0, -10.0, f32::NAN] {
            let window = TickWindow::new(
                &axis,
                10.0,
                width,
                2,
                10,
                LabelFormat::Decimal(DecimalScale::new(1)),
            );
            assert!(window.is_empty());
            assert_eq!(window.iter().next(), None);
        }
    }
}
