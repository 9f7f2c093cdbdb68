//! Discrete zoom tiers for the day-time ruler.
//!
//! A continuous pinch scale is quantized onto a table of tiers. Each tier
//! fixes the grid unit (in seconds) and how often a tick is labelled.

use crate::{Result, RulerError};

/// One grid granularity of the time ruler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTier {
    /// Lowest scale at which this tier is active.
    pub threshold: f32,
    /// Seconds between adjacent ticks.
    pub unit_seconds: u32,
    /// Seconds between labelled ticks.
    pub label_interval: u32,
}

impl ZoomTier {
    pub const fn new(threshold: f32, unit_seconds: u32, label_interval: u32) -> Self {
        Self {
            threshold,
            unit_seconds,
            label_interval,
        }
    }
}

/// Tiers from maximum zoom (10 s units) down to minimum zoom (15 min units).
pub const DEFAULT_ZOOM_TIERS: [ZoomTier; 14] = [
    ZoomTier::new(6.0, 10, 60),
    ZoomTier::new(3.6, 10, 60),
    ZoomTier::new(1.8, 10, 2 * 60),
    ZoomTier::new(1.5, 10, 4 * 60),
    ZoomTier::new(0.8, 60, 5 * 60),
    ZoomTier::new(0.4, 60, 10 * 60),
    ZoomTier::new(0.25, 5 * 60, 20 * 60),
    ZoomTier::new(0.125, 5 * 60, 30 * 60),
    ZoomTier::new(0.07, 15 * 60, 3600),
    ZoomTier::new(0.04, 15 * 60, 2 * 3600),
    ZoomTier::new(0.03, 15 * 60, 3 * 3600),
    ZoomTier::new(0.025, 15 * 60, 4 * 3600),
    ZoomTier::new(0.02, 15 * 60, 5 * 3600),
    ZoomTier::new(0.015, 15 * 60, 6 * 3600),
];

/// Maps a scale onto a tier index through a descending threshold table.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomTierQuantizer {
    tiers: Vec<ZoomTier>,
}

impl Default for ZoomTierQuantizer {
    fn default() -> Self {
        Self {
            tiers: DEFAULT_ZOOM_TIERS.to_vec(),
        }
    }
}

impl ZoomTierQuantizer {
    /// Thresholds must be finite, positive and strictly descending.
    pub fn new(tiers: Vec<ZoomTier>) -> Result<Self> {
        if tiers.is_empty() {
            return Err(RulerError::InvalidZoomTable("no tiers"));
        }
        if tiers
            .iter()
            .any(|tier| !tier.threshold.is_finite() || tier.threshold <= 0.0)
        {
            return Err(RulerError::InvalidZoomTable(
                "thresholds must be positive and finite",
            ));
        }
        if tiers.windows(2).any(|pair| pair[0].threshold <= pair[1].threshold) {
            return Err(RulerError::InvalidZoomTable(
                "thresholds must be strictly descending",
            ));
        }
        if tiers
            .iter()
            .any(|tier| tier.unit_seconds == 0 || tier.label_interval == 0)
        {
            return Err(RulerError::InvalidZoomTable(
                "unit and label interval must be positive",
            ));
        }
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[ZoomTier] {
        &self.tiers
    }

    pub fn tier(&self, index: usize) -> &ZoomTier {
        &self.tiers[index.min(self.tiers.len() - 1)]
    }

    pub fn max_scale(&self) -> f32 {
        self.tiers[0].threshold
    }

    pub fn min_scale(&self) -> f32 {
        self.tiers[self.tiers.len() - 1].threshold
    }

    pub fn clamp_scale(&self, scale: f32) -> f32 {
        if scale.is_nan() {
            return self.min_scale();
        }
        scale.clamp(self.min_scale(), self.max_scale())
    }

    /// Index `t` with `thresholds[t] <= scale < thresholds[t - 1]`.
    ///
    /// A scale equal to a threshold belongs to that threshold's tier. Scales
    /// above the first threshold map to 0, scales below the last to the last.
    pub fn tier_index(&self, scale: f32) -> usize {
        let scale = self.clamp_scale(scale);
        self.tiers
            .partition_point(|tier| tier.threshold > scale)
            .min(self.tiers.len() - 1)
    }
}

/// Outcome of one pinch update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ZoomChange {
    pub scale_changed: bool,
    pub tier_changed: bool,
}

/// Current scale and the tier it quantizes to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomState {
    scale: f32,
    tier_index: usize,
}

impl ZoomState {
    pub fn new(quantizer: &ZoomTierQuantizer, scale: f32) -> Self {
        let scale = quantizer.clamp_scale(scale);
        Self {
            scale,
            tier_index: quantizer.tier_index(scale),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn tier_index(&self) -> usize {
        self.tier_index
    }

    /// Applies `scale *= factor`, clamped to the table. Non-positive or
    /// non-finite factors are ignored.
    pub fn apply_factor(&mut self, quantizer: &ZoomTierQuantizer, factor: f32) -> ZoomChange {
        if !factor.is_finite() || factor <= 0.0 {
            return ZoomChange::default();
        }
        let scale = quantizer.clamp_scale(self.scale * factor);
        let tier_index = quantizer.tier_index(scale);
        let change = ZoomChange {
            scale_changed: scale != self.scale,
            tier_changed: tier_index != self.tier_index,
        };
        self.scale = scale;
        self.tier_index = tier_index;
        change
    }

    /// Pixels per grid unit at this zoom:
    /// `scale * seconds_to_px * unit_seconds`.
    pub fn pixels_per_unit(&self, quantizer: &ZoomTierQuantizer, seconds_to_px: f32) -> f32 {
        self.scale * seconds_to_px * quantizer.tier(self.tier_index).unit_seconds as f32
    }
}
