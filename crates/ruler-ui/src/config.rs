//! Construction-time settings for the ruler controls.

use ruler_core::{Dp, ZoomTier, DEFAULT_ZOOM_TIERS};
use ruler_foundation::GestureConfig;

/// Settings for [`NumberRuler`](crate::NumberRuler).
#[derive(Clone, Debug, PartialEq)]
pub struct NumberRulerConfig {
    pub min_value: f64,
    pub max_value: f64,
    pub current_value: f64,
    /// Value between adjacent ticks.
    pub unit: f64,
    /// Ticks per labelled tick.
    pub per_count: u32,
    /// Distance between adjacent ticks.
    pub gap: Dp,
    pub padding_units: u32,
    pub gesture: GestureConfig,
    pub debug_logging: bool,
}

impl Default for NumberRulerConfig {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 100.0,
            current_value: 50.0,
            unit: 0.1,
            per_count: 10,
            gap: Dp(10.0),
            padding_units: 2,
            gesture: GestureConfig::default(),
            debug_logging: false,
        }
    }
}

impl NumberRulerConfig {
    pub fn range(mut self, min_value: f64, max_value: f64, current_value: f64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self.current_value = current_value;
        self
    }

    pub fn unit(mut self, unit: f64, per_count: u32) -> Self {
        self.unit = unit;
        self.per_count = per_count;
        self
    }

    pub fn gap(mut self, gap: Dp) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the density on the gesture thresholds as well.
    pub fn density(mut self, density: f32) -> Self {
        self.gesture = GestureConfig::with_density(density);
        self
    }

    pub fn gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = enabled;
        self
    }
}

/// Settings for [`MoneyRuler`](crate::MoneyRuler).
#[derive(Clone, Debug, PartialEq)]
pub struct MoneyRulerConfig {
    pub min_value: i64,
    pub max_value: i64,
    pub current_value: i64,
    /// Balance marker, floored to the unit.
    pub balance: i64,
    pub unit: i64,
    pub per_count: u32,
    pub gap: Dp,
    pub padding_units: u32,
    pub gesture: GestureConfig,
    pub debug_logging: bool,
}

impl Default for MoneyRulerConfig {
    fn default() -> Self {
        Self {
            min_value: 0,
            max_value: 50_000,
            current_value: 0,
            balance: 0,
            unit: 100,
            per_count: 10,
            gap: Dp(6.0),
            padding_units: 3,
            gesture: GestureConfig::default(),
            debug_logging: false,
        }
    }
}

impl MoneyRulerConfig {
    pub fn max_value(mut self, max_value: i64) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn current_value(mut self, current_value: i64) -> Self {
        self.current_value = current_value;
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    pub fn unit(mut self, unit: i64, per_count: u32) -> Self {
        self.unit = unit;
        self.per_count = per_count;
        self
    }

    pub fn gap(mut self, gap: Dp) -> Self {
        self.gap = gap;
        self
    }

    pub fn density(mut self, density: f32) -> Self {
        self.gesture = GestureConfig::with_density(density);
        self
    }

    pub fn gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = enabled;
        self
    }
}

/// Pixels per second of day at scale 1: twelve dp per minute.
pub const DEFAULT_SECOND_GAP: Dp = Dp(12.0 / 60.0);

/// Settings for [`TimeRuler`](crate::TimeRuler).
#[derive(Clone, Debug, PartialEq)]
pub struct TimeRulerConfig {
    /// Seconds since midnight.
    pub current_time: u32,
    /// Width of one second at scale 1.
    pub second_gap: Dp,
    pub initial_scale: f32,
    pub tiers: Vec<ZoomTier>,
    pub padding_units: u32,
    pub gesture: GestureConfig,
    pub debug_logging: bool,
}

impl Default for TimeRulerConfig {
    fn default() -> Self {
        Self {
            current_time: 0,
            second_gap: DEFAULT_SECOND_GAP,
            initial_scale: 1.0,
            tiers: DEFAULT_ZOOM_TIERS.to_vec(),
            padding_units: 2,
            gesture: GestureConfig::default(),
            debug_logging: false,
        }
    }
}

impl TimeRulerConfig {
    pub fn current_time(mut self, seconds: u32) -> Self {
        self.current_time = seconds;
        self
    }

    pub fn initial_scale(mut self, scale: f32) -> Self {
        self.initial_scale = scale;
        self
    }

    pub fn tiers(mut self, tiers: Vec<ZoomTier>) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn density(mut self, density: f32) -> Self {
        self.gesture = GestureConfig::with_density(density);
        self
    }

    pub fn gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = enabled;
        self
    }
}
