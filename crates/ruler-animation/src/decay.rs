//! Android-feel fling deceleration.
//!
//! The curve is the `android.widget.Scroller` spline: a fling launched with a
//! velocity travels a distance and lasts a duration that both follow from
//! friction and screen density, and the spline shapes the travel in between.

use std::sync::LazyLock;

const INFLECTION: f32 = 0.35;
const START_TENSION: f32 = 0.5;
const END_TENSION: f32 = 1.0;
const P1: f32 = START_TENSION * INFLECTION;
const P2: f32 = 1.0 - END_TENSION * (1.0 - INFLECTION);

const NB_SAMPLES: usize = 100;

/// Distance fraction travelled at `i / NB_SAMPLES` of the fling duration.
static SPLINE_DISTANCE: LazyLock<[f32; NB_SAMPLES + 1]> = LazyLock::new(|| {
    let mut distance = [0.0f32; NB_SAMPLES + 1];
    let mut x_min = 0.0f32;

    for (i, slot) in distance.iter_mut().enumerate().take(NB_SAMPLES) {
        let alpha = i as f32 / NB_SAMPLES as f32;

        // Bisect for the bezier parameter whose time coordinate is alpha.
        let mut x_max = 1.0f32;
        let (x, coef) = loop {
            let x_mid = x_min + (x_max - x_min) / 2.0;
            let coef = 3.0 * x_mid * (1.0 - x_mid);
            let tx = coef * ((1.0 - x_mid) * P1 + x_mid * P2) + x_mid * x_mid * x_mid;
            if (tx - alpha).abs() < 1e-5 {
                break (x_mid, coef);
            }
            if tx > alpha {
                x_max = x_mid;
            } else {
                x_min = x_mid;
            }
        };
        *slot = coef * ((1.0 - x) * START_TENSION + x) + x * x * x;
    }

    distance[NB_SAMPLES] = 1.0;
    distance
});

/// A point on the normalized spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineSample {
    /// Fraction of the total distance covered, `0.0..=1.0`.
    pub distance: f32,
    /// Slope of the distance fraction per unit of normalized time.
    pub velocity: f32,
}

/// Samples the spline at normalized time `t` (clamped to `0.0..=1.0`).
pub fn sample_spline(t: f32) -> SplineSample {
    let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
    let index = (NB_SAMPLES as f32 * t) as usize;
    if index >= NB_SAMPLES {
        return SplineSample {
            distance: 1.0,
            velocity: 0.0,
        };
    }

    let t_inf = index as f32 / NB_SAMPLES as f32;
    let t_sup = (index + 1) as f32 / NB_SAMPLES as f32;
    let d_inf = SPLINE_DISTANCE[index];
    let d_sup = SPLINE_DISTANCE[index + 1];
    let velocity = (d_sup - d_inf) / (t_sup - t_inf);
    SplineSample {
        distance: d_inf + (t - t_inf) * velocity,
        velocity,
    }
}

const GRAVITY_EARTH: f32 = 9.80665;
const INCHES_PER_METER: f32 = 39.37;
/// `|ln(0.78) / ln(0.9)|`
const DECELERATION_RATE: f64 = 2.358_201_6;

/// Scroll friction used by Android's `ViewConfiguration`.
pub const DEFAULT_FRICTION: f32 = 0.015;

/// Friction and density inputs of the fling model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingPhysics {
    friction: f32,
    physical_coefficient: f32,
}

impl Default for FlingPhysics {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

impl FlingPhysics {
    /// `friction`: higher stops sooner. `density`: physical pixels per dp.
    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            physical_coefficient: GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * 0.84,
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(DEFAULT_FRICTION, density)
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64
            / (self.friction * self.physical_coefficient) as f64)
            .ln()
    }

    /// Duration of a fling launched at `velocity` px/s, in milliseconds.
    pub fn duration_ms(&self, velocity: f32) -> f32 {
        let l = self.spline_deceleration(velocity);
        (1000.0 * (l / (DECELERATION_RATE - 1.0)).exp()) as f32
    }

    /// Unsigned distance travelled by a fling launched at `velocity` px/s.
    pub fn distance(&self, velocity: f32) -> f32 {
        let l = self.spline_deceleration(velocity);
        let scale = (DECELERATION_RATE / (DECELERATION_RATE - 1.0) * l).exp();
        (self.friction as f64 * self.physical_coefficient as f64 * scale) as f32
    }

    pub fn curve(&self, velocity: f32) -> FlingCurve {
        FlingCurve {
            direction: velocity.signum(),
            distance: self.distance(velocity),
            duration_ms: self.duration_ms(velocity),
        }
    }
}

/// Position and velocity of one fling over time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingCurve {
    direction: f32,
    distance: f32,
    duration_ms: f32,
}

impl FlingCurve {
    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    /// Signed total travel.
    pub fn total_offset(&self) -> f32 {
        self.direction * self.distance
    }

    fn progress(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms > 0.0 {
            elapsed_ms / self.duration_ms
        } else {
            1.0
        }
    }

    /// Signed travel after `elapsed_ms`.
    pub fn offset_at(&self, elapsed_ms: f32) -> f32 {
        self.total_offset() * sample_spline(self.progress(elapsed_ms)).distance
    }

    /// Signed velocity in px/s after `elapsed_ms`.
    pub fn velocity_at(&self, elapsed_ms: f32) -> f32 {
        if self.duration_ms <= 0.0 {
            return 0.0;
        }
        sample_spline(self.progress(elapsed_ms)).velocity * self.total_offset() / self.duration_ms
            * 1000.0
    }

    pub fn is_finished(&self, elapsed_ms: f32) -> bool {
        elapsed_ms >= self.duration_ms
    }
}
