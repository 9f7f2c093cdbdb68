//! Configuration errors surfaced by the ruler crates.
//!
//! Only invalid configuration is reported. Transient input anomalies and
//! boundary numerics are clamped where they happen and never reach callers.

/// Rejected-argument signal for ruler configuration calls.
///
/// A call that returns an error leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RulerError {
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },
    #[error("value {value} is out of range [{min}, {max}]")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },
    #[error("unit must be positive, got {0}")]
    InvalidUnit(f64),
    #[error("pixel gap per unit must be positive and finite, got {0}")]
    InvalidGap(f32),
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("invalid zoom table: {0}")]
    InvalidZoomTable(&'static str),
    #[error("invalid time interval [{start}, {end}]")]
    InvalidInterval { start: u32, end: u32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T, E = RulerError> = std::result::Result<T, E>;
