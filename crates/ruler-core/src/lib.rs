//! Value-selection core for ruler controls
//!
//! This crate holds the pure arithmetic shared by every ruler: fixed-point
//! values, the value/pixel mapping, range clamping, grid snapping, the time
//! ruler's zoom tiers and the visible tick window. It knows nothing about
//! pointers, frames or drawing.

mod axis;
mod clock;
mod decimal;
mod error;
mod geometry;
mod interval;
mod snap;
mod ticks;
mod unit_space;
mod zoom;

pub use axis::*;
pub use clock::*;
pub use decimal::*;
pub use error::*;
pub use geometry::*;
pub use interval::*;
pub use snap::*;
pub use ticks::*;
pub use unit_space::*;
pub use zoom::*;

pub mod prelude {
    pub use crate::axis::BoundedAxis;
    pub use crate::decimal::DecimalScale;
    pub use crate::error::{Result, RulerError};
    pub use crate::geometry::{Dp, Point};
    pub use crate::interval::{IntervalSpan, TimeInterval};
    pub use crate::snap::{SnapResolver, Snapped};
    pub use crate::ticks::{LabelFormat, TickDescriptor, TickWindow};
    pub use crate::zoom::{ZoomState, ZoomTier, ZoomTierQuantizer};
}

#[cfg(test)]
#[path = "tests/property_tests.rs"]
mod property_tests;
