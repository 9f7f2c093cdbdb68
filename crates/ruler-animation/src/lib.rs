//! Fling physics for ruler controls
//!
//! Provides the Android `Scroller` deceleration spline and a frame-stepped
//! simulator that the host advances once per animation frame.

mod decay;
mod fling;

pub use decay::*;
pub use fling::*;

#[cfg(test)]
#[path = "tests/property_tests.rs"]
mod property_tests;
