//! Ruler controls
//!
//! Three pointer-driven value pickers built on one drag/fling/snap engine:
//! [`NumberRuler`] for decimal ranges, [`MoneyRuler`] for whole amounts with
//! a balance marker and [`TimeRuler`] for a time of day with pinch zoom.
//!
//! Controls own no clock and draw nothing. The host feeds pointer events to
//! `handle_pointer`, calls `advance` once per frame while `is_animating`, and
//! renders the [`TickWindow`](ruler_core::TickWindow) from `visible_ticks`.

#[macro_use]
mod gesture_log;

mod config;
mod control;
mod engine;
mod money_ruler;
mod number_ruler;
mod time_ruler;

pub use config::*;
pub use control::*;
pub use engine::GestureState;
pub use money_ruler::*;
pub use number_ruler::*;
pub use time_ruler::*;

pub use ruler_core::{
    format_hh_mm, format_hh_mm_ss, Dp, IntervalSpan, RulerError, TickDescriptor, TickWindow,
    TimeInterval, ZoomTier,
};
pub use ruler_foundation::{GestureConfig, PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::config::{MoneyRulerConfig, NumberRulerConfig, TimeRulerConfig};
    pub use crate::control::RulerControl;
    pub use crate::engine::GestureState;
    pub use crate::money_ruler::MoneyRuler;
    pub use crate::number_ruler::NumberRuler;
    pub use crate::time_ruler::{TimeRuler, TimeTickLevel};
    pub use ruler_core::prelude::*;
    pub use ruler_foundation::prelude::*;
}
