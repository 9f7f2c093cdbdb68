//! Pointer input for ruler controls
//!
//! Turns raw pointer events into the decisions a ruler needs: whether a
//! press is a horizontal drag, how far it moved, how fast it was released,
//! and how a two-finger pinch scales.

mod drag;
mod gesture_constants;
mod pinch;
mod pointer;
mod velocity_tracker;

pub use drag::*;
pub use gesture_constants::*;
pub use pinch::*;
pub use pointer::*;
pub use velocity_tracker::*;

pub mod prelude {
    pub use crate::drag::{DragDecision, DragRelease, DragTracker};
    pub use crate::gesture_constants::GestureConfig;
    pub use crate::pinch::PinchDetector;
    pub use crate::pointer::{ActivePointers, PointerEvent, PointerEventKind, PointerId};
    pub use crate::velocity_tracker::VelocityTracker;
}
