use std::time::Duration;

use ruler_foundation::PointerEvent;

use crate::engine::GestureState;

/// The host-facing surface every ruler shares: pointer input in, frame ticks
/// in, redraw and animation state out.
pub trait RulerControl {
    /// Feeds one pointer event. Returns whether a redraw is needed.
    fn handle_pointer(&mut self, event: &PointerEvent) -> bool;

    /// Advances any running motion by `dt`. Returns whether the control is
    /// still animating.
    fn advance(&mut self, dt: Duration) -> bool;

    fn is_animating(&self) -> bool;

    fn gesture_state(&self) -> GestureState;

    /// Pixel distance of the selection from the start of the axis.
    fn position(&self) -> f32;
}
