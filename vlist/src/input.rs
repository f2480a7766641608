use crate::{Point, Rect};

/// Per-frame pointer input, polled by the [`crate::Scroller`].
pub trait Input {
    fn pointer_position(&self) -> Option<Point>;

    /// Scroll delta for this frame in pixels (positive scrolls towards the end of the list).
    fn wheel_delta(&self) -> f32;

    /// The primary button went down this frame.
    fn primary_pressed(&self) -> bool;

    /// The primary button went up this frame.
    fn primary_released(&self) -> bool;

    /// The primary button is held.
    fn primary_down(&self) -> bool;

    fn pointer_in(&self, rect: Rect) -> bool {
        self.pointer_position().is_some_and(|p| rect.contains(p))
    }
}

/// Input that reports nothing; useful for paint-only frames.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoInput;

impl Input for NoInput {
    fn pointer_position(&self) -> Option<Point> {
        None
    }

    fn wheel_delta(&self) -> f32 {
        0.0
    }

    fn primary_pressed(&self) -> bool {
        false
    }

    fn primary_released(&self) -> bool {
        false
    }

    fn primary_down(&self) -> bool {
        false
    }
}
