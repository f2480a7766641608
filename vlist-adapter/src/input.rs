use vlist::{Input, Point};

/// A snapshot of the pointer for one frame.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, which makes input
/// recordings easy to replay.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameInput {
    pub pointer: Option<Point>,
    pub wheel: f32,
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_at(mut self, x: f32, y: f32) -> Self {
        self.pointer = Some(Point::new(x, y));
        self
    }

    pub fn with_wheel(mut self, delta: f32) -> Self {
        self.wheel = delta;
        self
    }

    /// The primary button goes down this frame.
    pub fn press(mut self) -> Self {
        self.pressed = true;
        self.down = true;
        self
    }

    /// The primary button stays down.
    pub fn hold(mut self) -> Self {
        self.down = true;
        self
    }

    /// The primary button goes up this frame.
    pub fn release(mut self) -> Self {
        self.released = true;
        self.down = false;
        self
    }
}

impl Input for FrameInput {
    fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    fn wheel_delta(&self) -> f32 {
        self.wheel
    }

    fn primary_pressed(&self) -> bool {
        self.pressed
    }

    fn primary_released(&self) -> bool {
        self.released
    }

    fn primary_down(&self) -> bool {
        self.down
    }
}

/// Derives press/release edges from raw button state polled once per frame.
///
/// Wheel deltas reported between frames are accumulated and handed out with the next frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputTracker {
    was_down: bool,
    wheel: f32,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_wheel(&mut self, delta: f32) {
        if delta.is_finite() {
            self.wheel += delta;
        }
    }

    pub fn next_frame(&mut self, pointer: Option<Point>, down: bool) -> FrameInput {
        let input = FrameInput {
            pointer,
            wheel: self.wheel,
            pressed: down && !self.was_down,
            released: !down && self.was_down,
            down,
        };
        self.was_down = down;
        self.wheel = 0.0;
        input
    }
}
