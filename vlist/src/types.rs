#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in surface pixels (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Splits off a strip of `width` pixels on the right edge.
    ///
    /// Returns `(rest, strip)`. The strip never exceeds the rectangle's own width.
    pub fn split_right(&self, width: f32) -> (Rect, Rect) {
        let w = width.clamp(0.0, self.width.max(0.0));
        let rest = Rect::new(self.x, self.y, self.width - w, self.height);
        let strip = Rect::new(self.right() - w, self.y, w, self.height);
        (rest, strip)
    }
}

/// A packed `0xRRGGBBAA` color handed to the drawing surface untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }
}

/// Stable identity of a list item, compared by value.
///
/// Hosts that reorder or insert items should return a data-derived handle from
/// [`crate::ItemView::handle`] so hover/click tracking follows the item rather than the index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u64);

impl ItemHandle {
    pub const fn from_index(index: usize) -> Self {
        Self(index as u64)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
}

/// Scrollbar geometry derived from a [`crate::ScrollState`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThumbGeometry {
    pub track: Rect,
    pub thumb: Rect,
    /// `false` when the content fits in the viewport; the thumb then fills the track.
    pub scrollable: bool,
}

impl ThumbGeometry {
    /// Converts a pointer movement along the track into a content-space scroll delta.
    ///
    /// This is the inverse of the thumb placement ratio, so dragging the thumb by `dy` pixels
    /// moves the thumb by (about) `dy` pixels once the delta has been applied.
    pub fn content_delta(&self, pointer_delta: f32, extent: f32, viewport_height: f32) -> f32 {
        let travel = self.track.height - self.thumb.height;
        let scrollable = extent - viewport_height;
        if !self.scrollable || travel <= 0.0 || scrollable <= 0.0 {
            return 0.0;
        }
        pointer_delta * scrollable / travel
    }
}
