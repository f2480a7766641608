use crate::{Color, ItemHandle, Point, Rect};

/// The drawing services the list paints through. Implemented by the host renderer.
pub trait Surface {
    /// Restricts subsequent drawing to `rect`; `None` removes the clip.
    fn clip(&mut self, rect: Option<Rect>);

    fn draw_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color);

    fn draw_text(&mut self, origin: Point, text: &str, color: Color);
}

/// Which of the two layout passes an item is asked to run.
pub enum LayoutPass<'a> {
    /// Report the height only; nothing may be drawn.
    Measure,
    /// Report the height and draw with the top-left corner at `origin`.
    Paint {
        origin: Point,
        surface: &'a mut dyn Surface,
    },
}

impl LayoutPass<'_> {
    pub fn is_measure(&self) -> bool {
        matches!(self, Self::Measure)
    }
}

impl core::fmt::Debug for LayoutPass<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Measure => f.write_str("Measure"),
            Self::Paint { origin, .. } => f
                .debug_struct("Paint")
                .field("origin", origin)
                .finish_non_exhaustive(),
        }
    }
}

/// A list item: lays itself out at a given width and reports its height.
///
/// Both passes must report the same height for the same width, otherwise the list corrects its
/// bookkeeping on the next frame (a one-frame thumb jitter).
pub trait ItemView {
    fn layout(&self, pass: LayoutPass<'_>, width: f32) -> f32;

    /// Identity used for hover/click reporting. Defaults to the index.
    fn handle(&self, index: usize) -> ItemHandle {
        ItemHandle::from_index(index)
    }
}

impl<T: ItemView + ?Sized> ItemView for &T {
    fn layout(&self, pass: LayoutPass<'_>, width: f32) -> f32 {
        (**self).layout(pass, width)
    }

    fn handle(&self, index: usize) -> ItemHandle {
        (**self).handle(index)
    }
}
