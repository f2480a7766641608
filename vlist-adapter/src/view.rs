use vlist::{
    Align, DataSource, FrameCx, Input, ItemView, ListOptions, ListResponse, Rect, ScrollState,
    Scroller, Surface, ThumbGeometry, scrollbar_with,
};

/// A framework-neutral list view: one data source, its scroll state and its scroller.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `set_viewport` when the layout assigns the list a rectangle
/// - `frame(surface, input)` once per rendered frame
/// - `scroll_to_index` / `scroll_by` for programmatic scrolling
pub struct ListView<S: DataSource> {
    source: S,
    state: ScrollState,
    scroller: Scroller<S::Item>,
    viewport: Rect,
}

impl<S> ListView<S>
where
    S: DataSource,
    S::Item: ItemView,
{
    pub fn new(source: S, viewport: Rect, options: ListOptions) -> Self {
        Self {
            source,
            state: ScrollState::new(),
            scroller: Scroller::new(options),
            viewport,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source, e.g. to append items. Appended items are picked up on the
    /// next frame; a view pinned to the end keeps following the tail.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn scroller(&self) -> &Scroller<S::Item> {
        &self.scroller
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Swaps in a new source, dropping cached items and starting from the top.
    pub fn replace_source(&mut self, source: S) -> S {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "vlist_adapter", count = source.count(), "ListView::replace_source");
        self.scroller.invalidate();
        self.state = ScrollState::new();
        core::mem::replace(&mut self.source, source)
    }

    pub fn frame(&mut self, surface: &mut dyn Surface, input: &dyn Input) -> ListResponse {
        let mut cx = FrameCx::new(surface, input);
        self.scroller
            .frame(&mut self.state, self.viewport, &mut self.source, &mut cx)
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroller
            .scroll_by(&mut self.state, self.viewport, &mut self.source, delta);
    }

    pub fn scroll_to_index(&mut self, index: usize, align: Align) {
        self.scroller.scroll_to_index(
            &mut self.state,
            self.viewport,
            &mut self.source,
            index,
            align,
        );
    }

    /// Pins the view to the end of the list; it then follows appended items.
    pub fn scroll_to_end(&mut self) {
        self.scroll_by(f32::MAX);
    }

    pub fn is_pinned(&self) -> bool {
        self.state.at_end()
    }

    pub fn thumb(&self) -> ThumbGeometry {
        scrollbar_with(&self.state, self.viewport, self.scroller.options())
    }
}

impl<S: DataSource> core::fmt::Debug for ListView<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListView")
            .field("state", &self.state.snapshot())
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
