use core::ops::Range;

use crate::scrollbar::scrollbar_with;
use crate::{
    Align, DataSource, FnSource, Input, ItemHandle, ItemView, LayoutPass, ListOptions, Measurer,
    Point, Rect, ScrollContext, ScrollState, Surface, ThumbGeometry, WindowCache,
};

/// The host services one frame is drawn with.
pub struct FrameCx<'a> {
    pub surface: &'a mut dyn Surface,
    pub input: &'a dyn Input,
}

impl<'a> FrameCx<'a> {
    pub fn new(surface: &'a mut dyn Surface, input: &'a dyn Input) -> Self {
        Self { surface, input }
    }
}

impl core::fmt::Debug for FrameCx<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameCx").finish_non_exhaustive()
    }
}

/// What happened during one [`Scroller::frame`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListResponse {
    /// Item under the pointer, if any.
    pub hovered: Option<ItemHandle>,
    /// Item the primary button was pressed on this frame.
    pub clicked: Option<ItemHandle>,
    /// True when a wheel, drag or track-click delta was applied.
    pub scrolled: bool,
    /// Scrollbar geometry after this frame's scroll.
    pub thumb: ThumbGeometry,
    /// Indices handed to the paint pass (including the lookahead).
    pub painted: Range<usize>,
}

/// Per-view orchestrator: owns the window cache and drives paint, input and scroll each frame.
///
/// The cache is created on first use with [`ListOptions::initial_window`] capacity.
#[derive(Clone, Debug)]
pub struct Scroller<T> {
    options: ListOptions,
    cache: Option<WindowCache<T>>,
}

impl<T> Default for Scroller<T> {
    fn default() -> Self {
        Self::new(ListOptions::default())
    }
}

impl<T> Scroller<T> {
    pub fn new(options: ListOptions) -> Self {
        Self {
            options,
            cache: None,
        }
    }

    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: ListOptions) {
        self.options = options;
    }

    /// The window cache, once the first frame has created it.
    pub fn cache(&self) -> Option<&WindowCache<T>> {
        self.cache.as_ref()
    }

    pub fn cache_mut(&mut self) -> &mut WindowCache<T> {
        let initial = self.options.initial_window;
        self.cache.get_or_insert_with(|| WindowCache::new(initial))
    }

    /// Drops all cached items (e.g. after the host replaced the data wholesale).
    pub fn invalidate(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }

    fn content_rect(&self, viewport: Rect) -> Rect {
        viewport.split_right(self.options.scrollbar.width).0
    }
}

impl<T: ItemView> Scroller<T> {
    /// Runs one frame: settles `state` against the source, paints the visible items, applies
    /// this frame's wheel and scrollbar input, and paints the scrollbar.
    ///
    /// Scroll input changes `state`; the new position is painted on the next frame.
    pub fn frame<S>(
        &mut self,
        state: &mut ScrollState,
        viewport: Rect,
        source: &mut S,
        cx: &mut FrameCx<'_>,
    ) -> ListResponse
    where
        S: DataSource<Item = T> + ?Sized,
    {
        let options = self.options;
        let content = self.content_rect(viewport);
        let ctx = self.prepare(state, viewport, source);
        let mut response = ListResponse::default();

        if state.item_count_estimate() == 0 {
            state.settle(&ctx, &mut |_: usize| None::<f32>);
            response.thumb = scrollbar_with(state, viewport, &options);
            return response;
        }

        {
            let mut m = self.measurer(source, content.width);
            state.settle(&ctx, &mut m);
        }
        self.paint_items(state, content, &ctx, source, cx, &mut response);

        let delta = self.input_delta(state, viewport, cx.input);
        let mut m = self.measurer(source, content.width);
        if delta != 0.0 {
            state.scroll_by(delta, &ctx, &mut m);
            response.scrolled = true;
        } else {
            state.settle(&ctx, &mut m);
        }

        response.thumb = scrollbar_with(state, viewport, &options);
        self.paint_scrollbar(state, response.thumb, cx);
        state.check_invariants(ctx.epsilon);
        response
    }

    /// Scrolls by `delta` content pixels outside of a frame.
    pub fn scroll_by<S>(&mut self, state: &mut ScrollState, viewport: Rect, source: &mut S, delta: f32)
    where
        S: DataSource<Item = T> + ?Sized,
    {
        let width = self.content_rect(viewport).width;
        let ctx = self.prepare(state, viewport, source);
        let mut m = self.measurer(source, width);
        state.scroll_by(delta, &ctx, &mut m);
    }

    /// Scrolls as if the scrollbar thumb had been dragged by `pointer_delta` pixels.
    pub fn drag_thumb<S>(
        &mut self,
        state: &mut ScrollState,
        viewport: Rect,
        source: &mut S,
        pointer_delta: f32,
    ) where
        S: DataSource<Item = T> + ?Sized,
    {
        let width = self.content_rect(viewport).width;
        let ctx = self.prepare(state, viewport, source);
        let thumb = scrollbar_with(state, viewport, &self.options);
        let extent = state.scroll_extent(ctx.estimated_item_height);
        let delta = thumb.content_delta(pointer_delta, extent, ctx.viewport_height);
        let mut m = self.measurer(source, width);
        state.scroll_by(delta, &ctx, &mut m);
    }

    pub fn scroll_to_index<S>(
        &mut self,
        state: &mut ScrollState,
        viewport: Rect,
        source: &mut S,
        index: usize,
        align: Align,
    ) where
        S: DataSource<Item = T> + ?Sized,
    {
        let width = self.content_rect(viewport).width;
        let ctx = self.prepare(state, viewport, source);
        let mut m = self.measurer(source, width);
        state.scroll_to_index(index, align, &ctx, &mut m);
    }

    fn prepare<S>(&mut self, state: &mut ScrollState, viewport: Rect, source: &mut S) -> ScrollContext
    where
        S: DataSource<Item = T> + ?Sized,
    {
        let count = source.count();
        let content = self.content_rect(viewport);
        state.set_item_count(count);
        state.set_viewport(content.width, viewport.height);
        self.cache_mut().clamp_to(count);
        self.options.scroll_context(viewport.height)
    }

    fn measurer<'a, S>(&'a mut self, source: &'a mut S, width: f32) -> CacheMeasurer<'a, T, S>
    where
        S: DataSource<Item = T> + ?Sized,
    {
        CacheMeasurer {
            cache: self.cache_mut(),
            source,
            width,
        }
    }

    fn paint_items<S>(
        &mut self,
        state: &mut ScrollState,
        content: Rect,
        ctx: &ScrollContext,
        source: &mut S,
        cx: &mut FrameCx<'_>,
        response: &mut ListResponse,
    ) where
        S: DataSource<Item = T> + ?Sized,
    {
        let pointer = cx
            .input
            .pointer_position()
            .filter(|p| content.contains(*p));
        let pressed = cx.input.primary_pressed();
        let limit = content.bottom() + ctx.lookahead;
        let first = state.first_index();
        let mut index = first;
        let mut y = content.y - state.offset();

        let cache = self.cache_mut();
        cx.surface.clip(Some(content));
        while y < limit {
            let Some(item) = cache.get(index, &mut *source) else {
                if index < state.item_count_estimate() {
                    vdebug!(index, "paint pass ended below the reported count");
                    state.set_item_count(index);
                }
                break;
            };
            let origin = Point::new(content.x, y);
            let raw = item.layout(
                LayoutPass::Paint {
                    origin,
                    surface: &mut *cx.surface,
                },
                content.width,
            );
            let handle = item.handle(index);
            state.record_height(index, raw, ctx);
            let height = state.item_height(index).unwrap_or(ctx.min_item_height);

            if let Some(p) = pointer {
                if p.y >= y && p.y < y + height {
                    response.hovered = Some(handle);
                    if pressed {
                        response.clicked = Some(handle);
                    }
                }
            }
            y += height;
            index += 1;
        }
        cx.surface.clip(None);

        cache.grow_window(index - first);
        response.painted = first..index;
        vtrace!(first, end = index, "Scroller painted items");
    }

    /// Collects this frame's scroll delta from the wheel, the thumb drag and track clicks.
    fn input_delta(&self, state: &mut ScrollState, viewport: Rect, input: &dyn Input) -> f32 {
        let options = &self.options;
        let view = viewport.height.max(0.0);
        let mut delta = 0.0;

        if input.pointer_in(viewport) {
            let wheel = input.wheel_delta() * options.wheel_scale;
            if wheel.is_finite() {
                delta += wheel;
            }
        }

        let geometry = scrollbar_with(state, viewport, options);
        let pointer = input.pointer_position();
        if let Some(p) = pointer {
            if input.primary_pressed() && geometry.scrollable && geometry.track.contains(p) {
                if geometry.thumb.contains(p) {
                    state.begin_drag(p.y - geometry.thumb.y);
                } else if p.y < geometry.thumb.y {
                    delta -= view;
                } else {
                    delta += view;
                }
            }
        }

        if state.is_dragging() {
            if input.primary_released() || !input.primary_down() {
                state.end_drag();
            } else if let Some(p) = pointer {
                let target = p.y - state.drag_anchor();
                let extent = state.scroll_extent(options.scroll_context(view).estimated_item_height);
                delta += geometry.content_delta(target - geometry.thumb.y, extent, view);
            }
        }
        delta
    }

    fn paint_scrollbar(&self, state: &ScrollState, geometry: ThumbGeometry, cx: &mut FrameCx<'_>) {
        if !geometry.scrollable {
            return;
        }
        let style = &self.options.scrollbar;
        let color = if state.is_dragging() {
            style.thumb_drag_color
        } else if cx.input.pointer_in(geometry.thumb) {
            style.thumb_hover_color
        } else {
            style.thumb_color
        };
        cx.surface
            .draw_rounded_rect(geometry.track, style.corner_radius, style.track_color);
        cx.surface
            .draw_rounded_rect(geometry.thumb, style.corner_radius, color);
    }
}

/// Measures items through the window cache with [`LayoutPass::Measure`].
struct CacheMeasurer<'a, T, S: ?Sized> {
    cache: &'a mut WindowCache<T>,
    source: &'a mut S,
    width: f32,
}

impl<T, S> Measurer for CacheMeasurer<'_, T, S>
where
    T: ItemView,
    S: DataSource<Item = T> + ?Sized,
{
    fn measure(&mut self, index: usize) -> Option<f32> {
        let item = self.cache.get(index, &mut *self.source)?;
        Some(item.layout(LayoutPass::Measure, self.width))
    }
}

/// Paints one frame of a virtualized list backed by a `fetch`/`count` closure pair.
///
/// `state` is the caller-owned scroll position; `scroller` holds the window cache between
/// frames. Both belong to one view.
pub fn virtualized_list<T, F, C>(
    scroller: &mut Scroller<T>,
    state: &mut ScrollState,
    viewport: Rect,
    fetch: F,
    count: C,
    cx: &mut FrameCx<'_>,
) -> ListResponse
where
    T: ItemView,
    F: FnMut(usize) -> Option<T>,
    C: Fn() -> usize,
{
    let mut source = FnSource::new(count, fetch);
    scroller.frame(state, viewport, &mut source, cx)
}
