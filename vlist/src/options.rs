use crate::Color;

/// Visual and interaction parameters of the vertical scrollbar.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollbarStyle {
    /// Width of the track, taken from the right edge of the viewport.
    pub width: f32,
    pub min_thumb_height: f32,
    pub corner_radius: f32,
    pub track_color: Color,
    pub thumb_color: Color,
    pub thumb_hover_color: Color,
    pub thumb_drag_color: Color,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            width: 10.0,
            min_thumb_height: 16.0,
            corner_radius: 4.0,
            track_color: Color::rgba(0x20, 0x20, 0x20, 0x60),
            thumb_color: Color::rgba(0x90, 0x90, 0x90, 0xc0),
            thumb_hover_color: Color::rgba(0xb0, 0xb0, 0xb0, 0xe0),
            thumb_drag_color: Color::rgba(0xd0, 0xd0, 0xd0, 0xff),
        }
    }
}

/// Configuration for [`crate::Scroller`].
///
/// All fields are plain data; use the `with_*` builders or struct update syntax.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListOptions {
    /// Initial capacity of the window cache. The cache grows past this when a single frame
    /// shows more items than fit.
    pub initial_window: usize,
    /// Extra pixels painted (and measured) below the viewport bottom.
    pub lookahead: f32,
    /// Lower bound applied to every measured height. Never below 1px.
    pub min_item_height: f32,
    /// Height assumed for unmeasured items before anything has been measured.
    pub estimated_item_height: f32,
    /// Tolerance used when deciding whether the view sits at the end of the list.
    pub at_end_epsilon: f32,
    /// Multiplier applied to wheel deltas reported by the input layer.
    pub wheel_scale: f32,
    pub scrollbar: ScrollbarStyle,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            initial_window: 50,
            lookahead: 100.0,
            min_item_height: 1.0,
            estimated_item_height: 20.0,
            at_end_epsilon: 0.5,
            wheel_scale: 1.0,
            scrollbar: ScrollbarStyle::default(),
        }
    }
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_window(mut self, initial_window: usize) -> Self {
        self.initial_window = initial_window;
        self
    }

    pub fn with_lookahead(mut self, lookahead: f32) -> Self {
        self.lookahead = lookahead;
        self
    }

    pub fn with_min_item_height(mut self, min_item_height: f32) -> Self {
        self.min_item_height = min_item_height;
        self
    }

    pub fn with_estimated_item_height(mut self, estimated_item_height: f32) -> Self {
        self.estimated_item_height = estimated_item_height;
        self
    }

    pub fn with_at_end_epsilon(mut self, at_end_epsilon: f32) -> Self {
        self.at_end_epsilon = at_end_epsilon;
        self
    }

    pub fn with_wheel_scale(mut self, wheel_scale: f32) -> Self {
        self.wheel_scale = wheel_scale;
        self
    }

    pub fn with_scrollbar(mut self, scrollbar: ScrollbarStyle) -> Self {
        self.scrollbar = scrollbar;
        self
    }

    /// Derives the parameters the scroll algorithms need for a viewport of the given height.
    pub fn scroll_context(&self, viewport_height: f32) -> ScrollContext {
        ScrollContext {
            viewport_height: finite_or(viewport_height, 0.0).max(0.0),
            lookahead: finite_or(self.lookahead, 0.0).max(0.0),
            min_item_height: finite_or(self.min_item_height, 1.0).max(1.0),
            estimated_item_height: finite_or(self.estimated_item_height, 1.0).max(1.0),
            epsilon: finite_or(self.at_end_epsilon, 0.0).max(0.0),
        }
    }
}

/// Per-frame numeric parameters of the scroll algorithms.
///
/// Built by [`ListOptions::scroll_context`], which sanitizes every field; hosts driving
/// [`crate::ScrollState`] directly can also construct it with [`ScrollContext::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollContext {
    pub viewport_height: f32,
    pub lookahead: f32,
    pub min_item_height: f32,
    pub estimated_item_height: f32,
    pub epsilon: f32,
}

impl ScrollContext {
    pub fn new(viewport_height: f32) -> Self {
        ListOptions::default().scroll_context(viewport_height)
    }

    /// Remaining deltas above this are far from the landing zone: items passed over are not
    /// fetched, their heights come from the ledger or the running average.
    pub fn jump_threshold(&self) -> f32 {
        2.0 * self.viewport_height + self.lookahead
    }

    /// Raises zero, negative and non-finite heights to `min_item_height`.
    pub(crate) fn sanitize_height(&self, raw: f32) -> f32 {
        if raw.is_finite() && raw >= self.min_item_height {
            return raw;
        }
        vwarn!(raw, "item reported a degenerate height; clamping");
        self.min_item_height
    }
}

fn finite_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() { v } else { fallback }
}
