use crate::{ListOptions, Rect, ScrollState, ThumbGeometry};

/// Scrollbar geometry for `state` inside `viewport`, with the default [`ListOptions`].
///
/// Read-only; intended for hosts that draw their own scrollbar skin.
pub fn scrollbar(state: &ScrollState, viewport: Rect) -> ThumbGeometry {
    scrollbar_with(state, viewport, &ListOptions::default())
}

/// Like [`scrollbar`], but with the track width, minimum thumb height and height estimate taken
/// from `options`.
pub fn scrollbar_with(state: &ScrollState, viewport: Rect, options: &ListOptions) -> ThumbGeometry {
    let (_, track) = viewport.split_right(options.scrollbar.width);
    let ctx = options.scroll_context(viewport.height);
    thumb_geometry(
        track,
        state.position(),
        state.scroll_extent(ctx.estimated_item_height),
        ctx.viewport_height,
        state.at_end(),
        options.scrollbar.min_thumb_height,
    )
}

/// Places the thumb inside `track`.
///
/// The thumb's share of the track is the viewport's share of the extent (at least
/// `min_thumb_height`); its travel maps linearly onto the scrollable range. A view pinned to the
/// end puts the thumb on the track bottom. Content that fits the viewport yields a
/// non-scrollable geometry whose thumb fills the track.
pub fn thumb_geometry(
    track: Rect,
    position: f32,
    extent: f32,
    viewport_height: f32,
    at_end: bool,
    min_thumb_height: f32,
) -> ThumbGeometry {
    let track_h = track.height.max(0.0);
    if !(viewport_height > 0.0) || !(extent > viewport_height) || track_h <= 0.0 {
        return ThumbGeometry {
            track,
            thumb: track,
            scrollable: false,
        };
    }

    let min = min_thumb_height.max(0.0).min(track_h);
    let height = (viewport_height * viewport_height / extent).clamp(min, track_h);
    let travel = track_h - height;
    let top = if at_end {
        travel
    } else {
        (position * travel / (extent - viewport_height)).clamp(0.0, travel)
    };

    ThumbGeometry {
        track,
        thumb: Rect::new(track.x, track.y + top, track.width, height),
        scrollable: true,
    }
}
