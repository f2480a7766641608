// Example: driving the scrollbar by hand and reading its geometry.
use vlist::{ListOptions, Rect, ScrollState, scrollbar, thumb_geometry};

fn main() {
    let viewport = Rect::new(0.0, 0.0, 300.0, 200.0);
    let options = ListOptions::new();
    let ctx = options.scroll_context(viewport.height);
    let heights: Vec<f32> = (0..10_000).map(|i| 16.0 + (i % 7) as f32 * 4.0).collect();
    let mut measure = |i: usize| heights.get(i).copied();

    let mut state = ScrollState::new();
    state.set_viewport(290.0, viewport.height);
    state.set_item_count(heights.len());
    state.settle(&ctx, &mut measure);

    for step in 0..5 {
        let g = scrollbar(&state, viewport);
        let extent = state.scroll_extent(ctx.estimated_item_height);
        // Drag the thumb a fifth of the track.
        let delta = g.content_delta(g.track.height / 5.0, extent, ctx.viewport_height);
        state.scroll_by(delta, &ctx, &mut measure);
        println!(
            "step {step}: thumb_y={:.1} first={} measured={} at_end={}",
            g.thumb.y,
            state.first_index(),
            state.measured_count(),
            state.at_end()
        );
    }

    let track = Rect::new(0.0, 0.0, 8.0, 100.0);
    println!("{:?}", thumb_geometry(track, 250.0, 1000.0, 100.0, false, 12.0));
}
