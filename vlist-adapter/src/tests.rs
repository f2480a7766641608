use crate::*;

use alloc::format;
use alloc::vec::Vec;
use vlist::{Align, DataSource, ItemHandle, ItemView, LayoutPass, ListOptions, Point, Rect};

fn log_rows(n: usize) -> VecSource<TextRow> {
    (0..n).map(|i| TextRow::new(i as u64, format!("line {i}"))).collect()
}

#[test]
fn text_row_wraps_by_characters_and_newlines() {
    let row = TextRow::new(1, "hello");
    assert_eq!(row.chars_per_line(100.0), 12);
    assert_eq!(row.layout(LayoutPass::Measure, 100.0), 22.0);

    let row = TextRow::new(2, "abcdefghijklmnopqrstuvwxyz0123");
    assert_eq!(row.line_count(100.0), 3);
    assert_eq!(row.layout(LayoutPass::Measure, 100.0), 58.0);

    let row = TextRow::new(3, "a\n\nb");
    assert_eq!(row.line_count(1000.0), 3);

    // Degenerate widths still give one character per line.
    assert_eq!(TextRow::new(4, "abc").line_count(0.0), 3);
}

#[test]
fn text_row_paints_each_wrapped_line() {
    let row = TextRow::new(7, "abcdefghijklmnopqrstuvwxyz0123");
    let mut surface = RecordingSurface::new();
    let h = row.layout(
        LayoutPass::Paint {
            origin: Point::new(10.0, 20.0),
            surface: &mut surface,
        },
        100.0,
    );
    assert_eq!(h, 58.0);

    let lines: Vec<(Point, &str)> = surface.texts().collect();
    assert_eq!(
        lines,
        [
            (Point::new(12.0, 22.0), "abcdefghijkl"),
            (Point::new(12.0, 40.0), "mnopqrstuvwx"),
            (Point::new(12.0, 58.0), "yz0123"),
        ]
    );
    assert_eq!(row.handle(99), ItemHandle(7));
}

#[test]
fn text_row_splits_on_char_boundaries() {
    let row = TextRow::new(0, "ééé").with_padding(0.0);
    let mut surface = RecordingSurface::new();
    row.layout(
        LayoutPass::Paint {
            origin: Point::new(0.0, 0.0),
            surface: &mut surface,
        },
        16.0,
    );
    let lines: Vec<&str> = surface.texts().map(|(_, t)| t).collect();
    assert_eq!(lines, ["éé", "é"]);
}

#[test]
fn vec_source_counts_fetches() {
    let mut src = VecSource::new(alloc::vec![1, 2, 3]);
    assert_eq!(src.count(), 3);
    assert_eq!(src.fetch(1), Some(2));
    assert_eq!(src.fetch(3), None);
    assert_eq!(src.fetches(), 2);

    src.push(4);
    src.extend([5, 6]);
    assert_eq!(src.count(), 6);
    src.truncate(2);
    assert_eq!(src.items(), &[1, 2]);
}

#[test]
fn input_tracker_derives_edges() {
    let mut t = InputTracker::new();
    let p = Some(Point::new(1.0, 2.0));

    t.on_wheel(3.0);
    t.on_wheel(4.0);
    t.on_wheel(f32::NAN);
    let f = t.next_frame(p, true);
    assert!(f.pressed && f.down && !f.released);
    assert_eq!(f.wheel, 7.0);

    let f = t.next_frame(p, true);
    assert!(!f.pressed && f.down);
    assert_eq!(f.wheel, 0.0);

    let f = t.next_frame(p, false);
    assert!(f.released && !f.down);

    assert_eq!(
        FrameInput::new().pointer_at(1.0, 2.0).press(),
        FrameInput {
            pointer: p,
            wheel: 0.0,
            pressed: true,
            released: false,
            down: true,
        }
    );
}

#[test]
fn list_view_follows_an_appended_tail() {
    let viewport = Rect::new(0.0, 0.0, 300.0, 220.0);
    let mut view = ListView::new(log_rows(20), viewport, ListOptions::new());
    let mut surface = RecordingSurface::new();

    view.frame(&mut surface, &FrameInput::new());
    view.scroll_to_end();
    assert!(view.is_pinned());
    assert_eq!(view.state().first_index(), 10);

    for i in 20..25 {
        view.source_mut()
            .push(TextRow::new(i, format!("line {i}")));
    }
    surface.clear();
    let r = view.frame(&mut surface, &FrameInput::new());
    assert!(view.is_pinned());
    assert_eq!(view.state().first_index(), 15);
    assert_eq!(view.state().position(), 25.0 * 22.0 - 220.0);
    assert_eq!(r.thumb.thumb.bottom(), 220.0);
    assert_eq!(r.painted, 15..25);
    assert!(surface.texts().any(|(_, t)| t == "line 24"));
}

#[test]
fn list_view_stays_put_when_not_pinned() {
    let viewport = Rect::new(0.0, 0.0, 300.0, 220.0);
    let mut view = ListView::new(log_rows(100), viewport, ListOptions::new());
    let mut surface = RecordingSurface::new();

    view.frame(&mut surface, &FrameInput::new());
    view.scroll_by(110.0);
    let before = view.state().snapshot();

    view.source_mut().extend(log_rows(50).items().iter().cloned());
    view.frame(&mut surface, &FrameInput::new());
    assert_eq!(view.state().position(), before.position);
    assert_eq!(view.state().item_count_estimate(), 150);
    assert!(!view.is_pinned());
}

#[test]
fn list_view_reports_clicks_and_applies_wheel() {
    let viewport = Rect::new(0.0, 0.0, 300.0, 220.0);
    let mut view = ListView::new(log_rows(100), viewport, ListOptions::new());
    let mut surface = RecordingSurface::new();
    view.frame(&mut surface, &FrameInput::new());

    let r = view.frame(&mut surface, &FrameInput::new().pointer_at(40.0, 70.0).press());
    assert_eq!(r.hovered, Some(ItemHandle(3)));
    assert_eq!(r.clicked, Some(ItemHandle(3)));

    let r = view.frame(
        &mut surface,
        &FrameInput::new().pointer_at(40.0, 70.0).with_wheel(44.0),
    );
    assert!(r.scrolled);
    assert_eq!(view.state().first_index(), 2);

    view.scroll_to_index(50, Align::Start);
    assert_eq!(view.state().first_index(), 50);
}

#[test]
fn list_view_thumb_drag_through_tracked_input() {
    let viewport = Rect::new(0.0, 0.0, 300.0, 220.0);
    let mut view = ListView::new(log_rows(1000), viewport, ListOptions::new());
    let mut surface = RecordingSurface::new();
    let mut tracker = InputTracker::new();

    view.frame(&mut surface, &tracker.next_frame(None, false));
    let thumb = view.thumb();
    assert!(thumb.scrollable);

    let grab = Point::new(thumb.thumb.x + 2.0, thumb.thumb.y + 2.0);
    view.frame(&mut surface, &tracker.next_frame(Some(grab), true));
    assert!(view.state().is_dragging());

    let moved = Point::new(grab.x, grab.y + 100.0);
    view.frame(&mut surface, &tracker.next_frame(Some(moved), true));
    assert!(view.state().position() > 0.0);
    let thumb = view.thumb();
    assert!((thumb.thumb.y - 100.0).abs() < 1.0);

    view.frame(&mut surface, &tracker.next_frame(Some(moved), false));
    assert!(!view.state().is_dragging());
}

#[test]
fn replacing_the_source_starts_over() {
    let viewport = Rect::new(0.0, 0.0, 300.0, 220.0);
    let mut view = ListView::new(log_rows(100), viewport, ListOptions::new());
    let mut surface = RecordingSurface::new();
    view.frame(&mut surface, &FrameInput::new());
    view.scroll_by(500.0);

    let old = view.replace_source(log_rows(3));
    assert_eq!(old.count(), 100);
    assert_eq!(view.state().position(), 0.0);

    surface.clear();
    let r = view.frame(&mut surface, &FrameInput::new());
    assert_eq!(r.painted, 0..3);
    assert!(view.is_pinned());
    assert!(!r.thumb.scrollable);
    assert!(surface.rounded_rects().next().is_none());
}
