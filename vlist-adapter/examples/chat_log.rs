// Example: a chat log driven frame by frame through `ListView`.
use vlist::{ListOptions, Rect};
use vlist_adapter::{InputTracker, ListView, RecordingSurface, TextRow, VecSource};

fn message(id: u64) -> TextRow {
    let body = "lorem ipsum ".repeat((id % 7) as usize + 1);
    TextRow::new(id, format!("#{id}: {body}"))
}

fn main() {
    let source: VecSource<TextRow> = (0..40).map(message).collect();
    let mut view = ListView::new(source, Rect::new(0.0, 0.0, 240.0, 180.0), ListOptions::new());
    let mut surface = RecordingSurface::new();
    let mut input = InputTracker::new();

    view.frame(&mut surface, &input.next_frame(None, false));
    view.scroll_to_end();

    for id in 40..60 {
        view.source_mut().push(message(id));
        surface.clear();
        let r = view.frame(&mut surface, &input.next_frame(None, false));
        println!(
            "count={} painted={:?} pinned={} commands={}",
            view.source().items().len(),
            r.painted,
            view.is_pinned(),
            surface.commands().len()
        );
    }

    // Wheel up over the list: the view stops following new messages.
    input.on_wheel(-120.0);
    let r = view.frame(&mut surface, &input.next_frame(Some(vlist::Point::new(50.0, 50.0)), false));
    println!("scrolled={} pinned={}", r.scrolled, view.is_pinned());
    println!("{view:?}");
}
