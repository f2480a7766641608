// Example: one frame of a million-row list, then a jump with scroll_to_index.
use vlist::{
    Align, Color, FrameCx, ItemView, LayoutPass, ListOptions, NoInput, Point, Rect, ScrollState,
    Scroller, Surface, virtualized_list,
};

struct Row(usize);

impl ItemView for Row {
    fn layout(&self, pass: LayoutPass<'_>, _width: f32) -> f32 {
        if let LayoutPass::Paint { origin, surface } = pass {
            surface.draw_text(origin, &format!("row {}", self.0), Color(0xffff_ffff));
        }
        18.0
    }
}

#[derive(Default)]
struct Stdout {
    lines: usize,
}

impl Surface for Stdout {
    fn clip(&mut self, _rect: Option<Rect>) {}

    fn draw_rounded_rect(&mut self, rect: Rect, _radius: f32, _color: Color) {
        println!("  rect {:?}", rect);
    }

    fn draw_text(&mut self, origin: Point, text: &str, _color: Color) {
        self.lines += 1;
        println!("  {:>7.1} {text}", origin.y);
    }
}

fn main() {
    let viewport = Rect::new(0.0, 0.0, 320.0, 120.0);
    let mut scroller = Scroller::new(ListOptions::new().with_lookahead(0.0));
    let mut state = ScrollState::new();
    let mut surface = Stdout::default();

    println!("frame 1:");
    let mut cx = FrameCx::new(&mut surface, &NoInput);
    let r = virtualized_list(
        &mut scroller,
        &mut state,
        viewport,
        |i: usize| Some(Row(i)),
        || 1_000_000usize,
        &mut cx,
    );
    println!("painted={:?} thumb={:?}", r.painted, r.thumb.thumb);

    let mut source = vlist::FnSource::new(|| 1_000_000usize, |i: usize| Some(Row(i)));
    scroller.scroll_to_index(&mut state, viewport, &mut source, 999_999, Align::End);

    println!("frame 2:");
    let mut cx = FrameCx::new(&mut surface, &NoInput);
    let r = scroller.frame(&mut state, viewport, &mut source, &mut cx);
    println!("painted={:?} thumb={:?}", r.painted, r.thumb.thumb);
    println!("{:?}", state.snapshot());
    println!("{:?}", scroller.cache().map(|c| c.stats()));
    println!("lines drawn: {}", surface.lines);
}
