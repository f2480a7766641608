// Example: a log view that stays pinned to the bottom while lines are appended.
use vlist::{ListOptions, ScrollState};

fn main() {
    let options = ListOptions::new();
    let ctx = options.scroll_context(200.0);
    let mut lines: Vec<String> = (0..20).map(|i| format!("boot line {i}")).collect();
    // One 20px row per started 40 characters.
    let height = |text: &str| 20.0 * text.len().div_ceil(40).max(1) as f32;

    let mut state = ScrollState::new();
    state.set_viewport(400.0, 200.0);
    state.set_item_count(lines.len());
    state.scroll_by(f32::MAX, &ctx, &mut |i: usize| lines.get(i).map(|l| height(l.as_str())));
    println!("pinned: {:?}", state.snapshot());

    for batch in 0..5 {
        for j in 0..7 {
            lines.push(format!("batch {batch} line {j}: {}", "x".repeat(j * 9)));
        }
        state.set_item_count(lines.len());
        state.settle(&ctx, &mut |i: usize| lines.get(i).map(|l| height(l.as_str())));
        println!(
            "count={} first={} offset={} at_end={}",
            state.item_count_estimate(),
            state.first_index(),
            state.offset(),
            state.at_end()
        );
    }

    // Scrolling up releases the pin; new lines no longer move the view.
    state.scroll_by(-100.0, &ctx, &mut |i: usize| lines.get(i).map(|l| height(l.as_str())));
    let before = state.position();
    lines.extend((0..10).map(|i| format!("late line {i}")));
    state.set_item_count(lines.len());
    state.settle(&ctx, &mut |i: usize| lines.get(i).map(|l| height(l.as_str())));
    println!("released: at_end={} moved={}", state.at_end(), state.position() != before);
}
