//! Property-based tests for the scroll state machine.
//!
//! 1. Measured extent never decreases without a data-source shrink.
//! 2. Position bounds and state invariants hold after every operation.
//! 3. Scrolling down then up by the same delta restores the position.
//! 4. Once pinned to the end, scrolling down is a no-op.
//! 5. Every scroll finishes after a number of measurements bounded by delta / min height.

use proptest::prelude::*;
use vlist::{ScrollContext, ScrollState};

// ── Helpers ─────────────────────────────────────────────────────────────

// Fractional heights: sums only stay exact if the scroll arithmetic does not round.
fn heights(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(1.0f32..60.0, min_len..=max_len)
}

fn deltas(max: f32, len: usize) -> impl Strategy<Value = Vec<f32>> {
    proptest::collection::vec(-max..max, 1..=len)
}

fn setup(count: usize, viewport_height: f32) -> (ScrollState, ScrollContext) {
    let mut s = ScrollState::new();
    s.set_item_count(count);
    s.set_viewport(300.0, viewport_height);
    (s, ScrollContext::new(viewport_height))
}

fn measurer(heights: &[f32]) -> impl FnMut(usize) -> Option<f32> + '_ {
    move |i| heights.get(i).copied()
}

fn assert_state(s: &ScrollState, ctx: &ScrollContext) -> Result<(), TestCaseError> {
    let count = s.item_count_estimate();
    let max = (s.total_extent() - ctx.viewport_height).max(0.0);

    prop_assert!(s.position() >= 0.0);
    prop_assert!(
        s.position() <= max + ctx.epsilon,
        "position {} past max {}",
        s.position(),
        max
    );
    prop_assert!(s.first_index() <= count.saturating_sub(1));
    prop_assert!(s.measured_count() >= s.first_index());
    if let Some(h) = s.item_height(s.first_index()) {
        prop_assert!(
            // `offset()` rounds to f32 and may land on `h` itself.
            s.offset() <= h || (s.first_index() == 0 && s.offset() == 0.0),
            "offset {} outside item height {}",
            s.offset(),
            h
        );
    }
    let start = s.item_start(s.first_index()).unwrap_or(0.0);
    prop_assert!((s.position() - (start + s.offset())).abs() < 0.01);

    let at_end = s.end_reached() && s.position() >= s.total_extent() - ctx.viewport_height - ctx.epsilon;
    prop_assert_eq!(s.at_end(), at_end);
    Ok(())
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Measured extent is monotonic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn measured_extent_never_decreases(hs in heights(1, 400), ds in deltas(400.0, 60)) {
        // Deltas below the jump threshold: every ledger entry is a real measurement.
        let (mut s, ctx) = setup(hs.len(), 200.0);
        let mut m = measurer(&hs);
        let mut extent = s.total_extent();
        for d in ds {
            s.scroll_by(d, &ctx, &mut m);
            prop_assert!(s.total_extent() >= extent);
            extent = s.total_extent();
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Bounds and invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bounds_hold_after_every_operation(
        hs in heights(0, 500),
        ds in deltas(20_000.0, 40),
        shrink_at in 0usize..40,
        shrink_to in 0usize..500,
    ) {
        let (mut s, ctx) = setup(hs.len(), 150.0);
        let mut m = measurer(&hs);
        s.settle(&ctx, &mut m);
        assert_state(&s, &ctx)?;

        for (step, d) in ds.into_iter().enumerate() {
            if step == shrink_at && shrink_to < s.item_count_estimate() {
                s.set_item_count(shrink_to);
                s.settle(&ctx, &mut m);
                assert_state(&s, &ctx)?;
            }
            s.scroll_by(d, &ctx, &mut m);
            assert_state(&s, &ctx)?;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn down_then_up_restores_position(
        hs in proptest::collection::vec(10.0f32..60.0, 2000),
        lead in proptest::collection::vec(0.5f32..400.0, 0..20),
        ds in proptest::collection::vec(0.5f32..400.0, 1..30),
    ) {
        // Steps below the jump threshold keep every visited height measured, so the round trip
        // is exact.
        let (mut s, ctx) = setup(hs.len(), 200.0);
        let mut m = measurer(&hs);
        for step in lead {
            s.scroll_by(step, &ctx, &mut m);
        }

        for d in ds {
            let before = (s.first_index(), s.offset());
            s.scroll_by(d, &ctx, &mut m);
            s.scroll_by(-d, &ctx, &mut m);
            prop_assert_eq!((s.first_index(), s.offset()), before);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Pin to bottom is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pinned_scroll_down_is_a_no_op(hs in heights(1, 300), ds in proptest::collection::vec(1.0f32..50_000.0, 1..20)) {
        let (mut s, ctx) = setup(hs.len(), 200.0);
        let mut m = measurer(&hs);
        s.scroll_by(1.0e7, &ctx, &mut m);
        prop_assert!(s.at_end());
        let pinned = s.snapshot();

        for d in ds {
            s.scroll_by(d, &ctx, &mut m);
            prop_assert_eq!(s.snapshot(), pinned);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Termination
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn measurements_are_bounded_by_the_delta(
        hs in proptest::collection::vec(1.0f32..3.0, 100..3000),
        d in -100_000i32..100_000,
        lead in 0u32..2000,
    ) {
        let (mut s, ctx) = setup(hs.len(), 100.0);
        s.scroll_by(lead as f32, &ctx, &mut measurer(&hs));

        let mut calls = 0usize;
        let mut m = |i: usize| {
            calls += 1;
            hs.get(i).copied()
        };
        s.scroll_by(d as f32, &ctx, &mut m);

        // Items are at least 1px: one measurement per pixel of delta, plus the landing zone and
        // the viewport (twice when pinning to the end).
        let bound = d.unsigned_abs() as f32 + ctx.jump_threshold() + 3.0 * ctx.viewport_height + 8.0;
        prop_assert!((calls as f32) <= bound, "{} measurements for delta {}", calls, d);
        assert_state(&s, &ctx)?;
    }
}
