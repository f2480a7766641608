use crate::{Align, ScrollContext, ScrollState};

/// Produces item heights on demand for the scroll algorithms.
///
/// The [`crate::Scroller`] implements this on top of its window cache; closures
/// `FnMut(usize) -> Option<f32>` work too, which is handy for hosts with their own caching.
pub trait Measurer {
    /// Height of item `index` at the current width, or `None` if the source has no such item.
    fn measure(&mut self, index: usize) -> Option<f32>;
}

impl<F: FnMut(usize) -> Option<f32>> Measurer for F {
    fn measure(&mut self, index: usize) -> Option<f32> {
        self(index)
    }
}

// Each settle pass either stops or measures at least one estimated item inside the viewport.
const SETTLE_PASSES: usize = 8;

impl ScrollState {
    /// Scrolls by `delta` pixels (positive towards the end) and settles the result.
    ///
    /// Wheel deltas and converted thumb-drag deltas both come through here.
    pub fn scroll_by(&mut self, delta: f32, ctx: &ScrollContext, m: &mut impl Measurer) {
        if !delta.is_finite() {
            vwarn!(delta, "ignoring non-finite scroll delta");
            return;
        }
        vtrace!(
            delta,
            first = self.first_index,
            offset = self.offset,
            "ScrollState::scroll_by"
        );
        self.scroll_by_exact(delta as f64, ctx, m);
    }

    fn scroll_by_exact(&mut self, delta: f64, ctx: &ScrollContext, m: &mut impl Measurer) {
        if delta < 0.0 {
            self.scroll_up(-delta, ctx, m);
        } else if delta > 0.0 {
            self.scroll_down(delta, ctx, m);
        }
        self.settle(ctx, m);
    }

    /// Scrolls so that item `index` is aligned with the viewport.
    ///
    /// Items beyond the ledger are located with the running average height, then reached
    /// through the regular scroll path. Once the landing zone is measured the target is
    /// recomputed, so estimates along the way do not shift the result.
    pub fn scroll_to_index(
        &mut self,
        index: usize,
        align: Align,
        ctx: &ScrollContext,
        m: &mut impl Measurer,
    ) {
        let Some(last) = self.item_count_estimate.checked_sub(1) else {
            return;
        };
        let index = index.min(last);
        for _ in 0..SETTLE_PASSES {
            let delta = self.index_target(index, align, ctx) - self.position;
            if delta == 0.0 || (delta > 0.0 && self.at_end) {
                break;
            }
            let before = (self.first_index, self.offset);
            self.scroll_by_exact(delta, ctx, m);
            if (self.first_index, self.offset) == before {
                break;
            }
        }
    }

    fn index_target(&self, index: usize, align: Align, ctx: &ScrollContext) -> f64 {
        let avg = self.estimate(ctx) as f64;
        let len = self.ledger.len();
        let start = if index <= len {
            self.ledger.start_of(index)
        } else {
            self.ledger.total() + (index - len) as f64 * avg
        };
        let height = self.ledger.height(index).map_or(avg, f64::from);
        let view = ctx.viewport_height as f64;
        let target = match align {
            Align::Start => start,
            Align::Center => start + height / 2.0 - view / 2.0,
            Align::End => start + height - view,
        };
        target.max(0.0)
    }

    /// Records a measured height for item `index`.
    ///
    /// New items are folded into the ledger (gaps before them are filled with estimates);
    /// known items have their height replaced. The position is kept in sync when the item lies
    /// before the viewport.
    pub fn record_height(&mut self, index: usize, height: f32, ctx: &ScrollContext) {
        let height = ctx.sanitize_height(height);
        let len = self.ledger.len();
        if len < index {
            let estimate = self.estimate(ctx);
            self.ledger.extend_estimated(index - len, estimate);
        }
        if index == self.ledger.len() {
            self.ledger.push(height, true);
        } else {
            self.ledger.set_measured(index, height);
        }
        if index < self.first_index {
            self.sync_position();
        }
    }

    /// Normalizes the state after a scroll, a count change or a viewport change.
    ///
    /// Moves `first_index` forward while `offset` exceeds its height, measures the items that
    /// cover the viewport, pins to the end when the position overflows (or the view is already
    /// pinned and the list grew) and recomputes `at_end`.
    pub fn settle(&mut self, ctx: &ScrollContext, m: &mut impl Measurer) {
        self.viewport_height = ctx.viewport_height;
        if self.item_count_estimate == 0 {
            self.first_index = 0;
            self.offset = 0.0;
            self.position = 0.0;
            self.at_end = true;
            return;
        }

        for _ in 0..SETTLE_PASSES {
            if self.at_end {
                self.follow_tail(ctx, m);
            }
            self.normalize_first(ctx, m);
            self.measure_viewport(ctx, m);

            if !self.end_reached() {
                break;
            }
            let overflow = self.position > self.max_position(ctx);
            if !(self.at_end || overflow) {
                break;
            }
            self.pin_to_end(ctx);
            if self
                .ledger
                .all_measured(self.first_index, self.ledger.len())
            {
                break;
            }
        }

        self.sync_position();
        self.at_end = self.end_reached()
            && self.position + ctx.epsilon as f64 >= self.ledger.total() - ctx.viewport_height as f64;
    }

    fn scroll_up(&mut self, amount: f64, ctx: &ScrollContext, m: &mut impl Measurer) {
        self.at_end = false;
        let threshold = ctx.jump_threshold() as f64;
        let mut remaining = amount;
        loop {
            if remaining <= self.offset {
                self.offset -= remaining;
                break;
            }
            if self.first_index == 0 {
                self.offset = 0.0;
                break;
            }
            if remaining > threshold {
                let covered = self.skip_back(remaining, ctx);
                if covered > 0.0 {
                    remaining -= covered;
                    continue;
                }
            }
            remaining -= self.offset;
            self.first_index -= 1;
            let index = self.first_index;
            // Items before the viewport are in the ledger; measuring only refreshes estimates.
            let height = match self.height_at(index, ctx, m) {
                Some(h) => h,
                None => self.ledger.height(index).unwrap_or(ctx.min_item_height),
            };
            self.offset = height as f64;
        }
        self.sync_position();
    }

    fn scroll_down(&mut self, amount: f64, ctx: &ScrollContext, m: &mut impl Measurer) {
        let view = ctx.viewport_height as f64;
        let threshold = ctx.jump_threshold() as f64;
        let mut remaining = amount;
        while remaining > 0.0 {
            if self.end_reached() && self.position + view >= self.ledger.total() {
                self.pin_to_end(ctx);
                break;
            }
            if remaining > threshold {
                let covered = self.skip_ahead(remaining, ctx);
                if covered > 0.0 {
                    remaining -= covered;
                    continue;
                }
            }

            let index = self.first_index;
            let height = if remaining > threshold {
                self.passing_height(index, ctx)
            } else {
                match self.height_at(index, ctx, m) {
                    Some(h) => h,
                    // Source ended below its count; resolved by the next paint pass.
                    None => break,
                }
            };
            let height = height as f64;

            if remaining + self.offset < height {
                self.offset += remaining;
                remaining = 0.0;
            } else if index + 1 < self.item_count_estimate {
                remaining -= height - self.offset;
                self.first_index += 1;
                self.offset = 0.0;
            } else {
                break;
            }
            self.sync_position();
        }
        self.sync_position();
    }

    /// Moves `first_index` forward over whole items a long jump passes without stopping,
    /// leaving the last `jump_threshold` pixels for the item-by-item walk. Items past the ledger
    /// are folded in as one run of estimates. Returns the distance covered.
    fn skip_ahead(&mut self, remaining: f64, ctx: &ScrollContext) -> f64 {
        let Some(last) = self.item_count_estimate.checked_sub(1) else {
            return 0.0;
        };
        let goal = self.position + remaining - ctx.jump_threshold() as f64;
        let len = self.ledger.len();
        let index = if goal < self.ledger.total() {
            self.ledger.locate(goal).map_or(0, |(i, _)| i)
        } else {
            let estimate = self.estimate(ctx);
            let beyond = ((goal - self.ledger.total()) / estimate as f64) as usize;
            let index = len.saturating_add(beyond).min(last);
            if index > len {
                self.ledger.extend_estimated(index - len, estimate);
            }
            index
        };
        if index <= self.first_index {
            return 0.0;
        }
        let from = self.position;
        self.first_index = index;
        self.offset = 0.0;
        self.sync_position();
        self.position - from
    }

    /// Moves `first_index` back to the first item boundary at or past `jump_threshold` pixels
    /// below the target of a long upward jump. Returns the distance covered.
    fn skip_back(&mut self, remaining: f64, ctx: &ScrollContext) -> f64 {
        let goal = self.position - remaining + ctx.jump_threshold() as f64;
        let Some((containing, _)) = self.ledger.locate(goal) else {
            return 0.0;
        };
        let index = containing + 1;
        if index >= self.first_index {
            return 0.0;
        }
        let from = self.position;
        self.first_index = index;
        self.offset = 0.0;
        self.sync_position();
        from - self.position
    }

    /// Height of `index`, measuring it unless the ledger already has a measured value.
    ///
    /// `None` means the data source has no item there (even if the ledger holds an estimate).
    fn height_at(
        &mut self,
        index: usize,
        ctx: &ScrollContext,
        m: &mut impl Measurer,
    ) -> Option<f32> {
        if self.ledger.is_measured(index) {
            return self.ledger.height(index);
        }
        let raw = m.measure(index)?;
        self.record_height(index, raw, ctx);
        self.ledger.height(index)
    }

    /// Height of an item a jump passes over without stopping: ledger value or an estimate.
    fn passing_height(&mut self, index: usize, ctx: &ScrollContext) -> f32 {
        if let Some(h) = self.ledger.height(index) {
            return h;
        }
        let estimate = self.estimate(ctx);
        let len = self.ledger.len();
        self.ledger.extend_estimated(index + 1 - len, estimate);
        estimate
    }

    fn estimate(&self, ctx: &ScrollContext) -> f32 {
        self.ledger
            .average()
            .unwrap_or(ctx.estimated_item_height)
            .max(ctx.min_item_height)
    }

    fn max_position(&self, ctx: &ScrollContext) -> f64 {
        (self.ledger.total() - ctx.viewport_height as f64).max(0.0)
    }

    fn normalize_first(&mut self, ctx: &ScrollContext, m: &mut impl Measurer) {
        while self.first_index + 1 < self.item_count_estimate {
            let Some(h) = self.height_at(self.first_index, ctx, m) else {
                break;
            };
            let h = h as f64;
            if self.offset < h {
                break;
            }
            self.offset -= h;
            self.first_index += 1;
        }
        self.sync_position();
    }

    /// Makes sure the items covering the viewport are measured (not estimated).
    fn measure_viewport(&mut self, ctx: &ScrollContext, m: &mut impl Measurer) {
        let target = self.position + ctx.viewport_height as f64;
        let mut index = self.first_index;
        let mut bottom = self.ledger.start_of(index);
        while bottom < target && index < self.item_count_estimate {
            let Some(h) = self.height_at(index, ctx, m) else {
                vdebug!(index, "data source ended below its count");
                self.set_item_count(index);
                break;
            };
            bottom += h as f64;
            index += 1;
        }
    }

    /// Folds items appended since the view was pinned. Items further than the jump threshold
    /// from the end are folded in as one run of estimates; the rest is measured.
    fn follow_tail(&mut self, ctx: &ScrollContext, m: &mut impl Measurer) {
        let estimate = self.estimate(ctx);
        let near = (ctx.jump_threshold() / estimate) as usize + 1;
        let far_end = (self.item_count_estimate + 1).saturating_sub(near);
        let len = self.ledger.len();
        if len < far_end {
            self.ledger.extend_estimated(far_end - len, estimate);
        }
        while self.ledger.len() < self.item_count_estimate {
            let index = self.ledger.len();
            if self.height_at(index, ctx, m).is_none() {
                self.set_item_count(index);
                break;
            }
        }
    }

    /// Places the last item's bottom edge at the viewport bottom (or the list top when the
    /// list is shorter than the viewport).
    fn pin_to_end(&mut self, ctx: &ScrollContext) {
        let target = (self.ledger.total() - ctx.viewport_height as f64).max(0.0);
        match self.ledger.locate(target) {
            Some((index, within)) => {
                self.first_index = index;
                self.offset = within;
            }
            None => {
                self.first_index = 0;
                self.offset = 0.0;
            }
        }
        if let Some(h) = self.ledger.height(self.first_index) {
            if self.offset >= h as f64 {
                self.offset = 0.0;
                self.first_index = (self.first_index + 1).min(self.ledger.len() - 1);
            }
        }
        self.sync_position();
        self.at_end = true;
        vdebug!(
            first = self.first_index,
            offset = self.offset,
            position = self.position,
            "pinned to end"
        );
    }
}
