use crate::ledger::HeightLedger;

/// A plain, copyable snapshot of a [`ScrollState`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub first_index: usize,
    pub offset: f32,
    pub position: f32,
    pub total_extent: f32,
    pub measured_count: usize,
    pub item_count_estimate: usize,
    pub at_end: bool,
    pub dragging: bool,
}

/// Scroll position of one virtualized list, persisted by the host across frames.
///
/// The host owns one `ScrollState` per scrollable view and hands it to the
/// [`crate::Scroller`] (or [`crate::virtualized_list`]) by mutable reference every frame.
///
/// The position is stored as "item `first_index`, scrolled `offset` pixels past its top". The
/// absolute `position` always equals the sum of the ledger heights of the items before
/// `first_index` plus `offset`, and the heights of every item before the viewport are kept in
/// the ledger.
#[derive(Clone, Debug)]
pub struct ScrollState {
    pub(crate) first_index: usize,
    // Kept in f64 so long scrolls land on exact item boundaries.
    pub(crate) offset: f64,
    pub(crate) position: f64,
    pub(crate) item_count_estimate: usize,
    pub(crate) viewport_height: f32,
    pub(crate) measured_width: Option<f32>,
    pub(crate) at_end: bool,
    pub(crate) dragging: bool,
    pub(crate) drag_anchor: f32,
    pub(crate) ledger: HeightLedger,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            first_index: 0,
            offset: 0.0,
            position: 0.0,
            item_count_estimate: 0,
            viewport_height: 0.0,
            measured_width: None,
            at_end: false,
            dragging: false,
            drag_anchor: 0.0,
            ledger: HeightLedger::new(),
        }
    }

    /// Index of the item whose top edge is at or above the viewport top.
    pub fn first_index(&self) -> usize {
        self.first_index
    }

    /// Pixels of the first item scrolled above the viewport top.
    pub fn offset(&self) -> f32 {
        self.offset as f32
    }

    /// Absolute scroll position from the start of the list.
    pub fn position(&self) -> f32 {
        self.position as f32
    }

    /// Summed height of the items `0..measured_count()`.
    pub fn total_extent(&self) -> f32 {
        self.ledger.total() as f32
    }

    /// Number of leading items whose height is folded into [`Self::total_extent`].
    ///
    /// Items passed over by a large jump are folded in with an estimated height; see
    /// [`Self::is_measured`].
    pub fn measured_count(&self) -> usize {
        self.ledger.len()
    }

    /// Latest count reported by the data source.
    pub fn item_count_estimate(&self) -> usize {
        self.item_count_estimate
    }

    /// True while the view is pinned to the end of the list.
    pub fn at_end(&self) -> bool {
        self.at_end
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Distance from the thumb top to where the pointer grabbed it.
    pub fn drag_anchor(&self) -> f32 {
        self.drag_anchor
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Ledger height of item `index`, measured or estimated.
    pub fn item_height(&self, index: usize) -> Option<f32> {
        self.ledger.height(index)
    }

    /// Top edge of item `index` relative to the list start, if it lies within the ledger.
    pub fn item_start(&self, index: usize) -> Option<f32> {
        (index <= self.ledger.len()).then(|| self.ledger.start_of(index) as f32)
    }

    /// Whether item `index` has been measured at the current width (not just estimated).
    pub fn is_measured(&self, index: usize) -> bool {
        self.ledger.is_measured(index)
    }

    /// True once every item the data source reports has a ledger entry.
    pub fn end_reached(&self) -> bool {
        self.ledger.len() >= self.item_count_estimate
    }

    /// Average item height: measured data when available, otherwise `fallback`.
    pub fn average_item_height(&self, fallback: f32) -> f32 {
        self.ledger.average().unwrap_or(fallback)
    }

    /// Estimated scrollable length of the whole list: the ledger total plus the running
    /// average for items that have no ledger entry yet.
    ///
    /// The scrollbar is sized against this, so its thumb stays meaningful for lists far larger
    /// than what has been measured.
    pub fn scroll_extent(&self, fallback_item_height: f32) -> f32 {
        let missing = self.item_count_estimate.saturating_sub(self.ledger.len());
        let avg = self.average_item_height(fallback_item_height) as f64;
        (self.ledger.total() + missing as f64 * avg) as f32
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            first_index: self.first_index,
            offset: self.offset as f32,
            position: self.position as f32,
            total_extent: self.total_extent(),
            measured_count: self.measured_count(),
            item_count_estimate: self.item_count_estimate,
            at_end: self.at_end,
            dragging: self.dragging,
        }
    }

    /// Applies the data source's current count.
    ///
    /// A shrink below the ledger truncates it (the one case where `total_extent` decreases) and
    /// clamps the position onto the remaining items.
    pub fn set_item_count(&mut self, count: usize) {
        if count == self.item_count_estimate {
            return;
        }
        vtrace!(from = self.item_count_estimate, to = count, "ScrollState::set_item_count");
        self.item_count_estimate = count;

        if count < self.ledger.len() {
            vdebug!(count, measured = self.ledger.len(), "data source shrank; truncating");
            self.ledger.truncate(count);
        }
        if count == 0 {
            self.first_index = 0;
            self.offset = 0.0;
        } else if self.first_index >= count {
            self.first_index = count - 1;
            self.offset = 0.0;
        }
        self.sync_position();
    }

    /// Records the viewport for this frame. A width change demotes every ledger height to an
    /// estimate; items are re-measured as they are visited again.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport_height = height.max(0.0);
        match self.measured_width {
            Some(w) if w == width => {}
            Some(_) => {
                vdebug!(width, "viewport width changed; heights become estimates");
                self.ledger.demote_all();
                self.measured_width = Some(width);
            }
            None => self.measured_width = Some(width),
        }
    }

    pub fn begin_drag(&mut self, anchor: f32) {
        self.dragging = true;
        self.drag_anchor = anchor;
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.drag_anchor = 0.0;
    }

    pub(crate) fn sync_position(&mut self) {
        self.position = self.ledger.start_of(self.first_index) + self.offset;
    }

    /// Debug-build check of the position invariants; a no-op in release builds.
    pub fn check_invariants(&self, epsilon: f32) {
        if !cfg!(debug_assertions) {
            return;
        }
        let count = self.item_count_estimate;
        debug_assert!(
            self.first_index <= count.saturating_sub(1),
            "first_index out of range (first={}, count={count})",
            self.first_index
        );
        debug_assert!(
            self.first_index <= self.ledger.len(),
            "items before the viewport must be in the ledger (first={}, ledger={})",
            self.first_index,
            self.ledger.len()
        );
        debug_assert!(self.offset >= 0.0, "negative offset ({})", self.offset);
        if let Some(h) = self.ledger.height(self.first_index) {
            debug_assert!(
                self.offset < h as f64 || (self.first_index == 0 && self.offset == 0.0),
                "offset must stay inside the first item (offset={}, height={h})",
                self.offset
            );
        }
        let expected = self.ledger.start_of(self.first_index) + self.offset;
        let drift = self.position - expected;
        let tolerance = 1e-6 * expected.max(1.0);
        debug_assert!(
            drift <= tolerance && -drift <= tolerance,
            "position out of sync (position={}, expected={expected})",
            self.position
        );
        if self.end_reached() {
            let max = (self.ledger.total() - self.viewport_height as f64).max(0.0);
            debug_assert!(
                self.position <= max + epsilon as f64,
                "position past the end (position={}, max={max})",
                self.position
            );
        }
    }
}
