use alloc::vec::Vec;

use crate::fenwick::Fenwick;

/// Heights of the items `0..len()`, in list order.
///
/// Every entry is either *measured* (reported by the item's own layout at the current width)
/// or *estimated* (the running average, used for items a jump passed over). Both kinds count
/// towards the total; estimates are replaced as soon as the item is measured.
#[derive(Clone, Debug)]
pub(crate) struct HeightLedger {
    heights: Vec<f32>,
    measured: Vec<bool>,
    sums: Fenwick,
}

impl HeightLedger {
    pub(crate) fn new() -> Self {
        Self {
            heights: Vec::new(),
            measured: Vec::new(),
            sums: Fenwick::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.heights.len()
    }

    pub(crate) fn total(&self) -> f64 {
        self.sums.total()
    }

    /// Top edge of item `index`, relative to the start of the list.
    pub(crate) fn start_of(&self, index: usize) -> f64 {
        self.sums.prefix_sum(index)
    }

    pub(crate) fn height(&self, index: usize) -> Option<f32> {
        self.heights.get(index).copied()
    }

    pub(crate) fn is_measured(&self, index: usize) -> bool {
        self.measured.get(index).copied().unwrap_or(false)
    }

    pub(crate) fn average(&self) -> Option<f32> {
        if self.heights.is_empty() {
            return None;
        }
        Some((self.total() / self.heights.len() as f64) as f32)
    }

    pub(crate) fn push(&mut self, height: f32, measured: bool) {
        self.heights.push(height);
        self.measured.push(measured);
        self.sums.push(height as f64);
    }

    /// Appends `count` estimated entries of the same height.
    pub(crate) fn extend_estimated(&mut self, count: usize, height: f32) {
        let len = self.len() + count;
        self.heights.resize(len, height);
        self.measured.resize(len, false);
        for _ in 0..count {
            self.sums.push(height as f64);
        }
    }

    /// Replaces the height at `index` and marks it measured. Returns the height delta.
    pub(crate) fn set_measured(&mut self, index: usize, height: f32) -> f32 {
        let Some(cur) = self.heights.get(index).copied() else {
            return 0.0;
        };
        self.measured[index] = true;
        if cur == height {
            return 0.0;
        }
        self.heights[index] = height;
        self.sums.add(index, height as f64 - cur as f64);
        height - cur
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.heights.truncate(len);
        self.measured.truncate(len);
        self.sums.truncate(len);
    }

    /// Keeps every height but treats it as an estimate from now on.
    pub(crate) fn demote_all(&mut self) {
        self.measured.iter_mut().for_each(|m| *m = false);
    }

    /// Maps a position to `(index, offset within the item)`.
    ///
    /// Positions at or past the total land on the last item. Returns `None` when empty.
    pub(crate) fn locate(&self, position: f64) -> Option<(usize, f64)> {
        let last = self.len().checked_sub(1)?;
        let index = self.sums.lower_bound(position.max(0.0)).min(last);
        let within = position - self.start_of(index);
        Some((index, within.max(0.0)))
    }

    /// True when every entry in `from..to` (clamped to the length) is measured.
    pub(crate) fn all_measured(&self, from: usize, to: usize) -> bool {
        let to = to.min(self.len());
        from >= to || self.measured[from..to].iter().all(|&m| m)
    }
}
