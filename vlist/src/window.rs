use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::DataSource;

const MIN_WINDOW: usize = 4;

/// Counters describing how a [`WindowCache`] has been refilled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    /// Lookups served without touching the data source.
    pub hits: u64,
    /// Full-window fetches into an empty cache.
    pub cold_fills: u64,
    /// Full-window refetches after a jump far outside the window.
    pub far_jumps: u64,
    /// Batches appended at the tail.
    pub appends: u64,
    /// Batches prepended at the head.
    pub prepends: u64,
    /// Items dropped to keep the window within capacity.
    pub evicted: u64,
    /// Total `fetch` calls issued.
    pub fetched: u64,
}

/// A contiguous, bounded window of fetched items.
///
/// Holds the items `start_index..start_index + len()` with no gaps and never more than
/// `max_window` of them. Lookups outside the window refill it from the [`DataSource`]:
///
/// - an index far before or far after the window discards it and fetches a fresh window around
///   the index (with a look-back margin of a fifth of the window);
/// - an index just past the end appends batches of a quarter window, evicting from the front;
/// - an index just before the start prepends up to a full window, truncating the tail.
#[derive(Clone, Debug)]
pub struct WindowCache<T> {
    start_index: usize,
    items: VecDeque<T>,
    max_window: usize,
    stats: CacheStats,
}

impl<T> WindowCache<T> {
    pub fn new(max_window: usize) -> Self {
        let max_window = max_window.max(MIN_WINDOW);
        Self {
            start_index: 0,
            items: VecDeque::with_capacity(max_window),
            max_window,
            stats: CacheStats::default(),
        }
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the last cached index.
    pub fn end_index(&self) -> usize {
        self.start_index + self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_window(&self) -> usize {
        self.max_window
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index()
    }

    /// Returns a cached item without refilling.
    pub fn peek(&self, index: usize) -> Option<&T> {
        if !self.contains(index) {
            return None;
        }
        self.items.get(index - self.start_index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.start_index = 0;
    }

    /// Raises the capacity so that `needed` items can be held at once.
    ///
    /// Capacity never shrinks; growth overshoots by half to avoid regrowing every frame while a
    /// viewport is being resized.
    pub fn grow_window(&mut self, needed: usize) {
        if needed <= self.max_window {
            return;
        }
        let next = needed.saturating_add(needed / 2);
        vdebug!(from = self.max_window, to = next, "WindowCache::grow_window");
        self.max_window = next;
    }

    /// Drops cached items at or past `count` (the data source shrank).
    pub fn clamp_to(&mut self, count: usize) {
        if self.end_index() <= count {
            return;
        }
        if self.start_index >= count {
            vdebug!(
                start = self.start_index,
                count,
                "WindowCache: window lies past the new count; dropping it"
            );
            self.clear();
            return;
        }
        self.items.truncate(count - self.start_index);
    }

    /// Returns the item at `index`, refilling the window from `source` when needed.
    ///
    /// Returns `None` when `index >= source.count()` or when the source has no item there.
    pub fn get<S>(&mut self, index: usize, source: &mut S) -> Option<&T>
    where
        S: DataSource<Item = T> + ?Sized,
    {
        let count = source.count();
        self.clamp_to(count);
        if index >= count {
            return None;
        }

        if self.contains(index) {
            self.stats.hits += 1;
        } else {
            self.refill(index, count, source);
            self.debug_check_invariants(count);
        }

        let item = self.peek(index);
        if item.is_none() {
            vwarn!(index, count, "data source returned no item below its count");
        }
        item
    }

    fn refill<S>(&mut self, index: usize, count: usize, source: &mut S)
    where
        S: DataSource<Item = T> + ?Sized,
    {
        let max = self.max_window;
        let margin = max / 5;
        let end = self.end_index();

        if self.items.is_empty() {
            self.stats.cold_fills += 1;
            self.reload(index.saturating_sub(margin), count, source);
        } else if index.saturating_add(max) < self.start_index {
            vdebug!(index, start = self.start_index, "WindowCache: far jump backwards");
            self.stats.far_jumps += 1;
            self.reload(index.saturating_sub(margin), count, source);
        } else if index > end.saturating_add(max) {
            vdebug!(index, end, "WindowCache: far jump forwards");
            self.stats.far_jumps += 1;
            let start = index
                .saturating_sub(margin)
                .min(count.saturating_sub(max));
            self.reload(start, count, source);
        } else if index >= end {
            self.append_until(index, count, source);
        } else {
            self.prepend(index, count, source);
        }
    }

    /// Discards the window and fetches up to `max_window` items starting at `start`.
    fn reload<S>(&mut self, start: usize, count: usize, source: &mut S)
    where
        S: DataSource<Item = T> + ?Sized,
    {
        self.items.clear();
        self.start_index = start;
        let stop = start.saturating_add(self.max_window).min(count);
        for i in start..stop {
            self.stats.fetched += 1;
            let Some(item) = source.fetch(i) else {
                break;
            };
            self.items.push_back(item);
        }
    }

    fn append_until<S>(&mut self, index: usize, count: usize, source: &mut S)
    where
        S: DataSource<Item = T> + ?Sized,
    {
        let batch = (self.max_window / 4).max(1);
        while self.end_index() <= index {
            let from = self.end_index();
            let stop = from.saturating_add(batch).min(count);
            if from >= stop {
                return;
            }
            self.stats.appends += 1;
            for i in from..stop {
                self.stats.fetched += 1;
                let Some(item) = source.fetch(i) else {
                    return;
                };
                self.items.push_back(item);
            }

            let overflow = self.items.len().saturating_sub(self.max_window);
            if overflow > 0 {
                self.items.drain(..overflow);
                self.start_index += overflow;
                self.stats.evicted += overflow as u64;
            }
        }
    }

    fn prepend<S>(&mut self, index: usize, count: usize, source: &mut S)
    where
        S: DataSource<Item = T> + ?Sized,
    {
        let n = self.max_window.min(self.start_index);
        let from = self.start_index - n;
        debug_assert!(
            from <= index,
            "WindowCache: prepend does not cover index (from={from}, index={index})"
        );

        let mut fresh = Vec::with_capacity(n);
        for i in from..self.start_index {
            self.stats.fetched += 1;
            match source.fetch(i) {
                Some(item) => fresh.push(item),
                None => {
                    // A hole before the window; the window cannot stay contiguous.
                    vwarn!(index = i, "data source returned no item while prepending");
                    self.stats.far_jumps += 1;
                    self.reload(index.saturating_sub(self.max_window / 5), count, source);
                    return;
                }
            }
        }

        self.stats.prepends += 1;
        for item in fresh.into_iter().rev() {
            self.items.push_front(item);
        }
        self.start_index = from;

        let overflow = self.items.len().saturating_sub(self.max_window);
        if overflow > 0 {
            self.items.truncate(self.max_window);
            self.stats.evicted += overflow as u64;
        }
    }

    fn debug_check_invariants(&self, count: usize) {
        debug_assert!(
            self.items.len() <= self.max_window,
            "WindowCache over capacity (len={}, max={})",
            self.items.len(),
            self.max_window
        );
        debug_assert!(
            self.items.is_empty() || self.end_index() <= count,
            "WindowCache past the end (end={}, count={count})",
            self.end_index()
        );
    }
}
