use alloc::vec::Vec;

/// Prefix sums over item heights (a Fenwick / binary indexed tree).
///
/// Sums are kept in `f64` so that integer-valued pixel heights stay exact for any realistic
/// list length.
#[derive(Clone, Debug)]
pub(crate) struct Fenwick {
    tree: Vec<f64>, // 1-indexed; tree[0] is unused
    total: f64,
    max_bit: usize,
}

impl Fenwick {
    pub(crate) fn new() -> Self {
        Self {
            tree: alloc::vec![0.0],
            total: 0.0,
            max_bit: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.tree.len() - 1
    }

    pub(crate) fn total(&self) -> f64 {
        self.total
    }

    /// Appends one height; `O(log n)`.
    pub(crate) fn push(&mut self, height: f64) {
        let i = self.len() + 1;
        // Node `i` covers the `lsb(i)` values ending at `i`: everything after
        // `i - lsb(i)` that is already present, plus the new one.
        let covered_from = i - lsb(i);
        let node = self.prefix_sum(i - 1) - self.prefix_sum(covered_from) + height;
        self.tree.push(node);
        self.total += height;
        self.max_bit = top_bit(i);
    }

    pub(crate) fn add(&mut self, index: usize, delta: f64) {
        let n = self.len();
        if index >= n {
            debug_assert!(index < n, "Fenwick::add out of bounds (index={index}, len={n})");
            return;
        }
        self.total += delta;
        let mut i = index + 1;
        while i <= n {
            self.tree[i] += delta;
            i += lsb(i);
        }
    }

    /// Sum of the first `count` heights (clamped to the length).
    pub(crate) fn prefix_sum(&self, count: usize) -> f64 {
        let mut i = count.min(self.len());
        let mut sum = 0.0;
        while i > 0 {
            sum += self.tree[i];
            i &= i - 1;
        }
        sum
    }

    /// Returns the largest `k` such that `prefix_sum(k) <= target`.
    ///
    /// For `0 <= target < total()` that is the index of the item containing `target`.
    pub(crate) fn lower_bound(&self, mut target: f64) -> usize {
        let n = self.len();
        let mut idx = 0usize;
        let mut bit = self.max_bit;
        while bit != 0 {
            let next = idx + bit;
            if next <= n && self.tree[next] <= target {
                target -= self.tree[next];
                idx = next;
            }
            bit >>= 1;
        }
        idx
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        if len >= self.len() {
            return;
        }
        // Nodes up to `len` only cover values up to `len`, so the prefix stays valid.
        self.total = self.prefix_sum(len);
        self.tree.truncate(len + 1);
        self.max_bit = top_bit(len);
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn top_bit(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1usize << (usize::BITS - 1 - n.leading_zeros())
    }
}
