use alloc::vec::Vec;

use vlist::DataSource;

/// A [`DataSource`] over an owned vector.
///
/// Items are cloned out on fetch. The vector may be appended to (tail-following views) or
/// truncated between frames; the list picks up the new count on its next frame.
#[derive(Clone, Debug, Default)]
pub struct VecSource<T> {
    items: Vec<T>,
    fetches: u64,
}

impl<T> VecSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, fetches: 0 }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Replaces the contents. Pair with [`vlist::Scroller::invalidate`] when the old items are
    /// not a prefix of the new ones.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Number of `fetch` calls served so far.
    pub fn fetches(&self) -> u64 {
        self.fetches
    }
}

impl<T> Extend<T> for VecSource<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for VecSource<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Clone> DataSource for VecSource<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.items.len()
    }

    fn fetch(&mut self, index: usize) -> Option<T> {
        self.fetches += 1;
        self.items.get(index).cloned()
    }
}
