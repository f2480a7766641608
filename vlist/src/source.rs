/// Random-access provider of list items.
///
/// `count` is the best currently known length and may grow between frames (streams, logs) or
/// shrink (items removed). `fetch` may be expensive; the [`crate::WindowCache`] batches calls to
/// it. Returning `None` for an index below `count` is tolerated and treated as a premature end.
pub trait DataSource {
    type Item;

    fn count(&self) -> usize;

    fn fetch(&mut self, index: usize) -> Option<Self::Item>;
}

impl<S: DataSource + ?Sized> DataSource for &mut S {
    type Item = S::Item;

    fn count(&self) -> usize {
        (**self).count()
    }

    fn fetch(&mut self, index: usize) -> Option<Self::Item> {
        (**self).fetch(index)
    }
}

/// Adapts a `count` closure and a `fetch` closure into a [`DataSource`].
#[derive(Clone, Copy, Debug)]
pub struct FnSource<C, F> {
    count: C,
    fetch: F,
}

impl<C, F> FnSource<C, F> {
    pub fn new(count: C, fetch: F) -> Self {
        Self { count, fetch }
    }
}

impl<T, C, F> DataSource for FnSource<C, F>
where
    C: Fn() -> usize,
    F: FnMut(usize) -> Option<T>,
{
    type Item = T;

    fn count(&self) -> usize {
        (self.count)()
    }

    fn fetch(&mut self, index: usize) -> Option<T> {
        (self.fetch)(index)
    }
}
