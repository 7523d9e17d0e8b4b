//! Cutting a sequence into batches at boundaries found by predicates.

use crate::primitive::Primitive;
use crate::sequence::window::Batch;
use crate::sequence::Sequence;

/// Groups consecutive elements, starting a new batch between `current` and
/// `next` whenever `boundary(current, next)` holds. The last batch is
/// whatever is left when the upstream runs out.
pub struct BatchBy<S, P> {
    pub(super) upstream: S,
    pub(super) boundary: P,
}

impl<S, P> Sequence for BatchBy<S, P>
where
    S: Sequence,
    S::Item: Primitive,
    P: Fn(S::Item, S::Item) -> bool,
{
    type Item = Batch<S::Item>;
    type Iter<'a> = BatchByIter<'a, std::iter::Fuse<S::Iter<'a>>, S::Item, P> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return BatchByIter {
            upstream: self.upstream.iter().fuse(),
            pending: None,
            boundary: &self.boundary,
        };
    }
}

pub struct BatchByIter<'a, I, T, P> {
    upstream: I,
    /// First element of the next batch, already pulled from upstream.
    pending: Option<T>,
    boundary: &'a P,
}

impl<'a, I, T, P> Iterator for BatchByIter<'a, I, T, P>
where
    I: Iterator<Item = T>,
    T: Primitive,
    P: Fn(T, T) -> bool,
{
    type Item = Batch<T>;

    fn next(&mut self) -> Option<Batch<T>> {
        let first = match self.pending.take() {
            Some(x) => x,
            None => self.upstream.next()?,
        };

        let mut batch = Batch::new();
        batch.push(first);
        let mut current = first;
        while let Some(next) = self.upstream.next() {
            if (self.boundary)(current, next) {
                self.pending = Some(next);
                break;
            }
            batch.push(next);
            current = next;
        }
        return Some(batch);
    }
}

/// Decides which elements a [`Split`] cuts around.
pub trait Separator<T> {
    fn is_separator(&self, x: T) -> bool;
}

/// Splits around one exact value.
pub struct Exactly<T>(pub T);

impl<T: Primitive> Separator<T> for Exactly<T> {
    fn is_separator(&self, x: T) -> bool {
        return x.exact_eq(self.0);
    }
}

impl<T, F: Fn(T) -> bool> Separator<T> for F {
    fn is_separator(&self, x: T) -> bool {
        return self(x);
    }
}

/// Batches of the elements between separators. Separators themselves are
/// dropped, and so are the empty batches adjacent separators would produce.
pub struct Split<S, D> {
    pub(super) upstream: S,
    pub(super) separator: D,
}

impl<S, D> Sequence for Split<S, D>
where
    S: Sequence,
    S::Item: Primitive,
    D: Separator<S::Item>,
{
    type Item = Batch<S::Item>;
    type Iter<'a> = SplitIter<'a, std::iter::Fuse<S::Iter<'a>>, D> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return SplitIter {
            upstream: self.upstream.iter().fuse(),
            separator: &self.separator,
        };
    }
}

pub struct SplitIter<'a, I, D> {
    upstream: I,
    separator: &'a D,
}

impl<'a, I, D> Iterator for SplitIter<'a, I, D>
where
    I: Iterator,
    I::Item: Primitive,
    D: Separator<I::Item>,
{
    type Item = Batch<I::Item>;

    fn next(&mut self) -> Option<Batch<I::Item>> {
        let mut batch = Batch::new();
        loop {
            match self.upstream.next() {
                Some(x) if self.separator.is_separator(x) => {
                    if !batch.is_empty() {
                        return Some(batch);
                    }
                }
                Some(x) => batch.push(x),
                None => {
                    if batch.is_empty() {
                        return None;
                    }
                    return Some(batch);
                }
            }
        }
    }
}
