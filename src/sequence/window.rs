//! Fixed-size windows over a sequence.
//!
//! The k-th window starts at upstream offset `k * step` and holds up to
//! `size` elements. Overlapping windows re-read elements the upstream has
//! already handed out, so the iterator keeps the current window in a ring
//! buffer of capacity `size`. When `step > size` the elements between
//! windows are pulled and dropped. A window is produced whenever its start
//! offset is inside the source, so the trailing windows may be short, and
//! an empty source produces none.

use std::collections::VecDeque;
use std::fmt;

use smallvec::SmallVec;

use crate::error::Error;
use crate::error::Result;
use crate::list::array::write_bracketed;
use crate::list::ArrayList;
use crate::primitive::Primitive;
use crate::sequence::Sequence;

/// Inline capacity of a batch before it spills to the heap.
const BATCH_INLINE: usize = 8;

/// An owned run of elements cut out of a sequence by a windowing or
/// partitioning stage. A batch is itself a restartable sequence.
#[derive(Clone, Default)]
pub struct Batch<T: Primitive> {
    items: SmallVec<[T; BATCH_INLINE]>,
}

impl<T: Primitive> Batch<T> {
    pub fn new() -> Batch<T> {
        return Batch { items: SmallVec::new() };
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.items.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return &self.items;
    }

    pub fn to_vec(&self) -> Vec<T> {
        return self.items.to_vec();
    }

    pub fn to_list(&self) -> ArrayList<T> {
        return ArrayList::of(&self.items);
    }

    pub(crate) fn push(&mut self, x: T) {
        self.items.push(x);
    }
}

impl<T: Primitive> Sequence for Batch<T> {
    type Item = T;
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, T>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return self.items.iter().copied();
    }
}

impl<T: Primitive> FromIterator<T> for Batch<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return Batch { items: iter.into_iter().collect() };
    }
}

impl<T: Primitive> From<&[T]> for Batch<T> {
    fn from(values: &[T]) -> Self {
        return Batch { items: SmallVec::from_slice(values) };
    }
}

impl<T: Primitive> PartialEq for Batch<T> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.as_slice(), other.as_slice());
        return a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.exact_eq(*y));
    }
}

impl<T: Primitive> fmt::Display for Batch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write_bracketed(f, self.items.iter());
    }
}

impl<T: Primitive> fmt::Debug for Batch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.items.iter()).finish();
    }
}

pub struct Window<S> {
    upstream: S,
    size: usize,
    step: usize,
}

impl<S> Window<S> {
    pub(super) fn new(upstream: S, size: usize, step: usize) -> Result<Window<S>> {
        if size == 0 {
            return Err(Error::InvalidArgument("window size must be positive"));
        }
        if step == 0 {
            return Err(Error::InvalidArgument("window step must be positive"));
        }
        return Ok(Window { upstream, size, step });
    }
}

impl<S> Sequence for Window<S>
where
    S: Sequence,
    S::Item: Primitive,
{
    type Item = Batch<S::Item>;
    type Iter<'a> = WindowIter<S::Iter<'a>, S::Item> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return WindowIter {
            upstream: self.upstream.iter(),
            buffer: VecDeque::with_capacity(self.size.min(BATCH_INLINE)),
            size: self.size,
            step: self.step,
            started: false,
            exhausted: false,
        };
    }
}

pub struct WindowIter<I, T> {
    upstream: I,
    buffer: VecDeque<T>,
    size: usize,
    step: usize,
    started: bool,
    exhausted: bool,
}

impl<I, T> WindowIter<I, T>
where
    I: Iterator<Item = T>,
{
    fn pull(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let x = self.upstream.next();
        self.exhausted = x.is_none();
        return x;
    }

    /// Move the window start forward by `step`.
    fn slide(&mut self) {
        let dropped = self.step.min(self.buffer.len());
        self.buffer.drain(..dropped);
        for _ in dropped..self.step {
            if self.pull().is_none() {
                break;
            }
        }
    }
}

impl<I, T> Iterator for WindowIter<I, T>
where
    I: Iterator<Item = T>,
    T: Primitive,
{
    type Item = Batch<T>;

    fn next(&mut self) -> Option<Batch<T>> {
        if self.started {
            self.slide();
        }
        self.started = true;

        while self.buffer.len() < self.size {
            match self.pull() {
                Some(x) => self.buffer.push_back(x),
                None => break,
            }
        }

        if self.buffer.is_empty() {
            return None;
        }
        return Some(self.buffer.iter().copied().collect());
    }
}
