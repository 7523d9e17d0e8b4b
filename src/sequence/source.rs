//! Where sequences start.
//!
//! Every source here is restartable except [`Source::OneShot`], which wraps
//! an iterator that can only be walked once. Its first traversal takes the
//! iterator; later traversals see an empty sequence.

use std::cell::RefCell;
use std::marker::PhantomData;

use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::primitive::Discrete;
use crate::primitive::Primitive;
use crate::sequence::Sequence;

/// An owned copy of some values.
#[derive(Clone, Debug)]
pub struct Values<T> {
    values: Vec<T>,
}

pub fn of<T: Primitive>(values: &[T]) -> Values<T> {
    return Values { values: values.to_vec() };
}

/// Collect `values` once into an owned, restartable copy. Useful for
/// turning a one-shot iterator into something that can be walked again.
pub fn cache<T: Primitive, I: IntoIterator<Item = T>>(values: I) -> Values<T> {
    return Values { values: values.into_iter().collect() };
}

impl<T: Primitive> From<Vec<T>> for Values<T> {
    fn from(values: Vec<T>) -> Self {
        return Values { values };
    }
}

impl<T: Primitive> Sequence for Values<T> {
    type Item = T;
    type Iter<'a> = std::iter::Copied<std::slice::Iter<'a, T>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return self.values.iter().copied();
    }
}

/// A sequence with nothing in it.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

pub fn empty<T>() -> Empty<T> {
    return Empty { _marker: PhantomData };
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Iter<'a> = std::iter::Empty<T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return std::iter::empty();
    }
}

/// Either a factory producing a fresh iterator per traversal, or a single
/// iterator good for one traversal only.
pub enum Source<F, I> {
    Restartable(F),
    OneShot(RefCell<Option<I>>),
}

/// A restartable sequence that calls `factory` for every traversal.
pub fn from_fn<F, I>(factory: F) -> Source<F, I>
where
    F: Fn() -> I,
    I: Iterator,
{
    return Source::Restartable(factory);
}

/// A sequence over an iterator that can only be consumed once.
pub fn once<I: IntoIterator>(iterator: I) -> Source<fn() -> I::IntoIter, I::IntoIter> {
    return Source::OneShot(RefCell::new(Some(iterator.into_iter())));
}

impl<F, I> Source<F, I> {
    pub fn is_one_shot(&self) -> bool {
        return matches!(self, Source::OneShot(_));
    }
}

impl<F, I> Sequence for Source<F, I>
where
    F: Fn() -> I,
    I: Iterator,
{
    type Item = I::Item;
    type Iter<'a> = SourceIter<I> where Self: 'a;

    fn iter(&self) -> SourceIter<I> {
        match self {
            Source::Restartable(factory) => return SourceIter { inner: Some(factory()) },
            Source::OneShot(cell) => {
                let inner = cell.borrow_mut().take();
                if inner.is_none() {
                    debug!("one-shot source traversed again, yielding nothing");
                }
                return SourceIter { inner };
            }
        }
    }
}

pub struct SourceIter<I> {
    inner: Option<I>,
}

impl<I: Iterator> Iterator for SourceIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        return self.inner.as_mut()?.next();
    }
}

/// `seed`, `op(seed)`, `op(op(seed))`, ... without end.
pub struct Recurse<T, F> {
    seed: T,
    op: F,
}

pub fn recurse<T: Copy, F: Fn(T) -> T>(seed: T, op: F) -> Recurse<T, F> {
    return Recurse { seed, op };
}

impl<T: Copy, F: Fn(T) -> T> Sequence for Recurse<T, F> {
    type Item = T;
    type Iter<'a> = RecurseIter<'a, T, F> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return RecurseIter { seed: self.seed, last: None, op: &self.op };
    }
}

pub struct RecurseIter<'a, T, F> {
    seed: T,
    last: Option<T>,
    op: &'a F,
}

impl<'a, T: Copy, F: Fn(T) -> T> Iterator for RecurseIter<'a, T, F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let x = match self.last {
            Some(last) => (self.op)(last),
            None => self.seed,
        };
        self.last = Some(x);
        return Some(x);
    }
}

/// `start`, `start + step`, `start + step + step`, ... without end. Each value
/// adds `step` to the one before, so rounding error accumulates.
pub fn stepping_from(start: f64, step: f64) -> Recurse<f64, impl Fn(f64) -> f64> {
    return recurse(start, move |x| x + step);
}

/// Calls `supplier` for every element, without end.
pub struct Generate<F> {
    supplier: F,
}

pub fn generate<T, F: Fn() -> T>(supplier: F) -> Generate<F> {
    return Generate { supplier };
}

impl<T, F: Fn() -> T> Sequence for Generate<F> {
    type Item = T;
    type Iter<'a> = std::iter::RepeatWith<&'a F> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return std::iter::repeat_with(&self.supplier);
    }
}

/// Every value from `start` to `end` inclusive, counting down when
/// `end < start`.
#[derive(Clone, Copy, Debug)]
pub struct Range<T> {
    start: T,
    end: T,
}

pub fn range<T: Discrete>(start: T, end: T) -> Range<T> {
    return Range { start, end };
}

/// Every `step`-th value from `start` towards `end`, never passing `end`.
pub fn range_by<T: Discrete>(start: T, end: T, step: usize) -> Result<crate::sequence::adapters::Step<Range<T>>> {
    if step == 0 {
        return Err(Error::InvalidArgument("range step must be positive"));
    }
    return Ok(range(start, end).step(step));
}

impl<T: Discrete> Sequence for Range<T> {
    type Item = T;
    type Iter<'a> = RangeIter<T> where Self: 'a;

    fn iter(&self) -> RangeIter<T> {
        return RangeIter {
            next: Some(self.start),
            end: self.end,
            ascending: self.start.total_cmp(&self.end).is_le(),
        };
    }
}

pub struct RangeIter<T> {
    next: Option<T>,
    end: T,
    ascending: bool,
}

impl<T: Discrete> Iterator for RangeIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let x = self.next?;
        self.next = if x.exact_eq(self.end) {
            None
        } else if self.ascending {
            x.forward()
        } else {
            x.backward()
        };
        return Some(x);
    }
}

/// Floats from `start` towards `end`, `step` apart.
///
/// Stops at the first value that reaches `end` by more than `accuracy`, so
/// `accuracy` decides whether an `end` hit through accumulated rounding is
/// still included. With zero accuracy `end` itself is excluded, and
/// `start == end` is empty.
#[derive(Clone, Copy, Debug)]
pub struct FloatRange {
    start: f64,
    end: f64,
    step: f64,
    accuracy: f64,
}

/// Fails when `step` is negative or NaN. The direction comes from `start`
/// and `end`, never from the sign of `step`.
pub fn range_within(start: f64, end: f64, step: f64, accuracy: f64) -> Result<FloatRange> {
    if !(step >= 0.0) {
        return Err(Error::InvalidArgument("range step must not be negative"));
    }
    return Ok(FloatRange { start, end, step, accuracy });
}

impl Sequence for FloatRange {
    type Item = f64;
    type Iter<'a> = FloatRangeIter where Self: 'a;

    fn iter(&self) -> FloatRangeIter {
        let ascending = self.end > self.start;
        return FloatRangeIter {
            next: self.start,
            end: self.end,
            step: if ascending { self.step } else { -self.step },
            accuracy: self.accuracy,
            ascending,
            done: false,
        };
    }
}

pub struct FloatRangeIter {
    next: f64,
    end: f64,
    step: f64,
    accuracy: f64,
    ascending: bool,
    done: bool,
}

impl Iterator for FloatRangeIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        let x = self.next;
        self.done = if self.ascending {
            x - self.accuracy >= self.end
        } else {
            x + self.accuracy <= self.end
        };
        if self.done {
            return None;
        }
        self.next = x + self.step;
        return Some(x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_restart() {
        let seq = of(&[1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(Values::from(vec!['a']).count(), 1);
    }

    #[test]
    fn empty_yields_nothing() {
        let seq = empty::<f64>();
        assert!(seq.is_empty());
        assert_eq!(seq.iter().next(), None);
    }

    #[test]
    fn restartable_source_calls_factory_each_time() {
        let seq = from_fn(|| vec![1i64, 2, 3].into_iter());
        assert!(!seq.is_one_shot());
        assert_eq!(seq.count(), 3);
        assert_eq!(seq.count(), 3);
    }

    #[test]
    fn one_shot_source_is_empty_second_time() {
        let seq = once(vec![1, 2, 3]);
        assert!(seq.is_one_shot());
        assert_eq!(seq.to_vec(), vec![1, 2, 3]);
        assert_eq!(seq.to_vec(), Vec::<i32>::new());
        assert!(seq.is_empty());
    }

    #[test]
    fn recurse_and_generate_are_endless() {
        let powers = recurse(1i64, |x| x * 2);
        assert_eq!(powers.limit(5).to_vec(), vec![1, 2, 4, 8, 16]);

        let sevens = generate(|| 7);
        assert_eq!(sevens.limit(3).to_vec(), vec![7, 7, 7]);
    }

    #[test]
    fn ranges_count_both_ways() {
        assert_eq!(range(1, 5).to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(range(5i64, 1).to_vec(), vec![5, 4, 3, 2, 1]);
        assert_eq!(range(3, 3).to_vec(), vec![3]);
        assert_eq!(range('a', 'e').to_vec(), vec!['a', 'b', 'c', 'd', 'e']);
        assert_eq!(range(i32::MAX - 1, i32::MAX).count(), 2);
    }

    #[test]
    fn stepped_range() {
        assert_eq!(range_by(1, 10, 3).unwrap().to_vec(), vec![1, 4, 7, 10]);
        assert_eq!(range_by(10, 1, 4).unwrap().to_vec(), vec![10, 6, 2]);
        assert_eq!(range_by(1, 10, 0).err(), Some(Error::InvalidArgument("range step must be positive")));
    }

    #[test]
    fn cache_makes_one_shot_restartable() {
        let source = once(vec![3, 1, 2]);
        let cached = cache(source.iter());
        assert!(source.is_empty());
        assert_eq!(cached.to_vec(), vec![3, 1, 2]);
        assert_eq!(cached.to_vec(), vec![3, 1, 2]);
        assert!(cache(std::iter::empty::<char>()).is_empty());
    }

    #[test]
    fn stepping_from_adds_each_time() {
        assert_eq!(stepping_from(1.0, 0.5).limit(4).to_vec(), vec![1.0, 1.5, 2.0, 2.5]);
        assert_eq!(stepping_from(0.0, -2.0).limit(3).to_vec(), vec![0.0, -2.0, -4.0]);
    }

    #[test]
    fn float_range_uses_accuracy_at_the_end() {
        let quarters = range_within(0.0, 1.0, 0.25, 1e-9).unwrap();
        assert_eq!(quarters.to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(quarters.count(), 5);

        // 0.1 + 0.1 + 0.1 overshoots 0.3 slightly
        assert_eq!(range_within(0.0, 0.3, 0.1, 1e-9).unwrap().count(), 4);
        assert_eq!(range_within(0.0, 0.3, 0.1, 0.0).unwrap().count(), 3);
    }

    #[test]
    fn float_range_counts_down_and_checks_step() {
        assert_eq!(range_within(1.0, 0.0, 0.5, 0.01).unwrap().to_vec(), vec![1.0, 0.5, 0.0]);
        assert!(range_within(2.0, 2.0, 1.0, 0.0).unwrap().is_empty());
        assert_eq!(
            range_within(0.0, 1.0, -0.5, 0.0).err(),
            Some(Error::InvalidArgument("range step must not be negative"))
        );
        assert!(range_within(0.0, 1.0, f64::NAN, 0.0).is_err());
    }
}
