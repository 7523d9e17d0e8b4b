//! Lazy, restartable pipelines over primitives.
//!
//! A [`Sequence`] is anything that can hand out a fresh iterator on demand.
//! Intermediate operations wrap a sequence in a new stage without pulling
//! anything; terminal operations build one iterator through the whole
//! chain and drive it. Stages hold no iteration state of their own, so a
//! pipeline over a list can be traversed any number of times, and each
//! traversal sees the list as it is at that moment.
//!
//! ```
//! use primseq::list::ArrayList;
//! use primseq::sequence::Sequence;
//!
//! let list = ArrayList::of(&[1i64, 2, 4, 5, 7, 8]);
//! let runs = (&list).batch_by(|current, next| next - current > 1);
//! let rendered: Vec<String> = runs.map(|run| run.to_string()).to_vec();
//! assert_eq!(rendered, vec!["[1, 2]", "[4, 5]", "[7, 8]"]);
//! ```
//!
//! Sequences take ownership of what they wrap. Borrow a list or another
//! sequence (`(&list).filter(..)`) to keep using it afterwards.

pub mod adapters;
pub mod partition;
pub mod source;
pub mod window;

use std::fmt::Display;
use std::fmt::Write;

pub use partition::Exactly;
pub use partition::Separator;
pub use source::cache;
pub use source::empty;
pub use source::from_fn;
pub use source::generate;
pub use source::of;
pub use source::once;
pub use source::range;
pub use source::range_by;
pub use source::range_within;
pub use source::recurse;
pub use source::stepping_from;
pub use source::Source;
pub use window::Batch;

use crate::error::Error;
use crate::error::Result;
use crate::list::ArrayList;
use crate::primitive::round_half_up;
use crate::primitive::Numeric;
use crate::primitive::Precise;
use crate::primitive::Primitive;
use crate::set::PrimitiveSet;

use adapters::*;
use partition::BatchBy;
use partition::Split;
use window::Window;

/// A source of fresh iterators, and the home of every pipeline operation.
pub trait Sequence {
    type Item;

    type Iter<'a>: Iterator<Item = Self::Item>
    where
        Self: 'a;

    /// Start a new traversal.
    fn iter(&self) -> Self::Iter<'_>;

    // ========================================================================
    // Filtering, mapping and peeking
    // ========================================================================

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        return Filter { upstream: self, predicate };
    }

    /// Like [`Sequence::filter`], with the element's upstream position.
    fn filter_indexed<P>(self, predicate: P) -> FilterIndexed<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item, usize) -> bool,
    {
        return FilterIndexed { upstream: self, predicate };
    }

    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        return Map { upstream: self, mapper };
    }

    fn map_indexed<F, U>(self, mapper: F) -> MapIndexed<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, usize) -> U,
    {
        return MapIndexed { upstream: self, mapper };
    }

    /// Call `action` on each element as it passes, leaving values unchanged.
    fn peek<F>(self, action: F) -> Peek<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        return Peek { upstream: self, action };
    }

    fn peek_indexed<F>(self, action: F) -> PeekIndexed<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item, usize),
    {
        return PeekIndexed { upstream: self, action };
    }

    /// Keep elements for which `predicate(previous, current)` holds, where
    /// `previous` is the upstream element before `current` (kept or not),
    /// or `first_previous` for the first element.
    fn filter_back<P>(self, first_previous: Self::Item, predicate: P) -> FilterBack<Self, Self::Item, P>
    where
        Self: Sized,
        Self::Item: Primitive,
        P: Fn(Self::Item, Self::Item) -> bool,
    {
        return FilterBack { upstream: self, first_previous, predicate };
    }

    /// Keep elements for which `predicate(current, next)` holds, where
    /// `next` is `last_next` for the last element.
    fn filter_forward<P>(self, last_next: Self::Item, predicate: P) -> FilterForward<Self, Self::Item, P>
    where
        Self: Sized,
        Self::Item: Primitive,
        P: Fn(Self::Item, Self::Item) -> bool,
    {
        return FilterForward { upstream: self, last_next, predicate };
    }

    /// Replace each element with `mapper(previous, current)`. `previous` is
    /// the unmapped upstream element.
    fn map_back<F>(self, first_previous: Self::Item, mapper: F) -> MapBack<Self, Self::Item, F>
    where
        Self: Sized,
        Self::Item: Primitive,
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        return MapBack { upstream: self, first_previous, mapper };
    }

    fn map_forward<F>(self, last_next: Self::Item, mapper: F) -> MapForward<Self, Self::Item, F>
    where
        Self: Sized,
        Self::Item: Primitive,
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        return MapForward { upstream: self, last_next, mapper };
    }

    /// First occurrences only, compared exactly. Hash-set backed: O(1)
    /// amortized per element, memory proportional to the distinct count.
    fn distinct(self) -> Distinct<Self>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        return Distinct { upstream: self };
    }

    /// First occurrences only, treating anything within `precision` of a
    /// kept value as a repeat. Compares against every kept value, so this is
    /// quadratic in the number of distinct values.
    fn distinct_within(self, precision: Self::Item) -> DistinctWithin<Self, Self::Item>
    where
        Self: Sized,
        Self::Item: Precise,
    {
        return DistinctWithin { upstream: self, precision };
    }

    fn including(self, values: &[Self::Item]) -> Membership<Self, Self::Item>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        return Membership { upstream: self, values: values.to_vec(), keep: true };
    }

    fn excluding(self, values: &[Self::Item]) -> Membership<Self, Self::Item>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        return Membership { upstream: self, values: values.to_vec(), keep: false };
    }

    /// Keeps elements within `precision` of one of `values`.
    fn including_within(self, values: &[Self::Item], precision: Self::Item) -> MembershipWithin<Self, Self::Item>
    where
        Self: Sized,
        Self::Item: Precise,
    {
        return MembershipWithin { upstream: self, values: values.to_vec(), precision, keep: true };
    }

    /// Drops elements within `precision` of one of `values`.
    fn excluding_within(self, values: &[Self::Item], precision: Self::Item) -> MembershipWithin<Self, Self::Item>
    where
        Self: Sized,
        Self::Item: Precise,
    {
        return MembershipWithin { upstream: self, values: values.to_vec(), precision, keep: false };
    }

    // ========================================================================
    // Numeric conversions
    // ========================================================================

    /// Narrowing follows `as`: integers wrap, floats truncate toward zero
    /// and saturate, NaN becomes zero.
    fn to_ints(self) -> Map<Self, fn(Self::Item) -> i32>
    where
        Self: Sized,
        Self::Item: Numeric,
    {
        return Map { upstream: self, mapper: <Self::Item as Numeric>::to_i32 };
    }

    fn to_longs(self) -> Map<Self, fn(Self::Item) -> i64>
    where
        Self: Sized,
        Self::Item: Numeric,
    {
        return Map { upstream: self, mapper: <Self::Item as Numeric>::to_i64 };
    }

    fn to_doubles(self) -> Map<Self, fn(Self::Item) -> f64>
    where
        Self: Sized,
        Self::Item: Numeric,
    {
        return Map { upstream: self, mapper: <Self::Item as Numeric>::to_f64 };
    }

    /// Rounds half up (`-2.5` becomes `-2`), then saturates like
    /// [`Sequence::to_ints`].
    fn to_rounded_ints(self) -> Map<Self, fn(f64) -> i32>
    where
        Self: Sized + Sequence<Item = f64>,
    {
        return Map { upstream: self, mapper: |x| round_half_up(x) as i32 };
    }

    fn to_rounded_longs(self) -> Map<Self, fn(f64) -> i64>
    where
        Self: Sized + Sequence<Item = f64>,
    {
        return Map { upstream: self, mapper: |x| round_half_up(x) as i64 };
    }

    // ========================================================================
    // Positional
    // ========================================================================

    /// The first element and every `step`-th one after it.
    ///
    /// # Panics
    ///
    /// If `step` is zero. Use [`Sequence::try_step`] to get an error
    /// instead.
    fn step(self, step: usize) -> Step<Self>
    where
        Self: Sized,
    {
        match self.try_step(step) {
            Ok(stepped) => return stepped,
            Err(err) => panic!("{err}"),
        }
    }

    fn try_step(self, step: usize) -> Result<Step<Self>>
    where
        Self: Sized,
    {
        if step == 0 {
            return Err(Error::InvalidArgument("step must be positive"));
        }
        return Ok(Step { upstream: self, step });
    }

    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        return Skip { upstream: self, count };
    }

    /// Everything except the last `count` elements. Buffers `count`
    /// elements per traversal.
    fn skip_tail(self, count: usize) -> SkipTail<Self>
    where
        Self: Sized,
    {
        return SkipTail { upstream: self, count };
    }

    fn limit(self, count: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        return Limit { upstream: self, count };
    }

    /// Stop before the first element matching `terminal`.
    fn until<P>(self, terminal: P) -> Terminal<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        return Terminal { upstream: self, predicate: terminal, inclusive: false };
    }

    /// Stop after the first element matching `terminal`.
    fn ending_at<P>(self, terminal: P) -> Terminal<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        return Terminal { upstream: self, predicate: terminal, inclusive: true };
    }

    /// Start after the first element matching `predicate`.
    fn starting_after<P>(self, predicate: P) -> Starting<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        return Starting { upstream: self, predicate, inclusive: false };
    }

    /// Start at the first element matching `predicate`.
    fn starting_from<P>(self, predicate: P) -> Starting<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        return Starting { upstream: self, predicate, inclusive: true };
    }

    // ========================================================================
    // Combining
    // ========================================================================

    fn append<B>(self, that: B) -> Append<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        return Append { first: self, second: that };
    }

    fn prefix(self, values: &[Self::Item]) -> Append<source::Values<Self::Item>, Self>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        return Append { first: of(values), second: self };
    }

    fn suffix(self, values: &[Self::Item]) -> Append<Self, source::Values<Self::Item>>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        return Append { first: self, second: of(values) };
    }

    /// Alternate elements of `self` and `that`, stopping when either side
    /// runs out on its turn.
    fn interleave<B>(self, that: B) -> Interleave<Self, B>
    where
        Self: Sized,
        B: Sequence<Item = Self::Item>,
    {
        return Interleave { first: self, second: that };
    }

    /// Start over each time the end is reached. Never ends unless the
    /// sequence is (or becomes) empty.
    fn repeat(self) -> Repeat<Self>
    where
        Self: Sized,
    {
        return Repeat { upstream: self, times: None };
    }

    fn repeat_times(self, times: usize) -> Repeat<Self>
    where
        Self: Sized,
    {
        return Repeat { upstream: self, times: Some(times) };
    }

    fn sorted(self) -> Sorted<Self>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        return Sorted { upstream: self };
    }

    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        return Reversed { upstream: self };
    }

    // ========================================================================
    // Windowing and partitioning
    // ========================================================================

    /// Windows of up to `size` elements starting every `step` elements.
    ///
    /// # Panics
    ///
    /// If `size` or `step` is zero. Use [`Sequence::try_window`] to get an
    /// error instead.
    fn window(self, size: usize, step: usize) -> Window<Self>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        match self.try_window(size, step) {
            Ok(window) => return window,
            Err(err) => panic!("{err}"),
        }
    }

    fn try_window(self, size: usize, step: usize) -> Result<Window<Self>>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        return Window::new(self, size, step);
    }

    /// Windows of `size` sliding one element at a time.
    fn window_of(self, size: usize) -> Window<Self>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        return self.window(size, 1);
    }

    /// Non-overlapping batches of `size`; the last may be shorter.
    fn batch(self, size: usize) -> Window<Self>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        return self.window(size, size);
    }

    /// Batches of consecutive elements, cut between `current` and `next`
    /// wherever `boundary(current, next)` holds.
    fn batch_by<P>(self, boundary: P) -> BatchBy<Self, P>
    where
        Self: Sized,
        Self::Item: Primitive,
        P: Fn(Self::Item, Self::Item) -> bool,
    {
        return BatchBy { upstream: self, boundary };
    }

    /// Batches between occurrences of `element`, which is dropped.
    fn split(self, element: Self::Item) -> Split<Self, Exactly<Self::Item>>
    where
        Self: Sized,
        Self::Item: Primitive,
    {
        return Split { upstream: self, separator: Exactly(element) };
    }

    /// Batches between elements matching `predicate`, which are dropped.
    fn split_by<P>(self, predicate: P) -> Split<Self, P>
    where
        Self: Sized,
        Self::Item: Primitive,
        P: Fn(Self::Item) -> bool,
    {
        return Split { upstream: self, separator: predicate };
    }

    // ========================================================================
    // Terminal
    // ========================================================================

    fn to_vec(&self) -> Vec<Self::Item> {
        return self.iter().collect();
    }

    fn to_list(&self) -> ArrayList<Self::Item>
    where
        Self::Item: Primitive,
    {
        return self.iter().collect();
    }

    fn to_set(&self) -> PrimitiveSet<Self::Item>
    where
        Self::Item: Primitive,
    {
        return self.iter().collect();
    }

    /// Add every element to `target`, returning it for chaining.
    fn collect_into<'c, C: Extend<Self::Item>>(&self, target: &'c mut C) -> &'c mut C {
        target.extend(self.iter());
        return target;
    }

    fn fold<B, F: FnMut(B, Self::Item) -> B>(&self, init: B, f: F) -> B {
        return self.iter().fold(init, f);
    }

    fn reduce<F: FnMut(Self::Item, Self::Item) -> Self::Item>(&self, f: F) -> Option<Self::Item> {
        return self.iter().reduce(f);
    }

    fn for_each<F: FnMut(Self::Item)>(&self, f: F) {
        self.iter().for_each(f);
    }

    fn for_each_indexed<F: FnMut(Self::Item, usize)>(&self, mut f: F) {
        for (i, x) in self.iter().enumerate() {
            f(x, i);
        }
    }

    fn first(&self) -> Option<Self::Item> {
        return self.iter().next();
    }

    fn last(&self) -> Option<Self::Item> {
        return self.iter().last();
    }

    fn at(&self, index: usize) -> Option<Self::Item> {
        return self.iter().nth(index);
    }

    fn first_where<P: FnMut(&Self::Item) -> bool>(&self, predicate: P) -> Option<Self::Item> {
        return self.iter().find(predicate);
    }

    fn last_where<P: FnMut(&Self::Item) -> bool>(&self, predicate: P) -> Option<Self::Item> {
        return self.iter().filter(predicate).last();
    }

    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: Primitive,
    {
        return self.iter().min_by(<Self::Item as Primitive>::total_cmp);
    }

    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: Primitive,
    {
        return self.iter().max_by(<Self::Item as Primitive>::total_cmp);
    }

    fn count(&self) -> usize {
        return self.iter().count();
    }

    fn all<P: FnMut(Self::Item) -> bool>(&self, predicate: P) -> bool {
        return self.iter().all(predicate);
    }

    fn any<P: FnMut(Self::Item) -> bool>(&self, predicate: P) -> bool {
        return self.iter().any(predicate);
    }

    fn none<P: FnMut(Self::Item) -> bool>(&self, predicate: P) -> bool {
        return !self.any(predicate);
    }

    fn is_empty(&self) -> bool {
        return self.iter().next().is_none();
    }

    fn join(&self, delimiter: &str) -> String
    where
        Self::Item: Display,
    {
        return self.join_with("", delimiter, "");
    }

    fn join_with(&self, prefix: &str, delimiter: &str, suffix: &str) -> String
    where
        Self::Item: Display,
    {
        let mut out = String::from(prefix);
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(delimiter);
            }
            // Writing to a String cannot fail.
            let _ = write!(out, "{}", x);
        }
        out.push_str(suffix);
        return out;
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;
    type Iter<'a> = S::Iter<'a> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return (**self).iter();
    }
}

impl<T: Primitive> Sequence for ArrayList<T> {
    type Item = T;
    type Iter<'a> = crate::list::array::Iter<'a, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return self.as_slice().iter().copied();
    }
}

impl<T: Primitive> Sequence for PrimitiveSet<T> {
    type Item = T;
    type Iter<'a> = std::iter::Copied<std::collections::hash_map::Values<'a, T::Bits, T>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return PrimitiveSet::iter(self);
    }
}

/// Fallible pulling for callers that want exhaustion as an error rather
/// than `None`.
pub trait Pull: Iterator {
    fn next_or_err(&mut self) -> Result<Self::Item> {
        return self.next().ok_or(Error::NoSuchElement);
    }
}

impl<I: Iterator> Pull for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_pipeline_sees_current_contents() {
        let mut list = ArrayList::of(&[1, 2, 3]);
        let doubled = (&list).map(|x| x * 2).to_vec();
        assert_eq!(doubled, vec![2, 4, 6]);

        list.push(4);
        assert_eq!((&list).filter(|x| x % 2 == 0).to_list(), ArrayList::of(&[2, 4]));
    }

    #[test]
    fn terminal_operations() {
        let seq = of(&[3, 1, 4, 1, 5]);
        assert_eq!(seq.first(), Some(3));
        assert_eq!(seq.last(), Some(5));
        assert_eq!(seq.at(2), Some(4));
        assert_eq!(seq.at(5), None);
        assert_eq!(seq.first_where(|&x| x < 3), Some(1));
        assert_eq!(seq.last_where(|&x| x > 3), Some(5));
        assert_eq!(seq.min(), Some(1));
        assert_eq!(seq.max(), Some(5));
        assert_eq!(seq.count(), 5);
        assert_eq!(seq.fold(0, |a, b| a + b), 14);
        assert_eq!(seq.reduce(|a, b| a * b), Some(60));
        assert!(seq.all(|x| x > 0));
        assert!(seq.any(|x| x == 4));
        assert!(seq.none(|x| x > 5));
        assert!(!seq.is_empty());
        assert_eq!(seq.to_set().len(), 4);
    }

    #[test]
    fn terminal_operations_on_empty() {
        let seq = empty::<f64>();
        assert_eq!(seq.first(), None);
        assert_eq!(seq.last(), None);
        assert_eq!(seq.min(), None);
        assert_eq!(seq.reduce(|a, b| a + b), None);
        assert!(seq.all(|_| false));
        assert_eq!(seq.join(", "), "");
    }

    #[test]
    fn float_extremes_use_total_order() {
        let seq = of(&[1.0, -0.0, 0.0, -3.5]);
        assert_eq!(seq.min(), Some(-3.5));
        assert_eq!(seq.max(), Some(1.0));
    }

    #[test]
    fn join_renders_elements() {
        let seq = of(&['a', 'b', 'c']);
        assert_eq!(seq.join(""), "abc");
        assert_eq!(seq.join_with("<", "|", ">"), "<a|b|c>");
    }

    #[test]
    fn for_each_variants() {
        let seq = of(&[10, 20]);
        let mut seen = vec![];
        seq.for_each_indexed(|x, i| seen.push((x, i)));
        assert_eq!(seen, vec![(10, 0), (20, 1)]);

        let mut total = 0;
        Sequence::for_each(&seq, |x| total += x);
        assert_eq!(total, 30);
    }

    #[test]
    fn collect_into_existing() {
        let mut list = ArrayList::of(&[0]);
        of(&[1, 2]).collect_into(&mut list).push(3);
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn set_is_a_sequence() {
        let set = PrimitiveSet::of(&[3, 1, 2]);
        assert_eq!((&set).sorted().to_vec(), vec![1, 2, 3]);
        assert_eq!(Sequence::count(&set), 3);
    }

    #[test]
    fn pull_maps_exhaustion_to_error() {
        let seq = of(&[1]);
        let mut iter = seq.iter();
        assert_eq!(iter.next_or_err(), Ok(1));
        assert_eq!(iter.next_or_err(), Err(Error::NoSuchElement));
    }

    #[test]
    fn membership_within_precision() {
        let seq = of(&[1.0, 1.125, 2.5, 1.75, 3.0]);
        assert_eq!((&seq).including_within(&[1.0, 2.0], 0.25).to_vec(), vec![1.0, 1.125, 1.75]);
        assert_eq!((&seq).excluding_within(&[1.0, 2.0], 0.25).to_vec(), vec![2.5, 3.0]);
        assert_eq!((&seq).including_within(&[], 1.0).count(), 0);
    }

    #[test]
    fn numeric_conversions() {
        let seq = of(&[1.5, -2.5, 2.5, -0.4, 3e10]);
        assert_eq!((&seq).to_ints().to_vec(), vec![1, -2, 2, 0, i32::MAX]);
        assert_eq!((&seq).to_longs().to_vec(), vec![1, -2, 2, 0, 30_000_000_000]);
        assert_eq!((&seq).to_rounded_ints().to_vec(), vec![2, -2, 3, 0, i32::MAX]);
        assert_eq!((&seq).to_rounded_longs().to_vec(), vec![2, -2, 3, 0, 30_000_000_000]);

        assert_eq!(range(1, 3).to_doubles().to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(of(&[i64::MAX]).to_ints().to_vec(), vec![-1]);
    }

    #[test]
    fn zero_step_is_an_error() {
        assert_eq!(range(1, 5).try_step(2).map(|s| s.to_vec()), Ok(vec![1, 3, 5]));
        assert_eq!(of(&[1]).try_step(0).err(), Some(Error::InvalidArgument("step must be positive")));
    }

    #[test]
    #[should_panic(expected = "step must be positive")]
    fn zero_step_panics() {
        let _ = of(&[1]).step(0);
    }
}
