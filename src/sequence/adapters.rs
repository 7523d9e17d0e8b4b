//! Element-wise sequence stages.
//!
//! Each stage owns its upstream and its closure and nothing else. Calling
//! [`Sequence::iter`] on a stage asks the upstream for a fresh iterator and
//! wraps it, so a stage can be traversed as often as its source allows.
//! Where std already has the right iterator adapter the stage hands out
//! that adapter over a borrowed closure.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::primitive::Precise;
use crate::primitive::Primitive;
use crate::sequence::Sequence;

// ============================================================================
// Filtering, mapping and peeking
// ============================================================================

pub struct Filter<S, P> {
    pub(super) upstream: S,
    pub(super) predicate: P,
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Iter<'a> = std::iter::Filter<S::Iter<'a>, &'a P> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return self.upstream.iter().filter(&self.predicate);
    }
}

pub struct FilterIndexed<S, P> {
    pub(super) upstream: S,
    pub(super) predicate: P,
}

impl<S, P> Sequence for FilterIndexed<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    type Item = S::Item;
    type Iter<'a> = FilterIndexedIter<'a, S::Iter<'a>, P> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return FilterIndexedIter {
            upstream: self.upstream.iter(),
            predicate: &self.predicate,
            index: 0,
        };
    }
}

pub struct FilterIndexedIter<'a, I, P> {
    upstream: I,
    predicate: &'a P,
    index: usize,
}

impl<'a, I, P> Iterator for FilterIndexedIter<'a, I, P>
where
    I: Iterator,
    P: Fn(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let x = self.upstream.next()?;
            let index = self.index;
            self.index += 1;
            if (self.predicate)(&x, index) {
                return Some(x);
            }
        }
    }
}

pub struct Map<S, F> {
    pub(super) upstream: S,
    pub(super) mapper: F,
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    type Item = U;
    type Iter<'a> = std::iter::Map<S::Iter<'a>, &'a F> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return self.upstream.iter().map(&self.mapper);
    }
}

pub struct MapIndexed<S, F> {
    pub(super) upstream: S,
    pub(super) mapper: F,
}

impl<S, F, U> Sequence for MapIndexed<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> U,
{
    type Item = U;
    type Iter<'a> = MapIndexedIter<'a, S::Iter<'a>, F> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return MapIndexedIter {
            upstream: self.upstream.iter(),
            mapper: &self.mapper,
            index: 0,
        };
    }
}

pub struct MapIndexedIter<'a, I, F> {
    upstream: I,
    mapper: &'a F,
    index: usize,
}

impl<'a, I, F, U> Iterator for MapIndexedIter<'a, I, F>
where
    I: Iterator,
    F: Fn(I::Item, usize) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        let x = self.upstream.next()?;
        let index = self.index;
        self.index += 1;
        return Some((self.mapper)(x, index));
    }
}

pub struct Peek<S, F> {
    pub(super) upstream: S,
    pub(super) action: F,
}

impl<S, F> Sequence for Peek<S, F>
where
    S: Sequence,
    F: Fn(&S::Item),
{
    type Item = S::Item;
    type Iter<'a> = std::iter::Inspect<S::Iter<'a>, &'a F> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return self.upstream.iter().inspect(&self.action);
    }
}

pub struct PeekIndexed<S, F> {
    pub(super) upstream: S,
    pub(super) action: F,
}

impl<S, F> Sequence for PeekIndexed<S, F>
where
    S: Sequence,
    F: Fn(&S::Item, usize),
{
    type Item = S::Item;
    type Iter<'a> = PeekIndexedIter<'a, S::Iter<'a>, F> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return PeekIndexedIter {
            upstream: self.upstream.iter(),
            action: &self.action,
            index: 0,
        };
    }
}

pub struct PeekIndexedIter<'a, I, F> {
    upstream: I,
    action: &'a F,
    index: usize,
}

impl<'a, I, F> Iterator for PeekIndexedIter<'a, I, F>
where
    I: Iterator,
    F: Fn(&I::Item, usize),
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let x = self.upstream.next()?;
        (self.action)(&x, self.index);
        self.index += 1;
        return Some(x);
    }
}

// ============================================================================
// Neighbor peeking
// ============================================================================

/// Keeps elements whose `(previous, current)` pair passes the predicate.
/// `previous` starts at the placeholder and then tracks every upstream
/// element, kept or not.
pub struct FilterBack<S, T, P> {
    pub(super) upstream: S,
    pub(super) first_previous: T,
    pub(super) predicate: P,
}

impl<S, T, P> Sequence for FilterBack<S, T, P>
where
    S: Sequence<Item = T>,
    T: Primitive,
    P: Fn(T, T) -> bool,
{
    type Item = T;
    type Iter<'a> = FilterBackIter<'a, S::Iter<'a>, T, P> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return FilterBackIter {
            upstream: self.upstream.iter(),
            previous: self.first_previous,
            predicate: &self.predicate,
            exhausted: false,
        };
    }
}

pub struct FilterBackIter<'a, I, T, P> {
    upstream: I,
    previous: T,
    predicate: &'a P,
    exhausted: bool,
}

impl<'a, I, T, P> Iterator for FilterBackIter<'a, I, T, P>
where
    I: Iterator<Item = T>,
    T: Primitive,
    P: Fn(T, T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }

        loop {
            let Some(current) = self.upstream.next() else {
                self.exhausted = true;
                return None;
            };

            let keep = (self.predicate)(self.previous, current);
            self.previous = current;
            if keep {
                return Some(current);
            }
        }
    }
}

/// One element of lookahead over an iterator, with a placeholder standing in
/// for the element after the last.
struct Lookahead<I, T> {
    upstream: I,
    pending: Option<T>,
    started: bool,
    last_next: T,
}

impl<I: Iterator<Item = T>, T: Primitive> Lookahead<I, T> {
    fn new(upstream: I, last_next: T) -> Lookahead<I, T> {
        return Lookahead { upstream, pending: None, started: false, last_next };
    }

    /// The next `(current, next)` pair, or `None` once upstream is done.
    fn advance(&mut self) -> Option<(T, T)> {
        if !self.started {
            self.started = true;
            self.pending = self.upstream.next();
        }

        let current = self.pending.take()?;
        self.pending = self.upstream.next();
        return Some((current, self.pending.unwrap_or(self.last_next)));
    }
}

/// Keeps elements whose `(current, next)` pair passes the predicate.
pub struct FilterForward<S, T, P> {
    pub(super) upstream: S,
    pub(super) last_next: T,
    pub(super) predicate: P,
}

impl<S, T, P> Sequence for FilterForward<S, T, P>
where
    S: Sequence<Item = T>,
    T: Primitive,
    P: Fn(T, T) -> bool,
{
    type Item = T;
    type Iter<'a> = FilterForwardIter<'a, S::Iter<'a>, T, P> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return FilterForwardIter {
            lookahead: Lookahead::new(self.upstream.iter(), self.last_next),
            predicate: &self.predicate,
        };
    }
}

pub struct FilterForwardIter<'a, I, T, P> {
    lookahead: Lookahead<I, T>,
    predicate: &'a P,
}

impl<'a, I, T, P> Iterator for FilterForwardIter<'a, I, T, P>
where
    I: Iterator<Item = T>,
    T: Primitive,
    P: Fn(T, T) -> bool,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let (current, next) = self.lookahead.advance()?;
            if (self.predicate)(current, next) {
                return Some(current);
            }
        }
    }
}

pub struct MapBack<S, T, F> {
    pub(super) upstream: S,
    pub(super) first_previous: T,
    pub(super) mapper: F,
}

impl<S, T, F> Sequence for MapBack<S, T, F>
where
    S: Sequence<Item = T>,
    T: Primitive,
    F: Fn(T, T) -> T,
{
    type Item = T;
    type Iter<'a> = MapBackIter<'a, S::Iter<'a>, T, F> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return MapBackIter {
            upstream: self.upstream.iter(),
            previous: self.first_previous,
            mapper: &self.mapper,
        };
    }
}

pub struct MapBackIter<'a, I, T, F> {
    upstream: I,
    previous: T,
    mapper: &'a F,
}

impl<'a, I, T, F> Iterator for MapBackIter<'a, I, T, F>
where
    I: Iterator<Item = T>,
    T: Primitive,
    F: Fn(T, T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = self.upstream.next()?;
        let mapped = (self.mapper)(self.previous, current);
        self.previous = current;
        return Some(mapped);
    }
}

pub struct MapForward<S, T, F> {
    pub(super) upstream: S,
    pub(super) last_next: T,
    pub(super) mapper: F,
}

impl<S, T, F> Sequence for MapForward<S, T, F>
where
    S: Sequence<Item = T>,
    T: Primitive,
    F: Fn(T, T) -> T,
{
    type Item = T;
    type Iter<'a> = MapForwardIter<'a, S::Iter<'a>, T, F> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return MapForwardIter {
            lookahead: Lookahead::new(self.upstream.iter(), self.last_next),
            mapper: &self.mapper,
        };
    }
}

pub struct MapForwardIter<'a, I, T, F> {
    lookahead: Lookahead<I, T>,
    mapper: &'a F,
}

impl<'a, I, T, F> Iterator for MapForwardIter<'a, I, T, F>
where
    I: Iterator<Item = T>,
    T: Primitive,
    F: Fn(T, T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (current, next) = self.lookahead.advance()?;
        return Some((self.mapper)(current, next));
    }
}

// ============================================================================
// Distinct
// ============================================================================

/// First occurrences only, by exact identity.
///
/// Membership is a hash set over every distinct value seen so far, so each
/// element costs O(1) amortized and memory grows with the number of
/// distinct values in the traversal.
pub struct Distinct<S> {
    pub(super) upstream: S,
}

impl<S> Sequence for Distinct<S>
where
    S: Sequence,
    S::Item: Primitive,
{
    type Item = S::Item;
    type Iter<'a> = DistinctIter<S::Iter<'a>, S::Item> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return DistinctIter {
            upstream: self.upstream.iter(),
            seen: FxHashSet::default(),
        };
    }
}

pub struct DistinctIter<I, T: Primitive> {
    upstream: I,
    seen: FxHashSet<T::Bits>,
}

impl<I, T> Iterator for DistinctIter<I, T>
where
    I: Iterator<Item = T>,
    T: Primitive,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let x = self.upstream.next()?;
            if self.seen.insert(x.to_bits()) {
                return Some(x);
            }
        }
    }
}

/// First occurrences only, where anything within `precision` of a kept
/// value counts as a repeat.
///
/// Tolerance is not transitive, so this cannot hash: each element is
/// compared against every value kept so far, O(n * k) for k kept values.
pub struct DistinctWithin<S, T> {
    pub(super) upstream: S,
    pub(super) precision: T,
}

impl<S, T> Sequence for DistinctWithin<S, T>
where
    S: Sequence<Item = T>,
    T: Precise,
{
    type Item = T;
    type Iter<'a> = DistinctWithinIter<S::Iter<'a>, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return DistinctWithinIter {
            upstream: self.upstream.iter(),
            kept: Vec::new(),
            precision: self.precision,
        };
    }
}

pub struct DistinctWithinIter<I, T> {
    upstream: I,
    kept: Vec<T>,
    precision: T,
}

impl<I, T> Iterator for DistinctWithinIter<I, T>
where
    I: Iterator<Item = T>,
    T: Precise,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let x = self.upstream.next()?;
            if !crate::arrays::contains_within(&self.kept, x, self.precision) {
                self.kept.push(x);
                return Some(x);
            }
        }
    }
}

// ============================================================================
// Positional
// ============================================================================

pub struct Step<S> {
    pub(super) upstream: S,
    pub(super) step: usize,
}

impl<S: Sequence> Sequence for Step<S> {
    type Item = S::Item;
    type Iter<'a> = std::iter::StepBy<S::Iter<'a>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return self.upstream.iter().step_by(self.step);
    }
}

pub struct Skip<S> {
    pub(super) upstream: S,
    pub(super) count: usize,
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Iter<'a> = std::iter::Skip<S::Iter<'a>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return self.upstream.iter().skip(self.count);
    }
}

pub struct Limit<S> {
    pub(super) upstream: S,
    pub(super) count: usize,
}

impl<S: Sequence> Sequence for Limit<S> {
    type Item = S::Item;
    type Iter<'a> = std::iter::Take<S::Iter<'a>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return self.upstream.iter().take(self.count);
    }
}

/// Everything but the last `count` elements.
pub struct SkipTail<S> {
    pub(super) upstream: S,
    pub(super) count: usize,
}

impl<S: Sequence> Sequence for SkipTail<S> {
    type Item = S::Item;
    type Iter<'a> = SkipTailIter<S::Iter<'a>, S::Item> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return SkipTailIter {
            upstream: self.upstream.iter(),
            buffer: VecDeque::new(),
            count: self.count,
        };
    }
}

pub struct SkipTailIter<I, T> {
    upstream: I,
    buffer: VecDeque<T>,
    count: usize,
}

impl<I: Iterator<Item = T>, T> Iterator for SkipTailIter<I, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        while self.buffer.len() < self.count {
            let x = self.upstream.next()?;
            self.buffer.push_back(x);
        }

        let x = self.upstream.next()?;
        if self.count == 0 {
            return Some(x);
        }
        self.buffer.push_back(x);
        return self.buffer.pop_front();
    }
}

/// Stops at the first element matching the predicate, yielding it too when
/// `inclusive`.
pub struct Terminal<S, P> {
    pub(super) upstream: S,
    pub(super) predicate: P,
    pub(super) inclusive: bool,
}

impl<S, P> Sequence for Terminal<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Iter<'a> = TerminalIter<'a, S::Iter<'a>, P> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return TerminalIter {
            upstream: self.upstream.iter(),
            predicate: &self.predicate,
            inclusive: self.inclusive,
            done: false,
        };
    }
}

pub struct TerminalIter<'a, I, P> {
    upstream: I,
    predicate: &'a P,
    inclusive: bool,
    done: bool,
}

impl<'a, I, P> Iterator for TerminalIter<'a, I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.done {
            return None;
        }

        let x = self.upstream.next()?;
        if (self.predicate)(&x) {
            self.done = true;
            if !self.inclusive {
                return None;
            }
        }
        return Some(x);
    }
}

/// Drops everything before the first element matching the predicate, and
/// that element too unless `inclusive`.
pub struct Starting<S, P> {
    pub(super) upstream: S,
    pub(super) predicate: P,
    pub(super) inclusive: bool,
}

impl<S, P> Sequence for Starting<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Iter<'a> = StartingIter<'a, S::Iter<'a>, P> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return StartingIter {
            upstream: self.upstream.iter(),
            predicate: &self.predicate,
            inclusive: self.inclusive,
            started: false,
        };
    }
}

pub struct StartingIter<'a, I, P> {
    upstream: I,
    predicate: &'a P,
    inclusive: bool,
    started: bool,
}

impl<'a, I, P> Iterator for StartingIter<'a, I, P>
where
    I: Iterator,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while !self.started {
            let x = self.upstream.next()?;
            if (self.predicate)(&x) {
                self.started = true;
                if self.inclusive {
                    return Some(x);
                }
            }
        }
        return self.upstream.next();
    }
}

/// Keeps elements that are (or are not, when `keep` is false) exactly equal
/// to one of `values`.
pub struct Membership<S, T> {
    pub(super) upstream: S,
    pub(super) values: Vec<T>,
    pub(super) keep: bool,
}

impl<S, T> Sequence for Membership<S, T>
where
    S: Sequence<Item = T>,
    T: Primitive,
{
    type Item = T;
    type Iter<'a> = MembershipIter<'a, S::Iter<'a>, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return MembershipIter {
            upstream: self.upstream.iter(),
            values: &self.values,
            keep: self.keep,
        };
    }
}

pub struct MembershipIter<'a, I, T> {
    upstream: I,
    values: &'a [T],
    keep: bool,
}

impl<'a, I, T> Iterator for MembershipIter<'a, I, T>
where
    I: Iterator<Item = T>,
    T: Primitive,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let x = self.upstream.next()?;
            if crate::arrays::contains_exactly(self.values, x) == self.keep {
                return Some(x);
            }
        }
    }
}

/// [`Membership`] with a tolerance: an element matches when it lies within
/// `precision` of any of `values`.
pub struct MembershipWithin<S, T> {
    pub(super) upstream: S,
    pub(super) values: Vec<T>,
    pub(super) precision: T,
    pub(super) keep: bool,
}

impl<S, T> Sequence for MembershipWithin<S, T>
where
    S: Sequence<Item = T>,
    T: Precise,
{
    type Item = T;
    type Iter<'a> = MembershipWithinIter<'a, S::Iter<'a>, T> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return MembershipWithinIter {
            upstream: self.upstream.iter(),
            values: &self.values,
            precision: self.precision,
            keep: self.keep,
        };
    }
}

pub struct MembershipWithinIter<'a, I, T> {
    upstream: I,
    values: &'a [T],
    precision: T,
    keep: bool,
}

impl<'a, I, T> Iterator for MembershipWithinIter<'a, I, T>
where
    I: Iterator<Item = T>,
    T: Precise,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let x = self.upstream.next()?;
            if crate::arrays::contains_within(self.values, x, self.precision) == self.keep {
                return Some(x);
            }
        }
    }
}

// ============================================================================
// Combining
// ============================================================================

pub struct Append<A, B> {
    pub(super) first: A,
    pub(super) second: B,
}

impl<A, B> Sequence for Append<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Iter<'a> = std::iter::Chain<A::Iter<'a>, B::Iter<'a>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return self.first.iter().chain(self.second.iter());
    }
}

/// Alternates between two sequences, stopping as soon as the one whose turn
/// it is runs out.
pub struct Interleave<A, B> {
    pub(super) first: A,
    pub(super) second: B,
}

impl<A, B> Sequence for Interleave<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Iter<'a> = InterleaveIter<A::Iter<'a>, B::Iter<'a>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return InterleaveIter {
            first: self.first.iter(),
            second: self.second.iter(),
            first_turn: true,
            done: false,
        };
    }
}

pub struct InterleaveIter<A, B> {
    first: A,
    second: B,
    first_turn: bool,
    done: bool,
}

impl<A, B> Iterator for InterleaveIter<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if self.done {
            return None;
        }

        let x = if self.first_turn { self.first.next() } else { self.second.next() };
        self.first_turn = !self.first_turn;
        if x.is_none() {
            self.done = true;
        }
        return x;
    }
}

/// Traverses the upstream again each time it runs out, `times` passes in
/// total or forever when `times` is `None`. An empty pass ends it, so an
/// empty or already-consumed source never loops.
pub struct Repeat<S> {
    pub(super) upstream: S,
    pub(super) times: Option<usize>,
}

impl<S: Sequence> Sequence for Repeat<S> {
    type Item = S::Item;
    type Iter<'a> = RepeatIter<'a, S> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        return RepeatIter {
            source: &self.upstream,
            current: self.upstream.iter(),
            remaining: self.times.map(|times| times.saturating_sub(1)),
            yielded: false,
            done: self.times == Some(0),
        };
    }
}

pub struct RepeatIter<'a, S: Sequence + 'a> {
    source: &'a S,
    current: S::Iter<'a>,
    /// Passes still to start after the current one.
    remaining: Option<usize>,
    yielded: bool,
    done: bool,
}

impl<'a, S: Sequence + 'a> Iterator for RepeatIter<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            if self.done {
                return None;
            }

            if let Some(x) = self.current.next() {
                self.yielded = true;
                return Some(x);
            }

            if !self.yielded {
                self.done = true;
                return None;
            }

            match self.remaining {
                Some(0) => {
                    self.done = true;
                    return None;
                }
                Some(n) => self.remaining = Some(n - 1),
                None => {}
            }
            self.current = self.source.iter();
            self.yielded = false;
        }
    }
}

// ============================================================================
// Materializing
// ============================================================================

/// Buffers one full traversal, then yields it in ascending total order.
pub struct Sorted<S> {
    pub(super) upstream: S,
}

impl<S> Sequence for Sorted<S>
where
    S: Sequence,
    S::Item: Primitive,
{
    type Item = S::Item;
    type Iter<'a> = std::vec::IntoIter<S::Item> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        let mut values: Vec<S::Item> = self.upstream.iter().collect();
        values.sort_by(<S::Item as Primitive>::total_cmp);
        return values.into_iter();
    }
}

/// Buffers one full traversal, then yields it back to front.
pub struct Reversed<S> {
    pub(super) upstream: S,
}

impl<S: Sequence> Sequence for Reversed<S> {
    type Item = S::Item;
    type Iter<'a> = std::iter::Rev<std::vec::IntoIter<S::Item>> where Self: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        let values: Vec<S::Item> = self.upstream.iter().collect();
        return values.into_iter().rev();
    }
}
