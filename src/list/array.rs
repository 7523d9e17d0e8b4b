//! Growable array-backed primitive list.
//!
//! The list owns one contiguous buffer and a size. Slots `[0, size)` hold
//! elements; slots `[size, capacity)` are scratch. When an insertion would
//! overflow the buffer it is reallocated to `new_size + new_size / 2`, so
//! repeated single appends stay amortized O(1).
//!
//! Every structural change bumps a generation stamp. Detached cursors
//! remember the stamp they last saw and fail fast when it moves under them.

use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use tracing::trace;

use crate::error::Error;
use crate::error::Result;
use crate::list::cursor::Cursor;
use crate::list::cursor::CursorMut;
use crate::list::PrimitiveList;
use crate::primitive::Precise;
use crate::primitive::Primitive;

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 10;

/// Borrowing iterator over a list's elements, by value.
pub type Iter<'a, T> = std::iter::Copied<std::slice::Iter<'a, T>>;

/// Source of list identities. Cursors remember the identity of the list they
/// were opened on.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    return NEXT_ID.fetch_add(1, Ordering::Relaxed);
}

/// A list of primitives backed by a resizable buffer.
pub struct ArrayList<T: Primitive> {
    contents: Box<[T]>,
    size: usize,
    generation: u64,
    id: u64,
}

impl<T: Primitive> ArrayList<T> {
    /// Create an empty list with the default capacity.
    pub fn new() -> ArrayList<T> {
        return ArrayList::with_capacity(DEFAULT_CAPACITY);
    }

    /// Create an empty list able to hold `capacity` elements before growing.
    pub fn with_capacity(capacity: usize) -> ArrayList<T> {
        return ArrayList {
            contents: vec![T::default(); capacity].into_boxed_slice(),
            size: 0,
            generation: 0,
            id: next_id(),
        };
    }

    /// Create a list holding a copy of `values`, sized exactly to fit.
    pub fn of(values: &[T]) -> ArrayList<T> {
        return ArrayList {
            contents: values.to_vec().into_boxed_slice(),
            size: values.len(),
            generation: 0,
            id: next_id(),
        };
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.size;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.size == 0;
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        return self.contents.len();
    }

    /// The structural-change stamp cursors compare against.
    #[inline]
    pub fn generation(&self) -> u64 {
        return self.generation;
    }

    /// Identity of this list, distinct from every other list including its
    /// clones.
    #[inline]
    pub(crate) fn id(&self) -> u64 {
        return self.id;
    }

    pub fn clear(&mut self) {
        self.size = 0;
        self.touch();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return &self.contents[..self.size];
    }

    pub fn to_vec(&self) -> Vec<T> {
        return self.as_slice().to_vec();
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        return self.as_slice().iter().copied();
    }

    pub fn get(&self, index: usize) -> Result<T> {
        self.range_check(index)?;
        return Ok(self.contents[index]);
    }

    /// Overwrite the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, x: T) -> Result<T> {
        self.range_check(index)?;
        let previous = self.contents[index];
        self.contents[index] = x;
        return Ok(previous);
    }

    pub fn push(&mut self, x: T) {
        self.grow_if_necessary_by(1);
        self.contents[self.size] = x;
        self.size += 1;
        self.touch();
    }

    /// Insert at `index`, shifting everything from `index` one slot right.
    pub fn insert_at(&mut self, index: usize, x: T) -> Result<()> {
        self.range_check_for_add(index)?;
        self.unchecked_insert(index, x);
        return Ok(());
    }

    /// Remove the element at `index`, shifting the tail one slot left.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.range_check(index)?;
        return Ok(self.unchecked_remove(index));
    }

    /// Append every value in `xs`. Returns `false` without touching the
    /// list when `xs` is empty.
    pub fn append_all(&mut self, xs: &[T]) -> bool {
        if xs.is_empty() {
            return false;
        }

        self.grow_if_necessary_by(xs.len());
        self.contents[self.size..self.size + xs.len()].copy_from_slice(xs);
        self.size += xs.len();
        self.touch();
        return true;
    }

    /// Append every element of another list.
    pub fn append_list(&mut self, other: &ArrayList<T>) -> bool {
        return self.append_all(other.as_slice());
    }

    /// Insert every value in `xs` starting at `index`. Returns `Ok(false)`
    /// when `xs` is empty.
    pub fn insert_all_at(&mut self, index: usize, xs: &[T]) -> Result<bool> {
        if xs.is_empty() {
            return Ok(false);
        }

        self.range_check_for_add(index)?;
        self.grow_if_necessary_by(xs.len());
        self.contents.copy_within(index..self.size, index + xs.len());
        self.contents[index..index + xs.len()].copy_from_slice(xs);
        self.size += xs.len();
        self.touch();
        return Ok(true);
    }

    pub fn index_of(&self, x: T) -> Option<usize> {
        return crate::arrays::index_of_exactly(self.as_slice(), x);
    }

    pub fn last_index_of(&self, x: T) -> Option<usize> {
        return crate::arrays::last_index_of_exactly(self.as_slice(), x);
    }

    pub fn contains(&self, x: T) -> bool {
        return self.index_of(x).is_some();
    }

    pub fn contains_all(&self, xs: &[T]) -> bool {
        return xs.iter().all(|&x| self.contains(x));
    }

    pub fn contains_any(&self, xs: &[T]) -> bool {
        return xs.iter().any(|&x| self.contains(x));
    }

    /// Remove the first exact occurrence of `x`.
    pub fn remove_value(&mut self, x: T) -> bool {
        match self.index_of(x) {
            Some(index) => {
                self.unchecked_remove(index);
                return true;
            }
            None => return false,
        }
    }

    /// Remove every element exactly equal to something in `xs`.
    pub fn remove_all(&mut self, xs: &[T]) -> bool {
        return self.remove_if(|x| crate::arrays::contains_exactly(xs, x));
    }

    /// Keep only elements exactly equal to something in `xs`.
    pub fn retain_all(&mut self, xs: &[T]) -> bool {
        return self.remove_if(|x| !crate::arrays::contains_exactly(xs, x));
    }

    /// Remove every element matching `filter` in one compacting pass.
    pub fn remove_if<F: FnMut(T) -> bool>(&mut self, mut filter: F) -> bool {
        let mut kept = 0;
        for i in 0..self.size {
            let x = self.contents[i];
            if !filter(x) {
                self.contents[kept] = x;
                kept += 1;
            }
        }

        if kept == self.size {
            return false;
        }

        self.size = kept;
        self.touch();
        return true;
    }

    pub fn replace_all<F: FnMut(T) -> T>(&mut self, mut operator: F) {
        for x in &mut self.contents[..self.size] {
            *x = operator(*x);
        }
    }

    pub fn for_each<F: FnMut(T)>(&self, mut action: F) {
        for &x in self.as_slice() {
            action(x);
        }
    }

    /// Sort in place by the kind's total order.
    pub fn sort(&mut self) {
        self.contents[..self.size].sort_by(T::total_cmp);
    }

    /// Binary search a list that is already sorted. On an unsorted list the
    /// result is unspecified.
    pub fn binary_search(&self, x: T) -> std::result::Result<usize, usize> {
        return self.as_slice().binary_search_by(|probe| probe.total_cmp(&x));
    }

    /// A detached fail-fast cursor positioned before `index`.
    pub fn cursor(&self, index: usize) -> Result<Cursor<T>> {
        return Cursor::new(self, index);
    }

    /// A cursor that borrows this list mutably for its whole life.
    pub fn cursor_mut(&mut self, index: usize) -> Result<CursorMut<'_, T>> {
        return CursorMut::new(self, index);
    }

    pub(crate) fn unchecked_insert(&mut self, index: usize, x: T) {
        self.grow_if_necessary_by(1);
        self.contents.copy_within(index..self.size, index + 1);
        self.contents[index] = x;
        self.size += 1;
        self.touch();
    }

    pub(crate) fn unchecked_remove(&mut self, index: usize) -> T {
        let removed = self.contents[index];
        self.contents.copy_within(index + 1..self.size, index);
        self.size -= 1;
        self.touch();
        return removed;
    }

    pub(crate) fn unchecked_set(&mut self, index: usize, x: T) -> T {
        let previous = self.contents[index];
        self.contents[index] = x;
        return previous;
    }

    #[inline]
    fn touch(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn grow_if_necessary_by(&mut self, grow: usize) {
        let new_size = self.size + grow;
        if new_size <= self.contents.len() {
            return;
        }

        let new_capacity = new_size + (new_size >> 1);
        trace!(from = self.contents.len(), to = new_capacity, "growing list buffer");
        let mut copy = vec![T::default(); new_capacity].into_boxed_slice();
        copy[..self.size].copy_from_slice(&self.contents[..self.size]);
        self.contents = copy;
    }

    fn range_check(&self, index: usize) -> Result<()> {
        if index >= self.size {
            return Err(Error::IndexOutOfRange { index, size: self.size });
        }
        return Ok(());
    }

    fn range_check_for_add(&self, index: usize) -> Result<()> {
        if index > self.size {
            return Err(Error::IndexOutOfRange { index, size: self.size });
        }
        return Ok(());
    }
}

impl<T: Precise> ArrayList<T> {
    /// True if some element lies within `precision` of `x`. Distinct from
    /// [`ArrayList::contains`], which is exact.
    pub fn contains_within(&self, x: T, precision: T) -> bool {
        return crate::arrays::contains_within(self.as_slice(), x, precision);
    }

    /// Index of the first element within `precision` of `x`.
    pub fn index_within(&self, x: T, precision: T) -> Option<usize> {
        return self.as_slice().iter().position(|v| v.within(x, precision));
    }
}

impl<T: Primitive> PrimitiveList<T> for ArrayList<T> {
    fn len(&self) -> usize {
        return self.size;
    }

    fn get(&self, index: usize) -> Result<T> {
        return ArrayList::get(self, index);
    }

    fn set(&mut self, index: usize, x: T) -> Result<T> {
        return ArrayList::set(self, index, x);
    }

    fn insert_at(&mut self, index: usize, x: T) -> Result<()> {
        return ArrayList::insert_at(self, index, x);
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        return ArrayList::remove_at(self, index);
    }

    fn push(&mut self, x: T) -> Result<()> {
        ArrayList::push(self, x);
        return Ok(());
    }

    fn push_all(&mut self, xs: &[T]) -> Result<bool> {
        return Ok(self.append_all(xs));
    }

    fn clear(&mut self) -> Result<()> {
        ArrayList::clear(self);
        return Ok(());
    }

    fn to_vec(&self) -> Vec<T> {
        return ArrayList::to_vec(self);
    }
}

impl<T: Primitive> Default for ArrayList<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Primitive> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.as_slice(), other.as_slice());
        return a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.exact_eq(*y));
    }
}

impl<T: Primitive> Eq for ArrayList<T> {}

impl<T: Primitive> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.size);
        for x in self.as_slice() {
            x.to_bits().hash(state);
        }
    }
}

impl<T: Primitive> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice()).finish();
    }
}

impl<T: Primitive> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write_bracketed(f, self.iter());
    }
}

/// Render `[a, b, c]` using each element's `Display`.
pub(crate) fn write_bracketed<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, x) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", x)?;
    }
    return write!(f, "]");
}

/// Displays a slice the way lists print themselves.
pub(crate) struct Bracketed<'a, T>(pub(crate) &'a [T]);

impl<'a, T: fmt::Display> fmt::Display for Bracketed<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write_bracketed(f, self.0.iter());
    }
}

impl<T: Primitive> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        return ArrayList {
            contents: self.contents.clone(),
            size: self.size,
            generation: self.generation,
            id: next_id(),
        };
    }
}

impl<T: Primitive> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        return list;
    }
}

impl<T: Primitive> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            self.grow_if_necessary_by(lower);
        }
        for x in iter {
            self.push(x);
        }
    }
}

impl<T: Primitive> From<&[T]> for ArrayList<T> {
    fn from(values: &[T]) -> Self {
        return ArrayList::of(values);
    }
}

impl<T: Primitive, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(values: [T; N]) -> Self {
        return ArrayList::of(&values);
    }
}

impl<T: Primitive> From<Vec<T>> for ArrayList<T> {
    fn from(values: Vec<T>) -> Self {
        let size = values.len();
        return ArrayList {
            contents: values.into_boxed_slice(),
            size,
            generation: 0,
            id: next_id(),
        };
    }
}

impl<'a, T: Primitive> IntoIterator for &'a ArrayList<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> ArrayList<i64> {
        return ArrayList::of(&[1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_list() {
        let list: ArrayList<i32> = ArrayList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert_eq!(list.to_string(), "[]");
    }

    #[test]
    fn push_grows_by_half() {
        let mut list: ArrayList<i32> = ArrayList::with_capacity(2);
        list.push(1);
        list.push(2);
        assert_eq!(list.capacity(), 2);

        list.push(3);
        // new_size 3 -> 3 + 1
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn zero_capacity_still_grows() {
        let mut list: ArrayList<char> = ArrayList::with_capacity(0);
        list.push('a');
        assert_eq!(list.capacity(), 1);
        list.push('b');
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.to_vec(), vec!['a', 'b']);
    }

    #[test]
    fn get_and_set_check_bounds() {
        let mut list = five();
        assert_eq!(list.get(0), Ok(1));
        assert_eq!(list.get(4), Ok(5));
        assert_eq!(list.get(5), Err(Error::IndexOutOfRange { index: 5, size: 5 }));

        assert_eq!(list.set(2, 17), Ok(3));
        assert_eq!(list.get(2), Ok(17));
        assert_eq!(list.set(5, 17), Err(Error::IndexOutOfRange { index: 5, size: 5 }));

        let mut empty: ArrayList<i64> = ArrayList::new();
        assert!(empty.get(2).is_err());
        assert!(empty.set(2, 17).is_err());
    }

    #[test]
    fn insert_at_allows_end() {
        let mut list = five();
        list.insert_at(0, 0).unwrap();
        list.insert_at(6, 6).unwrap();
        list.insert_at(3, 17).unwrap();
        assert_eq!(list.to_vec(), vec![0, 1, 2, 17, 3, 4, 5, 6]);
        assert_eq!(list.insert_at(9, 9), Err(Error::IndexOutOfRange { index: 9, size: 8 }));
    }

    #[test]
    fn remove_at_shifts_left() {
        let mut list = five();
        assert_eq!(list.remove_at(1), Ok(2));
        assert_eq!(list.remove_at(3), Ok(5));
        assert_eq!(list.to_vec(), vec![1, 3, 4]);
        assert_eq!(list.remove_at(3), Err(Error::IndexOutOfRange { index: 3, size: 3 }));
    }

    #[test]
    fn append_all_empty_is_no_change() {
        let mut list = five();
        let generation = list.generation();
        assert!(!list.append_all(&[]));
        assert_eq!(list.generation(), generation);
        assert_eq!(list.insert_all_at(99, &[]), Ok(false));

        assert!(list.append_all(&[6, 7]));
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn insert_all_at_middle() {
        let mut list = five();
        assert_eq!(list.insert_all_at(2, &[17, 18, 19]), Ok(true));
        assert_eq!(list.to_vec(), vec![1, 2, 17, 18, 19, 3, 4, 5]);
        assert!(list.insert_all_at(20, &[1]).is_err());

        let other = ArrayList::of(&[9, 9]);
        assert!(list.append_list(&other));
        assert_eq!(list.len(), 10);
    }

    #[test]
    fn index_lookups_are_exact() {
        let list = ArrayList::of(&[1.0, 2.0, 1.0, -0.0]);
        assert_eq!(list.index_of(1.0), Some(0));
        assert_eq!(list.last_index_of(1.0), Some(2));
        assert_eq!(list.index_of(0.0), None);
        assert_eq!(list.index_of(-0.0), Some(3));
        assert!(!list.contains(1.0000001));
        assert!(list.contains_within(1.0000001, 0.001));
        assert_eq!(list.index_within(1.9, 0.2), Some(1));
    }

    #[test]
    fn bulk_removals() {
        let mut list = ArrayList::of(&[1, 2, 3, 4, 5, 1, 2, 3]);
        assert!(list.remove_value(2));
        assert_eq!(list.to_vec(), vec![1, 3, 4, 5, 1, 2, 3]);

        assert!(list.remove_all(&[1, 5]));
        assert_eq!(list.to_vec(), vec![3, 4, 2, 3]);
        assert!(!list.remove_all(&[17]));

        assert!(list.retain_all(&[3, 2]));
        assert_eq!(list.to_vec(), vec![3, 2, 3]);

        assert!(list.remove_if(|x| x == 3));
        assert_eq!(list.to_vec(), vec![2]);
        assert!(!list.remove_value(17));
    }

    #[test]
    fn contains_all_and_any() {
        let list = five();
        assert!(list.contains_all(&[1, 3, 5]));
        assert!(!list.contains_all(&[1, 17]));
        assert!(list.contains_any(&[17, 5]));
        assert!(!list.contains_any(&[17, 18]));
    }

    #[test]
    fn replace_all_and_for_each() {
        let mut list = five();
        list.replace_all(|x| x * 10);
        let mut seen = vec![];
        list.for_each(|x| seen.push(x));
        assert_eq!(seen, vec![10, 20, 30, 40, 50]);

        let empty: ArrayList<i64> = ArrayList::new();
        empty.for_each(|_| panic!("should not get called"));
    }

    #[test]
    fn sort_and_binary_search() {
        let mut list = ArrayList::of(&[5.0, -1.0, 3.5, 0.0]);
        list.sort();
        assert_eq!(list.to_vec(), vec![-1.0, 0.0, 3.5, 5.0]);
        assert_eq!(list.binary_search(3.5), Ok(2));
        assert_eq!(list.binary_search(1.0), Err(2));
    }

    #[test]
    fn structural_changes_bump_generation() {
        let mut list = five();
        let g0 = list.generation();
        list.set(0, 9).unwrap();
        list.sort();
        list.replace_all(|x| x + 1);
        assert_eq!(list.generation(), g0);

        list.push(6);
        assert!(list.generation() != g0);
        let g1 = list.generation();
        list.clear();
        assert!(list.generation() != g1);
    }

    #[test]
    fn equality_and_hash_follow_exact_contents() {
        use std::collections::hash_map::DefaultHasher;

        let mut a = ArrayList::of(&[1, 2, 3]);
        let b: ArrayList<i32> = vec![1, 2, 3].into();
        a.push(4);
        assert_ne!(a, b);
        a.remove_at(3).unwrap();
        assert_eq!(a, b);

        let hash = |list: &ArrayList<i32>| {
            let mut hasher = DefaultHasher::new();
            list.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(five().to_string(), "[1, 2, 3, 4, 5]");
        assert_eq!(format!("{:?}", ArrayList::of(&['x', 'y'])), "['x', 'y']");
        assert_eq!(ArrayList::of(&[1.5, -2.0]).to_string(), "[1.5, -2]");
    }

    #[test]
    fn collect_and_extend() {
        let list: ArrayList<i32> = (0..25).collect();
        assert_eq!(list.len(), 25);
        assert_eq!(list.get(24), Ok(24));

        let mut list = ArrayList::from([1, 2]);
        list.extend([3, 4]);
        let total: i32 = (&list).into_iter().sum();
        assert_eq!(total, 10);
    }

    #[test]
    fn array_round_trip() {
        let original = [3i64, 1, 4, 1, 5, 9, 2, 6];
        let list = ArrayList::of(&original);
        assert_eq!(list.to_vec(), original.to_vec());
        assert_eq!(ArrayList::of(&list.to_vec()), list);
    }
}
