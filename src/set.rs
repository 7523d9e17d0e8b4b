//! Hash set of primitives keyed by exact identity.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::list::array::write_bracketed;
use crate::list::ArrayList;
use crate::primitive::Precise;
use crate::primitive::Primitive;

pub type IntSet = PrimitiveSet<i32>;
pub type LongSet = PrimitiveSet<i64>;
pub type DoubleSet = PrimitiveSet<f64>;
pub type CharSet = PrimitiveSet<char>;

/// An unordered set of primitives.
///
/// Membership is exact: `0.0` and `-0.0` are distinct members, and a NaN is
/// found again by the identical NaN. Tolerance checks go through
/// [`PrimitiveSet::add_within`] and [`PrimitiveSet::contains_within`], which
/// scan every member.
#[derive(Clone, Default)]
pub struct PrimitiveSet<T: Primitive> {
    members: FxHashMap<T::Bits, T>,
}

impl<T: Primitive> PrimitiveSet<T> {
    pub fn new() -> PrimitiveSet<T> {
        return PrimitiveSet { members: FxHashMap::default() };
    }

    pub fn of(values: &[T]) -> PrimitiveSet<T> {
        return values.iter().copied().collect();
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.members.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.members.is_empty();
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Add `x`, returning `false` if it was already a member.
    pub fn add(&mut self, x: T) -> bool {
        return self.members.insert(x.to_bits(), x).is_none();
    }

    pub fn add_all(&mut self, xs: &[T]) -> bool {
        let mut modified = false;
        for &x in xs {
            modified |= self.add(x);
        }
        return modified;
    }

    pub fn contains(&self, x: T) -> bool {
        return self.members.contains_key(&x.to_bits());
    }

    pub fn contains_all(&self, xs: &[T]) -> bool {
        return xs.iter().all(|&x| self.contains(x));
    }

    pub fn remove(&mut self, x: T) -> bool {
        return self.members.remove(&x.to_bits()).is_some();
    }

    pub fn remove_all(&mut self, xs: &[T]) -> bool {
        let mut modified = false;
        for &x in xs {
            modified |= self.remove(x);
        }
        return modified;
    }

    pub fn retain_all(&mut self, xs: &[T]) -> bool {
        return self.remove_if(|x| !crate::arrays::contains_exactly(xs, x));
    }

    pub fn remove_if<F: FnMut(T) -> bool>(&mut self, mut filter: F) -> bool {
        let before = self.members.len();
        self.members.retain(|_, x| !filter(*x));
        return self.members.len() != before;
    }

    /// Members in no particular order.
    pub fn iter(&self) -> std::iter::Copied<std::collections::hash_map::Values<'_, T::Bits, T>> {
        return self.members.values().copied();
    }

    /// Members in ascending total order.
    pub fn to_list(&self) -> ArrayList<T> {
        let mut list: ArrayList<T> = self.iter().collect();
        list.sort();
        return list;
    }
}

impl<T: Precise> PrimitiveSet<T> {
    /// Add `x` unless some member already lies within `precision` of it.
    pub fn add_within(&mut self, x: T, precision: T) -> bool {
        if self.contains_within(x, precision) {
            return false;
        }
        return self.add(x);
    }

    pub fn contains_within(&self, x: T, precision: T) -> bool {
        return self.members.values().any(|v| v.within(x, precision));
    }
}

impl<T: Primitive> PartialEq for PrimitiveSet<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.len() == other.len() && self.members.keys().all(|k| other.members.contains_key(k));
    }
}

impl<T: Primitive> Eq for PrimitiveSet<T> {}

impl<T: Primitive> FromIterator<T> for PrimitiveSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = PrimitiveSet::new();
        set.extend(iter);
        return set;
    }
}

impl<T: Primitive> Extend<T> for PrimitiveSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}

impl<T: Primitive> fmt::Display for PrimitiveSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write_bracketed(f, self.to_list().iter());
    }
}

impl<T: Primitive> fmt::Debug for PrimitiveSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.to_list().iter()).finish();
    }
}
