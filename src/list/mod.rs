//! Index-addressed lists of primitives.
//!
//! [`ArrayList`] is the owning growable list. [`ChainedList`] and
//! [`FixedList`] are views that present other storage through the same
//! [`PrimitiveList`] contract.

pub mod array;
pub mod chained;
pub mod cursor;
pub mod fixed;

pub use array::ArrayList;
pub use array::DEFAULT_CAPACITY;
pub use chained::ChainedList;
pub use cursor::Cursor;
pub use cursor::CursorMut;
pub use fixed::FixedList;

use crate::error::Result;
use crate::list::array::Bracketed;
use crate::primitive::Primitive;

pub type IntList = ArrayList<i32>;
pub type LongList = ArrayList<i64>;
pub type DoubleList = ArrayList<f64>;
pub type CharList = ArrayList<char>;

/// The shared contract of owning lists and list views.
///
/// Only the five index primitives are required. Everything else is built on
/// them and may be overridden when the implementor can do better. Views that
/// cannot change size report `UnsupportedOperation` from `insert_at` and
/// `remove_at`, and the provided methods pass that through.
pub trait PrimitiveList<T: Primitive> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Result<T>;

    /// Overwrite the element at `index`, returning the previous value.
    fn set(&mut self, index: usize, x: T) -> Result<T>;

    fn insert_at(&mut self, index: usize, x: T) -> Result<()>;

    fn remove_at(&mut self, index: usize) -> Result<T>;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    fn push(&mut self, x: T) -> Result<()> {
        return self.insert_at(self.len(), x);
    }

    /// Append every value. `Ok(false)` when `xs` is empty.
    fn push_all(&mut self, xs: &[T]) -> Result<bool> {
        for &x in xs {
            self.push(x)?;
        }
        return Ok(!xs.is_empty());
    }

    fn index_of(&self, x: T) -> Option<usize> {
        return (0..self.len()).find(|&i| self.get(i).is_ok_and(|v| v.exact_eq(x)));
    }

    fn last_index_of(&self, x: T) -> Option<usize> {
        return (0..self.len()).rev().find(|&i| self.get(i).is_ok_and(|v| v.exact_eq(x)));
    }

    fn contains(&self, x: T) -> bool {
        return self.index_of(x).is_some();
    }

    fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            if let Ok(x) = self.get(i) {
                out.push(x);
            }
        }
        return out;
    }

    /// Remove the first exact occurrence of `x`.
    fn remove_value(&mut self, x: T) -> Result<bool> {
        match self.index_of(x) {
            Some(index) => {
                self.remove_at(index)?;
                return Ok(true);
            }
            None => return Ok(false),
        }
    }

    fn remove_if(&mut self, filter: &mut dyn FnMut(T) -> bool) -> Result<bool> {
        let mut modified = false;
        let mut i = self.len();
        while i > 0 {
            i -= 1;
            if filter(self.get(i)?) {
                self.remove_at(i)?;
                modified = true;
            }
        }
        return Ok(modified);
    }

    fn clear(&mut self) -> Result<()> {
        while !self.is_empty() {
            self.remove_at(self.len() - 1)?;
        }
        return Ok(());
    }

    /// Render as `[a, b, c]`.
    fn render(&self) -> String {
        return Bracketed(&self.to_vec()).to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provided_methods_through_array_list() {
        let mut list: LongList = ArrayList::of(&[1, 2, 3, 2]);
        let view: &mut dyn PrimitiveList<i64> = &mut list;

        assert_eq!(view.last_index_of(2), Some(3));
        assert_eq!(view.remove_value(2), Ok(true));
        assert_eq!(view.remove_if(&mut |x| x > 2), Ok(true));
        assert_eq!(view.render(), "[1, 2]");
        assert_eq!(view.push_all(&[]), Ok(false));
        view.clear().unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn render_matches_display() {
        let empty = CharList::new();
        assert_eq!(PrimitiveList::render(&empty), "[]");

        let mut a = DoubleList::of(&[0.5, 1.0]);
        let mut b = DoubleList::of(&[-2.0]);
        let chained = ChainedList::new(vec![&mut a, &mut b]);
        assert_eq!(chained.render(), "[0.5, 1, -2]");
        assert_eq!(chained.render(), chained.to_string());
    }
}
