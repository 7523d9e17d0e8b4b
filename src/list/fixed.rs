//! Fixed-size list view over a borrowed slice.
//!
//! Elements can be read and overwritten in place; nothing can change the
//! length.

use std::fmt;

use crate::error::Error;
use crate::error::Result;
use crate::list::array::write_bracketed;
use crate::list::PrimitiveList;
use crate::primitive::Primitive;

pub struct FixedList<'a, T: Primitive> {
    values: &'a mut [T],
}

impl<'a, T: Primitive> FixedList<'a, T> {
    pub fn new(values: &'a mut [T]) -> FixedList<'a, T> {
        return FixedList { values };
    }

    pub fn as_slice(&self) -> &[T] {
        return self.values;
    }

    pub fn sort(&mut self) {
        self.values.sort_by(T::total_cmp);
    }

    pub fn reverse(&mut self) {
        self.values.reverse();
    }

    pub fn replace_all<F: FnMut(T) -> T>(&mut self, mut operator: F) {
        for x in self.values.iter_mut() {
            *x = operator(*x);
        }
    }

    fn range_check(&self, index: usize) -> Result<()> {
        if index >= self.values.len() {
            return Err(Error::IndexOutOfRange { index, size: self.values.len() });
        }
        return Ok(());
    }
}

impl<'a, T: Primitive> PrimitiveList<T> for FixedList<'a, T> {
    fn len(&self) -> usize {
        return self.values.len();
    }

    fn get(&self, index: usize) -> Result<T> {
        self.range_check(index)?;
        return Ok(self.values[index]);
    }

    fn set(&mut self, index: usize, x: T) -> Result<T> {
        self.range_check(index)?;
        let previous = self.values[index];
        self.values[index] = x;
        return Ok(previous);
    }

    fn insert_at(&mut self, _index: usize, _x: T) -> Result<()> {
        return Err(Error::UnsupportedOperation("insert_at on fixed-size list"));
    }

    fn remove_at(&mut self, _index: usize) -> Result<T> {
        return Err(Error::UnsupportedOperation("remove_at on fixed-size list"));
    }

    fn to_vec(&self) -> Vec<T> {
        return self.values.to_vec();
    }

    fn clear(&mut self) -> Result<()> {
        if self.values.is_empty() {
            return Ok(());
        }
        return Err(Error::UnsupportedOperation("clear on fixed-size list"));
    }
}

impl<'a, T: Primitive> fmt::Display for FixedList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write_bracketed(f, self.values.iter());
    }
}
