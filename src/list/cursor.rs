//! Fail-fast bidirectional cursors over an [`ArrayList`].
//!
//! A [`Cursor`] sits between two elements. It remembers the list generation
//! it last saw; if the list changes structurally through any other handle,
//! the next stepping or mutating call fails with `ConcurrentModification`.
//!
//! The cursor is detached: it does not borrow the list, so any number of
//! cursors can coexist with each other and with direct list access. Each
//! call takes the list explicitly. [`CursorMut`] bundles one cursor with an
//! exclusive borrow for the common case of a single editing pass.
//!
//! ```
//! use primseq::list::ArrayList;
//!
//! let mut list = ArrayList::of(&[1i64, 2, 3]);
//! let mut cursor = list.cursor_mut(0).unwrap();
//! while cursor.has_next() {
//!     if cursor.next().unwrap() == 2 {
//!         cursor.remove().unwrap();
//!     }
//! }
//! assert_eq!(list.to_vec(), vec![1, 3]);
//! ```

use std::marker::PhantomData;

use tracing::debug;

use crate::error::Error;
use crate::error::Result;
use crate::list::array::ArrayList;
use crate::primitive::Primitive;

/// What the cursor did last, which decides whether `remove`/`set` are legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Nothing has happened yet.
    Initial,
    /// The last call was `next` or `previous`.
    Stepped,
    /// The last call was `add` or `remove`.
    Modified,
}

/// A detached position in an [`ArrayList`].
#[derive(Clone, Debug)]
pub struct Cursor<T: Primitive> {
    next_index: usize,
    /// Element returned by the last step, or the slot touched by `add`.
    current: Option<usize>,
    state: State,
    generation: u64,
    list_id: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Primitive> Cursor<T> {
    /// Place a cursor before the element at `index`. `index == len` places
    /// it after the last element.
    pub fn new(list: &ArrayList<T>, index: usize) -> Result<Cursor<T>> {
        if index > list.len() {
            return Err(Error::IndexOutOfRange { index, size: list.len() });
        }

        return Ok(Cursor {
            next_index: index,
            current: index.checked_sub(1),
            state: State::Initial,
            generation: list.generation(),
            list_id: list.id(),
            _marker: PhantomData,
        });
    }

    #[inline]
    pub fn has_next(&self, list: &ArrayList<T>) -> bool {
        return self.next_index < list.len();
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        return self.next_index > 0;
    }

    /// Index of the element `next` would return.
    #[inline]
    pub fn next_index(&self) -> usize {
        return self.next_index;
    }

    /// Index of the element `previous` would return, `None` at the front.
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        return self.next_index.checked_sub(1);
    }

    /// True if the list has changed behind this cursor's back, or is not the
    /// list the cursor was opened on.
    pub fn is_stale(&self, list: &ArrayList<T>) -> bool {
        return self.list_id != list.id() || self.generation != list.generation();
    }

    pub fn next(&mut self, list: &ArrayList<T>) -> Result<T> {
        self.check(list)?;
        if self.next_index >= list.len() {
            return Err(Error::NoSuchElement);
        }

        let index = self.next_index;
        self.next_index += 1;
        self.current = Some(index);
        self.state = State::Stepped;
        return list.get(index);
    }

    pub fn previous(&mut self, list: &ArrayList<T>) -> Result<T> {
        self.check(list)?;
        if self.next_index == 0 {
            return Err(Error::NoSuchElement);
        }

        self.next_index -= 1;
        self.current = Some(self.next_index);
        self.state = State::Stepped;
        return list.get(self.next_index);
    }

    /// Remove the element last returned by `next` or `previous`.
    pub fn remove(&mut self, list: &mut ArrayList<T>) -> Result<T> {
        self.check(list)?;
        let index = self.stepped_index()?;

        let removed = list.unchecked_remove(index);
        self.next_index = index;
        self.current = index.checked_sub(1);
        self.state = State::Modified;
        self.generation = list.generation();
        return Ok(removed);
    }

    /// Overwrite the element last returned by `next` or `previous`,
    /// returning the value it replaced.
    pub fn set(&mut self, list: &mut ArrayList<T>, x: T) -> Result<T> {
        self.check(list)?;
        let index = self.stepped_index()?;
        return Ok(list.unchecked_set(index, x));
    }

    /// Insert before the cursor and step over the new element.
    pub fn add(&mut self, list: &mut ArrayList<T>, x: T) -> Result<()> {
        self.check(list)?;

        list.unchecked_insert(self.next_index, x);
        self.current = Some(self.next_index);
        self.next_index += 1;
        self.state = State::Modified;
        self.generation = list.generation();
        return Ok(());
    }

    fn stepped_index(&self) -> Result<usize> {
        match (self.state, self.current) {
            (State::Stepped, Some(index)) => return Ok(index),
            (State::Modified, _) => return Err(Error::IllegalState("add() or remove() called")),
            _ => return Err(Error::IllegalState("next() or previous() not called")),
        }
    }

    fn check(&self, list: &ArrayList<T>) -> Result<()> {
        if self.list_id != list.id() {
            debug!(expected = self.list_id, found = list.id(), "cursor handed a different list");
            return Err(Error::IllegalState("cursor belongs to a different list"));
        }
        let found = list.generation();
        if self.generation != found {
            debug!(expected = self.generation, found, "stale cursor");
            return Err(Error::ConcurrentModification { expected: self.generation, found });
        }
        return Ok(());
    }
}

/// A cursor holding the only borrow of its list.
///
/// Nothing else can touch the list while this exists, so it can never go
/// stale; the generation check still runs and always passes.
pub struct CursorMut<'a, T: Primitive> {
    list: &'a mut ArrayList<T>,
    cursor: Cursor<T>,
}

impl<'a, T: Primitive> CursorMut<'a, T> {
    pub fn new(list: &'a mut ArrayList<T>, index: usize) -> Result<CursorMut<'a, T>> {
        let cursor = Cursor::new(list, index)?;
        return Ok(CursorMut { list, cursor });
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        return self.cursor.has_next(self.list);
    }

    #[inline]
    pub fn has_previous(&self) -> bool {
        return self.cursor.has_previous();
    }

    #[inline]
    pub fn next_index(&self) -> usize {
        return self.cursor.next_index();
    }

    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        return self.cursor.previous_index();
    }

    pub fn next(&mut self) -> Result<T> {
        return self.cursor.next(self.list);
    }

    pub fn previous(&mut self) -> Result<T> {
        return self.cursor.previous(self.list);
    }

    pub fn remove(&mut self) -> Result<T> {
        return self.cursor.remove(self.list);
    }

    pub fn set(&mut self, x: T) -> Result<T> {
        return self.cursor.set(self.list, x);
    }

    pub fn add(&mut self, x: T) -> Result<()> {
        return self.cursor.add(self.list, x);
    }

    /// Remove everything from the cursor to the end, returning how many
    /// elements went.
    pub fn remove_all(&mut self) -> Result<usize> {
        let mut removed = 0;
        while self.has_next() {
            self.next()?;
            self.remove()?;
            removed += 1;
        }
        return Ok(removed);
    }

    /// Read-only access to the list while the cursor is alive.
    pub fn list(&self) -> &ArrayList<T> {
        return self.list;
    }

    /// Give up the borrow and keep the position as a detached cursor.
    pub fn detach(self) -> Cursor<T> {
        return self.cursor;
    }
}
