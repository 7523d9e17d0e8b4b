//! One logical list over several array lists.
//!
//! Segments keep their own identity: every index is routed to the segment
//! that holds it, and changes land in that segment. An insertion exactly on
//! a boundary goes to the end of the earlier segment, so appending to an
//! all-empty chain fills the first segment.

use std::fmt;

use crate::error::Error;
use crate::error::Result;
use crate::list::array::write_bracketed;
use crate::list::array::ArrayList;
use crate::list::PrimitiveList;
use crate::primitive::Primitive;

pub struct ChainedList<'a, T: Primitive> {
    segments: Vec<&'a mut ArrayList<T>>,
}

impl<'a, T: Primitive> ChainedList<'a, T> {
    pub fn new(segments: Vec<&'a mut ArrayList<T>>) -> ChainedList<'a, T> {
        return ChainedList { segments };
    }

    pub fn segment_count(&self) -> usize {
        return self.segments.len();
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        return self.segments.iter().flat_map(|segment| segment.iter());
    }

    /// Insert every value at `index`. `Ok(false)` when `xs` is empty.
    pub fn insert_all_at(&mut self, index: usize, xs: &[T]) -> Result<bool> {
        if xs.is_empty() {
            return Ok(false);
        }

        let (segment, offset) = self.locate_insert(index)?;
        return self.segments[segment].insert_all_at(offset, xs);
    }

    pub fn remove_all(&mut self, xs: &[T]) -> bool {
        return self.remove_matching(|x| crate::arrays::contains_exactly(xs, x));
    }

    pub fn retain_all(&mut self, xs: &[T]) -> bool {
        return self.remove_matching(|x| !crate::arrays::contains_exactly(xs, x));
    }

    pub fn replace_all<F: FnMut(T) -> T>(&mut self, mut operator: F) {
        for segment in self.segments.iter_mut() {
            segment.replace_all(&mut operator);
        }
    }

    /// Sort the whole chain. Each segment keeps its length and receives the
    /// slice of the sorted order that falls in its range.
    pub fn sort(&mut self) {
        let mut all: Vec<T> = self.iter().collect();
        all.sort_by(T::total_cmp);

        let mut sorted = all.into_iter();
        for segment in self.segments.iter_mut() {
            segment.replace_all(|x| sorted.next().unwrap_or(x));
        }
    }

    fn remove_matching<F: FnMut(T) -> bool>(&mut self, mut filter: F) -> bool {
        let mut modified = false;
        for segment in self.segments.iter_mut() {
            modified |= segment.remove_if(&mut filter);
        }
        return modified;
    }

    /// Segment and offset of an existing element.
    fn locate(&self, index: usize) -> Result<(usize, usize)> {
        let mut start = 0;
        for (i, segment) in self.segments.iter().enumerate() {
            if index < start + segment.len() {
                return Ok((i, index - start));
            }
            start += segment.len();
        }
        return Err(Error::IndexOutOfRange { index, size: start });
    }

    /// Segment and offset an insertion at `index` should go to.
    fn locate_insert(&self, index: usize) -> Result<(usize, usize)> {
        if self.segments.is_empty() {
            return Err(Error::UnsupportedOperation("insert into chain without segments"));
        }

        let mut start = 0;
        for (i, segment) in self.segments.iter().enumerate() {
            if index <= start + segment.len() {
                return Ok((i, index - start));
            }
            start += segment.len();
        }
        return Err(Error::IndexOutOfRange { index, size: start });
    }
}

impl<'a, T: Primitive> PrimitiveList<T> for ChainedList<'a, T> {
    fn len(&self) -> usize {
        return self.segments.iter().map(|segment| segment.len()).sum();
    }

    fn get(&self, index: usize) -> Result<T> {
        let (segment, offset) = self.locate(index)?;
        return self.segments[segment].get(offset);
    }

    fn set(&mut self, index: usize, x: T) -> Result<T> {
        let (segment, offset) = self.locate(index)?;
        return self.segments[segment].set(offset, x);
    }

    fn insert_at(&mut self, index: usize, x: T) -> Result<()> {
        let (segment, offset) = self.locate_insert(index)?;
        return self.segments[segment].insert_at(offset, x);
    }

    fn remove_at(&mut self, index: usize) -> Result<T> {
        let (segment, offset) = self.locate(index)?;
        return self.segments[segment].remove_at(offset);
    }

    fn to_vec(&self) -> Vec<T> {
        return self.iter().collect();
    }

    fn remove_if(&mut self, filter: &mut dyn FnMut(T) -> bool) -> Result<bool> {
        return Ok(self.remove_matching(filter));
    }

    fn clear(&mut self) -> Result<()> {
        for segment in self.segments.iter_mut() {
            segment.clear();
        }
        return Ok(());
    }
}

impl<'a, T: Primitive> fmt::Display for ChainedList<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write_bracketed(f, self.iter());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        first: ArrayList<i32>,
        second: ArrayList<i32>,
        third: ArrayList<i32>,
    }

    impl Fixture {
        fn full() -> Fixture {
            return Fixture {
                first: ArrayList::of(&[1, 2, 3]),
                second: ArrayList::of(&[4, 5, 6]),
                third: ArrayList::of(&[7, 8, 9, 10]),
            };
        }

        fn empty() -> Fixture {
            return Fixture {
                first: ArrayList::new(),
                second: ArrayList::new(),
                third: ArrayList::new(),
            };
        }

        fn chain(&mut self) -> ChainedList<'_, i32> {
            return ChainedList::new(vec![&mut self.first, &mut self.second, &mut self.third]);
        }
    }

    #[test]
    fn size_and_contents() {
        let mut fixture = Fixture::full();
        let chained = fixture.chain();
        assert_eq!(chained.len(), 10);
        assert_eq!(chained.to_vec(), (1..=10).collect::<Vec<_>>());
        assert!(chained.contains(7));
        assert!(!chained.contains(17));
        assert_eq!(chained.to_string(), "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]");

        let mut empty = Fixture::empty();
        assert!(empty.chain().is_empty());
        let none: ChainedList<'_, i32> = ChainedList::new(vec![]);
        assert!(none.is_empty());
        assert_eq!(none.segment_count(), 0);
    }

    #[test]
    fn get_and_set_route_to_segment() {
        let mut fixture = Fixture::full();
        let mut chained = fixture.chain();
        assert_eq!(chained.get(0), Ok(1));
        assert_eq!(chained.get(4), Ok(5));
        assert_eq!(chained.get(9), Ok(10));
        assert_eq!(chained.get(10), Err(Error::IndexOutOfRange { index: 10, size: 10 }));

        assert_eq!(chained.set(4, 18), Ok(5));
        assert!(chained.set(10, 19).is_err());
        assert_eq!(fixture.second.to_vec(), vec![4, 18, 6]);
    }

    #[test]
    fn push_goes_to_last_segment() {
        let mut fixture = Fixture::full();
        fixture.chain().push(17).unwrap();
        assert_eq!(fixture.first.to_vec(), vec![1, 2, 3]);
        assert_eq!(fixture.third.to_vec(), vec![7, 8, 9, 10, 17]);
    }

    #[test]
    fn push_into_empty_segments_fills_first() {
        let mut fixture = Fixture::empty();
        fixture.chain().push(17).unwrap();
        assert_eq!(fixture.first.to_vec(), vec![17]);
        assert!(fixture.second.is_empty());
        assert!(fixture.third.is_empty());

        let mut none: ChainedList<'_, i32> = ChainedList::new(vec![]);
        assert!(matches!(none.push(17), Err(Error::UnsupportedOperation(_))));
    }

    #[test]
    fn insert_on_boundary_extends_earlier_segment() {
        let mut fixture = Fixture::full();
        let mut chained = fixture.chain();
        assert_eq!(chained.insert_all_at(3, &[17, 18]), Ok(true));
        assert_eq!(chained.insert_all_at(6, &[19, 20]), Ok(true));
        assert!(chained.insert_all_at(15, &[21, 22]).is_err());
        assert_eq!(chained.insert_all_at(15, &[]), Ok(false));
        chained.insert_at(2, 0).unwrap();

        assert_eq!(fixture.first.to_vec(), vec![1, 2, 0, 3, 17, 18]);
        assert_eq!(fixture.second.to_vec(), vec![4, 19, 20, 5, 6]);
        assert_eq!(fixture.third.to_vec(), vec![7, 8, 9, 10]);
    }

    #[test]
    fn removals_span_segments() {
        let mut fixture = Fixture::full();
        let mut chained = fixture.chain();
        assert_eq!(chained.remove_at(4), Ok(5));
        assert!(chained.remove_at(17).is_err());
        assert_eq!(chained.remove_value(17), Ok(false));
        assert!(chained.remove_all(&[3, 4]));
        assert!(!chained.remove_all(&[]));
        assert_eq!(fixture.first.to_vec(), vec![1, 2]);
        assert_eq!(fixture.second.to_vec(), vec![6]);
    }

    #[test]
    fn retain_all_can_empty_a_segment() {
        let mut fixture = Fixture::full();
        assert!(fixture.chain().retain_all(&[2, 3, 4]));
        assert_eq!(fixture.first.to_vec(), vec![2, 3]);
        assert_eq!(fixture.second.to_vec(), vec![4]);
        assert!(fixture.third.is_empty());
    }

    #[test]
    fn sort_keeps_segment_lengths() {
        let mut fixture = Fixture::full();
        let mut chained = fixture.chain();
        chained.replace_all(|x| 11 - x);
        chained.sort();
        assert_eq!(fixture.first.to_vec(), vec![1, 2, 3]);
        assert_eq!(fixture.second.to_vec(), vec![4, 5, 6]);
        assert_eq!(fixture.third.to_vec(), vec![7, 8, 9, 10]);
    }

    #[test]
    fn clear_empties_every_segment() {
        let mut fixture = Fixture::full();
        fixture.chain().clear().unwrap();
        assert!(fixture.first.is_empty());
        assert!(fixture.second.is_empty());
        assert!(fixture.third.is_empty());
    }
}
