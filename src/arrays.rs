//! Small helpers over primitive slices.

use crate::primitive::Precise;
use crate::primitive::Primitive;

/// True if `values` holds `x` exactly.
pub fn contains_exactly<T: Primitive>(values: &[T], x: T) -> bool {
    return index_of_exactly(values, x).is_some();
}

/// True if `values` holds something within `precision` of `x`.
pub fn contains_within<T: Precise>(values: &[T], x: T, precision: T) -> bool {
    return values.iter().any(|v| v.within(x, precision));
}

/// Index of the first exact occurrence of `x`.
pub fn index_of_exactly<T: Primitive>(values: &[T], x: T) -> Option<usize> {
    return values.iter().position(|v| v.exact_eq(x));
}

/// Index of the last exact occurrence of `x`.
pub fn last_index_of_exactly<T: Primitive>(values: &[T], x: T) -> Option<usize> {
    return values.iter().rposition(|v| v.exact_eq(x));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_exactly_versus_within() {
        let values = [1.0, 2.0, 3.0];
        assert!(contains_exactly(&values, 2.0));
        assert!(!contains_exactly(&values, 2.05));
        assert!(contains_within(&values, 2.05, 0.1));
        assert!(!contains_within(&values, 2.5, 0.1));
        assert!(!contains_exactly(&[] as &[f64], 1.0));
    }

    #[test]
    fn index_scans_from_both_ends() {
        let values = ['a', 'b', 'a', 'c'];
        assert_eq!(index_of_exactly(&values, 'a'), Some(0));
        assert_eq!(last_index_of_exactly(&values, 'a'), Some(2));
        assert_eq!(index_of_exactly(&values, 'z'), None);
    }
}
