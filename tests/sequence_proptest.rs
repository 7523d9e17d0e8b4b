//! Property-based tests for sequence pipelines.

use primseq::list::ArrayList;
use primseq::sequence::Batch;
use primseq::sequence::Sequence;
use primseq::sequence::of;
use primseq::sequence::once;
use proptest::prelude::*;

fn unbatched(batches: Vec<Batch<i32>>) -> Vec<i32> {
    return batches.iter().flat_map(|batch| batch.to_vec()).collect();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// distinct(distinct(x)) == distinct(x)
    #[test]
    fn distinct_is_idempotent(values in prop::collection::vec(-10i32..10, 0..64)) {
        let deduped = of(&values).distinct().to_vec();
        let twice = of(&values).distinct().distinct().to_vec();
        prop_assert_eq!(&deduped, &twice);

        let mut expected = values.clone();
        expected.sort();
        expected.dedup();
        let mut sorted = deduped.clone();
        sorted.sort();
        prop_assert_eq!(sorted, expected);
    }

    /// The k-th window is the slice starting at k * step, and windows exist
    /// exactly for start offsets inside the source
    #[test]
    fn windows_are_strided_slices(
        values in prop::collection::vec(any::<i32>(), 0..40),
        size in 1usize..6,
        step in 1usize..6,
    ) {
        let windows = of(&values).window(size, step).to_vec();
        let expected_count = values.len().div_ceil(step);
        prop_assert_eq!(windows.len(), expected_count);

        for (k, window) in windows.iter().enumerate() {
            let start = k * step;
            let end = (start + size).min(values.len());
            prop_assert_eq!(window.as_slice(), &values[start..end]);
        }
    }

    /// Batches partition the source in order
    #[test]
    fn batches_concatenate_to_source(
        values in prop::collection::vec(any::<i32>(), 0..40),
        size in 1usize..10,
    ) {
        let batches = of(&values).batch(size).to_vec();
        prop_assert!(batches.iter().all(|batch| !batch.is_empty() && batch.len() <= size));
        prop_assert_eq!(unbatched(batches), values);
    }

    /// batch_by never loses or reorders elements, and cuts exactly where the
    /// boundary predicate holds
    #[test]
    fn batch_by_cuts_at_boundaries(values in prop::collection::vec(-5i32..5, 0..40)) {
        let batches = of(&values).batch_by(|a, b| b < a).to_vec();
        for batch in &batches {
            let slice = batch.as_slice();
            prop_assert!(slice.windows(2).all(|pair| pair[1] >= pair[0]));
        }
        for pair in batches.windows(2) {
            let last = *pair[0].as_slice().last().unwrap();
            let first = pair[1].as_slice()[0];
            prop_assert!(first < last);
        }
        prop_assert_eq!(unbatched(batches), values);
    }

    /// split drops separators and nothing else
    #[test]
    fn split_removes_only_separators(values in prop::collection::vec(0i32..4, 0..40)) {
        let batches = of(&values).split(0).to_vec();
        prop_assert!(batches.iter().all(|batch| !batch.is_empty()));
        let expected: Vec<i32> = values.iter().copied().filter(|&x| x != 0).collect();
        prop_assert_eq!(unbatched(batches), expected);
    }

    /// A restartable pipeline gives the same answer every traversal, a
    /// one-shot one only the first time
    #[test]
    fn restartable_versus_one_shot(values in prop::collection::vec(any::<i64>(), 1..32)) {
        let list = ArrayList::of(&values);
        let pipeline = (&list).filter(|x| x % 2 == 0).skip_tail(1);
        prop_assert_eq!(pipeline.to_vec(), pipeline.to_vec());

        let single = once(values.clone());
        prop_assert_eq!(single.to_vec(), values);
        prop_assert!(single.is_empty());
    }

    /// sorted() agrees with a sort of the collected values, and reversed()
    /// twice is the identity
    #[test]
    fn materializing_stages(values in prop::collection::vec(any::<f64>(), 0..32)) {
        let mut expected = values.clone();
        expected.sort_by(f64::total_cmp);
        let sorted: Vec<u64> = of(&values).sorted().map(f64::to_bits).to_vec();
        let expected: Vec<u64> = expected.into_iter().map(f64::to_bits).collect();
        prop_assert_eq!(sorted, expected);

        let back: Vec<u64> = of(&values).reversed().reversed().map(f64::to_bits).to_vec();
        prop_assert_eq!(back, values.iter().map(|x| x.to_bits()).collect::<Vec<_>>());
    }
}
