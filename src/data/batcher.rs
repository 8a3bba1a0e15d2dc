// ============================================================
// Layer 4 - Length-Sorted Batch Iterator
// ============================================================
// Groups (source, target) examples into mini-batches for the
// training loop.
//
// How batching works here:
//   1. Build the index list [0, 1, ..., n-1] once
//   2. Optionally shuffle it (Fisher-Yates via SliceRandom)
//      with the random source the caller passes in
//   3. Cut it into contiguous chunks of batch_size
//      (the last chunk may be shorter)
//   4. For each chunk, gather its examples and sort them by
//      source length, longest first
//
// The sort is stable, so equal-length examples keep their
// shuffled order. Packed-sequence encoders expect the longest
// sentence first.
//
// Batches are produced lazily; the permutation is fixed when
// the iterator is created and never reshuffled per batch.
//
// Reference: Rust Book §13 (Iterators)
//            rand crate documentation

use rand::{seq::SliceRandom, Rng};

use crate::data::padder::pad_sents;
use crate::domain::example::{Example, Sentence};
use crate::error::{Error, Result};

// ─── Batch ────────────────────────────────────────────────────────────────────
/// One mini-batch: source and target sentences aligned by position,
/// ordered by descending source length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<T> {
    pub sources: Vec<Sentence<T>>,
    pub targets: Vec<Sentence<T>>,
}

impl<T> Batch<T> {
    /// Number of examples in the batch
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source sentence lengths in batch order (non-increasing when built by `batch_iter`)
    pub fn source_lengths(&self) -> Vec<usize> {
        self.sources.iter().map(Vec::len).collect()
    }

    pub fn max_source_len(&self) -> usize {
        self.sources.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn max_target_len(&self) -> usize {
        self.targets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterate the batch as (source, target) pairs
    pub fn pairs(&self) -> impl Iterator<Item = (&Sentence<T>, &Sentence<T>)> {
        self.sources.iter().zip(&self.targets)
    }
}

impl<T: Clone> Batch<T> {
    /// Pad both sides independently, each to its own longest sentence.
    pub fn padded(&self, src_pad: T, tgt_pad: T) -> (Vec<Vec<T>>, Vec<Vec<T>>) {
        (pad_sents(&self.sources, src_pad), pad_sents(&self.targets, tgt_pad))
    }
}

// ─── BatchIter ────────────────────────────────────────────────────────────────
/// Lazy iterator over the batches of a dataset.
/// Created by [`batch_iter`].
#[derive(Debug, Clone)]
pub struct BatchIter<'a, T> {
    data:        &'a [Example<T>],
    indices:     Vec<usize>,
    batch_size:  usize,
    next_batch:  usize,
    batch_count: usize,
}

impl<'a, T> BatchIter<'a, T> {
    /// Total number of batches this iterator produces, ceil(n / batch_size)
    pub fn batch_count(&self) -> usize {
        self.batch_count
    }
}

impl<'a, T: Clone> Iterator for BatchIter<'a, T> {
    type Item = Batch<T>;

    fn next(&mut self) -> Option<Batch<T>> {
        if self.next_batch >= self.batch_count {
            return None;
        }

        let start = self.next_batch * self.batch_size;
        let end   = (start + self.batch_size).min(self.indices.len());
        self.next_batch += 1;

        let data = self.data;
        let mut examples: Vec<&Example<T>> =
            self.indices[start..end].iter().map(|&idx| &data[idx]).collect();

        // sort_by is stable: ties keep their post-shuffle order
        examples.sort_by(|a, b| b.source_len().cmp(&a.source_len()));

        Some(Batch {
            sources: examples.iter().map(|e| e.source.clone()).collect(),
            targets: examples.iter().map(|e| e.target.clone()).collect(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.batch_count - self.next_batch;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Clone> ExactSizeIterator for BatchIter<'a, T> {}

/// Yield batches of `batch_size` examples, each sorted by descending
/// source length.
///
/// # Arguments
/// * `data`       - All examples; borrowed, never reordered
/// * `batch_size` - Examples per batch, must be at least 1
/// * `shuffle`    - Whether to randomly permute the examples first
/// * `rng`        - Random source used only when `shuffle` is true
///
/// # Errors
/// `Error::InvalidArgument` if `batch_size` is zero.
///
/// # Example
/// ```
/// use nmt_prep::{batch_iter, Example};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let data = vec![Example::new(vec![1, 2], vec![3]), Example::new(vec![4], vec![5, 6])];
/// let mut rng = StdRng::seed_from_u64(7);
/// let batches: Vec<_> = batch_iter(&data, 2, true, &mut rng).unwrap().collect();
/// assert_eq!(batches.len(), 1);
/// assert_eq!(batches[0].source_lengths(), vec![2, 1]);
/// ```
pub fn batch_iter<'a, T, R>(
    data:       &'a [Example<T>],
    batch_size: usize,
    shuffle:    bool,
    rng:        &mut R,
) -> Result<BatchIter<'a, T>>
where
    R: Rng + ?Sized,
{
    if batch_size == 0 {
        return Err(Error::invalid("batch_size must be at least 1"));
    }

    let batch_count = data.len().div_ceil(batch_size);
    let mut indices: Vec<usize> = (0..data.len()).collect();

    if shuffle {
        indices.shuffle(rng);
    }

    tracing::debug!(
        "Batching {} examples into {} batches of up to {} (shuffle={})",
        data.len(),
        batch_count,
        batch_size,
        shuffle,
    );

    Ok(BatchIter {
        data,
        indices,
        batch_size,
        next_batch: 0,
        batch_count,
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    /// Examples whose source lengths cycle so that batches need sorting.
    /// The target holds the example id so every pair is distinct.
    fn dataset(n: u32) -> Vec<Example<u32>> {
        (0..n)
            .map(|i| Example::new(vec![i; (i % 7) as usize], vec![i]))
            .collect()
    }

    fn sorted_pairs(examples: Vec<(Vec<u32>, Vec<u32>)>) -> Vec<(Vec<u32>, Vec<u32>)> {
        let mut examples = examples;
        examples.sort();
        examples
    }

    fn flatten(batches: &[Batch<u32>]) -> Vec<(Vec<u32>, Vec<u32>)> {
        batches
            .iter()
            .flat_map(|b| b.pairs().map(|(s, t)| (s.clone(), t.clone())))
            .collect()
    }

    #[test]
    fn test_batch_count_is_ceiling() {
        let mut rng = StdRng::seed_from_u64(0);
        for (n, size, expected) in [(10, 3, 4), (9, 3, 3), (1, 5, 1), (5, 1, 5)] {
            let data = dataset(n);
            let iter = batch_iter(&data, size, true, &mut rng).unwrap();
            assert_eq!(iter.len(), expected);
            assert_eq!(iter.count(), expected);
        }
    }

    #[test]
    fn test_every_example_appears_exactly_once() {
        let data     = dataset(53);
        let expected = sorted_pairs(data.iter().map(|e| (e.source.clone(), e.target.clone())).collect());

        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            for shuffle in [false, true] {
                let batches: Vec<_> = batch_iter(&data, 8, shuffle, &mut rng).unwrap().collect();
                assert_eq!(sorted_pairs(flatten(&batches)), expected);
            }
        }
    }

    #[test]
    fn test_batches_sorted_by_descending_source_length() {
        let data    = dataset(40);
        let mut rng = StdRng::seed_from_u64(42);
        for batch in batch_iter(&data, 6, true, &mut rng).unwrap() {
            let lens = batch.source_lengths();
            assert!(lens.windows(2).all(|w| w[0] >= w[1]), "not sorted: {lens:?}");
            assert_eq!(batch.max_source_len(), lens[0]);
        }
    }

    #[test]
    fn test_sources_and_targets_stay_aligned() {
        let data    = dataset(30);
        let mut rng = StdRng::seed_from_u64(3);
        for batch in batch_iter(&data, 4, true, &mut rng).unwrap() {
            for (src, tgt) in batch.pairs() {
                let id = tgt[0];
                assert_eq!(src.len(), (id % 7) as usize);
                assert!(src.iter().all(|&t| t == id));
            }
        }
    }

    #[test]
    fn test_unshuffled_is_deterministic_and_in_order() {
        let data    = dataset(12);
        let mut rng = StdRng::seed_from_u64(1);
        let a: Vec<_> = batch_iter(&data, 5, false, &mut rng).unwrap().collect();
        let b: Vec<_> = batch_iter(&data, 5, false, &mut rng).unwrap().collect();
        assert_eq!(a, b);

        // Without shuffling, batch i holds exactly examples [5i, 5i+5)
        let mut ids: Vec<u32> = a[0].targets.iter().map(|t| t[0]).collect();
        ids.sort();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_stable_sort_keeps_original_order_on_ties() {
        let data: Vec<Example<u32>> = (0..4).map(|i| Example::new(vec![0, 0], vec![i])).collect();
        let mut rng = StdRng::seed_from_u64(0);
        let batch   = batch_iter(&data, 4, false, &mut rng).unwrap().next().unwrap();
        let ids: Vec<u32> = batch.targets.iter().map(|t| t[0]).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_same_seed_gives_same_shuffle() {
        let data = dataset(25);
        let a: Vec<_> = batch_iter(&data, 4, true, &mut StdRng::seed_from_u64(9)).unwrap().collect();
        let b: Vec<_> = batch_iter(&data, 4, true, &mut StdRng::seed_from_u64(9)).unwrap().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_last_batch_may_be_short() {
        let data    = dataset(7);
        let mut rng = StdRng::seed_from_u64(0);
        let sizes: Vec<usize> = batch_iter(&data, 3, true, &mut rng).unwrap().map(|b| b.len()).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }

    #[test]
    fn test_empty_data_gives_no_batches() {
        let data: Vec<Example<u32>> = Vec::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(batch_iter(&data, 4, true, &mut rng).unwrap().count(), 0);
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let data    = dataset(3);
        let mut rng = StdRng::seed_from_u64(0);
        let err     = batch_iter(&data, 0, false, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_max_lengths_of_hand_built_batch() {
        let batch = Batch {
            sources: vec![vec![1], vec![1, 2, 3], vec![]],
            targets: vec![vec![4, 5], vec![6], vec![7, 8, 9, 10]],
        };
        assert_eq!(batch.max_source_len(), 3);
        assert_eq!(batch.max_target_len(), 4);

        let empty: Batch<u32> = Batch { sources: vec![], targets: vec![] };
        assert_eq!(empty.max_source_len(), 0);
    }

    #[test]
    fn test_padded_batch_is_rectangular() {
        let data = vec![
            Example::new(vec![1], vec![7, 7, 7]),
            Example::new(vec![1, 2, 3], vec![8]),
        ];
        let mut rng = StdRng::seed_from_u64(0);
        let batch   = batch_iter(&data, 2, false, &mut rng).unwrap().next().unwrap();
        let (src, tgt) = batch.padded(0, 9);
        assert_eq!(src, vec![vec![1, 2, 3], vec![1, 0, 0]]);
        assert_eq!(tgt, vec![vec![8, 9, 9], vec![7, 7, 7]]);
    }
}
