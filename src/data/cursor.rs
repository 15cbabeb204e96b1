// ============================================================
// Layer 4 — Batch Cursor
// ============================================================
// Serves fixed-size training batches from an ordered pair list.
//
// There is no shuffling and no sampling with replacement: the
// cursor walks the list in strict circular order. Each call
// advances the stored position by exactly batch_size modulo the
// collection length, so a batch may straddle the end of the list
// and continue from the start. Over ceil(len / batch_size)
// consecutive calls every pair is returned at least once; when
// len is not a multiple of batch_size the final wrap re-emits a
// few pairs from the front of the list. That overlap is the
// intended sampling behaviour, not an off-by-one.
//
// The cursor borrows the pair collection instead of owning it:
// the collection is immutable after extraction and the cursor is
// the only mutable piece of pipeline state. One cursor exists
// per relation and the training loop holds it by &mut, so batch
// requests are naturally serialised.
//
// All preconditions are checked at construction:
//   - empty collection  → modulo by zero in next_batch, rejected here
//   - batch_size == 0   → the cursor would never advance
//   - batch_size > len  → one batch would wrap onto itself and
//                         repeat pairs within a single batch
//
// Reference: Rust Book §4 (References and Borrowing)

use crate::domain::pair::{IndexBatch, Pair};
use crate::domain::traits::BatchSource;
use crate::error::PipelineError;

/// Circular fixed-size batch reader over an ordered pair list.
pub struct BatchCursor<'a> {
    /// The immutable pair collection this cursor reads from
    pairs: &'a [Pair],
    /// Number of pairs per batch, fixed at construction
    batch_size: usize,
    /// Next read position, always in [0, pairs.len())
    cursor: usize,
}

impl<'a> BatchCursor<'a> {
    pub fn new(pairs: &'a [Pair], batch_size: usize) -> Result<Self, PipelineError> {
        if pairs.is_empty() {
            return Err(PipelineError::EmptyPairCollection);
        }
        if batch_size == 0 {
            return Err(PipelineError::ZeroBatchSize);
        }
        if batch_size > pairs.len() {
            return Err(PipelineError::BatchSizeExceedsCollection {
                batch_size,
                collection_len: pairs.len(),
            });
        }
        Ok(Self {
            pairs,
            batch_size,
            cursor: 0,
        })
    }

    /// Current read position. Advances by batch_size (mod len) on
    /// every next_batch call.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl BatchSource for BatchCursor<'_> {
    fn next_batch(&mut self) -> Result<IndexBatch, PipelineError> {
        let len = self.pairs.len();
        let next = (self.cursor + self.batch_size) % len;

        let mut contexts = Vec::with_capacity(self.batch_size);
        let mut targets = Vec::with_capacity(self.batch_size);

        let mut push = |pair: &Pair| {
            contexts.push(pair.context as i32);
            targets.push(pair.target as i32);
        };

        // next == cursor can only happen when batch_size == len;
        // the wrap branch then emits the whole collection once.
        if next <= self.cursor {
            for pair in &self.pairs[self.cursor..] {
                push(pair);
            }
            for pair in &self.pairs[..next] {
                push(pair);
            }
        } else {
            for pair in &self.pairs[self.cursor..next] {
                push(pair);
            }
        }

        if contexts.len() != self.batch_size {
            return Err(PipelineError::ShapeMismatch {
                batch_size: self.batch_size,
                actual: contexts.len(),
                collection_len: len,
            });
        }

        self.cursor = next;
        Ok(IndexBatch { contexts, targets })
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Pairs (i, i + 100) for i in 0..n, so a pair's context value
    /// doubles as its position in the list.
    fn pairs(n: usize) -> Vec<Pair> {
        (0..n).map(|i| Pair::new(i, i + 100)).collect()
    }

    #[test]
    fn test_empty_collection_is_rejected() {
        let empty: Vec<Pair> = Vec::new();
        assert!(matches!(
            BatchCursor::new(&empty, 4),
            Err(PipelineError::EmptyPairCollection)
        ));
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let list = pairs(10);
        assert!(matches!(
            BatchCursor::new(&list, 0),
            Err(PipelineError::ZeroBatchSize)
        ));
    }

    #[test]
    fn test_oversized_batch_is_rejected() {
        let list = pairs(10);
        match BatchCursor::new(&list, 11) {
            Err(PipelineError::BatchSizeExceedsCollection {
                batch_size,
                collection_len,
            }) => {
                assert_eq!(batch_size, 11);
                assert_eq!(collection_len, 10);
            }
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_wraparound_cursor_sequence() {
        // length 10, batch 4: positions [0:4], [4:8], [8:10]+[0:2],
        // cursor sequence 4, 8, 2
        let list = pairs(10);
        let mut cursor = BatchCursor::new(&list, 4).unwrap();

        let b1 = cursor.next_batch().unwrap();
        assert_eq!(b1.contexts, vec![0, 1, 2, 3]);
        assert_eq!(cursor.position(), 4);

        let b2 = cursor.next_batch().unwrap();
        assert_eq!(b2.contexts, vec![4, 5, 6, 7]);
        assert_eq!(cursor.position(), 8);

        let b3 = cursor.next_batch().unwrap();
        assert_eq!(b3.contexts, vec![8, 9, 0, 1]);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_batch_equal_to_collection_length() {
        let list = pairs(6);
        let mut cursor = BatchCursor::new(&list, 6).unwrap();

        let batch = cursor.next_batch().unwrap();
        assert_eq!(batch.contexts, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(cursor.position(), 0);

        // And again: the cycle repeats identically
        let batch = cursor.next_batch().unwrap();
        assert_eq!(batch.contexts, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shape_invariant_holds_on_every_call() {
        let list = pairs(10);
        let mut cursor = BatchCursor::new(&list, 3).unwrap();
        for _ in 0..20 {
            let batch = cursor.next_batch().unwrap();
            assert_eq!(batch.contexts.len(), 3);
            assert_eq!(batch.targets.len(), 3);
        }
    }

    #[test]
    fn test_full_coverage_per_cycle() {
        // ceil(10 / 4) = 3 calls must return every pair at least once
        let list = pairs(10);
        let mut cursor = BatchCursor::new(&list, 4).unwrap();

        let mut seen: HashSet<i32> = HashSet::new();
        for _ in 0..3 {
            seen.extend(cursor.next_batch().unwrap().contexts);
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_contexts_and_targets_stay_aligned() {
        let list = pairs(5);
        let mut cursor = BatchCursor::new(&list, 2).unwrap();
        for _ in 0..6 {
            let batch = cursor.next_batch().unwrap();
            for (c, t) in batch.contexts.iter().zip(&batch.targets) {
                assert_eq!(t - c, 100);
            }
        }
    }
}
