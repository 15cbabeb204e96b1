// ============================================================
// Layer 3 — Training Pair Types
// ============================================================
// A Pair is one (context_index, target_index) training example
// for skip-gram style embedding learning. Two pair collections
// exist in this system:
//   - ingredient co-occurrence pairs (both indices are ingredient
//     vocabulary indices)
//   - recipe membership pairs (context is a recipe index, target
//     is an ingredient index)
//
// Pair collections are ordered sequences: insertion order equals
// corpus traversal order, and the batch cursor slices them
// positionally, so order is part of the contract.
//
// Reference: Mikolov et al. (2013) Efficient Estimation of
//            Word Representations in Vector Space

use serde::{Deserialize, Serialize};

/// One (context, target) training example, both sides already
/// resolved to vocabulary indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub context: usize,
    pub target: usize,
}

impl Pair {
    pub fn new(context: usize, target: usize) -> Self {
        Self { context, target }
    }
}

/// One batch of pairs split by position: `contexts[i]` and
/// `targets[i]` come from the same pair. Both vectors hold
/// exactly batch_size entries; the tensor batcher later shapes
/// the targets into a `[batch_size, 1]` column.
///
/// Indices are i32 because Burn's Int tensors are built from
/// i32 slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexBatch {
    pub contexts: Vec<i32>,
    pub targets: Vec<i32>,
}

impl IndexBatch {
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}
