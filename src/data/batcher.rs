// ============================================================
// Layer 4 — Pair Batcher
// ============================================================
// Converts one IndexBatch into GPU-ready tensors.
//
// Burn's own DataLoader is deliberately not used here: it
// shuffles and re-samples, while this pipeline's contract is a
// strict circular read order owned by the BatchCursor. The
// batcher therefore only does the tensor stacking step:
//
//   Input:  IndexBatch with B context and B target indices
//   Output: contexts tensor [B], targets tensor [B, 1]
//
// The target column shape matches what the loss side of the
// model expects for one training step.
//
// B is the Burn Backend (e.g. Wgpu, Autodiff<Wgpu>) —
// generic so the same batcher works on any device.
//
// Reference: Burn Book §4 (Batcher)

use burn::prelude::*;

use crate::domain::pair::IndexBatch;

// ─── TrainingBatch ────────────────────────────────────────────────────────────
/// One batch ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct TrainingBatch<B: Backend> {
    /// Context indices — shape: [batch_size]
    pub contexts: Tensor<B, 1, Int>,

    /// Target indices as a column — shape: [batch_size, 1]
    pub targets: Tensor<B, 2, Int>,
}

// ─── PairBatcher ──────────────────────────────────────────────────────────────
/// Holds the target device so tensors are created on the correct
/// GPU/CPU.
#[derive(Clone, Debug)]
pub struct PairBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> PairBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    /// Stack one index batch into tensors. The cursor guarantees
    /// both vectors hold exactly batch_size entries, so the batch
    /// dimension is taken from the vector length.
    pub fn batch(&self, batch: &IndexBatch) -> TrainingBatch<B> {
        let batch_size = batch.len();

        let contexts = Tensor::<B, 1, Int>::from_ints(batch.contexts.as_slice(), &self.device);

        let targets = Tensor::<B, 1, Int>::from_ints(batch.targets.as_slice(), &self.device)
            .reshape([batch_size, 1]);

        TrainingBatch { contexts, targets }
    }
}
