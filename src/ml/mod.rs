// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code apart
// from the tensor stacking in data::batcher. No other layer
// builds models or runs optimiser steps.
//
// What's in this layer:
//
//   model.rs   — The skip-gram embedding model:
//                • one embedding table over the context vocabulary
//                • one linear softmax projection over the target
//                  vocabulary
//                • cross-entropy loss per batch
//                • L2-normalised table export for visualisation
//
//   trainer.rs — The step-based training loop:
//                one batch from the cursor per optimiser step,
//                staircase learning-rate decay, periodic metrics
//                and checkpoints, resume from the latest step
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)
//            Mikolov et al. (2013) word2vec

/// Skip-gram embedding model architecture
pub mod model;

/// Step-based training loop with checkpointing and resume
pub mod trainer;
