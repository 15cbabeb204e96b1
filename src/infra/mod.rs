// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong in any specific
// business layer:
//
//   checkpoint.rs — Saving and loading model weights.
//                   Uses Burn's CompactRecorder to serialise
//                   model parameters to disk, plus a
//                   latest_step.json pointer so training can
//                   resume and plotting can find the newest
//                   snapshot. Also saves/loads TrainConfig as
//                   JSON so a later run can rebuild the model.
//
//   metrics.rs    — Training metrics logging.
//                   Appends step-level rows (average loss,
//                   learning rate) to a CSV file for later
//                   analysis and plotting.
//
// Reference: Rust Book §7 (Modules)
//            Burn Book §5 (Checkpointing)

/// Model checkpoint saving and loading
pub mod checkpoint;

/// Training metrics CSV logger
pub mod metrics;
