// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw JSONL corpus
// all the way to GPU-ready tensor batches.
//
// The pipeline flows in this order:
//
//   sitemap.json (one recipe object per line)
//       │
//       ▼
//   JsonlCorpus       → parses lines into Recipe records
//       │
//       ▼
//   Vocabulary        → frequency-ranked token ↔ index mapping
//       │
//       ▼
//   extractor         → (context, target) index pairs for the
//       │               co-occurrence and membership relations
//       ▼
//   BatchCursor       → fixed-size circular batches, no shuffling
//       │
//       ▼
//   PairBatcher       → stacks one batch into tensors
//       │
//       ▼
//   training loop     → one optimiser step per batch
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)
//            Rust Book §13 (Iterators and Closures)

/// Loads line-delimited JSON recipes from a file
pub mod loader;

/// Frequency-ranked vocabulary with a reserved UNK entry
pub mod vocab;

/// Walks records and emits (context, target) index pairs
pub mod extractor;

/// Serves fixed-size wrap-around batches from a pair list
pub mod cursor;

/// Converts an index batch into Burn tensors
pub mod batcher;
