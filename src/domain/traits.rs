// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - JsonlCorpus implements RecipeSource
//   - A future SqliteCorpus could also implement RecipeSource
//   - The application layer only sees RecipeSource
//     and works with both without any changes
//
// BatchSource is the seam between the data pipeline and the
// training loop: the trainer consumes batches through it and
// never touches the pair collection or the cursor directly.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use crate::domain::pair::IndexBatch;
use crate::domain::recipe::Recipe;
use crate::error::PipelineError;

// ─── RecipeSource ─────────────────────────────────────────────────────────────
/// Any component that can load the full recipe corpus.
///
/// Implementations:
///   - JsonlCorpus → loads line-delimited JSON from a file
pub trait RecipeSource {
    /// Load every recipe record, preserving corpus order.
    fn load_all(&self) -> Result<Vec<Recipe>, PipelineError>;
}

// ─── BatchSource ──────────────────────────────────────────────────────────────
/// Any component that can serve fixed-size training batches.
///
/// The training loop owns one exclusive `&mut` handle per relation,
/// so each call to `next_batch` observes the cursor advance left by
/// the previous call. Implementations must return every pair at
/// least once per `ceil(pair_count / batch_size)` calls.
///
/// Implementations:
///   - BatchCursor → circular, order-preserving reader over a pair list
pub trait BatchSource {
    /// Produce the next batch and advance the internal position.
    fn next_batch(&mut self) -> Result<IndexBatch, PipelineError>;

    /// The fixed number of pairs per batch.
    fn batch_size(&self) -> usize;

    /// The total number of pairs in the underlying collection.
    fn pair_count(&self) -> usize;
}
