// ============================================================
// Core Pipeline Errors
// ============================================================
// Structured error taxonomy for the corpus-to-batch pipeline.
//
// Only construction-time problems are errors here:
//   - a corpus line that fails to parse
//   - an empty pair collection (batch arithmetic needs len > 0)
//   - a batch size the collection cannot serve
//   - a batch that came out with the wrong number of entries
//
// A vocabulary lookup miss is NOT an error: unknown tokens map
// to the UNK index by contract (see data::vocab).
//
// The application layer wraps these with anyhow context naming
// the relation being processed, so a failure reads like
// "cannot build batch cursor for the ingredient co-occurrence
// relation: batch size 128 exceeds pair collection length 6".
//
// Reference: Rust Book §9 (Error Handling)

use thiserror::Error;

/// Errors raised by the corpus loader, pair extractor, and batch cursor.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The corpus file could not be read at all.
    #[error("cannot read corpus '{path}': {source}")]
    CorpusIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// One corpus line is not a valid recipe record.
    /// Carries the 1-based line number so the bad line can be found.
    #[error("malformed corpus line {line}: {message}")]
    MalformedInput { line: usize, message: String },

    /// A relation produced zero pairs. Cursor arithmetic is modular
    /// over the collection length, so this is rejected at cursor
    /// construction instead of surfacing as a division by zero
    /// inside the training loop.
    #[error("no pairs to serve batches from: the pair collection is empty")]
    EmptyPairCollection,

    /// A batch size of zero would pin the cursor in place forever.
    #[error("batch size must be at least 1")]
    ZeroBatchSize,

    /// The batch size is larger than the pair collection, so a single
    /// batch would wrap more than once and repeat pairs within itself.
    #[error("batch size {batch_size} exceeds pair collection length {collection_len}")]
    BatchSizeExceedsCollection {
        batch_size: usize,
        collection_len: usize,
    },

    /// An assembled batch did not contain exactly batch_size pairs.
    /// Carries the offending sizes so the report is actionable.
    #[error(
        "batch shape mismatch: expected {batch_size} pairs, assembled {actual} \
         (pair collection length {collection_len})"
    )]
    ShapeMismatch {
        batch_size: usize,
        actual: usize,
        collection_len: usize,
    },
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_input_names_the_line() {
        let err = PipelineError::MalformedInput {
            line: 7,
            message: "missing field `name`".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_shape_mismatch_carries_sizes() {
        let err = PipelineError::ShapeMismatch {
            batch_size: 128,
            actual: 0,
            collection_len: 10,
        };
        let msg = err.to_string();
        assert!(msg.contains("128"));
        assert!(msg.contains("10"));
    }
}
