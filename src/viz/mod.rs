// ============================================================
// Visualisation Boundary
// ============================================================
// Consumes (index → vector) plus (index → label) for a bounded
// prefix of the vocabulary and produces a labelled 2D scatter
// image per model. Nothing in here feeds back into training.
//
//   projection.rs — deterministic 2-component PCA over the
//                   normalised embedding rows (power iteration,
//                   plain slice arithmetic, no tensor types)
//
//   scatter.rs    — maps projected points onto a fixed canvas
//                   and writes an SVG scatter with one text
//                   label per point
//
// Reference: Jolliffe (2002) Principal Component Analysis

/// 2D PCA projection of embedding rows
pub mod projection;

/// SVG scatter plot writer
pub mod scatter;
