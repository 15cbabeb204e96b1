// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (training the two models, or plotting them).
//
// Rules for this layer:
//   - No ML math or model code here
//   - No UI or printing here (that's Layer 1)
//   - No direct tensor manipulation (that's Layers 4 and 5)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The training workflow: corpus → vocabularies → pairs → two models
pub mod train_use_case;

// The plotting workflow: checkpoints → normalised vectors → SVG scatters
pub mod plot_use_case;
