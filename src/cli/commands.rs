// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `plot`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::train_use_case::TrainConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train both embedding models on a JSONL recipe corpus
    Train(TrainArgs),

    /// Plot trained embeddings as labelled 2D scatters
    Plot(PlotArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Path to the training corpus, e.g. data/sitemap.json
    #[arg(long)]
    pub corpus: String,

    /// Directory to save model checkpoints and metrics
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Ingredient vocabulary cap, including the UNK slot.
    /// Recipe names are never capped.
    #[arg(long, default_value_t = 1000)]
    pub vocabulary_size: usize,

    /// Embedding dimension — every token is represented
    /// as a vector of this size
    #[arg(long, default_value_t = 256)]
    pub emb_dim: usize,

    /// Number of pairs per training batch. Must not exceed the
    /// pair count of either relation.
    #[arg(long, default_value_t = 128)]
    pub batch_size: usize,

    /// Total number of training steps per model
    #[arg(long, default_value_t = 2_000_000)]
    pub steps: usize,

    /// Initial learning rate for Adam
    #[arg(long, default_value_t = 0.01)]
    pub lr: f64,

    /// Multiplicative learning rate decay factor
    #[arg(long, default_value_t = 0.95)]
    pub lr_decay: f64,

    /// Steps between learning rate decay staircase drops
    #[arg(long, default_value_t = 10_000)]
    pub lr_decay_steps: usize,

    /// Steps between loss log lines and metrics CSV rows
    #[arg(long, default_value_t = 1000)]
    pub log_every: usize,

    /// Steps between checkpoint snapshots
    #[arg(long, default_value_t = 100_000)]
    pub checkpoint_every: usize,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            corpus_path:      a.corpus,
            checkpoint_dir:   a.checkpoint_dir,
            vocabulary_size:  a.vocabulary_size,
            emb_dim:          a.emb_dim,
            batch_size:       a.batch_size,
            steps:            a.steps,
            lr:               a.lr,
            lr_decay:         a.lr_decay,
            lr_decay_steps:   a.lr_decay_steps,
            log_every:        a.log_every,
            checkpoint_every: a.checkpoint_every,
        }
    }
}

/// All arguments for the `plot` command
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// The corpus the models were trained on (rebuilds the
    /// vocabularies for labelling)
    #[arg(long)]
    pub corpus: String,

    /// Directory where checkpoints were saved during training
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// How many vocabulary entries to plot per model
    #[arg(long, default_value_t = 500)]
    pub num_points: usize,

    /// Directory to write the SVG scatter files into
    #[arg(long, default_value = ".")]
    pub out_dir: String,
}
