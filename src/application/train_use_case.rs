// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the JSONL recipe corpus      (Layer 4 - data)
//   Step 2: Build both vocabularies           (Layer 4 - data)
//   Step 3: Extract both pair relations       (Layer 4 - data)
//   Step 4: Save config                       (Layer 6 - infra)
//   Step 5: Train the ingredient model        (Layer 5 - ml)
//   Step 6: Train the recipe model            (Layer 5 - ml)
//
// The two relations are trained one after the other, each with
// its own batch cursor, checkpoint directory, and metrics file.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §5 (Training)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    cursor::BatchCursor,
    extractor::{extract_cooccurrence, extract_membership},
    loader::JsonlCorpus,
    vocab::Vocabulary,
};
use crate::domain::traits::RecipeSource;
use crate::infra::{checkpoint::CheckpointManager, metrics::MetricsLogger};
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run. Serialisable so it can
// be saved to disk and reloaded by the plot command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub corpus_path:      String,
    pub checkpoint_dir:   String,
    /// Ingredient vocabulary cap, UNK slot included.
    /// Recipe names are deliberately uncapped.
    pub vocabulary_size:  usize,
    pub emb_dim:          usize,
    pub batch_size:       usize,
    pub steps:            usize,
    pub lr:               f64,
    pub lr_decay:         f64,
    pub lr_decay_steps:   usize,
    pub log_every:        usize,
    pub checkpoint_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            corpus_path:      "data/sitemap.json".to_string(),
            checkpoint_dir:   "checkpoints".to_string(),
            vocabulary_size:  1000,
            emb_dim:          256,
            batch_size:       128,
            steps:            2_000_000,
            lr:               0.01,
            lr_decay:         0.95,
            lr_decay_steps:   10_000,
            log_every:        1000,
            checkpoint_every: 100_000,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end.
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load the corpus ───────────────────────────────────────────
        tracing::info!("Loading recipe corpus from '{}'", cfg.corpus_path);
        let corpus = JsonlCorpus::new(&cfg.corpus_path);
        let records = corpus.load_all()?;

        // ── Step 2: Build both vocabularies ───────────────────────────────────
        // Ingredients are capped so rare names collapse onto UNK;
        // recipe names are uncapped, one entry per distinct name.
        let ingredient_vocab = Vocabulary::build(
            records.iter().flat_map(|r| r.ingredient_names()),
            Some(cfg.vocabulary_size),
        );
        let recipe_vocab = Vocabulary::build(records.iter().map(|r| r.name.as_str()), None);
        tracing::info!(
            "Vocabularies: {} ingredients (cap {}), {} recipes (uncapped)",
            ingredient_vocab.len(),
            cfg.vocabulary_size,
            recipe_vocab.len(),
        );

        // ── Step 3: Extract both pair relations ───────────────────────────────
        // Co-occurrence is quadratic per recipe, so its size is
        // data-dependent and only known after extraction.
        let cooccurrence = extract_cooccurrence(&records, &ingredient_vocab);
        let membership = extract_membership(&records, &recipe_vocab, &ingredient_vocab);
        tracing::info!(
            "Extracted {} co-occurrence pairs and {} membership pairs",
            cooccurrence.len(),
            membership.len(),
        );

        // ── Step 4: Save config for the plot command ──────────────────────────
        let root = CheckpointManager::new(&cfg.checkpoint_dir);
        root.save_config(cfg)?;

        // ── Step 5: Train the ingredient co-occurrence model ──────────────────
        {
            let mut source = BatchCursor::new(&cooccurrence, cfg.batch_size)
                .context("cannot build batch cursor for the ingredient co-occurrence relation")?;
            let dir = PathBuf::from(&cfg.checkpoint_dir).join("ingredients");
            run_training(
                cfg,
                "ingredients",
                &mut source,
                ingredient_vocab.len(),
                ingredient_vocab.len(),
                CheckpointManager::new(&dir),
                MetricsLogger::new(&dir)?,
            )?;
        }

        // ── Step 6: Train the recipe membership model ─────────────────────────
        // Context side is the recipe vocabulary; the softmax still
        // predicts ingredients.
        {
            let mut source = BatchCursor::new(&membership, cfg.batch_size)
                .context("cannot build batch cursor for the recipe membership relation")?;
            let dir = PathBuf::from(&cfg.checkpoint_dir).join("recipes");
            run_training(
                cfg,
                "recipes",
                &mut source,
                recipe_vocab.len(),
                ingredient_vocab.len(),
                CheckpointManager::new(&dir),
                MetricsLogger::new(&dir)?,
            )?;
        }

        Ok(())
    }
}
