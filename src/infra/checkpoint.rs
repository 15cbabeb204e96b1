// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores model weights using Burn's CompactRecorder.
//
// Each relation gets its own manager over its own directory:
//   checkpoints/
//     train_config.json        ← run configuration (root manager)
//     ingredients/
//       model_step_100000.mpk.gz
//       model_step_200000.mpk.gz
//       latest_step.json       ← number of the newest snapshot
//       metrics.csv
//     recipes/
//       ...
//
// Why save the config separately?
//   Restoring weights requires a model of the exact same
//   architecture (vocabulary sizes, embedding dimension) to
//   load into. The config file is what lets the plot command
//   rebuild that model long after training finished.
//
// Burn's CompactRecorder:
//   - Serialises model parameters to MessagePack format
//   - Compresses with gzip for smaller file size
//   - Type-safe: loading fails if architecture doesn't match
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{Context, Result};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
    tensor::backend::AutodiffBackend,
};
use std::{fs, path::PathBuf};

use crate::application::train_use_case::TrainConfig;
use crate::ml::model::SkipGramModel;

/// Manages saving and loading of model checkpoints.
/// All files are stored in the configured directory.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create a new CheckpointManager.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Save model weights at a given step and update the
    /// latest-step pointer.
    pub fn save_model<B: AutodiffBackend>(
        &self,
        model: &SkipGramModel<B>,
        step: usize,
    ) -> Result<()> {
        // Recorder adds the file extension itself
        let path = self.dir.join(format!("model_step_{step}"));

        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save checkpoint to '{}'", path.display()))?;

        let latest_path = self.dir.join("latest_step.json");
        fs::write(&latest_path, serde_json::to_string(&step)?)
            .with_context(|| "Failed to write latest_step.json")?;

        tracing::debug!("Saved checkpoint: step {}", step);
        Ok(())
    }

    /// Load model weights from the latest saved checkpoint.
    ///
    /// The model parameter must have the correct architecture
    /// (matching the saved checkpoint) or loading will fail.
    pub fn load_model<B: Backend>(
        &self,
        model: SkipGramModel<B>,
        device: &B::Device,
    ) -> Result<SkipGramModel<B>> {
        let step = self.latest_step()?;
        let path = self.dir.join(format!("model_step_{step}"));

        tracing::info!("Loading checkpoint from step {}", step);

        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!(
                    "Cannot load checkpoint '{}'. Have you trained the model first?",
                    path.display()
                )
            })?;

        Ok(model.load_record(record))
    }

    /// Save the training configuration to JSON.
    /// Called once per run, before training starts, so that
    /// `plot` can rebuild the exact model architecture later.
    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        let path = self.dir.join("train_config.json");
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    /// Load the training configuration from JSON.
    pub fn load_config(&self) -> Result<TrainConfig> {
        let path = self.dir.join("train_config.json");

        let json = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read config from '{}'. Make sure you have run 'train' before 'plot'.",
                path.display()
            )
        })?;

        Ok(serde_json::from_str(&json)?)
    }

    /// The step number of the newest snapshot, or None when this
    /// directory has no checkpoint yet. Fresh training runs start
    /// from scratch on None and resume otherwise.
    pub fn try_latest_step(&self) -> Result<Option<usize>> {
        let path = self.dir.join("latest_step.json");
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(self.latest_step()?))
    }

    /// Read latest_step.json and return the step number.
    /// Returns an error if training hasn't been run yet.
    fn latest_step(&self) -> Result<usize> {
        let path = self.dir.join("latest_step.json");

        let s = fs::read_to_string(&path)
            .with_context(|| "Cannot find 'latest_step.json'. Have you run 'train' first?")?;

        Ok(serde_json::from_str::<usize>(&s)?)
    }
}
