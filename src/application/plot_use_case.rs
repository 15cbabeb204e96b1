// ============================================================
// Layer 2 — Plot Use Case
// ============================================================
// Restores both trained models and turns their embedding tables
// into labelled 2D scatter images:
//
//   1. Load the training config saved next to the checkpoints
//   2. Reload the corpus and rebuild both vocabularies — the
//      build is deterministic, so the same corpus reproduces
//      the exact index ↔ token mapping used during training
//   3. Per relation: rebuild the model, load the latest
//      checkpoint, normalise the embedding table, project a
//      bounded prefix of rows to 2D, write the SVG
//
// Index 0 is UNK in both vocabularies and is skipped: its vector
// aggregates everything rare and has no meaningful neighbours.

use anyhow::{anyhow, Result};
use burn::prelude::*;
use std::path::PathBuf;

use crate::data::{loader::JsonlCorpus, vocab::Vocabulary};
use crate::domain::traits::RecipeSource;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{SkipGramConfig, SkipGramModel};
use crate::viz::{projection::project_2d, scatter::write_scatter};

type PlotBackend = burn::backend::Wgpu;

pub struct PlotUseCase {
    corpus_path:    String,
    checkpoint_dir: String,
    /// How many vocabulary entries to plot, counted from index 1
    num_points:     usize,
    out_dir:        String,
}

impl PlotUseCase {
    pub fn new(
        corpus_path: impl Into<String>,
        checkpoint_dir: impl Into<String>,
        num_points: usize,
        out_dir: impl Into<String>,
    ) -> Self {
        Self {
            corpus_path:    corpus_path.into(),
            checkpoint_dir: checkpoint_dir.into(),
            num_points,
            out_dir:        out_dir.into(),
        }
    }

    pub fn execute(&self) -> Result<()> {
        let device = burn::backend::wgpu::WgpuDevice::default();

        let root = CheckpointManager::new(&self.checkpoint_dir);
        let cfg = root.load_config()?;

        let corpus = JsonlCorpus::new(&self.corpus_path);
        let records = corpus.load_all()?;

        let ingredient_vocab = Vocabulary::build(
            records.iter().flat_map(|r| r.ingredient_names()),
            Some(cfg.vocabulary_size),
        );
        let recipe_vocab = Vocabulary::build(records.iter().map(|r| r.name.as_str()), None);

        self.plot_relation(
            "ingredients",
            ingredient_vocab.len(),
            ingredient_vocab.len(),
            &ingredient_vocab,
            cfg.emb_dim,
            "ingredients2vec.svg",
            &device,
        )?;

        self.plot_relation(
            "recipes",
            recipe_vocab.len(),
            ingredient_vocab.len(),
            &recipe_vocab,
            cfg.emb_dim,
            "recipes2vec.svg",
            &device,
        )?;

        Ok(())
    }

    fn plot_relation(
        &self,
        relation: &str,
        input_vocab: usize,
        output_vocab: usize,
        vocab: &Vocabulary,
        emb_dim: usize,
        file_name: &str,
        device: &burn::backend::wgpu::WgpuDevice,
    ) -> Result<()> {
        // ── Rebuild the model and load the latest snapshot ────────────────────
        let ckpt = CheckpointManager::new(PathBuf::from(&self.checkpoint_dir).join(relation));
        let model: SkipGramModel<PlotBackend> =
            SkipGramConfig::new(input_vocab, output_vocab, emb_dim).init(device);
        let model = ckpt.load_model(model, device)?;

        // ── Export the normalised table to plain rows ─────────────────────────
        let table = model.normalized_embeddings();
        let [rows_total, dim] = table.dims();
        let flat: Vec<f32> = table
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow!("cannot read {relation} embedding table: {e:?}"))?;

        // Bounded prefix, skipping UNK at index 0
        let limit = self.num_points.min(rows_total);
        let rows: Vec<Vec<f32>> = (1..limit)
            .map(|i| flat[i * dim..(i + 1) * dim].to_vec())
            .collect();
        let labels: Vec<String> = (1..limit)
            .map(|i| vocab.token(i).unwrap_or_default().to_string())
            .collect();

        // ── Project and write the artifact ────────────────────────────────────
        let points = project_2d(&rows);
        let out = PathBuf::from(&self.out_dir).join(file_name);
        write_scatter(&out, &points, &labels, relation)?;

        tracing::info!(
            "Wrote {} scatter ({} points) to '{}'",
            relation,
            points.len(),
            out.display(),
        );
        Ok(())
    }
}
