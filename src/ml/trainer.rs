// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Step-based train loop over one pair relation using Adam.
//
// One call to BatchSource::next_batch per optimiser step; the
// cursor inside the source is the single record of how far
// through the pair list training has progressed. The loop is
// synchronous: the next batch is only requested after the
// current step finishes, so batches are consumed in exactly
// cursor order.
//
// Key Burn 0.20 insight:
//   - Training uses TrainBackend (Autodiff<Wgpu>) for gradients
//   - CompactRecorder snapshots the model every checkpoint_every
//     steps; latest_step.json points at the newest snapshot so an
//     interrupted run resumes where it stopped
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::batcher::PairBatcher;
use crate::domain::traits::BatchSource;
use crate::infra::{
    checkpoint::CheckpointManager,
    metrics::{MetricsLogger, StepMetrics},
};
use crate::ml::model::{SkipGramConfig, SkipGramModel};

type TrainBackend = burn::backend::Autodiff<burn::backend::Wgpu>;

pub fn run_training(
    cfg:          &TrainConfig,
    relation:     &str,
    source:       &mut dyn BatchSource,
    input_vocab:  usize,
    output_vocab: usize,
    ckpt_manager: CheckpointManager,
    metrics:      MetricsLogger,
) -> Result<()> {
    let device = burn::backend::wgpu::WgpuDevice::default();
    tracing::info!("Training {relation} model on WGPU device: {:?}", device);
    tracing::info!(
        "{relation}: {} pairs, batch size {}, embedding table [{} x {}]",
        source.pair_count(),
        source.batch_size(),
        input_vocab,
        cfg.emb_dim,
    );

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = SkipGramConfig::new(input_vocab, output_vocab, cfg.emb_dim);
    let mut model: SkipGramModel<TrainBackend> = model_cfg.init(&device);

    // ── Adam optimiser ────────────────────────────────────────────────────────
    // m = β1*m + (1-β1)*g        (mean)
    // v = β2*v + (1-β2)*g²       (variance)
    // θ = θ - lr * m / (√v + ε)  (update)
    let optim_cfg = AdamConfig::new().with_epsilon(1e-8);
    let mut optim = optim_cfg.init();

    let batcher = PairBatcher::<TrainBackend>::new(device.clone());

    // ── Resume from the latest checkpoint when one exists ─────────────────────
    let start_step = match ckpt_manager.try_latest_step()? {
        Some(step) if step >= cfg.steps => {
            tracing::info!("{relation} model already trained to step {step}, nothing to do");
            return Ok(());
        }
        Some(step) => {
            model = ckpt_manager.load_model(model, &device)?;
            tracing::info!("Resuming {relation} model from step {step}");
            step
        }
        None => 0,
    };

    // ── Step loop ─────────────────────────────────────────────────────────────
    let mut loss_sum = 0.0f64;

    for step in start_step..cfg.steps {
        let batch = source.next_batch()?;
        let tensors = batcher.batch(&batch);
        let lr = decayed_lr(cfg.lr, cfg.lr_decay, cfg.lr_decay_steps, step);

        let loss = model.forward_loss(tensors.contexts, tensors.targets);
        let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
        loss_sum += loss_val;

        // Backward pass + Adam update
        let grads = loss.backward();
        let grads = GradientsParams::from_grads(grads, &model);
        model = optim.step(lr, model, grads);

        if step % cfg.log_every == 0 && step > 0 {
            let avg_loss = loss_sum / cfg.log_every as f64;
            tracing::info!(
                "{relation}: average loss at step {step}: {avg_loss:.6} with learning rate {lr:.6}"
            );
            metrics.log(&StepMetrics::new(step, avg_loss, lr))?;
            loss_sum = 0.0;
        }

        if step % cfg.checkpoint_every == 0 && step > 0 {
            ckpt_manager.save_model(&model, step)?;
            tracing::info!("{relation} checkpoint saved at step {step}");
        }
    }

    ckpt_manager.save_model(&model, cfg.steps)?;
    tracing::info!("{relation} training complete");
    Ok(())
}

/// Staircase exponential decay: the learning rate drops by a
/// constant factor once per decay_steps-sized block of steps.
/// decayed = base * decay ^ floor(step / decay_steps)
pub fn decayed_lr(base: f64, decay: f64, decay_steps: usize, step: usize) -> f64 {
    let staircase = (step / decay_steps.max(1)) as i32;
    base * decay.powi(staircase)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_is_flat_within_a_block() {
        let lr0 = decayed_lr(0.1, 0.95, 1000, 0);
        let lr999 = decayed_lr(0.1, 0.95, 1000, 999);
        assert_eq!(lr0, lr999);
        assert_eq!(lr0, 0.1);
    }

    #[test]
    fn test_decay_steps_down_between_blocks() {
        let lr = decayed_lr(0.1, 0.95, 1000, 1000);
        assert!((lr - 0.095).abs() < 1e-12);

        let lr = decayed_lr(0.1, 0.95, 1000, 2500);
        assert!((lr - 0.1 * 0.95 * 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_zero_decay_steps_does_not_divide_by_zero() {
        let lr = decayed_lr(0.1, 0.95, 0, 5);
        assert!(lr > 0.0);
    }
}
