// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records training metrics to a CSV file while the step loop
// runs, one row per log interval.
//
// Metrics recorded per row:
//   - step:          the global training step
//   - avg_loss:      average cross-entropy loss since the last row
//   - learning_rate: the decayed learning rate at that step
//
// Output file: <relation checkpoint dir>/metrics.csv
//
// Example CSV output:
//   step,avg_loss,learning_rate
//   1000,6.204311,0.010000
//   2000,5.812044,0.010000
//   ...
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};
use serde::{Deserialize, Serialize};

/// One row of metrics data for a single log interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepMetrics {
    pub step: usize,

    /// Average cross-entropy loss over the interval.
    /// Random initialisation starts near ln(vocabulary size).
    pub avg_loss: f64,

    /// The staircase-decayed learning rate in effect at this step
    pub learning_rate: f64,
}

impl StepMetrics {
    pub fn new(step: usize, avg_loss: f64, learning_rate: f64) -> Self {
        Self {
            step,
            avg_loss,
            learning_rate,
        }
    }

    /// One CSV row, no trailing newline.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{:.6},{:.6}",
            self.step, self.avg_loss, self.learning_rate
        )
    }
}

/// Appends step metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet, so a
    /// resumed run appends to the existing log.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("metrics.csv");

        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "step,avg_loss,learning_rate")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one row to the CSV.
    pub fn log(&self, m: &StepMetrics) -> Result<()> {
        let mut f = OpenOptions::new().append(true).open(&self.csv_path)?;
        writeln!(f, "{}", m.csv_row())?;

        tracing::debug!(
            "Logged step {} metrics: avg_loss={:.4}, lr={:.6}",
            m.step,
            m.avg_loss,
            m.learning_rate,
        );

        Ok(())
    }

    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_row_format() {
        let m = StepMetrics::new(1000, 6.2043114, 0.01);
        assert_eq!(m.csv_row(), "1000,6.204311,0.010000");
    }
}
