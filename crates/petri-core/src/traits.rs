//! Seams to the external Trainer and visualization collaborators.
//!
//! Model fitting and plotting live outside this core; these traits pin
//! down the interface they consume so the pipeline can hand off a
//! feature matrix without knowing anything about the learner behind it.

use crate::error::TrainError;

/// Train/validation split handed to the Trainer alongside the data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainSplit {
    /// Fraction of rows used for training; the remainder validates.
    pub train_fraction: f64,
}

impl Default for TrainSplit {
    fn default() -> Self {
        Self {
            train_fraction: 0.8,
        }
    }
}

/// A fitted predictor returned by a [`Trainer`].
pub trait Predictor {
    /// Predict the target value for one feature row.
    fn predict(&self, row: &[f64]) -> f64;
}

/// Result of a fit: the predictor plus its validation metrics.
pub struct FitOutcome {
    /// The fitted model.
    pub predictor: Box<dyn Predictor>,
    /// Mean squared error on the validation rows.
    pub mse: f64,
    /// Coefficient of determination on the validation rows.
    pub r_squared: f64,
}

/// Black-box regression trainer consuming the produced feature table.
///
/// `features` is a row-major flat matrix with `width` values per row;
/// `targets` holds one label per row. Search strategy and algorithm are
/// the implementation's business.
pub trait Trainer {
    /// Fit a predictor and report validation metrics.
    fn fit(
        &mut self,
        features: &[f64],
        width: usize,
        targets: &[f64],
        split: TrainSplit,
    ) -> Result<FitOutcome, TrainError>;
}

/// Side-effecting consumer of (true, predicted) pairs.
///
/// Plotting backends implement this; the core never consumes a return
/// value from it.
pub trait PerformanceSink {
    /// Render or record one model's validation performance.
    fn render(&mut self, truth: &[f64], predicted: &[f64], label: &str);
}
