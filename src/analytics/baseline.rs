use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// League-wide scoring context that luck scores are measured against.
///
/// `std` is half the sample standard deviation of the scores, so one luck
/// step corresponds to half a standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonBaseline {
    mean: f64,
    std: f64,
}

impl SeasonBaseline {
    pub fn new(mean: f64, std: f64) -> ReportResult<Self> {
        if !mean.is_finite() || mean == 0.0 {
            return Err(ReportError::InvalidInput(format!(
                "baseline mean must be finite and non-zero, got {mean}"
            )));
        }
        if !std.is_finite() || std <= 0.0 {
            return Err(ReportError::InvalidInput(format!(
                "baseline std must be finite and > 0, got {std}"
            )));
        }
        Ok(Self { mean, std })
    }

    /// Builds the baseline from every regular-season team score of a season.
    pub fn from_scores(scores: &[f64]) -> ReportResult<Self> {
        if scores.len() < 2 {
            return Err(ReportError::InvalidInput(format!(
                "season baseline needs at least 2 scores, got {}",
                scores.len()
            )));
        }
        if scores.iter().any(|score| !score.is_finite()) {
            return Err(ReportError::InvalidInput(
                "season scores must be finite".to_owned(),
            ));
        }

        let n = scores.len() as f64;
        let mean = scores.iter().sum::<f64>() / n;
        let variance = scores
            .iter()
            .map(|score| (score - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0);

        Self::new(mean, variance.sqrt() * 0.5)
    }

    #[must_use]
    pub fn mean(self) -> f64 {
        self.mean
    }

    #[must_use]
    pub fn std(self) -> f64 {
        self.std
    }
}
