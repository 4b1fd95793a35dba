//! Prediction output.

use serde::{Deserialize, Serialize};

use crate::label::Placement;

/// Label and positive-class probability for one inference call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted outcome.
    pub label: Placement,
    /// Probability of `Placed`, in `[0, 1]`.
    pub probability: f64,
}

/// One bar of the placed / not placed comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityBar {
    pub label: Placement,
    pub probability: f64,
}

impl PredictionResult {
    /// Build a result from the positive-class probability.
    ///
    /// The label is `Placed` exactly when `probability >= 0.5`.
    pub fn from_probability(probability: f64) -> Self {
        let probability = probability.clamp(0.0, 1.0);
        Self {
            label: Placement::from_flag(probability >= 0.5),
            probability,
        }
    }

    pub fn is_placed(&self) -> bool {
        self.label.is_placed()
    }

    /// Probability of `NotPlaced`.
    pub fn not_placed_probability(&self) -> f64 {
        1.0 - self.probability
    }

    /// The two bars of the comparison chart, `Placed` first.
    pub fn chart(&self) -> [ProbabilityBar; 2] {
        [
            ProbabilityBar {
                label: Placement::Placed,
                probability: self.probability,
            },
            ProbabilityBar {
                label: Placement::NotPlaced,
                probability: self.not_placed_probability(),
            },
        ]
    }
}
