//! Fitted placement model and the interface inference runs against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dataset::schema::FeatureSchema;
use crate::error::{PlacementError, Result};
use crate::label::Placement;
use crate::ml::forest::RandomForest;

/// A trained classifier that scores encoded feature vectors.
///
/// Implementations are read-only after construction, so one model can serve
/// any number of concurrent callers without locking.
pub trait PlacementModel: Send + Sync {
    /// Feature order the model expects.
    fn schema(&self) -> &FeatureSchema;

    /// Probability of the `Placed` class for a vector in schema order.
    fn predict_proba(&self, features: &[f64]) -> Result<f64>;

    /// Class prediction for a vector in schema order.
    fn predict(&self, features: &[f64]) -> Result<Placement> {
        Ok(Placement::from_flag(self.predict_proba(features)? >= 0.5))
    }
}

/// Model metadata for tracking model information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Model name/identifier.
    pub name: String,
    /// Training timestamp.
    pub trained_at: chrono::DateTime<chrono::Utc>,
    /// Number of training examples used.
    pub training_examples: usize,
    /// Model hyperparameters.
    pub hyperparameters: HashMap<String, f64>,
}

/// Training statistics recorded once fitting completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Records labelled `Placed`.
    pub placed: usize,
    /// Records labelled `NotPlaced`.
    pub not_placed: usize,
    /// Accuracy of the fitted model on its own training set.
    pub training_accuracy: f64,
    /// Training time in milliseconds.
    pub training_time_ms: u64,
}

/// Immutable trained ensemble plus the feature schema it was trained with.
#[derive(Debug, Clone)]
pub struct FittedModel {
    forest: RandomForest,
    schema: FeatureSchema,
    metadata: ModelMetadata,
    stats: TrainingStats,
}

impl FittedModel {
    pub(crate) fn new(
        forest: RandomForest,
        schema: FeatureSchema,
        metadata: ModelMetadata,
        stats: TrainingStats,
    ) -> Self {
        Self {
            forest,
            schema,
            metadata,
            stats,
        }
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    pub fn n_trees(&self) -> usize {
        self.forest.n_trees()
    }

    /// Fraction of rows whose predicted label matches `labels`.
    pub fn accuracy(&self, features: &[Vec<f64>], labels: &[Placement]) -> Result<f64> {
        if features.len() != labels.len() {
            return Err(PlacementError::other(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if features.is_empty() {
            return Ok(0.0);
        }

        let mut correct = 0;
        for (row, &label) in features.iter().zip(labels) {
            if self.predict(row)? == label {
                correct += 1;
            }
        }
        Ok(correct as f64 / features.len() as f64)
    }
}

impl PlacementModel for FittedModel {
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.forest.n_features() {
            return Err(PlacementError::other(format!(
                "feature vector has {} values, model expects {}",
                features.len(),
                self.forest.n_features()
            )));
        }
        Ok(self.forest.predict_proba(features))
    }
}
