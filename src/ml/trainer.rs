//! Fits the placement classifier on a normalized dataset.

use std::time::Instant;

use log::info;

use crate::dataset::normalizer::NormalizedDataset;
use crate::dataset::schema::FeatureSchema;
use crate::error::{PlacementError, Result};
use crate::label::Placement;
use crate::ml::config::ForestConfig;
use crate::ml::forest::RandomForest;
use crate::ml::model::{FittedModel, ModelMetadata, TrainingStats};

/// Trains one [`FittedModel`] from a full training set.
#[derive(Debug, Clone, Default)]
pub struct ClassifierTrainer {
    config: ForestConfig,
}

impl ClassifierTrainer {
    pub fn new(config: ForestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForestConfig {
        &self.config
    }

    /// Train on the output of the data normalizer.
    pub fn train_dataset(&self, dataset: &NormalizedDataset) -> Result<FittedModel> {
        self.train(&dataset.schema, &dataset.features, &dataset.labels)
    }

    /// Train on a feature matrix whose columns follow `schema`.
    ///
    /// Fails with [`PlacementError::Training`] when the row counts differ,
    /// a row does not match the schema width, or fewer than two classes
    /// are present.
    pub fn train(
        &self,
        schema: &FeatureSchema,
        features: &[Vec<f64>],
        labels: &[Placement],
    ) -> Result<FittedModel> {
        if features.len() != labels.len() {
            return Err(PlacementError::training(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if features.is_empty() {
            return Err(PlacementError::training("training set is empty"));
        }
        if schema.is_empty() {
            return Err(PlacementError::training("feature schema is empty"));
        }
        if let Some(pos) = features.iter().position(|row| row.len() != schema.len()) {
            return Err(PlacementError::training(format!(
                "row {} has {} features, schema has {}",
                pos,
                features[pos].len(),
                schema.len()
            )));
        }

        let placed = labels.iter().filter(|l| l.is_placed()).count();
        let not_placed = labels.len() - placed;
        if placed == 0 || not_placed == 0 {
            return Err(PlacementError::training(
                "at least two distinct label classes are required",
            ));
        }

        info!(
            "Training random forest: {} trees, {} rows, {} features, seed {}",
            self.config.n_trees,
            features.len(),
            schema.len(),
            self.config.seed
        );

        let start_time = Instant::now();
        let targets: Vec<bool> = labels.iter().map(|l| l.is_placed()).collect();
        let forest = RandomForest::fit(features, &targets, &self.config)?;
        let training_time = start_time.elapsed();

        let correct = features
            .iter()
            .zip(&targets)
            .filter(|(row, target)| (forest.predict_proba(row) >= 0.5) == **target)
            .count();
        let training_accuracy = correct as f64 / features.len() as f64;

        let metadata = ModelMetadata {
            name: "RandomForestClassifier".to_string(),
            trained_at: chrono::Utc::now(),
            training_examples: features.len(),
            hyperparameters: self.config.hyperparameters(),
        };
        let stats = TrainingStats {
            placed,
            not_placed,
            training_accuracy,
            training_time_ms: training_time.as_millis() as u64,
        };

        info!(
            "Training finished in {} ms, training accuracy {:.4}",
            stats.training_time_ms, stats.training_accuracy
        );

        Ok(FittedModel::new(forest, schema.clone(), metadata, stats))
    }
}
