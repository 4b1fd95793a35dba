//! Predictor configuration.
//!
//! Configuration is optional: [`PredictorConfig::default`] reproduces the
//! standard placement dataset layout and a 100-tree forest seeded with 42.
//! A JSON file may override any subset of the fields:
//!
//! ```json
//! {
//!   "normalizer": { "id_column": "RollNo" },
//!   "forest": { "n_trees": 200, "max_depth": 12 }
//! }
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::dataset::normalizer::NormalizerConfig;
use crate::error::{PlacementError, Result};
use crate::ml::config::ForestConfig;

/// Top-level configuration for the prediction pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Column roles for training data.
    pub normalizer: NormalizerConfig,
    /// Random forest hyperparameters.
    pub forest: ForestConfig,
}

impl PredictorConfig {
    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: PredictorConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.forest.validate()?;

        let normalizer = &self.normalizer;
        if normalizer.label_column.is_empty() {
            return Err(PlacementError::config("label_column must not be empty"));
        }
        if normalizer.label_column == normalizer.id_column {
            return Err(PlacementError::config(
                "label_column and id_column must differ",
            ));
        }
        if normalizer.positive_label == normalizer.negative_label {
            return Err(PlacementError::config(
                "positive_label and negative_label must differ",
            ));
        }
        Ok(())
    }
}
