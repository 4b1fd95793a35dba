//! Random forest hyperparameters.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlacementError, Result};

/// Number of features considered when looking for the best split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFeatures {
    /// `floor(sqrt(n_features))`, at least one.
    Sqrt,
    /// `floor(log2(n_features))`, at least one.
    Log2,
    /// Every feature.
    All,
    /// A fixed count, capped at the number of features.
    Count(usize),
}

impl MaxFeatures {
    /// Resolve against the number of features in the training set.
    pub fn resolve(self, n_features: usize) -> usize {
        let k = match self {
            MaxFeatures::Sqrt => (n_features as f64).sqrt() as usize,
            MaxFeatures::Log2 => (n_features as f64).log2() as usize,
            MaxFeatures::All => n_features,
            MaxFeatures::Count(k) => k.min(n_features),
        };
        k.max(1)
    }
}

/// Configuration for random forest training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    /// Number of trees in the ensemble.
    pub n_trees: usize,
    /// Maximum tree depth (`None` grows until leaves are pure).
    pub max_depth: Option<usize>,
    /// Minimum samples required to split a node.
    pub min_samples_split: usize,
    /// Minimum samples required in each child of a split.
    pub min_samples_leaf: usize,
    /// Features sampled per split.
    pub max_features: MaxFeatures,
    /// Draw a bootstrap sample for every tree.
    pub bootstrap: bool,
    /// Seed for bootstrap sampling and feature selection.
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::Sqrt,
            bootstrap: true,
            seed: 42,
        }
    }
}

impl ForestConfig {
    /// Check that the hyperparameters describe a trainable forest.
    pub fn validate(&self) -> Result<()> {
        if self.n_trees == 0 {
            return Err(PlacementError::config("n_trees must be at least 1"));
        }
        if self.max_depth == Some(0) {
            return Err(PlacementError::config("max_depth must be at least 1"));
        }
        if self.min_samples_split < 2 {
            return Err(PlacementError::config(
                "min_samples_split must be at least 2",
            ));
        }
        if self.min_samples_leaf == 0 {
            return Err(PlacementError::config("min_samples_leaf must be at least 1"));
        }
        if self.max_features == MaxFeatures::Count(0) {
            return Err(PlacementError::config("max_features count must be at least 1"));
        }
        Ok(())
    }

    /// Hyperparameters as a flat map for model metadata.
    pub fn hyperparameters(&self) -> HashMap<String, f64> {
        let mut params = HashMap::new();
        params.insert("n_trees".to_string(), self.n_trees as f64);
        params.insert(
            "max_depth".to_string(),
            self.max_depth.map_or(f64::INFINITY, |d| d as f64),
        );
        params.insert(
            "min_samples_split".to_string(),
            self.min_samples_split as f64,
        );
        params.insert("min_samples_leaf".to_string(), self.min_samples_leaf as f64);
        params.insert(
            "bootstrap".to_string(),
            if self.bootstrap { 1.0 } else { 0.0 },
        );
        params.insert("seed".to_string(), self.seed as f64);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forest_config_default() {
        let config = ForestConfig::default();
        assert_eq!(config.n_trees, 100);
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_features, MaxFeatures::Sqrt);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_max_features_resolve() {
        assert_eq!(MaxFeatures::Sqrt.resolve(10), 3);
        assert_eq!(MaxFeatures::Log2.resolve(10), 3);
        assert_eq!(MaxFeatures::All.resolve(10), 10);
        assert_eq!(MaxFeatures::Count(20).resolve(10), 10);
        assert_eq!(MaxFeatures::Sqrt.resolve(1), 1);
        assert_eq!(MaxFeatures::Log2.resolve(1), 1);
    }

    #[test]
    fn test_invalid_configs() {
        let config = ForestConfig {
            n_trees: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PlacementError::Config(_))));

        let config = ForestConfig {
            min_samples_split: 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ForestConfig {
            max_features: MaxFeatures::Count(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_partial_json() {
        let config: ForestConfig =
            serde_json::from_str(r#"{"n_trees": 10, "max_features": {"count": 4}}"#).unwrap();
        assert_eq!(config.n_trees, 10);
        assert_eq!(config.max_features, MaxFeatures::Count(4));
        assert_eq!(config.seed, 42);
    }
}
