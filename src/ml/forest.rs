//! Bagged ensemble of decision trees.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{PlacementError, Result};
use crate::ml::config::ForestConfig;
use crate::ml::tree::{DecisionTree, TreeParams};

/// Random forest classifier for a binary target.
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl RandomForest {
    /// Fit a forest.
    ///
    /// Each tree receives its own seed drawn from `config.seed`, so the
    /// fitted ensemble depends only on the data and the configuration even
    /// though trees are built in parallel.
    pub fn fit(features: &[Vec<f64>], labels: &[bool], config: &ForestConfig) -> Result<Self> {
        config.validate()?;

        let n_samples = features.len();
        if n_samples == 0 {
            return Err(PlacementError::training("cannot fit a forest on zero rows"));
        }
        if labels.len() != n_samples {
            return Err(PlacementError::training(format!(
                "{} feature rows but {} labels",
                n_samples,
                labels.len()
            )));
        }
        let n_features = features[0].len();
        if n_features == 0 {
            return Err(PlacementError::training("feature rows are empty"));
        }
        if let Some(pos) = features.iter().position(|row| row.len() != n_features) {
            return Err(PlacementError::training(format!(
                "row {} has {} features, expected {}",
                pos,
                features[pos].len(),
                n_features
            )));
        }

        let params = TreeParams {
            max_depth: config.max_depth,
            min_samples_split: config.min_samples_split,
            min_samples_leaf: config.min_samples_leaf,
            max_features: config.max_features.resolve(n_features),
        };

        let mut master = StdRng::seed_from_u64(config.seed);
        let seeds: Vec<u64> = (0..config.n_trees).map(|_| master.random()).collect();

        let trees: Vec<DecisionTree> = seeds
            .par_iter()
            .map(|&seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                let indices: Vec<usize> = if config.bootstrap {
                    (0..n_samples)
                        .map(|_| rng.random_range(0..n_samples))
                        .collect()
                } else {
                    (0..n_samples).collect()
                };
                DecisionTree::fit(features, labels, &indices, params, &mut rng)
            })
            .collect();

        debug!(
            "Fitted {} trees (max depth {}, max features {})",
            trees.len(),
            trees.iter().map(DecisionTree::depth).max().unwrap_or(0),
            params.max_features
        );

        Ok(Self { trees, n_features })
    }

    /// Mean positive-class probability across all trees.
    ///
    /// `row` must have exactly [`RandomForest::n_features`] values.
    pub fn predict_proba(&self, row: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.predict_proba(row)).sum();
        total / self.trees.len() as f64
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }
}
