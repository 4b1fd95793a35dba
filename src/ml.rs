//! Random forest classifier used to predict placement outcomes.
//!
//! - [`ClassifierTrainer`] fits a [`RandomForest`] on a normalized dataset and
//!   wraps it in an immutable [`FittedModel`].
//! - [`PlacementModel`] is the interface the inference layer consumes.
//! - [`ForestConfig`] holds the hyperparameters, including the fixed seed
//!   that makes training reproducible.

pub mod config;
pub mod forest;
pub mod model;
pub mod trainer;
pub mod tree;

pub use config::{ForestConfig, MaxFeatures};
pub use forest::RandomForest;
pub use model::{FittedModel, ModelMetadata, PlacementModel, TrainingStats};
pub use trainer::ClassifierTrainer;
pub use tree::DecisionTree;
