//! # Placement Predictor
//!
//! Predicts whether a student will be placed from academic and
//! extracurricular attributes.
//!
//! ## Pipeline
//!
//! - [`dataset`] loads and normalizes the training table, fixing the
//!   feature schema
//! - [`ml`] trains a seeded random forest once into an immutable model
//! - [`inference`] validates raw per-field inputs and returns a label with
//!   the placement probability
//! - [`cli`] is a thin terminal front end over the above
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use placement_predictor::config::PredictorConfig;
//! use placement_predictor::inference::InferenceService;
//! use placement_predictor::pipeline::build_model_from_csv;
//!
//! # fn main() -> placement_predictor::error::Result<()> {
//! let model = build_model_from_csv("placementdata.csv", &PredictorConfig::default())?;
//! let service = InferenceService::new(&model);
//!
//! let mut raw = HashMap::new();
//! raw.insert("CGPA", "8.4");
//! // ... one entry per feature
//! let result = service.predict(&raw)?;
//! println!("{} ({:.1}%)", result.label, result.probability * 100.0);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod inference;
pub mod label;
pub mod ml;
pub mod pipeline;

pub mod prelude {
    pub use crate::config::PredictorConfig;
    pub use crate::dataset::{CsvTableReader, DataNormalizer, FeatureSchema, RawTable};
    pub use crate::error::{PlacementError, Result};
    pub use crate::inference::{InferenceService, PredictionResult};
    pub use crate::label::Placement;
    pub use crate::ml::{ClassifierTrainer, FittedModel, ForestConfig, PlacementModel};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
