//! Startup pipeline: load, normalize, and train once.

use std::path::Path;

use log::info;

use crate::config::PredictorConfig;
use crate::dataset::{CsvTableReader, DataNormalizer, RawTable};
use crate::error::Result;
use crate::ml::{ClassifierTrainer, FittedModel};

/// Normalize a training table and fit the model on all of it.
pub fn build_model(table: &RawTable, config: &PredictorConfig) -> Result<FittedModel> {
    let dataset = DataNormalizer::new(config.normalizer.clone()).normalize(table)?;
    ClassifierTrainer::new(config.forest.clone()).train_dataset(&dataset)
}

/// Read a CSV training file and build the model from it.
pub fn build_model_from_csv<P: AsRef<Path>>(
    path: P,
    config: &PredictorConfig,
) -> Result<FittedModel> {
    let path = path.as_ref();
    info!("Loading training data from {}", path.display());
    let table = CsvTableReader::new().read_path(path)?;
    build_model(&table, config)
}
