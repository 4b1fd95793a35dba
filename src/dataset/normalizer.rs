//! Conversion of raw training tables into numeric features and labels.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::dataset::schema::FeatureSchema;
use crate::dataset::table::RawTable;
use crate::error::{PlacementError, Result};
use crate::label::Placement;

/// Column roles and categorical literals used during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Identifier column, dropped when present.
    pub id_column: String,
    /// Label column, required.
    pub label_column: String,
    /// Feature columns holding `Yes`/`No` text.
    pub binary_columns: Vec<String>,
    /// Label literal for the positive class.
    pub positive_label: String,
    /// Label literal for the negative class.
    pub negative_label: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            id_column: "StudentID".to_string(),
            label_column: "PlacementStatus".to_string(),
            binary_columns: vec![
                "ExtracurricularActivities".to_string(),
                "PlacementTraining".to_string(),
            ],
            positive_label: "Placed".to_string(),
            negative_label: "NotPlaced".to_string(),
        }
    }
}

/// Numeric training set produced by [`DataNormalizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDataset {
    /// Feature order shared by every row of `features`.
    pub schema: FeatureSchema,
    /// One row per record, in schema order.
    pub features: Vec<Vec<f64>>,
    /// One label per record.
    pub labels: Vec<Placement>,
}

impl NormalizedDataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of `(placed, not_placed)` records.
    pub fn class_counts(&self) -> (usize, usize) {
        let placed = self.labels.iter().filter(|l| l.is_placed()).count();
        (placed, self.labels.len() - placed)
    }
}

/// Normalizes a [`RawTable`] into a [`NormalizedDataset`].
#[derive(Debug, Clone, Default)]
pub struct DataNormalizer {
    config: NormalizerConfig,
}

impl DataNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Encode every record of the table.
    ///
    /// The feature schema is the table's column order minus the identifier
    /// and label columns. Any cell that cannot be encoded fails the whole
    /// table with an [`PlacementError::Encoding`] naming the column and value.
    pub fn normalize(&self, table: &RawTable) -> Result<NormalizedDataset> {
        let label_idx = table.column_index(&self.config.label_column).ok_or_else(|| {
            PlacementError::dataset(format!(
                "label column '{}' is missing",
                self.config.label_column
            ))
        })?;

        if table.column_index(&self.config.id_column).is_none() {
            debug!(
                "Identifier column '{}' not present, nothing to drop",
                self.config.id_column
            );
        }

        // (column index in table, column name, binary?)
        let columns: Vec<(usize, &str, bool)> = table
            .headers()
            .iter()
            .enumerate()
            .filter(|(i, name)| *i != label_idx && **name != self.config.id_column)
            .map(|(i, name)| (i, name.as_str(), self.is_binary_column(name)))
            .collect();

        if columns.is_empty() {
            return Err(PlacementError::dataset("table has no feature columns"));
        }
        if table.is_empty() {
            return Err(PlacementError::dataset("table has no data rows"));
        }

        let mut features = Vec::with_capacity(table.len());
        let mut labels = Vec::with_capacity(table.len());

        for record in table.records() {
            let mut row = Vec::with_capacity(columns.len());
            for &(idx, name, binary) in &columns {
                let value = record.get_at(idx).unwrap_or_default();
                let encoded = if binary {
                    self.encode_binary(name, value)?
                } else {
                    Self::encode_numeric(name, value)?
                };
                row.push(encoded);
            }
            features.push(row);

            let label = record.get_at(label_idx).unwrap_or_default();
            labels.push(self.encode_label(label)?);
        }

        let schema = FeatureSchema::new(
            columns.iter().map(|&(_, name, _)| name),
            self.config.binary_columns.iter().map(String::as_str),
        );

        let dataset = NormalizedDataset {
            schema,
            features,
            labels,
        };
        let (placed, not_placed) = dataset.class_counts();
        info!(
            "Normalized {} records with {} features ({} placed, {} not placed)",
            dataset.len(),
            dataset.schema.len(),
            placed,
            not_placed
        );

        Ok(dataset)
    }

    fn is_binary_column(&self, name: &str) -> bool {
        self.config.binary_columns.iter().any(|c| c == name)
    }

    fn encode_binary(&self, column: &str, value: &str) -> Result<f64> {
        match value {
            "Yes" => Ok(1.0),
            "No" => Ok(0.0),
            _ => Err(PlacementError::encoding(column, value)),
        }
    }

    fn encode_numeric(column: &str, value: &str) -> Result<f64> {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| PlacementError::encoding(column, value))
    }

    fn encode_label(&self, value: &str) -> Result<Placement> {
        if value == self.config.positive_label {
            Ok(Placement::Placed)
        } else if value == self.config.negative_label {
            Ok(Placement::NotPlaced)
        } else {
            Err(PlacementError::encoding(&self.config.label_column, value))
        }
    }
}
