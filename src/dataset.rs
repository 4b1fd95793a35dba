//! Training data ingestion and normalization.
//!
//! The training set arrives as a [`RawTable`]: a header row naming the
//! columns and string cells aligned with it. [`DataNormalizer`] turns the
//! table into a numeric feature matrix, a label vector, and the
//! [`FeatureSchema`] that every later inference call is encoded against.
//!
//! # Examples
//!
//! ```
//! use placement_predictor::dataset::{CsvTableReader, DataNormalizer};
//!
//! # fn main() -> placement_predictor::error::Result<()> {
//! let csv = "StudentID,CGPA,PlacementTraining,PlacementStatus\n\
//!            1,8.5,Yes,Placed\n\
//!            2,6.1,No,NotPlaced";
//! let table = CsvTableReader::new().read_str(csv)?;
//! let dataset = DataNormalizer::default().normalize(&table)?;
//!
//! assert_eq!(dataset.schema.names(), ["CGPA", "PlacementTraining"]);
//! assert_eq!(dataset.features[0], vec![8.5, 1.0]);
//! # Ok(())
//! # }
//! ```

pub mod normalizer;
pub mod reader;
pub mod schema;
pub mod table;

pub use normalizer::{DataNormalizer, NormalizedDataset, NormalizerConfig};
pub use reader::CsvTableReader;
pub use schema::FeatureSchema;
pub use table::{RawRecord, RawTable};
