//! Error types for the placement predictor.
//!
//! All failures are represented by the [`PlacementError`] enum. Errors fall
//! into two groups:
//!
//! - Startup errors ([`PlacementError::Encoding`], [`PlacementError::Dataset`],
//!   [`PlacementError::Training`]) mean there is no usable model and are fatal.
//! - Input errors ([`PlacementError::MissingField`],
//!   [`PlacementError::InvalidBinaryValue`],
//!   [`PlacementError::InvalidNumericValue`]) belong to a single prediction
//!   call. The caller reports them and accepts the next input.
//!
//! # Examples
//!
//! ```
//! use placement_predictor::error::{PlacementError, Result};
//!
//! fn check_cgpa(value: &str) -> Result<f64> {
//!     value
//!         .parse::<f64>()
//!         .map_err(|_| PlacementError::invalid_numeric("CGPA", value))
//! }
//!
//! let err = check_cgpa("abc").unwrap_err();
//! assert!(err.is_input_error());
//! assert_eq!(err.field(), Some("CGPA"));
//! ```

use std::io;

use thiserror::Error;

/// The main error type for placement prediction.
#[derive(Error, Debug)]
pub enum PlacementError {
    /// A categorical training value could not be mapped to its numeric code.
    #[error("Encoding error: column '{column}' has unrecognized value '{value}'")]
    Encoding { column: String, value: String },

    /// The training table is structurally unusable.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// The normalized training set cannot be fitted.
    #[error("Training error: {0}")]
    Training(String),

    /// A schema field was absent (or blank) in the raw input.
    #[error("Missing value for field '{0}'")]
    MissingField(String),

    /// A Yes/No field received something other than yes or no.
    #[error("Field '{field}' must be Yes or No, got '{value}'")]
    InvalidBinaryValue { field: String, value: String },

    /// A numeric field received a value that is not a finite number.
    #[error("Field '{field}' must be numeric, got '{value}'")]
    InvalidNumericValue { field: String, value: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (file operations, stdin, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with PlacementError.
pub type Result<T> = std::result::Result<T, PlacementError>;

impl PlacementError {
    /// Create a new encoding error.
    pub fn encoding<C: Into<String>, V: Into<String>>(column: C, value: V) -> Self {
        PlacementError::Encoding {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        PlacementError::Dataset(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        PlacementError::Training(msg.into())
    }

    /// Create a new missing field error.
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        PlacementError::MissingField(field.into())
    }

    /// Create a new invalid binary value error.
    pub fn invalid_binary<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        PlacementError::InvalidBinaryValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a new invalid numeric value error.
    pub fn invalid_numeric<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        PlacementError::InvalidNumericValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PlacementError::Config(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PlacementError::Other(msg.into())
    }

    /// Whether this error is scoped to a single prediction call.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PlacementError::MissingField(_)
                | PlacementError::InvalidBinaryValue { .. }
                | PlacementError::InvalidNumericValue { .. }
        )
    }

    /// The field or column the error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            PlacementError::Encoding { column, .. } => Some(column),
            PlacementError::MissingField(field) => Some(field),
            PlacementError::InvalidBinaryValue { field, .. }
            | PlacementError::InvalidNumericValue { field, .. } => Some(field),
            _ => None,
        }
    }
}
