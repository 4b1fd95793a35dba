//! Per-request placement prediction.
//!
//! [`InferenceService`] validates a raw name → text mapping against the
//! model's feature schema, encodes it the same way the training data was
//! encoded, and returns a [`PredictionResult`]. Validation is field by
//! field and happens before the model is consulted, so a rejected input
//! never reaches the classifier.

pub mod result;
pub mod service;

pub use result::{PredictionResult, ProbabilityBar};
pub use service::InferenceService;
