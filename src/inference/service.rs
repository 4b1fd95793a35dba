//! Validation, encoding, and scoring of raw prediction inputs.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use log::debug;

use crate::error::{PlacementError, Result};
use crate::inference::result::PredictionResult;
use crate::ml::model::PlacementModel;

/// Serves predictions against a borrowed, immutable model.
#[derive(Debug)]
pub struct InferenceService<'m, M: PlacementModel> {
    model: &'m M,
}

impl<M: PlacementModel> Clone for InferenceService<'_, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: PlacementModel> Copy for InferenceService<'_, M> {}

impl<'m, M: PlacementModel> InferenceService<'m, M> {
    pub fn new(model: &'m M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &'m M {
        self.model
    }

    /// Encode a raw input into a feature vector in schema order.
    ///
    /// Values are trimmed first; a blank value counts as missing. Binary
    /// fields accept `yes`/`no` in any case, every other field must be a
    /// finite number. The first failing field (in schema order) is reported.
    pub fn encode<K, V, S>(&self, raw: &HashMap<K, V, S>) -> Result<Vec<f64>>
    where
        K: Borrow<str> + Hash + Eq,
        V: AsRef<str>,
        S: BuildHasher,
    {
        let schema = self.model.schema();
        let mut encoded = Vec::with_capacity(schema.len());

        for field in schema.iter() {
            let value = raw
                .get(field)
                .map(|v| v.as_ref().trim())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| PlacementError::missing_field(field))?;

            let number = if schema.is_binary(field) {
                encode_binary(field, value)?
            } else {
                encode_numeric(field, value)?
            };
            encoded.push(number);
        }

        Ok(encoded)
    }

    /// Validate, encode, and score one raw input.
    pub fn predict<K, V, S>(&self, raw: &HashMap<K, V, S>) -> Result<PredictionResult>
    where
        K: Borrow<str> + Hash + Eq,
        V: AsRef<str>,
        S: BuildHasher,
    {
        let features = self.encode(raw).inspect_err(|e| {
            debug!("Rejected prediction input: {e}");
        })?;

        let probability = self.model.predict_proba(&features)?;
        let result = PredictionResult::from_probability(probability);

        debug!(
            "Predicted {} with placement probability {:.4}",
            result.label, result.probability
        );
        Ok(result)
    }
}

fn encode_binary(field: &str, value: &str) -> Result<f64> {
    if value.eq_ignore_ascii_case("yes") {
        Ok(1.0)
    } else if value.eq_ignore_ascii_case("no") {
        Ok(0.0)
    } else {
        Err(PlacementError::invalid_binary(field, value))
    }
}

fn encode_numeric(field: &str, value: &str) -> Result<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PlacementError::invalid_numeric(field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::dataset::schema::FeatureSchema;
    use crate::label::Placement;

    /// Scores by CGPA alone and counts how often it is consulted.
    struct StubModel {
        schema: FeatureSchema,
        calls: AtomicUsize,
    }

    impl StubModel {
        fn new() -> Self {
            Self {
                schema: FeatureSchema::new(
                    ["CGPA", "ExtracurricularActivities", "SSC_Marks"],
                    ["ExtracurricularActivities"],
                ),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl PlacementModel for StubModel {
        fn schema(&self) -> &FeatureSchema {
            &self.schema
        }

        fn predict_proba(&self, features: &[f64]) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(features[0] / 10.0)
        }
    }

    fn input(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_encode_in_schema_order() {
        let model = StubModel::new();
        let service = InferenceService::new(&model);

        let raw = input(&[
            ("SSC_Marks", "72"),
            ("CGPA", " 8.2 "),
            ("ExtracurricularActivities", "Yes"),
        ]);

        assert_eq!(service.encode(&raw).unwrap(), vec![8.2, 1.0, 72.0]);
    }

    #[test]
    fn test_predict() {
        let model = StubModel::new();
        let service = InferenceService::new(&model);

        let raw = input(&[
            ("CGPA", "9.0"),
            ("ExtracurricularActivities", "no"),
            ("SSC_Marks", "80"),
        ]);
        let result = service.predict(&raw).unwrap();

        assert_eq!(result.label, Placement::Placed);
        assert!((result.probability - 0.9).abs() < 1e-12);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_binary_case_insensitive() {
        let model = StubModel::new();
        let service = InferenceService::new(&model);

        for (value, expected) in [("Yes", 1.0), ("yes", 1.0), ("NO", 0.0), ("No", 0.0)] {
            let raw = input(&[
                ("CGPA", "7"),
                ("ExtracurricularActivities", value),
                ("SSC_Marks", "60"),
            ]);
            assert_eq!(service.encode(&raw).unwrap()[1], expected);
        }
    }

    #[test]
    fn test_blank_value_is_missing() {
        let model = StubModel::new();
        let service = InferenceService::new(&model);

        let raw = input(&[
            ("CGPA", "   "),
            ("ExtracurricularActivities", "Yes"),
            ("SSC_Marks", "60"),
        ]);
        let err = service.predict(&raw).unwrap_err();

        assert!(matches!(err, PlacementError::MissingField(ref f) if f == "CGPA"));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let model = StubModel::new();
        let service = InferenceService::new(&model);

        let raw = input(&[
            ("CGPA", "NaN"),
            ("ExtracurricularActivities", "Yes"),
            ("SSC_Marks", "60"),
        ]);
        let err = service.encode(&raw).unwrap_err();

        assert!(matches!(
            err,
            PlacementError::InvalidNumericValue { ref field, ref value } if field == "CGPA" && value == "NaN"
        ));
    }

    #[test]
    fn test_borrowed_keys() {
        let model = StubModel::new();
        let service = InferenceService::new(&model);

        let raw: HashMap<&str, &str> = [
            ("CGPA", "3.0"),
            ("ExtracurricularActivities", "No"),
            ("SSC_Marks", "40"),
        ]
        .into_iter()
        .collect();

        let result = service.predict(&raw).unwrap();
        assert_eq!(result.label, Placement::NotPlaced);
    }
}
