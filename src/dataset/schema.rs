//! Ordered feature schema fixed at training time.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Ordered list of feature names plus the subset encoded from Yes/No text.
///
/// Inference inputs are looked up by name and placed at the position the
/// name has here; the model only ever sees positional vectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    names: Vec<String>,
    binary: HashSet<String>,
}

impl FeatureSchema {
    /// Create a schema from ordered names. `binary` names that are not part
    /// of the schema are ignored.
    pub fn new<I, S, B, T>(names: I, binary: B) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        B: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let binary = binary
            .into_iter()
            .map(Into::into)
            .filter(|b: &String| names.contains(b))
            .collect();
        FeatureSchema { names, binary }
    }

    /// Feature names in model order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of a feature in encoded vectors.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Whether the feature is a Yes/No field.
    pub fn is_binary(&self, name: &str) -> bool {
        self.binary.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
