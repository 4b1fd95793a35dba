//! Placement outcome labels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placement outcome of one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Student was not placed (encoded as 0).
    NotPlaced,
    /// Student was placed (encoded as 1, the positive class).
    Placed,
}

impl Placement {
    /// Decode a numeric class flag.
    pub fn from_flag(placed: bool) -> Self {
        if placed {
            Placement::Placed
        } else {
            Placement::NotPlaced
        }
    }

    /// Numeric encoding used by the classifier.
    pub fn as_flag(self) -> u8 {
        match self {
            Placement::NotPlaced => 0,
            Placement::Placed => 1,
        }
    }

    pub fn is_placed(self) -> bool {
        self == Placement::Placed
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() so width and alignment flags apply
        f.pad(match self {
            Placement::Placed => "Placed",
            Placement::NotPlaced => "Not Placed",
        })
    }
}
