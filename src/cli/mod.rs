//! Command Line Interface for the placement predictor.

pub mod args;
pub mod commands;
pub mod form;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
