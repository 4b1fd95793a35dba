//! Command line argument parsing for the placement CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Placement - predict student placement outcomes
#[derive(Parser, Debug, Clone)]
#[command(name = "placement")]
#[command(about = "Predict student placement outcomes with a random forest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct PlacementArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "PLACEMENT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl PlacementArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on a dataset and report training statistics
    Train(TrainArgs),

    /// Train on a dataset and predict one student's outcome
    Predict(PredictArgs),

    /// List the feature schema derived from a dataset
    Schema(SchemaArgs),

    /// Interactively enter student details and predict repeatedly
    Form(FormArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Training data file (CSV)
    #[arg(value_name = "DATA_FILE")]
    pub data: PathBuf,
}

/// Arguments for a single prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Training data file (CSV)
    #[arg(value_name = "DATA_FILE")]
    pub data: PathBuf,

    /// Feature value, repeatable (e.g. --set CGPA=8.2)
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    pub values: Vec<(String, String)>,

    /// JSON object of feature values; --set entries take precedence
    #[arg(short, long, value_name = "INPUT_FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for listing the schema
#[derive(Parser, Debug, Clone)]
pub struct SchemaArgs {
    /// Training data file (CSV)
    #[arg(value_name = "DATA_FILE")]
    pub data: PathBuf,
}

/// Arguments for the interactive form
#[derive(Parser, Debug, Clone)]
pub struct FormArgs {
    /// Training data file (CSV)
    #[arg(value_name = "DATA_FILE")]
    pub data: PathBuf,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Parse a `NAME=VALUE` pair.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    if name.trim().is_empty() {
        return Err(format!("missing feature name in '{s}'"));
    }
    Ok((name.trim().to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_args() {
        let args = PlacementArgs::try_parse_from([
            "placement",
            "predict",
            "data.csv",
            "--set",
            "CGPA=8.2",
            "-s",
            "PlacementTraining=Yes",
        ])
        .unwrap();

        match args.command {
            Command::Predict(predict) => {
                assert_eq!(predict.data, PathBuf::from("data.csv"));
                assert_eq!(
                    predict.values,
                    vec![
                        ("CGPA".to_string(), "8.2".to_string()),
                        ("PlacementTraining".to_string(), "Yes".to_string()),
                    ]
                );
                assert!(predict.input.is_none());
            }
            other => panic!("Expected predict command, got {other:?}"),
        }
    }

    #[test]
    fn test_verbosity() {
        let args = PlacementArgs::try_parse_from(["placement", "train", "data.csv"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            PlacementArgs::try_parse_from(["placement", "-vvv", "train", "data.csv"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args =
            PlacementArgs::try_parse_from(["placement", "train", "data.csv", "-q", "-v"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            PlacementArgs::try_parse_from(["placement", "--format", "json", "schema", "data.csv"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("CGPA=8.5").unwrap(),
            ("CGPA".to_string(), "8.5".to_string())
        );
        assert_eq!(
            parse_key_value("Projects=").unwrap(),
            ("Projects".to_string(), String::new())
        );
        assert!(parse_key_value("CGPA").is_err());
        assert!(parse_key_value("=3").is_err());
    }
}
