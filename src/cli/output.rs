//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::inference::PredictionResult;

/// Width of the probability bars in human output.
const BAR_WIDTH: usize = 30;

/// Result structure for training.
#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingReport {
    pub rows: usize,
    pub features: Vec<String>,
    pub placed: usize,
    pub not_placed: usize,
    pub n_trees: usize,
    pub seed: u64,
    pub training_accuracy: f64,
    pub training_time_ms: u64,
}

/// One feature of the schema listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct SchemaEntry {
    pub position: usize,
    pub name: String,
    pub binary: bool,
    pub hint: Option<String>,
}

/// Serialize a result as JSON.
pub fn write_json<T: Serialize, W: Write>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

/// Output a training report.
pub fn write_training_report<W: Write>(
    out: &mut W,
    report: &TrainingReport,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report, pretty),
        OutputFormat::Human => {
            writeln!(out, "Model trained successfully")?;
            writeln!(out)?;
            writeln!(out, "Rows:              {}", report.rows)?;
            writeln!(out, "Features:          {}", report.features.len())?;
            writeln!(out, "Placed:            {}", report.placed)?;
            writeln!(out, "Not placed:        {}", report.not_placed)?;
            writeln!(out, "Trees:             {}", report.n_trees)?;
            writeln!(out, "Seed:              {}", report.seed)?;
            writeln!(
                out,
                "Training accuracy: {:.2}%",
                report.training_accuracy * 100.0
            )?;
            writeln!(out, "Training time:     {} ms", report.training_time_ms)?;
            Ok(())
        }
    }
}

/// Output the feature schema.
pub fn write_schema<W: Write>(
    out: &mut W,
    entries: &[SchemaEntry],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &entries, pretty),
        OutputFormat::Human => {
            for entry in entries {
                match &entry.hint {
                    Some(hint) => writeln!(out, "{:>2}. {} ({})", entry.position + 1, entry.name, hint)?,
                    None => writeln!(out, "{:>2}. {}", entry.position + 1, entry.name)?,
                }
            }
            Ok(())
        }
    }
}

/// Output a prediction with its placed / not placed comparison.
pub fn write_prediction<W: Write>(
    out: &mut W,
    result: &PredictionResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, result, pretty),
        OutputFormat::Human => {
            writeln!(out, "Prediction: {}", result.label)?;
            writeln!(
                out,
                "Chance of Placement: {:.2}%",
                result.probability * 100.0
            )?;
            writeln!(out)?;
            for bar in result.chart() {
                writeln!(
                    out,
                    "{:<10}  {}  {:>5.1}%",
                    bar.label,
                    render_bar(bar.probability),
                    bar.probability * 100.0
                )?;
            }
            Ok(())
        }
    }
}

/// Render a probability as a fixed-width text bar.
fn render_bar(probability: f64) -> String {
    let filled = (probability.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
