//! Command implementations for the placement CLI.

use std::collections::HashMap;
use std::io::{self, Write};
use std::path::Path;

use log::info;
use serde_json::Value;

use crate::cli::args::*;
use crate::cli::form::{field_hint, run_form};
use crate::cli::output::*;
use crate::config::PredictorConfig;
use crate::error::{PlacementError, Result};
use crate::inference::InferenceService;
use crate::ml::{FittedModel, PlacementModel};
use crate::pipeline::build_model_from_csv;

/// Execute a CLI command.
pub fn execute_command(args: PlacementArgs) -> Result<()> {
    let config = load_config(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::Train(train_args) => train(train_args, &config, &args, &mut out),
        Command::Predict(predict_args) => predict(predict_args, &config, &args, &mut out),
        Command::Schema(schema_args) => show_schema(schema_args, &config, &args, &mut out),
        Command::Form(form_args) => form(form_args, &config, &args, &mut out),
    }
}

fn load_config(args: &PlacementArgs) -> Result<PredictorConfig> {
    match &args.config {
        Some(path) => PredictorConfig::from_file(path),
        None => Ok(PredictorConfig::default()),
    }
}

fn train_model(data: &Path, config: &PredictorConfig) -> Result<FittedModel> {
    build_model_from_csv(data, config)
}

/// Train and print the training report.
fn train<W: Write>(
    args: &TrainArgs,
    config: &PredictorConfig,
    cli_args: &PlacementArgs,
    out: &mut W,
) -> Result<()> {
    let model = train_model(&args.data, config)?;
    let stats = model.stats();

    let report = TrainingReport {
        rows: model.metadata().training_examples,
        features: model.schema().names().to_vec(),
        placed: stats.placed,
        not_placed: stats.not_placed,
        n_trees: model.n_trees(),
        seed: config.forest.seed,
        training_accuracy: stats.training_accuracy,
        training_time_ms: stats.training_time_ms,
    };

    write_training_report(out, &report, cli_args.output_format, cli_args.pretty)
}

/// Train, then predict a single input.
fn predict<W: Write>(
    args: &PredictArgs,
    config: &PredictorConfig,
    cli_args: &PlacementArgs,
    out: &mut W,
) -> Result<()> {
    let mut raw = match &args.input {
        Some(path) => load_input_file(path)?,
        None => HashMap::new(),
    };
    raw.extend(args.values.iter().cloned());

    let model = train_model(&args.data, config)?;
    let result = InferenceService::new(&model).predict(&raw)?;
    info!(
        "Prediction: {} (probability {:.4})",
        result.label, result.probability
    );

    write_prediction(out, &result, cli_args.output_format, cli_args.pretty)
}

/// Print the feature schema with entry hints.
fn show_schema<W: Write>(
    args: &SchemaArgs,
    config: &PredictorConfig,
    cli_args: &PlacementArgs,
    out: &mut W,
) -> Result<()> {
    let model = train_model(&args.data, config)?;
    let schema = model.schema();

    let entries: Vec<SchemaEntry> = schema
        .iter()
        .enumerate()
        .map(|(position, name)| SchemaEntry {
            position,
            name: name.to_string(),
            binary: schema.is_binary(name),
            hint: field_hint(name).map(str::to_string),
        })
        .collect();

    write_schema(out, &entries, cli_args.output_format, cli_args.pretty)
}

/// Run the interactive form on stdin.
fn form<W: Write>(
    args: &FormArgs,
    config: &PredictorConfig,
    cli_args: &PlacementArgs,
    out: &mut W,
) -> Result<()> {
    let model = train_model(&args.data, config)?;
    if cli_args.verbosity() > 0 {
        writeln!(
            out,
            "Model ready ({} trees). Enter student details, Ctrl-D to finish.",
            model.n_trees()
        )?;
        writeln!(out)?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let summary = run_form(&model, &mut input, out, cli_args.output_format)?;
    info!(
        "Form finished: {} predictions, {} rejected inputs",
        summary.predictions, summary.rejected
    );
    Ok(())
}

/// Load a JSON object of feature values. Numbers are accepted as well as
/// strings.
fn load_input_file(path: &Path) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content)?;
    let Value::Object(map) = value else {
        return Err(PlacementError::other(format!(
            "input file {} must contain a JSON object",
            path.display()
        )));
    };

    Ok(map
        .into_iter()
        .map(|(name, value)| {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (name, text)
        })
        .collect())
}
