//! Interactive terminal form over the inference service.
//!
//! Each round prompts for every schema field, predicts, and prints either the
//! result or the field that was rejected. A rejected input never ends the
//! session; end-of-input does.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::cli::args::OutputFormat;
use crate::cli::output::write_prediction;
use crate::error::Result;
use crate::inference::InferenceService;
use crate::ml::PlacementModel;

/// Entry hint shown next to a known field.
pub fn field_hint(name: &str) -> Option<&'static str> {
    match name {
        "ExtracurricularActivities" | "PlacementTraining" => Some("Enter Yes or No"),
        "CGPA" => Some("Enter CGPA (0–10)"),
        "SSC_Marks" | "HSC_Marks" => Some("Enter Marks out of 100"),
        "AptitudeTestScore" => Some("Enter Score out of 100"),
        "SoftSkillsRating" => Some("Enter Rating out of 10"),
        "Internships" => Some("Enter Number of Internships"),
        "Projects" => Some("Enter Number of Projects"),
        "Certifications" => Some("Enter Number of Certifications"),
        _ => None,
    }
}

/// Counts from one form session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSummary {
    pub predictions: usize,
    pub rejected: usize,
}

/// Run the form until `input` is exhausted.
pub fn run_form<M, R, W>(
    model: &M,
    input: &mut R,
    output: &mut W,
    format: OutputFormat,
) -> Result<FormSummary>
where
    M: PlacementModel,
    R: BufRead,
    W: Write,
{
    let service = InferenceService::new(model);
    let mut summary = FormSummary::default();

    loop {
        let Some(raw) = read_entries(model, input, output)? else {
            break;
        };

        match service.predict(&raw) {
            Ok(result) => {
                write_prediction(output, &result, format, false)?;
                summary.predictions += 1;
            }
            Err(e) if e.is_input_error() => {
                writeln!(output, "Input error: {e}")?;
                summary.rejected += 1;
            }
            Err(e) => return Err(e),
        }
        writeln!(output)?;
    }

    Ok(summary)
}

/// Prompt for every field. Returns `None` at end of input.
fn read_entries<M, R, W>(
    model: &M,
    input: &mut R,
    output: &mut W,
) -> Result<Option<HashMap<String, String>>>
where
    M: PlacementModel,
    R: BufRead,
    W: Write,
{
    let mut raw = HashMap::new();

    for field in model.schema().iter() {
        match field_hint(field) {
            Some(hint) => write!(output, "{field} ({hint}): ")?,
            None => write!(output, "{field}: ")?,
        }
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        raw.insert(field.to_string(), line.trim_end_matches(['\r', '\n']).to_string());
    }

    Ok(Some(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::dataset::FeatureSchema;

    struct CgpaModel {
        schema: FeatureSchema,
    }

    impl PlacementModel for CgpaModel {
        fn schema(&self) -> &FeatureSchema {
            &self.schema
        }

        fn predict_proba(&self, features: &[f64]) -> Result<f64> {
            Ok(if features[0] > 8.0 { 0.9 } else { 0.2 })
        }
    }

    fn model() -> CgpaModel {
        CgpaModel {
            schema: FeatureSchema::new(["CGPA", "PlacementTraining"], ["PlacementTraining"]),
        }
    }

    #[test]
    fn test_field_hints() {
        assert_eq!(field_hint("CGPA"), Some("Enter CGPA (0–10)"));
        assert_eq!(field_hint("PlacementTraining"), Some("Enter Yes or No"));
        assert_eq!(field_hint("Unknown"), None);
    }

    #[test]
    fn test_form_retries_after_input_error() {
        let model = model();
        let mut input = Cursor::new("abc\nYes\n9.1\nyes\n");
        let mut output = Vec::new();

        let summary = run_form(&model, &mut input, &mut output, OutputFormat::Human).unwrap();

        assert_eq!(
            summary,
            FormSummary {
                predictions: 1,
                rejected: 1
            }
        );
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("CGPA (Enter CGPA (0–10)): "));
        assert!(text.contains("Input error: Field 'CGPA' must be numeric, got 'abc'"));
        assert!(text.contains("Prediction: Placed"));
    }

    #[test]
    fn test_form_stops_mid_entry() {
        let model = model();
        let mut input = Cursor::new("7.0\n");
        let mut output = Vec::new();

        let summary = run_form(&model, &mut input, &mut output, OutputFormat::Json).unwrap();
        assert_eq!(summary, FormSummary::default());
    }
}
