use serde::Serialize;
use serde_json::Value;

use crate::element::normalize::RawRecord;
use crate::pipeline::error::{PipelineError, StructureIssue};

/// Outcome of a successful structure check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub total_elements: usize,

    /// Entries that are objects with a non-empty `bounds` value
    pub valid_elements: usize,

    /// `valid_elements / total_elements * 100`
    pub validation_rate: f64,
}

/// Cheap pre-check run before the full pipeline.
///
/// Rejects non-object input, empty input, and input where no entry has a
/// `bounds` value. Entries with bounds that later fail to parse still count
/// as valid here.
pub fn validate_structure(data: &Value) -> Result<ValidationReport, PipelineError> {
    let entries = data
        .as_object()
        .ok_or(PipelineError::InvalidInputStructure(StructureIssue::NotAnObject))?;

    if entries.is_empty() {
        return Err(PipelineError::InvalidInputStructure(StructureIssue::Empty));
    }

    let total_elements = entries.len();
    let valid_elements = entries
        .values()
        .filter_map(RawRecord::from_value)
        .filter(|record| record.has_bounds())
        .count();

    if valid_elements == 0 {
        return Err(PipelineError::NoValidElements {
            total_elements,
            valid_elements,
        });
    }

    Ok(ValidationReport {
        total_elements,
        valid_elements,
        validation_rate: valid_elements as f64 / total_elements as f64 * 100.0,
    })
}

/// Serializable verdict for callers that report both outcomes the same way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationVerdict {
    pub valid: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub total_elements: usize,
    pub valid_elements: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_rate: Option<f64>,
}

impl From<&Result<ValidationReport, PipelineError>> for ValidationVerdict {
    fn from(result: &Result<ValidationReport, PipelineError>) -> Self {
        match result {
            Ok(report) => Self {
                valid: true,
                error: None,
                total_elements: report.total_elements,
                valid_elements: report.valid_elements,
                validation_rate: Some(report.validation_rate),
            },
            Err(err) => Self {
                valid: false,
                error: Some(err.to_string()),
                total_elements: err.total_elements(),
                valid_elements: err.valid_elements(),
                validation_rate: None,
            },
        }
    }
}
