use serde_json::Value;

use crate::pipeline::{
    assembler::{process_elements, ProcessingOutcome},
    error::{PipelineError, StructureIssue},
    validate::{validate_structure, ValidationReport},
};

pub mod adapter;
pub mod cli;
pub mod element;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod report;
pub mod trace;

/// Validate an uploaded element document, then build its element collection.
///
/// Aggregate problems (not an object, empty, no entry with bounds) stop
/// here with the validator's error. Per-entry problems only show up in
/// `ProcessingOutcome::discarded`.
pub fn process_upload(data: &Value) -> Result<(ValidationReport, ProcessingOutcome), PipelineError> {
    let validation = validate_structure(data)?;
    let entries = data
        .as_object()
        .ok_or(PipelineError::InvalidInputStructure(StructureIssue::NotAnObject))?;

    Ok((validation, process_elements(entries)))
}
