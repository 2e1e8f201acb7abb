use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    pipeline::{assembler::ProcessingOutcome, error::PipelineError, validate::ValidationReport},
    report::report_model::collection_fingerprint,
};

/// One line of the run trace: what a command did with one upload.
#[derive(Debug, Clone, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,

    pub command: String,
    pub filename: String,

    pub total_entries: Option<usize>,
    pub valid_entries: Option<usize>,
    pub element_count: Option<usize>,

    pub discarded: Vec<String>,

    pub fingerprint: Option<String>,
    pub error: Option<String>,
}

impl TraceEvent {
    pub fn now(command: &str, filename: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            command: command.to_string(),
            filename: filename.to_string(),
            total_entries: None,
            valid_entries: None,
            element_count: None,
            discarded: vec![],
            fingerprint: None,
            error: None,
        }
    }

    pub fn with_validation(mut self, report: &ValidationReport) -> Self {
        self.total_entries = Some(report.total_elements);
        self.valid_entries = Some(report.valid_elements);
        self
    }

    pub fn with_outcome(mut self, outcome: &ProcessingOutcome) -> Self {
        self.element_count = Some(outcome.elements.len());
        self.discarded = outcome
            .discarded
            .iter()
            .map(|d| format!("{}: {}", d.id, d.reason))
            .collect();
        self.fingerprint = Some(collection_fingerprint(&outcome.elements));
        self
    }

    pub fn with_pipeline_error(mut self, err: &PipelineError) -> Self {
        if let PipelineError::NoValidElements { .. } = err {
            self.total_entries = Some(err.total_elements());
            self.valid_entries = Some(err.valid_elements());
        }
        self.error = Some(err.to_string());
        self
    }

    pub fn with_error(mut self, error: impl ToString) -> Self {
        self.error = Some(error.to_string());
        self
    }
}
