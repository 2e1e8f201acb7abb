use std::fmt;

use thiserror::Error;

/// Why the top-level upload could not be treated as an element map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureIssue {
    NotAnObject,
    Empty,
}

impl fmt::Display for StructureIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureIssue::NotAnObject => write!(f, "Data must be a JSON object/dictionary"),
            StructureIssue::Empty => write!(f, "JSON data is empty"),
        }
    }
}

/// Aggregate failures that stop an upload before any element is built.
///
/// Per-entry problems never show up here; the assembler absorbs them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("{0}")]
    InvalidInputStructure(StructureIssue),

    #[error(
        "No valid UI elements found with bounds information \
         ({valid_elements} of {total_elements} entries usable)"
    )]
    NoValidElements {
        total_elements: usize,
        valid_elements: usize,
    },
}

impl PipelineError {
    /// Total entry count, when the input got far enough to be counted.
    pub fn total_elements(&self) -> usize {
        match self {
            PipelineError::InvalidInputStructure(_) => 0,
            PipelineError::NoValidElements { total_elements, .. } => *total_elements,
        }
    }

    pub fn valid_elements(&self) -> usize {
        match self {
            PipelineError::InvalidInputStructure(_) => 0,
            PipelineError::NoValidElements { valid_elements, .. } => *valid_elements,
        }
    }
}
