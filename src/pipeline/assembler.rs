use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::element::{
    bounds::{parse_bounds, BoundsUnparseable},
    classifier::classify_element_type,
    element_model::{CanonicalElement, ElementCollection},
    normalize::{normalize_element, RawRecord, BOUNDS},
    priority::calculate_test_priority,
};

// ============================================================================
// Discarded entries
// ============================================================================

/// Why an entry was left out of the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DiscardReason {
    /// The value is not an object
    NotAnObject,

    /// No `bounds` string, or an empty one
    MissingBounds,

    /// `bounds` present but not four integers
    BoundsUnparseable { bounds: String },
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardReason::NotAnObject => write!(f, "not an object"),
            DiscardReason::MissingBounds => write!(f, "missing bounds"),
            DiscardReason::BoundsUnparseable { bounds } => {
                write!(f, "unparseable bounds {:?}", bounds)
            }
        }
    }
}

impl From<BoundsUnparseable> for DiscardReason {
    fn from(err: BoundsUnparseable) -> Self {
        DiscardReason::BoundsUnparseable { bounds: err.raw }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscardedEntry {
    pub id: String,
    #[serde(flatten)]
    pub reason: DiscardReason,
}

// ============================================================================
// Processing outcome
// ============================================================================

/// The element collection plus everything that was dropped on the way.
#[derive(Debug, Clone, Default)]
pub struct ProcessingOutcome {
    /// Sorted by `test_priority` descending, input order kept on ties
    pub elements: ElementCollection,

    /// Dropped entries, in input order
    pub discarded: Vec<DiscardedEntry>,
}

impl ProcessingOutcome {
    pub fn total_entries(&self) -> usize {
        self.elements.len() + self.discarded.len()
    }

    pub fn discarded_count(&self) -> usize {
        self.discarded.len()
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Run every entry through parse, normalize, classify and score.
///
/// Bad entries are recorded in `discarded` and never abort the run.
pub fn process_elements(data: &Map<String, Value>) -> ProcessingOutcome {
    let mut outcome = ProcessingOutcome::default();

    for (element_id, value) in data {
        match build_element(element_id, value) {
            Ok(element) => outcome.elements.push(element),
            Err(reason) => {
                tracing::debug!(id = %element_id, %reason, "discarding entry");
                outcome.discarded.push(DiscardedEntry {
                    id: element_id.clone(),
                    reason,
                });
            }
        }
    }

    // Stable: equal priorities keep input order
    outcome
        .elements
        .sort_by(|a, b| b.test_priority.cmp(&a.test_priority));

    outcome
}

/// Like [`process_elements`], for a document of unknown shape.
///
/// Anything but an object produces an empty outcome; run
/// `validate_structure` first to report why.
pub fn process_json_content(data: &Value) -> ProcessingOutcome {
    data.as_object()
        .map(process_elements)
        .unwrap_or_default()
}

fn build_element(element_id: &str, value: &Value) -> Result<CanonicalElement, DiscardReason> {
    let record = RawRecord::from_value(value).ok_or(DiscardReason::NotAnObject)?;
    let raw_bounds = match record.bounds() {
        Some(raw) => raw,
        None if record.has_bounds() => {
            return Err(DiscardReason::BoundsUnparseable {
                bounds: record.string(BOUNDS),
            });
        }
        None => return Err(DiscardReason::MissingBounds),
    };
    let bounds = parse_bounds(raw_bounds)?;

    let mut element =
        normalize_element(element_id, value, bounds).ok_or(DiscardReason::MissingBounds)?;
    element.element_type = classify_element_type(&element);
    element.test_priority = calculate_test_priority(&element);

    Ok(element)
}
