use serde::Serialize;

use crate::element::bounds::format_bounds;
use crate::element::element_model::CanonicalElement;
use crate::pipeline::assembler::{DiscardedEntry, ProcessingOutcome};

// ============================================================================
// Upload response — JSON payload handed to table/annotation consumers
// ============================================================================

/// Result of processing one upload.
///
/// Built from a `ProcessingOutcome` via `from_outcome()`.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub success: bool,

    /// Elements sorted by test priority, highest first
    pub elements: Vec<CanonicalElement>,

    /// Number of elements kept
    pub total_elements: usize,

    /// Name of the uploaded file
    pub filename: String,

    /// Entries dropped during processing, with reasons
    pub discarded_entries: Vec<DiscardedEntry>,

    /// SHA-1 over the element ids, bounds and priorities
    pub fingerprint: String,

    pub message: String,
}

impl UploadResponse {
    pub fn from_outcome(filename: &str, outcome: ProcessingOutcome) -> Self {
        let total_elements = outcome.elements.len();
        let fingerprint = collection_fingerprint(&outcome.elements);
        Self {
            success: true,
            total_elements,
            filename: filename.to_string(),
            discarded_entries: outcome.discarded,
            fingerprint,
            message: format!("Successfully processed {} UI elements", total_elements),
            elements: outcome.elements,
        }
    }
}

/// Stable digest of a collection: same elements in the same order give the
/// same hex string.
pub fn collection_fingerprint(elements: &[CanonicalElement]) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    for el in elements {
        hasher.update(el.id.as_bytes());
        hasher.update(b"\x1f");
        hasher.update(format_bounds(&el.bounds).as_bytes());
        hasher.update(b"\x1f");
        hasher.update([el.test_priority]);
        hasher.update(b"\x1e");
    }
    format!("{:x}", hasher.finalize())
}
