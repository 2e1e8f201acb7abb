use crate::element::bounds::format_bounds;
use crate::element::element_model::ElementType;
use crate::element::priority::matched_rules;
use crate::pipeline::assembler::ProcessingOutcome;
use crate::pipeline::validate::ValidationReport;

/// How many of the highest-priority elements the summary lists.
pub const TOP_ELEMENTS: usize = 10;

// ============================================================================
// Console reporter — human-readable upload summary
// ============================================================================

/// Format a processing outcome for the terminal.
///
/// Produces output like:
/// ```text
/// === Upload: login.json ===
///
/// Entries: 5 total, 4 with bounds (80.0%)
/// Elements: 3 kept, 2 discarded
///
/// By type:
///   Button   2
///   Text     1
///
/// Discarded:
///   [4] missing bounds
///
/// Top elements:
///   10  [0] Button  "Sign in"  [0,0][100,50]  (clickable, has_text, button, ...)
/// ```
pub fn format_console_summary(
    filename: &str,
    validation: &ValidationReport,
    outcome: &ProcessingOutcome,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Upload: {} ===\n\n", filename));
    out.push_str(&format!(
        "Entries: {} total, {} with bounds ({:.1}%)\n",
        validation.total_elements, validation.valid_elements, validation.validation_rate
    ));
    out.push_str(&format!(
        "Elements: {} kept, {} discarded\n",
        outcome.elements.len(),
        outcome.discarded_count()
    ));

    let counts: Vec<(ElementType, usize)> = ElementType::ALL
        .iter()
        .map(|t| {
            let n = outcome.elements.iter().filter(|el| el.element_type == *t).count();
            (*t, n)
        })
        .filter(|(_, n)| *n > 0)
        .collect();

    if !counts.is_empty() {
        out.push_str("\nBy type:\n");
        for (element_type, n) in counts {
            out.push_str(&format!("  {:<8} {}\n", element_type.as_str(), n));
        }
    }

    if !outcome.discarded.is_empty() {
        out.push_str("\nDiscarded:\n");
        for entry in &outcome.discarded {
            out.push_str(&format!("  [{}] {}\n", entry.id, entry.reason));
        }
    }

    if !outcome.elements.is_empty() {
        out.push_str("\nTop elements:\n");
        for el in outcome.elements.iter().take(TOP_ELEMENTS) {
            out.push_str(&format!(
                "  {:>2}  [{}] {}  \"{}\"  {}  ({})\n",
                el.test_priority,
                el.id,
                el.element_type,
                el.text,
                format_bounds(&el.bounds),
                matched_rules(el).join(", ")
            ));
        }
    }

    out
}
