use serde_json::Value;

use crate::error::AppResult;

/// Parse a JSON upload. Key order is preserved so that ties in priority
/// keep the order of the document.
pub fn parse_json_document(content: &str) -> AppResult<Value> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    Ok(serde_json::from_str(content)?)
}
