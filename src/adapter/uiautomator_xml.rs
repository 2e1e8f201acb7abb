use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Flatten a `uiautomator dump` hierarchy into raw element records.
///
/// Every `<node>` element becomes one record keyed by its document-order
/// position. Attributes are copied under their own names with entities
/// decoded; nesting is not kept. Comments, processing instructions and
/// CDATA are skipped. Malformed or truncated documents are rejected.
pub fn parse_uiautomator_xml(content: &str) -> AppResult<Map<String, Value>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    if !content.trim_start().starts_with('<') {
        return Err(xml_error("document does not start with a tag"));
    }

    let mut reader = Reader::from_str(content);
    let mut records = Map::new();
    let mut depth: usize = 0;
    let mut saw_root = false;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(xml_error(format!("{} at byte {}", e, reader.error_position())));
            }
        };

        match event {
            Event::Start(tag) => {
                depth += 1;
                saw_root = true;
                push_node(&mut records, &tag)?;
            }
            Event::Empty(tag) => {
                saw_root = true;
                push_node(&mut records, &tag)?;
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(xml_error("no root element"));
    }
    if depth != 0 {
        return Err(xml_error(format!("{} unclosed element(s) at end of document", depth)));
    }

    tracing::debug!(nodes = records.len(), "flattened uiautomator hierarchy");
    Ok(records)
}

fn push_node(records: &mut Map<String, Value>, tag: &BytesStart<'_>) -> AppResult<()> {
    if tag.name().as_ref() != b"node" {
        return Ok(());
    }

    let mut fields = Map::new();
    for attr in tag.attributes() {
        let attr = attr.map_err(|e| xml_error(e.to_string()))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| xml_error(e.to_string()))?;
        fields.insert(name, Value::String(value.into_owned()));
    }

    records.insert(records.len().to_string(), Value::Object(fields));
    Ok(())
}

fn xml_error(msg: impl ToString) -> AppError {
    AppError::Xml(msg.to_string())
}
