use serde_json::{Map, Value};

use crate::element::element_model::{CanonicalElement, ElementType, Rectangle};

// ============================================================================
// Field table
// ============================================================================

/// A raw string attribute and the value used when it is absent or null.
#[derive(Debug, Clone, Copy)]
pub struct StringField {
    pub key: &'static str,
    pub default: &'static str,
}

/// A raw attribute holding a loosely-typed boolean. Absent means `false`.
#[derive(Debug, Clone, Copy)]
pub struct BoolField {
    pub key: &'static str,
}

pub const BOUNDS: StringField = StringField { key: "bounds", default: "" };
pub const CLASS: StringField = StringField { key: "class", default: "" };
pub const TEXT: StringField = StringField { key: "text", default: "" };
pub const RESOURCE_ID: StringField = StringField { key: "resource-id", default: "" };
pub const CONTENT_DESC: StringField = StringField { key: "content-desc", default: "" };
pub const PACKAGE: StringField = StringField { key: "package", default: "" };
pub const INDEX: StringField = StringField { key: "index", default: "0" };
pub const HINT: StringField = StringField { key: "hint", default: "" };
pub const DISPLAY_ID: StringField = StringField { key: "display-id", default: "0" };
pub const SOURCE: StringField = StringField { key: "source", default: "UiAutomation" };

pub const CLICKABLE: BoolField = BoolField { key: "clickable" };
pub const ENABLED: BoolField = BoolField { key: "enabled" };
pub const VISIBLE: BoolField = BoolField { key: "visible-to-user" };
pub const FOCUSED: BoolField = BoolField { key: "focused" };
pub const SCROLLABLE: BoolField = BoolField { key: "scrollable" };

// ============================================================================
// Typed-default accessor over a raw record
// ============================================================================

/// Read-only view of one raw element record.
///
/// All attribute reads go through [`RawRecord::string`] and
/// [`RawRecord::flag`], so the defaulting rules live in one place.
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> RawRecord<'a> {
    /// `None` when the value is not a JSON object.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(|fields| Self { fields })
    }

    /// String form of a field, or the field's default when absent or null.
    ///
    /// Non-string scalars keep their JSON spelling (`3`, `true`).
    pub fn string(&self, field: StringField) -> String {
        match self.fields.get(field.key) {
            None | Some(Value::Null) => field.default.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn flag(&self, field: BoolField) -> bool {
        parse_loose_boolean(self.fields.get(field.key))
    }

    /// The bounds string, if present as a non-empty string.
    pub fn bounds(&self) -> Option<&'a str> {
        match self.fields.get(BOUNDS.key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether the `bounds` key carries any usable (non-empty, non-null) value.
    pub fn has_bounds(&self) -> bool {
        match self.fields.get(BOUNDS.key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
        }
    }
}

// ============================================================================
// Coercions
// ============================================================================

/// Coerce an upstream boolean that may arrive as a JSON bool or a string.
///
/// The value's string form is lower-cased and compared with `"true"`.
/// Absent values count as `"false"`, and anything else (null, numbers,
/// `"yes"`, `" true"`) is `false`.
pub fn parse_loose_boolean(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.to_lowercase() == "true",
        _ => false,
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators,
/// which regex `\s` also matches.
fn is_text_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Collapse whitespace runs to one space, trim, then double every `"`.
pub fn clean_text_content(text: &str) -> String {
    text.split(is_text_space)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('"', "\"\"")
}

// ============================================================================
// Normalization
// ============================================================================

/// Build the canonical form of one raw record.
///
/// Returns `None` when `value` is not an object or carries no bounds
/// string. The element comes back unclassified (`Other`, priority 0); the
/// assembler fills both in.
pub fn normalize_element(
    element_id: &str,
    value: &Value,
    bounds: Rectangle,
) -> Option<CanonicalElement> {
    let record = RawRecord::from_value(value)?;
    record.bounds()?;

    let width = bounds.width();
    let height = bounds.height();

    Some(CanonicalElement {
        id: element_id.to_string(),
        bounds,
        class_name: record.string(CLASS),
        text: clean_text_content(&record.string(TEXT)),
        resource_id: record.string(RESOURCE_ID),
        content_desc: record.string(CONTENT_DESC),
        clickable: record.flag(CLICKABLE),
        enabled: record.flag(ENABLED),
        visible: record.flag(VISIBLE),
        focused: record.flag(FOCUSED),
        scrollable: record.flag(SCROLLABLE),
        package_name: record.string(PACKAGE),
        index: record.string(INDEX),
        hint: record.string(HINT),
        display_id: record.string(DISPLAY_ID),
        source: record.string(SOURCE),
        width,
        height,
        center_x: bounds.x1.saturating_add(width.div_euclid(2)),
        center_y: bounds.y1.saturating_add(height.div_euclid(2)),
        element_type: ElementType::Other,
        test_priority: 0,
    })
}
