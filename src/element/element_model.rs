use std::fmt;

use serde::Serialize;

// ============================================================================
// Geometry
// ============================================================================

/// Screen rectangle as reported by UI inspection tooling.
///
/// Corners are kept exactly as parsed. Nothing guarantees `x2 >= x1` or
/// `y2 >= y1`, so derived width and height may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rectangle {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Rectangle {
    pub fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn width(&self) -> i64 {
        self.x2.saturating_sub(self.x1)
    }

    pub fn height(&self) -> i64 {
        self.y2.saturating_sub(self.y1)
    }
}

// ============================================================================
// Element type
// ============================================================================

/// Semantic role inferred from the class name and clickable flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementType {
    Button,
    Input,
    Text,
    Image,
    Layout,
    List,
    Other,
}

impl ElementType {
    /// Every type in classifier precedence order, `Other` last.
    pub const ALL: [ElementType; 7] = [
        ElementType::Button,
        ElementType::Input,
        ElementType::Text,
        ElementType::Image,
        ElementType::Layout,
        ElementType::List,
        ElementType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Button => "Button",
            ElementType::Input => "Input",
            ElementType::Text => "Text",
            ElementType::Image => "Image",
            ElementType::Layout => "Layout",
            ElementType::List => "List",
            ElementType::Other => "Other",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Canonical element
// ============================================================================

/// Normalized, strictly-typed UI element.
///
/// Built once from a single raw record and never mutated afterwards. Field
/// names serialize to the keys the upload response has always used
/// (`class`, `package`, camelCase for the rest).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalElement {
    /// Key of the raw record this element came from
    pub id: String,

    pub bounds: Rectangle,

    #[serde(rename = "class")]
    pub class_name: String,

    /// Whitespace-collapsed text with `"` doubled for CSV safety
    pub text: String,

    pub resource_id: String,
    pub content_desc: String,

    pub clickable: bool,
    pub enabled: bool,
    pub visible: bool,
    pub focused: bool,
    pub scrollable: bool,

    #[serde(rename = "package")]
    pub package_name: String,

    pub index: String,
    pub hint: String,
    pub display_id: String,
    pub source: String,

    pub width: i64,
    pub height: i64,
    pub center_x: i64,
    pub center_y: i64,

    pub element_type: ElementType,

    /// Heuristic importance in `0..=10`
    pub test_priority: u8,
}

impl CanonicalElement {
    /// Signed area. Negative when exactly one side is inverted.
    pub fn area(&self) -> i128 {
        self.width as i128 * self.height as i128
    }
}

/// Elements ordered by `test_priority`, highest first.
pub type ElementCollection = Vec<CanonicalElement>;
