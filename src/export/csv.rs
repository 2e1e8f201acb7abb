use crate::element::bounds::format_bounds;
use crate::element::element_model::CanonicalElement;

// ============================================================================
// CSV exporter — annotation table
// ============================================================================

pub const CSV_HEADERS: [&str; 15] = [
    "ID",
    "Element Type",
    "Class Name",
    "Text Content",
    "Resource ID",
    "Bounds",
    "Width",
    "Height",
    "Center X",
    "Center Y",
    "Clickable",
    "Enabled",
    "Visible",
    "Test Priority",
    "Package",
];

/// Render the collection as a CSV table, one row per element in the
/// order given.
///
/// ```text
/// ID,Element Type,Class Name,Text Content,...
/// 0,Button,android.widget.Button,Submit,...,Yes,Yes,Yes,10,com.example
/// ```
pub fn export_elements_to_csv(elements: &[CanonicalElement]) -> String {
    let mut out = String::new();
    write_row(&mut out, CSV_HEADERS.iter().map(|h| h.to_string()));

    for el in elements {
        write_row(&mut out, element_row(el).into_iter());
    }

    out
}

/// Column values for one element, in header order.
pub fn element_row(el: &CanonicalElement) -> Vec<String> {
    vec![
        el.id.clone(),
        el.element_type.to_string(),
        el.class_name.clone(),
        el.text.clone(),
        el.resource_id.clone(),
        format_bounds(&el.bounds),
        el.width.to_string(),
        el.height.to_string(),
        el.center_x.to_string(),
        el.center_y.to_string(),
        yes_no(el.clickable).to_string(),
        yes_no(el.enabled).to_string(),
        yes_no(el.visible).to_string(),
        el.test_priority.to_string(),
        el.package_name.clone(),
    ]
}

fn write_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let row = fields.map(|f| escape_csv(&f)).collect::<Vec<_>>().join(",");
    out.push_str(&row);
    out.push_str("\r\n");
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Quote a field when it holds a delimiter, quote, or line break.
pub fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
