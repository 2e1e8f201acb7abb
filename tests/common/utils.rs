use std::path::PathBuf;

use serde_json::Value;
use ui_elements::element::{
    bounds::parse_bounds, element_model::CanonicalElement, normalize::normalize_element,
};

pub fn fixture(name: &str) -> PathBuf {
    let base = std::env::current_dir().unwrap();
    base.join("tests").join("fixtures").join(name)
}

/// Normalize a raw JSON record that is known to carry valid bounds.
pub fn normalized(id: &str, raw: Value) -> CanonicalElement {
    let bounds = parse_bounds(raw["bounds"].as_str().unwrap()).unwrap();
    normalize_element(id, &raw, bounds).unwrap()
}
