use crate::element::element_model::{CanonicalElement, ElementType};

/// One classification rule: the tag it assigns, the class-name keywords
/// that trigger it, and whether a clickable element matches regardless of
/// its class name.
#[derive(Debug, Clone, Copy)]
pub struct ClassRule {
    pub element_type: ElementType,
    pub keywords: &'static [&'static str],
    pub matches_clickable: bool,
}

impl ClassRule {
    /// `class_name` must already be lower-cased.
    pub fn matches(&self, class_name: &str, clickable: bool) -> bool {
        (self.matches_clickable && clickable)
            || self.keywords.iter().any(|k| class_name.contains(k))
    }
}

/// Rules in precedence order. The first match wins, so a class name such
/// as `ButtonText` is always a `Button`.
pub const CLASS_RULES: [ClassRule; 6] = [
    ClassRule {
        element_type: ElementType::Button,
        keywords: &["button", "clickable"],
        matches_clickable: true,
    },
    ClassRule {
        element_type: ElementType::Input,
        keywords: &["edittext", "edit", "input"],
        matches_clickable: false,
    },
    ClassRule {
        element_type: ElementType::Text,
        keywords: &["textview", "text", "label"],
        matches_clickable: false,
    },
    ClassRule {
        element_type: ElementType::Image,
        keywords: &["imageview", "image", "icon"],
        matches_clickable: false,
    },
    ClassRule {
        element_type: ElementType::Layout,
        keywords: &["layout", "viewgroup", "container"],
        matches_clickable: false,
    },
    ClassRule {
        element_type: ElementType::List,
        keywords: &["recyclerview", "listview", "list"],
        matches_clickable: false,
    },
];

pub fn classify_class_name(class_name: &str, clickable: bool) -> ElementType {
    let lower = class_name.to_lowercase();

    CLASS_RULES
        .iter()
        .find(|rule| rule.matches(&lower, clickable))
        .map(|rule| rule.element_type)
        .unwrap_or(ElementType::Other)
}

pub fn classify_element_type(element: &CanonicalElement) -> ElementType {
    classify_class_name(&element.class_name, element.clickable)
}
