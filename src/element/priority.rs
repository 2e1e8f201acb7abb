use crate::element::element_model::{CanonicalElement, ElementType};

pub const MAX_PRIORITY: u8 = 10;

/// Elements larger than this many square pixels earn a bonus point.
pub const LARGE_AREA_THRESHOLD: i128 = 10_000;

/// A scoring condition and the points it contributes.
pub struct PriorityRule {
    pub name: &'static str,
    pub points: u8,
    pub applies: fn(&CanonicalElement) -> bool,
}

pub const PRIORITY_RULES: [PriorityRule; 8] = [
    PriorityRule {
        name: "clickable",
        points: 5,
        applies: |el| el.clickable,
    },
    PriorityRule {
        name: "has_text",
        points: 3,
        applies: |el| !el.text.trim().is_empty(),
    },
    PriorityRule {
        name: "input",
        points: 4,
        applies: |el| el.element_type == ElementType::Input,
    },
    PriorityRule {
        name: "button",
        points: 4,
        applies: |el| el.element_type == ElementType::Button,
    },
    PriorityRule {
        name: "visible",
        points: 2,
        applies: |el| el.visible,
    },
    PriorityRule {
        name: "enabled",
        points: 1,
        applies: |el| el.enabled,
    },
    PriorityRule {
        name: "resource_id",
        points: 2,
        applies: |el| !el.resource_id.is_empty(),
    },
    PriorityRule {
        name: "large_area",
        points: 1,
        applies: |el| el.area() > LARGE_AREA_THRESHOLD,
    },
];

/// Sum the points of every matching rule, capped at [`MAX_PRIORITY`].
///
/// Expects `element_type` to be set already.
pub fn calculate_test_priority(element: &CanonicalElement) -> u8 {
    let score: u32 = PRIORITY_RULES
        .iter()
        .filter(|rule| (rule.applies)(element))
        .map(|rule| u32::from(rule.points))
        .sum();

    score.min(u32::from(MAX_PRIORITY)) as u8
}

/// Names of the rules that fired for `element`, in table order.
pub fn matched_rules(element: &CanonicalElement) -> Vec<&'static str> {
    PRIORITY_RULES
        .iter()
        .filter(|rule| (rule.applies)(element))
        .map(|rule| rule.name)
        .collect()
}
