use serde_json::json;
use ui_elements::element::classifier::classify_element_type;
use ui_elements::element::element_model::{CanonicalElement, ElementType};
use ui_elements::element::priority::{calculate_test_priority, matched_rules, MAX_PRIORITY};

mod common;

use crate::common::utils::normalized;

fn classified(raw: serde_json::Value) -> CanonicalElement {
    let mut el = normalized("0", raw);
    el.element_type = classify_element_type(&el);
    el
}

#[test]
fn fully_loaded_button_is_capped_at_ten() {
    // 5 + 3 + 4 + 2 + 1 + 2 = 17 before the cap; area 200 adds nothing
    let el = classified(json!({
        "bounds": "[0,0][20,10]",
        "class": "android.widget.Button",
        "text": "Submit",
        "resource-id": "btn1",
        "clickable": "true",
        "enabled": "true",
        "visible-to-user": "true"
    }));

    assert_eq!(el.element_type, ElementType::Button);
    assert_eq!(el.area(), 200);
    assert_eq!(calculate_test_priority(&el), 10);
    assert_eq!(
        matched_rules(&el),
        vec!["clickable", "has_text", "button", "visible", "enabled", "resource_id"]
    );
}

#[test]
fn bare_element_scores_zero() {
    let el = classified(json!({ "bounds": "[0,0][10,10]", "class": "android.view.View" }));
    assert_eq!(calculate_test_priority(&el), 0);
    assert!(matched_rules(&el).is_empty());
}

#[test]
fn individual_rules_add_their_points() {
    let input = classified(json!({ "bounds": "[0,0][10,10]", "class": "EditText" }));
    assert_eq!(calculate_test_priority(&input), 4, "Input +4");

    let text = classified(json!({ "bounds": "[0,0][10,10]", "class": "View", "text": "hi" }));
    assert_eq!(calculate_test_priority(&text), 3, "Text content +3");

    let visible =
        classified(json!({ "bounds": "[0,0][10,10]", "class": "View", "visible-to-user": "true" }));
    assert_eq!(calculate_test_priority(&visible), 2, "Visible +2");

    let enabled = classified(json!({ "bounds": "[0,0][10,10]", "class": "View", "enabled": true }));
    assert_eq!(calculate_test_priority(&enabled), 1, "Enabled +1");

    let rid = classified(json!({ "bounds": "[0,0][10,10]", "class": "View", "resource-id": "x" }));
    assert_eq!(calculate_test_priority(&rid), 2, "Resource id +2");
}

#[test]
fn area_bonus_requires_strictly_more_than_ten_thousand() {
    let exact = classified(json!({ "bounds": "[0,0][100,100]", "class": "View" }));
    assert_eq!(calculate_test_priority(&exact), 0, "Area 10000 is not large");

    let large = classified(json!({ "bounds": "[0,0][100,101]", "class": "View" }));
    assert_eq!(calculate_test_priority(&large), 1, "Area 10100 is large");
}

#[test]
fn negative_area_earns_no_bonus() {
    let el = classified(json!({ "bounds": "[500,0][0,500]", "class": "View" }));
    assert_eq!(el.area(), -250_000);
    assert_eq!(calculate_test_priority(&el), 0);
}

#[test]
fn doubly_inverted_rectangle_has_positive_area() {
    let el = classified(json!({ "bounds": "[500,500][0,0]", "class": "View" }));
    assert_eq!(el.area(), 250_000);
    assert_eq!(calculate_test_priority(&el), 1);
}

#[test]
fn whitespace_only_text_is_not_text() {
    let el = classified(json!({ "bounds": "[0,0][1,1]", "class": "View", "text": " \n\t " }));
    assert_eq!(el.text, "");
    assert_eq!(calculate_test_priority(&el), 0);
}

#[test]
fn priority_stays_in_range_for_every_flag_combination() {
    for mask in 0u32..256 {
        let flag = |bit: u32| if mask & (1 << bit) != 0 { "true" } else { "false" };
        let bounds = if mask & 64 != 0 { "[0,0][1000,1000]" } else { "[1000,0][0,1000]" };
        let class = if mask & 128 != 0 { "EditText" } else { "ImageView" };
        let text = if mask & 8 != 0 { "label" } else { "" };
        let resource_id = if mask & 16 != 0 { "id" } else { "" };

        let el = classified(json!({
            "bounds": bounds,
            "class": class,
            "clickable": flag(0),
            "enabled": flag(1),
            "visible-to-user": flag(2),
            "text": text,
            "resource-id": resource_id,
            "focused": flag(5),
        }));
        let score = calculate_test_priority(&el);
        assert!(score <= MAX_PRIORITY, "mask {} scored {}", mask, score);
    }
}
