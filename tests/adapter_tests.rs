use std::path::Path;

use ui_elements::adapter::{
    load_document, parse_document, resolve_format, uiautomator_xml::parse_uiautomator_xml,
    InputFormat,
};
use ui_elements::element::element_model::ElementType;
use ui_elements::error::AppError;
use ui_elements::pipeline::assembler::process_json_content;

mod common;

use crate::common::utils::fixture;

// =========================================================================
// Format resolution
// =========================================================================

#[test]
fn auto_format_follows_extension() {
    assert_eq!(
        resolve_format("auto", Path::new("dump.json")).unwrap(),
        InputFormat::Json
    );
    assert_eq!(
        resolve_format("auto", Path::new("DUMP.XML")).unwrap(),
        InputFormat::Xml
    );
    assert!(matches!(
        resolve_format("auto", Path::new("dump.txt")),
        Err(AppError::UnsupportedFormat(_))
    ));
}

#[test]
fn explicit_format_overrides_extension() {
    assert_eq!(
        resolve_format("xml", Path::new("dump.txt")).unwrap(),
        InputFormat::Xml
    );
    assert!(resolve_format("yaml", Path::new("dump.json")).is_err());
}

// =========================================================================
// JSON adapter
// =========================================================================

#[test]
fn json_documents_keep_key_order() {
    let data = parse_document(r#"{"b": {}, "a": {}, "c": {}}"#, InputFormat::Json).unwrap();
    let keys: Vec<&String> = data.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn json_byte_order_mark_is_skipped() {
    let data = parse_document("\u{feff}{\"a\": {}}", InputFormat::Json).unwrap();
    assert!(data.is_object());
}

#[test]
fn malformed_json_is_an_error() {
    let err = parse_document("{not json", InputFormat::Json).unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
    assert!(err.to_string().starts_with("Invalid file format"));
}

// =========================================================================
// UI-Automator XML adapter
// =========================================================================

#[test]
fn xml_nodes_become_records_in_document_order() {
    let data = load_document(&fixture("login_screen.xml"), InputFormat::Xml).unwrap();
    let records = data.as_object().unwrap();

    let keys: Vec<&String> = records.keys().collect();
    assert_eq!(keys, vec!["0", "1", "2", "3"]);
    assert_eq!(records["0"]["class"], "android.widget.FrameLayout");
    assert_eq!(records["1"]["resource-id"], "com.example.shop:id/terms");
    assert_eq!(records["2"]["clickable"], "true");
}

#[test]
fn xml_entities_are_decoded() {
    let data = load_document(&fixture("login_screen.xml"), InputFormat::Xml).unwrap();
    assert_eq!(data["1"]["text"], "Terms & Conditions");
    assert_eq!(data["3"]["text"], "a < b & c > d");
}

#[test]
fn xml_fixture_runs_through_the_pipeline() {
    let data = load_document(&fixture("login_screen.xml"), InputFormat::Xml).unwrap();
    let outcome = process_json_content(&data);

    let ranked: Vec<(&str, ElementType, u8)> = outcome
        .elements
        .iter()
        .map(|el| (el.id.as_str(), el.element_type, el.test_priority))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("2", ElementType::Button, 10),
            ("1", ElementType::Text, 7),
            ("3", ElementType::Text, 5),
            ("0", ElementType::Layout, 2),
        ]
    );
}

#[test]
fn xml_attribute_values_may_contain_angle_brackets_and_single_quotes() {
    let records = parse_uiautomator_xml(
        r#"<hierarchy><node text="a > b" hint='say "hi"' bounds="[0,0][1,1]"/></hierarchy>"#,
    )
    .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records["0"]["text"], "a > b");
    assert_eq!(records["0"]["hint"], "say \"hi\"");
    assert_eq!(records["0"]["bounds"], "[0,0][1,1]");
}

#[test]
fn commented_out_nodes_are_not_records() {
    let data = parse_document(
        r#"<hierarchy><node text="a > b" bounds="[0,0][10,10]"/><!-- <node bounds="[1,1][2,2]"/> --></hierarchy>"#,
        InputFormat::Xml,
    )
    .unwrap();

    let records = data.as_object().unwrap();
    assert_eq!(records.len(), 1, "Only the live node is kept: {}", data);
    assert_eq!(records["0"]["bounds"], "[0,0][10,10]");
}

#[test]
fn truncated_xml_is_an_error() {
    for doc in [
        "<hierarchy><node bounds=\"[0,0][1,1]\"",
        "<hierarchy><node bounds=\"[0,0][1,1]\"/>",
        "<hierarchy><node bounds=\"[0,0][1,1]\"></hierarchy>",
    ] {
        let err = parse_document(doc, InputFormat::Xml).unwrap_err();
        assert!(matches!(err, AppError::Xml(_)), "{:?} gave {:?}", doc, err);
        assert!(err.to_string().starts_with("Invalid file format"));
    }
}

#[test]
fn xml_without_nodes_is_empty() {
    assert!(parse_uiautomator_xml("<hierarchy rotation=\"0\"></hierarchy>").unwrap().is_empty());
    assert!(parse_uiautomator_xml("<nodes><nodeinfo/></nodes>").unwrap().is_empty());
}

#[test]
fn non_xml_text_is_rejected() {
    assert!(matches!(parse_uiautomator_xml("{\"a\": 1}"), Err(AppError::Xml(_))));
    assert!(matches!(parse_uiautomator_xml("<!-- only a comment -->"), Err(AppError::Xml(_))));
}

#[test]
fn undefined_entities_are_rejected() {
    let err = parse_uiautomator_xml(r#"<hierarchy><node text="&nbsp;" bounds="[0,0][1,1]"/></hierarchy>"#)
        .unwrap_err();
    assert!(matches!(err, AppError::Xml(_)));
}

#[test]
fn numeric_character_references_are_decoded() {
    let records =
        parse_uiautomator_xml(r#"<hierarchy><node text="&#65;&#x42;" bounds="[0,0][1,1]"/></hierarchy>"#)
            .unwrap();
    assert_eq!(records["0"]["text"], "AB");
}
