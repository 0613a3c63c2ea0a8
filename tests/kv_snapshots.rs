//! Snapshot tests pinning the exact compiled output. Compilation is a pure
//! function of its inputs, so these are byte-stable across runs.

use kvforge::{compile, Document, PlacedWidget};

#[test]
fn test_snapshot_single_button() {
    let doc = Document::from_widgets(vec![PlacedWidget::new(
        "widget_1", "button", 100.0, 200.0,
    )]);
    let kv = compile(&doc).unwrap();

    insta::assert_snapshot!(kv, @r#"
    Button:
        text: "widget_1"
        pos_hint: {"x": 0.2, "y": 0.4}
        size_hint: None, None
        size: 100, 50
    "#);
}

#[test]
fn test_snapshot_mixed_document() {
    let doc = Document::from_widgets(vec![
        PlacedWidget::new("widget_1", "button", 0.0, 0.0),
        PlacedWidget::new("widget_2", "slider", 125.0, 375.0),
        PlacedWidget::new("widget_3", "button", 250.0, 125.0),
    ]);
    let kv = compile(&doc).unwrap();

    insta::assert_snapshot!(kv, @r#"
    Button:
        text: "widget_1"
        pos_hint: {"x": 0, "y": 0}
        size_hint: None, None
        size: 100, 50

    # Unknown widget type: slider

    Button:
        text: "widget_3"
        pos_hint: {"x": 0.5, "y": 0.25}
        size_hint: None, None
        size: 100, 50
    "#);
}
