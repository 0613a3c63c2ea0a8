//! KV markup compilation from layout documents

pub mod config;
pub mod fragment;
pub mod kv;

pub use config::{CanvasSize, CompileConfig};
pub use fragment::Fragment;
pub use kv::KvBuilder;

use std::collections::HashSet;

use crate::document::Document;
use crate::error::CompileError;
use crate::registry::WidgetRegistry;

/// Compile a document into one KV text blob.
///
/// Widgets are emitted in document order, one fragment each, joined by a
/// single blank line. A widget whose type tag has no registered rule yields
/// an inline diagnostic comment instead of aborting: one unsupported widget
/// must never block the rest of the document from compiling.
///
/// Pure function of its inputs: no I/O, no shared state, byte-identical
/// output for identical inputs.
pub fn compile_document(
    document: &Document,
    registry: &WidgetRegistry,
    config: &CompileConfig,
) -> Result<String, CompileError> {
    check_unique_ids(document)?;

    let mut builder = KvBuilder::new(config);
    for widget in document.widgets() {
        match registry.lookup(&widget.kind) {
            Some(rule) => builder.push(&rule(widget, config)),
            None => builder.push(&Fragment::comment(format!(
                "Unknown widget type: {}",
                widget.kind
            ))),
        }
    }
    Ok(builder.finish())
}

/// The unique-id invariant is checked up front: a document that violates it
/// has no well-defined output, so nothing is emitted for it.
fn check_unique_ids(document: &Document) -> Result<(), CompileError> {
    let mut seen = HashSet::new();
    for widget in document.widgets() {
        if !seen.insert(widget.id.as_str()) {
            return Err(CompileError::DuplicateWidgetId {
                id: widget.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PlacedWidget;

    fn button(id: &str, x: f64, y: f64) -> PlacedWidget {
        PlacedWidget::new(id, "button", x, y)
    }

    #[test]
    fn test_empty_document_compiles_to_empty_string() {
        let out = compile_document(
            &Document::new(),
            &WidgetRegistry::with_defaults(),
            &CompileConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_unknown_type_emits_diagnostic_comment() {
        let doc = Document::from_widgets(vec![PlacedWidget::new("widget_1", "slider", 5.0, 5.0)]);
        let out = compile_document(
            &doc,
            &WidgetRegistry::with_defaults(),
            &CompileConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "# Unknown widget type: slider");
    }

    #[test]
    fn test_empty_type_tag_treated_as_unknown() {
        let doc = Document::from_widgets(vec![PlacedWidget::new("widget_1", "", 5.0, 5.0)]);
        let out = compile_document(
            &doc,
            &WidgetRegistry::with_defaults(),
            &CompileConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "# Unknown widget type: ");
    }

    #[test]
    fn test_duplicate_id_fails_fast() {
        let doc = Document::from_widgets(vec![
            button("widget_1", 0.0, 0.0),
            button("widget_1", 50.0, 50.0),
        ]);
        let result = compile_document(
            &doc,
            &WidgetRegistry::with_defaults(),
            &CompileConfig::default(),
        );
        assert!(matches!(
            result,
            Err(CompileError::DuplicateWidgetId { id }) if id == "widget_1"
        ));
    }
}
