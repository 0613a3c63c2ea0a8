//! The in-memory layout document produced by the editor canvas

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a layout document from disk
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read layout file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse layout TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// One widget instance dropped onto the canvas.
///
/// Coordinates are raw canvas pixels captured at drop time, relative to the
/// canvas top-left origin. They are not normalized; the compiler projects
/// them into the KV `pos_hint` space.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlacedWidget {
    /// Unique identifier within a document (`widget_1`, `widget_2`, ...)
    pub id: String,
    /// Widget-type tag selecting the conversion rule (e.g. `button`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Horizontal pixel offset from the canvas origin
    pub x: f64,
    /// Vertical pixel offset from the canvas origin
    pub y: f64,
}

impl PlacedWidget {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            x,
            y,
        }
    }
}

/// Generates widget identifiers for one editing session.
///
/// The counter is explicit state owned by the caller rather than an ambient
/// process-wide counter, so tests can seed it and assert on the ids it
/// produces. Ids are monotonic and never reused within a session.
#[derive(Debug, Clone)]
pub struct WidgetIdGenerator {
    next: u64,
}

impl WidgetIdGenerator {
    /// Create a generator whose first id is `widget_1`
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a generator whose first id is `widget_<n>`
    pub fn starting_at(n: u64) -> Self {
        Self { next: n }
    }

    /// Produce the next id and advance the counter
    pub fn next_id(&mut self) -> String {
        let id = format!("widget_{}", self.next);
        self.next += 1;
        id
    }

    /// The counter value the next id will use
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for WidgetIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// The ordered sequence of placed widgets for one editing session.
///
/// Insertion order is significant: it determines the emission order of the
/// generated markup. The compiler never reorders, sorts, or deduplicates.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    #[serde(default)]
    widgets: Vec<PlacedWidget>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from an already-ordered widget sequence
    pub fn from_widgets(widgets: Vec<PlacedWidget>) -> Self {
        Self { widgets }
    }

    /// Load a document from a TOML layout file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a document from TOML text
    pub fn from_toml(content: &str) -> Result<Self, DocumentError> {
        Ok(toml::from_str(content)?)
    }

    /// Append a widget, preserving insertion order
    pub fn push(&mut self, widget: PlacedWidget) {
        self.widgets.push(widget);
    }

    /// Record a drop event: mint an id from the generator and append the
    /// new widget. Returns a reference to the placed widget.
    pub fn place(
        &mut self,
        ids: &mut WidgetIdGenerator,
        kind: impl Into<String>,
        x: f64,
        y: f64,
    ) -> &PlacedWidget {
        let widget = PlacedWidget::new(ids.next_id(), kind, x, y);
        self.widgets.push(widget);
        self.widgets.last().unwrap()
    }

    /// Iterate widgets in insertion order
    pub fn widgets(&self) -> impl Iterator<Item = &PlacedWidget> {
        self.widgets.iter()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generator_starts_at_one() {
        let mut ids = WidgetIdGenerator::new();
        assert_eq!(ids.next_id(), "widget_1");
        assert_eq!(ids.next_id(), "widget_2");
        assert_eq!(ids.next_id(), "widget_3");
    }

    #[test]
    fn test_id_generator_seeded() {
        let mut ids = WidgetIdGenerator::starting_at(41);
        assert_eq!(ids.next_id(), "widget_41");
        assert_eq!(ids.peek(), 42);
    }

    #[test]
    fn test_place_preserves_order() {
        let mut ids = WidgetIdGenerator::new();
        let mut doc = Document::new();
        doc.place(&mut ids, "button", 10.0, 20.0);
        doc.place(&mut ids, "label", 30.0, 40.0);

        let kinds: Vec<_> = doc.widgets().map(|w| w.kind.as_str()).collect();
        assert_eq!(kinds, vec!["button", "label"]);
        let ids: Vec<_> = doc.widgets().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["widget_1", "widget_2"]);
    }

    #[test]
    fn test_from_toml() {
        let doc = Document::from_toml(
            r#"
            [[widgets]]
            id = "widget_1"
            type = "button"
            x = 100.0
            y = 200.0

            [[widgets]]
            id = "widget_2"
            type = "button"
            x = 250
            y = 125
        "#,
        )
        .expect("layout should parse");

        assert_eq!(doc.len(), 2);
        let first = doc.widgets().next().unwrap();
        assert_eq!(first.id, "widget_1");
        assert_eq!(first.kind, "button");
        assert_eq!(first.x, 100.0);
    }

    #[test]
    fn test_from_toml_empty_is_empty_document() {
        let doc = Document::from_toml("").expect("empty layout should parse");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        let result = Document::from_toml("widgets = \"not a list\"");
        assert!(matches!(result, Err(DocumentError::ParseError(_))));
    }
}
