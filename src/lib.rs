//! kvforge - A layout-to-KV markup compiler for visual editors
//!
//! This library turns an ordered sequence of widgets placed on an editor
//! canvas into declarative Kivy KV markup text.
//!
//! # Example
//!
//! ```rust
//! use kvforge::{compile, Document, PlacedWidget};
//!
//! let doc = Document::from_widgets(vec![PlacedWidget::new(
//!     "widget_1", "button", 100.0, 200.0,
//! )]);
//! let kv = compile(&doc).unwrap();
//! assert!(kv.starts_with("Button:"));
//! ```

pub mod compiler;
pub mod document;
pub mod error;
pub mod registry;

pub use compiler::{compile_document, CanvasSize, CompileConfig, Fragment, KvBuilder};
pub use document::{Document, DocumentError, PlacedWidget, WidgetIdGenerator};
pub use error::CompileError;
pub use registry::{ConversionRule, WidgetRegistry};

/// Compile a document to KV markup with the stock registry and default
/// configuration
///
/// # Example
///
/// ```rust
/// use kvforge::{compile, Document, PlacedWidget, WidgetIdGenerator};
///
/// let mut ids = WidgetIdGenerator::new();
/// let mut doc = Document::new();
/// doc.place(&mut ids, "button", 100.0, 200.0);
///
/// let kv = compile(&doc).unwrap();
/// assert!(kv.contains("text: \"widget_1\""));
/// assert!(kv.contains("pos_hint: {\"x\": 0.2, \"y\": 0.4}"));
/// ```
pub fn compile(document: &Document) -> Result<String, CompileError> {
    compile_document(
        document,
        &WidgetRegistry::with_defaults(),
        &CompileConfig::default(),
    )
}

/// Compile a document with a caller-supplied registry and configuration
///
/// # Example
///
/// ```rust
/// use kvforge::{
///     compile_with_config, CompileConfig, Document, Fragment, PlacedWidget, WidgetRegistry,
/// };
///
/// let mut registry = WidgetRegistry::with_defaults();
/// registry.register(
///     "label",
///     Box::new(|widget, _config| {
///         Fragment::new()
///             .line(0, "Label:")
///             .line(1, format!("text: \"{}\"", widget.id))
///     }),
/// );
///
/// let doc = Document::from_widgets(vec![PlacedWidget::new("widget_1", "label", 0.0, 0.0)]);
/// let kv = compile_with_config(&doc, &registry, &CompileConfig::default()).unwrap();
/// assert!(kv.starts_with("Label:"));
/// ```
pub fn compile_with_config(
    document: &Document,
    registry: &WidgetRegistry,
    config: &CompileConfig,
) -> Result<String, CompileError> {
    compile_document(document, registry, config)
}
