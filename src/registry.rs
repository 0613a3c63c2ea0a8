//! Widget registry mapping type tags to conversion rules

use std::collections::HashMap;

use crate::compiler::{CompileConfig, Fragment};
use crate::document::PlacedWidget;

/// A pure conversion function from a placed widget to its KV fragment.
///
/// Rules receive the compile configuration so coordinate normalization uses
/// the configured reference canvas instead of a hidden constant.
pub type ConversionRule = Box<dyn Fn(&PlacedWidget, &CompileConfig) -> Fragment + Send + Sync>;

/// Registry of known widget-type conversion rules.
///
/// Constructed at startup and passed by reference into each compilation;
/// there is no process-wide registry state, so tests can run independent
/// instances side by side. Read-only after setup, and safe to share across
/// threads for concurrent compilations.
#[derive(Default)]
pub struct WidgetRegistry {
    rules: HashMap<String, ConversionRule>,
}

impl WidgetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the stock rule set (currently `button`)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("button", Box::new(button_rule));
        registry
    }

    /// Add or replace the rule for a type tag. The last registration for a
    /// given tag wins.
    pub fn register(&mut self, kind: impl Into<String>, rule: ConversionRule) {
        self.rules.insert(kind.into(), rule);
    }

    /// Look up the rule for a type tag. An unknown tag (including the empty
    /// tag) is an expected, recoverable case: the compiler emits a diagnostic
    /// fragment for it rather than failing.
    pub fn lookup(&self, kind: &str) -> Option<&ConversionRule> {
        self.rules.get(kind)
    }

    /// Check whether a rule is registered for a type tag
    pub fn contains(&self, kind: &str) -> bool {
        self.rules.contains_key(kind)
    }

    /// All registered type tags
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|s| s.as_str())
    }
}

impl std::fmt::Debug for WidgetRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.kinds().collect();
        kinds.sort_unstable();
        f.debug_struct("WidgetRegistry").field("kinds", &kinds).finish()
    }
}

/// Stock rule for `button`: a fixed-size control positioned by fractional
/// `pos_hint` projected from the drop coordinates.
fn button_rule(widget: &PlacedWidget, config: &CompileConfig) -> Fragment {
    let hint_x = widget.x / config.canvas.width;
    let hint_y = widget.y / config.canvas.height;
    Fragment::new()
        .line(0, "Button:")
        .line(1, format!("text: \"{}\"", widget.id))
        .line(
            1,
            format!("pos_hint: {{\"x\": {}, \"y\": {}}}", hint_x, hint_y),
        )
        .line(1, "size_hint: None, None")
        .line(1, "size: 100, 50")
}
