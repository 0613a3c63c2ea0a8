//! KV document assembly from rendered fragments

use super::{CompileConfig, Fragment};

/// Build the KV document incrementally from widget fragments.
///
/// Fragments are joined in push order with exactly one blank line between
/// them; the finished document has no leading or trailing blank lines. An
/// empty builder finishes to the empty string.
pub struct KvBuilder {
    indent_width: usize,
    fragments: Vec<String>,
}

impl KvBuilder {
    /// Create a new builder
    pub fn new(config: &CompileConfig) -> Self {
        Self {
            indent_width: config.indent_width,
            fragments: vec![],
        }
    }

    /// Render a fragment and append it. Empty fragments are skipped so they
    /// cannot introduce stray separators.
    pub fn push(&mut self, fragment: &Fragment) {
        if fragment.is_empty() {
            return;
        }
        self.fragments.push(fragment.render(self.indent_width));
    }

    /// Number of fragments appended so far
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Join the fragments into the final document text
    pub fn finish(self) -> String {
        self.fragments.join("\n\n")
    }
}
