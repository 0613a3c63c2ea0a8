//! Structured markup fragments
//!
//! Conversion rules return a `Fragment` (lines tagged with an indent level)
//! rather than pre-interpolated strings, so indentation is applied in one
//! place and rules cannot produce misaligned KV blocks.

/// One line of a fragment: an indent level plus its text
#[derive(Debug, Clone, PartialEq)]
struct Line {
    level: usize,
    text: String,
}

/// A block of KV markup for a single widget.
///
/// A rendered fragment never carries leading or trailing whitespace; the
/// builder that joins fragments owns inter-fragment spacing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    lines: Vec<Line>,
}

impl Fragment {
    /// Create an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line at the given indent level
    pub fn line(mut self, level: usize, text: impl Into<String>) -> Self {
        self.lines.push(Line {
            level,
            text: text.into(),
        });
        self
    }

    /// Create a single-line KV comment fragment (`# ...`), used for inline
    /// diagnostics such as unknown widget types
    pub fn comment(text: impl AsRef<str>) -> Self {
        Self::new().line(0, format!("# {}", text.as_ref()))
    }

    /// Number of lines in the fragment
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the fragment with `indent_width` spaces per indent level.
    ///
    /// Blank lines render with no indentation so output never carries
    /// trailing spaces.
    pub fn render(&self, indent_width: usize) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !line.text.is_empty() {
                for _ in 0..line.level * indent_width {
                    out.push(' ');
                }
                out.push_str(&line.text);
            }
        }
        out
    }
}
