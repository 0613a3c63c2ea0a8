//! Configuration for KV compilation

/// Reference canvas dimensions used to project pixel coordinates into the
/// fractional `pos_hint` space.
///
/// The editor captures raw pixel offsets; KV `pos_hint` wants `0..1`
/// fractions. The divisor is an explicit input here rather than a hidden
/// constant so callers can match their actual canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        // The editor's assumed reference canvas
        Self::new(500.0, 500.0)
    }
}

/// Configuration options for KV output
#[derive(Debug, Clone, PartialEq)]
pub struct CompileConfig {
    /// Reference canvas for coordinate normalization
    pub canvas: CanvasSize,

    /// Spaces per indent level in the generated markup
    pub indent_width: usize,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            indent_width: 4,
        }
    }
}

impl CompileConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference canvas dimensions
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = CanvasSize::new(width, height);
        self
    }

    /// Set the spaces per indent level
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompileConfig::default();
        assert_eq!(config.canvas, CanvasSize::new(500.0, 500.0));
        assert_eq!(config.indent_width, 4);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CompileConfig::new()
            .with_canvas(800.0, 600.0)
            .with_indent_width(2);

        assert_eq!(config.canvas.width, 800.0);
        assert_eq!(config.canvas.height, 600.0);
        assert_eq!(config.indent_width, 2);
    }
}
