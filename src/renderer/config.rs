//! Configuration for the molecule SVG renderer

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Padding between the drawing and the canvas edge
    pub padding: f64,

    /// Upper bound on pixels per bond; keeps tiny molecules from ballooning
    pub max_bond_px: f64,

    /// Atom label font size in pixels
    pub font_size: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            padding: 40.0,
            max_bond_px: 60.0,
            font_size: 15.0,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the padding around the drawing
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the atom label font size
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }
}
