//! regiosvg - Annotated molecule depictions for regioselectivity predictions
//!
//! This library parses a SMILES string, lays the molecule out in 2D, renders
//! it to SVG, and composites highlight layers marking measured, predicted,
//! and over-predicted reactive sites into a single document.
//!
//! # Example
//!
//! ```rust
//! use regiosvg::{generate_structure, Predictions};
//!
//! let predictions = Predictions::new(vec![2], vec![2]);
//! let svg = generate_structure("n1ccc[nH]1", &predictions, Some(&[1, 2])).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("</svg>"));
//! ```

pub mod compose;
pub mod depict;
pub mod error;
pub mod palette;
pub mod parser;
pub mod renderer;

pub use compose::{generate_structure, generate_structure_with_config, Predictions};
pub use depict::DepictError;
pub use error::ParseError;
pub use palette::{Palette, PaletteError};
pub use parser::{parse, Molecule};
pub use renderer::SvgConfig;

use thiserror::Error;

/// Errors that can occur during the generation pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error during SMILES parsing
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Error during depiction
    #[error("depiction error: {0}")]
    Depict(#[from] DepictError),
}

/// Configuration for the complete generation pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Highlight colors
    pub palette: Palette,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the highlight palette
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_simple_molecule() {
        let svg = generate_structure("CCO", &Predictions::default(), None).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("<path"));
    }

    #[test]
    fn test_generate_with_highlights() {
        let predictions = Predictions::new(vec![1], vec![1, 3]);
        let svg = generate_structure("c1ccncc1", &predictions, None).unwrap();
        assert!(svg.contains("<ellipse"));
        assert!(svg.contains("fill:#4daf4a"));
        assert!(svg.contains("fill:#e41a1c"));
    }

    #[test]
    fn test_generate_with_custom_palette() {
        let palette = Palette::from_str(
            r##"
[metadata]
name = "custom"

[colors]
measured = "#123456"
predicted = "#654321"
over-predicted = "#abcdef"
"##,
        )
        .unwrap();
        let config = RenderConfig::new().with_palette(palette);
        let predictions = Predictions::new(vec![0], vec![]);
        let svg =
            generate_structure_with_config("CCO", &predictions, None, &config).unwrap();
        assert!(svg.contains("fill:#654321"));
    }

    #[test]
    fn test_generate_with_custom_canvas() {
        let config = RenderConfig::new().with_svg(SvgConfig::new().with_canvas(300, 300));
        let svg =
            generate_structure_with_config("CCO", &Predictions::default(), None, &config).unwrap();
        assert!(svg.contains("width='300px'"));
    }

    #[test]
    fn test_parse_error_propagates() {
        let result = generate_structure("C1CC", &Predictions::default(), None);
        assert!(matches!(result, Err(RenderError::Parse(_))));
    }
}
