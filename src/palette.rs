//! Highlight color palettes, loadable from TOML stylesheets

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// The compiled-in stylesheet. Measured sites are black, predicted sites
/// green, loose-threshold-only sites red.
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "regiosqm"

[colors]
measured = "#000000"
predicted = "#4daf4a"
over-predicted = "#e41a1c"
"##;

/// Errors from loading a palette
#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("failed to read palette file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse palette: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Highlight colors for the three annotation categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    pub measured: String,
    pub predicted: String,
    pub over_predicted: String,
}

#[derive(Deserialize)]
struct PaletteFile {
    metadata: Metadata,
    colors: Colors,
}

#[derive(Deserialize)]
struct Metadata {
    name: String,
}

#[derive(Deserialize)]
struct Colors {
    measured: String,
    predicted: String,
    #[serde(rename = "over-predicted")]
    over_predicted: String,
}

impl Palette {
    /// Load a palette from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse a palette from TOML text
    pub fn from_str(content: &str) -> Result<Self, PaletteError> {
        let file: PaletteFile = toml::from_str(content)?;
        Ok(Self {
            name: file.metadata.name,
            measured: file.colors.measured,
            predicted: file.colors.predicted,
            over_predicted: file.colors.over_predicted,
        })
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("compiled-in palette must parse")
    }
}
