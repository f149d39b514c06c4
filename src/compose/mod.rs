//! Highlight compositing: layered regioselectivity annotations in one SVG
//!
//! The pipeline renders the same molecule several times (once bare, once
//! per highlight category), then works on the rendered text: extract the
//! marker lines, restyle and recolor them, splice them into the base
//! document, and repair paint order. All passes are line-oriented string
//! rewrites; the renderer's markup conventions are the interface.

mod extract;
mod merge;
mod style;
mod zorder;

pub use extract::{extract_highlights, HighlightMode};
pub use merge::merge;
pub use style::{emphasize, recolor};
pub use zorder::fix_layering;

use crate::depict::{prepare, Point};
use crate::parser::{parse, Molecule};
use crate::renderer::render;
use crate::{RenderConfig, RenderError};

/// Atom index sets produced by a regioselectivity prediction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predictions {
    /// Sites predicted reactive at the tight threshold.
    pub predicted: Vec<usize>,
    /// Sites predicted reactive at the loose threshold (a superset of
    /// `predicted` in practice, though that is not enforced).
    pub over_predicted: Vec<usize>,
}

impl Predictions {
    pub fn new(predicted: Vec<usize>, over_predicted: Vec<usize>) -> Self {
        Self {
            predicted,
            over_predicted,
        }
    }

    /// Loose-threshold sites not already claimed by the tight threshold,
    /// in first-seen order. These get their own color so the two
    /// confidence levels stay distinguishable.
    pub fn over_predicted_only(&self) -> Vec<usize> {
        let mut seen = Vec::new();
        for &atom in &self.over_predicted {
            if !self.predicted.contains(&atom) && !seen.contains(&atom) {
                seen.push(atom);
            }
        }
        seen
    }
}

/// Render `smiles` with its prediction highlights under the default
/// configuration. See [`generate_structure_with_config`].
pub fn generate_structure(
    smiles: &str,
    predictions: &Predictions,
    measured: Option<&[usize]>,
) -> Result<String, RenderError> {
    generate_structure_with_config(smiles, predictions, measured, &RenderConfig::default())
}

/// Build the annotated depiction: parse and lay out once, render one
/// graphic per highlight category, composite them into a single document.
///
/// Layers merge in fixed priority order: over-predicted, then predicted,
/// then measured. Markers paint in that order, so measured (ground-truth)
/// rings stay visible on atoms shared with a prediction disk.
pub fn generate_structure_with_config(
    smiles: &str,
    predictions: &Predictions,
    measured: Option<&[usize]>,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let mut mol = parse(smiles)?;
    let coords = prepare(&mut mol)?;

    let palette = &config.palette;
    let base = render(&mol, &coords, None, &config.svg);

    let measured_layer = match measured {
        Some(atoms) if !atoms.is_empty() => highlight_layer(
            &mol,
            &coords,
            atoms,
            HighlightMode::Measured,
            &palette.measured,
            config,
        ),
        _ => Vec::new(),
    };
    let predicted_layer = highlight_layer(
        &mol,
        &coords,
        &predictions.predicted,
        HighlightMode::Predicted,
        &palette.predicted,
        config,
    );
    let over_layer = highlight_layer(
        &mol,
        &coords,
        &predictions.over_predicted_only(),
        HighlightMode::Predicted,
        &palette.over_predicted,
        config,
    );

    let mut markers = over_layer;
    markers.extend(predicted_layer);
    markers.extend(measured_layer);

    let composed = emphasize(&merge(&base, &markers));
    Ok(fix_layering(&composed))
}

/// One highlight category: render with markers, pull the marker lines
/// out, restyle, recolor.
fn highlight_layer(
    mol: &Molecule,
    coords: &[Point],
    atoms: &[usize],
    mode: HighlightMode,
    color: &str,
    config: &RenderConfig,
) -> Vec<String> {
    if atoms.is_empty() {
        return Vec::new();
    }
    let graphic = render(mol, coords, Some(atoms), &config.svg);
    recolor(&extract_highlights(&graphic, mode), color)
}
