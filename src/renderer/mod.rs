//! Molecule rendering and the raw-graphic adapter consumed by the compositor

mod config;
mod svg;

pub use config::SvgConfig;
pub use svg::{write_document, HIGHLIGHT_COLOR};

use crate::depict::Point;
use crate::parser::ast::Molecule;

/// Render one molecule to vector markup normalized for compositing.
///
/// Two adjustments distinguish this from [`write_document`]: the writer's
/// `xmlns:svg` namespace prefix is rewritten to plain `xmlns`, and the
/// closing lines are stripped so further layers can be appended to the
/// open document. [`fix_layering`](crate::compose::fix_layering) restores
/// the closers at the end of the pipeline.
pub fn render(
    mol: &Molecule,
    coords: &[Point],
    highlights: Option<&[usize]>,
    config: &SvgConfig,
) -> String {
    let document = svg::write_document(mol, coords, highlights, config);
    let normalized = document.replace("xmlns:svg", "xmlns");
    strip_closers(&normalized)
}

fn strip_closers(graphic: &str) -> String {
    graphic
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            trimmed != "</svg>" && trimmed != "</g>"
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depict::prepare;
    use crate::parser::parse;

    #[test]
    fn test_adapter_normalizes_namespace() {
        let mut mol = parse("CC").unwrap();
        let coords = prepare(&mut mol).unwrap();
        let graphic = render(&mol, &coords, None, &SvgConfig::default());
        assert!(graphic.contains("xmlns='http://www.w3.org/2000/svg'"));
        assert!(!graphic.contains("xmlns:svg"));
    }

    #[test]
    fn test_adapter_leaves_document_open() {
        let mut mol = parse("CC").unwrap();
        let coords = prepare(&mut mol).unwrap();
        let graphic = render(&mol, &coords, None, &SvgConfig::default());
        assert!(!graphic.contains("</svg>"));
        assert!(!graphic.contains("</g>"));
        assert!(graphic.contains("<g transform="));
    }
}
