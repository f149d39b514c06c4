//! Scans rendered markup for highlight markers and restyles their strokes

use crate::renderer::HIGHLIGHT_COLOR;

/// How a highlight layer is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightMode {
    /// Ground-truth atoms: hollow ring with a bold outline.
    Measured,
    /// Model output: plain filled disk, no outline.
    Predicted,
}

/// Collect every highlight ellipse line of a rendered graphic, restyled
/// for `mode`, in order of appearance.
///
/// Order of appearance equals the atom order passed to the renderer.
/// Position is the correlation key between atoms and markers, so callers
/// must not reorder the result.
pub fn extract_highlights(graphic: &str, mode: HighlightMode) -> Vec<String> {
    graphic
        .lines()
        .filter(|line| line.contains("ellipse"))
        .map(|line| match mode {
            HighlightMode::Measured => line
                .replace(&format!("fill:{HIGHLIGHT_COLOR}"), "fill:none")
                .replace("stroke-width:1px;", "stroke-width:6px;"),
            HighlightMode::Predicted => line.replace("stroke-width:1px;", "stroke-width:0;"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "<ellipse cx='200.0' cy='120.0' rx='18.0' ry='18.0' class='atom-3' style='fill:#FF7F7F;fill-rule:evenodd;stroke:#FF7F7F;stroke-width:1px;stroke-linecap:butt;stroke-linejoin:miter;stroke-opacity:1' />";

    fn doc() -> String {
        format!(
            "<svg xmlns='http://www.w3.org/2000/svg'>\n<g transform='translate(0.0,0.0)'>\n{MARKER}\n<path class='bond-0' d='M 1,1 L 2,2' style='stroke-width:2px' />"
        )
    }

    #[test]
    fn test_measured_mode_makes_a_hollow_ring() {
        let markers = extract_highlights(&doc(), HighlightMode::Measured);
        assert_eq!(markers.len(), 1);
        assert!(markers[0].contains("fill:none"));
        assert!(markers[0].contains("stroke-width:6px;"));
        // the stroke color keeps the placeholder for later recoloring
        assert!(markers[0].contains("stroke:#FF7F7F"));
    }

    #[test]
    fn test_predicted_mode_drops_the_outline() {
        let markers = extract_highlights(&doc(), HighlightMode::Predicted);
        assert_eq!(markers.len(), 1);
        assert!(markers[0].contains("fill:#FF7F7F"));
        assert!(markers[0].contains("stroke-width:0;"));
    }

    #[test]
    fn test_non_marker_lines_are_ignored() {
        let markers = extract_highlights("<svg>\n<path d='M 0,0' />", HighlightMode::Predicted);
        assert!(markers.is_empty());
    }

    #[test]
    fn test_order_of_appearance_is_kept() {
        let doc = format!(
            "{}\n{}",
            MARKER.replace("atom-3", "atom-7"),
            MARKER.replace("atom-3", "atom-1")
        );
        let markers = extract_highlights(&doc, HighlightMode::Predicted);
        assert!(markers[0].contains("atom-7"));
        assert!(markers[1].contains("atom-1"));
    }
}
