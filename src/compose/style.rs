//! Color and stroke rewrites applied line by line to rendered markup

use crate::renderer::HIGHLIGHT_COLOR;

/// White outline prepended to atom label styles so letters stay legible
/// over highlight markers.
const HALO_STYLE: &str = "fill:none;fill-opacity:1;stroke:#FFFFFF;stroke-width:10px;stroke-linecap:butt;stroke-linejoin:miter;stroke-opacity:1;";

/// Replace the placeholder highlight color with `color` on every line
/// that carries it. Both the fill and the stroke of a marker change in
/// one pass since the whole line is rewritten.
pub fn recolor(lines: &[String], color: &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.replace(HIGHLIGHT_COLOR, color))
        .collect()
}

/// Readability pass over a merged document.
///
/// Every atom label is duplicated: a halo copy stroked wide in white goes
/// first, the original is re-emitted on top. Bond strokes are thickened
/// from 2px to 3px so they hold up next to the markers.
pub fn emphasize(graphic: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    for line in graphic.lines() {
        if line.contains("text") {
            let halo = line
                .replace("stroke:none;", "")
                .replace("font-size", &format!("{HALO_STYLE}font-size"));
            out.push(halo);
            out.push(line.to_string());
        } else if line.contains("path") {
            out.push(line.replace("stroke-width:2px", "stroke-width:3px"));
        } else {
            out.push(line.to_string());
        }
    }
    out.join("\n")
}
