//! Draw-order correction for merged documents

/// Rebuild `graphic` so every highlight marker is painted before the
/// first bond stroke, then close the document.
///
/// SVG paints in document order, so markers merged near the top of the
/// file would otherwise cover bonds drawn later or be covered by them
/// depending on where each layer landed. All ellipse lines are pulled
/// out of place and flushed together ahead of the first `bond` stroke;
/// their relative order is preserved, so the last-merged layer still
/// paints last within the marker block. Stray closing tags from partial
/// layers are dropped and a single closer pair is appended.
pub fn fix_layering(graphic: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut has_group = false;

    for line in graphic.lines() {
        let trimmed = line.trim();
        if trimmed == "</svg>" || trimmed == "</g>" {
            continue;
        }
        if trimmed.starts_with("<g ") {
            has_group = true;
        }
        if line.contains("ellipse") {
            pending.push(trimmed.to_string());
            continue;
        }
        if line.contains("bond") && !pending.is_empty() {
            out.append(&mut pending);
        }
        out.push(line.to_string());
    }
    // markers with no bond to precede, e.g. single-atom structures
    out.append(&mut pending);

    if has_group {
        out.push("</g>".to_string());
    }
    out.push("</svg>".to_string());
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    // a merge result: markers sit just below the group line, above the bonds
    fn merged() -> String {
        [
            "<svg width='400px'>",
            "<rect width='400' height='400'> </rect>",
            "<g transform='translate(0.0,0.0)'>",
            "<ellipse class='atom-1' style='stroke-width:0;' />",
            "<ellipse class='atom-3' style='stroke-width:6px;' />",
            "<path class='bond-0' d='M 1,1 L 2,2' />",
            "<path class='bond-1' d='M 2,2 L 3,3' />",
        ]
        .join("\n")
    }

    #[test]
    fn test_all_markers_precede_the_first_bond() {
        let fixed = fix_layering(&merged());
        let lines: Vec<&str> = fixed.lines().collect();
        assert!(lines[3].contains("atom-1"));
        assert!(lines[4].contains("atom-3"));
        assert!(lines[5].contains("bond-0"));
        assert!(lines[6].contains("bond-1"));
    }

    #[test]
    fn test_document_is_closed_exactly_once() {
        let doubled = format!("{}\n</g>\n</svg>\n</svg>", merged());
        let fixed = fix_layering(&doubled);
        assert_eq!(fixed.matches("</svg>").count(), 1);
        assert_eq!(fixed.matches("</g>").count(), 1);
        assert!(fixed.ends_with("</g>\n</svg>"));
    }

    #[test]
    fn test_marker_order_is_preserved() {
        let fixed = fix_layering(&merged());
        let atom1 = fixed.find("atom-1").unwrap();
        let atom3 = fixed.find("atom-3").unwrap();
        assert!(atom1 < atom3);
    }

    #[test]
    fn test_markers_without_bonds_are_kept() {
        let doc = "<svg width='400px'>\n<g transform='translate(0.0,0.0)'>\n<ellipse class='atom-0' />";
        let fixed = fix_layering(doc);
        assert!(fixed.contains("atom-0"));
        assert!(fixed.ends_with("</g>\n</svg>"));
    }

    #[test]
    fn test_groupless_document_gets_only_the_svg_closer() {
        let fixed = fix_layering("<svg width='400px'>\n<path class='bond-0' d='M 1,1 L 2,2' />");
        assert!(!fixed.contains("</g>"));
        assert!(fixed.ends_with("</svg>"));
    }
}
