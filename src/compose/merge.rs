//! Splices extracted highlight lines into a base document

/// Insert `layer` into `base` right after the coordinate-group line.
///
/// The anchor is the first line containing `transform`; inserting below
/// it keeps the markers inside the group so they share the drawing's
/// translation. A document with no such line falls back to an insertion
/// after its second line, which keeps the header intact.
pub fn merge(base: &str, layer: &[String]) -> String {
    let mut lines: Vec<String> = base.lines().map(str::to_string).collect();
    let anchor = lines
        .iter()
        .position(|line| line.contains("transform"))
        .unwrap_or(1);
    let at = (anchor + 1).min(lines.len());
    lines.splice(at..at, layer.iter().cloned());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> &'static str {
        "<svg width='400px'>\n<rect width='400' height='400'> </rect>\n<g transform='translate(10.0,20.0)'>\n<path class='bond-0' d='M 1,1 L 2,2' />"
    }

    fn layer() -> Vec<String> {
        vec!["<ellipse class='atom-0' />".to_string()]
    }

    #[test]
    fn test_layer_lands_after_the_group_line() {
        let merged = merge(base(), &layer());
        let lines: Vec<&str> = merged.lines().collect();
        assert!(lines[2].starts_with("<g transform"));
        assert_eq!(lines[3], "<ellipse class='atom-0' />");
        assert!(lines[4].starts_with("<path"));
    }

    #[test]
    fn test_missing_anchor_falls_back_to_the_header() {
        let merged = merge("<svg width='400px'>\n<rect> </rect>\n<path />", &layer());
        let lines: Vec<&str> = merged.lines().collect();
        assert_eq!(lines[2], "<ellipse class='atom-0' />");
    }

    #[test]
    fn test_empty_layer_is_identity() {
        assert_eq!(merge(base(), &[]), base());
    }

    #[test]
    fn test_multiple_lines_keep_their_order() {
        let layer = vec!["<ellipse class='atom-2' />".to_string(), "<ellipse class='atom-5' />".to_string()];
        let merged = merge(base(), &layer);
        let lines: Vec<&str> = merged.lines().collect();
        assert_eq!(lines[3], "<ellipse class='atom-2' />");
        assert_eq!(lines[4], "<ellipse class='atom-5' />");
    }
}
