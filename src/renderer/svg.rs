//! Line-oriented SVG writer for molecule depictions.
//!
//! The markup deliberately follows the conventions of common
//! cheminformatics renderers: one element per line, style attributes as
//! CSS text, bond strokes tagged `bond-N`, atom markers and labels tagged
//! `atom-N`. The highlight compositor keys on those conventions, so they
//! are part of this module's contract, not cosmetics.

use std::fmt::Write;

use crate::depict::Point;
use crate::parser::ast::{BondOrder, Element, Molecule};

use super::SvgConfig;

/// Fill and stroke color the writer gives every highlight marker. The
/// compositor rewrites it per highlight category.
pub const HIGHLIGHT_COLOR: &str = "#FF7F7F";

const BOND_STYLE: &str = "fill:none;fill-rule:evenodd;stroke:#000000;stroke-width:2px;stroke-linecap:butt;stroke-linejoin:miter;stroke-opacity:1";

/// Write a complete SVG document for one molecule. When `highlights` is
/// given, exactly one ellipse marker is emitted per listed atom, in input
/// order, before any bond stroke. Indices outside the molecule are the
/// caller's validation concern and are skipped.
pub fn write_document(
    mol: &Molecule,
    coords: &[Point],
    highlights: Option<&[usize]>,
    config: &SvgConfig,
) -> String {
    let frame = Frame::fit(coords, config);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "<svg version='1.1' baseProfile='full' xmlns:svg='http://www.w3.org/2000/svg' xml:space='preserve' width='{w}px' height='{h}px' viewBox='0 0 {w} {h}'>",
        w = config.width,
        h = config.height,
    ));
    lines.push(format!(
        "<rect style='opacity:1.0;fill:#FFFFFF;stroke:none' width='{w}' height='{h}' x='0' y='0'> </rect>",
        w = config.width,
        h = config.height,
    ));
    lines.push(format!(
        "<g transform='translate({:.1},{:.1})'>",
        frame.offset.x, frame.offset.y
    ));

    if let Some(atoms) = highlights {
        let radius = (frame.scale * 0.3).max(8.0);
        for &idx in atoms {
            let center = match coords.get(idx) {
                Some(&p) => frame.to_px(p),
                None => continue,
            };
            lines.push(format!(
                "<ellipse cx='{:.1}' cy='{:.1}' rx='{:.1}' ry='{:.1}' class='atom-{}' style='fill:{hl};fill-rule:evenodd;stroke:{hl};stroke-width:1px;stroke-linecap:butt;stroke-linejoin:miter;stroke-opacity:1' />",
                center.x, center.y, radius, radius, idx,
                hl = HIGHLIGHT_COLOR,
            ));
        }
    }

    let labeled: Vec<bool> = (0..mol.atom_count()).map(|i| needs_label(mol, i)).collect();

    for (i, bond) in mol.bonds().iter().enumerate() {
        let mut from = frame.to_px(coords[bond.a]);
        let mut to = frame.to_px(coords[bond.b]);
        // pull bond ends back from labeled atoms so strokes miss the letters
        if labeled[bond.a] {
            from = lerp(from, to, 0.18);
        }
        if labeled[bond.b] {
            to = lerp(to, from, 0.18);
        }
        let offsets: &[f64] = match bond.order {
            BondOrder::Single | BondOrder::Aromatic => &[0.0],
            BondOrder::Double => &[-0.06, 0.06],
            BondOrder::Triple => &[-0.12, 0.0, 0.12],
        };
        let normal = from.angle_to(to) + std::f64::consts::FRAC_PI_2;
        for &off in offsets {
            let shift = Point::polar(normal, off * frame.scale);
            let p1 = from.add(shift);
            let p2 = to.add(shift);
            lines.push(format!(
                "<path class='bond-{i}' d='M {:.1},{:.1} L {:.1},{:.1}' style='{BOND_STYLE}' />",
                p1.x, p1.y, p2.x, p2.y,
            ));
        }
    }

    for i in 0..mol.atom_count() {
        if !labeled[i] {
            continue;
        }
        let p = frame.to_px(coords[i]);
        lines.push(format!(
            "<text x='{:.1}' y='{:.1}' class='atom-{i}' style='font-size:{fs:.0}px;font-style:normal;font-weight:normal;fill-opacity:1;stroke:none;font-family:sans-serif;text-anchor:middle;fill:{color}'>{label}</text>",
            p.x,
            p.y + config.font_size * 0.35,
            fs = config.font_size,
            color = mol.atom(i).element.label_color(),
            label = atom_label(mol, i),
        ));
    }

    lines.push("</g>".to_string());
    lines.push("</svg>".to_string());
    lines.join("\n")
}

/// Maps molecule coordinates into pixel space: uniform scale into the
/// padded canvas, then a group-level translation centers the drawing.
struct Frame {
    scale: f64,
    origin: Point,
    offset: Point,
}

impl Frame {
    fn fit(coords: &[Point], config: &SvgConfig) -> Frame {
        let (min, max) = bounds(coords);
        let span_x = (max.x - min.x).max(1e-9);
        let span_y = (max.y - min.y).max(1e-9);
        let avail_w = config.width as f64 - 2.0 * config.padding;
        let avail_h = config.height as f64 - 2.0 * config.padding;
        let scale = (avail_w / span_x)
            .min(avail_h / span_y)
            .min(config.max_bond_px);
        let offset = Point::new(
            config.padding + (avail_w - span_x * scale) / 2.0,
            config.padding + (avail_h - span_y * scale) / 2.0,
        );
        Frame {
            scale,
            origin: min,
            offset,
        }
    }

    fn to_px(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.origin.x) * self.scale,
            (p.y - self.origin.y) * self.scale,
        )
    }
}

fn bounds(coords: &[Point]) -> (Point, Point) {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in coords {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    if coords.is_empty() {
        (Point::default(), Point::default())
    } else {
        (min, max)
    }
}

fn lerp(from: Point, to: Point, t: f64) -> Point {
    Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
}

/// Carbons stay implicit unless they are isolated or decorated.
fn needs_label(mol: &Molecule, index: usize) -> bool {
    let atom = mol.atom(index);
    atom.element != Element::C
        || atom.charge != 0
        || atom.isotope != 0
        || mol.degree(index) == 0
}

fn atom_label(mol: &Molecule, index: usize) -> String {
    let atom = mol.atom(index);
    let mut label = String::new();
    if atom.isotope != 0 {
        let _ = write!(label, "{}", atom.isotope);
    }
    label.push_str(atom.element.symbol());
    let h = mol.implicit_hydrogens(index);
    if h >= 1 {
        label.push('H');
        if h > 1 {
            let _ = write!(label, "{h}");
        }
    }
    match atom.charge {
        0 => {}
        1 => label.push('+'),
        -1 => label.push('-'),
        c if c > 1 => {
            let _ = write!(label, "+{c}");
        }
        c => {
            let _ = write!(label, "-{}", -c);
        }
    }
    label
}
