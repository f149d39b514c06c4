//! 2D coordinate assignment with unit bond length.
//!
//! BFS placement from atom 0: rings are laid down as regular polygons
//! (fused rings attach across the shared edge on the less crowded side,
//! substituent rings are anchored on their attachment atom), chain atoms
//! zig-zag at 120° into the widest open angular gap. Bridged polycycles
//! fall back to chain placement for whatever the polygon pass left over.

use std::collections::VecDeque;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, PI, TAU};

use crate::parser::ast::Molecule;

const BOND_LEN: f64 = 1.0;

/// A 2D point in molecule coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn polar(angle: f64, radius: f64) -> Self {
        Self::new(angle.cos() * radius, angle.sin() * radius)
    }

    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn angle_to(self, other: Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

/// Assign a coordinate to every atom. Rings come from
/// [`perceive_rings`](super::perceive_rings).
pub fn assign_coords(mol: &Molecule, rings: &[Vec<usize>]) -> Vec<Point> {
    let n = mol.atom_count();
    if n == 0 {
        return vec![];
    }
    let mut pos: Vec<Option<Point>> = vec![None; n];
    let mut ring_done = vec![false; rings.len()];
    // zig-zag parity for chain placement
    let mut flip = vec![false; n];

    // seed: if atom 0 sits in a ring, lay that ring down whole
    match rings.iter().position(|r| r.contains(&0)) {
        Some(r) => {
            place_seed_ring(&rings[r], &mut pos);
            ring_done[r] = true;
        }
        None => pos[0] = Some(Point::default()),
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&i| pos[i].is_some()).collect();
    while let Some(u) = queue.pop_front() {
        // complete any ring this atom belongs to before extending chains
        for (r, ring) in rings.iter().enumerate() {
            if ring_done[r] || !ring.contains(&u) {
                continue;
            }
            ring_done[r] = true;
            for placed in place_ring(mol, ring, &mut pos) {
                queue.push_back(placed);
            }
        }

        let unplaced: Vec<usize> = mol.neighbors(u).filter(|&v| pos[v].is_none()).collect();
        if unplaced.is_empty() {
            continue;
        }
        let origin = match pos[u] {
            Some(p) => p,
            None => continue,
        };
        let anchored: Vec<f64> = mol
            .neighbors(u)
            .filter_map(|v| pos[v].map(|p| origin.angle_to(p)))
            .collect();
        let slots = open_slots(&anchored, unplaced.len(), flip[u]);
        for (&v, angle) in unplaced.iter().zip(slots) {
            pos[v] = Some(origin.add(Point::polar(angle, BOND_LEN)));
            flip[v] = !flip[u];
            queue.push_back(v);
        }
    }

    pos.into_iter().map(|p| p.unwrap_or_default()).collect()
}

fn circumradius(len: usize) -> f64 {
    BOND_LEN / (2.0 * (PI / len as f64).sin())
}

fn place_seed_ring(ring: &[usize], pos: &mut [Option<Point>]) {
    let k = ring.len() as f64;
    let radius = circumradius(ring.len());
    for (j, &atom) in ring.iter().enumerate() {
        let angle = -FRAC_PI_2 + TAU * j as f64 / k;
        pos[atom] = Some(Point::polar(angle, radius));
    }
}

/// Place the unplaced atoms of a ring that touches already-placed geometry.
/// Returns the atoms placed here.
fn place_ring(mol: &Molecule, ring: &[usize], pos: &mut [Option<Point>]) -> Vec<usize> {
    let len = ring.len();
    // fused: walk around the polygon from a placed edge
    if let Some(j) = (0..len)
        .find(|&j| pos[ring[j]].is_some() && pos[ring[(j + 1) % len]].is_some())
    {
        return place_from_edge(ring, j, pos);
    }
    // substituent or spiro: anchor the polygon on a single placed atom
    if let Some(j) = (0..len).find(|&j| pos[ring[j]].is_some()) {
        return place_from_anchor(mol, ring, j, pos);
    }
    // bridged leftovers with no contact yet; chain placement will reach them
    vec![]
}

fn place_from_edge(ring: &[usize], j: usize, pos: &mut [Option<Point>]) -> Vec<usize> {
    let len = ring.len();
    let a = ring[j];
    let b = ring[(j + 1) % len];
    let (pa, pb) = match (pos[a], pos[b]) {
        (Some(pa), Some(pb)) => (pa, pb),
        _ => return vec![],
    };

    let radius = circumradius(len);
    let apothem = BOND_LEN / (2.0 * (PI / len as f64).tan());
    let normal = pa.angle_to(pb) + FRAC_PI_2;
    let mid = pa.midpoint(pb);
    let c1 = mid.add(Point::polar(normal, apothem));
    let c2 = mid.add(Point::polar(normal + PI, apothem));
    let center = if crowding(pos, c1, radius) <= crowding(pos, c2, radius) {
        c1
    } else {
        c2
    };

    // rotation direction that carries a onto b
    let step = TAU / len as f64;
    let angle_a = center.angle_to(pa);
    let forward = center.add(Point::polar(angle_a + step, radius));
    let dir = if forward.distance(pb) < BOND_LEN / 2.0 {
        1.0
    } else {
        -1.0
    };

    let mut placed = Vec::new();
    for m in 2..len {
        let atom = ring[(j + m) % len];
        if pos[atom].is_none() {
            pos[atom] = Some(center.add(Point::polar(angle_a + dir * step * m as f64, radius)));
            placed.push(atom);
        }
    }
    placed
}

fn place_from_anchor(
    mol: &Molecule,
    ring: &[usize],
    j: usize,
    pos: &mut [Option<Point>],
) -> Vec<usize> {
    let len = ring.len();
    let anchor = ring[j];
    let pa = match pos[anchor] {
        Some(p) => p,
        None => return vec![],
    };

    // grow the ring away from the anchor's placed neighbors
    let anchored: Vec<f64> = mol
        .neighbors(anchor)
        .filter_map(|v| pos[v].map(|p| pa.angle_to(p)))
        .collect();
    let away = match open_slots(&anchored, 1, false).first() {
        Some(&a) => a,
        None => 0.0,
    };

    let radius = circumradius(len);
    let center = pa.add(Point::polar(away, radius));
    let start = center.angle_to(pa);
    let step = TAU / len as f64;

    let mut placed = Vec::new();
    for m in 1..len {
        let atom = ring[(j + m) % len];
        if pos[atom].is_none() {
            pos[atom] = Some(center.add(Point::polar(start + step * m as f64, radius)));
            placed.push(atom);
        }
    }
    placed
}

/// Placed atoms near a candidate ring center; used to pick the emptier
/// side of a shared edge.
fn crowding(pos: &[Option<Point>], candidate: Point, radius: f64) -> usize {
    pos.iter()
        .flatten()
        .filter(|p| p.distance(candidate) < radius + BOND_LEN / 2.0)
        .count()
}

/// Angles for `count` new bonds around an atom whose placed neighbors sit
/// at `anchored` angles.
fn open_slots(anchored: &[f64], count: usize, flip: bool) -> Vec<f64> {
    if anchored.is_empty() {
        // fresh chain start, heading down-right
        return (0..count)
            .map(|i| FRAC_PI_6 + i as f64 * TAU / 3.0)
            .collect();
    }
    if anchored.len() == 1 && count == 1 {
        // zig-zag: turn 60° off the incoming direction, alternating sides
        let incoming = anchored[0] + PI;
        let delta = if flip { -TAU / 6.0 } else { TAU / 6.0 };
        return vec![incoming + delta];
    }

    let mut sorted: Vec<f64> = anchored.iter().map(|a| a.rem_euclid(TAU)).collect();
    sorted.sort_by(f64::total_cmp);
    let mut gap_start = sorted[sorted.len() - 1];
    let mut gap = sorted[0] + TAU - gap_start;
    for pair in sorted.windows(2) {
        let g = pair[1] - pair[0];
        if g > gap {
            gap = g;
            gap_start = pair[0];
        }
    }
    (1..=count)
        .map(|i| gap_start + gap * i as f64 / (count as f64 + 1.0))
        .collect()
}
