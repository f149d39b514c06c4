//! Ring perception for depiction.
//!
//! One ring per independent cycle: take a BFS spanning forest, then close
//! every non-tree bond through the shortest alternative path between its
//! endpoints. Good enough for layout; this is not an SSSR implementation.

use std::collections::VecDeque;

use crate::parser::ast::Molecule;

/// Rings as ordered atom cycles (consecutive entries are bonded, and the
/// last entry bonds back to the first). Smallest rings first.
pub fn perceive_rings(mol: &Molecule) -> Vec<Vec<usize>> {
    let n = mol.atom_count();
    let mut in_tree = vec![false; mol.bond_count()];
    let mut seen = vec![false; n];

    for start in 0..n {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for (e, v) in mol.bonds_of(u) {
                if !seen[v] {
                    seen[v] = true;
                    in_tree[e] = true;
                    queue.push_back(v);
                }
            }
        }
    }

    let mut rings: Vec<Vec<usize>> = Vec::new();
    for e in 0..mol.bond_count() {
        if in_tree[e] {
            continue;
        }
        let bond = &mol.bonds()[e];
        if let Some(path) = shortest_path(mol, bond.a, bond.b, e) {
            rings.push(path);
        }
    }
    rings.sort_by_key(Vec::len);
    rings
}

/// BFS shortest path from `from` to `to`, ignoring bond `skip`. The path
/// plus the skipped bond forms the cycle.
fn shortest_path(mol: &Molecule, from: usize, to: usize, skip: usize) -> Option<Vec<usize>> {
    let n = mol.atom_count();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut seen = vec![false; n];
    seen[from] = true;
    let mut queue = VecDeque::from([from]);

    while let Some(u) = queue.pop_front() {
        if u == to {
            let mut path = vec![to];
            let mut cursor = to;
            while let Some(p) = parent[cursor] {
                path.push(p);
                cursor = p;
            }
            path.reverse();
            return Some(path);
        }
        for (e, v) in mol.bonds_of(u) {
            if e == skip || seen[v] {
                continue;
            }
            seen[v] = true;
            parent[v] = Some(u);
            queue.push_back(v);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_acyclic_has_no_rings() {
        let mol = parse("CCCCC").unwrap();
        assert!(perceive_rings(&mol).is_empty());
    }

    #[test]
    fn test_benzene_is_one_six_ring() {
        let mol = parse("c1ccccc1").unwrap();
        let rings = perceive_rings(&mol);
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 6);
    }

    #[test]
    fn test_ring_is_an_ordered_cycle() {
        let mol = parse("C1CCCCC1").unwrap();
        let ring = &perceive_rings(&mol)[0];
        for pair in ring.windows(2) {
            assert!(mol.neighbors(pair[0]).any(|v| v == pair[1]));
        }
        let (first, last) = (ring[0], ring[ring.len() - 1]);
        assert!(mol.neighbors(first).any(|v| v == last));
    }

    #[test]
    fn test_naphthalene_has_two_rings() {
        let mol = parse("c1ccc2ccccc2c1").unwrap();
        let rings = perceive_rings(&mol);
        assert_eq!(rings.len(), 2);
        assert!(rings.iter().all(|r| r.len() == 6));
    }

    #[test]
    fn test_bridged_bicycle_has_two_rings() {
        // quinuclidine
        let mol = parse("C1CC2CCC1NC2").unwrap();
        let rings = perceive_rings(&mol);
        assert_eq!(rings.len(), 2);
    }

    #[test]
    fn test_spiro_rings_are_separate() {
        let mol = parse("C1CCC2(CC1)CCCC2").unwrap();
        let rings = perceive_rings(&mol);
        assert_eq!(rings.len(), 2);
    }
}
