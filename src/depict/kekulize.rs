//! Kekulization assigns alternating single and double bonds to aromatic
//! ring systems.
//!
//! Atoms that must carry exactly one double bond (carbons, pyridine-type
//! nitrogens, charged donors) are paired up over the aromatic bonds via
//! augmenting-path maximum matching. Pyrrole-type heteroatoms and neutral
//! O/S contribute a lone pair instead and stay out of the matching.

use crate::depict::DepictError;
use crate::parser::ast::{BondOrder, Element, Molecule};

/// Rewrite aromatic bond orders into a concrete Kekulé assignment.
///
/// Non-aromatic bonds are untouched. Idempotent: a second call sees no
/// aromatic bonds and returns immediately.
pub fn kekulize(mol: &mut Molecule) -> Result<(), DepictError> {
    let n = mol.atom_count();
    let aromatic_edges: Vec<usize> = (0..mol.bond_count())
        .filter(|&e| mol.bonds()[e].order == BondOrder::Aromatic)
        .collect();
    if aromatic_edges.is_empty() {
        return Ok(());
    }

    let mut adjacency: Vec<Vec<usize>> = vec![vec![]; n];
    for &e in &aromatic_edges {
        let bond = &mol.bonds()[e];
        adjacency[bond.a].push(bond.b);
        adjacency[bond.b].push(bond.a);
    }

    let needs: Vec<bool> = (0..n).map(|i| needs_double(mol, i)).collect();

    let mut matched: Vec<Option<usize>> = vec![None; n];
    for start in 0..n {
        if needs[start] && matched[start].is_none() {
            let mut visited = vec![false; n];
            augment(start, &adjacency, &needs, &mut matched, &mut visited);
        }
    }

    let unmatched: Vec<usize> = (0..n)
        .filter(|&i| needs[i] && matched[i].is_none())
        .collect();
    if !unmatched.is_empty() {
        return Err(DepictError::Unkekulizable(unmatched));
    }

    for &e in &aromatic_edges {
        let (a, b) = {
            let bond = &mol.bonds()[e];
            (bond.a, bond.b)
        };
        mol.bonds_mut()[e].order = if matched[a] == Some(b) {
            BondOrder::Double
        } else {
            BondOrder::Single
        };
    }
    Ok(())
}

/// Alternating-path search. Rematches already-paired neighbors when that
/// frees a partner for `u`.
fn augment(
    u: usize,
    adjacency: &[Vec<usize>],
    needs: &[bool],
    matched: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for &v in &adjacency[u] {
        if !needs[v] || visited[v] {
            continue;
        }
        visited[v] = true;
        let free = match matched[v] {
            None => true,
            Some(w) => augment(w, adjacency, needs, matched, visited),
        };
        if free {
            matched[u] = Some(v);
            matched[v] = Some(u);
            return true;
        }
    }
    false
}

fn needs_double(mol: &Molecule, index: usize) -> bool {
    let atom = mol.atom(index);
    if !atom.aromatic {
        return false;
    }
    // an exocyclic multiple bond already satisfies the atom
    let has_multiple = mol.bonds_of(index).any(|(e, _)| {
        matches!(
            mol.bonds()[e].order,
            BondOrder::Double | BondOrder::Triple
        )
    });
    if has_multiple {
        return false;
    }

    let connections = mol.degree(index) + atom.explicit_h.unwrap_or(0) as usize;
    match atom.element {
        Element::C => atom.charge == 0,
        // pyridine-type N/P (two connections, no H) takes a double bond;
        // pyrrole-type (explicit H or three connections) donates a lone pair
        Element::N | Element::P => {
            if atom.charge > 0 {
                connections < 4
            } else {
                connections < 3
            }
        }
        // neutral O/S donate a lone pair; cationic forms (pyrylium) do not
        Element::O | Element::S => atom.charge > 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn double_count(mol: &Molecule) -> usize {
        mol.bonds()
            .iter()
            .filter(|b| b.order == BondOrder::Double)
            .count()
    }

    #[test]
    fn test_benzene_gets_three_double_bonds() {
        let mut mol = parse("c1ccccc1").unwrap();
        kekulize(&mut mol).unwrap();
        assert_eq!(double_count(&mol), 3);
        assert!(mol
            .bonds()
            .iter()
            .all(|b| b.order != BondOrder::Aromatic));
        // every carbon carries exactly one double bond
        for i in 0..6 {
            assert_eq!(mol.bond_order_sum(i), 3);
        }
    }

    #[test]
    fn test_pyrrole_nitrogen_stays_single_bonded() {
        let mut mol = parse("c1cc[nH]c1").unwrap();
        kekulize(&mut mol).unwrap();
        assert_eq!(double_count(&mol), 2);
        let n = 3;
        assert!(mol
            .bonds_of(n)
            .all(|(e, _)| mol.bonds()[e].order == BondOrder::Single));
    }

    #[test]
    fn test_pyrazole_assignment() {
        let mut mol = parse("n1ccc[nH]1").unwrap();
        kekulize(&mut mol).unwrap();
        assert_eq!(double_count(&mol), 2);
        // the pyridine-type nitrogen takes one double bond
        assert_eq!(mol.bond_order_sum(0), 3);
    }

    #[test]
    fn test_biaryl_systems_kekulize_independently() {
        let mut mol = parse("c1ccccc1-c1ccccc1").unwrap();
        kekulize(&mut mol).unwrap();
        assert_eq!(double_count(&mol), 6);
    }

    #[test]
    fn test_odd_carbon_ring_is_unkekulizable() {
        let mut mol = parse("c1cc1").unwrap();
        let err = kekulize(&mut mol).unwrap_err();
        assert!(matches!(err, DepictError::Unkekulizable(atoms) if !atoms.is_empty()));
    }

    #[test]
    fn test_saturated_molecule_is_untouched() {
        let mut mol = parse("C1CCCCC1").unwrap();
        let before = mol.clone();
        kekulize(&mut mol).unwrap();
        assert_eq!(mol, before);
    }

    #[test]
    fn test_kekulize_is_idempotent() {
        let mut mol = parse("c1ccccc1").unwrap();
        kekulize(&mut mol).unwrap();
        let once = mol.clone();
        kekulize(&mut mol).unwrap();
        assert_eq!(mol, once);
    }
}
