//! Structure normalization and 2D coordinate generation

mod coords;
mod kekulize;
mod rings;

pub use coords::{assign_coords, Point};
pub use kekulize::kekulize;
pub use rings::perceive_rings;

use thiserror::Error;

use crate::parser::ast::Molecule;

/// Errors from the depiction stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DepictError {
    /// No alternating single/double assignment exists for these atoms.
    #[error("cannot kekulize aromatic system: unmatched atoms {0:?}")]
    Unkekulizable(Vec<usize>),
}

/// Kekulize aromatic bonds in place and compute drawing coordinates.
pub fn prepare(mol: &mut Molecule) -> Result<Vec<Point>, DepictError> {
    kekulize(mol)?;
    let rings = perceive_rings(mol);
    Ok(assign_coords(mol, &rings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_prepare_pipeline() {
        let mut mol = parse("c1ccccc1").unwrap();
        let coords = prepare(&mut mol).unwrap();
        assert_eq!(coords.len(), 6);
        assert!(mol
            .bonds()
            .iter()
            .all(|b| b.order != crate::parser::BondOrder::Aromatic));
    }

    #[test]
    fn test_prepare_propagates_kekulize_failure() {
        let mut mol = parse("c1cc1").unwrap();
        assert!(matches!(
            prepare(&mut mol),
            Err(DepictError::Unkekulizable(_))
        ));
    }
}
