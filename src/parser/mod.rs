//! SMILES parsing into a molecular graph

pub mod ast;
pub mod grammar;
pub mod lexer;

pub use ast::{Atom, Bond, BondOrder, Element, Molecule};
pub use grammar::parse;
