//! Builds a molecular graph from the SMILES token stream.
//!
//! Ring-closure digits pair stateful open/close events across arbitrary
//! distances, so this is a hand-written loop over the tokens rather than a
//! combinator grammar: a branch stack, a pending-bond slot and an open-ring
//! table carry the state.

use std::collections::HashMap;

use logos::Logos;

use crate::error::ParseError;
use crate::parser::ast::{Atom, BondOrder, Molecule};
use crate::parser::lexer::{AtomToken, Span, Token};

struct RingOpen {
    atom: usize,
    bond: Option<BondOrder>,
    span: Span,
}

/// Parse a SMILES string into a molecular graph.
///
/// Bond orders come out as written: aromatic bonds stay aromatic until
/// [`kekulize`](crate::depict::kekulize) resolves them.
pub fn parse(input: &str) -> Result<Molecule, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut mol = Molecule::default();
    let mut prev: Option<usize> = None;
    let mut branch_stack: Vec<usize> = Vec::new();
    let mut pending: Option<BondOrder> = None;
    let mut open_rings: HashMap<u8, RingOpen> = HashMap::new();
    let mut last_span: Span = 0..0;

    for (token, span) in Token::lexer(input).spanned() {
        let token = token.map_err(|_| ParseError::Syntax {
            span: span.clone(),
            message: "unrecognized or malformed token".to_string(),
        })?;
        last_span = span.clone();

        match token {
            Token::Atom(tok) => {
                let idx = push_atom(&mut mol, tok);
                if let Some(p) = prev {
                    let order = pending
                        .take()
                        .unwrap_or_else(|| implicit_order(&mol, p, idx));
                    mol.add_bond(p, idx, order);
                }
                prev = Some(idx);
            }
            Token::SingleBond => set_pending(&mut pending, BondOrder::Single, &span)?,
            Token::DoubleBond => set_pending(&mut pending, BondOrder::Double, &span)?,
            Token::TripleBond => set_pending(&mut pending, BondOrder::Triple, &span)?,
            Token::AromaticBond => set_pending(&mut pending, BondOrder::Aromatic, &span)?,
            Token::RingClosure(digit) => {
                let here = prev.ok_or_else(|| ParseError::Syntax {
                    span: span.clone(),
                    message: "ring-closure digit before any atom".to_string(),
                })?;
                match open_rings.remove(&digit) {
                    Some(open) => {
                        if open.atom == here {
                            return Err(ParseError::Syntax {
                                span,
                                message: format!("ring bond {digit} closes onto its own atom"),
                            });
                        }
                        let order = pending
                            .take()
                            .or(open.bond)
                            .unwrap_or_else(|| implicit_order(&mol, open.atom, here));
                        mol.add_bond(open.atom, here, order);
                    }
                    None => {
                        open_rings.insert(
                            digit,
                            RingOpen {
                                atom: here,
                                bond: pending.take(),
                                span,
                            },
                        );
                    }
                }
            }
            Token::OpenBranch => {
                let p = prev.ok_or_else(|| ParseError::Syntax {
                    span: span.clone(),
                    message: "branch opened before any atom".to_string(),
                })?;
                branch_stack.push(p);
            }
            Token::CloseBranch => {
                prev = Some(branch_stack.pop().ok_or_else(|| ParseError::Syntax {
                    span: span.clone(),
                    message: "unmatched closing parenthesis".to_string(),
                })?);
            }
            Token::Dot => {
                return Err(ParseError::Syntax {
                    span,
                    message: "disconnected structures are not supported".to_string(),
                });
            }
        }
    }

    if pending.is_some() {
        return Err(ParseError::Syntax {
            span: last_span,
            message: "trailing bond symbol".to_string(),
        });
    }
    if let Some((digit, open)) = open_rings.into_iter().next() {
        return Err(ParseError::UnclosedRing {
            digit,
            span: open.span,
        });
    }
    if !branch_stack.is_empty() {
        return Err(ParseError::UnclosedBranch { span: last_span });
    }
    Ok(mol)
}

fn push_atom(mol: &mut Molecule, tok: AtomToken) -> usize {
    mol.add_atom(Atom {
        element: tok.element,
        aromatic: tok.aromatic,
        charge: tok.charge,
        isotope: tok.isotope,
        explicit_h: tok.hcount,
    })
}

fn set_pending(
    pending: &mut Option<BondOrder>,
    order: BondOrder,
    span: &Span,
) -> Result<(), ParseError> {
    if pending.is_some() {
        return Err(ParseError::Syntax {
            span: span.clone(),
            message: "two bond symbols in a row".to_string(),
        });
    }
    *pending = Some(order);
    Ok(())
}

fn implicit_order(mol: &Molecule, a: usize, b: usize) -> BondOrder {
    if mol.atom(a).aromatic && mol.atom(b).aromatic {
        BondOrder::Aromatic
    } else {
        BondOrder::Single
    }
}
