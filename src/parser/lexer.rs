//! Lexer for SMILES strings using logos

use logos::Logos;

use crate::parser::ast::Element;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// One atom as spelled in the source, before graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomToken {
    pub element: Element,
    pub aromatic: bool,
    pub isotope: u16,
    /// `Some` for bracket atoms (explicit hydrogen count), `None` for the
    /// organic subset where hydrogens stay implicit.
    pub hcount: Option<u8>,
    pub charge: i8,
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    #[token("(")]
    OpenBranch,
    #[token(")")]
    CloseBranch,

    // `/` and `\` carry double-bond geometry in SMILES; depiction keeps
    // the single bond and ignores the stereo part.
    #[token("-")]
    #[token("/")]
    #[token("\\")]
    SingleBond,
    #[token("=")]
    DoubleBond,
    #[token("#")]
    TripleBond,
    #[token(":")]
    AromaticBond,

    #[token(".")]
    Dot,

    #[regex(r"[0-9]", |lex| lex.slice().parse::<u8>().ok())]
    #[regex(r"%[0-9][0-9]", |lex| lex.slice()[1..].parse::<u8>().ok())]
    RingClosure(u8),

    // Two-letter organic symbols must come before the one-letter ones.
    #[regex(r"Br|Cl|[BCNOPSFI]", organic_atom)]
    #[regex(r"[bcnops]", aromatic_atom)]
    #[regex(r"\[[^\[\]]*\]", bracket_atom)]
    Atom(AtomToken),
}

fn organic_atom(lex: &mut logos::Lexer<Token>) -> Option<AtomToken> {
    Element::from_symbol(lex.slice()).map(|element| AtomToken {
        element,
        aromatic: false,
        isotope: 0,
        hcount: None,
        charge: 0,
    })
}

fn aromatic_atom(lex: &mut logos::Lexer<Token>) -> Option<AtomToken> {
    Element::from_symbol(&lex.slice().to_ascii_uppercase()).map(|element| AtomToken {
        element,
        aromatic: true,
        isotope: 0,
        hcount: None,
        charge: 0,
    })
}

fn bracket_atom(lex: &mut logos::Lexer<Token>) -> Option<AtomToken> {
    parse_bracket(lex.slice())
}

/// Parse the body of `[isotope? symbol chirality? Hcount? charge? :class?]`.
/// Returns `None` for anything malformed, which surfaces as a lex error at
/// the bracket's span.
fn parse_bracket(slice: &str) -> Option<AtomToken> {
    let body = &slice[1..slice.len() - 1];
    let bytes = body.as_bytes();
    let mut i = 0;

    let mut isotope: u16 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        isotope = isotope.checked_mul(10)?.checked_add((bytes[i] - b'0') as u16)?;
        i += 1;
    }

    if i >= bytes.len() {
        return None;
    }
    let (element, aromatic) = if bytes[i].is_ascii_uppercase() {
        // prefer a two-letter symbol when it names a known element
        if i + 1 < bytes.len() && bytes[i + 1].is_ascii_lowercase() {
            if let Some(e) = Element::from_symbol(&body[i..i + 2]) {
                i += 2;
                (e, false)
            } else {
                let e = Element::from_symbol(&body[i..i + 1])?;
                i += 1;
                (e, false)
            }
        } else {
            let e = Element::from_symbol(&body[i..i + 1])?;
            i += 1;
            (e, false)
        }
    } else if bytes[i].is_ascii_lowercase() {
        let e = Element::from_symbol(&body[i..i + 1].to_ascii_uppercase())?;
        i += 1;
        (e, true)
    } else {
        return None;
    };

    // chirality markers accepted and ignored
    while i < bytes.len() && bytes[i] == b'@' {
        i += 1;
    }

    let mut hcount: u8 = 0;
    if i < bytes.len() && bytes[i] == b'H' {
        i += 1;
        hcount = 1;
        if i < bytes.len() && bytes[i].is_ascii_digit() {
            hcount = bytes[i] - b'0';
            i += 1;
        }
    }

    let mut charge: i8 = 0;
    while i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        let sign: i8 = if bytes[i] == b'+' { 1 } else { -1 };
        i += 1;
        if i < bytes.len() && bytes[i].is_ascii_digit() {
            charge = charge.checked_add(sign * (bytes[i] - b'0') as i8)?;
            i += 1;
        } else {
            charge = charge.checked_add(sign)?;
        }
    }

    // atom-class tag, e.g. [CH4:2]; the tag itself is discarded
    if i < bytes.len() && bytes[i] == b':' {
        i += 1;
        if i >= bytes.len() || !bytes[i].is_ascii_digit() {
            return None;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i != bytes.len() {
        return None;
    }
    Some(AtomToken {
        element,
        aromatic,
        isotope,
        hcount: Some(hcount),
        charge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_ok(input: &str) -> Vec<Token> {
        Token::lexer(input).map(|t| t.unwrap()).collect()
    }

    #[test]
    fn test_organic_atoms() {
        let tokens = lex_ok("CCO");
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[2], Token::Atom(a) if a.element == Element::O && !a.aromatic));
    }

    #[test]
    fn test_two_letter_symbols() {
        let tokens = lex_ok("ClBr");
        assert!(matches!(&tokens[0], Token::Atom(a) if a.element == Element::Cl));
        assert!(matches!(&tokens[1], Token::Atom(a) if a.element == Element::Br));
    }

    #[test]
    fn test_aromatic_atoms() {
        let tokens = lex_ok("cn");
        assert!(matches!(&tokens[0], Token::Atom(a) if a.element == Element::C && a.aromatic));
        assert!(matches!(&tokens[1], Token::Atom(a) if a.element == Element::N && a.aromatic));
    }

    #[test]
    fn test_bond_symbols() {
        let tokens = lex_ok("-=#:/\\");
        assert_eq!(
            tokens,
            vec![
                Token::SingleBond,
                Token::DoubleBond,
                Token::TripleBond,
                Token::AromaticBond,
                Token::SingleBond,
                Token::SingleBond,
            ]
        );
    }

    #[test]
    fn test_ring_closures() {
        let tokens = lex_ok("1%42");
        assert_eq!(
            tokens,
            vec![Token::RingClosure(1), Token::RingClosure(42)]
        );
    }

    #[test]
    fn test_bracket_atom_full() {
        let tokens = lex_ok("[13NH2+]");
        assert_eq!(
            tokens,
            vec![Token::Atom(AtomToken {
                element: Element::N,
                aromatic: false,
                isotope: 13,
                hcount: Some(2),
                charge: 1,
            })]
        );
    }

    #[test]
    fn test_bracket_aromatic_nh() {
        let tokens = lex_ok("[nH]");
        assert_eq!(
            tokens,
            vec![Token::Atom(AtomToken {
                element: Element::N,
                aromatic: true,
                isotope: 0,
                hcount: Some(1),
                charge: 0,
            })]
        );
    }

    #[test]
    fn test_bracket_charge_forms() {
        let tokens = lex_ok("[O-][N+2]");
        assert!(matches!(&tokens[0], Token::Atom(a) if a.charge == -1));
        assert!(matches!(&tokens[1], Token::Atom(a) if a.charge == 2));
    }

    #[test]
    fn test_bracket_chirality_ignored() {
        let tokens = lex_ok("[C@@H]");
        assert!(matches!(&tokens[0], Token::Atom(a) if a.hcount == Some(1)));
    }

    #[test]
    fn test_unknown_element_is_an_error() {
        let results: Vec<_> = Token::lexer("[Xx]").collect();
        assert!(results[0].is_err());
    }

    #[test]
    fn test_stray_character_is_an_error() {
        let results: Vec<_> = Token::lexer("C?C").collect();
        assert!(results[1].is_err());
    }
}
