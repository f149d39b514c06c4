//! Molecular graph types shared by the parser and the depiction pipeline

use std::fmt;

/// Elements the parser accepts. Anything outside this set is a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    H,
    B,
    C,
    N,
    O,
    F,
    Si,
    P,
    S,
    Cl,
    Br,
    I,
}

impl Element {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "H" => Some(Element::H),
            "B" => Some(Element::B),
            "C" => Some(Element::C),
            "N" => Some(Element::N),
            "O" => Some(Element::O),
            "F" => Some(Element::F),
            "Si" => Some(Element::Si),
            "P" => Some(Element::P),
            "S" => Some(Element::S),
            "Cl" => Some(Element::Cl),
            "Br" => Some(Element::Br),
            "I" => Some(Element::I),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Br => "Br",
            Element::I => "I",
        }
    }

    /// Default valences, smallest first. Implicit hydrogen counting picks the
    /// smallest valence that accommodates the existing bond order sum.
    pub fn default_valences(&self) -> &'static [u8] {
        match self {
            Element::H => &[1],
            Element::B => &[3],
            Element::C | Element::Si => &[4],
            Element::N | Element::P => &[3, 5],
            Element::O => &[2],
            Element::S => &[2, 4, 6],
            Element::F | Element::Cl | Element::Br | Element::I => &[1],
        }
    }

    /// Conventional label color for heteroatom text.
    pub fn label_color(&self) -> &'static str {
        match self {
            Element::N => "#0000FF",
            Element::O => "#FF0000",
            Element::F => "#33CCCC",
            Element::Cl => "#00CC00",
            Element::Br => "#7F4C19",
            Element::I => "#A01EEF",
            Element::P => "#FF7F00",
            Element::S => "#CCC200",
            _ => "#000000",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One atom of the molecular graph.
///
/// `explicit_h` is `Some` for bracket atoms, where the SMILES spells the
/// hydrogen count out; organic-subset atoms leave it `None` and the count
/// is derived from default valences after kekulization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    pub element: Element,
    pub aromatic: bool,
    pub charge: i8,
    pub isotope: u16,
    pub explicit_h: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    /// Contribution to an atom's valence. Aromatic bonds count as one; the
    /// missing half order is resolved by kekulization before anything
    /// consumes valences.
    pub fn as_sum(&self) -> u8 {
        match self {
            BondOrder::Single | BondOrder::Aromatic => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub order: BondOrder,
}

/// Molecular graph: atoms indexed by insertion order, bonds by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl Molecule {
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    pub fn add_bond(&mut self, a: usize, b: usize, order: BondOrder) {
        self.bonds.push(Bond { a, b, order });
    }

    pub fn atom(&self, index: usize) -> &Atom {
        &self.atoms[index]
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn bonds_mut(&mut self) -> &mut [Bond] {
        &mut self.bonds
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Bonds incident to `index`, yielded as `(bond_index, other_atom)`.
    pub fn bonds_of(&self, index: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.bonds.iter().enumerate().filter_map(move |(e, bond)| {
            if bond.a == index {
                Some((e, bond.b))
            } else if bond.b == index {
                Some((e, bond.a))
            } else {
                None
            }
        })
    }

    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.bonds_of(index).map(|(_, other)| other)
    }

    pub fn degree(&self, index: usize) -> usize {
        self.bonds_of(index).count()
    }

    pub fn bond_order_sum(&self, index: usize) -> u8 {
        self.bonds_of(index)
            .map(|(e, _)| self.bonds[e].order.as_sum())
            .sum()
    }

    /// Hydrogens implied by the atom's valence. Bracket atoms are explicit
    /// and return their spelled-out count verbatim.
    pub fn implicit_hydrogens(&self, index: usize) -> u8 {
        let atom = &self.atoms[index];
        if let Some(h) = atom.explicit_h {
            return h;
        }
        let used = self.bond_order_sum(index);
        atom.element
            .default_valences()
            .iter()
            .find(|&&v| v >= used)
            .map(|&v| v - used)
            .unwrap_or(0)
    }
}
