use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use thiserror::Error;

use crate::{atomic_number, MolfileRecords, Symbol};

/// A vertex of the molecule graph. The node index is the atom's stable key;
/// `original_index` is kept for traceability and tie-breaking only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Atom {
    pub symbol: Symbol,
    pub atomic_number: usize,
    /// 1-based index the atom had in the input records.
    pub original_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
}

impl BondOrder {
    pub fn order(self) -> u8 {
        match self {
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }

    fn from_order(order: usize) -> Option<Self> {
        match order {
            1 => Some(BondOrder::Single),
            2 => Some(BondOrder::Double),
            3 => Some(BondOrder::Triple),
            _ => None,
        }
    }
}

pub type MoleculeGraph = UnGraph<Atom, BondOrder>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoleculeError {
    #[error("header declares {declared} atoms but {actual} atom records were supplied")]
    AtomCountMismatch { declared: usize, actual: usize },
    #[error("header declares {declared} bonds but {actual} bond records were supplied")]
    BondCountMismatch { declared: usize, actual: usize },
    #[error("atom index {index} is declared twice")]
    DuplicateAtomIndex { index: usize },
    #[error("unknown element symbol `{0}`")]
    UnknownElement(Symbol),
    #[error("bond {bond} references atom {atom}, which is not in the atom block")]
    DanglingBond { bond: usize, atom: usize },
    #[error("bond {bond} connects atom {atom} to itself")]
    SelfBond { bond: usize, atom: usize },
    #[error("bonds {first} and {second} both connect atoms {a} and {b}")]
    DuplicateBond {
        first: usize,
        second: usize,
        a: usize,
        b: usize,
    },
    #[error("bond {bond} has unsupported order {order}")]
    UnsupportedBondOrder { bond: usize, order: usize },
}

/// Builds the immutable molecule graph from parsed records.
///
/// Validates the structural invariants: declared counts must match the
/// records supplied, every bond must reference two distinct known atoms, and
/// no unordered atom pair may be bonded twice. Element symbols are resolved
/// against the periodic table here so every atom carries its atomic number.
pub fn build_graph(records: &MolfileRecords) -> Result<MoleculeGraph, MoleculeError> {
    if records.declared_atom_count != records.atoms.len() {
        return Err(MoleculeError::AtomCountMismatch {
            declared: records.declared_atom_count,
            actual: records.atoms.len(),
        });
    }
    if records.declared_bond_count != records.bonds.len() {
        return Err(MoleculeError::BondCountMismatch {
            declared: records.declared_bond_count,
            actual: records.bonds.len(),
        });
    }

    let mut graph = MoleculeGraph::with_capacity(records.atoms.len(), records.bonds.len());
    let mut by_index: HashMap<usize, NodeIndex> = HashMap::new();
    for record in &records.atoms {
        let atomic_number = atomic_number(record.symbol.as_ref())
            .ok_or_else(|| MoleculeError::UnknownElement(record.symbol.clone()))?;
        let node = graph.add_node(Atom {
            symbol: record.symbol.clone(),
            atomic_number,
            original_index: record.original_index,
        });
        if by_index.insert(record.original_index, node).is_some() {
            return Err(MoleculeError::DuplicateAtomIndex {
                index: record.original_index,
            });
        }
    }

    let mut seen: HashMap<(usize, usize), usize> = HashMap::new();
    for record in &records.bonds {
        let a = *by_index
            .get(&record.a)
            .ok_or(MoleculeError::DanglingBond {
                bond: record.original_index,
                atom: record.a,
            })?;
        let b = *by_index
            .get(&record.b)
            .ok_or(MoleculeError::DanglingBond {
                bond: record.original_index,
                atom: record.b,
            })?;
        if a == b {
            return Err(MoleculeError::SelfBond {
                bond: record.original_index,
                atom: record.a,
            });
        }
        let pair = (record.a.min(record.b), record.a.max(record.b));
        if let Some(&first) = seen.get(&pair) {
            return Err(MoleculeError::DuplicateBond {
                first,
                second: record.original_index,
                a: pair.0,
                b: pair.1,
            });
        }
        seen.insert(pair, record.original_index);

        let order =
            BondOrder::from_order(record.order).ok_or(MoleculeError::UnsupportedBondOrder {
                bond: record.original_index,
                order: record.order,
            })?;
        graph.add_edge(a, b, order);
    }

    Ok(graph)
}
