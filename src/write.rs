//! Serialization of a canonicalized molecule into the nInChI string.

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write as FmtWrite;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::{CanonicalComponent, Canonicalization, MoleculeGraph};

pub const IDENTIFIER_PREFIX: &str = "nInChI=2.1//";

/// Serializes one component: the element composition summary followed by the
/// bond listing, `/`-separated. Each bond is written as
/// `min(rank)-max(rank)-order` and the listing is sorted lexicographically by
/// that tuple, so the output depends on the rank assignment alone and not on
/// any internal iteration order.
pub fn component_string(
    graph: &MoleculeGraph,
    ranks: &[usize],
    component: &CanonicalComponent,
) -> String {
    let mut out = String::new();

    let mut composition: BTreeMap<&str, usize> = BTreeMap::new();
    for &node in &component.nodes {
        *composition.entry(graph[node].symbol.as_ref()).or_default() += 1;
    }
    for (symbol, count) in composition {
        out.push_str(symbol);
        if count > 1 {
            write!(out, "{count}").unwrap();
        }
    }

    let members: HashSet<NodeIndex> = component.nodes.iter().copied().collect();
    let mut bonds: Vec<(usize, usize, u8)> = graph
        .edge_references()
        .filter(|edge| members.contains(&edge.source()))
        .map(|edge| {
            let (a, b) = (ranks[edge.source().index()], ranks[edge.target().index()]);
            (a.min(b), a.max(b), edge.weight().order())
        })
        .collect();
    bonds.sort_unstable();
    for (a, b, order) in bonds {
        write!(out, "/{a}-{b}-{order}").unwrap();
    }

    out
}

/// Writes the full identifier: the version prefix followed by the component
/// strings, joined by `;` in the canonical component order. A graph with no
/// atoms yields the bare prefix.
pub fn write_ninchi(graph: &MoleculeGraph, canon: &Canonicalization) -> String {
    let mut out = String::from(IDENTIFIER_PREFIX);
    for (i, component) in canon.components().iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(&component_string(graph, canon.ranks(), component));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_graph, AtomRecord, BondRecord, Canonicalize, MolfileRecords, Symbol};

    fn records(atoms: &[&str], bonds: &[(usize, usize, usize)]) -> MolfileRecords {
        MolfileRecords {
            declared_atom_count: atoms.len(),
            declared_bond_count: bonds.len(),
            atoms: atoms
                .iter()
                .enumerate()
                .map(|(i, s)| AtomRecord {
                    symbol: Symbol::new(s),
                    original_index: i + 1,
                })
                .collect(),
            bonds: bonds
                .iter()
                .enumerate()
                .map(|(i, &(a, b, order))| BondRecord {
                    original_index: i + 1,
                    order,
                    a,
                    b,
                })
                .collect(),
        }
    }

    fn identifier(records: &MolfileRecords) -> String {
        let graph = build_graph(records).unwrap();
        let canon = graph.canonicalize();
        write_ninchi(&graph, &canon)
    }

    #[test]
    fn test_ammonia_string() {
        let ammonia = records(&["H", "H", "H", "N"], &[(4, 1, 1), (2, 4, 1), (4, 3, 1)]);
        assert_eq!(identifier(&ammonia), "nInChI=2.1//H3N/0-3-1/1-3-1/2-3-1");
    }

    #[test]
    fn test_hydrogen_peroxide_string() {
        let peroxide = records(&["H", "H", "O", "O"], &[(1, 3, 1), (3, 4, 1), (4, 2, 1)]);
        assert_eq!(
            identifier(&peroxide),
            "nInChI=2.1//H2O2/0-2-1/1-3-1/2-3-1"
        );
    }

    #[test]
    fn test_double_bonds_show_their_order() {
        let dioxide = records(&["O", "C", "O"], &[(1, 2, 2), (2, 3, 2)]);
        assert_eq!(identifier(&dioxide), "nInChI=2.1//CO2/0-1-2/0-2-2");
    }

    #[test]
    fn test_components_are_sorted_and_semicolon_separated() {
        let mixture = records(
            &["H", "H", "O", "C", "H", "H", "H", "H"],
            &[
                (1, 3, 1),
                (2, 3, 1),
                (4, 5, 1),
                (4, 6, 1),
                (4, 7, 1),
                (4, 8, 1),
            ],
        );
        assert_eq!(
            identifier(&mixture),
            "nInChI=2.1//CH4/0-4-1/1-4-1/2-4-1/3-4-1;H2O/0-2-1/1-2-1"
        );
    }

    #[test]
    fn test_lone_atom() {
        let helium = records(&["He"], &[]);
        assert_eq!(identifier(&helium), "nInChI=2.1//He");
    }

    #[test]
    fn test_empty_graph_yields_bare_prefix() {
        let empty = records(&[], &[]);
        assert_eq!(identifier(&empty), IDENTIFIER_PREFIX);
    }
}
