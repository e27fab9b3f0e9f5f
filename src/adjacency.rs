use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::{BondOrder, MoleculeGraph};

/// Neighbor lists indexed by dense node index; each entry is
/// `(neighbor node index, bond order)`. Derived from the graph, rebuilt
/// whenever ranks change, never authoritative on its own.
pub type Adjacency = Vec<Vec<(usize, BondOrder)>>;

fn incidence_lists(graph: &MoleculeGraph) -> Adjacency {
    let mut adj: Adjacency = vec![Vec::new(); graph.node_count()];
    for edge in graph.edge_references() {
        let (s, t) = (edge.source().index(), edge.target().index());
        adj[s].push((t, *edge.weight()));
        adj[t].push((s, *edge.weight()));
    }
    adj
}

/// Adjacency with each neighbor list in the provisional deterministic order
/// (element symbol, then original index). This order only seeds the first
/// refinement round; it must never show up in the final identifier.
pub fn adjacency(graph: &MoleculeGraph) -> Adjacency {
    let mut adj = incidence_lists(graph);
    for list in adj.iter_mut() {
        list.sort_by_key(|&(j, order)| {
            let atom = &graph[NodeIndex::new(j)];
            (atom.symbol.clone(), atom.original_index, order)
        });
    }
    adj
}

/// Adjacency with each neighbor list ordered by ascending canonical rank.
pub fn adjacency_by_rank(graph: &MoleculeGraph, ranks: &[usize]) -> Adjacency {
    let mut adj = incidence_lists(graph);
    for list in adj.iter_mut() {
        list.sort_by_key(|&(j, order)| (ranks[j], order));
    }
    adj
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_graph, AtomRecord, BondRecord, MolfileRecords, Symbol};

    fn methanol() -> MoleculeGraph {
        // C(1)-O(2), C(1)-H(3)
        let records = MolfileRecords {
            declared_atom_count: 3,
            declared_bond_count: 2,
            atoms: ["C", "O", "H"]
                .iter()
                .enumerate()
                .map(|(i, s)| AtomRecord {
                    symbol: Symbol::new(s),
                    original_index: i + 1,
                })
                .collect(),
            bonds: vec![
                BondRecord {
                    original_index: 1,
                    order: 1,
                    a: 1,
                    b: 2,
                },
                BondRecord {
                    original_index: 2,
                    order: 1,
                    a: 1,
                    b: 3,
                },
            ],
        };
        build_graph(&records).unwrap()
    }

    #[test]
    fn test_provisional_order_is_by_symbol_then_index() {
        let graph = methanol();
        let adj = adjacency(&graph);
        // carbon's neighbors: H sorts before O
        let carbon: Vec<usize> = adj[0].iter().map(|&(j, _)| j).collect();
        assert_eq!(carbon, [2, 1]);
    }

    #[test]
    fn test_rank_order() {
        let graph = methanol();
        // force the opposite order via ranks
        let adj = adjacency_by_rank(&graph, &[2, 0, 1]);
        let carbon: Vec<usize> = adj[0].iter().map(|&(j, _)| j).collect();
        assert_eq!(carbon, [1, 2]);
    }

    #[test]
    fn test_every_bond_appears_in_both_lists() {
        let graph = methanol();
        let adj = adjacency(&graph);
        assert_eq!(
            adj.iter().map(|list| list.len()).sum::<usize>(),
            2 * graph.edge_count()
        );
        assert!(adj[1].contains(&(0, BondOrder::Single)));
        assert!(adj[0].contains(&(1, BondOrder::Single)));
    }
}
