//! Canonical atom ranking by iterative invariant refinement with
//! deterministic tie-breaking.
//!
//! Atoms start partitioned by (atomic number, degree). Each refinement round
//! re-derives the partition from the signature (own class, sorted multiset of
//! (neighbor class, bond order)) until the partition is equitable. Classes
//! the invariant cannot separate are broken by individualization: the member
//! with the lowest original input index is promoted to its own class and
//! refinement resumes, until every atom sits in a singleton class.

use std::collections::BTreeMap;

use petgraph::graph::NodeIndex;
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use tracing::{debug, trace};

use crate::{adjacency, component_string, Adjacency, Atom, BondOrder, MoleculeGraph};

/// One connected component with its atoms in canonical order; an atom's
/// rank within the component is its position in `nodes`.
#[derive(Debug, Clone)]
pub struct CanonicalComponent {
    pub nodes: Vec<NodeIndex>,
}

/// The result of canonicalizing a molecule graph: a rank per atom plus the
/// deterministic component order.
#[derive(Debug, Clone)]
pub struct Canonicalization {
    components: Vec<CanonicalComponent>,
    ranks: Vec<usize>,
    global_ranks: Vec<usize>,
}

impl Canonicalization {
    /// Components ordered by ascending serialized form.
    pub fn components(&self) -> &[CanonicalComponent] {
        &self.components
    }

    /// Rank of an atom within its component.
    pub fn rank(&self, node: NodeIndex) -> usize {
        self.ranks[node.index()]
    }

    /// Per-component ranks indexed by dense node index.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Rank unique across the whole graph, counting components in their
    /// canonical order.
    pub fn global_rank(&self, node: NodeIndex) -> usize {
        self.global_ranks[node.index()]
    }

    pub fn global_ranks(&self) -> &[usize] {
        &self.global_ranks
    }
}

pub trait Canonicalize {
    fn canonicalize(&self) -> Canonicalization;
}

impl Canonicalize for MoleculeGraph {
    fn canonicalize(&self) -> Canonicalization {
        let adj = adjacency(self);
        let mut ranks = vec![0usize; self.node_count()];
        let mut components = Vec::new();
        for members in connected_components(self) {
            let nodes = component_canonical_order(self, &adj, &members);
            for (rank, node) in nodes.iter().enumerate() {
                ranks[node.index()] = rank;
            }
            components.push(CanonicalComponent { nodes });
        }

        // order components by their serialized form so the identifier does
        // not depend on the order in which fragments were listed
        let mut keyed: Vec<(String, CanonicalComponent)> = components
            .into_iter()
            .map(|c| (component_string(self, &ranks, &c), c))
            .collect();
        keyed.sort_by(|a, b| a.0.cmp(&b.0));
        let components: Vec<CanonicalComponent> = keyed.into_iter().map(|(_, c)| c).collect();

        let mut global_ranks = vec![0usize; self.node_count()];
        let mut next = 0;
        for component in &components {
            for node in &component.nodes {
                global_ranks[node.index()] = next;
                next += 1;
            }
        }

        Canonicalization {
            components,
            ranks,
            global_ranks,
        }
    }
}

fn connected_components(graph: &MoleculeGraph) -> Vec<Vec<usize>> {
    let mut sets: UnionFind<usize> = UnionFind::new(graph.node_count());
    for edge in graph.edge_references() {
        sets.union(edge.source().index(), edge.target().index());
    }
    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for i in 0..graph.node_count() {
        groups.entry(sets.find(i)).or_default().push(i);
    }
    groups.into_values().collect()
}

/// Sorts `keyed` and writes a dense class id (ascending by key) for every
/// member into `class`. Returns the number of distinct classes.
fn assign_classes<K: Ord>(keyed: &mut [(K, usize)], class: &mut [usize]) -> usize {
    keyed.sort();
    let mut id = 0;
    for w in 0..keyed.len() {
        if w > 0 && keyed[w].0 != keyed[w - 1].0 {
            id += 1;
        }
        class[keyed[w].1] = id;
    }
    id + 1
}

fn component_canonical_order(
    graph: &MoleculeGraph,
    adj: &Adjacency,
    members: &[usize],
) -> Vec<NodeIndex> {
    let n = members.len();
    let mut class = vec![0usize; adj.len()];

    let mut keyed: Vec<((usize, usize), usize)> = members
        .iter()
        .map(|&i| {
            let atom = &graph[NodeIndex::new(i)];
            ((atom.atomic_number, adj[i].len()), i)
        })
        .collect();
    let mut n_classes = assign_classes(&mut keyed, &mut class);

    loop {
        // refine to the equitable fixed point; every productive round adds at
        // least one class, so the round count is bounded by the atom count
        for round in 0..n {
            let before = n_classes;
            let mut keyed: Vec<((usize, Vec<(usize, u8)>), usize)> = members
                .iter()
                .map(|&i| {
                    let mut neighborhood: Vec<(usize, u8)> = adj[i]
                        .iter()
                        .map(|&(j, order)| (class[j], order.order()))
                        .collect();
                    neighborhood.sort_unstable();
                    ((class[i], neighborhood), i)
                })
                .collect();
            n_classes = assign_classes(&mut keyed, &mut class);
            trace!(round, classes = n_classes, "refinement round");
            if n_classes == before {
                break;
            }
        }

        if n_classes == n {
            break;
        }

        // the invariant alone cannot separate the remaining ties, which
        // happens exactly for structurally interchangeable atoms; promote the
        // lowest-original-index member of the lowest tied class to its own
        // class and refine again
        let mut sizes = vec![0usize; n_classes];
        for &i in members {
            sizes[class[i]] += 1;
        }
        let Some(target) = sizes.iter().position(|&s| s > 1) else {
            break;
        };
        let Some(chosen) = members
            .iter()
            .copied()
            .filter(|&i| class[i] == target)
            .min_by_key(|&i| graph[NodeIndex::new(i)].original_index)
        else {
            break;
        };
        debug!(
            atom = graph[NodeIndex::new(chosen)].original_index,
            class = target,
            "individualizing tied atom"
        );
        for &i in members {
            if class[i] > target || (class[i] == target && i != chosen) {
                class[i] += 1;
            }
        }
        n_classes += 1;
    }

    let mut order = members.to_vec();
    order.sort_by_key(|&i| class[i]);
    order.into_iter().map(NodeIndex::new).collect()
}

/// Rebuilds the graph with atoms added in canonical order and original
/// indices restamped to match, so canonicalizing the result reproduces the
/// same rank assignment.
pub fn rebuild_canonical(graph: &MoleculeGraph, canon: &Canonicalization) -> MoleculeGraph {
    let mut order: Vec<NodeIndex> = graph.node_indices().collect();
    order.sort_by_key(|&node| canon.global_rank(node));

    let mut rebuilt = MoleculeGraph::with_capacity(graph.node_count(), graph.edge_count());
    for node in order {
        let atom = &graph[node];
        rebuilt.add_node(Atom {
            symbol: atom.symbol.clone(),
            atomic_number: atom.atomic_number,
            original_index: canon.global_rank(node) + 1,
        });
    }

    let mut edges: Vec<(usize, usize, BondOrder)> = graph
        .edge_references()
        .map(|edge| {
            let (a, b) = (
                canon.global_rank(edge.source()),
                canon.global_rank(edge.target()),
            );
            (a.min(b), a.max(b), *edge.weight())
        })
        .collect();
    edges.sort_unstable();
    for (a, b, order) in edges {
        rebuilt.add_edge(NodeIndex::new(a), NodeIndex::new(b), order);
    }
    rebuilt
}
