use std::fmt::Write as FmtWrite;
use std::io::Write;

use anyhow::{anyhow, Context, Result};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use tracing::info;

use crate::{element_color, BondOrder, Canonicalization, MoleculeGraph};

/// Renders the canonical structure to a DOT file and optionally to an image.
///
/// # Arguments
///
/// * `graph` - The molecule graph to visualize.
/// * `canon` - The canonicalization supplying stable node identities.
/// * `output_dot` - The path to save the DOT file.
/// * `output_image` - Optional path to save the rendered image (e.g., "molecule.png").
pub fn visualize_graph(
    graph: &MoleculeGraph,
    canon: &Canonicalization,
    output_dot: &str,
    output_image: Option<&str>,
) -> Result<()> {
    let dot_string = generate_dot(graph, canon);

    let mut file = std::fs::File::create(output_dot)
        .with_context(|| format!("Failed to create DOT file {output_dot}"))?;
    file.write_all(dot_string.as_bytes())
        .with_context(|| format!("Failed to write to DOT file {output_dot}"))?;

    info!("DOT file saved to {}", output_dot);

    // Rendering requires Graphviz's 'dot' on the system PATH
    if let Some(image_path) = output_image {
        let status = std::process::Command::new("dot")
            .args(["-Tpng", output_dot, "-o", image_path])
            .status()
            .context("Failed to execute Graphviz 'dot' command")?;

        if !status.success() {
            return Err(anyhow!(
                "Graphviz 'dot' command failed with status: {status}"
            ));
        }

        info!("Image rendered to {}", image_path);
    }

    Ok(())
}

/// Generates a DOT description of the canonical structure. Nodes are
/// identified by canonical rank and colored from the element table; double
/// and triple bonds are drawn as parallel edges.
pub fn generate_dot(graph: &MoleculeGraph, canon: &Canonicalization) -> String {
    let mut dot_output = String::new();
    writeln!(dot_output, "graph Molecule {{").unwrap();
    writeln!(dot_output, "    layout=neato; rankdir=LR;").unwrap();

    let mut nodes: Vec<NodeIndex> = graph.node_indices().collect();
    nodes.sort_by_key(|&node| canon.global_rank(node));
    for node in nodes {
        let atom = &graph[node];
        writeln!(
            dot_output,
            "    {} [label=\"{}\", fontcolor=white, shape=circle, style=filled, fillcolor={color}];",
            canon.global_rank(node),
            atom.symbol,
            color = element_color(atom.symbol.as_ref())
        )
        .unwrap();
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
        for _ in 0..order.order() {
            writeln!(
                dot_output,
                "    {} -- {} [style=solid, penwidth=2];",
                a, b
            )
            .unwrap();
        }
    }

    writeln!(dot_output, "}}").unwrap();

    dot_output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_graph, AtomRecord, BondRecord, Canonicalize, MolfileRecords, Symbol};

    fn dioxide_dot() -> String {
        let records = MolfileRecords {
            declared_atom_count: 3,
            declared_bond_count: 2,
            atoms: ["O", "C", "O"]
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
                    order: 2,
                    a: 1,
                    b: 2,
                },
                BondRecord {
                    original_index: 2,
                    order: 2,
                    a: 2,
                    b: 3,
                },
            ],
        };
        let graph = build_graph(&records).unwrap();
        let canon = graph.canonicalize();
        generate_dot(&graph, &canon)
    }

    #[test]
    fn test_nodes_are_labeled_by_rank_and_colored() {
        let dot = dioxide_dot();
        assert!(dot.contains(
            "0 [label=\"C\", fontcolor=white, shape=circle, style=filled, fillcolor=black];"
        ));
        assert!(dot.contains(
            "1 [label=\"O\", fontcolor=white, shape=circle, style=filled, fillcolor=red];"
        ));
    }

    #[test]
    fn test_double_bonds_are_drawn_twice() {
        let dot = dioxide_dot();
        assert_eq!(dot.matches("    0 -- 1 ").count(), 2);
        assert_eq!(dot.matches("    0 -- 2 ").count(), 2);
    }
}
