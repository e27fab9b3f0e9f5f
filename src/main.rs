use anyhow::{Context, Result};
use clap::Parser;
use ninchi::{
    build_graph, generate_dot, init_logging, parse_molfile, permute_records, write_ninchi,
    Canonicalize,
};
use tracing::info;

/// A new International Chemical Identifier (nInChI) v2.1
#[derive(Parser, Debug)]
#[command(name = "ninchi")]
#[command(about = "Derive a canonical nInChI identifier from a molfile")]
struct Args {
    /// Path to the molfile to read
    #[arg(long)]
    molfile: String,

    /// Permute the atom order before canonicalization
    #[arg(long)]
    permute_input: bool,

    /// Seed for --permute-input
    #[arg(long, default_value_t = 181)]
    seed: u64,

    /// Print a DOT description of the canonical graph
    #[arg(long)]
    dot_file: bool,
}

fn main() -> Result<()> {
    init_logging("info");
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.molfile)
        .with_context(|| format!("Failed to read molfile {}", args.molfile))?;
    let mut records = parse_molfile(&text)
        .with_context(|| format!("Failed to parse molfile {}", args.molfile))?;
    if args.permute_input {
        info!(seed = args.seed, "permuting input atom order");
        records = permute_records(&records, args.seed);
    }

    let graph = build_graph(&records).context("Molfile records are structurally inconsistent")?;
    let canon = graph.canonicalize();
    println!("{}", write_ninchi(&graph, &canon));

    if args.dot_file {
        println!("{}", generate_dot(&graph, &canon));
        println!("Output format: DOT file - to display go to https://dreampuf.github.io/GraphvizOnline/#");
    }

    Ok(())
}
