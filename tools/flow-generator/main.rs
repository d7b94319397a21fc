use clap::Parser;
use flowport::prelude::*;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::fs;

/// A CLI tool to generate random demo workflows against the built-in catalog
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Number of nodes to place
    #[arg(long, default_value_t = 8)]
    nodes: usize,

    /// Number of connection attempts to make between random ports
    #[arg(long, default_value_t = 24)]
    attempts: usize,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    let registry = TypeRegistry::with_defaults();
    let catalog = NodeTypeCatalog::builtin();
    let validator = ConnectionValidator::new(&registry, &catalog);

    let type_ids: Vec<String> = catalog.iter().map(|t| t.id.clone()).collect();
    let mut graph = WorkflowGraph::new("generated workflow");

    println!("Placing {} nodes...", cli.nodes);
    for _ in 0..cli.nodes {
        let Some(node_type) = type_ids.choose(&mut rng) else {
            break;
        };
        let position = Position::new(rng.random_range(0.0..1600.0), rng.random_range(0.0..900.0));
        graph.add_node(node_type, position);
    }

    println!("Attempting {} random connections...", cli.attempts);
    let mut accepted = 0usize;
    for _ in 0..cli.attempts {
        let Some(attempt) = random_attempt(&mut rng, &graph, &catalog) else {
            continue;
        };
        if graph.connect(&validator, &attempt).is_ok() {
            accepted += 1;
        }
    }
    println!(
        "-> {} connections accepted out of {} attempts.",
        accepted, cli.attempts
    );

    let json = graph.workflow().to_json()?;
    fs::write(&cli.output, json)?;
    println!(
        "Successfully generated and saved demo workflow to '{}'",
        cli.output
    );

    Ok(())
}

/// Picks a random output port on one node and a random input port on another.
fn random_attempt(
    rng: &mut ThreadRng,
    graph: &WorkflowGraph,
    catalog: &NodeTypeCatalog,
) -> Option<ConnectionAttempt> {
    let from = graph.nodes().choose(rng)?;
    let to = graph.nodes().choose(rng)?;
    let from_port = catalog.ports(&from.node_type).outputs.choose(rng)?;
    let to_port = catalog.ports(&to.node_type).inputs.choose(rng)?;
    Some(ConnectionAttempt::new(
        from.id,
        &from_port.id,
        to.id,
        &to_port.id,
    ))
}
