use clap::Parser;
use flowport::prelude::*;
use std::fs;
use std::time::Instant;

/// Validate and normalize visual-workflow JSON files against a node catalog
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file to validate
    workflow_path: String,

    /// Optional path to a catalog JSON document (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<String>,

    /// Optional path to a type-table JSON document (defaults to the built-in table)
    #[arg(short, long)]
    types: Option<String>,

    /// Accept every type pairing (development mode; logged)
    #[arg(long)]
    permit_all: bool,

    /// Re-export the normalized workflow to this path after validation
    #[arg(short, long)]
    export: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. File loading ---
    let load_start = Instant::now();
    let workflow_json = fs::read_to_string(&cli.workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read workflow file '{}': {}",
            &cli.workflow_path, e
        ))
    });
    let catalog = match &cli.catalog {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read catalog file '{}': {}", path, e))
            });
            NodeTypeCatalog::from_json(&json)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse catalog: {}", e)))
        }
        None => NodeTypeCatalog::builtin(),
    };
    let registry = match &cli.types {
        Some(path) => {
            let json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read type table '{}': {}", path, e))
            });
            TypeRegistry::from_json(&json)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse type table: {}", e)))
        }
        None => TypeRegistry::with_defaults(),
    };
    let registry = if cli.permit_all {
        registry.with_mode(CompatibilityMode::PermitAll)
    } else {
        registry
    };
    let load_duration = load_start.elapsed();

    // --- 2. Parsing ---
    let workflow = Workflow::from_json(&workflow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse workflow: {}", e)));
    println!(
        "Workflow '{}': {} nodes, {} connections",
        workflow.name,
        workflow.nodes.len(),
        workflow.connections.len()
    );

    for node in &workflow.nodes {
        if !catalog.contains(&node.node_type) {
            println!(
                "  -> Warning: node {} has unknown node type '{}'",
                node.id, node.node_type
            );
        }
    }

    // --- 3. Connection re-validation ---
    let validate_start = Instant::now();
    let validator = ConnectionValidator::new(&registry, &catalog);
    let connections = workflow.connections.clone();
    let mut replay = WorkflowGraph::from_workflow(Workflow {
        connections: Vec::new(),
        ..workflow
    });

    let mut rejected = 0usize;
    for connection in &connections {
        let attempt = ConnectionAttempt::new(
            connection.from.node,
            &connection.from.port,
            connection.to.node,
            &connection.to.port,
        );
        if let Err(e) = replay.connect(&validator, &attempt) {
            rejected += 1;
            println!("  -> Rejected '{}': {}", connection.id, e);
        }
    }
    let validate_duration = validate_start.elapsed();

    println!(
        "Validation finished: {} accepted, {} rejected",
        connections.len() - rejected,
        rejected
    );

    // --- 4. Optional normalized re-export ---
    if let Some(export_path) = &cli.export {
        let json = replay
            .workflow()
            .to_json()
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize workflow: {}", e)));
        fs::write(export_path, json).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to write '{}': {}", export_path, e))
        });
        println!("Wrote normalized workflow to '{}'", export_path);
    }

    println!("\n--- Performance Summary ---");
    println!("File Loading: {:?}", load_duration);
    println!("Validation:   {:?}", validate_duration);
    println!("Total:        {:?}", total_start.elapsed());

    if rejected > 0 {
        std::process::exit(1);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
