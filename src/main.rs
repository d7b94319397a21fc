use flowport::catalog::NodeTypeCatalog;
use flowport::graph::{Workflow, WorkflowGraph};
use flowport::registry::TypeRegistry;
use flowport::validate::{ConnectionAttempt, ConnectionValidator};
use std::env;
use std::fs;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/workflow.json> [path/to/catalog.json]");
        std::process::exit(1);
    }

    let workflow_path = &args[1];
    let catalog_path = args.get(2);

    println!("Loading workflow from: {}", workflow_path);
    let workflow_json = match fs::read_to_string(workflow_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read workflow file '{}': {}", workflow_path, e);
            std::process::exit(1);
        }
    };

    let workflow = match Workflow::from_json(&workflow_json) {
        Ok(workflow) => workflow,
        Err(e) => {
            eprintln!("Failed to parse workflow: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = if let Some(path) = catalog_path {
        println!("Loading catalog from: {}", path);
        let catalog_json = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Failed to read catalog file '{}': {}", path, e);
                std::process::exit(1);
            }
        };
        match NodeTypeCatalog::from_json(&catalog_json) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to parse catalog: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("No catalog file provided. Using the built-in catalog.");
        NodeTypeCatalog::builtin()
    };

    let registry = TypeRegistry::with_defaults();
    let validator = ConnectionValidator::new(&registry, &catalog);

    println!(
        "\nWorkflow '{}': {} nodes, {} connections",
        workflow.name,
        workflow.nodes.len(),
        workflow.connections.len()
    );

    // Re-validate every stored connection against the loaded tables by
    // replaying it into an empty copy of the node set.
    let connections = workflow.connections.clone();
    let mut replay = WorkflowGraph::from_workflow(Workflow {
        connections: Vec::new(),
        ..workflow
    });

    let mut accepted = 0usize;
    let mut rejected = 0usize;
    for connection in &connections {
        let attempt = ConnectionAttempt::new(
            connection.from.node,
            &connection.from.port,
            connection.to.node,
            &connection.to.port,
        );
        match replay.connect(&validator, &attempt) {
            Ok(_) => accepted += 1,
            Err(e) => {
                rejected += 1;
                println!("  -> Connection '{}' rejected: {}", connection.id, e);
            }
        }
    }

    println!("\nValidation finished!");
    println!("  -> Accepted: {}", accepted);
    println!("  -> Rejected: {}", rejected);
    if rejected > 0 {
        std::process::exit(1);
    }
}
