use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use graphwalk::config::{load_graph, save_graph, GRAPH_FILENAME};
use graphwalk::errors::GraphWalkError;
use graphwalk::graph::{traverse, Graph};
use graphwalk::output::{format_traversal_as_json, format_traversal_as_text};
use graphwalk::types::{OutputFormat, Strategy};

/// Deterministic BFS/DFS traversal over directed graphs.
#[derive(Parser)]
#[command(
    name = "graphwalk",
    about = "Deterministic BFS/DFS traversal over directed graphs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample graph definition file
    Init {
        /// Target path (default: graph.json in the current directory)
        path: Option<String>,
    },
    /// Show the structure of a graph definition
    Show {
        /// Graph file (default: graph.json)
        #[arg(short, long)]
        file: Option<String>,
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Run a traversal from a start node
    Run {
        /// Start node identifier
        start: String,
        /// Graph file (default: graph.json)
        #[arg(short, long)]
        file: Option<String>,
        /// Traversal strategy (bfs or dfs)
        #[arg(short, long, default_value = "bfs")]
        strategy: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> graphwalk::errors::Result<()> {
    match cli.command {
        Commands::Init { path } => {
            let target = resolve_file(path);
            save_graph(&target, &Graph::sample())?;
            println!("Wrote sample graph to {}", target.display());
        }
        Commands::Show { file, json } => {
            let graph = load_graph(&resolve_file(file))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&graph)?);
            } else {
                println!("Graph structure");
                println!("  Nodes: {}", graph.node_count());
                println!("  Edges: {}", graph.edge_count());
                for node in graph.nodes() {
                    let successors = graph.successors(node);
                    if successors.is_empty() {
                        println!("    {} -> (none)", node);
                    } else {
                        println!("    {} -> {}", node, successors.join(", "));
                    }
                }
            }
        }
        Commands::Run {
            start,
            file,
            strategy,
            format,
        } => {
            let graph = load_graph(&resolve_file(file))?;
            let strategy =
                Strategy::from_str(&strategy).ok_or_else(|| GraphWalkError::Config {
                    message: format!("unknown strategy '{}', expected 'bfs' or 'dfs'", strategy),
                })?;
            let output_format = if format == "json" {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            };
            let traversal = traverse(&graph, &start, strategy)?;
            match output_format {
                OutputFormat::Json => {
                    println!("{}", format_traversal_as_json(&traversal));
                }
                OutputFormat::Text => {
                    print!("{}", format_traversal_as_text(&traversal));
                }
            }
        }
    }
    Ok(())
}

/// Resolves an optional file argument, defaulting to `graph.json` in the
/// current directory.
fn resolve_file(file: Option<String>) -> PathBuf {
    match file {
        Some(f) => PathBuf::from(f),
        None => PathBuf::from(GRAPH_FILENAME),
    }
}
