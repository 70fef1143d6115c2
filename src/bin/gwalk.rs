//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graphwalk::cli::commands;
use graphwalk::GraphError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "graphwalk CLI — BFS/DFS traversal over edge-list graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about an edge-list file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Print breadth-first order from a root vertex
    Bfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Root vertex name
        root: String,
    },
    /// Print depth-first pre-order from a root vertex
    Dfs {
        /// Path to the edge-list file
        file: PathBuf,
        /// Root vertex name
        root: String,
    },
    /// List connected components
    Components {
        /// Path to the edge-list file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Bfs { file, root } => commands::cmd_bfs(&file, &root, json),
        Commands::Dfs { file, root } => commands::cmd_dfs(&file, &root, json),
        Commands::Components { file } => commands::cmd_components(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::MalformedEdgeList { .. } => 2,
            GraphError::RootNotFound | GraphError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
