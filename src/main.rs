use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dfs_tree::{AdjacencyGraph, DfsTree, DfsTreeBuilder};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "dfs-tree")]
#[command(about = "Depth-first spanning trees of adjacency-list graphs", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the trees of the built-in example graphs
    Demo,
    /// Build the tree of a graph stored as a JSON array of adjacency lists
    Build {
        /// Path to the JSON graph, e.g. [[1,2],[0,2],[0,1,3],[2]]
        file: PathBuf,

        /// Start vertex
        #[arg(long, default_value_t = 0)]
        root: usize,

        /// Reject graphs with one-way edges
        #[arg(long, default_value_t = false)]
        require_symmetric: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

const DEMOS: &[(&str, &[&[usize]])] = &[
    (
        "Example 1: spanning tree of a graph with a cycle",
        &[&[1, 2], &[0, 2], &[0, 1, 3], &[2]],
    ),
    (
        "Example 2: spanning tree of the linear graph 0-1-2-3",
        &[&[1], &[0, 2], &[1, 3], &[2]],
    ),
];

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Demo => run_demo()?,
        Commands::Build {
            file,
            root,
            require_symmetric,
            format,
        } => {
            let builder = DfsTreeBuilder::new()
                .root(root)
                .require_symmetric(require_symmetric);
            let tree = build_from_file(&file, &builder)?;
            print_tree(&tree, format)?;
        }
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    for (i, (title, graph)) in DEMOS.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let tree = dfs_tree::build_dfs_tree(graph)
            .with_context(|| format!("building demo graph {}", i + 1))?;
        println!("{title}");
        print!("{tree}");
    }
    Ok(())
}

fn build_from_file(path: &Path, builder: &DfsTreeBuilder) -> Result<DfsTree> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph from {}", path.display()))?;
    let rows: Vec<Vec<i64>> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of integer arrays", path.display()))?;

    let graph = AdjacencyGraph::from_signed(&rows)
        .with_context(|| format!("Invalid graph in {}", path.display()))?;
    info!(
        vertices = graph.vertex_count(),
        entries = graph.edge_count(),
        "loaded graph"
    );

    let tree = builder.build_graph(&graph)?;
    info!(
        root = tree.root(),
        spanned = tree.vertex_count(),
        "built spanning tree"
    );
    Ok(tree)
}

fn print_tree(tree: &DfsTree, format: Format) -> Result<()> {
    print!("{}", render_tree(tree, format)?);
    Ok(())
}

fn render_tree(tree: &DfsTree, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => tree.to_string(),
        Format::Json => serde_json::to_string_pretty(tree)? + "\n",
    })
}
