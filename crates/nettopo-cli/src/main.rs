//! nettopo CLI - Analyze network topology description files.
//!
//! # Commands
//!
//! - `nettopo analyze <file>` - Connectivity, MST, reachability and fault-tolerance report
//! - `nettopo paths <file>` - List simple paths between two nodes
//! - `nettopo template <kind>` - Emit a description file for a canonical shape
//!
//! # Examples
//!
//! ```bash
//! # Report on a topology, with hop count and redundancy between A and D
//! nettopo analyze office.toml --from A --to D
//!
//! # Machine-readable report with a parallel fault-tolerance sweep
//! nettopo analyze office.toml --format json --parallel
//!
//! # Generate a five-node ring
//! nettopo template ring --nodes A,B,C,D,E > ring.toml
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod report;

use commands::{analyze, paths, template};

/// nettopo - network topology analysis
#[derive(Parser)]
#[command(name = "nettopo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a topology description file
    Analyze {
        /// Topology description (TOML)
        file: PathBuf,

        /// Reachability source (default: first node)
        #[arg(long)]
        from: Option<String>,

        /// Destination for hop count and path redundancy
        #[arg(long)]
        to: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Run the fault-tolerance sweep on all cores
        #[arg(long)]
        parallel: bool,

        /// Stop counting simple paths after this many
        #[arg(long)]
        max_paths: Option<usize>,
    },

    /// List simple paths between two nodes
    Paths {
        /// Topology description (TOML)
        file: PathBuf,

        /// Start node
        #[arg(long)]
        from: String,

        /// End node
        #[arg(long)]
        to: String,

        /// Stop after this many paths
        #[arg(long)]
        max_paths: Option<usize>,

        /// Skip paths with more links than this
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Generate a description file for a canonical shape
    Template {
        /// Shape (bus, ring, star, tree, mesh)
        kind: String,

        /// Node labels (comma-separated; the first is the star hub)
        #[arg(short, long)]
        nodes: String,

        /// Weight of every link
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        weight: i64,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Analyze {
            file,
            from,
            to,
            format,
            parallel,
            max_paths,
        } => analyze::execute(
            &file,
            from.as_deref(),
            to.as_deref(),
            &format,
            parallel,
            max_paths,
        ),

        Commands::Paths {
            file,
            from,
            to,
            max_paths,
            max_depth,
        } => paths::execute(&file, &from, &to, max_paths, max_depth),

        Commands::Template {
            kind,
            nodes,
            weight,
            output,
        } => template::execute(&kind, &nodes, weight, output.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
