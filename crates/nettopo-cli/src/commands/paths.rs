//! `nettopo paths` command - List simple paths between two nodes.

use std::path::Path;

use colored::Colorize;
use nettopo_graph::{all_simple_paths_with_config, GraphError};

use crate::error::CliResult;

use super::load_topology;

/// Execute the `paths` command.
pub fn execute(
    file: &Path,
    from: &str,
    to: &str,
    max_paths: Option<usize>,
    max_depth: Option<usize>,
) -> CliResult<()> {
    let (description, topology) = load_topology(file)?;

    for label in [from, to] {
        if !topology.contains(label) {
            return Err(GraphError::UnknownNode(label.to_string()).into());
        }
    }

    let mut config = description.analysis.path_config();
    if max_paths.is_some() {
        config.max_paths = max_paths;
    }
    if max_depth.is_some() {
        config.max_depth = max_depth;
    }

    let search = all_simple_paths_with_config(&topology, from, to, &config);

    println!(
        "{} Simple paths {} -> {}",
        "→".bright_cyan(),
        from.bright_yellow(),
        to.bright_yellow()
    );
    println!();

    if search.paths.is_empty() {
        println!("  {}", "No path".bright_red());
        return Ok(());
    }

    for (i, path) in search.paths.iter().enumerate() {
        println!(
            "  {} {} ({} hops)",
            format!("{:>3}.", i + 1).dimmed(),
            path.join(" -> "),
            path.len() - 1
        );
    }

    println!();
    if search.truncated {
        println!(
            "{} {} path(s) listed, limit reached",
            "Warning:".yellow(),
            search.paths.len()
        );
    } else {
        println!(
            "{} {} path(s)",
            "✓".bright_green(),
            search.paths.len().to_string().bright_white()
        );
    }

    Ok(())
}
