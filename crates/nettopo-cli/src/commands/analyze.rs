//! `nettopo analyze` command - Full structural report for a topology file.

use std::path::Path;

use colored::Colorize;
use tracing::info;

use crate::error::CliResult;
use crate::report::{AnalysisReport, AnalyzeOptions, OutputFormat};

use super::load_topology;

/// Execute the `analyze` command.
pub fn execute(
    file: &Path,
    from: Option<&str>,
    to: Option<&str>,
    format: &str,
    parallel: bool,
    max_paths: Option<usize>,
) -> CliResult<()> {
    let format = OutputFormat::parse(format)?;
    let (description, topology) = load_topology(file)?;

    // Flags override the file's [analysis] table
    let mut paths = description.analysis.path_config();
    if max_paths.is_some() {
        paths.max_paths = max_paths;
    }
    let options = AnalyzeOptions {
        from: from.map(str::to_string),
        to: to.map(str::to_string),
        parallel: parallel || description.analysis.parallel,
        paths,
    };

    info!(
        "Analyzing {} ({} nodes, {} links)",
        file.display(),
        topology.node_count(),
        topology.edge_count()
    );
    let report = AnalysisReport::build(&topology, &options)?;

    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => {
            println!(
                "{} Analysis of {}",
                "→".bright_cyan(),
                file.display().to_string().bright_yellow()
            );
            println!();
            report.print_text();
        }
    }

    Ok(())
}
