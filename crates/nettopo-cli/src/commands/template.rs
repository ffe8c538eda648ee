//! `nettopo template` command - Emit a description file for a canonical shape.

use std::fs;
use std::path::Path;

use colored::Colorize;
use nettopo_graph::TopologyKind;

use crate::config::TopologyFile;
use crate::error::{CliError, CliResult};

use super::parse_labels;

/// Execute the `template` command.
pub fn execute(kind: &str, nodes: &str, weight: i64, output: Option<&Path>) -> CliResult<()> {
    let kind: TopologyKind = kind.parse()?;
    let labels = parse_labels(nodes);
    if labels.is_empty() {
        return Err(CliError::Config("--nodes needs at least one label".to_string()));
    }

    let text = TopologyFile::from_template(kind, &labels, weight)?.to_toml()?;

    match output {
        Some(path) => {
            fs::write(path, &text)?;
            println!(
                "{} Wrote {} topology ({} nodes) to {}",
                "✓".bright_green(),
                kind.as_str().bright_white(),
                labels.len(),
                path.display().to_string().bright_yellow()
            );
        }
        None => print!("{}", text),
    }

    Ok(())
}
