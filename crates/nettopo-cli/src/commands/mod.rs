//! CLI command implementations.

pub mod analyze;
pub mod paths;
pub mod template;

use std::path::Path;

use nettopo_graph::Topology;

use crate::config::TopologyFile;
use crate::error::CliResult;

/// Parse a comma-separated label list.
pub fn parse_labels(labels: &str) -> Vec<String> {
    labels
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Load a description file and build its topology.
pub fn load_topology(path: &Path) -> CliResult<(TopologyFile, Topology)> {
    let file = TopologyFile::load(path)?;
    let topology = file.to_topology()?;
    Ok((file, topology))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(parse_labels("A, B,C"), vec!["A", "B", "C"]);
        assert_eq!(parse_labels(" A ,, B ,"), vec!["A", "B"]);
        assert!(parse_labels("").is_empty());
    }
}
