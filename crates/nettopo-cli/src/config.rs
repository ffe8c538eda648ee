//! Topology description files.
//!
//! A description is a TOML document listing nodes, weighted links and the
//! overlay to apply, optionally seeded from a canonical template:
//!
//! ```toml
//! nodes = ["A", "B", "C"]
//! disabled_nodes = ["C"]
//!
//! [[links]]
//! from = "A"
//! to = "B"
//! weight = 1
//!
//! [template]
//! kind = "ring"
//! nodes = ["X", "Y", "Z"]
//!
//! [analysis]
//! parallel = true
//! max_paths = 10000
//! ```
//!
//! Weights are read as signed integers so negative values can be reported
//! as [`GraphError::InvalidWeight`] rather than as a parse failure.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use nettopo_graph::{build_topology, GraphError, PathConfig, Topology, TopologyKind, Weight};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliResult;

fn default_weight() -> i64 {
    1
}

/// A weighted link between two labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: i64,
}

/// A link pair to disable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkRef {
    pub from: String,
    pub to: String,
}

/// Canonical shape to seed the topology with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateSpec {
    pub kind: TopologyKind,
    pub nodes: Vec<String>,
    #[serde(default = "default_weight")]
    pub weight: i64,
}

/// Analysis defaults; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisSettings {
    /// Run the fault-tolerance sweep on the rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Cap on enumerated simple paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_paths: Option<usize>,
    /// Cap on links per enumerated path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl AnalysisSettings {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Path enumeration limits.
    pub fn path_config(&self) -> PathConfig {
        PathConfig {
            max_paths: self.max_paths,
            max_depth: self.max_depth,
        }
    }
}

/// Parsed topology description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopologyFile {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_nodes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<LinkSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disabled_links: Vec<LinkRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateSpec>,
    #[serde(default, skip_serializing_if = "AnalysisSettings::is_default")]
    pub analysis: AnalysisSettings,
}

impl TopologyFile {
    /// Read and parse a description file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)?;
        let file = Self::parse(&content)?;
        debug!(
            "Loaded {}: {} nodes, {} links",
            path.display(),
            file.nodes.len(),
            file.links.len()
        );
        Ok(file)
    }

    /// Parse a description from TOML text.
    pub fn parse(content: &str) -> CliResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML text.
    pub fn to_toml(&self) -> CliResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Describe a generated template as explicit nodes and links.
    pub fn from_template(kind: TopologyKind, labels: &[String], weight: i64) -> CliResult<Self> {
        let weight_value = Weight::try_from(weight)?;
        let topology = build_topology(kind, labels, weight_value)?;

        let links = topology
            .links()
            .iter()
            .map(|link| LinkSpec {
                from: topology.label(link.source).to_string(),
                to: topology.label(link.destination).to_string(),
                weight: i64::from(link.weight.get()),
            })
            .collect();

        Ok(Self {
            nodes: labels.to_vec(),
            links,
            ..Self::default()
        })
    }

    /// Build the topology, applying template, nodes, links and overlay in order.
    pub fn to_topology(&self) -> CliResult<Topology> {
        let mut topology = match &self.template {
            Some(template) => {
                let weight = Weight::try_from(template.weight)?;
                build_topology(template.kind, &template.nodes, weight)?
            }
            None => Topology::new(),
        };

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.as_str()) {
                return Err(GraphError::DuplicateNode(node.clone()).into());
            }
            topology.add_node(node)?;
        }

        for link in &self.links {
            let weight = Weight::try_from(link.weight)?;
            topology.add_edge(&link.from, &link.to, weight)?;
        }

        for node in &self.disabled_nodes {
            topology.disable_node(node)?;
        }
        for link in &self.disabled_links {
            topology.disable_link(&link.from, &link.to)?;
        }

        Ok(topology)
    }
}
