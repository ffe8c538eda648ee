//! Analysis reports in text and JSON form.

use colored::Colorize;
use nettopo_graph::{
    all_simple_paths_with_config, connected_components, count_components,
    fault_tolerance_with_config, hop_count, is_active_connected, is_fully_connected,
    reachability_percent, shortest_hop_path, spanning_forest, FaultToleranceConfig,
    FaultToleranceReport, GraphError, PathConfig, SpanningForest, Topology, TopologySnapshot,
};
use serde::Serialize;

use crate::error::{CliError, CliResult};

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON for programmatic consumption.
    Json,
}

impl OutputFormat {
    /// Parse format from string.
    pub fn parse(s: &str) -> CliResult<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CliError::Config(format!(
                "Unknown format '{}'. Valid options: text, json",
                s
            ))),
        }
    }
}

/// What to analyze.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Reachability source; defaults to the first node.
    pub from: Option<String>,
    /// Route destination for hop count and redundancy.
    pub to: Option<String>,
    /// Run the fault-tolerance sweep in parallel.
    pub parallel: bool,
    /// Limits for redundancy counting.
    pub paths: PathConfig,
}

/// Counts and connectivity flags.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub nodes: usize,
    pub active_nodes: usize,
    pub links: usize,
    pub components: usize,
    pub fully_connected: bool,
    pub active_connected: bool,
}

/// Share of nodes reachable from one source.
#[derive(Debug, Clone, Serialize)]
pub struct ReachabilityReport {
    pub from: String,
    pub percent: f64,
}

/// Hop distance and path redundancy between two nodes.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub hop_count: Option<u32>,
    pub shortest_path: Option<Vec<String>>,
    pub redundancy: usize,
    /// Redundancy is a lower bound because a path cap was hit.
    pub truncated: bool,
}

/// Full analysis of one topology.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub summary: Summary,
    pub spanning_forest: SpanningForest,
    pub reachability: ReachabilityReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<RouteReport>,
    pub fault_tolerance: FaultToleranceReport,
    pub topology: TopologySnapshot,
}

fn require_node(topology: &Topology, label: &str) -> CliResult<String> {
    if topology.contains(label) {
        Ok(label.to_string())
    } else {
        Err(GraphError::UnknownNode(label.to_string()).into())
    }
}

impl AnalysisReport {
    /// Run every analysis over `topology`.
    pub fn build(topology: &Topology, options: &AnalyzeOptions) -> CliResult<Self> {
        let fully_connected = is_fully_connected(topology)?;

        let from = match &options.from {
            Some(label) => require_node(topology, label)?,
            None => topology
                .labels()
                .next()
                .map(str::to_string)
                .ok_or(GraphError::EmptyGraph)?,
        };

        let route = match &options.to {
            Some(label) => {
                let to = require_node(topology, label)?;
                let search = all_simple_paths_with_config(topology, &from, &to, &options.paths);
                Some(RouteReport {
                    hop_count: hop_count(topology, &from, &to),
                    shortest_path: shortest_hop_path(topology, &from, &to),
                    redundancy: search.paths.len(),
                    truncated: search.truncated,
                    from: from.clone(),
                    to,
                })
            }
            None => None,
        };

        let config = if options.parallel {
            FaultToleranceConfig::new().parallel()
        } else {
            FaultToleranceConfig::new()
        };

        Ok(Self {
            summary: Summary {
                nodes: topology.node_count(),
                active_nodes: topology.active_node_count(),
                links: topology.edge_count(),
                components: count_components(&connected_components(topology)),
                fully_connected,
                active_connected: is_active_connected(topology),
            },
            spanning_forest: spanning_forest(topology),
            reachability: ReachabilityReport {
                percent: reachability_percent(topology, &from),
                from,
            },
            route,
            fault_tolerance: fault_tolerance_with_config(topology, &config)?,
            topology: topology.snapshot(),
        })
    }

    /// Pretty JSON rendering.
    pub fn to_json(&self) -> CliResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Print the human-readable report to stdout.
    pub fn print_text(&self) {
        let summary = &self.summary;

        println!("{}:", "Topology".bright_white().underline());
        println!(
            "  {} Nodes: {} ({} active)",
            "•".dimmed(),
            summary.nodes.to_string().bright_white(),
            summary.active_nodes
        );
        println!(
            "  {} Links: {}",
            "•".dimmed(),
            summary.links.to_string().bright_white()
        );
        println!(
            "  {} Components: {}",
            "•".dimmed(),
            summary.components.to_string().bright_white()
        );
        println!("  {} Fully connected: {}", "•".dimmed(), status(summary.fully_connected));
        println!(
            "  {} Active nodes connected: {}",
            "•".dimmed(),
            status(summary.active_connected)
        );
        println!();

        let forest = &self.spanning_forest;
        let title = if forest.is_spanning_tree() {
            "Minimum Spanning Tree"
        } else {
            "Minimum Spanning Forest"
        };
        println!("{}:", title.bright_white().underline());
        for edge in &forest.edges {
            println!(
                "  {} {} - {} ({})",
                "•".dimmed(),
                edge.source.bright_cyan(),
                edge.destination.bright_cyan(),
                edge.weight
            );
        }
        println!(
            "  Total weight: {}",
            forest.total_weight().to_string().bright_white()
        );
        println!();

        println!("{}:", "Reachability".bright_white().underline());
        println!(
            "  From {}: {:.1}%",
            self.reachability.from.bright_cyan(),
            self.reachability.percent
        );

        if let Some(route) = &self.route {
            let hops = match route.hop_count {
                Some(h) => h.to_string().bright_white(),
                None => "unreachable".bright_red(),
            };
            println!(
                "  {} -> {}: {} hops",
                route.from.bright_cyan(),
                route.to.bright_cyan(),
                hops
            );
            if let Some(path) = &route.shortest_path {
                println!("  Shortest path: {}", path.join(" -> "));
            }
            let bound = if route.truncated { "at least " } else { "" };
            println!(
                "  Redundancy: {}{} simple path(s)",
                bound,
                route.redundancy.to_string().bright_white()
            );
        }
        println!();

        let ft = &self.fault_tolerance;
        println!("{}:", "Fault Tolerance".bright_white().underline());
        println!(
            "  {} {}/{} single-node failures tolerated ({:.1}%)",
            status(ft.is_robust()),
            ft.tolerable_failures(),
            ft.outcomes.len(),
            ft.ratio * 100.0
        );
        let critical = ft.critical_nodes();
        if !critical.is_empty() {
            println!("  Critical nodes: {}", critical.join(", ").bright_red());
        }
    }
}

fn status(ok: bool) -> colored::ColoredString {
    if ok {
        "✓".bright_green()
    } else {
        "✗".bright_red()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nettopo_graph::Weight;

    fn make_square() -> Topology {
        let mut topology = Topology::new();
        topology.connect("A", "B", Weight::new(1)).unwrap();
        topology.connect("B", "C", Weight::new(2)).unwrap();
        topology.connect("C", "D", Weight::new(1)).unwrap();
        topology.connect("A", "D", Weight::new(4)).unwrap();
        topology
    }

    #[test]
    fn test_output_format() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::parse("yaml").is_err());
    }

    #[test]
    fn test_square_report() {
        let topology = make_square();
        let options = AnalyzeOptions {
            to: Some("C".to_string()),
            ..AnalyzeOptions::default()
        };

        let report = AnalysisReport::build(&topology, &options).unwrap();
        assert!(report.summary.fully_connected);
        assert_eq!(report.summary.components, 1);
        assert_eq!(report.spanning_forest.total_weight(), 4);
        assert_eq!(report.reachability.from, "A");
        assert_eq!(report.reachability.percent, 100.0);

        let route = report.route.unwrap();
        assert_eq!(route.hop_count, Some(2));
        assert_eq!(route.redundancy, 2);
        assert!(!route.truncated);
        assert_eq!(report.fault_tolerance.ratio, 1.0);
    }

    #[test]
    fn test_capped_redundancy() {
        let topology = make_square();
        let options = AnalyzeOptions {
            from: Some("A".to_string()),
            to: Some("C".to_string()),
            paths: PathConfig::new().with_max_paths(1),
            ..AnalyzeOptions::default()
        };

        let route = AnalysisReport::build(&topology, &options).unwrap().route.unwrap();
        assert_eq!(route.redundancy, 1);
        assert!(route.truncated);
    }

    #[test]
    fn test_disabled_node_report() {
        let mut topology = make_square();
        topology.disable_node("C").unwrap();

        let options = AnalyzeOptions {
            parallel: true,
            ..AnalyzeOptions::default()
        };
        let report = AnalysisReport::build(&topology, &options).unwrap();

        assert!(!report.summary.fully_connected);
        assert!(report.summary.active_connected);
        assert_eq!(report.reachability.percent, 100.0);
        assert_eq!(report.fault_tolerance.critical_nodes(), vec!["A"]);
        assert!(report.route.is_none());
    }

    #[test]
    fn test_unknown_endpoint() {
        let topology = make_square();
        let options = AnalyzeOptions {
            from: Some("Z".to_string()),
            ..AnalyzeOptions::default()
        };
        assert!(matches!(
            AnalysisReport::build(&topology, &options),
            Err(CliError::Graph(GraphError::UnknownNode(_)))
        ));
    }

    #[test]
    fn test_empty_topology() {
        assert!(matches!(
            AnalysisReport::build(&Topology::new(), &AnalyzeOptions::default()),
            Err(CliError::Graph(GraphError::EmptyGraph))
        ));
    }

    #[test]
    fn test_json_shape() {
        let report = AnalysisReport::build(&make_square(), &AnalyzeOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["summary"]["nodes"], 4);
        assert_eq!(value["spanning_forest"]["edges"].as_array().unwrap().len(), 3);
        assert!(value.get("route").is_none());
        assert_eq!(value["topology"]["nodes"][0], "A");
    }
}
