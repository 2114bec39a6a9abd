//! `knightpath distances`

use std::fs;
use std::path::Path;
use std::time::Instant;

use knightpath_core::error::{KnightError, Result};
use knightpath_core::format::OutputFormat;
use knightpath_core::graph::{shortest_distances_with_limits, AdjacencyGraph};
use knightpath_core::trace_time;
use serde::Serialize;

use super::{print_json, CommandContext};

/// Graph used when no `--graph` file is given
const SAMPLE_GRAPH: &[(&str, &[&str])] = &[
    ("A", &["B", "C", "D"]),
    ("B", &["E"]),
    ("C", &["B", "E", "F"]),
    ("D", &["G", "H"]),
    ("E", &["I"]),
    ("F", &[]),
    ("G", &["J"]),
    ("H", &[]),
    ("I", &[]),
    ("J", &[]),
];

#[derive(Serialize)]
struct DistanceEntry<'a> {
    node: &'a str,
    distance: usize,
}

#[derive(Serialize)]
struct DistancesOutput<'a> {
    source: &'a str,
    reachable: usize,
    distances: Vec<DistanceEntry<'a>>,
}

fn sample_graph() -> Result<AdjacencyGraph<String>> {
    AdjacencyGraph::new(SAMPLE_GRAPH.iter().map(|(node, neighbors)| {
        (
            node.to_string(),
            neighbors.iter().map(|n| n.to_string()).collect(),
        )
    }))
}

/// Load a graph file; `.json` files are JSON, anything else is TOML
fn load_graph(path: &Path) -> Result<AdjacencyGraph<String>> {
    let content = fs::read_to_string(path).map_err(|e| KnightError::invalid_graph(path, e))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let parsed = if is_json {
        AdjacencyGraph::from_json_str(&content)
    } else {
        AdjacencyGraph::from_toml_str(&content)
    };

    parsed.map_err(|e| KnightError::invalid_graph(path, e))
}

/// Execute the distances command
pub fn execute(ctx: &CommandContext, source: &str, graph_path: Option<&Path>) -> Result<()> {
    let start = Instant::now();

    let graph = match graph_path {
        Some(path) => load_graph(path)?,
        None => sample_graph()?,
    };
    trace_time!(start, "load_graph", nodes = graph.len());

    let source = source.to_string();
    let distances = shortest_distances_with_limits(&graph, &source, &ctx.limits)?
        .ok_or_else(|| KnightError::UnknownNode {
            node: source.clone(),
        })?;

    match ctx.format {
        OutputFormat::Json => {
            let entries = distances
                .iter()
                .map(|(node, distance)| DistanceEntry {
                    node: node.as_str(),
                    distance,
                })
                .collect();
            print_json(&DistancesOutput {
                source: &source,
                reachable: distances.len(),
                distances: entries,
            })?;
        }
        OutputFormat::Human => {
            if !ctx.quiet {
                println!(
                    "Distances from {} ({} of {} nodes reachable):",
                    source,
                    distances.len(),
                    graph.len()
                );
            }
            for (node, distance) in distances.iter() {
                println!("{}: {}", node, distance);
            }
        }
    }

    Ok(())
}
