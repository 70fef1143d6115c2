//! CLI command implementations.

use std::path::Path;

use crate::graph::UndirectedGraph;
use crate::traverse::{connected_components, BreadthFirstIter, DepthFirstIter};
use crate::types::{GraphError, GraphResult};

/// Load a graph from a plain edge-list text file.
///
/// Blank lines and `#` comments are ignored. A line with a single token
/// declares an isolated vertex; two whitespace-separated tokens declare an
/// edge (auto-creating endpoints). Anything else is malformed. This format
/// is CLI input plumbing only — the library itself has no persistence
/// surface.
pub fn load_graph(path: &Path) -> GraphResult<UndirectedGraph<String>> {
    let text = std::fs::read_to_string(path)?;
    let mut graph = UndirectedGraph::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(v), None, _) => {
                graph.add_vertex(v.to_string());
            }
            (Some(a), Some(b), None) => {
                graph.add_vertex(a.to_string());
                graph.add_vertex(b.to_string());
                if !graph.add_edge(a.to_string(), b.to_string()) {
                    log::debug!("line {}: duplicate or self edge ignored", idx + 1);
                }
            }
            _ => {
                return Err(GraphError::MalformedEdgeList {
                    line: idx + 1,
                    text: raw.to_string(),
                })
            }
        }
    }
    log::debug!(
        "loaded {} vertices / {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

/// Display summary information about an edge-list file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let components = connected_components(&graph);

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "components": components.len(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Components: {}", components.len());
    }
    Ok(())
}

/// Breadth-first order from `root`.
pub fn cmd_bfs(path: &Path, root: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let iter = BreadthFirstIter::new(&graph, &root.to_string())
        .map_err(|_| GraphError::VertexNotFound(root.to_string()))?;
    print_order("bfs", root, iter.collect(), json);
    Ok(())
}

/// Depth-first pre-order from `root`.
pub fn cmd_dfs(path: &Path, root: &str, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let iter = DepthFirstIter::new(&graph, &root.to_string())
        .map_err(|_| GraphError::VertexNotFound(root.to_string()))?;
    print_order("dfs", root, iter.collect(), json);
    Ok(())
}

/// List connected components.
pub fn cmd_components(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let components = connected_components(&graph);

    if json {
        let out = serde_json::json!({
            "file": path.display().to_string(),
            "count": components.len(),
            "components": components,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        println!("{} component(s)", components.len());
        for (i, members) in components.iter().enumerate() {
            let names: Vec<&str> = members.iter().map(|s| s.as_str()).collect();
            println!("  {}: {}", i + 1, names.join(", "));
        }
    }
    Ok(())
}

fn print_order(algorithm: &str, root: &str, order: Vec<&String>, json: bool) {
    if json {
        let out = serde_json::json!({
            "algorithm": algorithm,
            "root": root,
            "visited": order.len(),
            "order": order,
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        let names: Vec<&str> = order.iter().map(|s| s.as_str()).collect();
        println!("{}", names.join(" -> "));
        println!("Visited: {}", order.len());
    }
}
