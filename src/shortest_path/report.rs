//! Human-readable path reports built from a [`ShortestPaths`] result.

use std::fmt;

use serde::Serialize;

use super::dijkstra::ShortestPaths;
use crate::graph::GraphResult;

/// A reconstructed path and its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Vertices from source to destination, both included
    pub vertices: Vec<usize>,
    /// Sum of edge weights along the path
    pub distance: u64,
}

impl Route {
    /// Formats the vertices as `a -> b -> c`.
    pub fn path_string(&self) -> String {
        self.vertices
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Outcome of a shortest-path query for one destination.
///
/// `Display` renders the body of a report line: either
/// `Path: 0 -> 1 -> 2, Distance: 3` or `No path exists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// Source vertex
    pub source: usize,
    /// Destination vertex
    pub destination: usize,
    /// The path, or `None` when the destination is unreachable
    pub route: Option<Route>,
}

impl PathReport {
    /// Builds the report for `destination` from a finished run.
    pub fn from_paths(paths: &ShortestPaths, destination: usize) -> GraphResult<Self> {
        let route = match (paths.path(destination)?, paths.distance(destination)?.finite()) {
            (Some(vertices), Some(distance)) => Some(Route { vertices, distance }),
            _ => None,
        };

        Ok(Self {
            source: paths.source(),
            destination,
            route,
        })
    }

    /// Returns true if a path was found.
    pub fn is_reachable(&self) -> bool {
        self.route.is_some()
    }

    /// Line used when listing every vertex: `Vertex 3: Path: ..., Distance: ...`.
    pub fn vertex_line(&self) -> String {
        format!("Vertex {}: {}", self.destination, self)
    }

    /// Line used for a single query:
    /// `Shortest path from vertex 0 to vertex 3: Path: ..., Distance: ...`.
    pub fn query_line(&self) -> String {
        format!(
            "Shortest path from vertex {} to vertex {}: {}",
            self.source, self.destination, self
        )
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.route {
            Some(route) => write!(
                f,
                "Path: {}, Distance: {}",
                route.path_string(),
                route.distance
            ),
            None => write!(f, "No path exists"),
        }
    }
}

/// Paths from one source to every other vertex, in vertex order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    /// Source vertex
    pub source: usize,
    /// One report per vertex other than the source
    pub paths: Vec<PathReport>,
}

impl SourceReport {
    /// Builds reports for every vertex except the source.
    pub fn from_paths(paths: &ShortestPaths) -> GraphResult<Self> {
        let reports = (0..paths.records().len())
            .filter(|&v| v != paths.source())
            .map(|v| PathReport::from_paths(paths, v))
            .collect::<GraphResult<Vec<_>>>()?;

        Ok(Self {
            source: paths.source(),
            paths: reports,
        })
    }

    /// Number of destinations with a path.
    pub fn reachable_count(&self) -> usize {
        self.paths.iter().filter(|p| p.is_reachable()).count()
    }
}

impl fmt::Display for SourceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.paths {
            writeln!(f, "{}", report.vertex_line())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::shortest_path::ShortestPathEngine;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new(5);
        graph.insert_edge(0, 1, 1).unwrap();
        graph.insert_edge(1, 2, 2).unwrap();
        graph.insert_edge(0, 2, 5).unwrap();
        graph.insert_edge(2, 3, 1).unwrap();
        graph
    }

    #[test]
    fn test_path_report_lines() {
        let graph = sample_graph();
        let report = ShortestPathEngine::new(&graph).shortest_path(0, 3).unwrap();

        assert!(report.is_reachable());
        assert_eq!(report.to_string(), "Path: 0 -> 1 -> 2 -> 3, Distance: 4");
        assert_eq!(
            report.query_line(),
            "Shortest path from vertex 0 to vertex 3: Path: 0 -> 1 -> 2 -> 3, Distance: 4"
        );
        assert_eq!(
            report.vertex_line(),
            "Vertex 3: Path: 0 -> 1 -> 2 -> 3, Distance: 4"
        );
    }

    #[test]
    fn test_unreachable_report() {
        let graph = sample_graph();
        let report = ShortestPathEngine::new(&graph).shortest_path(0, 4).unwrap();

        assert!(!report.is_reachable());
        assert_eq!(report.route, None);
        assert_eq!(report.vertex_line(), "Vertex 4: No path exists");
    }

    #[test]
    fn test_source_to_itself() {
        let graph = sample_graph();
        let report = ShortestPathEngine::new(&graph).shortest_path(2, 2).unwrap();
        assert_eq!(report.to_string(), "Path: 2, Distance: 0");
    }

    #[test]
    fn test_source_report_skips_source() {
        let graph = sample_graph();
        let report = ShortestPathEngine::new(&graph)
            .shortest_path_from_source(0)
            .unwrap();

        assert_eq!(report.paths.len(), 4);
        assert_eq!(report.reachable_count(), 3);
        assert_eq!(
            report.to_string(),
            "Vertex 1: Path: 0 -> 1, Distance: 1\n\
             Vertex 2: Path: 0 -> 1 -> 2, Distance: 3\n\
             Vertex 3: Path: 0 -> 1 -> 2 -> 3, Distance: 4\n\
             Vertex 4: No path exists\n"
        );
    }

    #[test]
    fn test_report_serializes() {
        let graph = sample_graph();
        let report = ShortestPathEngine::new(&graph).shortest_path(0, 1).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["source"], 0);
        assert_eq!(value["destination"], 1);
        assert_eq!(value["route"]["vertices"], serde_json::json!([0, 1]));
        assert_eq!(value["route"]["distance"], 1);
    }

    #[test]
    fn test_invalid_destination() {
        let graph = sample_graph();
        assert!(ShortestPathEngine::new(&graph).shortest_path(0, 9).is_err());
    }
}
