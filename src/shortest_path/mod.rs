//! Shortest-path engine and path reports.
//!
//! [`ShortestPathEngine`] runs Dijkstra's algorithm over a borrowed
//! [`Graph`](crate::graph::Graph) and returns a fresh [`ShortestPaths`] value per
//! run. [`PathReport`] and [`SourceReport`] turn a result into report lines.
//!
//! # Example
//!
//! ```rust
//! use waypoint::graph::Graph;
//! use waypoint::shortest_path::ShortestPathEngine;
//!
//! let mut graph: Graph = Graph::new(4);
//! graph.insert_edge(0, 1, 1).unwrap();
//! graph.insert_edge(1, 2, 2).unwrap();
//! graph.insert_edge(0, 2, 5).unwrap();
//! graph.insert_edge(2, 3, 1).unwrap();
//!
//! let report = ShortestPathEngine::new(&graph).shortest_path(0, 3).unwrap();
//! assert_eq!(report.to_string(), "Path: 0 -> 1 -> 2 -> 3, Distance: 4");
//! ```

mod dijkstra;
mod report;

pub use dijkstra::{Distance, DistanceRecord, DistanceTable, ShortestPathEngine, ShortestPaths};
pub use report::{PathReport, Route, SourceReport};
