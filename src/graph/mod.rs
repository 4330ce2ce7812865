//! Graph module for undirected weighted graphs.
//!
//! This module provides the [`Graph`] struct: dense vertex indices, symmetric
//! adjacency lists and index-validated mutations.
//!
//! # Example
//!
//! ```rust
//! use waypoint::graph::Graph;
//!
//! let mut graph: Graph = Graph::new(3);
//! graph.insert_edge(0, 1, 2).unwrap();
//! graph.insert_edge(1, 2, 3).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! ```

mod error;
mod weighted_graph;

pub use error::{GraphError, GraphResult};
pub use weighted_graph::{Adjacency, Graph, Weight};
