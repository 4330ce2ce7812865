//! Waypoint - undirected weighted graphs with Dijkstra shortest paths
//!
//! This crate provides an adjacency-list graph, a single-source shortest-path
//! engine, and a harness that times the engine over randomly generated
//! instances and exports the results.

pub mod export;
pub mod graph;
pub mod harness;
pub mod shortest_path;
