//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! The engine borrows a [`Graph`] and never mutates it. Each call to
//! [`ShortestPathEngine::dijkstra`] builds a fresh [`DistanceTable`], relaxes it
//! and hands back an immutable [`ShortestPaths`] result.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use serde::{Serialize, Serializer};

use super::report::{PathReport, SourceReport};
use crate::graph::{Graph, GraphError, GraphResult};

/// Best known distance to a vertex.
///
/// `Infinite` orders after every finite distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Distance {
    /// Reachable at this total weight
    Finite(u64),
    /// Not reached (yet)
    #[default]
    Infinite,
}

impl Distance {
    /// Returns true for a finite distance.
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the finite value, if any.
    pub fn finite(&self) -> Option<u64> {
        match self {
            Self::Finite(d) => Some(*d),
            Self::Infinite => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{}", d),
            Self::Infinite => write!(f, "inf"),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Finite(d) => serializer.serialize_u64(*d),
            Self::Infinite => serializer.serialize_none(),
        }
    }
}

/// Distance and predecessor of one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DistanceRecord {
    /// Best known distance from the source
    pub distance: Distance,
    /// Previous vertex on the best known path, `None` for the source and unreached vertices
    pub predecessor: Option<usize>,
}

/// Freshly initialized per-vertex records for one source.
///
/// Every distance is infinite except the source's, which is zero. No
/// predecessors are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    source: usize,
    records: Vec<DistanceRecord>,
}

impl DistanceTable {
    /// The source vertex the table was initialized for.
    pub fn source(&self) -> usize {
        self.source
    }

    /// All records, indexed by vertex.
    pub fn records(&self) -> &[DistanceRecord] {
        &self.records
    }
}

/// Result of one Dijkstra run: final distances and predecessors from a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    source: usize,
    records: Vec<DistanceRecord>,
}

impl ShortestPaths {
    fn check(&self, v: usize) -> GraphResult<()> {
        if v < self.records.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidArgument {
                index: v,
                vertex_count: self.records.len(),
            })
        }
    }

    /// The source vertex of this run.
    pub fn source(&self) -> usize {
        self.source
    }

    /// All records, indexed by vertex.
    pub fn records(&self) -> &[DistanceRecord] {
        &self.records
    }

    /// Shortest distance from the source to `v`.
    pub fn distance(&self, v: usize) -> GraphResult<Distance> {
        self.check(v)?;
        Ok(self.records[v].distance)
    }

    /// Predecessor of `v` on its shortest path.
    pub fn predecessor(&self, v: usize) -> GraphResult<Option<usize>> {
        self.check(v)?;
        Ok(self.records[v].predecessor)
    }

    /// Returns true if `v` can be reached from the source.
    pub fn is_reachable(&self, v: usize) -> GraphResult<bool> {
        Ok(self.distance(v)?.is_finite())
    }

    /// Follows predecessor links back from `destination` and returns the walk in
    /// source-to-destination order.
    ///
    /// The walk stops at the first vertex without a predecessor. For an
    /// unreachable destination that is the destination itself, giving
    /// `[destination]`. Prefer [`path`](Self::path), which reports that case.
    pub fn raw_path(&self, destination: usize) -> GraphResult<Vec<usize>> {
        self.check(destination)?;

        let mut path = Vec::new();
        let mut current = Some(destination);
        while let Some(v) = current {
            path.push(v);
            current = self.records[v].predecessor;
        }

        path.reverse();
        Ok(path)
    }

    /// Shortest path from the source to `destination`, or `None` when no path exists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::graph::Graph;
    /// use waypoint::shortest_path::ShortestPathEngine;
    ///
    /// let mut graph: Graph = Graph::new(3);
    /// graph.insert_edge(0, 1, 4).unwrap();
    ///
    /// let paths = ShortestPathEngine::new(&graph).dijkstra(0).unwrap();
    /// assert_eq!(paths.path(1).unwrap(), Some(vec![0, 1]));
    /// assert_eq!(paths.path(2).unwrap(), None);
    /// ```
    pub fn path(&self, destination: usize) -> GraphResult<Option<Vec<usize>>> {
        if !self.is_reachable(destination)? {
            return Ok(None);
        }
        self.raw_path(destination).map(Some)
    }
}

/// Runs Dijkstra's algorithm over a borrowed graph.
///
/// The priority queue uses lazy deletion instead of decrease-key: an improved
/// distance pushes a new entry and outdated entries are skipped when popped. The
/// queue can therefore hold O(E) entries, of which at most V are finalized.
/// Runs in O((V + E) log V).
#[derive(Debug)]
pub struct ShortestPathEngine<'g, D = i64> {
    graph: &'g Graph<D>,
}

impl<'g, D> ShortestPathEngine<'g, D> {
    /// Creates an engine for `graph`.
    pub fn new(graph: &'g Graph<D>) -> Self {
        Self { graph }
    }

    /// The graph this engine reads.
    pub fn graph(&self) -> &'g Graph<D> {
        self.graph
    }

    /// Allocates a table sized to the graph with only `source` at distance zero.
    pub fn initialize_single_source(&self, source: usize) -> GraphResult<DistanceTable> {
        let vertex_count = self.graph.vertex_count();
        if source >= vertex_count {
            return Err(GraphError::InvalidArgument {
                index: source,
                vertex_count,
            });
        }

        let mut records = vec![DistanceRecord::default(); vertex_count];
        records[source].distance = Distance::Finite(0);
        Ok(DistanceTable { source, records })
    }

    /// Computes shortest distances and predecessors from `source` to every vertex.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::graph::Graph;
    /// use waypoint::shortest_path::{Distance, ShortestPathEngine};
    ///
    /// let mut graph: Graph = Graph::new(3);
    /// graph.insert_edge(0, 1, 1).unwrap();
    /// graph.insert_edge(1, 2, 1).unwrap();
    /// graph.insert_edge(0, 2, 5).unwrap();
    ///
    /// let paths = ShortestPathEngine::new(&graph).dijkstra(0).unwrap();
    /// assert_eq!(paths.distance(2).unwrap(), Distance::Finite(2));
    /// assert_eq!(paths.predecessor(2).unwrap(), Some(1));
    /// ```
    pub fn dijkstra(&self, source: usize) -> GraphResult<ShortestPaths> {
        let DistanceTable {
            source,
            mut records,
        } = self.initialize_single_source(source)?;

        let mut finalized = vec![false; records.len()];
        let mut queue = BinaryHeap::new();
        queue.push(Reverse((0u64, source)));

        let mut pushes = 1usize;
        let mut stale = 0usize;

        while let Some(Reverse((dist_u, u))) = queue.pop() {
            if finalized[u] {
                stale += 1;
                continue;
            }
            finalized[u] = true;

            for entry in self.graph.row(u) {
                let v = entry.neighbor;
                if finalized[v] {
                    continue;
                }

                let candidate = dist_u.saturating_add(u64::from(entry.weight));
                if Distance::Finite(candidate) < records[v].distance {
                    records[v] = DistanceRecord {
                        distance: Distance::Finite(candidate),
                        predecessor: Some(u),
                    };
                    queue.push(Reverse((candidate, v)));
                    pushes += 1;
                }
            }
        }

        tracing::debug!(
            source,
            vertices = records.len(),
            finalized = finalized.iter().filter(|&&done| done).count(),
            pushes,
            stale,
            "dijkstra finished"
        );

        Ok(ShortestPaths { source, records })
    }

    /// Runs [`dijkstra`](Self::dijkstra) and reconstructs the path to `destination`.
    ///
    /// Returns `Ok(None)` when `destination` is unreachable.
    pub fn get_path(&self, source: usize, destination: usize) -> GraphResult<Option<Vec<usize>>> {
        self.dijkstra(source)?.path(destination)
    }

    /// Runs [`dijkstra`](Self::dijkstra) and reports the path to every other vertex.
    pub fn shortest_path_from_source(&self, source: usize) -> GraphResult<SourceReport> {
        let paths = self.dijkstra(source)?;
        SourceReport::from_paths(&paths)
    }

    /// Runs [`dijkstra`](Self::dijkstra) and reports the path to `destination`.
    pub fn shortest_path(&self, source: usize, destination: usize) -> GraphResult<PathReport> {
        let paths = self.dijkstra(source)?;
        PathReport::from_paths(&paths, destination)
    }
}
