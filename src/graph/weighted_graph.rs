//! Undirected weighted graph stored as per-vertex adjacency lists.
//!
//! Every edge is recorded twice, once in each endpoint's list. Vertices are
//! always the dense range `0..vertex_count()`; removing a vertex shifts every
//! later vertex down by one and the adjacency lists are renumbered to match.

use std::ops::Range;

use super::error::{GraphError, GraphResult};

/// Edge weight. Unsigned, so Dijkstra's non-negative precondition always holds.
pub type Weight = u32;

/// One entry of a vertex's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adjacency {
    /// Index of the vertex on the other end of the edge
    pub neighbor: usize,
    /// Weight of the edge
    pub weight: Weight,
}

impl Adjacency {
    /// Creates a new adjacency entry.
    pub fn new(neighbor: usize, weight: Weight) -> Self {
        Self { neighbor, weight }
    }
}

/// An undirected graph with integer edge weights and an optional payload per vertex.
///
/// Parallel edges are kept as separate entries and never deduplicated. Edges have
/// no identity of their own: operations that take an "edge" index (`end_vertices`,
/// `opposite`, `replace_edge`) address the adjacency row of the vertex with that
/// index.
///
/// # Example
///
/// ```rust
/// use waypoint::graph::Graph;
///
/// let mut graph: Graph = Graph::new(3);
/// graph.insert_edge(0, 1, 4).unwrap();
/// graph.insert_edge(1, 2, 2).unwrap();
///
/// assert!(graph.are_adjacent(1, 0).unwrap());
/// assert_eq!(graph.get_edges(), vec![(0, 1), (1, 2)]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<D = i64> {
    adjacency: Vec<Vec<Adjacency>>,
    vertex_data: Vec<Option<D>>,
}

impl<D> Default for Graph<D> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<D> Graph<D> {
    /// Creates a graph with `vertex_count` vertices, no payloads and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: (0..vertex_count).map(|_| Vec::new()).collect(),
            vertex_data: (0..vertex_count).map(|_| None).collect(),
        }
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(vertices),
            vertex_data: Vec::with_capacity(vertices),
        }
    }

    fn check(&self, index: usize) -> GraphResult<()> {
        if index < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidArgument {
                index,
                vertex_count: self.adjacency.len(),
            })
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Checks if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the neighbors recorded in adjacency row `e`.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidArgument`] if `e` is not a vertex index.
    pub fn end_vertices(&self, e: usize) -> GraphResult<Vec<usize>> {
        self.check(e)?;
        Ok(self.adjacency[e].iter().map(|a| a.neighbor).collect())
    }

    /// Returns the endpoint across from `v` on an edge stored in row `e`.
    ///
    /// Since row `e` belongs to vertex `e`, a match means the edge is `(e, v)` and
    /// the opposite endpoint is `e` itself.
    ///
    /// # Errors
    ///
    /// * [`GraphError::InvalidArgument`] if either index is out of range
    /// * [`GraphError::LogicError`] if row `e` has no entry for `v`
    pub fn opposite(&self, v: usize, e: usize) -> GraphResult<usize> {
        self.check(e)?;
        self.check(v)?;

        if self.adjacency[e].iter().any(|a| a.neighbor == v) {
            Ok(e)
        } else {
            Err(GraphError::LogicError(format!(
                "vertex {} has no entry in adjacency row {}",
                v, e
            )))
        }
    }

    /// Returns true if `w` appears in `v`'s adjacency list.
    pub fn are_adjacent(&self, v: usize, w: usize) -> GraphResult<bool> {
        self.check(v)?;
        self.check(w)?;
        Ok(self.adjacency[v].iter().any(|a| a.neighbor == w))
    }

    /// Overwrites the payload of vertex `v`, returning the previous one.
    pub fn replace(&mut self, v: usize, data: D) -> GraphResult<Option<D>> {
        self.check(v)?;
        Ok(self.vertex_data[v].replace(data))
    }

    /// Sets the weight of every edge stored in row `e` to `weight`.
    ///
    /// Each neighbor's mirrored entry is updated as well, so both directions of
    /// every touched edge keep the same weight.
    pub fn replace_edge(&mut self, e: usize, weight: Weight) -> GraphResult<()> {
        self.check(e)?;

        let mut neighbors = Vec::with_capacity(self.adjacency[e].len());
        for entry in &mut self.adjacency[e] {
            entry.weight = weight;
            neighbors.push(entry.neighbor);
        }

        for neighbor in neighbors {
            if neighbor == e {
                continue;
            }
            for entry in self.adjacency[neighbor]
                .iter_mut()
                .filter(|entry| entry.neighbor == e)
            {
                entry.weight = weight;
            }
        }

        Ok(())
    }

    /// Appends a vertex with an empty adjacency list.
    ///
    /// # Returns
    ///
    /// The new vertex count. The inserted vertex has index `count - 1`.
    pub fn insert_vertex(&mut self, data: Option<D>) -> usize {
        self.adjacency.push(Vec::new());
        self.vertex_data.push(data);
        self.adjacency.len()
    }

    /// Adds an undirected edge between `v` and `w`.
    ///
    /// Parallel edges are allowed; no duplicate check is performed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::graph::Graph;
    ///
    /// let mut graph: Graph = Graph::new(2);
    /// graph.insert_edge(0, 1, 5).unwrap();
    /// graph.insert_edge(0, 1, 3).unwrap();
    ///
    /// assert_eq!(graph.edge_count(), 2);
    /// assert!(graph.insert_edge(0, 2, 1).is_err());
    /// ```
    pub fn insert_edge(&mut self, v: usize, w: usize, weight: Weight) -> GraphResult<()> {
        self.check(v)?;
        self.check(w)?;
        self.adjacency[v].push(Adjacency::new(w, weight));
        self.adjacency[w].push(Adjacency::new(v, weight));
        Ok(())
    }

    /// Removes vertex `v` and every edge touching it.
    ///
    /// Vertices after `v` move down one index and adjacency entries are
    /// renumbered, so surviving edges still join the same vertices. Indices
    /// held by the caller from before the removal are stale for any vertex
    /// above `v`.
    ///
    /// # Returns
    ///
    /// The removed vertex's payload.
    pub fn remove_vertex(&mut self, v: usize) -> GraphResult<Option<D>> {
        self.check(v)?;

        self.adjacency.remove(v);
        let data = self.vertex_data.remove(v);

        for row in &mut self.adjacency {
            row.retain(|entry| entry.neighbor != v);
            for entry in row.iter_mut() {
                if entry.neighbor > v {
                    entry.neighbor -= 1;
                }
            }
        }

        tracing::trace!(vertex = v, remaining = self.adjacency.len(), "removed vertex");
        Ok(data)
    }

    /// Removes every edge between `v` and `w`, parallel edges included.
    ///
    /// # Returns
    ///
    /// The number of undirected edges removed.
    pub fn remove_edge(&mut self, v: usize, w: usize) -> GraphResult<usize> {
        self.check(v)?;
        self.check(w)?;

        let before = self.adjacency[v].len();
        self.adjacency[v].retain(|entry| entry.neighbor != w);
        let removed = before - self.adjacency[v].len();
        self.adjacency[w].retain(|entry| entry.neighbor != v);

        // A self loop leaves two entries in the same row.
        Ok(if v == w { removed / 2 } else { removed })
    }

    /// Returns the adjacency list of vertex `v`.
    pub fn incident_edges(&self, v: usize) -> GraphResult<&[Adjacency]> {
        self.check(v)?;
        Ok(&self.adjacency[v])
    }

    /// Returns the payload of vertex `v`, if one was set.
    pub fn vertex_data(&self, v: usize) -> GraphResult<Option<&D>> {
        self.check(v)?;
        Ok(self.vertex_data[v].as_ref())
    }

    /// Returns the vertex indices.
    pub fn get_vertices(&self) -> Range<usize> {
        0..self.adjacency.len()
    }

    /// Returns every undirected edge once, as `(lower, higher)` endpoint pairs.
    ///
    /// Parallel edges appear once per stored edge. Self loops are not listed.
    pub fn get_edges(&self) -> Vec<(usize, usize)> {
        self.weighted_edges()
            .into_iter()
            .map(|(u, v, _)| (u, v))
            .collect()
    }

    /// Like [`get_edges`](Self::get_edges), with each edge's weight.
    pub fn weighted_edges(&self) -> Vec<(usize, usize, Weight)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter()
                    .filter(move |entry| i < entry.neighbor)
                    .map(move |entry| (i, entry.neighbor, entry.weight))
            })
            .collect()
    }

    /// Adjacency row of `v` without bounds reporting. Callers pass indices
    /// taken from the graph itself.
    pub(crate) fn row(&self, v: usize) -> &[Adjacency] {
        &self.adjacency[v]
    }
}
