//! Undirected weighted multigraph.

use super::arena::VertexArena;
use super::Network;
use crate::error::{Result, RoutingError};
use crate::models::{is_valid_weight, Edge, Vertex};

/// An undirected weighted graph with adjacency lists of edge indices.
///
/// Parallel edges are kept as separate entries (a street traversed twice in
/// a Chinese-Postman tour is stored twice). A self-loop appears twice in its
/// vertex's adjacency list and so contributes 2 to the degree.
///
/// # Examples
///
/// ```
/// use collect_routing::graph::{Network, UndirectedGraph};
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("C", "A", 10.0).unwrap();
/// g.add_edge("A", "B", 10.0).unwrap();
/// assert_eq!(g.vertex_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.degree(g.require("A").unwrap()), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    vertices: VertexArena,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<usize>>,
}

impl UndirectedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex by id. Idempotent: returns the existing index if present.
    pub fn add_vertex(&mut self, id: &str) -> usize {
        self.insert_vertex(Vertex::new(id))
    }

    /// Adds a vertex, keeping the first one stored under the same id.
    pub fn insert_vertex(&mut self, vertex: Vertex) -> usize {
        let (idx, inserted) = self.vertices.insert(vertex);
        if inserted {
            self.adjacency.push(Vec::new());
        }
        idx
    }

    /// Adds an edge between two vertex ids, creating missing endpoints.
    ///
    /// Returns the index of the new edge. Fails with `InvalidWeight` for
    /// negative or non-finite weights (no vertex is created in that case).
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<usize> {
        if !is_valid_weight(weight) {
            return Err(RoutingError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        let a = self.add_vertex(from);
        let b = self.add_vertex(to);
        self.connect(a, b, weight)
    }

    /// Adds an edge between two existing vertex indices.
    pub fn connect(&mut self, a: usize, b: usize, weight: f64) -> Result<usize> {
        for v in [a, b] {
            if !self.contains(v) {
                return Err(RoutingError::VertexNotFound(format!("#{v}")));
            }
        }
        let edge = Edge::new(a, b, weight).ok_or_else(|| RoutingError::InvalidWeight {
            from: self.label(a),
            to: self.label(b),
            weight,
        })?;
        let idx = self.edges.len();
        self.edges.push(edge);
        self.adjacency[a].push(idx);
        self.adjacency[b].push(idx);
        Ok(idx)
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> &[Vertex] {
        self.vertices.as_slice()
    }

    /// All edges in insertion order (parallel edges included).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edge stored at `index`.
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Indices of the edges incident to `vertex`.
    pub fn incident_edges(&self, vertex: usize) -> &[usize] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Neighbors of `vertex`, once per incident edge.
    pub fn neighbors(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident_edges(vertex)
            .iter()
            .filter_map(move |&e| self.edges[e].other(vertex))
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(Edge::weight).sum()
    }
}

impl Network for UndirectedGraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.vertices.index_of(id)
    }

    fn successors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
        Box::new(self.incident_edges(vertex).iter().filter_map(move |&e| {
            let edge = &self.edges[e];
            edge.other(vertex).map(|next| (next, edge.weight()))
        }))
    }

    fn weight(&self, from: usize, to: usize) -> f64 {
        self.successors(from)
            .filter(|&(next, _)| next == to)
            .map(|(_, w)| w)
            .fold(f64::INFINITY, f64::min)
    }

    fn degree(&self, vertex: usize) -> usize {
        self.incident_edges(vertex).len()
    }
}
