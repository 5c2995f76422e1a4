//! Weighted road-network graphs.
//!
//! - [`UndirectedGraph`] — two-way streets, parallel edges allowed
//! - [`DirectedGraph`] — one-way streets
//! - [`Network`] — the orientation-agnostic view the solvers work against

mod arena;
mod directed;
mod undirected;

pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;

use crate::error::{Result, RoutingError};
use crate::models::Vertex;

/// Read-only view of a weighted graph, shared by both orientations.
///
/// Vertices are addressed by dense indices `0..vertex_count()`; string ids
/// are resolved once at the boundary with [`index_of`](Network::index_of)
/// or [`require`](Network::require).
///
/// # Examples
///
/// ```
/// use collect_routing::graph::{Network, UndirectedGraph};
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("A", "B", 3.0).unwrap();
/// let a = g.require("A").unwrap();
/// let b = g.require("B").unwrap();
/// assert_eq!(g.weight(a, b), 3.0);
/// assert_eq!(g.weight(a, a), f64::INFINITY);
/// assert!(g.require("Z").is_err());
/// ```
pub trait Network {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Vertex stored at `index`.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Index of the vertex with the given id.
    fn index_of(&self, id: &str) -> Option<usize>;

    /// Vertices reachable in one hop from `vertex`, with the weight of the
    /// connecting edge. Parallel edges are reported once each.
    fn successors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_>;

    /// Weight of the lightest direct edge from `from` to `to`, or
    /// `f64::INFINITY` when there is none.
    fn weight(&self, from: usize, to: usize) -> f64;

    /// Number of incident edges (in + out for directed graphs).
    fn degree(&self, vertex: usize) -> usize;

    /// Like [`index_of`](Network::index_of) but fails with `VertexNotFound`.
    fn require(&self, id: &str) -> Result<usize> {
        self.index_of(id)
            .ok_or_else(|| RoutingError::VertexNotFound(id.to_string()))
    }

    /// Returns `true` if `index` addresses a vertex of this graph.
    fn contains(&self, index: usize) -> bool {
        index < self.vertex_count()
    }

    /// Returns `true` if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Id of the vertex at `index`, or `#index` if out of range.
    fn label(&self, index: usize) -> String {
        self.vertex(index)
            .map(|v| v.id().to_string())
            .unwrap_or_else(|| format!("#{index}"))
    }

    /// Maps a sequence of vertex indices to their ids.
    fn ids(&self, tour: &[usize]) -> Vec<String> {
        tour.iter().map(|&v| self.label(v)).collect()
    }
}
