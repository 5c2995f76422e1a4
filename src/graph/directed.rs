//! Directed weighted graph.

use super::arena::VertexArena;
use super::Network;
use crate::error::{Result, RoutingError};
use crate::models::{is_valid_weight, Arc, Vertex};

/// A directed weighted graph for networks with one-way streets.
///
/// # Examples
///
/// ```
/// use collect_routing::graph::{DirectedGraph, Network};
///
/// let mut g = DirectedGraph::new();
/// g.add_arc("A", "B", 4.0).unwrap();
/// let a = g.require("A").unwrap();
/// let b = g.require("B").unwrap();
/// assert_eq!(g.weight(a, b), 4.0);
/// assert_eq!(g.weight(b, a), f64::INFINITY);
/// assert_eq!(g.out_degree(a), 1);
/// assert_eq!(g.in_degree(b), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    vertices: VertexArena,
    arcs: Vec<Arc>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

impl DirectedGraph {
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
            self.outgoing.push(Vec::new());
            self.incoming.push(Vec::new());
        }
        idx
    }

    /// Adds an arc `from -> to`, creating missing endpoints.
    ///
    /// Returns the index of the new arc.
    pub fn add_arc(&mut self, from: &str, to: &str, weight: f64) -> Result<usize> {
        if !is_valid_weight(weight) {
            return Err(RoutingError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        let tail = self.add_vertex(from);
        let head = self.add_vertex(to);
        let arc = Arc::new(tail, head, weight).ok_or_else(|| RoutingError::InvalidWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        })?;
        let idx = self.arcs.len();
        self.arcs.push(arc);
        self.outgoing[tail].push(idx);
        self.incoming[head].push(idx);
        Ok(idx)
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> &[Vertex] {
        self.vertices.as_slice()
    }

    /// All arcs in insertion order.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Number of arcs.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Arcs leaving `vertex`.
    pub fn outgoing(&self, vertex: usize) -> impl Iterator<Item = &Arc> + '_ {
        self.outgoing
            .get(vertex)
            .into_iter()
            .flatten()
            .map(move |&a| &self.arcs[a])
    }

    /// Arcs entering `vertex`.
    pub fn incoming(&self, vertex: usize) -> impl Iterator<Item = &Arc> + '_ {
        self.incoming
            .get(vertex)
            .into_iter()
            .flatten()
            .map(move |&a| &self.arcs[a])
    }

    /// Number of arcs leaving `vertex`.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.outgoing.get(vertex).map_or(0, Vec::len)
    }

    /// Number of arcs entering `vertex`.
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.incoming.get(vertex).map_or(0, Vec::len)
    }
}

impl Network for DirectedGraph {
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
        Box::new(self.outgoing(vertex).map(|arc| (arc.to(), arc.weight())))
    }

    fn weight(&self, from: usize, to: usize) -> f64 {
        self.outgoing(from)
            .filter(|arc| arc.to() == to)
            .map(Arc::weight)
            .fold(f64::INFINITY, f64::min)
    }

    fn degree(&self, vertex: usize) -> usize {
        self.in_degree(vertex) + self.out_degree(vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_way_triangle() -> DirectedGraph {
        let mut g = DirectedGraph::new();
        g.add_arc("A", "B", 1.0).expect("valid");
        g.add_arc("B", "C", 2.0).expect("valid");
        g.add_arc("C", "A", 3.0).expect("valid");
        g
    }

    #[test]
    fn test_degree_is_in_plus_out() {
        let g = one_way_triangle();
        for v in 0..3 {
            assert_eq!(g.in_degree(v), 1);
            assert_eq!(g.out_degree(v), 1);
            assert_eq!(g.degree(v), 2);
        }
    }

    #[test]
    fn test_successors_follow_direction() {
        let g = one_way_triangle();
        let succ: Vec<_> = g.successors(0).collect();
        assert_eq!(succ, vec![(1, 1.0)]);
        assert_eq!(g.incoming(0).map(|arc| arc.from()).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_rejects_negative_weight() {
        let mut g = DirectedGraph::new();
        assert!(matches!(
            g.add_arc("A", "B", -2.0),
            Err(RoutingError::InvalidWeight { .. })
        ));
        assert_eq!(g.arc_count(), 0);
    }

    #[test]
    fn test_unknown_vertex_degree_is_zero() {
        let g = one_way_triangle();
        assert_eq!(g.degree(42), 0);
        assert_eq!(g.weight(42, 0), f64::INFINITY);
    }
}
