//! Minimum spanning tree (Prim).
//!
//! # Algorithm
//!
//! Grows a tree from a root vertex. A binary-heap frontier holds candidate
//! edges leaving the tree; each pop either connects a new vertex (and pushes
//! that vertex's edges) or is discarded because both ends are already in.
//!
//! # Complexity
//!
//! O(E log E).
//!
//! # Reference
//!
//! Prim, R.C. (1957). "Shortest connection networks and some
//! generalizations", *Bell System Technical Journal* 36(6), 1389-1401.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::error::{Result, RoutingError};
use crate::graph::{Network, UndirectedGraph};

#[derive(Debug, Clone, Copy)]
struct Candidate {
    weight: f64,
    from: usize,
    to: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other.weight.total_cmp(&self.weight)
    }
}

/// A spanning tree over the same vertices as its source graph.
///
/// Vertex indices in [`SpanningTree::tree`] match the source graph's.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    tree: UndirectedGraph,
    weight: f64,
}

impl SpanningTree {
    /// The tree as a graph (n - 1 edges for n vertices).
    pub fn tree(&self) -> &UndirectedGraph {
        &self.tree
    }

    /// Sum of the tree's edge weights.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Builds a minimum spanning tree rooted at vertex index `root`.
///
/// # Errors
///
/// - `EmptyGraph` if the graph has no vertices
/// - `VertexNotFound` if `root` is not a vertex index
/// - `Disconnected` if some vertex cannot be reached from `root`
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::constructive::minimum_spanning_tree;
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("A", "B", 1.0).unwrap();
/// g.add_edge("B", "C", 2.0).unwrap();
/// g.add_edge("A", "C", 5.0).unwrap();
///
/// let mst = minimum_spanning_tree(&g, 0).unwrap();
/// assert_eq!(mst.weight(), 3.0);
/// assert_eq!(mst.tree().edge_count(), 2);
/// ```
pub fn minimum_spanning_tree(graph: &UndirectedGraph, root: usize) -> Result<SpanningTree> {
    if graph.is_empty() {
        return Err(RoutingError::EmptyGraph);
    }
    if !graph.contains(root) {
        return Err(RoutingError::VertexNotFound(format!("#{root}")));
    }

    let n = graph.vertex_count();
    let mut tree = UndirectedGraph::new();
    for vertex in graph.vertices() {
        tree.insert_vertex(vertex.clone());
    }

    let mut in_tree = vec![false; n];
    in_tree[root] = true;
    let mut reached = 1;
    let mut weight = 0.0;

    let mut frontier = BinaryHeap::new();
    for (to, w) in graph.successors(root) {
        frontier.push(Candidate { weight: w, from: root, to });
    }

    while reached < n {
        let Some(Candidate { weight: w, from, to }) = frontier.pop() else {
            break;
        };
        if in_tree[to] {
            continue;
        }
        in_tree[to] = true;
        reached += 1;
        weight += w;
        tree.connect(from, to, w)?;
        trace!(from, to, weight = w, "tree edge");

        for (next, nw) in graph.successors(to) {
            if !in_tree[next] {
                frontier.push(Candidate {
                    weight: nw,
                    from: to,
                    to: next,
                });
            }
        }
    }

    if reached < n {
        return Err(RoutingError::Disconnected { reached, total: n });
    }
    Ok(SpanningTree { tree, weight })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_with_diagonals() {
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "B", 1.0).expect("valid");
        g.add_edge("B", "C", 1.0).expect("valid");
        g.add_edge("C", "D", 1.0).expect("valid");
        g.add_edge("D", "A", 4.0).expect("valid");
        g.add_edge("A", "C", 3.0).expect("valid");
        g.add_edge("B", "D", 3.0).expect("valid");
        let mst = minimum_spanning_tree(&g, 0).expect("connected");
        assert!((mst.weight() - 3.0).abs() < 1e-10);
        assert_eq!(mst.tree().edge_count(), 3);
        assert_eq!(mst.tree().vertex_count(), 4);
        assert_eq!(mst.tree().vertices(), g.vertices());
    }

    #[test]
    fn test_root_does_not_change_weight() {
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "B", 2.0).expect("valid");
        g.add_edge("B", "C", 7.0).expect("valid");
        g.add_edge("A", "C", 3.0).expect("valid");
        g.add_edge("C", "D", 1.0).expect("valid");
        for root in 0..4 {
            let mst = minimum_spanning_tree(&g, root).expect("connected");
            assert!((mst.weight() - 6.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_single_vertex() {
        let mut g = UndirectedGraph::new();
        g.add_vertex("D");
        let mst = minimum_spanning_tree(&g, 0).expect("trivial");
        assert_eq!(mst.weight(), 0.0);
        assert_eq!(mst.tree().edge_count(), 0);
    }

    #[test]
    fn test_disconnected() {
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "B", 1.0).expect("valid");
        g.add_edge("C", "D", 1.0).expect("valid");
        assert!(matches!(
            minimum_spanning_tree(&g, 0),
            Err(RoutingError::Disconnected { reached: 2, total: 4 })
        ));
    }

    #[test]
    fn test_bad_root() {
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "B", 1.0).expect("valid");
        assert!(matches!(
            minimum_spanning_tree(&g, 9),
            Err(RoutingError::VertexNotFound(_))
        ));
        assert!(matches!(
            minimum_spanning_tree(&UndirectedGraph::new(), 0),
            Err(RoutingError::EmptyGraph)
        ));
    }
}
