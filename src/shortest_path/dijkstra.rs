//! Dijkstra's algorithm with a binary-heap frontier.
//!
//! # Algorithm
//!
//! Keeps a min-priority frontier keyed by tentative distance. Each pop
//! finalizes a vertex (stale entries for already-finalized vertices are
//! skipped) and relaxes its outgoing edges with
//! `dist[u] + w(u, v) < dist[v]`.
//!
//! Ties between equally short paths are broken by frontier order only;
//! callers must not rely on which of several shortest paths is returned.
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::trace;

use crate::error::{Result, RoutingError};
use crate::graph::Network;

/// Frontier entry, ordered so that `BinaryHeap` pops the smallest distance.
#[derive(Debug, Clone, Copy)]
struct Frontier {
    distance: f64,
    vertex: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}

/// Distances and predecessors from one source vertex.
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::shortest_path::shortest_paths;
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("C", "A", 10.0).unwrap();
/// g.add_edge("A", "B", 10.0).unwrap();
/// g.add_edge("B", "D", 10.0).unwrap();
/// g.add_edge("D", "E", 10.0).unwrap();
/// g.add_edge("E", "C", 10.0).unwrap();
///
/// let sp = shortest_paths(&g, "C").unwrap();
/// let b = 2;
/// assert_eq!(sp.distance(b), 20.0);
/// assert_eq!(sp.path(b), vec![0, 1, 2]); // C, A, B
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Source vertex of this search.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Shortest distance to `target`, `f64::INFINITY` if unreachable or unknown.
    pub fn distance(&self, target: usize) -> f64 {
        self.distances.get(target).copied().unwrap_or(f64::INFINITY)
    }

    /// Returns `true` if `target` was reached.
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).is_finite()
    }

    /// All distances, indexed by vertex.
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Predecessor of `target` on its shortest path.
    pub fn predecessor(&self, target: usize) -> Option<usize> {
        self.predecessors.get(target).copied().flatten()
    }

    /// Vertex sequence from the source to `target`.
    ///
    /// Empty when `target` is unreachable; `[source]` when `target` is the
    /// source itself.
    pub fn path(&self, target: usize) -> Vec<usize> {
        if !self.is_reachable(target) {
            return Vec::new();
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

/// Runs Dijkstra from vertex index `source`.
///
/// Fails with `VertexNotFound` if `source` is not a vertex of `graph`.
/// Directed graphs are searched along arc direction only.
pub fn dijkstra<N: Network + ?Sized>(graph: &N, source: usize) -> Result<ShortestPaths> {
    if !graph.contains(source) {
        return Err(RoutingError::VertexNotFound(graph.label(source)));
    }

    let n = graph.vertex_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut finalized = vec![false; n];
    let mut frontier = BinaryHeap::new();

    distances[source] = 0.0;
    frontier.push(Frontier {
        distance: 0.0,
        vertex: source,
    });

    while let Some(Frontier { distance, vertex }) = frontier.pop() {
        if finalized[vertex] {
            continue;
        }
        finalized[vertex] = true;

        for (next, weight) in graph.successors(vertex) {
            if finalized[next] {
                continue;
            }
            let candidate = distance + weight;
            if candidate < distances[next] {
                distances[next] = candidate;
                predecessors[next] = Some(vertex);
                frontier.push(Frontier {
                    distance: candidate,
                    vertex: next,
                });
            }
        }
    }

    trace!(
        source = %graph.label(source),
        reached = finalized.iter().filter(|&&f| f).count(),
        "dijkstra finished"
    );

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

/// Runs Dijkstra from the vertex with id `source`.
pub fn shortest_paths<N: Network + ?Sized>(graph: &N, source: &str) -> Result<ShortestPaths> {
    let source = graph.require(source)?;
    dijkstra(graph, source)
}
