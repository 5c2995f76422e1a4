//! MST-based TSP approximation.
//!
//! # Algorithm
//!
//! 1. Build a minimum spanning tree rooted at the depot.
//! 2. Walk the tree depth-first, emitting a vertex on descent and again
//!    after returning from each child subtree.
//! 3. Shortcut the walk: keep only the first occurrence of each vertex.
//! 4. Close the tour at the depot.
//!
//! The tour length is measured on the original graph, which must hold a
//! direct edge between every pair of consecutive stops.
//!
//! # Complexity
//!
//! O(E log E) for the tree, O(V) for the walk.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use serde::Serialize;
use tracing::debug;

use super::minimum_spanning_tree;
use crate::error::{Result, RoutingError};
use crate::evaluation::tour_distance;
use crate::graph::{Network, UndirectedGraph};

/// Result of the MST tour heuristic.
#[derive(Debug, Clone, Serialize)]
pub struct MstTour {
    /// Closed tour starting and ending at the depot.
    pub tour: Vec<usize>,
    /// Tour length on the original graph.
    pub total_distance: f64,
    /// Weight of the spanning tree the tour was derived from.
    pub mst_weight: f64,
}

/// Builds a tour from the vertex with id `depot` by shortcutting a
/// depth-first walk of the minimum spanning tree.
///
/// # Errors
///
/// - `EmptyGraph` if the graph has no vertices
/// - `VertexNotFound` if `depot` is unknown
/// - `Disconnected` if the graph is not connected
/// - `MissingEdge` if two consecutive stops share no direct edge
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::constructive::mst_tour;
///
/// // Complete graph on D, A, B.
/// let mut g = UndirectedGraph::new();
/// g.add_edge("D", "A", 1.0).unwrap();
/// g.add_edge("A", "B", 1.0).unwrap();
/// g.add_edge("D", "B", 2.0).unwrap();
///
/// let result = mst_tour(&g, "D").unwrap();
/// assert_eq!(result.tour, vec![0, 1, 2, 0]);
/// assert_eq!(result.mst_weight, 2.0);
/// assert_eq!(result.total_distance, 4.0);
/// ```
pub fn mst_tour(graph: &UndirectedGraph, depot: &str) -> Result<MstTour> {
    if graph.is_empty() {
        return Err(RoutingError::EmptyGraph);
    }
    let depot = graph.require(depot)?;
    let mst = minimum_spanning_tree(graph, depot)?;

    let walk = depth_first_walk(mst.tree(), depot);
    let mut tour = shortcut(&walk, graph.vertex_count());
    // The walk starts at the depot; a lone depot is already a closed tour.
    if tour.len() > 1 {
        tour.push(depot);
    }

    let total_distance = tour_distance(graph, &tour)?;
    debug!(
        stops = tour.len(),
        mst_weight = mst.weight(),
        total_distance,
        "mst tour built"
    );

    Ok(MstTour {
        tour,
        total_distance,
        mst_weight: mst.weight(),
    })
}

/// Depth-first walk of a tree from `root`, emitting each vertex on descent
/// and re-emitting the parent after each child subtree.
fn depth_first_walk(tree: &UndirectedGraph, root: usize) -> Vec<usize> {
    let mut visited = vec![false; tree.vertex_count()];
    // Next unread slot in each vertex's incident-edge list.
    let mut cursor = vec![0usize; tree.vertex_count()];
    let mut walk = vec![root];
    visited[root] = true;

    let mut stack = vec![root];
    while let Some(&vertex) = stack.last() {
        let incident = tree.incident_edges(vertex);
        let mut child = None;
        while let Some(&edge) = incident.get(cursor[vertex]) {
            cursor[vertex] += 1;
            match tree.edge(edge).and_then(|e| e.other(vertex)) {
                Some(next) if !visited[next] => {
                    child = Some(next);
                    break;
                }
                _ => {}
            }
        }

        match child {
            Some(child) => {
                visited[child] = true;
                walk.push(child);
                stack.push(child);
            }
            None => {
                stack.pop();
                if let Some(&parent) = stack.last() {
                    walk.push(parent);
                }
            }
        }
    }
    walk
}

/// Keeps the first occurrence of each vertex.
fn shortcut(walk: &[usize], vertex_count: usize) -> Vec<usize> {
    let mut seen = vec![false; vertex_count];
    walk.iter()
        .copied()
        .filter(|&v| !std::mem::replace(&mut seen[v], true))
        .collect()
}
