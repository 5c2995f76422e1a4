//! Nearest-neighbor TSP heuristic.
//!
//! Starting from the depot, always move to the closest unvisited vertex.
//! Direct neighbors are preferred; when every direct neighbor has been
//! visited, the closest unvisited vertex by shortest-path distance is taken
//! instead, so the heuristic also works on sparse street networks.
//!
//! # Complexity
//!
//! O(V · (V + E) log V) in the worst case (one Dijkstra per fallback hop),
//! O(V · Δ) when direct neighbors always suffice.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Result, RoutingError};
use crate::graph::Network;
use crate::shortest_path::dijkstra;

/// Result of the nearest-neighbor heuristic.
#[derive(Debug, Clone, Serialize)]
pub struct NearestNeighborTour {
    /// Closed tour starting and ending at the depot.
    pub tour: Vec<usize>,
    /// Tour length; non-adjacent hops count their shortest-path distance.
    pub total_distance: f64,
}

/// Builds a nearest-neighbor tour from the vertex with id `depot`.
///
/// # Errors
///
/// - `EmptyGraph` if the graph has no vertices
/// - `VertexNotFound` if `depot` is unknown
/// - `Disconnected` if some vertex cannot be reached
/// - `MissingEdge` if the depot cannot be reached back from the last stop
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::constructive::nearest_neighbor_tour;
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("D", "A", 1.0).unwrap();
/// g.add_edge("D", "B", 5.0).unwrap();
/// g.add_edge("A", "B", 2.0).unwrap();
///
/// let result = nearest_neighbor_tour(&g, "D").unwrap();
/// assert_eq!(result.tour, vec![0, 1, 2, 0]);
/// assert_eq!(result.total_distance, 8.0);
/// ```
pub fn nearest_neighbor_tour<N: Network + ?Sized>(
    graph: &N,
    depot: &str,
) -> Result<NearestNeighborTour> {
    if graph.is_empty() {
        return Err(RoutingError::EmptyGraph);
    }
    let depot = graph.require(depot)?;
    let n = graph.vertex_count();

    let mut visited = vec![false; n];
    visited[depot] = true;
    let mut tour = vec![depot];
    let mut total_distance = 0.0;
    let mut current = depot;

    while tour.len() < n {
        let (next, hop) = match closest_direct(graph, current, &visited) {
            Some(found) => found,
            None => closest_by_path(graph, current, &visited)?.ok_or(
                RoutingError::Disconnected {
                    reached: tour.len(),
                    total: n,
                },
            )?,
        };
        trace!(from = current, to = next, distance = hop, "nearest stop");
        visited[next] = true;
        tour.push(next);
        total_distance += hop;
        current = next;
    }

    if current != depot {
        total_distance += hop_distance(graph, current, depot)?;
        tour.push(depot);
    }

    debug!(stops = tour.len(), total_distance, "nearest-neighbor tour built");
    Ok(NearestNeighborTour {
        tour,
        total_distance,
    })
}

/// Closest unvisited direct successor. The first minimum wins ties.
fn closest_direct<N: Network + ?Sized>(
    graph: &N,
    from: usize,
    visited: &[bool],
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (next, weight) in graph.successors(from) {
        if visited[next] {
            continue;
        }
        if best.map_or(true, |(_, d)| weight < d) {
            best = Some((next, weight));
        }
    }
    best
}

/// Closest unvisited vertex by shortest-path distance, lowest index on ties.
fn closest_by_path<N: Network + ?Sized>(
    graph: &N,
    from: usize,
    visited: &[bool],
) -> Result<Option<(usize, f64)>> {
    let sp = dijkstra(graph, from)?;
    let mut best: Option<(usize, f64)> = None;
    for (v, &d) in sp.distances().iter().enumerate() {
        if visited[v] || !d.is_finite() {
            continue;
        }
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((v, d));
        }
    }
    Ok(best)
}

/// Direct weight, or shortest-path distance when no direct edge exists.
fn hop_distance<N: Network + ?Sized>(graph: &N, from: usize, to: usize) -> Result<f64> {
    let direct = graph.weight(from, to);
    if direct.is_finite() {
        return Ok(direct);
    }
    let via = dijkstra(graph, from)?.distance(to);
    if via.is_finite() {
        Ok(via)
    } else {
        Err(RoutingError::MissingEdge {
            from: graph.label(from),
            to: graph.label(to),
        })
    }
}
