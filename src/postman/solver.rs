//! Chinese-Postman solver.
//!
//! # Algorithm
//!
//! 1. Collect odd-degree vertices. With none, the graph is already Eulerian.
//! 2. Run Dijkstra once per odd vertex to get all pairwise distances and paths.
//! 3. Pair odd vertices with [`greedy_matching`].
//! 4. Copy the graph and duplicate every edge along each matched pair's path.
//! 5. Build an Eulerian circuit of the copy from the depot.
//!
//! The caller's graph is never modified.
//!
//! # Complexity
//!
//! O(k (V + E) log V) for the k Dijkstra runs, plus O(k² log k) matching.
//!
//! # Reference
//!
//! Edmonds, J. & Johnson, E.L. (1973). "Matching, Euler tours and the
//! Chinese postman", *Mathematical Programming* 5, 88-124.

use serde::Serialize;
use tracing::debug;

use super::{greedy_matching, MatchedPair};
use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::euler::{eulerian_circuit, odd_degree_vertices};
use crate::evaluation::tour_distance;
use crate::graph::{Network, UndirectedGraph};
use crate::models::Edge;
use crate::shortest_path::dijkstra;

/// Result of the Chinese-Postman solver.
#[derive(Debug, Clone, Serialize)]
pub struct PostmanTour {
    /// Closed walk from the depot covering every street at least once.
    pub tour: Vec<usize>,
    /// Length of the walk, duplicated streets counted each time.
    pub total_distance: f64,
    /// Streets driven more than once (one entry per extra traversal).
    pub duplicated_edges: Vec<Edge>,
    /// Odd-vertex pairs whose shortest paths were duplicated.
    pub matching: Vec<MatchedPair>,
}

impl PostmanTour {
    /// Distance added on top of the street network's total length.
    pub fn extra_distance(&self) -> f64 {
        self.duplicated_edges.iter().map(Edge::weight).sum()
    }
}

/// Solves the Chinese-Postman problem from the vertex with id `depot`.
///
/// # Errors
///
/// - `EmptyGraph` if the graph has no vertices
/// - `VertexNotFound` if `depot` is unknown
/// - `OddCountNotEven` if the odd-vertex count is odd
/// - `NoPerfectMatching` if some odd vertex cannot be paired
/// - `Disconnected` if some street is unreachable from the depot
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::postman::chinese_postman;
///
/// // A path D - A - B: both ends are odd, so every street is driven twice.
/// let mut g = UndirectedGraph::new();
/// g.add_edge("D", "A", 3.0).unwrap();
/// g.add_edge("A", "B", 4.0).unwrap();
///
/// let result = chinese_postman(&g, "D").unwrap();
/// assert_eq!(result.total_distance, 14.0);
/// assert_eq!(result.duplicated_edges.len(), 2);
/// assert_eq!(result.tour.first(), Some(&0));
/// assert_eq!(result.tour.last(), Some(&0));
/// ```
pub fn chinese_postman(graph: &UndirectedGraph, depot: &str) -> Result<PostmanTour> {
    if graph.is_empty() {
        return Err(RoutingError::EmptyGraph);
    }
    let depot = graph.require(depot)?;

    let odd = odd_degree_vertices(graph);
    if odd.is_empty() {
        debug!("all vertices even, no duplication needed");
        let tour = eulerian_circuit(graph, depot)?;
        let total_distance = tour_distance(graph, &tour)?;
        return Ok(PostmanTour {
            tour,
            total_distance,
            duplicated_edges: Vec::new(),
            matching: Vec::new(),
        });
    }
    if odd.len() % 2 != 0 {
        return Err(RoutingError::OddCountNotEven(odd.len()));
    }

    let k = odd.len();
    let mut distances = DistanceMatrix::new(k);
    let mut searches = Vec::with_capacity(k);
    for (i, &source) in odd.iter().enumerate() {
        let sp = dijkstra(graph, source)?;
        for (j, &target) in odd.iter().enumerate() {
            if i != j {
                distances.set(i, j, sp.distance(target));
            }
        }
        searches.push(sp);
    }

    let matching = greedy_matching(&odd, &distances)?;
    debug!(
        odd_vertices = k,
        pairs = matching.len(),
        added = matching.iter().map(|p| p.distance).sum::<f64>(),
        "odd vertices matched"
    );

    let mut eulerized = graph.clone();
    let mut duplicated_edges = Vec::new();
    for pair in &matching {
        let path = searches[pair.positions.0].path(pair.b);
        for hop in path.windows(2) {
            let (from, to) = (hop[0], hop[1]);
            let weight = graph.weight(from, to);
            let idx = eulerized.connect(from, to, weight)?;
            if let Some(&edge) = eulerized.edge(idx) {
                duplicated_edges.push(edge);
            }
        }
    }

    let tour = eulerian_circuit(&eulerized, depot)?;
    let total_distance = tour_distance(&eulerized, &tour)?;

    Ok(PostmanTour {
        tour,
        total_distance,
        duplicated_edges,
        matching,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// C-A-B-D-E-C, all weight 10.
    fn pentagon() -> UndirectedGraph {
        let mut g = UndirectedGraph::new();
        g.add_edge("C", "A", 10.0).expect("valid");
        g.add_edge("A", "B", 10.0).expect("valid");
        g.add_edge("B", "D", 10.0).expect("valid");
        g.add_edge("D", "E", 10.0).expect("valid");
        g.add_edge("E", "C", 10.0).expect("valid");
        g
    }

    fn covers_every_edge(g: &UndirectedGraph, tour: &[usize]) -> bool {
        let walked: HashSet<(usize, usize)> = tour
            .windows(2)
            .map(|h| (h[0].min(h[1]), h[0].max(h[1])))
            .collect();
        g.edges()
            .iter()
            .all(|e| walked.contains(&(e.a().min(e.b()), e.a().max(e.b()))))
    }

    #[test]
    fn test_eulerian_graph_needs_no_duplication() {
        let g = pentagon();
        let result = chinese_postman(&g, "C").expect("solvable");
        assert!(result.duplicated_edges.is_empty());
        assert!(result.matching.is_empty());
        assert_eq!(result.tour.len(), 6);
        assert!((result.total_distance - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_chord_is_duplicated() {
        // Pentagon plus chord A-D (weight 5): A and D become odd, and the
        // cheapest way to fix them is to drive the chord twice.
        let mut g = pentagon();
        g.add_edge("A", "D", 5.0).expect("valid");
        let result = chinese_postman(&g, "C").expect("solvable");
        assert_eq!(result.duplicated_edges.len(), 1);
        assert_eq!(result.duplicated_edges[0].weight(), 5.0);
        assert!((result.total_distance - 60.0).abs() < 1e-10);
        assert!((result.total_distance - (g.total_weight() + result.extra_distance())).abs() < 1e-10);
        assert_eq!(result.tour.len(), g.edge_count() + 2);
        assert!(covers_every_edge(&g, &result.tour));
        assert_eq!(result.tour.first(), Some(&0));
        assert_eq!(result.tour.last(), Some(&0));
    }

    #[test]
    fn test_caller_graph_untouched() {
        let mut g = UndirectedGraph::new();
        g.add_edge("D", "A", 1.0).expect("valid");
        g.add_edge("A", "B", 1.0).expect("valid");
        g.add_edge("A", "C", 1.0).expect("valid");
        g.add_edge("A", "E", 1.0).expect("valid");
        let before = g.edge_count();
        let result = chinese_postman(&g, "D").expect("solvable");
        assert_eq!(g.edge_count(), before);
        assert_eq!(result.matching.len(), 2);
        assert!(covers_every_edge(&g, &result.tour));
        // Star with four leaves: every spoke driven twice.
        assert!((result.total_distance - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_every_matched_pair_is_duplicated() {
        // Star D, B, C, E around A: four odd leaves, two pairs of length 2.
        let mut g = UndirectedGraph::new();
        for leaf in ["D", "B", "C", "E"] {
            g.add_edge("A", leaf, 1.0).expect("valid");
        }
        let result = chinese_postman(&g, "A").expect("solvable");
        let odd = odd_degree_vertices(&g);
        for pair in &result.matching {
            assert_eq!(odd[pair.positions.0], pair.a);
            assert_eq!(odd[pair.positions.1], pair.b);
        }
        let matched: f64 = result.matching.iter().map(|p| p.distance).sum();
        assert_eq!(result.duplicated_edges.len(), 4);
        assert!((result.extra_distance() - matched).abs() < 1e-10);
    }

    #[test]
    fn test_unknown_depot() {
        assert!(matches!(
            chinese_postman(&pentagon(), "Q"),
            Err(RoutingError::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_empty_graph() {
        assert!(matches!(
            chinese_postman(&UndirectedGraph::new(), "Q"),
            Err(RoutingError::EmptyGraph)
        ));
    }

    #[test]
    fn test_odd_vertices_in_separate_components() {
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "B", 1.0).expect("valid");
        g.add_edge("C", "D", 1.0).expect("valid");
        g.add_edge("C", "E", 1.0).expect("valid");
        g.add_edge("C", "F", 1.0).expect("valid");
        // A, B pair up; C, D, E, F: C pairs with one leaf, the other two
        // leaves are matched together through C. Odd vertices of the two
        // components never need each other, so the failure comes from the
        // Eulerian step: the second component is unreachable from A.
        assert!(matches!(
            chinese_postman(&g, "A"),
            Err(RoutingError::Disconnected { .. })
        ));
    }

    #[test]
    fn test_duplicates_whole_shortest_path() {
        // Odd ends A and C are joined through B, so both streets double.
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "B", 2.0).expect("valid");
        g.add_edge("B", "C", 3.0).expect("valid");
        let result = chinese_postman(&g, "B").expect("solvable");
        assert_eq!(result.matching.len(), 1);
        assert_eq!(result.matching[0].distance, 5.0);
        assert_eq!(result.duplicated_edges.len(), 2);
        assert!((result.extra_distance() - 5.0).abs() < 1e-10);
        assert!((result.total_distance - 10.0).abs() < 1e-10);
        assert_eq!(result.tour.first(), Some(&1));
        assert_eq!(result.tour.last(), Some(&1));
    }
}
