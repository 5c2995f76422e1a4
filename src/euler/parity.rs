//! Degree-parity checks.

use crate::graph::Network;

/// Vertices with odd degree, in index order.
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::euler::odd_degree_vertices;
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("A", "B", 1.0).unwrap();
/// g.add_edge("B", "C", 1.0).unwrap();
/// assert_eq!(odd_degree_vertices(&g), vec![0, 2]);
/// ```
pub fn odd_degree_vertices<N: Network + ?Sized>(graph: &N) -> Vec<usize> {
    (0..graph.vertex_count())
        .filter(|&v| graph.degree(v) % 2 != 0)
        .collect()
}

/// Returns `true` if the graph is non-empty and every vertex has even degree.
///
/// Connectivity is not checked here; [`eulerian_circuit`](super::eulerian_circuit)
/// reports edges it cannot reach.
pub fn is_eulerian<N: Network + ?Sized>(graph: &N) -> bool {
    !graph.is_empty() && (0..graph.vertex_count()).all(|v| graph.degree(v) % 2 == 0)
}
