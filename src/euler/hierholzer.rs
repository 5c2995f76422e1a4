//! Hierholzer's algorithm with an explicit stack.
//!
//! # Algorithm
//!
//! Push the start vertex. While the stack is non-empty, look at the top
//! vertex: if it still has an unused incident edge, mark the edge used and
//! push its other endpoint; otherwise pop the vertex onto the output. The
//! reversed output is a closed walk that uses every reachable edge exactly
//! once. Sub-circuits are spliced in implicitly by the stack discipline.
//!
//! Each stored edge is one use: a street that must be driven twice (as in
//! the Chinese-Postman eulerized graph) is simply stored twice. A cursor per
//! vertex skips edges already consumed, so finding the next unused edge is
//! amortized O(1) and the whole walk is O(V + E).
//!
//! # Reference
//!
//! Hierholzer, C. & Wiener, C. (1873). "Über die Möglichkeit, einen
//! Linienzug ohne Wiederholung und ohne Unterbrechung zu umfahren",
//! *Mathematische Annalen* 6, 30-32.

use tracing::debug;

use super::odd_degree_vertices;
use crate::error::{Result, RoutingError};
use crate::graph::{Network, UndirectedGraph};

/// Closed walk with the edge used for each hop.
///
/// `edges[k]` joins `vertices[k]` and `vertices[k + 1]`.
struct Trail {
    vertices: Vec<usize>,
    edges: Vec<usize>,
}

fn walk(graph: &UndirectedGraph, start: usize) -> Trail {
    let mut used = vec![false; graph.edge_count()];
    let mut cursor = vec![0usize; graph.vertex_count()];
    let mut stack: Vec<(usize, Option<usize>)> = vec![(start, None)];
    let mut vertices = Vec::with_capacity(graph.edge_count() + 1);
    let mut edges = Vec::with_capacity(graph.edge_count());

    while let Some(&(current, _)) = stack.last() {
        let incident = graph.incident_edges(current);
        let mut next_edge = None;
        while cursor[current] < incident.len() {
            let e = incident[cursor[current]];
            cursor[current] += 1;
            if !used[e] {
                used[e] = true;
                next_edge = Some(e);
                break;
            }
        }

        match next_edge {
            Some(e) => {
                let next = graph
                    .edge(e)
                    .and_then(|edge| edge.other(current))
                    .unwrap_or(current);
                stack.push((next, Some(e)));
            }
            None => {
                if let Some((vertex, via)) = stack.pop() {
                    vertices.push(vertex);
                    edges.extend(via);
                }
            }
        }
    }

    vertices.reverse();
    edges.reverse();
    Trail { vertices, edges }
}

fn checked_walk(graph: &UndirectedGraph, start: usize) -> Result<Trail> {
    let trail = walk(graph, start);
    if trail.edges.len() != graph.edge_count() {
        return Err(RoutingError::Disconnected {
            reached: trail.edges.len(),
            total: graph.edge_count(),
        });
    }
    Ok(trail)
}

/// Builds an Eulerian circuit starting and ending at `start`.
///
/// The returned walk has `edge_count + 1` vertices and uses every edge
/// (each stored copy of a duplicated edge) exactly once.
///
/// # Errors
///
/// - `EmptyGraph` if the graph has no vertices
/// - `VertexNotFound` if `start` is not a vertex
/// - `NotEulerian` if any vertex has odd degree
/// - `Disconnected` if some edges are unreachable from `start`
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::euler::eulerian_circuit;
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("A", "B", 1.0).unwrap();
/// g.add_edge("B", "C", 1.0).unwrap();
/// g.add_edge("C", "A", 1.0).unwrap();
///
/// let tour = eulerian_circuit(&g, 0).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour.first(), tour.last());
/// ```
pub fn eulerian_circuit(graph: &UndirectedGraph, start: usize) -> Result<Vec<usize>> {
    if graph.is_empty() {
        return Err(RoutingError::EmptyGraph);
    }
    if !graph.contains(start) {
        return Err(RoutingError::VertexNotFound(graph.label(start)));
    }
    let odd = odd_degree_vertices(graph);
    if !odd.is_empty() {
        return Err(RoutingError::NotEulerian {
            odd_vertices: odd.len(),
        });
    }

    let trail = checked_walk(graph, start)?;
    debug!(
        start = %graph.label(start),
        edges = trail.edges.len(),
        "eulerian circuit built"
    );
    Ok(trail.vertices)
}

/// Builds an Eulerian path from `start` to the other odd-degree vertex.
///
/// The graph must have exactly two odd-degree vertices and `start` must be
/// one of them. A zero-weight virtual edge between the two is added to a
/// private copy, a circuit is built, and the circuit is rotated so the
/// virtual hop falls off the ends. The result uses every real edge exactly
/// once and has `edge_count + 1` vertices.
///
/// # Errors
///
/// - `EmptyGraph`, `VertexNotFound` as for [`eulerian_circuit`]
/// - `NotEulerian` if the odd-vertex count is not exactly two
/// - `InvalidStart` if `start` is not odd
/// - `Disconnected` if some edges are unreachable
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::euler::eulerian_path;
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("A", "B", 1.0).unwrap();
/// g.add_edge("B", "C", 1.0).unwrap();
///
/// assert_eq!(eulerian_path(&g, 2).unwrap(), vec![2, 1, 0]);
/// assert!(eulerian_path(&g, 1).is_err());
/// ```
pub fn eulerian_path(graph: &UndirectedGraph, start: usize) -> Result<Vec<usize>> {
    if graph.is_empty() {
        return Err(RoutingError::EmptyGraph);
    }
    if !graph.contains(start) {
        return Err(RoutingError::VertexNotFound(graph.label(start)));
    }
    let odd = odd_degree_vertices(graph);
    if odd.len() != 2 {
        return Err(RoutingError::NotEulerian {
            odd_vertices: odd.len(),
        });
    }
    let end = match (odd[0], odd[1]) {
        (a, b) if a == start => b,
        (a, b) if b == start => a,
        _ => return Err(RoutingError::InvalidStart(graph.label(start))),
    };

    let mut closed = graph.clone();
    let virtual_edge = closed.connect(start, end, 0.0)?;
    let trail = checked_walk(&closed, start)?;

    let Some(k) = trail.edges.iter().position(|&e| e == virtual_edge) else {
        return Err(RoutingError::Disconnected {
            reached: trail.edges.len(),
            total: closed.edge_count(),
        });
    };

    // vertices[0] == vertices[m]; drop hop k by starting right after it.
    let circuit = &trail.vertices;
    let mut path = Vec::with_capacity(circuit.len() - 1);
    path.extend_from_slice(&circuit[k + 1..]);
    path.extend_from_slice(&circuit[1..=k]);
    if path.first() != Some(&start) {
        path.reverse();
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::tour_distance;
    use std::collections::HashMap;

    /// C-A-B-D-E-C, all weight 10. Indices: C=0, A=1, B=2, D=3, E=4.
    fn pentagon() -> UndirectedGraph {
        let mut g = UndirectedGraph::new();
        g.add_edge("C", "A", 10.0).expect("valid");
        g.add_edge("A", "B", 10.0).expect("valid");
        g.add_edge("B", "D", 10.0).expect("valid");
        g.add_edge("D", "E", 10.0).expect("valid");
        g.add_edge("E", "C", 10.0).expect("valid");
        g
    }

    /// Counts how many times each unordered vertex pair is traversed.
    fn hop_counts(tour: &[usize]) -> HashMap<(usize, usize), usize> {
        let mut counts = HashMap::new();
        for hop in tour.windows(2) {
            let key = (hop[0].min(hop[1]), hop[0].max(hop[1]));
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    fn edge_counts(g: &UndirectedGraph) -> HashMap<(usize, usize), usize> {
        let mut counts = HashMap::new();
        for e in g.edges() {
            let key = (e.a().min(e.b()), e.a().max(e.b()));
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_pentagon_circuit() {
        let g = pentagon();
        let tour = eulerian_circuit(&g, 0).expect("eulerian");
        assert_eq!(tour.len(), 6);
        assert_eq!(tour[0], 0);
        assert_eq!(tour[5], 0);
        assert_eq!(hop_counts(&tour), edge_counts(&g));
        assert!((tour_distance(&g, &tour).expect("ok") - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_figure_eight_splices_subcircuit() {
        // Two triangles sharing vertex A.
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "B", 1.0).expect("valid");
        g.add_edge("B", "C", 1.0).expect("valid");
        g.add_edge("C", "A", 1.0).expect("valid");
        g.add_edge("A", "D", 1.0).expect("valid");
        g.add_edge("D", "E", 1.0).expect("valid");
        g.add_edge("E", "A", 1.0).expect("valid");
        let tour = eulerian_circuit(&g, 1).expect("eulerian");
        assert_eq!(tour.len(), 7);
        assert_eq!(tour.first(), Some(&1));
        assert_eq!(tour.last(), Some(&1));
        assert_eq!(hop_counts(&tour), edge_counts(&g));
    }

    #[test]
    fn test_duplicated_edges_walked_with_multiplicity() {
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "B", 2.0).expect("valid");
        g.add_edge("A", "B", 2.0).expect("valid");
        g.add_edge("B", "C", 3.0).expect("valid");
        g.add_edge("B", "C", 3.0).expect("valid");
        let tour = eulerian_circuit(&g, 0).expect("eulerian");
        assert_eq!(tour.len(), 5);
        assert_eq!(hop_counts(&tour), edge_counts(&g));
        assert!((tour_distance(&g, &tour).expect("ok") - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_not_eulerian() {
        let mut g = pentagon();
        g.add_edge("C", "B", 1.0).expect("valid");
        assert!(matches!(
            eulerian_circuit(&g, 0),
            Err(RoutingError::NotEulerian { odd_vertices: 2 })
        ));
    }

    #[test]
    fn test_empty_graph() {
        assert!(matches!(
            eulerian_circuit(&UndirectedGraph::new(), 0),
            Err(RoutingError::EmptyGraph)
        ));
    }

    #[test]
    fn test_unknown_start() {
        assert!(matches!(
            eulerian_circuit(&pentagon(), 17),
            Err(RoutingError::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_disconnected_edges_fail() {
        let mut g = pentagon();
        g.add_edge("X", "Y", 1.0).expect("valid");
        g.add_edge("X", "Y", 1.0).expect("valid");
        assert!(matches!(
            eulerian_circuit(&g, 0),
            Err(RoutingError::Disconnected {
                reached: 5,
                total: 7
            })
        ));
    }

    #[test]
    fn test_edgeless_vertex() {
        let mut g = UndirectedGraph::new();
        g.add_vertex("A");
        assert_eq!(eulerian_circuit(&g, 0).expect("trivial"), vec![0]);
    }

    #[test]
    fn test_path_strips_virtual_edge() {
        // House shape: square A-B-C-D plus roof B-E-C and diagonal A-C.
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "B", 1.0).expect("valid");
        g.add_edge("B", "C", 1.0).expect("valid");
        g.add_edge("C", "D", 1.0).expect("valid");
        g.add_edge("D", "A", 1.0).expect("valid");
        g.add_edge("B", "E", 1.0).expect("valid");
        g.add_edge("E", "C", 1.0).expect("valid");
        g.add_edge("A", "C", 1.0).expect("valid");
        let odd = odd_degree_vertices(&g);
        assert_eq!(odd, vec![0, 2]);

        for &start in &odd {
            let path = eulerian_path(&g, start).expect("two odd vertices");
            assert_eq!(path.len(), g.edge_count() + 1);
            assert_eq!(path.first(), Some(&start));
            let end = if start == 0 { 2 } else { 0 };
            assert_eq!(path.last(), Some(&end));
            assert_eq!(hop_counts(&path), edge_counts(&g));
            // Every hop is a real street.
            assert!((tour_distance(&g, &path).expect("ok") - 7.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_path_requires_two_odd_vertices() {
        assert!(matches!(
            eulerian_path(&pentagon(), 0),
            Err(RoutingError::NotEulerian { odd_vertices: 0 })
        ));
    }

    #[test]
    fn test_path_rejects_even_start() {
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "B", 1.0).expect("valid");
        g.add_edge("B", "C", 1.0).expect("valid");
        assert!(matches!(
            eulerian_path(&g, 1),
            Err(RoutingError::InvalidStart(id)) if id == "B"
        ));
    }
}
