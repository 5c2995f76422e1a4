//! Depot → target → depot round trip.

use serde::Serialize;

use super::dijkstra;
use crate::error::Result;
use crate::graph::Network;

/// Outbound and inbound legs of a round trip between the depot and one
/// collection point.
///
/// On a directed graph the two legs can differ. An unreachable leg has an
/// empty path and infinite distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundTrip {
    /// Depot → target path.
    pub outbound: Vec<usize>,
    /// Depot → target distance.
    pub outbound_distance: f64,
    /// Target → depot path.
    pub inbound: Vec<usize>,
    /// Target → depot distance.
    pub inbound_distance: f64,
}

impl RoundTrip {
    /// Sum of both legs (infinite if either is unreachable).
    pub fn total_distance(&self) -> f64 {
        self.outbound_distance + self.inbound_distance
    }

    /// Returns `true` if both legs exist.
    pub fn is_complete(&self) -> bool {
        self.total_distance().is_finite()
    }
}

/// Plans the shortest trip from `depot` to `target` and back.
///
/// # Examples
///
/// ```
/// use collect_routing::graph::DirectedGraph;
/// use collect_routing::shortest_path::round_trip;
///
/// let mut g = DirectedGraph::new();
/// g.add_arc("D", "H", 4.0).unwrap();
/// g.add_arc("H", "X", 1.0).unwrap();
/// g.add_arc("X", "D", 2.0).unwrap();
///
/// let trip = round_trip(&g, "D", "H").unwrap();
/// assert_eq!(trip.outbound_distance, 4.0);
/// assert_eq!(trip.inbound_distance, 3.0);
/// assert_eq!(trip.total_distance(), 7.0);
/// ```
pub fn round_trip<N: Network + ?Sized>(graph: &N, depot: &str, target: &str) -> Result<RoundTrip> {
    let depot = graph.require(depot)?;
    let target = graph.require(target)?;

    let from_depot = dijkstra(graph, depot)?;
    let from_target = dijkstra(graph, target)?;

    Ok(RoundTrip {
        outbound: from_depot.path(target),
        outbound_distance: from_depot.distance(target),
        inbound: from_target.path(depot),
        inbound_distance: from_target.distance(depot),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingError;
    use crate::graph::{DirectedGraph, UndirectedGraph};

    #[test]
    fn test_undirected_legs_mirror() {
        let mut g = UndirectedGraph::new();
        g.add_edge("D", "A", 2.0).expect("valid");
        g.add_edge("A", "H", 3.0).expect("valid");
        let trip = round_trip(&g, "D", "H").expect("ok");
        assert_eq!(trip.outbound, vec![0, 1, 2]);
        assert_eq!(trip.inbound, vec![2, 1, 0]);
        assert_eq!(trip.total_distance(), 10.0);
        assert!(trip.is_complete());
    }

    #[test]
    fn test_one_way_dead_end() {
        let mut g = DirectedGraph::new();
        g.add_arc("D", "H", 1.0).expect("valid");
        let trip = round_trip(&g, "D", "H").expect("ok");
        assert_eq!(trip.outbound_distance, 1.0);
        assert!(trip.inbound.is_empty());
        assert!(!trip.is_complete());
    }

    #[test]
    fn test_same_vertex() {
        let mut g = UndirectedGraph::new();
        g.add_vertex("D");
        let trip = round_trip(&g, "D", "D").expect("ok");
        assert_eq!(trip.total_distance(), 0.0);
        assert_eq!(trip.outbound, vec![0]);
    }

    #[test]
    fn test_unknown_target() {
        let mut g = UndirectedGraph::new();
        g.add_vertex("D");
        assert!(matches!(
            round_trip(&g, "D", "Q"),
            Err(RoutingError::VertexNotFound(_))
        ));
    }
}
