//! Tour evaluator that computes distance and collected load.

use serde::Serialize;

use crate::error::{Result, RoutingError};
use crate::graph::Network;
use crate::models::{Loads, SubTour};

/// Sums edge weights between consecutive vertices of `tour`.
///
/// Each hop is looked up in the forward orientation first, then the reverse
/// one. Fails with `MissingEdge` if neither resolves to a finite weight.
/// Tours with fewer than two vertices have zero length.
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::evaluation::tour_distance;
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("A", "B", 2.0).unwrap();
/// g.add_edge("B", "C", 3.0).unwrap();
/// assert_eq!(tour_distance(&g, &[0, 1, 2, 1, 0]).unwrap(), 10.0);
/// assert!(tour_distance(&g, &[0, 2]).is_err());
/// ```
pub fn tour_distance<N: Network + ?Sized>(graph: &N, tour: &[usize]) -> Result<f64> {
    let mut total = 0.0;
    for hop in tour.windows(2) {
        let (from, to) = (hop[0], hop[1]);
        let mut weight = graph.weight(from, to);
        if !weight.is_finite() {
            weight = graph.weight(to, from);
        }
        if !weight.is_finite() {
            return Err(RoutingError::MissingEdge {
                from: graph.label(from),
                to: graph.label(to),
            });
        }
        total += weight;
    }
    Ok(total)
}

/// Distance and load of one evaluated tour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TourMetrics {
    /// Sum of hop weights.
    pub distance: f64,
    /// Load collected at the non-depot stops.
    pub load: f64,
}

/// Evaluates depot-bounded tours against a graph and a load map.
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::models::Loads;
/// use collect_routing::evaluation::TourEvaluator;
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("D", "A", 3.0).unwrap();
/// g.add_edge("A", "B", 4.0).unwrap();
/// g.add_edge("B", "D", 5.0).unwrap();
/// let loads = Loads::from_ids(&g, [("A", 1.0), ("B", 2.0)]).unwrap();
///
/// let eval = TourEvaluator::new(&g, &loads);
/// let m = eval.evaluate(&[0, 1, 2, 0]).unwrap();
/// assert_eq!(m.distance, 12.0);
/// assert_eq!(m.load, 3.0);
/// ```
pub struct TourEvaluator<'a, N: Network + ?Sized> {
    graph: &'a N,
    loads: &'a Loads,
}

impl<'a, N: Network + ?Sized> TourEvaluator<'a, N> {
    /// Creates a new evaluator for the given graph and loads.
    pub fn new(graph: &'a N, loads: &'a Loads) -> Self {
        Self { graph, loads }
    }

    /// Load collected between the two depot visits of `stops`.
    pub fn load(&self, stops: &[usize]) -> f64 {
        if stops.len() < 2 {
            return 0.0;
        }
        self.loads.total(&stops[1..stops.len() - 1])
    }

    /// Computes distance and load of a depot-bounded stop sequence.
    pub fn evaluate(&self, stops: &[usize]) -> Result<TourMetrics> {
        Ok(TourMetrics {
            distance: tour_distance(self.graph, stops)?,
            load: self.load(stops),
        })
    }

    /// Evaluates every sub-tour, returning metrics in the same order.
    pub fn evaluate_all(&self, sub_tours: &[SubTour]) -> Result<Vec<TourMetrics>> {
        sub_tours.iter().map(|t| self.evaluate(t.stops())).collect()
    }
}
