//! Greedy capacity splitter.
//!
//! # Algorithm
//!
//! Walk the tour in order and accumulate load. When the next stop would
//! overflow the vehicle, return to the depot and start a fresh trip from
//! there. Stops keep their tour order.
//!
//! # Complexity
//!
//! O(n) where n = number of stops.

use tracing::debug;

use super::SplitOptions;
use crate::error::{Result, RoutingError};
use crate::graph::Network;
use crate::models::{Loads, SubTour};

/// Splits a depot-bounded tour into trips that each fit the vehicle.
///
/// `tour[0]` is taken as the depot; the final depot visit is optional.
/// Concatenating the returned trips' stops (without depot visits) gives
/// back the original stop order.
///
/// # Errors
///
/// - `InvalidCapacity` if the options carry an unusable capacity
/// - `LoadExceedsCapacity` if one stop alone overflows the vehicle
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::models::Loads;
/// use collect_routing::split::{greedy_split, SplitOptions};
///
/// let mut g = UndirectedGraph::new();
/// for v in ["D", "A", "B", "C"] {
///     g.add_vertex(v);
/// }
/// let loads = Loads::from_ids(&g, [("A", 4.0), ("B", 4.0), ("C", 4.0)]).unwrap();
///
/// let trips = greedy_split(&g, &[0, 1, 2, 3, 0], &loads, &SplitOptions::new(10.0)).unwrap();
/// assert_eq!(trips.len(), 2);
/// assert_eq!(trips[0].stops(), &[0, 1, 2, 0]);
/// assert_eq!(trips[1].stops(), &[0, 3, 0]);
/// ```
pub fn greedy_split<N: Network + ?Sized>(
    graph: &N,
    tour: &[usize],
    loads: &Loads,
    options: &SplitOptions,
) -> Result<Vec<SubTour>> {
    options.validate()?;
    let Some((depot, stops)) = interior(tour) else {
        return Ok(Vec::new());
    };
    check_single_loads(graph, stops, loads, options.capacity)?;

    let mut trips = Vec::new();
    let mut current = vec![depot];
    let mut load = 0.0;
    for &stop in stops {
        let quantity = loads.get(stop);
        if load + quantity > options.capacity && current.len() > 1 {
            current.push(depot);
            trips.push(SubTour::new(std::mem::replace(&mut current, vec![depot]), load));
            load = 0.0;
        }
        current.push(stop);
        load += quantity;
    }
    if current.len() > 1 {
        current.push(depot);
        trips.push(SubTour::new(current, load));
    }

    debug!(stops = stops.len(), trips = trips.len(), "greedy split");
    Ok(trips)
}

/// Depot and stops strictly between the depot visits.
pub(super) fn interior(tour: &[usize]) -> Option<(usize, &[usize])> {
    let (&depot, rest) = tour.split_first()?;
    let stops = match rest.split_last() {
        Some((&last, body)) if last == depot => body,
        _ => rest,
    };
    Some((depot, stops))
}

pub(super) fn check_single_loads<N: Network + ?Sized>(
    graph: &N,
    stops: &[usize],
    loads: &Loads,
    capacity: f64,
) -> Result<()> {
    match stops.iter().find(|&&v| loads.get(v) > capacity) {
        Some(&v) => Err(RoutingError::LoadExceedsCapacity {
            vertex: graph.label(v),
            load: loads.get(v),
            capacity,
        }),
        None => Ok(()),
    }
}
