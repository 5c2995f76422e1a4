//! Exhaustive two-trip capacity splitter.
//!
//! # Algorithm
//!
//! Enumerates every bipartition of the n non-depot stops (masks
//! `1..2^n - 1`, both groups non-empty). Partitions where either group
//! overflows the vehicle are skipped. Each group is ordered by a
//! nearest-neighbor walk from the depot over direct edge weights, and the
//! pair with the smallest combined distance wins. Ties keep the first
//! partition found.
//!
//! If no bipartition fits, or the tour is too short or too long to search,
//! the result is that of [`greedy_split`](super::greedy_split). A group
//! that fits but cannot be driven over direct streets is an error, not a
//! reason to fall back.
//!
//! # Complexity
//!
//! O(2^n · n²). Exponential: only tours with at most
//! [`SplitOptions::max_exhaustive_vertices`] stops are searched.

use tracing::{debug, warn};

use super::greedy::{check_single_loads, interior};
use super::{greedy_split, SplitOptions};
use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};
use crate::evaluation::tour_distance;
use crate::graph::Network;
use crate::models::{Loads, SubTour};

/// Splits a depot-bounded tour into the two cheapest trips that each fit
/// the vehicle, falling back to the greedy splitter when none exist.
///
/// # Errors
///
/// - `InvalidCapacity` if the options carry an unusable capacity
/// - `LoadExceedsCapacity` if one stop alone overflows the vehicle
/// - `MissingEdge` if a group that fits the vehicle needs a hop with no
///   direct edge
/// - any error of the greedy fallback
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::models::Loads;
/// use collect_routing::split::{exhaustive_split, SplitOptions};
///
/// // Two clusters: A, B west of the depot and C, E east of it.
/// let mut g = UndirectedGraph::new();
/// g.add_edge("D", "A", 1.0).unwrap();
/// g.add_edge("D", "B", 1.0).unwrap();
/// g.add_edge("A", "B", 1.0).unwrap();
/// g.add_edge("D", "C", 1.0).unwrap();
/// g.add_edge("D", "E", 1.0).unwrap();
/// g.add_edge("C", "E", 1.0).unwrap();
/// for (west, east) in [("A", "C"), ("A", "E"), ("B", "C"), ("B", "E")] {
///     g.add_edge(west, east, 3.0).unwrap();
/// }
/// let loads = Loads::from_ids(&g, [("A", 5.0), ("B", 5.0), ("C", 5.0), ("E", 5.0)]).unwrap();
///
/// // Tour order alternates clusters, but the best split regroups them.
/// let trips = exhaustive_split(&g, &[0, 1, 3, 2, 4, 0], &loads, &SplitOptions::new(10.0)).unwrap();
/// assert_eq!(trips.len(), 2);
/// let total: f64 = trips.iter().map(|t| t.load()).sum();
/// assert_eq!(total, 20.0);
/// ```
pub fn exhaustive_split<N: Network + ?Sized>(
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

    let n = stops.len();
    if n < 2 {
        return greedy_split(graph, tour, loads, options);
    }
    if n > options.max_exhaustive_vertices || n >= usize::BITS as usize {
        warn!(
            stops = n,
            ceiling = options.max_exhaustive_vertices,
            "too many stops for exhaustive split, using greedy"
        );
        return greedy_split(graph, tour, loads, options);
    }

    // Position 0 is the depot, position i + 1 is stops[i].
    let mut locations = Vec::with_capacity(n + 1);
    locations.push(depot);
    locations.extend_from_slice(stops);
    let distances = DistanceMatrix::from_direct_weights(graph, &locations);

    let mut best: Option<(f64, [SubTour; 2])> = None;
    let mut feasible = 0usize;
    for mask in 1..(1usize << n) - 1 {
        let (first, second): (Vec<usize>, Vec<usize>) =
            (1..=n).partition(|&p| mask & (1 << (p - 1)) != 0);
        let first_load = loads.total(first.iter().map(|&p| &locations[p]));
        let second_load = loads.total(second.iter().map(|&p| &locations[p]));
        if first_load > options.capacity || second_load > options.capacity {
            continue;
        }
        feasible += 1;

        let first_stops = nearest_order(graph, &distances, &locations, &first)?;
        let second_stops = nearest_order(graph, &distances, &locations, &second)?;
        let total = tour_distance(graph, &first_stops)? + tour_distance(graph, &second_stops)?;
        if best.as_ref().map_or(true, |(b, _)| total < *b) {
            best = Some((
                total,
                [
                    SubTour::new(first_stops, first_load),
                    SubTour::new(second_stops, second_load),
                ],
            ));
        }
    }

    match best {
        Some((total, trips)) => {
            debug!(stops = n, feasible, total_distance = total, "exhaustive split");
            Ok(trips.into())
        }
        None => {
            debug!(stops = n, feasible, "no two-trip split fits, using greedy");
            greedy_split(graph, tour, loads, options)
        }
    }
}

/// Orders `group` (matrix positions) by nearest neighbor from the depot and
/// returns the depot-bounded vertex sequence.
///
/// Fails with `MissingEdge` from the current stop to the first remaining one
/// when no remaining stop has a direct edge.
fn nearest_order<N: Network + ?Sized>(
    graph: &N,
    distances: &DistanceMatrix,
    locations: &[usize],
    group: &[usize],
) -> Result<Vec<usize>> {
    let mut remaining = group.to_vec();
    let mut stops = Vec::with_capacity(group.len() + 2);
    stops.push(locations[0]);
    let mut current = 0;
    while let Some(&stuck) = remaining.first() {
        let Some(next) = distances.nearest_neighbor(current, &remaining) else {
            return Err(RoutingError::MissingEdge {
                from: graph.label(locations[current]),
                to: graph.label(locations[stuck]),
            });
        };
        remaining.retain(|&p| p != next);
        stops.push(locations[next]);
        current = next;
    }
    stops.push(locations[0]);
    Ok(stops)
}
