//! Capacity rebalancing of a day coloring.
//!
//! # Algorithm
//!
//! Repeat until a full pass moves nothing:
//!
//! 1. Collect the days whose total load exceeds the daily capacity.
//! 2. For each such day, take its vertices heaviest first and move each one
//!    to the first existing day that still has room and holds none of its
//!    neighbors. When no existing day qualifies, open a new day for it.
//! 3. Stop working on a day once it fits, or once a pass over it moved
//!    nothing.
//!
//! A vertex that is alone on its day is never moved to a new day: it would
//! overflow there just the same. Moves only leave overloaded days and only
//! land where capacity allows, so every vertex moves at most once and the
//! loop terminates.
//!
//! The neighbor constraint of the input coloring is preserved by every move.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::coloring::group_by_day;
use super::Coloring;
use crate::error::{Result, RoutingError};
use crate::graph::{Network, UndirectedGraph};
use crate::models::Loads;

/// One vertex moved between days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveEvent {
    /// Vertex index.
    pub vertex: usize,
    /// Day it left.
    pub from_day: usize,
    /// Day it joined.
    pub to_day: usize,
    /// `true` if `to_day` was opened for this move.
    pub new_day: bool,
}

/// Final schedule after rebalancing.
#[derive(Debug, Clone, Serialize)]
pub struct Rebalancing {
    day_of: Vec<usize>,
    days: BTreeMap<usize, Vec<usize>>,
    day_loads: BTreeMap<usize, f64>,
    day_count: usize,
    events: Vec<MoveEvent>,
}

impl Rebalancing {
    /// Day of `vertex`.
    pub fn day(&self, vertex: usize) -> Option<usize> {
        self.day_of.get(vertex).copied()
    }

    /// Days indexed by vertex.
    pub fn day_of(&self) -> &[usize] {
        &self.day_of
    }

    /// Vertices scheduled on each day, sorted by vertex id.
    pub fn days(&self) -> &BTreeMap<usize, Vec<usize>> {
        &self.days
    }

    /// Total load per day.
    pub fn day_loads(&self) -> &BTreeMap<usize, f64> {
        &self.day_loads
    }

    /// Total load of `day` (zero for unknown days).
    pub fn day_load(&self, day: usize) -> f64 {
        self.day_loads.get(&day).copied().unwrap_or(0.0)
    }

    /// Number of days, including the ones opened by rebalancing.
    pub fn day_count(&self) -> usize {
        self.day_count
    }

    /// Moves in the order they happened.
    pub fn events(&self) -> &[MoveEvent] {
        &self.events
    }
}

/// Moves vertices between days until no day carries more than `capacity`,
/// or no further move helps.
///
/// `coloring` must have been computed on `graph`.
///
/// # Errors
///
/// - `InvalidCapacity` unless `capacity` is finite and positive
/// - `VertexNotFound` if the coloring does not cover the graph's vertices
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::models::Loads;
/// use collect_routing::schedule::{rebalance, welsh_powell};
///
/// // Path A - B - C: A and C share day 2 and overload it together.
/// let mut g = UndirectedGraph::new();
/// g.add_edge("A", "B", 1.0).unwrap();
/// g.add_edge("B", "C", 1.0).unwrap();
/// let loads = Loads::from_ids(&g, [("A", 6.0), ("B", 1.0), ("C", 6.0)]).unwrap();
///
/// let coloring = welsh_powell(&g).unwrap();
/// let plan = rebalance(&g, &coloring, &loads, 10.0).unwrap();
/// assert_eq!(plan.day_count(), 3);
/// assert_eq!(plan.events().len(), 1);
/// assert!(plan.events()[0].new_day);
/// assert!(plan.day_loads().values().all(|&load| load <= 10.0));
/// ```
pub fn rebalance(
    graph: &UndirectedGraph,
    coloring: &Coloring,
    loads: &Loads,
    capacity: f64,
) -> Result<Rebalancing> {
    if !(capacity.is_finite() && capacity > 0.0) {
        return Err(RoutingError::InvalidCapacity(capacity));
    }
    let n = graph.vertex_count();
    if coloring.day_of().len() != n {
        return Err(RoutingError::VertexNotFound(
            graph.label(coloring.day_of().len().min(n)),
        ));
    }

    let mut schedule = Schedule::new(coloring.day_of().to_vec(), loads);
    let mut max_day = coloring.day_count();

    loop {
        let overloaded: Vec<usize> = schedule
            .loads
            .iter()
            .filter(|&(_, &load)| load > capacity)
            .map(|(&day, _)| day)
            .collect();
        if overloaded.is_empty() {
            break;
        }

        let mut changed = false;
        for day in overloaded {
            while schedule.load(day) > capacity {
                let mut members = schedule.members(day);
                members.sort_by(|&a, &b| loads.get(b).total_cmp(&loads.get(a)));

                let mut moved = false;
                for vertex in members {
                    if schedule.load(day) <= capacity {
                        break;
                    }
                    let quantity = loads.get(vertex);
                    let target = (1..=max_day).filter(|&d| d != day).find(|&d| {
                        schedule.load(d) + quantity <= capacity
                            && !graph
                                .neighbors(vertex)
                                .any(|u| u != vertex && schedule.day_of[u] == d)
                    });

                    let event = match target {
                        Some(to_day) => MoveEvent {
                            vertex,
                            from_day: day,
                            to_day,
                            new_day: false,
                        },
                        None if schedule.members(day).len() > 1 => {
                            max_day += 1;
                            MoveEvent {
                                vertex,
                                from_day: day,
                                to_day: max_day,
                                new_day: true,
                            }
                        }
                        None => continue,
                    };
                    debug!(
                        vertex = %graph.label(vertex),
                        from = event.from_day,
                        to = event.to_day,
                        new_day = event.new_day,
                        "district moved"
                    );
                    schedule.apply(&event, quantity);
                    moved = true;
                    changed = true;
                }

                if !moved {
                    break;
                }
            }
        }

        if !changed {
            break;
        }
    }

    Ok(Rebalancing {
        days: group_by_day(graph, &schedule.day_of),
        day_of: schedule.day_of,
        day_loads: schedule.loads,
        day_count: max_day,
        events: schedule.events,
    })
}

/// Mutable day assignment with running per-day loads.
struct Schedule {
    day_of: Vec<usize>,
    loads: BTreeMap<usize, f64>,
    events: Vec<MoveEvent>,
}

impl Schedule {
    fn new(day_of: Vec<usize>, loads: &Loads) -> Self {
        let mut per_day = BTreeMap::new();
        for (v, &day) in day_of.iter().enumerate() {
            *per_day.entry(day).or_insert(0.0) += loads.get(v);
        }
        Self {
            day_of,
            loads: per_day,
            events: Vec::new(),
        }
    }

    fn load(&self, day: usize) -> f64 {
        self.loads.get(&day).copied().unwrap_or(0.0)
    }

    fn members(&self, day: usize) -> Vec<usize> {
        (0..self.day_of.len())
            .filter(|&v| self.day_of[v] == day)
            .collect()
    }

    fn apply(&mut self, event: &MoveEvent, quantity: f64) {
        self.day_of[event.vertex] = event.to_day;
        *self.loads.entry(event.from_day).or_insert(0.0) -= quantity;
        *self.loads.entry(event.to_day).or_insert(0.0) += quantity;
        self.events.push(*event);
    }
}
