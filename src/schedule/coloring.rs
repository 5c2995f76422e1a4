//! Welsh–Powell greedy coloring for collection-day assignment.
//!
//! # Algorithm
//!
//! 1. Sort vertices by descending degree, ties by ascending id.
//! 2. Give each vertex the smallest day (starting at 1) not used by an
//!    already colored neighbor.
//! 3. Renumber days in order of first use.
//!
//! Adjacent districts never share a day. Self-loops are ignored.
//!
//! # Complexity
//!
//! O(V log V + E).
//!
//! # Reference
//!
//! Welsh, D.J.A. & Powell, M.B. (1967). "An upper bound for the chromatic
//! number of a graph and its application to timetabling problems",
//! *The Computer Journal* 10(1), 85-86.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, RoutingError};
use crate::graph::{Network, UndirectedGraph};

/// Day assigned to every vertex of a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coloring {
    day_of: Vec<usize>,
    days: BTreeMap<usize, Vec<usize>>,
    day_count: usize,
}

impl Coloring {
    /// Day of `vertex` (days start at 1).
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

    /// Vertices scheduled on `day`, sorted by vertex id.
    pub fn vertices_on(&self, day: usize) -> &[usize] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct days used.
    pub fn day_count(&self) -> usize {
        self.day_count
    }
}

/// Colors `graph` with the Welsh–Powell heuristic.
///
/// Fails with `EmptyGraph` if the graph has no vertices.
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::schedule::welsh_powell;
///
/// // Triangle: every district needs its own day.
/// let mut g = UndirectedGraph::new();
/// g.add_edge("A", "B", 1.0).unwrap();
/// g.add_edge("B", "C", 1.0).unwrap();
/// g.add_edge("C", "A", 1.0).unwrap();
///
/// let coloring = welsh_powell(&g).unwrap();
/// assert_eq!(coloring.day_count(), 3);
/// assert_eq!(coloring.vertices_on(1), &[0]);
/// ```
pub fn welsh_powell(graph: &UndirectedGraph) -> Result<Coloring> {
    if graph.is_empty() {
        return Err(RoutingError::EmptyGraph);
    }
    let n = graph.vertex_count();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_cached_key(|&v| (Reverse(graph.degree(v)), graph.label(v)));

    let mut color = vec![0usize; n];
    for &v in &order {
        let mut taken: Vec<usize> = graph
            .neighbors(v)
            .filter(|&u| u != v)
            .map(|u| color[u])
            .filter(|&c| c > 0)
            .collect();
        taken.sort_unstable();
        taken.dedup();
        let mut c = 1;
        for t in taken {
            if t == c {
                c += 1;
            } else if t > c {
                break;
            }
        }
        color[v] = c;
    }

    let mut renumber: HashMap<usize, usize> = HashMap::new();
    for &v in &order {
        let next = renumber.len() + 1;
        renumber.entry(color[v]).or_insert(next);
    }
    let day_of: Vec<usize> = color
        .iter()
        .map(|c| renumber.get(c).copied().unwrap_or(*c))
        .collect();
    let day_count = renumber.len();

    debug!(vertices = n, days = day_count, "welsh-powell coloring");
    Ok(Coloring {
        days: group_by_day(graph, &day_of),
        day_of,
        day_count,
    })
}

/// Inverse index day -> vertices, each list sorted by vertex id.
pub(super) fn group_by_day<N: Network + ?Sized>(
    graph: &N,
    day_of: &[usize],
) -> BTreeMap<usize, Vec<usize>> {
    let mut days: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for (v, &day) in day_of.iter().enumerate() {
        days.entry(day).or_default().push(v);
    }
    for vertices in days.values_mut() {
        vertices.sort_by_cached_key(|&v| graph.label(v));
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    /// C-A-B-D-E-C. Indices: C=0, A=1, B=2, D=3, E=4.
    fn pentagon() -> UndirectedGraph {
        let mut g = UndirectedGraph::new();
        g.add_edge("C", "A", 10.0).expect("valid");
        g.add_edge("A", "B", 10.0).expect("valid");
        g.add_edge("B", "D", 10.0).expect("valid");
        g.add_edge("D", "E", 10.0).expect("valid");
        g.add_edge("E", "C", 10.0).expect("valid");
        g
    }

    fn is_proper(g: &UndirectedGraph, c: &Coloring) -> bool {
        g.edges()
            .iter()
            .filter(|e| e.a() != e.b())
            .all(|e| c.day(e.a()) != c.day(e.b()))
    }

    #[test]
    fn test_odd_cycle_needs_three_days() {
        let g = pentagon();
        let c = welsh_powell(&g).expect("non-empty");
        assert_eq!(c.day_count(), 3);
        assert!(is_proper(&g, &c));
        // Equal degrees: visited A, B, C, D, E.
        assert_eq!(c.vertices_on(1), &[1, 3]);
        assert_eq!(c.vertices_on(2), &[2, 0]);
        assert_eq!(c.vertices_on(3), &[4]);
    }

    #[test]
    fn test_hub_goes_first() {
        let mut g = UndirectedGraph::new();
        for leaf in ["P", "Q", "R", "S"] {
            g.add_edge("Z", leaf, 1.0).expect("valid");
        }
        let c = welsh_powell(&g).expect("non-empty");
        let hub = g.require("Z").expect("present");
        assert_eq!(c.day(hub), Some(1));
        assert_eq!(c.day_count(), 2);
        assert_eq!(c.vertices_on(2).len(), 4);
    }

    #[test]
    fn test_equal_degree_ties_broken_by_id() {
        // X is inserted first, but A sorts first and takes day 1.
        let mut g = UndirectedGraph::new();
        g.add_edge("X", "A", 1.0).expect("valid");
        let c = welsh_powell(&g).expect("non-empty");
        assert_eq!(c.day(g.require("A").expect("a")), Some(1));
        assert_eq!(c.day(g.require("X").expect("x")), Some(2));
    }

    #[test]
    fn test_isolated_vertices_share_day_one() {
        let mut g = UndirectedGraph::new();
        g.add_vertex("B");
        g.add_vertex("A");
        let c = welsh_powell(&g).expect("non-empty");
        assert_eq!(c.day_count(), 1);
        // Sorted by id, not by index.
        assert_eq!(c.vertices_on(1), &[1, 0]);
    }

    #[test]
    fn test_self_loop_ignored() {
        let mut g = UndirectedGraph::new();
        g.add_edge("A", "A", 1.0).expect("valid");
        g.add_edge("A", "B", 1.0).expect("valid");
        let c = welsh_powell(&g).expect("non-empty");
        assert_eq!(c.day_count(), 2);
        assert!(is_proper(&g, &c));
    }

    #[test]
    fn test_day_count_bounded_by_max_degree() {
        let g = pentagon();
        let c = welsh_powell(&g).expect("non-empty");
        let max_degree = (0..g.vertex_count()).map(|v| g.degree(v)).max().unwrap_or(0);
        assert!(c.day_count() <= max_degree + 1);
    }

    #[test]
    fn test_empty_graph() {
        assert!(matches!(
            welsh_powell(&UndirectedGraph::new()),
            Err(RoutingError::EmptyGraph)
        ));
    }
}
