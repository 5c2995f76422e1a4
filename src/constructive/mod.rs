//! Constructive heuristics for single-vehicle collection tours.
//!
//! - [`minimum_spanning_tree`] — Prim's algorithm (1957), O(E log E)
//! - [`mst_tour`] — MST walk with shortcutting, at most twice optimal on metric graphs
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor with shortest-path fallback

mod mst;
mod mst_tour;
mod nearest_neighbor;

pub use mst::{minimum_spanning_tree, SpanningTree};
pub use mst_tour::{mst_tour, MstTour};
pub use nearest_neighbor::{nearest_neighbor_tour, NearestNeighborTour};
