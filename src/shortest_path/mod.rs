//! Single-source shortest paths over non-negative weights.
//!
//! - [`dijkstra`] — label-setting Dijkstra from a vertex index, O((V + E) log V)
//! - [`shortest_paths`] — same, resolving the source by id
//! - [`round_trip`] — depot → target → depot in two Dijkstra runs

mod dijkstra;
mod round_trip;

pub use dijkstra::{dijkstra, shortest_paths, ShortestPaths};
pub use round_trip::{round_trip, RoundTrip};
