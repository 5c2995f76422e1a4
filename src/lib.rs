//! # collect-routing
//!
//! Route planning for waste collection over weighted street networks:
//! shortest paths, Eulerian and Chinese-Postman tours, MST-based TSP tours
//! with capacity splitting, and neighbor-constrained collection days.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Vertex, Edge, Arc, Loads, SubTour)
//! - [`graph`] — Undirected and directed weighted graphs behind the [`graph::Network`] trait
//! - [`distance`] — Dense distance matrix over a subset of vertices
//! - [`evaluation`] — Tour distance and load evaluation
//! - [`shortest_path`] — Dijkstra and depot round trips
//! - [`euler`] — Parity checks, Eulerian circuits and paths (Hierholzer)
//! - [`postman`] — Chinese-Postman tours with greedy odd-vertex matching
//! - [`constructive`] — Prim MST, MST tour with shortcutting, nearest-neighbor tour
//! - [`split`] — Capacity splitting into vehicle trips (greedy, exhaustive two-way)
//! - [`schedule`] — Welsh–Powell day coloring and capacity rebalancing
//! - [`io`] — Text loader for `#Sommets` / `#Aretes` / `#Arcs` files
//! - [`error`] — Error type shared by every fallible operation
//!
//! ## Example
//!
//! ```
//! use collect_routing::graph::{Network, UndirectedGraph};
//! use collect_routing::postman::chinese_postman;
//! use collect_routing::shortest_path::shortest_paths;
//!
//! let mut g = UndirectedGraph::new();
//! for (a, b) in [("C", "A"), ("A", "B"), ("B", "D"), ("D", "E"), ("E", "C")] {
//!     g.add_edge(a, b, 10.0).unwrap();
//! }
//!
//! let sp = shortest_paths(&g, "C").unwrap();
//! assert_eq!(sp.distance(g.require("B").unwrap()), 20.0);
//!
//! let tour = chinese_postman(&g, "C").unwrap();
//! assert_eq!(tour.total_distance, 50.0);
//! assert_eq!(g.ids(&tour.tour).first().map(String::as_str), Some("C"));
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod euler;
pub mod evaluation;
pub mod graph;
pub mod io;
pub mod models;
pub mod postman;
pub mod schedule;
pub mod shortest_path;
pub mod split;

pub use error::{Result, RoutingError};
