//! Eulerian circuits and paths.
//!
//! - [`odd_degree_vertices`], [`is_eulerian`] — parity checks
//! - [`eulerian_circuit`] — Hierholzer's algorithm with an explicit stack, O(E)
//! - [`eulerian_path`] — open trail between the two odd-degree vertices

mod hierholzer;
mod parity;

pub use hierholzer::{eulerian_circuit, eulerian_path};
pub use parity::{is_eulerian, odd_degree_vertices};
