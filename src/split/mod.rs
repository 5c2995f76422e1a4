//! Capacity splitting of a collection tour into vehicle trips.
//!
//! - [`greedy_split`] — Cut the tour whenever the vehicle is full, O(n)
//! - [`exhaustive_split`] — Best two-trip bipartition, O(2^n · n²), bounded by
//!   [`SplitOptions::max_exhaustive_vertices`]

mod exhaustive;
mod greedy;
mod options;

pub use exhaustive::exhaustive_split;
pub use greedy::greedy_split;
pub use options::{SplitOptions, DEFAULT_MAX_EXHAUSTIVE_VERTICES};
