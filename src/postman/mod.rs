//! Chinese-Postman tours for undirected street networks.
//!
//! - [`greedy_matching`] — cheapest-pair-first matching of odd vertices
//! - [`chinese_postman`] — eulerize by duplicating shortest paths, then
//!   build an Eulerian circuit from the depot

mod matching;
mod solver;

pub use matching::{greedy_matching, MatchedPair};
pub use solver::{chinese_postman, PostmanTour};
