//! Collection-day scheduling for neighboring districts.
//!
//! - [`welsh_powell`] — Greedy coloring so adjacent districts never share a day
//! - [`rebalance`] — Moves districts between days to respect a daily capacity

mod coloring;
mod rebalance;

pub use coloring::{welsh_powell, Coloring};
pub use rebalance::{rebalance, MoveEvent, Rebalancing};
