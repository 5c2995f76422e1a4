//! Domain model types for collection route planning.
//!
//! Vertices are street corners or districts identified by string ids,
//! edges and arcs are weighted streets, loads are the waste quantities to
//! pick up, and sub-tours are single vehicle trips.

mod edge;
mod loads;
mod tour;
mod vertex;

pub(crate) use edge::is_valid_weight;
pub use edge::{Arc, Edge};
pub use loads::Loads;
pub use tour::SubTour;
pub use vertex::Vertex;
