//! Dense distance matrices over a subset of graph vertices.
//!
//! Used for odd-vertex shortest distances in the postman solver and for
//! nearest-neighbor ordering inside the capacity splitter.

mod matrix;

pub use matrix::DistanceMatrix;
