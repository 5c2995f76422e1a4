//! Capacity-splitting configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Default ceiling on non-depot stops for the exhaustive splitter
/// (2^20 bipartitions).
pub const DEFAULT_MAX_EXHAUSTIVE_VERTICES: usize = 20;

/// Vehicle capacity and search limits for capacity splitting.
///
/// # Examples
///
/// ```
/// use collect_routing::split::SplitOptions;
///
/// let opts = SplitOptions::new(10.0).with_max_exhaustive_vertices(12);
/// assert_eq!(opts.capacity, 10.0);
/// assert_eq!(opts.max_exhaustive_vertices, 12);
/// assert!(opts.validate().is_ok());
/// assert!(SplitOptions::new(-1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Maximum load (tons) one trip can carry.
    pub capacity: f64,
    /// Largest number of non-depot stops searched exhaustively; longer tours
    /// fall back to the greedy splitter.
    pub max_exhaustive_vertices: usize,
}

impl SplitOptions {
    /// Creates options for the given vehicle capacity.
    pub fn new(capacity: f64) -> Self {
        Self {
            capacity,
            max_exhaustive_vertices: DEFAULT_MAX_EXHAUSTIVE_VERTICES,
        }
    }

    /// Sets the vehicle capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the exhaustive-search ceiling.
    pub fn with_max_exhaustive_vertices(mut self, max: usize) -> Self {
        self.max_exhaustive_vertices = max;
        self
    }

    /// Fails with `InvalidCapacity` unless the capacity is finite and positive.
    pub fn validate(&self) -> Result<()> {
        if self.capacity.is_finite() && self.capacity > 0.0 {
            Ok(())
        } else {
            Err(RoutingError::InvalidCapacity(self.capacity))
        }
    }
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self::new(f64::MAX)
    }
}
