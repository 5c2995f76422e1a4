//! Per-vertex load (quantity of waste to collect).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};
use crate::graph::Network;

/// Load in tons attached to vertices, keyed by vertex index.
///
/// Vertices without an entry carry zero load.
///
/// # Examples
///
/// ```
/// use collect_routing::graph::{Network, UndirectedGraph};
/// use collect_routing::models::Loads;
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("D", "A", 4.0).unwrap();
/// let loads = Loads::from_ids(&g, [("A", 2.5)]).unwrap();
/// assert_eq!(loads.get(g.index_of("A").unwrap()), 2.5);
/// assert_eq!(loads.get(g.index_of("D").unwrap()), 0.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Loads {
    by_vertex: HashMap<usize, f64>,
}

impl Loads {
    /// Creates an empty load map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a load map from `(vertex id, quantity)` pairs resolved against `graph`.
    pub fn from_ids<'a, N, I>(graph: &N, quantities: I) -> Result<Self>
    where
        N: Network + ?Sized,
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut loads = Self::new();
        for (id, quantity) in quantities {
            let vertex = graph.require(id)?;
            if !is_valid_quantity(quantity) {
                return Err(RoutingError::InvalidQuantity {
                    vertex: id.to_string(),
                    quantity,
                });
            }
            loads.by_vertex.insert(vertex, quantity);
        }
        Ok(loads)
    }

    /// Sets the load of a vertex, replacing any previous value.
    pub fn set(&mut self, vertex: usize, quantity: f64) -> Result<()> {
        if !is_valid_quantity(quantity) {
            return Err(RoutingError::InvalidQuantity {
                vertex: format!("#{vertex}"),
                quantity,
            });
        }
        self.by_vertex.insert(vertex, quantity);
        Ok(())
    }

    /// Load at `vertex` (zero when unset).
    pub fn get(&self, vertex: usize) -> f64 {
        self.by_vertex.get(&vertex).copied().unwrap_or(0.0)
    }

    /// Sum of the loads of the given vertices.
    pub fn total<'a>(&self, vertices: impl IntoIterator<Item = &'a usize>) -> f64 {
        vertices.into_iter().map(|&v| self.get(v)).sum()
    }

    /// Number of vertices with an explicit entry.
    pub fn len(&self) -> usize {
        self.by_vertex.len()
    }

    /// Returns `true` if no vertex has an explicit entry.
    pub fn is_empty(&self) -> bool {
        self.by_vertex.is_empty()
    }
}

fn is_valid_quantity(quantity: f64) -> bool {
    quantity.is_finite() && quantity >= 0.0
}
