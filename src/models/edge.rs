//! Undirected edge and directed arc types.
//!
//! Endpoints are vertex indices into the owning graph's vertex arena.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Returns `true` if `weight` is usable as a distance.
pub(crate) fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

/// An undirected weighted edge (a two-way street).
///
/// Equality and hashing consider the unordered endpoint pair only, so
/// `(u, v, w)` equals `(v, u, w')` whatever the weights.
///
/// # Examples
///
/// ```
/// use collect_routing::models::Edge;
///
/// let e = Edge::new(0, 1, 10.0).unwrap();
/// let f = Edge::new(1, 0, 12.5).unwrap();
/// assert_eq!(e, f);
/// assert_eq!(e.other(0), Some(1));
/// assert!(Edge::new(0, 1, -1.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    a: usize,
    b: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge between vertex indices `a` and `b`.
    ///
    /// Returns `None` if the weight is negative or non-finite.
    pub fn new(a: usize, b: usize, weight: f64) -> Option<Self> {
        if !is_valid_weight(weight) {
            return None;
        }
        Some(Self { a, b, weight })
    }

    /// First endpoint, as inserted.
    pub fn a(&self) -> usize {
        self.a
    }

    /// Second endpoint, as inserted.
    pub fn b(&self) -> usize {
        self.b
    }

    /// Edge weight (distance).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    pub fn connects(&self, vertex: usize) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// Returns the endpoint opposite to `vertex`, or `None` if the edge does
    /// not touch it.
    pub fn other(&self, vertex: usize) -> Option<usize> {
        if self.a == vertex {
            Some(self.b)
        } else if self.b == vertex {
            Some(self.a)
        } else {
            None
        }
    }

    fn key(&self) -> (usize, usize) {
        (self.a.min(self.b), self.a.max(self.b))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// A directed weighted arc (a one-way street).
///
/// Equality and hashing consider the ordered `(from, to)` pair only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arc {
    from: usize,
    to: usize,
    weight: f64,
}

impl Arc {
    /// Creates an arc from `from` to `to`.
    ///
    /// Returns `None` if the weight is negative or non-finite.
    pub fn new(from: usize, to: usize, weight: f64) -> Option<Self> {
        if !is_valid_weight(weight) {
            return None;
        }
        Some(Self { from, to, weight })
    }

    /// Tail of the arc.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Head of the arc.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Arc weight (distance).
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Arc {}

impl Hash for Arc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.from, self.to).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_edge_symmetric_equality() {
        let e = Edge::new(2, 5, 3.0).expect("valid");
        let f = Edge::new(5, 2, 3.0).expect("valid");
        assert_eq!(e, f);
    }

    #[test]
    fn test_parallel_edges_collide_in_sets() {
        // Weight is not part of identity.
        let e = Edge::new(0, 1, 3.0).expect("valid");
        let f = Edge::new(1, 0, 7.0).expect("valid");
        let set: HashSet<Edge> = [e, f].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_edge_rejects_bad_weight() {
        assert!(Edge::new(0, 1, -0.5).is_none());
        assert!(Edge::new(0, 1, f64::NAN).is_none());
        assert!(Edge::new(0, 1, f64::INFINITY).is_none());
        assert!(Edge::new(0, 1, 0.0).is_some());
    }

    #[test]
    fn test_edge_other() {
        let e = Edge::new(3, 4, 1.0).expect("valid");
        assert!(e.connects(3));
        assert_eq!(e.other(3), Some(4));
        assert_eq!(e.other(4), Some(3));
        assert_eq!(e.other(9), None);
    }

    #[test]
    fn test_arc_is_ordered() {
        let ab = Arc::new(0, 1, 2.0).expect("valid");
        let ba = Arc::new(1, 0, 2.0).expect("valid");
        let ab_heavier = Arc::new(0, 1, 9.0).expect("valid");
        assert_ne!(ab, ba);
        assert_eq!(ab, ab_heavier);
        assert_eq!(ab.from(), 0);
        assert_eq!(ab.to(), 1);
    }
}
