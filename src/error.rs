//! Error type shared by every solver in the crate.

use thiserror::Error;

/// Failures surfaced by graph construction, loading, and the route solvers.
///
/// Every variant aborts the call that produced it; solvers never return
/// partial results.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// A referenced vertex id is not part of the graph.
    #[error("vertex `{0}` not found in graph")]
    VertexNotFound(String),

    /// An edge or arc was given a negative or non-finite weight.
    #[error("invalid weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        /// Source endpoint id.
        from: String,
        /// Target endpoint id.
        to: String,
        /// Rejected weight.
        weight: f64,
    },

    /// The operation needs at least one vertex.
    #[error("graph is empty")]
    EmptyGraph,

    /// Some vertex has odd degree, so no Eulerian circuit exists.
    #[error("graph is not Eulerian ({odd_vertices} odd-degree vertices)")]
    NotEulerian {
        /// Number of odd-degree vertices found.
        odd_vertices: usize,
    },

    /// The number of odd-degree vertices is odd, which breaks the handshake lemma.
    #[error("odd-degree vertex count must be even, found {0}")]
    OddCountNotEven(usize),

    /// Greedy matching left some odd-degree vertices unpaired.
    #[error("no perfect matching: {unmatched} odd-degree vertices left unpaired")]
    NoPerfectMatching {
        /// Vertices that could not be matched.
        unmatched: usize,
    },

    /// Not every vertex (or edge) is reachable from the start vertex.
    #[error("graph is disconnected: reached {reached} of {total}")]
    Disconnected {
        /// Items reached from the start.
        reached: usize,
        /// Items that had to be reached.
        total: usize,
    },

    /// A tour hop has no direct edge in the graph it is measured against.
    #[error("missing edge between `{from}` and `{to}`")]
    MissingEdge {
        /// Hop origin id.
        from: String,
        /// Hop destination id.
        to: String,
    },

    /// An Eulerian path was requested from a vertex that is not one of its endpoints.
    #[error("vertex `{0}` is not an odd-degree endpoint of an Eulerian path")]
    InvalidStart(String),

    /// A load quantity is negative or non-finite.
    #[error("invalid quantity {quantity} for vertex `{vertex}`")]
    InvalidQuantity {
        /// Vertex id.
        vertex: String,
        /// Rejected quantity.
        quantity: f64,
    },

    /// A capacity ceiling is not a positive finite number.
    #[error("invalid capacity {0}")]
    InvalidCapacity(f64),

    /// A single vertex carries more load than one trip can hold.
    #[error("load {load} at vertex `{vertex}` exceeds capacity {capacity}")]
    LoadExceedsCapacity {
        /// Vertex id.
        vertex: String,
        /// Load at that vertex.
        load: f64,
        /// Capacity ceiling.
        capacity: f64,
    },

    /// A line of a graph description could not be understood.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
