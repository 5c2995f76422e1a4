//! Dense distance matrix.

use crate::graph::Network;

/// A dense n×n distance matrix stored in row-major order.
///
/// Rows and columns are positions `0..size`; callers keep the mapping from
/// positions to graph vertices. Missing connections are `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use collect_routing::graph::UndirectedGraph;
/// use collect_routing::distance::DistanceMatrix;
///
/// let mut g = UndirectedGraph::new();
/// g.add_edge("D", "A", 3.0).unwrap();
/// g.add_edge("A", "B", 4.0).unwrap();
/// // positions: 0 = D, 1 = A, 2 = B
/// let dm = DistanceMatrix::from_direct_weights(&g, &[0, 1, 2]);
/// assert_eq!(dm.get(0, 1), 3.0);
/// assert_eq!(dm.get(0, 2), f64::INFINITY);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size: zero on the diagonal,
    /// infinite everywhere else.
    pub fn new(size: usize) -> Self {
        let mut data = vec![f64::INFINITY; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self { data, size }
    }

    /// Builds a matrix of direct edge weights between the given vertices.
    ///
    /// Position `i` corresponds to `locations[i]`. Pairs without a direct
    /// edge stay infinite.
    pub fn from_direct_weights<N: Network + ?Sized>(graph: &N, locations: &[usize]) -> Self {
        let n = locations.len();
        let mut dm = Self::new(n);
        for (i, &from) in locations.iter().enumerate() {
            for (j, &to) in locations.iter().enumerate() {
                if i != j {
                    dm.set(i, j, graph.weight(from, to));
                }
            }
        }
        dm
    }

    /// Returns the distance from position `from` to position `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from position `from` to position `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of positions in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the nearest reachable position to `from` among `candidates`.
    ///
    /// Ties go to the earliest candidate. Returns `None` if `candidates` is
    /// empty or all of them are at infinite distance.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&c| self.get(from, c).is_finite())
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}
