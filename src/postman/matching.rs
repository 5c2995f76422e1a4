//! Greedy minimum-weight near-perfect matching.
//!
//! # Algorithm
//!
//! Sort all pairs by ascending distance and take each pair whose endpoints
//! are both still free. This approximates a minimum-weight perfect matching
//! (Edmonds' Blossom algorithm would be exact) in O(k² log k) for k vertices.

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};

/// Two vertices paired by the matching, with their shortest distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchedPair {
    /// First vertex index.
    pub a: usize,
    /// Second vertex index.
    pub b: usize,
    /// Shortest-path distance between them.
    pub distance: f64,
    /// Positions of `a` and `b` in the slice given to [`greedy_matching`].
    pub positions: (usize, usize),
}

/// Pairs up `vertices` greedily by ascending distance.
///
/// `distances` is indexed by position in `vertices`. Pairs at infinite
/// distance are never matched. Ties keep the order in which pairs are
/// enumerated (`(0, 1), (0, 2), …, (1, 2), …`).
///
/// Fails with `NoPerfectMatching` if some vertex stays unpaired, which
/// happens when the vertices lie in different components.
///
/// # Examples
///
/// ```
/// use collect_routing::distance::DistanceMatrix;
/// use collect_routing::postman::greedy_matching;
///
/// // Vertices 10, 11, 12, 13 on a line, one unit apart.
/// let mut dm = DistanceMatrix::new(4);
/// for i in 0..4 {
///     for j in 0..4 {
///         dm.set(i, j, (i as f64 - j as f64).abs());
///     }
/// }
/// let pairs = greedy_matching(&[10, 11, 12, 13], &dm).unwrap();
/// assert_eq!(pairs.len(), 2);
/// assert_eq!((pairs[0].a, pairs[0].b), (10, 11));
/// assert_eq!((pairs[1].a, pairs[1].b), (12, 13));
/// ```
pub fn greedy_matching(vertices: &[usize], distances: &DistanceMatrix) -> Result<Vec<MatchedPair>> {
    let k = vertices.len();
    let mut candidates = Vec::with_capacity(k * k.saturating_sub(1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            let d = distances.get(i, j);
            if d.is_finite() {
                candidates.push((i, j, d));
            }
        }
    }
    candidates.sort_by(|x, y| x.2.total_cmp(&y.2));

    let mut matched = vec![false; k];
    let mut pairs = Vec::with_capacity(k / 2);
    for (i, j, d) in candidates {
        if matched[i] || matched[j] {
            continue;
        }
        matched[i] = true;
        matched[j] = true;
        pairs.push(MatchedPair {
            a: vertices[i],
            b: vertices[j],
            distance: d,
            positions: (i, j),
        });
    }

    let unmatched = matched.iter().filter(|&&m| !m).count();
    if unmatched > 0 {
        return Err(RoutingError::NoPerfectMatching { unmatched });
    }
    Ok(pairs)
}
