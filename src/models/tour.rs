//! Sub-tour type produced by capacity splitting.

use serde::Serialize;

/// One trip of the collection vehicle: leaves the depot, visits `stops`
/// in order and returns to the depot.
///
/// `stops` includes the depot at both ends.
///
/// # Examples
///
/// ```
/// use collect_routing::models::SubTour;
///
/// let trip = SubTour::new(vec![0, 2, 3, 0], 7.5);
/// assert_eq!(trip.customers(), &[2, 3]);
/// assert_eq!(trip.depot(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubTour {
    stops: Vec<usize>,
    load: f64,
}

impl SubTour {
    /// Creates a sub-tour from its full stop sequence and collected load.
    pub fn new(stops: Vec<usize>, load: f64) -> Self {
        Self { stops, load }
    }

    /// Full stop sequence, depot included at both ends.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Stops between the two depot visits.
    pub fn customers(&self) -> &[usize] {
        if self.stops.len() < 2 {
            return &[];
        }
        &self.stops[1..self.stops.len() - 1]
    }

    /// Depot the trip starts from.
    pub fn depot(&self) -> Option<usize> {
        self.stops.first().copied()
    }

    /// Total load collected on this trip.
    pub fn load(&self) -> f64 {
        self.load
    }

    /// Consumes the sub-tour, returning its stop sequence.
    pub fn into_stops(self) -> Vec<usize> {
        self.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customers_excludes_depot() {
        let t = SubTour::new(vec![4, 1, 2, 4], 3.0);
        assert_eq!(t.customers(), &[1, 2]);
        assert_eq!(t.load(), 3.0);
    }

    #[test]
    fn test_degenerate() {
        let t = SubTour::new(vec![4], 0.0);
        assert!(t.customers().is_empty());
        assert_eq!(t.depot(), Some(4));
    }
}
