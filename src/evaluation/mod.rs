//! Tour distance and load evaluation.

mod evaluator;

pub use evaluator::{tour_distance, TourEvaluator, TourMetrics};
