use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodalPlane {
    pub probability: f64,
    pub strike: f64,
    pub dip: f64,
    pub rake: f64,
}

impl NodalPlane {
    pub fn new(probability: f64, strike: f64, dip: f64, rake: f64) -> Self {
        Self {
            probability,
            strike,
            dip,
            rake,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HypocentralDepth {
    pub probability: f64,
    pub depth: f64,
}

impl HypocentralDepth {
    pub fn new(probability: f64, depth: f64) -> Self {
        Self { probability, depth }
    }
}

/// Entry of a discrete weighted distribution.
pub trait Weighted {
    fn probability(&self) -> f64;
}

impl Weighted for NodalPlane {
    fn probability(&self) -> f64 {
        self.probability
    }
}

impl Weighted for HypocentralDepth {
    fn probability(&self) -> f64 {
        self.probability
    }
}

pub fn total_weight<T: Weighted>(entries: &[T]) -> f64 {
    entries.iter().map(Weighted::probability).sum()
}

/// `true` for an empty distribution or one whose weights sum to 1 within `tolerance`.
pub fn is_normalized<T: Weighted>(entries: &[T], tolerance: f64) -> bool {
    entries.is_empty() || (total_weight(entries) - 1.0).abs() <= tolerance
}
