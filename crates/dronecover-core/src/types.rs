//! Shared spatial types.

use serde::{Deserialize, Serialize};

/// Side length of the square field, shared by both axes.
pub const FIELD_EXTENT: f64 = 100.0;

/// A position in the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Whether both components lie in `[0, FIELD_EXTENT)`.
    pub fn in_field(&self) -> bool {
        (0.0..FIELD_EXTENT).contains(&self.x) && (0.0..FIELD_EXTENT).contains(&self.y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn field_bounds_are_half_open() {
        assert!(Coordinate::new(0.0, 99.999).in_field());
        assert!(!Coordinate::new(FIELD_EXTENT, 5.0).in_field());
        assert!(!Coordinate::new(5.0, -0.1).in_field());
    }
}
