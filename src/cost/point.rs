//! Input coordinates.

/// A labelled point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Identifier as given in the input file.
    pub id: i64,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: i64, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
