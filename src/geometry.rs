//! Planar geometry primitives for way graphs.
//!
//! Distances are plain Euclidean distances in map units. Point equality is
//! exact coordinate equality: two ways are connected only where they share a
//! point with identical coordinates.

use serde::{Deserialize, Serialize};

/// A point in map coordinates.
///
/// Coordinates must be finite; see [`crate::error::validate_waypoints`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Hashable identity of this point, consistent with `==`.
    pub(crate) fn key(&self) -> PointKey {
        PointKey(fold_zero(self.x).to_bits(), fold_zero(self.y).to_bits())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Bit-pattern key for a [`Point`].
///
/// `-0.0 == 0.0` under float equality, so the sign of zero is folded away
/// before taking the bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PointKey(u64, u64);

fn fold_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Total length of a polyline: the sum of its consecutive segment lengths.
///
/// Sequences of zero or one point have length `0`.
pub fn route_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance(pair[0], pair[1]))
        .sum()
}
