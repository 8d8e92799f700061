//! Ways: the polylines a way graph is made of.
//!
//! A way is read-only input to routing. Consecutive points of a way are
//! connected; two ways are connected wherever they share a point.

use serde::{Deserialize, Serialize};

use crate::geometry::{route_length, Point};

/// An ordered polyline of at least one point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Way {
    points: Vec<Point>,
}

impl Way {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns a reference to the way's points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the way and returns the owned points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn length(&self) -> f64 {
        route_length(&self.points)
    }

    /// Whether `point` occurs anywhere in this way.
    pub fn intersects_at(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Position of the first occurrence of `point`.
    pub fn position_of(&self, point: Point) -> Option<usize> {
        self.points.iter().position(|p| *p == point)
    }

    /// Splits the way around the first occurrence of `point`.
    ///
    /// Returns `(former, later)`: the points strictly before and strictly
    /// after that occurrence, both in the way's own order. When `point` does
    /// not occur, `former` is the whole way and `later` is empty.
    ///
    /// `former` runs away from the split point; reverse it before walking
    /// backwards from there.
    pub fn split(&self, point: Point) -> (&[Point], &[Point]) {
        match self.position_of(point) {
            Some(position) => (&self.points[..position], &self.points[position + 1..]),
            None => (&self.points[..], &[]),
        }
    }
}

impl From<Vec<Point>> for Way {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn way(coords: &[(f64, f64)]) -> Way {
        Way::new(coords.iter().copied().map(Point::from).collect())
    }

    #[test]
    fn test_new_and_points() {
        let w = way(&[(0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(w.points(), &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert_eq!(w.clone().into_points().len(), 2);
    }

    #[test]
    fn test_intersects_at() {
        let w = way(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert!(w.intersects_at(Point::new(10.0, 0.0)));
        assert!(!w.intersects_at(Point::new(5.0, 0.0)));
    }

    #[test]
    fn test_split_middle() {
        let w = way(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let (former, later) = w.split(Point::new(2.0, 0.0));
        assert_eq!(former, &[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
        assert_eq!(later, &[Point::new(3.0, 0.0)]);
    }

    #[test]
    fn test_split_endpoints() {
        let w = way(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);

        let (former, later) = w.split(Point::new(0.0, 0.0));
        assert!(former.is_empty());
        assert_eq!(later.len(), 2);

        let (former, later) = w.split(Point::new(2.0, 0.0));
        assert_eq!(former.len(), 2);
        assert!(later.is_empty());
    }

    #[test]
    fn test_split_missing_point() {
        let w = way(&[(0.0, 0.0), (1.0, 0.0)]);
        let (former, later) = w.split(Point::new(7.0, 7.0));
        assert_eq!(former, w.points());
        assert!(later.is_empty());
    }

    #[test]
    fn test_split_uses_first_occurrence() {
        // Closed loop: the start point appears at both ends.
        let w = way(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        let (former, later) = w.split(Point::new(0.0, 0.0));
        assert!(former.is_empty());
        assert_eq!(later.len(), 3);
        assert_eq!(later[2], Point::new(0.0, 0.0));
    }

    #[test]
    fn test_length() {
        let w = way(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        assert_eq!(w.length(), 20.0);
    }

    proptest! {
        #[test]
        fn split_reassembles_way(
            coords in prop::collection::vec((-50i32..50, -50i32..50), 1..12),
            pick in any::<prop::sample::Index>()
        ) {
            let points: Vec<Point> = coords
                .iter()
                .map(|&(x, y)| Point::new(x as f64, y as f64))
                .collect();
            let w = Way::new(points.clone());
            let p = points[pick.index(points.len())];

            let (former, later) = w.split(p);
            let mut rebuilt = former.to_vec();
            rebuilt.push(p);
            rebuilt.extend_from_slice(later);

            prop_assert_eq!(rebuilt, points);
            prop_assert!(!former.contains(&p));
        }
    }
}
