//! Test fixtures for way-router.
//!
//! Provides small hand-drawn maps in the loader's JSON shape and helpers to
//! build ways from coordinate lists.

#![allow(dead_code)]

pub mod town;

pub use town::*;

use way_router::{Point, Way};

pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub fn way(coords: &[(f64, f64)]) -> Way {
    Way::new(coords.iter().copied().map(Point::from).collect())
}

pub fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}
