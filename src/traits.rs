//! Search backend interface.
//!
//! The router snaps waypoints onto the graph and handles degenerate and
//! disconnected legs itself; a backend only has to connect two graph points.

use crate::geometry::Point;
use crate::graph::Graph;

/// Finds a route between two distinct points of a way graph.
pub trait LegSearch {
    /// Returns the chosen route from `start` to `end`, both ends included, or
    /// `None` when no route exists.
    ///
    /// `start` and `end` are points present in `graph` and differ.
    fn search(&self, graph: &Graph, start: Point, end: Point) -> Option<Vec<Point>>;
}
