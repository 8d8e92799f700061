//! Recursive route enumeration (the default backend).
//!
//! Starting at the leg's start point, the search follows every way through
//! the current point in both directions. Each point walked along a way is
//! appended to the route and also becomes a new branching point for the other
//! ways crossing it. Reaching the destination records a candidate; the
//! shortest candidate wins.
//!
//! Pruning only compares against candidates already found, so the search can
//! still visit an exponential number of simple paths on dense, cyclic meshes.
//! Sparse road-like graphs are fine.

use tracing::trace;

use crate::geometry::{route_length, Point};
use crate::graph::Graph;
use crate::traits::LegSearch;

/// A complete route from the leg start to the destination.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub points: Vec<Point>,
    pub length: f64,
}

/// Backend that enumerates candidate routes and picks the shortest.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathEnumerator;

impl LegSearch for PathEnumerator {
    fn search(&self, graph: &Graph, start: Point, end: Point) -> Option<Vec<Point>> {
        shortest_candidate(enumerate_candidates(graph, start, end)).map(|c| c.points)
    }
}

/// Collects every candidate route from `start` to `end`, in discovery order.
pub fn enumerate_candidates(graph: &Graph, start: Point, end: Point) -> Vec<Candidate> {
    let mut search = Enumeration {
        graph,
        destination: end,
        pool: Vec::new(),
    };
    search.explore(None, vec![start]);
    search.pool
}

/// The minimum-length candidate; the earliest found wins a tie.
pub fn shortest_candidate(pool: Vec<Candidate>) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for candidate in pool {
        match &best {
            Some(current) if candidate.length >= current.length => {}
            _ => best = Some(candidate),
        }
    }
    best
}

struct Enumeration<'g> {
    graph: &'g Graph,
    destination: Point,
    pool: Vec<Candidate>,
}

impl Enumeration<'_> {
    /// Branch into every way through the last point of `route`, except the
    /// way we arrived on.
    fn explore(&mut self, arrived_on: Option<usize>, route: Vec<Point>) {
        let Some(&entry) = route.last() else {
            return;
        };

        let graph = self.graph;
        for occurrence in graph.ways_through(entry) {
            if Some(occurrence.way) == arrived_on {
                continue;
            }
            let (later, former_reversed) = graph.directions(occurrence);
            self.advance(occurrence.way, &route, later);
            self.advance(occurrence.way, &route, &former_reversed);
        }
    }

    /// Walk `frontier` point by point from the end of `route`.
    fn advance(&mut self, way: usize, route: &[Point], frontier: &[Point]) {
        if frontier.is_empty() {
            return;
        }

        let length_so_far = route_length(route);
        if self.pool.iter().any(|c| c.length < length_so_far) {
            trace!(way, length_so_far, "pruned branch longer than a known route");
            return;
        }

        let mut route = route.to_vec();
        for &point in frontier {
            if point == self.destination {
                route.push(point);
                let length = route_length(&route);
                self.pool.push(Candidate { points: route, length });
                return;
            }

            if route.contains(&point) {
                continue;
            }

            route.push(point);
            self.explore(Some(way), route.clone());
        }
    }
}
