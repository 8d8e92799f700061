//! Leg and route resolution.
//!
//! Raw waypoints are snapped onto the graph, each consecutive pair is routed
//! independently and the legs are concatenated. Legs are never re-optimised
//! against each other, so a multi-stop route is the sum of its per-leg best
//! routes rather than a global optimum.

use rayon::prelude::*;
use tracing::debug;

use crate::enumerate::PathEnumerator;
use crate::error::{validate_waypoints, RouteError};
use crate::geometry::{distance, route_length, Point};
use crate::graph::Graph;
use crate::shortest::UniformCostSearch;
use crate::traits::LegSearch;

/// Which backend connects the snapped ends of a leg.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Recursive route enumeration with candidate pruning.
    #[default]
    Enumerate,
    /// Uniform-cost search; always a minimum-length route along the ways.
    ShortestPath,
}

/// Options controlling how legs are searched and scheduled.
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    pub strategy: SearchStrategy,
    /// Resolve the legs of a multi-waypoint route on the rayon pool.
    /// Output is identical to the sequential path.
    pub parallel_legs: bool,
}

/// How a leg was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegOutcome {
    /// Both ends snapped to the same graph point: a direct segment.
    Degenerate,
    /// A route through the graph was found.
    Routed,
    /// No route between the snapped ends: straight segments to and from them.
    Disconnected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub points: Vec<Point>,
    pub outcome: LegOutcome,
}

impl Leg {
    pub fn length(&self) -> f64 {
        route_length(&self.points)
    }
}

/// Routes waypoints over a borrowed graph.
#[derive(Debug, Clone)]
pub struct Router<'g> {
    graph: &'g Graph,
    options: RouteOptions,
}

impl<'g> Router<'g> {
    pub fn new(graph: &'g Graph, options: RouteOptions) -> Self {
        Self { graph, options }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn options(&self) -> &RouteOptions {
        &self.options
    }

    fn backend(&self) -> &'static dyn LegSearch {
        match self.options.strategy {
            SearchStrategy::Enumerate => &PathEnumerator,
            SearchStrategy::ShortestPath => &UniformCostSearch,
        }
    }

    /// Resolves one leg between two raw points.
    ///
    /// The returned points start at `raw_start` and end at `raw_end`; in
    /// between come the snapped graph route, or the snapped anchors alone when
    /// the graph does not connect them.
    pub fn leg(&self, raw_start: Point, raw_end: Point) -> Leg {
        let start = self.graph.nearest_point(raw_start);
        let end = self.graph.nearest_point(raw_end);

        if distance(start, end) == 0.0 {
            debug!(?raw_start, ?raw_end, "degenerate leg, anchors coincide");
            return Leg {
                points: vec![raw_start, raw_end],
                outcome: LegOutcome::Degenerate,
            };
        }

        match self.backend().search(self.graph, start, end) {
            Some(route) => {
                debug!(
                    ?start,
                    ?end,
                    points = route.len(),
                    length = route_length(&route),
                    "leg routed"
                );
                let mut points = Vec::with_capacity(route.len() + 2);
                points.push(raw_start);
                points.extend(route);
                points.push(raw_end);
                Leg {
                    points,
                    outcome: LegOutcome::Routed,
                }
            }
            None => {
                debug!(?start, ?end, "no route between anchors, using fallback leg");
                Leg {
                    points: vec![raw_start, start, end, raw_end],
                    outcome: LegOutcome::Disconnected,
                }
            }
        }
    }

    /// Resolves every consecutive waypoint pair and concatenates the legs.
    ///
    /// Fewer than two waypoints give an empty route.
    pub fn legs(&self, waypoints: &[Point]) -> Vec<Leg> {
        if waypoints.len() < 2 {
            return Vec::new();
        }

        if self.options.parallel_legs {
            waypoints
                .par_windows(2)
                .map(|pair| self.leg(pair[0], pair[1]))
                .collect()
        } else {
            waypoints
                .windows(2)
                .map(|pair| self.leg(pair[0], pair[1]))
                .collect()
        }
    }

    pub fn route(&self, waypoints: &[Point]) -> Vec<Point> {
        self.legs(waypoints)
            .into_iter()
            .flat_map(|leg| leg.points)
            .collect()
    }

    /// [`Router::route`] after rejecting non-finite waypoints.
    pub fn checked_route(&self, waypoints: &[Point]) -> Result<Vec<Point>, RouteError> {
        validate_waypoints(waypoints)?;
        Ok(self.route(waypoints))
    }
}

/// Resolves one leg with the default options.
pub fn resolve_leg(graph: &Graph, start: Point, end: Point) -> Vec<Point> {
    Router::new(graph, RouteOptions::default()).leg(start, end).points
}

/// Resolves a waypoint route with the default options.
pub fn resolve_route(graph: &Graph, waypoints: &[Point]) -> Vec<Point> {
    Router::new(graph, RouteOptions::default()).route(waypoints)
}
