//! way-router core
//!
//! Shortest routes over a graph of polylines ("ways") joined at shared
//! points, chained across an ordered list of waypoints.

pub mod error;
pub mod geometry;
pub mod way;
pub mod graph;
pub mod traits;
pub mod enumerate;
pub mod shortest;
pub mod router;

pub use error::RouteError;
pub use geometry::Point;
pub use graph::Graph;
pub use router::{resolve_leg, resolve_route, Leg, LegOutcome, RouteOptions, Router, SearchStrategy};
pub use way::Way;
