//! Input validation for the routing boundary.
//!
//! The searches themselves never fail: every graph and pair of points yields
//! a route. Only caller contract violations are reported, and only by the
//! checked entry points.

use crate::geometry::Point;

/// Errors raised when validating routing input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// Non-finite coordinates or structurally empty input
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Rejects waypoints with NaN or infinite coordinates.
pub fn validate_waypoints(waypoints: &[Point]) -> Result<(), RouteError> {
    for (i, point) in waypoints.iter().enumerate() {
        check_point(*point, || format!("waypoint {i}"))?;
    }
    Ok(())
}

pub(crate) fn check_point(point: Point, context: impl FnOnce() -> String) -> Result<(), RouteError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(RouteError::InvalidInput(format!(
            "{} has non-finite coordinates ({}, {})",
            context(),
            point.x,
            point.y
        )))
    }
}
