use anyhow::Result;

use model::{Coordinate, Route, RouteMetadata};

/// A computed route and its display metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteResult {
    pub route: Route,
    pub metadata: RouteMetadata,
}

/// Connects an ordered list of waypoints into a drivable path. Implemented
/// outside this crate, against whatever routing service the host uses.
pub trait Router {
    /// None if the service can't connect the waypoints. Fewer than 2
    /// waypoints is a caller error.
    fn route(&self, waypoints: &[Coordinate]) -> Result<Option<RouteResult>>;
}
