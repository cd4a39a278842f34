use crate::{Coordinate, Route};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two positions, in meters.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Floating error can push h just outside [0, 1] for near-identical or
    // antipodal points, and asin would return NaN
    let h = h.clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().asin()
}

/// Running sum of per-segment distances. Same length as the route; first
/// entry is 0.
pub fn cumulative_lengths(route: &Route) -> Vec<f64> {
    let mut dists = Vec::with_capacity(route.points().len());
    dists.push(0.0);
    let mut cum = 0.0;
    for pair in route.points().windows(2) {
        cum += distance(pair[0], pair[1]);
        dists.push(cum);
    }
    dists
}

/// Position at fraction `fraction` of the route's total arc length, linearly
/// interpolated within the bracketing segment. Clamps to the endpoints; never
/// extrapolates past the final vertex.
///
/// `cumulative` must be the table from [`cumulative_lengths`] for the same
/// route.
pub fn sample_at_fraction(route: &Route, cumulative: &[f64], fraction: f64) -> Coordinate {
    let points = route.points();
    if fraction <= 0.0 {
        return points[0];
    }
    if fraction >= 1.0 {
        return *points.last().unwrap();
    }

    let total = *cumulative.last().unwrap();
    let target = fraction * total;
    // TODO Binary search if routes ever get long enough to matter
    for i in 1..cumulative.len() {
        if target <= cumulative[i] {
            let a = points[i - 1];
            let b = points[i];
            let span = cumulative[i] - cumulative[i - 1];
            // A zero-length segment is a complete jump to its far endpoint
            let t = if span == 0.0 {
                1.0
            } else {
                (target - cumulative[i - 1]) / span
            };
            return Coordinate::new(a.lat + (b.lat - a.lat) * t, a.lon + (b.lon - a.lon) * t);
        }
    }
    *points.last().unwrap()
}
