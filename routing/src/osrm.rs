use anyhow::Result;
use geojson::Geometry;
use serde::Deserialize;

use model::{Coordinate, Route, RouteMetadata, Step};

use crate::{instructions, RouteResult};

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: Geometry,
    distance: f64,
    duration: f64,
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Deserialize)]
struct Leg {
    #[serde(default)]
    steps: Vec<OsrmStep>,
}

#[derive(Deserialize)]
struct OsrmStep {
    #[serde(default)]
    name: String,
    distance: f64,
    maneuver: Maneuver,
}

/// The raw maneuver of one step, as the router reports it.
#[derive(Clone, Debug, Deserialize)]
pub struct Maneuver {
    #[serde(rename = "type")]
    pub kind: String,
    pub modifier: Option<String>,
    pub exit: Option<u32>,
}

/// Parses an OSRM route response (requested with `geometries=geojson` and
/// `steps=true`) into a route and its metadata. None if the service found no
/// route at all.
pub fn parse_route_response(body: &str) -> Result<Option<RouteResult>> {
    let response: Response = serde_json::from_str(body)?;
    if response.routes.len() > 1 {
        info!("Router returned {} routes, using the first", response.routes.len());
    }
    let osrm_route = match response.routes.into_iter().next() {
        Some(route) => route,
        None => return Ok(None),
    };

    // OSRM sends GeoJSON [lon, lat] pairs
    let line = match osrm_route.geometry.value {
        geojson::Value::LineString(line) => line,
        _ => bail!("Route geometry isn't a LineString"),
    };
    let mut points = Vec::with_capacity(line.len());
    for position in line {
        if position.len() < 2 {
            bail!("Malformed position in route geometry");
        }
        points.push(Coordinate::new(position[1], position[0]));
    }
    let route = Route::new(points)?;

    let mut steps = Vec::new();
    for leg in osrm_route.legs {
        for step in leg.steps {
            let road_name = if step.name.is_empty() {
                None
            } else {
                Some(step.name)
            };
            steps.push(Step {
                instruction: instructions::describe_maneuver(&step.maneuver, road_name.as_deref()),
                distance_meters: step.distance,
                road_name,
            });
        }
    }

    Ok(Some(RouteResult {
        route,
        metadata: RouteMetadata {
            distance_meters: Some(osrm_route.distance),
            duration_seconds: Some(osrm_route.duration),
            steps,
        },
    }))
}
