#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub mod describe;
mod geodesy;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use self::geodesy::{cumulative_lengths, distance, sample_at_fraction};

/// A position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// The path geometry a router produced, immutable for the lifetime of a
/// playback session. Consecutive points may be coincident; zero-length
/// segments are legal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    points: Vec<Coordinate>,
}

impl Route {
    pub fn new(points: Vec<Coordinate>) -> Result<Self> {
        if points.is_empty() {
            bail!("Route needs at least 1 point");
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn first_point(&self) -> Coordinate {
        self.points[0]
    }

    pub fn last_point(&self) -> Coordinate {
        *self.points.last().unwrap()
    }
}

/// One maneuver from the router. Display only; never used for animation
/// timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub instruction: String,
    pub distance_meters: f64,
    pub road_name: Option<String>,
}

/// Companion to a Route. `distance_meters` is authoritative for pacing when
/// present; `duration_seconds` is informational only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMetadata {
    pub distance_meters: Option<f64>,
    pub duration_seconds: Option<f64>,
    pub steps: Vec<Step>,
}

/// Vehicle category pacing the simulated animation. Not a real-world ETA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Car,
    Bike,
    Walk,
}

impl TravelMode {
    /// Average speed in m/s used to scale the animation duration.
    pub fn reference_speed(self) -> f64 {
        match self {
            TravelMode::Car => 25.0,
            TravelMode::Bike => 8.0,
            TravelMode::Walk => 1.5,
        }
    }

    /// Unrecognized modes fall back to car.
    pub fn parse(value: &str) -> Self {
        match value {
            "car" => TravelMode::Car,
            "bike" => TravelMode::Bike,
            "walk" => TravelMode::Walk,
            x => {
                warn!("Unknown travel mode {x}, assuming car");
                TravelMode::Car
            }
        }
    }
}

/// One observation of the simulated vehicle, reported once per animation
/// frame and once on reset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub position: Coordinate,
    pub elapsed_seconds: f64,
    pub distance_meters: f64,
    pub speed_meters_per_second: f64,
}

impl TelemetrySample {
    pub fn speed_kmh(&self) -> f64 {
        self.speed_meters_per_second * 3.6
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_meters / 1000.0
    }
}
