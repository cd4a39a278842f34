#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod geocoder;
mod instructions;
mod nominatim;
mod osrm;
mod router;

pub use geocoder::{Geocoder, Place};
pub use instructions::describe_maneuver;
pub use nominatim::parse_search_results;
pub use osrm::{parse_route_response, Maneuver};
pub use router::{RouteResult, Router};
