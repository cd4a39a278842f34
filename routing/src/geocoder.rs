use anyhow::Result;
use serde::{Deserialize, Serialize};

use model::Coordinate;

/// A geocoded location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub position: Coordinate,
    pub display_name: String,
}

/// Maps free-text queries to places, backed by whatever service the host
/// wires up. The engine never calls this itself; routes arrive fully formed.
pub trait Geocoder {
    /// The best match, or None if the query doesn't resolve anywhere.
    fn geocode(&self, query: &str) -> Result<Option<Place>>;

    /// Up to `limit` candidates for autocomplete, best first.
    fn suggestions(&self, query: &str, limit: usize) -> Result<Vec<Place>>;
}
