use anyhow::Result;
use serde::Deserialize;

use model::Coordinate;

use crate::Place;

/// One record from a Nominatim search response. Coordinates arrive as
/// strings on the wire.
#[derive(Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

/// Parses a Nominatim search response body into ordered candidates. An empty
/// array is a valid "nothing found" response.
pub fn parse_search_results(body: &str) -> Result<Vec<Place>> {
    let results: Vec<SearchResult> = serde_json::from_str(body)?;
    let mut places = Vec::with_capacity(results.len());
    for result in results {
        let lat: f64 = result.lat.parse()?;
        let lon: f64 = result.lon.parse()?;
        places.push(Place {
            position: Coordinate::new(lat, lon),
            display_name: result.display_name,
        });
    }
    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_results() {
        let body = r#"[
            {"lat": "17.3850440", "lon": "78.4866710", "display_name": "Hyderabad, Telangana, India"},
            {"lat": "17.4399295", "lon": "78.4982741", "display_name": "Secunderabad, Telangana, India"}
        ]"#;
        let places = parse_search_results(body).unwrap();
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].display_name, "Hyderabad, Telangana, India");
        assert!((places[0].position.lat - 17.385044).abs() < 1e-6);
        assert!((places[0].position.lon - 78.486671).abs() < 1e-6);
    }

    #[test]
    fn test_parse_empty_response() {
        assert_eq!(parse_search_results("[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_garbage_coordinates() {
        let body = r#"[{"lat": "not a number", "lon": "0", "display_name": "x"}]"#;
        assert!(parse_search_results(body).is_err());
    }
}
