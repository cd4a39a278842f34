use crate::osrm::Maneuver;

/// Turns a raw router maneuver into display text, phrased like the big map
/// sites do.
pub fn describe_maneuver(maneuver: &Maneuver, road_name: Option<&str>) -> String {
    match maneuver.kind.as_str() {
        "depart" => format!(
            "Drive {} on {}",
            maneuver.modifier.as_deref().unwrap_or("straight"),
            road_name.unwrap_or("the road")
        ),
        "turn" => {
            let mut out = "Turn".to_string();
            if let Some(modifier) = &maneuver.modifier {
                out.push(' ');
                out.push_str(modifier);
            }
            if let Some(name) = road_name {
                out.push_str(" onto ");
                out.push_str(name);
            }
            out
        }
        "roundabout" => {
            let mut out = "Enter the roundabout and take ".to_string();
            match maneuver.exit {
                Some(exit) => out.push_str(&format!("exit {exit}")),
                None => out.push_str("the exit"),
            }
            if let Some(name) = road_name {
                out.push_str(" onto ");
                out.push_str(name);
            }
            out
        }
        "arrive" => "You have arrived at your destination".to_string(),
        "continue" => {
            let mut out = "Continue".to_string();
            if let Some(modifier) = &maneuver.modifier {
                out.push(' ');
                out.push_str(modifier);
            }
            if let Some(name) = road_name {
                out.push_str(" on ");
                out.push_str(name);
            }
            out
        }
        // OSRM has more maneuver types (merge, fork, ...) than we phrase
        // specially
        kind => {
            let mut out = if kind.is_empty() {
                "Proceed".to_string()
            } else {
                kind.to_string()
            };
            if let Some(name) = road_name {
                out.push_str(" on ");
                out.push_str(name);
            }
            out
        }
    }
}
