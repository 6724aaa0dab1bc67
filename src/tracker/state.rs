// Tracker State
//
// Events flowing from the page into the position watcher, and the
// status text derived from them.

use crate::types::Position;
use serde::{Deserialize, Serialize};

/// Why no position fix is available
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum GeoFailure {
    /// The platform supports geolocation but could not produce a fix
    Unavailable,
    /// The platform has no geolocation capability at all
    Unsupported,
}

impl GeoFailure {
    /// The status line shown to the user for this failure
    pub fn status_text(&self) -> &'static str {
        match self {
            GeoFailure::Unavailable => "Unable to fetch location",
            GeoFailure::Unsupported => "Geolocation not supported",
        }
    }
}

/// Events consumed by the position watcher thread
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerEvent {
    /// A new position fix arrived
    Fix(Position),
    /// The platform reported a failure instead of a fix
    Failed(GeoFailure),
    /// Stop the watcher thread
    Shutdown,
}

/// Status line for a successful fix, six decimal places each axis
pub fn format_status_line(position: &Position) -> String {
    format!(
        "Latitude: {:.6} | Longitude: {:.6}",
        position.lat, position.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_uses_six_decimals() {
        let position = Position {
            lat: 12.3456789,
            lng: -98.7,
        };

        assert_eq!(
            format_status_line(&position),
            "Latitude: 12.345679 | Longitude: -98.700000"
        );
    }

    #[test]
    fn test_failure_status_texts() {
        assert_eq!(GeoFailure::Unavailable.status_text(), "Unable to fetch location");
        assert_eq!(GeoFailure::Unsupported.status_text(), "Geolocation not supported");
    }

    #[test]
    fn test_failure_deserializes_from_lowercase() {
        let failure: GeoFailure = serde_json::from_str("\"unavailable\"").unwrap();
        assert_eq!(failure, GeoFailure::Unavailable);

        let failure: GeoFailure = serde_json::from_str("\"unsupported\"").unwrap();
        assert_eq!(failure, GeoFailure::Unsupported);
    }
}
