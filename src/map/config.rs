// Map Configuration
//
// Tile source and initial view settings handed to the page. The page
// builds the map lazily on the first fix, so these stay constant for
// the lifetime of the window.

use serde::Serialize;

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";
pub const INITIAL_ZOOM: u8 = 15;
pub const MARKER_POPUP_TEXT: &str = "You are here";

/// Map settings serialized for the page
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub tile_url_template: String,
    pub tile_attribution: String,
    pub initial_zoom: u8,
    pub marker_popup_text: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            tile_url_template: TILE_URL_TEMPLATE.to_string(),
            tile_attribution: TILE_ATTRIBUTION.to_string(),
            initial_zoom: INITIAL_ZOOM,
            marker_popup_text: MARKER_POPUP_TEXT.to_string(),
        }
    }
}
