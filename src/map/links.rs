// Map Links
//
// External map links for sharing a position.

use crate::types::Position;

/// Google Maps search link for a position.
///
/// Coordinates keep their full precision here, unlike status lines and
/// alert text which round to six decimals.
pub fn search_link(position: &Position) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={},{}",
        position.lat, position.lng
    )
}
