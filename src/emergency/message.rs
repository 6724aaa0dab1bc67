// Alert Message Builder
//
// Builds the emergency text and the sms: links that carry it.

use crate::map::search_link;
use crate::types::Position;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const ALERT_HEADER: &str = "🚨 EMERGENCY 🚨";

// Escape everything except the characters JavaScript's
// encodeURIComponent leaves alone: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use inside a URI component
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// The full alert text for a position
pub fn build_alert_message(position: &Position) -> String {
    format!(
        "{}\nI need help. My location: {}\nLatitude: {:.6}, Longitude: {:.6}",
        ALERT_HEADER,
        search_link(position),
        position.lat,
        position.lng
    )
}

/// Strip whitespace from a number so it fits in an sms: target
pub fn format_number_for_sms(number: &str) -> String {
    number.split_whitespace().collect()
}

/// An sms: link that opens a draft to `number` prefilled with `message`
pub fn sms_link(number: &str, message: &str) -> String {
    format!(
        "sms:{}?body={}",
        encode_component(&format_number_for_sms(number)),
        encode_component(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_carries_header_link_and_coordinates() {
        let position = Position {
            lat: 12.345678,
            lng: 98.765432,
        };
        let message = build_alert_message(&position);

        assert!(message.starts_with("🚨 EMERGENCY 🚨\n"));
        assert!(message.contains("https://www.google.com/maps/search/?api=1&query=12.345678,98.765432"));
        assert!(message.ends_with("Latitude: 12.345678, Longitude: 98.765432"));
    }

    #[test]
    fn test_message_rounds_to_six_decimals() {
        let position = Position {
            lat: 1.23456789,
            lng: -2.0,
        };

        assert!(build_alert_message(&position).contains("Latitude: 1.234568, Longitude: -2.000000"));
    }

    #[test]
    fn test_encode_component_matches_javascript() {
        // Unreserved marks survive, everything else is escaped
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("hi there"), "hi%20there");
        assert_eq!(encode_component("a\nb"), "a%0Ab");
        assert_eq!(encode_component("+49"), "%2B49");
        assert_eq!(encode_component("x&y=z"), "x%26y%3Dz");
    }

    #[test]
    fn test_sms_link_strips_whitespace_from_number() {
        assert_eq!(sms_link("123 456", "hi there"), "sms:123456?body=hi%20there");
        assert_eq!(sms_link(" 12\t34 ", "x"), "sms:1234?body=x");
    }

    #[test]
    fn test_sms_link_escapes_plus_and_newlines() {
        let link = sms_link("+49 171", "line one\nline two");

        assert!(link.starts_with("sms:%2B49171?body="));
        assert!(link.contains("%0A"));
    }
}
