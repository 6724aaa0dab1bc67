// Watch Options
//
// Geolocation watch parameters handed to the page at startup.

use serde::{Deserialize, Serialize};

/// Options for the page's position watch.
///
/// Defaults ask for the best fix available: high accuracy, no cached
/// positions, and a ten second timeout per attempt.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WatchOptions {
    pub enable_high_accuracy: bool,
    /// Maximum acceptable age of a cached fix, in milliseconds
    pub maximum_age: u32,
    /// How long a single fix attempt may take, in milliseconds
    pub timeout: u32,
}

impl Default for WatchOptions {
    fn default() -> Self {
        WatchOptions {
            enable_high_accuracy: true,
            maximum_age: 0,
            timeout: 10_000,
        }
    }
}
