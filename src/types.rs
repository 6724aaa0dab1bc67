// SOS Beacon Type Definitions
//
// Shared data structures and type aliases used throughout the application.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// An emergency contact the user may alert
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Contact {
    pub name: String,
    pub number: String,
}

/// One geolocation fix reported by the page
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

/// Last known position, shared between the watcher thread and commands.
/// `None` until the first fix arrives.
pub type SharedPosition = Arc<Mutex<Option<Position>>>;
