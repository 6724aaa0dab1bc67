// Tracker Module - Live position tracking
//
// This module handles the position watcher thread and its events

pub mod options;
pub mod state;
pub mod watcher;

// Core types
pub use state::{format_status_line, GeoFailure, TrackerEvent};

// Watcher lifecycle
pub use watcher::{start_position_watcher, TrackerHandle};

// Page-facing options
pub use options::WatchOptions;
