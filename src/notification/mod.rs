// Notification Module - User notification management
//
// This module handles all notification functionality for SOS Beacon
// using a singleton pattern for AppHandle management

pub mod sender;

// Re-export public API
pub use sender::{init, send_alert_dispatched_notification};
