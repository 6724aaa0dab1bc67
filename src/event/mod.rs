// Event Module - Centralized Tauri event management
//
// This module handles all Tauri event emission using singleton pattern

pub mod emitter;

// Re-export public API
pub use emitter::{
    init,
    emit_contacts_changed,
    emit_position_updated,
    emit_position_unavailable,
};
