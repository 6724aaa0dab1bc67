// Event Emitter Module
//
// Centralized Tauri event emission using singleton pattern
// - Contact list changes (add, delete)
// - Position updates and failures
//

use crate::contacts::ContactListUpdate;
use crate::tracker::{format_status_line, GeoFailure};
use crate::types::Position;
use once_cell::sync::OnceCell;
use serde::Serialize;
use tauri::Manager;

/// Global AppHandle singleton for event emission
static APP_HANDLE: OnceCell<tauri::AppHandle> = OnceCell::new();

/// Initialize the event emitter with AppHandle
/// This should be called once during app setup
pub fn init(app_handle: tauri::AppHandle) {
    if APP_HANDLE.set(app_handle).is_err() {
        eprintln!("[EventEmitter] Warning: AppHandle already initialized");
    }
    println!("[EventEmitter] ✅ Event emitter initialized");
}

/// Get the AppHandle (internal helper)
fn get_handle() -> Option<&'static tauri::AppHandle> {
    APP_HANDLE.get()
}

/// Payload for position-updated events
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    pub position: Position,
    pub status_line: String,
}

/// Payload for position-unavailable events
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PositionFailure {
    pub failure: GeoFailure,
    pub status_line: String,
}

/// Emit contacts-changed event to frontend
pub fn emit_contacts_changed(update: &ContactListUpdate) {
    if let Some(handle) = get_handle() {
        if let Err(e) = handle.emit_all("contacts-changed", update) {
            eprintln!("[EventEmitter] Failed to emit contacts-changed: {}", e);
        } else {
            println!(
                "[EventEmitter] 📡 Emitted contacts-changed ({} contact(s))",
                update.count
            );
        }
    } else {
        eprintln!("[EventEmitter] ⚠️ Cannot emit contacts-changed: AppHandle not initialized");
    }
}

/// Emit position-updated event to frontend
pub fn emit_position_updated(position: &Position) {
    if let Some(handle) = get_handle() {
        let payload = PositionUpdate {
            position: *position,
            status_line: format_status_line(position),
        };
        if let Err(e) = handle.emit_all("position-updated", &payload) {
            eprintln!("[EventEmitter] Failed to emit position-updated: {}", e);
        }
    } else {
        eprintln!("[EventEmitter] ⚠️ Cannot emit position-updated: AppHandle not initialized");
    }
}

/// Emit position-unavailable event to frontend
pub fn emit_position_unavailable(failure: GeoFailure) {
    if let Some(handle) = get_handle() {
        let payload = PositionFailure {
            failure,
            status_line: failure.status_text().to_string(),
        };
        if let Err(e) = handle.emit_all("position-unavailable", &payload) {
            eprintln!("[EventEmitter] Failed to emit position-unavailable: {}", e);
        }
    } else {
        eprintln!("[EventEmitter] ⚠️ Cannot emit position-unavailable: AppHandle not initialized");
    }
}
