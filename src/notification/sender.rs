// Notification Module
//
// Handles all user notifications for SOS Beacon using singleton pattern
// - Alert dispatch confirmations
//

use once_cell::sync::OnceCell;
use tauri::api::notification::Notification;

/// Global AppHandle singleton for notifications
static APP_HANDLE: OnceCell<tauri::AppHandle> = OnceCell::new();

/// Initialize the notification system with AppHandle
/// This should be called once during app setup
pub fn init(app_handle: tauri::AppHandle) {
    if APP_HANDLE.set(app_handle).is_err() {
        eprintln!("[Notification] Warning: AppHandle already initialized");
    }
    println!("[Notification] ✅ Notification system initialized");
}

/// Get the bundle identifier for notifications
fn get_bundle_id() -> String {
    APP_HANDLE
        .get()
        .map(|handle| handle.config().tauri.bundle.identifier.clone())
        .unwrap_or_else(|| {
            eprintln!("[Notification] ⚠️ AppHandle not initialized, using default bundle ID");
            "com.sosbeacon.app".to_string()
        })
}

/// Send notification after the emergency alert drafts have opened
pub fn send_alert_dispatched_notification(recipient_count: usize) {
    println!(
        "[Notification] 📢 Sending alert dispatched notification ({} recipient(s))",
        recipient_count
    );

    let notification_result = Notification::new(&get_bundle_id())
        .title("Emergency Alert Sent 🚨")
        .body(&format!(
            "Opened SMS drafts for {} contact(s)",
            recipient_count
        ))
        .show();

    match notification_result {
        Ok(_) => {
            println!("[Notification] ✅ Alert dispatched notification sent successfully");
        }
        Err(e) => {
            println!("[Notification] ⚠️ Failed to send notification: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_message_format() {
        // Test that notification messages are properly formatted
        let count = 3;
        let expected = format!("Opened SMS drafts for {} contact(s)", count);
        assert_eq!(expected, "Opened SMS drafts for 3 contact(s)");
    }
}
