// Emergency Dispatcher
//
// Turns the current position and contact selection into an alert draft:
// the message text, one sms: link per recipient, and the prompts shown
// before anything opens. Opening the links is a separate step so the
// user can still back out at the confirmation.

use crate::emergency::message::{build_alert_message, sms_link};
use crate::notification;
use crate::types::{Contact, Position};
use serde::Serialize;
use tauri::Manager;

pub const NO_POSITION_MSG: &str = "Location not yet available";
pub const NO_CONTACTS_MSG: &str = "No contacts saved. Please add emergency contacts first.";

/// A fully prepared alert, waiting for the user's confirmation
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertDraft {
    pub recipients: Vec<Contact>,
    pub recipient_count: usize,
    pub message: String,
    pub links: Vec<String>,
    pub confirm_prompt: String,
    pub links_notice: String,
}

/// Resolve the checked indices against the current list.
///
/// Indices that no longer exist are dropped. When nothing valid is
/// checked the alert goes to every contact.
pub fn select_recipients(contacts: &[Contact], checked: &[usize]) -> Vec<Contact> {
    let selected: Vec<Contact> = checked
        .iter()
        .filter_map(|&idx| contacts.get(idx).cloned())
        .collect();

    if selected.is_empty() {
        contacts.to_vec()
    } else {
        selected
    }
}

/// Build the alert draft for the given selection.
///
/// Requires a position fix and at least one recipient; the error
/// strings double as the user-facing alerts.
pub fn prepare_alert(
    contacts: &[Contact],
    checked: &[usize],
    position: Option<Position>,
) -> Result<AlertDraft, String> {
    let position = position.ok_or_else(|| NO_POSITION_MSG.to_string())?;

    let recipients = select_recipients(contacts, checked);
    if recipients.is_empty() {
        return Err(NO_CONTACTS_MSG.to_string());
    }

    let message = build_alert_message(&position);
    let links: Vec<String> = recipients
        .iter()
        .map(|contact| sms_link(&contact.number, &message))
        .collect();

    let confirm_prompt = format!(
        "Send emergency alert to {} contact(s)?\n\nMessage preview:\n{}",
        recipients.len(),
        message
    );
    let links_notice = format!(
        "Tap \"OK\" to open the SMS app for each contact. On desktop, copy the links below:\n\n{}",
        links.join("\n")
    );

    Ok(AlertDraft {
        recipient_count: recipients.len(),
        recipients,
        message,
        links,
        confirm_prompt,
        links_notice,
    })
}

/// Open each sms: link with the system handler.
///
/// A link that fails to open is logged and skipped; the rest still
/// open. Returns how many opened.
pub fn open_links(app: &tauri::AppHandle, links: &[String]) -> usize {
    let mut opened = 0;

    for link in links {
        match tauri::api::shell::open(&app.shell_scope(), link, None) {
            Ok(()) => opened += 1,
            Err(e) => eprintln!("[Dispatcher] Failed to open {}: {}", link, e),
        }
    }

    println!("[Dispatcher] 🚨 Opened {} of {} link(s)", opened, links.len());
    notification::send_alert_dispatched_notification(opened);

    opened
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, number: &str) -> Contact {
        Contact {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    fn position() -> Option<Position> {
        Some(Position {
            lat: 12.345678,
            lng: 98.765432,
        })
    }

    #[test]
    fn test_checked_subset_is_selected() {
        let contacts = vec![contact("A", "123"), contact("B", "456")];

        assert_eq!(
            select_recipients(&contacts, &[1]),
            vec![contact("B", "456")]
        );
    }

    #[test]
    fn test_nothing_checked_selects_everyone() {
        let contacts = vec![contact("A", "123"), contact("B", "456")];

        assert_eq!(select_recipients(&contacts, &[]), contacts);
    }

    #[test]
    fn test_dangling_indices_are_dropped() {
        let contacts = vec![contact("A", "123"), contact("B", "456")];

        // One valid, one stale
        assert_eq!(
            select_recipients(&contacts, &[0, 7]),
            vec![contact("A", "123")]
        );
        // All stale falls back to everyone
        assert_eq!(select_recipients(&contacts, &[7, 8]), contacts);
    }

    #[test]
    fn test_no_position_blocks_the_alert() {
        let contacts = vec![contact("A", "123")];

        assert_eq!(
            prepare_alert(&contacts, &[], None),
            Err(NO_POSITION_MSG.to_string())
        );
    }

    #[test]
    fn test_no_contacts_blocks_the_alert() {
        assert_eq!(
            prepare_alert(&[], &[], position()),
            Err(NO_CONTACTS_MSG.to_string())
        );
        // Position is checked first
        assert_eq!(prepare_alert(&[], &[], None), Err(NO_POSITION_MSG.to_string()));
    }

    #[test]
    fn test_draft_has_one_link_per_recipient() {
        let contacts = vec![contact("A", "123 456"), contact("B", "+49 171")];
        let draft = prepare_alert(&contacts, &[], position()).unwrap();

        assert_eq!(draft.recipient_count, 2);
        assert_eq!(draft.links.len(), 2);
        assert!(draft.links[0].starts_with("sms:123456?body="));
        assert!(draft.links[1].starts_with("sms:%2B49171?body="));
    }

    #[test]
    fn test_prompts_embed_count_and_links() {
        let contacts = vec![contact("A", "123")];
        let draft = prepare_alert(&contacts, &[], position()).unwrap();

        assert!(draft
            .confirm_prompt
            .starts_with("Send emergency alert to 1 contact(s)?\n\nMessage preview:\n🚨 EMERGENCY 🚨"));
        assert!(draft.links_notice.starts_with("Tap \"OK\" to open the SMS app"));
        assert!(draft.links_notice.ends_with(&draft.links[0]));
    }
}
