// Contact List View
//
// Renders the contact list as an HTML fragment for the page to inject.
// Rendering always starts from the stored list, so stale rows cannot
// survive a re-render, and every user-entered string is escaped.

use crate::types::Contact;
use serde::Serialize;

/// Escape a string for safe interpolation into HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the full contact list as `<li>` rows.
///
/// Each row carries a selection checkbox and a delete button, both
/// tagged with the contact's current index via `data-idx`.
pub fn render_contact_list(contacts: &[Contact]) -> String {
    let mut html = String::new();

    for (idx, contact) in contacts.iter().enumerate() {
        html.push_str(&format!(
            "<li><label><input type=\"checkbox\" class=\"contact-checkbox\" data-idx=\"{idx}\">\
             <span class=\"contact-text\">{name} - {number}</span></label>\
             <button class=\"delete-contact\" data-idx=\"{idx}\" aria-label=\"Delete contact\">Delete</button></li>",
            idx = idx,
            name = escape_html(&contact.name),
            number = escape_html(&contact.number),
        ));
    }

    html
}

/// Payload sent to the page whenever the contact list changes
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContactListUpdate {
    pub count: usize,
    pub list_html: String,
}

/// Build the page payload for the current list
pub fn list_update(contacts: &[Contact]) -> ContactListUpdate {
    ContactListUpdate {
        count: contacts.len(),
        list_html: render_contact_list(contacts),
    }
}
