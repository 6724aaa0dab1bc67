// Contact Manager
//
// Validation rules for new contacts and list edit operations.
// The phone-number check is deliberately lenient: it gates on shape,
// not on any real numbering plan, and the caller may override it.

use crate::types::Contact;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shown when either input is blank after trimming
pub const EMPTY_FIELDS_MSG: &str = "Please enter both name and number!";

/// Confirmation prompt for a number that fails the shape check
pub const UNUSUAL_NUMBER_PROMPT: &str = "Number looks unusual. Do you want to save anyway?";

// Leading + or digit, then at least four of: digits, spaces, dashes, parens.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+0-9][0-9\s\-()]{4,}$").expect("phone pattern must compile")
});

/// Whether `number` has the rough shape of a phone number
pub fn looks_like_phone_number(number: &str) -> bool {
    PHONE_PATTERN.is_match(number)
}

/// Outcome of checking a prospective contact
#[derive(Debug, PartialEq)]
pub enum NewContactCheck {
    /// Inputs are acceptable; the contained contact carries trimmed fields
    Valid(Contact),
    /// Number fails the shape check and the caller has not overridden it
    NeedsConfirmation,
}

/// Validate a prospective contact.
///
/// Both fields are trimmed first. Blank fields are an error. An
/// unusual-looking number is not an error: it asks for confirmation,
/// and `allow_unusual` accepts it as-is.
pub fn validate_new_contact(
    name: &str,
    number: &str,
    allow_unusual: bool,
) -> Result<NewContactCheck, String> {
    let name = name.trim();
    let number = number.trim();

    if name.is_empty() || number.is_empty() {
        return Err(EMPTY_FIELDS_MSG.to_string());
    }

    if !looks_like_phone_number(number) && !allow_unusual {
        return Ok(NewContactCheck::NeedsConfirmation);
    }

    Ok(NewContactCheck::Valid(Contact {
        name: name.to_string(),
        number: number.to_string(),
    }))
}

/// Remove the contact at `index`, shifting later entries down.
/// Returns `None` when the index is out of range.
pub fn remove_at(contacts: &mut Vec<Contact>, index: usize) -> Option<Contact> {
    if index < contacts.len() {
        Some(contacts.remove(index))
    } else {
        None
    }
}
