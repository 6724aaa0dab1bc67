// Contacts Module - Emergency contact management
//
// This module handles storage, validation, and rendering of the contact list

pub mod manager;
pub mod store;
pub mod view;

// Validation
pub use manager::{remove_at, validate_new_contact, NewContactCheck};

// Rendering
pub use view::{list_update, ContactListUpdate};
