// Emergency Module - Alert drafting and dispatch
//
// This module handles building the alert message and opening sms: links

pub mod dispatcher;
pub mod message;

// Draft lifecycle
pub use dispatcher::{open_links, prepare_alert, AlertDraft};
