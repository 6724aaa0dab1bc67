// Contact Store
//
// Persists the contact list as a single JSON array on disk.
// There is no partial update API: callers load the whole list,
// mutate it in memory, then save it back wholesale.

use crate::types::Contact;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "sos-beacon";
const STORE_FILE_NAME: &str = "contacts.json";

/// Default location of the contact store
pub fn store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(STORE_FILE_NAME)
}

/// Load the contact list from the default store
pub fn load() -> Vec<Contact> {
    load_from(&store_path())
}

/// Save the contact list to the default store
pub fn save(contacts: &[Contact]) -> io::Result<()> {
    save_to(&store_path(), contacts)
}

/// Load the contact list from `path`.
///
/// Fails soft: an absent file, an unreadable file, or content that is not
/// a JSON array of contacts all yield an empty list, never an error.
pub fn load_from(path: &Path) -> Vec<Contact> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return Vec::new(), // no store yet
    };

    match serde_json::from_str(&contents) {
        Ok(contacts) => contacts,
        Err(e) => {
            eprintln!(
                "[ContactStore] Ignoring malformed store {}: {}",
                path.display(),
                e
            );
            Vec::new()
        }
    }
}

/// Overwrite the store at `path` with the given list
pub fn save_to(path: &Path, contacts: &[Contact]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json_str = serde_json::to_string_pretty(contacts)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, json_str)?;
    println!(
        "[ContactStore] Saved {} contact(s) to {}",
        contacts.len(),
        path.display()
    );

    Ok(())
}
