// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod contacts;
mod emergency;
mod event;
mod map;
mod notification;
mod tracker;
mod types;

use contacts::{ContactListUpdate, NewContactCheck};
use emergency::AlertDraft;
use map::MapConfig;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tauri::Manager;
use tracker::{GeoFailure, TrackerEvent, TrackerHandle, WatchOptions};
use types::{Position, SharedPosition};

/// Outcome of an add request, telling the page whether to re-ask
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct AddContactResponse {
    saved: bool,
    confirm_prompt: Option<String>,
}

#[tauri::command]
fn get_contact_list() -> ContactListUpdate {
    contacts::list_update(&contacts::store::load())
}

#[tauri::command]
fn add_contact(name: String, number: String, allow_unusual: bool) -> Result<AddContactResponse, String> {
    match contacts::validate_new_contact(&name, &number, allow_unusual)? {
        NewContactCheck::NeedsConfirmation => Ok(AddContactResponse {
            saved: false,
            confirm_prompt: Some(contacts::manager::UNUSUAL_NUMBER_PROMPT.to_string()),
        }),
        NewContactCheck::Valid(contact) => {
            let mut list = contacts::store::load();
            list.push(contact);
            contacts::store::save(&list).map_err(|e| e.to_string())?;

            event::emit_contacts_changed(&contacts::list_update(&list));
            Ok(AddContactResponse {
                saved: true,
                confirm_prompt: None,
            })
        }
    }
}

#[tauri::command]
fn delete_contact(index: usize) -> Result<(), String> {
    let mut list = contacts::store::load();

    if let Some(removed) = contacts::remove_at(&mut list, index) {
        contacts::store::save(&list).map_err(|e| e.to_string())?;
        println!("[Main] Deleted contact \"{}\"", removed.name);
    } else {
        // Stale row index; the re-render below brings the page back in sync
        eprintln!("[Main] Ignoring delete for stale index {}", index);
    }

    event::emit_contacts_changed(&contacts::list_update(&list));
    Ok(())
}

#[tauri::command]
fn record_position(lat: f64, lng: f64, tracker: tauri::State<TrackerHandle>) {
    tracker.send(TrackerEvent::Fix(Position { lat, lng }));
}

#[tauri::command]
fn record_position_error(failure: GeoFailure, tracker: tauri::State<TrackerHandle>) {
    tracker.send(TrackerEvent::Failed(failure));
}

#[tauri::command]
fn get_watch_options() -> WatchOptions {
    WatchOptions::default()
}

#[tauri::command]
fn get_map_config() -> MapConfig {
    MapConfig::default()
}

#[tauri::command]
fn prepare_alert(
    checked: Vec<usize>,
    last_position: tauri::State<SharedPosition>,
) -> Result<AlertDraft, String> {
    let list = contacts::store::load();
    let position = *last_position.lock().unwrap();

    emergency::prepare_alert(&list, &checked, position)
}

#[tauri::command]
fn dispatch_alert(links: Vec<String>, app: tauri::AppHandle) -> usize {
    emergency::open_links(&app, &links)
}

fn main() {
    // Last known position, shared between the watcher and commands
    let last_position: SharedPosition = Arc::new(Mutex::new(None));

    // Start the watcher before the webview comes up so no early fix is lost
    let subscription = tracker::start_position_watcher(last_position.clone());
    let tracker_handle = TrackerHandle::new(subscription);

    tauri::Builder::default()
        .manage(last_position)
        .manage(tracker_handle)
        .invoke_handler(tauri::generate_handler![
            get_contact_list,
            add_contact,
            delete_contact,
            record_position,
            record_position_error,
            get_watch_options,
            get_map_config,
            prepare_alert,
            dispatch_alert
        ])
        .setup(|app| {
            let app_handle = app.handle();

            // Initialize notification system (singleton pattern)
            notification::init(app_handle.clone());

            // Initialize event emitter (singleton pattern)
            event::init(app_handle);

            println!(
                "[Main] Contact store at {}",
                contacts::store::store_path().display()
            );
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, run_event| {
            if let tauri::RunEvent::Exit = run_event {
                // Stop the watcher thread before the process goes away
                app_handle.state::<TrackerHandle>().unsubscribe();
            }
        });
}
