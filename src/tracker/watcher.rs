// Position Watcher Thread
//
// Receives position fixes and failures from the page, keeps the shared
// last-known position current, and forwards updates to the page.

use crate::event::{emit_position_unavailable, emit_position_updated};
use crate::tracker::state::{format_status_line, TrackerEvent};
use crate::types::SharedPosition;
use std::sync::mpsc::{self, Sender};
use std::sync::Mutex;
use std::thread;

/// A running position watch.
///
/// Dropping the subscription without calling [`unsubscribe`] leaves the
/// thread running until the sender side disconnects.
///
/// [`unsubscribe`]: PositionSubscription::unsubscribe
pub struct PositionSubscription {
    events: Sender<TrackerEvent>,
    handle: thread::JoinHandle<()>,
}

impl PositionSubscription {
    /// Sender for feeding events into the watcher
    pub fn sender(&self) -> Sender<TrackerEvent> {
        self.events.clone()
    }

    /// Stop the watcher thread and wait for it to finish
    pub fn unsubscribe(self) {
        // The thread may already be gone if the channel disconnected
        let _ = self.events.send(TrackerEvent::Shutdown);
        if self.handle.join().is_err() {
            eprintln!("[PositionWatcher] Watcher thread panicked during shutdown");
        }
    }
}

/// Start the position watcher thread
pub fn start_position_watcher(last_position: SharedPosition) -> PositionSubscription {
    let (event_sender, event_receiver) = mpsc::channel();
    let handle = thread::spawn(move || {
        run_position_watcher(event_receiver, last_position);
    });

    PositionSubscription {
        events: event_sender,
        handle,
    }
}

fn run_position_watcher(
    event_receiver: mpsc::Receiver<TrackerEvent>,
    last_position: SharedPosition,
) {
    println!("[PositionWatcher] Started");

    let mut fix_count: u64 = 0;
    loop {
        match event_receiver.recv() {
            Ok(TrackerEvent::Fix(position)) => {
                fix_count += 1;

                let first_fix = {
                    let mut last = last_position.lock().unwrap();
                    let first = last.is_none();
                    *last = Some(position);
                    first
                };

                if first_fix {
                    println!(
                        "[PositionWatcher] 📍 First fix: {}",
                        format_status_line(&position)
                    );
                }

                emit_position_updated(&position);

                // Log every 25 fixes
                if fix_count % 25 == 0 {
                    println!(
                        "[PositionWatcher] Fix #{}: {}",
                        fix_count,
                        format_status_line(&position)
                    );
                }
            }
            Ok(TrackerEvent::Failed(failure)) => {
                println!("[PositionWatcher] ⚠️  {}", failure.status_text());
                emit_position_unavailable(failure);
            }
            Ok(TrackerEvent::Shutdown) => {
                println!("[PositionWatcher] Shutdown requested");
                break;
            }
            Err(_) => {
                println!("[PositionWatcher] Channel disconnected, shutting down");
                break;
            }
        }
    }

    println!("[PositionWatcher] Stopped after {} fix(es)", fix_count);
}

/// Managed handle for feeding the watcher from commands.
///
/// The sender lives behind a mutex so the handle can be shared across
/// command invocations, and the subscription is taken out exactly once
/// at teardown.
pub struct TrackerHandle {
    events: Mutex<Sender<TrackerEvent>>,
    subscription: Mutex<Option<PositionSubscription>>,
}

impl TrackerHandle {
    pub fn new(subscription: PositionSubscription) -> Self {
        TrackerHandle {
            events: Mutex::new(subscription.sender()),
            subscription: Mutex::new(Some(subscription)),
        }
    }

    /// Forward an event to the watcher thread
    pub fn send(&self, event: TrackerEvent) {
        let sender = self.events.lock().unwrap();
        if sender.send(event).is_err() {
            eprintln!("[PositionWatcher] Dropped event, watcher is not running");
        }
    }

    /// Tear down the watcher. Safe to call more than once.
    pub fn unsubscribe(&self) {
        if let Some(subscription) = self.subscription.lock().unwrap().take() {
            subscription.unsubscribe();
            println!("[PositionWatcher] Unsubscribed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::state::GeoFailure;
    use crate::types::Position;
    use std::sync::Arc;
    use std::time::Duration;

    fn wait_for_position(shared: &SharedPosition) -> Option<Position> {
        // The watcher thread applies fixes asynchronously
        for _ in 0..50 {
            if let Some(position) = *shared.lock().unwrap() {
                return Some(position);
            }
            thread::sleep(Duration::from_millis(10));
        }
        None
    }

    #[test]
    fn test_fix_updates_shared_position() {
        let shared: SharedPosition = Arc::new(Mutex::new(None));
        let subscription = start_position_watcher(Arc::clone(&shared));

        let fix = Position { lat: 12.34, lng: 56.78 };
        subscription.sender().send(TrackerEvent::Fix(fix)).unwrap();

        assert_eq!(wait_for_position(&shared), Some(fix));
        subscription.unsubscribe();
    }

    #[test]
    fn test_later_fix_replaces_earlier() {
        let shared: SharedPosition = Arc::new(Mutex::new(None));
        let subscription = start_position_watcher(Arc::clone(&shared));
        let sender = subscription.sender();

        sender.send(TrackerEvent::Fix(Position { lat: 1.0, lng: 1.0 })).unwrap();
        let newer = Position { lat: 2.0, lng: 2.0 };
        sender.send(TrackerEvent::Fix(newer)).unwrap();

        subscription.unsubscribe(); // joins, so both fixes are applied
        assert_eq!(*shared.lock().unwrap(), Some(newer));
    }

    #[test]
    fn test_failure_leaves_last_position_intact() {
        let shared: SharedPosition = Arc::new(Mutex::new(None));
        let subscription = start_position_watcher(Arc::clone(&shared));
        let sender = subscription.sender();

        let fix = Position { lat: 12.34, lng: 56.78 };
        sender.send(TrackerEvent::Fix(fix)).unwrap();
        sender.send(TrackerEvent::Failed(GeoFailure::Unavailable)).unwrap();

        subscription.unsubscribe();
        assert_eq!(*shared.lock().unwrap(), Some(fix));
    }

    #[test]
    fn test_handle_unsubscribe_is_idempotent() {
        let shared: SharedPosition = Arc::new(Mutex::new(None));
        let handle = TrackerHandle::new(start_position_watcher(shared));

        handle.send(TrackerEvent::Fix(Position { lat: 0.0, lng: 0.0 }));
        handle.unsubscribe();
        handle.unsubscribe(); // second call is a no-op

        // Sends after teardown are dropped, not panics
        handle.send(TrackerEvent::Fix(Position { lat: 1.0, lng: 1.0 }));
    }
}
