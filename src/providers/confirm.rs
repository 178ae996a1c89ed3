//! In-memory confirmation channel.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::providers::ConfirmationChannel;

/// Milliseconds since the unix epoch, for confirmation timestamps.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Single-slot confirmation store.
///
/// Holds at most one confirmation; a new write replaces any unread one,
/// matching the write-then-immediately-read-once lifecycle.
#[derive(Default)]
pub struct InMemoryConfirmation {
    slot: Mutex<Option<(String, u64)>>,
}

impl InMemoryConfirmation {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConfirmationChannel for InMemoryConfirmation {
    fn write_confirmation(&self, message: &str, timestamp_ms: u64) {
        let mut slot = self.slot.lock().expect("confirmation slot poisoned");
        *slot = Some((message.to_string(), timestamp_ms));
    }

    fn read_and_clear_if_fresh(&self, max_age_ms: u64) -> Option<String> {
        let mut slot = self.slot.lock().expect("confirmation slot poisoned");
        let (message, timestamp_ms) = slot.take()?;
        if now_ms().saturating_sub(timestamp_ms) < max_age_ms {
            Some(message)
        } else {
            tracing::debug!(message, "stale navigation confirmation dropped");
            None
        }
    }
}
