//! In-memory event sink

use std::sync::Mutex;

use crate::domain::ports::{ClientEvent, EventSink};

/// Keeps every event in arrival order until taken
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<ClientEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain recorded events
    pub fn take(&self) -> Vec<ClientEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        self.events.lock().map_or(0, |events| events.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for RecordingEventSink {
    fn on_event(&self, event: ClientEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
