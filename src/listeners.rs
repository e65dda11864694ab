//! Listener storage and event dispatch
//!
//! Each known event type owns an ordered list of subscribers registered with
//! `add_listener` and one single-slot handler (the `on<type>` property).
//! Emission calls the subscribers in registration order, then the handler.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use crate::event::{EventType, SpeechRecognitionEvent};

/// Callback invoked with each emitted event
pub type Listener = Arc<dyn Fn(&SpeechRecognitionEvent) + Send + Sync>;

#[derive(Default)]
struct Slot {
    subscribers: Vec<Listener>,
    handler: Option<Listener>,
}

/// Per-event-type listener registry
pub struct ListenerRegistry {
    slots: Mutex<HashMap<EventType, Slot>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        let slots = EventType::ALL
            .iter()
            .map(|&event_type| (event_type, Slot::default()))
            .collect();

        Self {
            slots: Mutex::new(slots),
        }
    }

    /// Append a subscriber. Unknown event types are ignored.
    pub fn add_listener(&self, event_type: &str, listener: Listener) {
        match event_type.parse::<EventType>() {
            Ok(event_type) => self.add(event_type, listener),
            Err(_) => trace!(event_type, "Ignoring listener for unknown event type"),
        }
    }

    /// Append a subscriber for a known event type
    pub fn add(&self, event_type: EventType, listener: Listener) {
        let mut slots = self.slots.lock();
        slots.entry(event_type).or_default().subscribers.push(listener);
    }

    /// Removal is not supported; registered subscribers stay attached.
    pub fn remove_listener(&self, event_type: &str, _listener: &Listener) {
        trace!(event_type, "remove_listener is a no-op");
    }

    /// Replace the single-slot handler. `None` leaves the current handler untouched.
    pub fn set_handler(&self, event_type: EventType, handler: Option<Listener>) {
        if let Some(handler) = handler {
            let mut slots = self.slots.lock();
            slots.entry(event_type).or_default().handler = Some(handler);
        }
    }

    pub fn handler(&self, event_type: EventType) -> Option<Listener> {
        self.slots
            .lock()
            .get(&event_type)
            .and_then(|slot| slot.handler.clone())
    }

    /// Number of subscribers registered with `add_listener` for a type
    pub fn listener_count(&self, event_type: EventType) -> usize {
        self.slots
            .lock()
            .get(&event_type)
            .map_or(0, |slot| slot.subscribers.len())
    }

    /// Deliver an event to every subscriber, then to the handler.
    ///
    /// The registry lock is released before any callback runs, so callbacks
    /// may register listeners or drive the recognizer. Subscribers added
    /// during an emission are first called on the next one. The handler is
    /// looked up after the subscribers have run, so one assigned by a
    /// subscriber fires for the current event.
    pub fn emit(&self, event_type: EventType, event: Option<SpeechRecognitionEvent>) {
        let event = event.unwrap_or_else(|| SpeechRecognitionEvent::new(event_type));

        let subscribers: Vec<Listener> = self
            .slots
            .lock()
            .get(&event_type)
            .map(|slot| slot.subscribers.clone())
            .unwrap_or_default();

        trace!(%event_type, subscribers = subscribers.len(), "Emitting event");

        for subscriber in &subscribers {
            subscriber(&event);
        }

        if let Some(handler) = self.handler(event_type) {
            handler(&event);
        }
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
