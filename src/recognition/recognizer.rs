//! The mock `SpeechRecognition` state machine

use parking_lot::Mutex;
use tracing::debug;

use super::attribute::{AttributeValue, MAX_ALTERNATIVES};
use super::phrases::{synthesize, Phrases};
use crate::config::RecognizerConfig;
use crate::error::{CortiError, Result};
use crate::event::{EventType, SpeechRecognitionEvent};
use crate::listeners::{Listener, ListenerRegistry};
use crate::results::{SpeechRecognitionResult, SpeechRecognitionResultList};

#[derive(Debug, Default)]
struct RuntimeState {
    started: bool,
    sound_started: bool,
}

/// Deterministic stand-in for the browser speech recognizer.
///
/// `start` begins a listening session, `say` feeds it an utterance and
/// `abort`/`stop` end it. Every transition is reported synchronously to the
/// registered listeners. Locks are never held while listeners run, so a
/// listener may call back into the recognizer.
pub struct SpeechRecognition {
    config: Mutex<RecognizerConfig>,
    state: Mutex<RuntimeState>,
    listeners: ListenerRegistry,
}

macro_rules! handler_property {
    ($get:ident, $set:ident, $event_type:expr) => {
        #[doc = concat!("Current `", stringify!($get), "` handler, `None` when unset")]
        pub fn $get(&self) -> Option<Listener> {
            self.listeners.handler($event_type)
        }

        #[doc = concat!("Assign the `", stringify!($get), "` handler. `None` keeps the current one.")]
        pub fn $set(&self, handler: Option<Listener>) {
            self.listeners.set_handler($event_type, handler)
        }
    };
}

impl SpeechRecognition {
    /// Idle recognizer with default attributes
    pub fn new() -> Self {
        Self::with_config(RecognizerConfig::default())
    }

    /// Idle recognizer with the given attributes.
    /// `max_alternatives` is clamped to [`MAX_ALTERNATIVES`].
    pub fn with_config(mut config: RecognizerConfig) -> Self {
        config.max_alternatives = config.max_alternatives.min(MAX_ALTERNATIVES);
        Self {
            config: Mutex::new(config),
            state: Mutex::new(RuntimeState::default()),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Whether a listening session is active. Not part of the browser API.
    pub fn is_started(&self) -> bool {
        self.state.lock().started
    }

    /// Begin listening. Emits `start` then `soundstart`.
    pub fn start(&self) -> Result<()> {
        {
            let mut state = self.state.lock();
            if state.started {
                return Err(CortiError::AlreadyStarted);
            }
            state.started = true;
            state.sound_started = true;
        }

        debug!("Recognition started");
        self.listeners.emit(EventType::Start, None);
        self.listeners.emit(EventType::SoundStart, None);
        Ok(())
    }

    /// End the session and emit `end`. Does nothing when idle.
    pub fn abort(&self) {
        {
            let mut state = self.state.lock();
            if !state.started {
                return;
            }
            state.started = false;
            state.sound_started = false;
        }

        debug!("Recognition ended");
        self.listeners.emit(EventType::End, None);
    }

    /// Same as [`abort`](Self::abort); partially captured speech is not modeled
    pub fn stop(&self) {
        self.abort()
    }

    /// Simulate an utterance being recognized.
    ///
    /// Does nothing when idle. Otherwise emits a `result` event holding
    /// exactly `max_alternatives` alternatives, emits `soundstart` if this
    /// session has not had one yet, and ends the session unless continuous.
    pub fn say(&self, phrases: impl Into<Phrases>) {
        if !self.is_started() {
            return;
        }

        let max_alternatives = self.config.lock().max_alternatives;
        let alternatives = synthesize(phrases.into(), max_alternatives);
        debug!(
            alternatives = alternatives.len(),
            top = alternatives.first().map(|a| a.transcript()).unwrap_or_default(),
            "Recognized utterance"
        );

        let results = SpeechRecognitionResultList::new(vec![SpeechRecognitionResult::new(alternatives)]);
        self.listeners
            .emit(EventType::Result, Some(SpeechRecognitionEvent::result(results)));

        let first_sound = {
            let mut state = self.state.lock();
            !std::mem::replace(&mut state.sound_started, true)
        };
        if first_sound {
            self.listeners.emit(EventType::SoundStart, None);
        }

        if !self.continuous() {
            self.abort();
        }
    }

    /// Register a listener. Unknown event types are accepted and never fire.
    pub fn add_event_listener(&self, event_type: &str, listener: Listener) {
        self.listeners.add_listener(event_type, listener);
    }

    /// Accepted for API compatibility; listeners are not removed.
    pub fn remove_event_listener(&self, event_type: &str, listener: &Listener) {
        self.listeners.remove_listener(event_type, listener);
    }

    handler_property!(onstart, set_onstart, EventType::Start);
    handler_property!(onsoundstart, set_onsoundstart, EventType::SoundStart);
    handler_property!(onend, set_onend, EventType::End);
    handler_property!(onresult, set_onresult, EventType::Result);

    /// Assign a handler by property name, e.g. `onresult`.
    /// Unknown names are accepted and never fire.
    pub fn set_on_handler(&self, name: &str, handler: Option<Listener>) {
        if let Some(event_type) = EventType::from_handler_name(name) {
            self.listeners.set_handler(event_type, handler);
        }
    }

    /// Read a handler by property name
    pub fn on_handler(&self, name: &str) -> Option<Listener> {
        EventType::from_handler_name(name).and_then(|event_type| self.listeners.handler(event_type))
    }

    pub fn max_alternatives(&self) -> usize {
        self.config.lock().max_alternatives
    }

    /// Store the floored number, clamped to [`MAX_ALTERNATIVES`], or 0 for
    /// anything else. Returns `value` unchanged.
    pub fn set_max_alternatives(&self, value: impl Into<AttributeValue>) -> AttributeValue {
        let value = value.into();
        self.config.lock().max_alternatives = value.to_count();
        value
    }

    pub fn lang(&self) -> String {
        self.config.lock().lang.clone()
    }

    /// Store the string form of `value`. Returns `value` unchanged.
    pub fn set_lang(&self, value: impl Into<AttributeValue>) -> AttributeValue {
        let value = value.into();
        self.config.lock().lang = value.to_lang();
        value
    }

    pub fn continuous(&self) -> bool {
        self.config.lock().continuous
    }

    /// Store the truthiness of `value`. Returns `value` unchanged.
    pub fn set_continuous(&self, value: impl Into<AttributeValue>) -> AttributeValue {
        let value = value.into();
        self.config.lock().continuous = value.is_truthy();
        value
    }

    pub fn interim_results(&self) -> bool {
        self.config.lock().interim_results
    }

    /// Store the truthiness of `value`. Returns `value` unchanged.
    pub fn set_interim_results(&self, value: impl Into<AttributeValue>) -> AttributeValue {
        let value = value.into();
        self.config.lock().interim_results = value.is_truthy();
        value
    }
}

impl Default for SpeechRecognition {
    fn default() -> Self {
        Self::new()
    }
}
