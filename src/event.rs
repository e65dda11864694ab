//! Events delivered to recognizer listeners

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::results::SpeechRecognitionResultList;

/// The event types the recognizer emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Start,
    SoundStart,
    End,
    Result,
}

impl EventType {
    /// Every known event type, in declaration order
    pub const ALL: [EventType; 4] = [
        EventType::Start,
        EventType::SoundStart,
        EventType::End,
        EventType::Result,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Start => "start",
            EventType::SoundStart => "soundstart",
            EventType::End => "end",
            EventType::Result => "result",
        }
    }

    /// Resolve a handler property name such as `onresult`
    pub fn from_handler_name(name: &str) -> Option<Self> {
        name.strip_prefix("on").and_then(|rest| rest.parse().ok())
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name that is not a known event type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
    type Err = UnknownEventType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(EventType::Start),
            "soundstart" => Ok(EventType::SoundStart),
            "end" => Ok(EventType::End),
            "result" => Ok(EventType::Result),
            other => Err(UnknownEventType(other.to_string())),
        }
    }
}

/// Event object handed to listeners.
///
/// Lifecycle events carry only their type; `result` events also carry the
/// result list and a result index of 0. `interpretation` and `emma` exist
/// for API compatibility and are always null.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRecognitionEvent {
    event_type: EventType,
    result_index: Option<usize>,
    results: Option<SpeechRecognitionResultList>,
}

impl Serialize for SpeechRecognitionEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.results.is_some() { 5 } else { 1 };
        let mut state = serializer.serialize_struct("SpeechRecognitionEvent", fields)?;
        state.serialize_field("type", &self.event_type)?;
        if let Some(results) = &self.results {
            state.serialize_field("resultIndex", &self.result_index)?;
            state.serialize_field("results", results)?;
            state.serialize_field("interpretation", &())?;
            state.serialize_field("emma", &())?;
        }
        state.end()
    }
}

impl SpeechRecognitionEvent {
    /// A bare event carrying only its type
    pub fn new(event_type: EventType) -> Self {
        Self {
            event_type,
            result_index: None,
            results: None,
        }
    }

    /// A `result` event wrapping the given results
    pub fn result(results: SpeechRecognitionResultList) -> Self {
        Self {
            event_type: EventType::Result,
            result_index: Some(0),
            results: Some(results),
        }
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn result_index(&self) -> Option<usize> {
        self.result_index
    }

    pub fn results(&self) -> Option<&SpeechRecognitionResultList> {
        self.results.as_ref()
    }

    /// Always `None`
    pub fn interpretation(&self) -> Option<&str> {
        None
    }

    /// Always `None`
    pub fn emma(&self) -> Option<&str> {
        None
    }
}
