//! Scripted recognizer sessions loaded from TOML
//!
//! A scenario is a list of steps replayed in order against a recognizer
//! while every emitted event is recorded:
//!
//! ```toml
//! [[steps]]
//! action = "set"
//! max_alternatives = 3
//! continuous = true
//!
//! [[steps]]
//! action = "start"
//!
//! [[steps]]
//! action = "say"
//! alternatives = ["turn on the lights", "turn on the light"]
//!
//! [[steps]]
//! action = "stop"
//! ```

use std::path::Path;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};
use crate::event::{EventType, SpeechRecognitionEvent};
use crate::recognition::{AttributeValue, Phrases, SpeechRecognition};

/// A sequence of recognizer operations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One recognizer operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Start,
    Abort,
    Stop,
    Say { alternatives: Utterance },
    Set(AttributeAssignments),
}

/// Transcripts for a `say` step: one sentence or a list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Utterance {
    One(String),
    Many(Vec<String>),
}

impl From<Utterance> for Phrases {
    fn from(utterance: Utterance) -> Self {
        match utterance {
            Utterance::One(sentence) => Phrases::from(sentence),
            Utterance::Many(sentences) => Phrases::from(sentences),
        }
    }
}

/// Attribute values for a `set` step. Values go through the same coercion
/// as the recognizer setters, so `max_alternatives = "argh"` stores 0.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AttributeAssignments {
    pub max_alternatives: Option<toml::Value>,
    pub lang: Option<toml::Value>,
    pub continuous: Option<toml::Value>,
    pub interim_results: Option<toml::Value>,
}

fn attribute_value(value: toml::Value) -> AttributeValue {
    match value {
        toml::Value::String(s) => AttributeValue::Text(s),
        toml::Value::Integer(i) => AttributeValue::Number(i as f64),
        toml::Value::Float(f) => AttributeValue::Number(f),
        toml::Value::Boolean(b) => AttributeValue::Bool(b),
        other => AttributeValue::Text(other.to_string()),
    }
}

/// A step that raised an error during replay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepError {
    /// 0-based step position
    pub step: usize,
    pub message: String,
}

/// Everything observed while replaying a scenario
#[derive(Debug, Clone, Default)]
pub struct ScenarioReport {
    pub events: Vec<SpeechRecognitionEvent>,
    pub errors: Vec<StepError>,
}

impl ScenarioReport {
    /// Number of recorded events of the given type
    pub fn count(&self, event_type: EventType) -> usize {
        self.events
            .iter()
            .filter(|event| event.event_type() == event_type)
            .count()
    }

    /// Types of the recorded events, in emission order
    pub fn event_types(&self) -> Vec<EventType> {
        self.events.iter().map(|event| event.event_type()).collect()
    }
}

impl Scenario {
    /// Parse a scenario from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Load a scenario from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;
        Self::from_toml(&content)
    }

    /// Replay the steps against `recognition`, recording every event it emits.
    ///
    /// Step errors are collected in the report instead of aborting the replay.
    /// Listeners cannot be removed, so the recording listeners stay attached
    /// to `recognition` afterwards. They stop recording once `run` returns, but
    /// each run adds four more; replay on a fresh recognizer when that matters.
    pub fn run(&self, recognition: &SpeechRecognition) -> ScenarioReport {
        let events = Arc::new(Mutex::new(Vec::new()));
        for event_type in EventType::ALL {
            let sink: Weak<Mutex<Vec<SpeechRecognitionEvent>>> = Arc::downgrade(&events);
            recognition.add_event_listener(
                event_type.as_str(),
                Arc::new(move |event: &SpeechRecognitionEvent| {
                    if let Some(sink) = sink.upgrade() {
                        sink.lock().push(event.clone());
                    }
                }),
            );
        }

        let mut errors = Vec::new();
        for (index, step) in self.steps.iter().enumerate() {
            debug!(step = index, ?step, "Replaying step");
            if let Err(e) = apply(recognition, step.clone()) {
                warn!(step = index, "Step failed: {}", e);
                errors.push(StepError {
                    step: index,
                    message: e.to_string(),
                });
            }
        }

        let events = Arc::try_unwrap(events)
            .map(Mutex::into_inner)
            .unwrap_or_else(|shared| std::mem::take(&mut *shared.lock()));
        ScenarioReport { events, errors }
    }
}

fn apply(recognition: &SpeechRecognition, step: Step) -> Result<()> {
    match step {
        Step::Start => recognition.start()?,
        Step::Abort => recognition.abort(),
        Step::Stop => recognition.stop(),
        Step::Say { alternatives } => recognition.say(alternatives),
        Step::Set(assignments) => {
            if let Some(value) = assignments.max_alternatives {
                recognition.set_max_alternatives(attribute_value(value));
            }
            if let Some(value) = assignments.lang {
                recognition.set_lang(attribute_value(value));
            }
            if let Some(value) = assignments.continuous {
                recognition.set_continuous(attribute_value(value));
            }
            if let Some(value) = assignments.interim_results {
                recognition.set_interim_results(attribute_value(value));
            }
        }
    }
    Ok(())
}
