//! Corti: a mock of the browser SpeechRecognition API
//!
//! Lets code written against a speech recognizer be driven deterministically
//! in tests, without audio input or a recognition engine. Test code starts
//! the recognizer, "says" transcripts into it and observes the events it
//! emits.
//!
//! # Architecture
//!
//! - `results`: alternatives, results and result lists with browser-style `item()` access
//! - `event`: event types and the event object handed to listeners
//! - `listeners`: subscriber lists and single-slot `on<type>` handlers
//! - `recognition`: the recognizer state machine and its attributes
//! - `scenario`: scripted sessions loaded from TOML
//! - `output`: event log formatting
//! - `config`: configuration structures
//! - `error`: error types
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use corti_rs::{SpeechRecognition, SpeechRecognitionEvent};
//!
//! let recognition = SpeechRecognition::new();
//! recognition.set_max_alternatives(2);
//! recognition.set_onresult(Some(Arc::new(|event: &SpeechRecognitionEvent| {
//!     let results = event.results().unwrap();
//!     let best = results.item(0).unwrap().unwrap().item(0).unwrap().unwrap();
//!     assert_eq!(best.transcript(), "lights on");
//! })));
//!
//! recognition.start().unwrap();
//! recognition.say("lights on");
//! assert!(!recognition.is_started());
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod listeners;
pub mod output;
pub mod recognition;
pub mod results;
pub mod scenario;

// Re-exports for convenience
pub use config::{Config, OutputConfig, OutputFormat, RecognizerConfig};
pub use error::{ConfigError, CortiError, Result};
pub use event::{EventType, SpeechRecognitionEvent};
pub use listeners::{Listener, ListenerRegistry};
pub use output::OutputWriter;
pub use recognition::{AttributeValue, Phrases, SpeechRecognition, MAX_ALTERNATIVES};
pub use results::{
    ItemIndex, SpeechRecognitionAlternative, SpeechRecognitionResult, SpeechRecognitionResultList,
};
pub use scenario::{Scenario, ScenarioReport, Step};
