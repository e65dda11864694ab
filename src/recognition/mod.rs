//! Recognizer attributes, utterance synthesis and the state machine

pub mod attribute;
pub mod phrases;
pub mod recognizer;

pub use attribute::{AttributeValue, MAX_ALTERNATIVES};
pub use phrases::{confidence_for_rank, fit_transcripts, Phrases};
pub use recognizer::SpeechRecognition;
