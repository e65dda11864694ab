//! A single candidate transcript

use serde::Serialize;

/// One candidate transcript with its confidence score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRecognitionAlternative {
    transcript: String,
    confidence: f64,
}

impl SpeechRecognitionAlternative {
    /// Create an alternative. Confidence is clamped to `[0, 1]`.
    pub fn new(transcript: impl Into<String>, confidence: f64) -> Self {
        Self {
            transcript: transcript.into(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(SpeechRecognitionAlternative::new("a", 1.5).confidence(), 1.0);
        assert_eq!(SpeechRecognitionAlternative::new("a", -0.2).confidence(), 0.0);
        assert_eq!(SpeechRecognitionAlternative::new("a", 0.5).transcript(), "a");
    }
}
