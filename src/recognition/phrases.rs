//! Synthesis of ranked alternatives from caller-supplied transcripts

use crate::results::SpeechRecognitionAlternative;

/// Confidence of the top alternative
const TOP_CONFIDENCE: f64 = 0.95;
/// Each following alternative keeps this share of the previous confidence
const CONFIDENCE_DECAY: f64 = 0.9;
const MIN_CONFIDENCE: f64 = 0.01;

const PADDING_SUFFIXES: [&str; 2] = [" and so on", " and so forth"];

/// Transcripts passed to `say`: one sentence or a ranked list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrases(Vec<String>);

impl Phrases {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Phrases {
    fn from(sentence: &str) -> Self {
        Phrases(vec![sentence.to_string()])
    }
}

impl From<String> for Phrases {
    fn from(sentence: String) -> Self {
        Phrases(vec![sentence])
    }
}

impl From<Vec<String>> for Phrases {
    fn from(sentences: Vec<String>) -> Self {
        Phrases(sentences)
    }
}

impl From<Vec<&str>> for Phrases {
    fn from(sentences: Vec<&str>) -> Self {
        Phrases(sentences.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Phrases {
    fn from(sentences: &[&str]) -> Self {
        Phrases(sentences.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Phrases {
    fn from(sentences: [&str; N]) -> Self {
        Phrases(sentences.iter().map(|s| s.to_string()).collect())
    }
}

/// Confidence of the alternative at `rank` (0-based)
pub fn confidence_for_rank(rank: usize) -> f64 {
    let exponent = i32::try_from(rank).unwrap_or(i32::MAX);
    (TOP_CONFIDENCE * CONFIDENCE_DECAY.powi(exponent)).max(MIN_CONFIDENCE)
}

/// Fit the transcripts to exactly `count` entries.
///
/// Extra transcripts are dropped. Missing ones are produced by extending the
/// last transcript with " and so on", then " and so forth", alternating.
/// An empty input pads from an empty transcript.
pub fn fit_transcripts(mut transcripts: Vec<String>, count: usize) -> Vec<String> {
    if transcripts.len() >= count {
        transcripts.truncate(count);
        return transcripts;
    }

    let mut previous = transcripts.last().cloned().unwrap_or_default();
    let padding = count - transcripts.len();

    for suffix in PADDING_SUFFIXES.iter().cycle().take(padding) {
        previous.push_str(suffix);
        transcripts.push(previous.clone());
    }

    transcripts
}

/// Build the ranked alternatives for one utterance
pub fn synthesize(phrases: Phrases, max_alternatives: usize) -> Vec<SpeechRecognitionAlternative> {
    fit_transcripts(phrases.into_inner(), max_alternatives)
        .into_iter()
        .enumerate()
        .map(|(rank, transcript)| SpeechRecognitionAlternative::new(transcript, confidence_for_rank(rank)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_truncate() {
        let fitted = fit_transcripts(strings(&["a", "b", "c", "d"]), 3);
        assert_eq!(fitted, strings(&["a", "b", "c"]));
    }

    #[test]
    fn test_pad_from_last() {
        let fitted = fit_transcripts(strings(&["a", "b"]), 3);
        assert_eq!(fitted, strings(&["a", "b", "b and so on"]));
    }

    #[test]
    fn test_pad_alternates_suffixes() {
        let fitted = fit_transcripts(strings(&["hi"]), 4);
        assert_eq!(
            fitted,
            strings(&[
                "hi",
                "hi and so on",
                "hi and so on and so forth",
                "hi and so on and so forth and so on",
            ])
        );
    }

    #[test]
    fn test_zero_alternatives() {
        assert!(fit_transcripts(strings(&["a", "b"]), 0).is_empty());
    }

    #[test]
    fn test_pad_empty_input() {
        let fitted = fit_transcripts(Vec::new(), 2);
        assert_eq!(fitted, strings(&[" and so on", " and so on and so forth"]));
    }

    #[test]
    fn test_confidence_decay() {
        assert!((confidence_for_rank(0) - 0.95).abs() < 1e-9);
        assert!((confidence_for_rank(1) - 0.855).abs() < 1e-9);
        assert!((confidence_for_rank(2) - 0.7695).abs() < 1e-9);
        assert_eq!(confidence_for_rank(100), 0.01);
        assert_eq!(confidence_for_rank(usize::MAX), 0.01);
    }

    #[test]
    fn test_synthesize() {
        let alternatives = synthesize(Phrases::from(["a", "b"]), 3);
        let transcripts: Vec<_> = alternatives.iter().map(|a| a.transcript()).collect();
        assert_eq!(transcripts, vec!["a", "b", "b and so on"]);
        assert!(alternatives.windows(2).all(|w| w[0].confidence() > w[1].confidence()));
    }
}
