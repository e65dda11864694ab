//! One recognized utterance

use serde::Serialize;

use super::{item_at, ItemIndex, SpeechRecognitionAlternative};
use crate::error::Result;

/// A recognized utterance holding its ranked alternatives.
///
/// Interim results are not modeled, so every result is final.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRecognitionResult {
    alternatives: Vec<SpeechRecognitionAlternative>,
    is_final: bool,
}

impl SpeechRecognitionResult {
    pub fn new(alternatives: Vec<SpeechRecognitionAlternative>) -> Self {
        Self {
            alternatives,
            is_final: true,
        }
    }

    /// Number of alternatives
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Browser-style indexed access.
    ///
    /// Fails when called without an index. A non-numeric index yields the
    /// first alternative, an out-of-range one yields `None`.
    pub fn item(&self, index: impl Into<ItemIndex>) -> Result<Option<&SpeechRecognitionAlternative>> {
        item_at(&self.alternatives, index.into(), "SpeechRecognitionResult")
    }

    /// Plain positional access
    pub fn get(&self, index: usize) -> Option<&SpeechRecognitionAlternative> {
        self.alternatives.get(index)
    }

    /// Iterate over the alternatives from the start
    pub fn iter(&self) -> std::slice::Iter<'_, SpeechRecognitionAlternative> {
        self.alternatives.iter()
    }
}

impl<'a> IntoIterator for &'a SpeechRecognitionResult {
    type Item = &'a SpeechRecognitionAlternative;
    type IntoIter = std::slice::Iter<'a, SpeechRecognitionAlternative>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
