//! The results delivered with one `result` event

use serde::Serialize;

use super::{item_at, ItemIndex, SpeechRecognitionResult};
use crate::error::Result;

/// Ordered collection of recognition results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SpeechRecognitionResultList {
    results: Vec<SpeechRecognitionResult>,
}

impl SpeechRecognitionResultList {
    pub fn new(results: Vec<SpeechRecognitionResult>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Browser-style indexed access, same rules as [`SpeechRecognitionResult::item`]
    pub fn item(&self, index: impl Into<ItemIndex>) -> Result<Option<&SpeechRecognitionResult>> {
        item_at(&self.results, index.into(), "SpeechRecognitionResultList")
    }

    pub fn get(&self, index: usize) -> Option<&SpeechRecognitionResult> {
        self.results.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpeechRecognitionResult> {
        self.results.iter()
    }
}

impl<'a> IntoIterator for &'a SpeechRecognitionResultList {
    type Item = &'a SpeechRecognitionResult;
    type IntoIter = std::slice::Iter<'a, SpeechRecognitionResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::SpeechRecognitionAlternative;

    fn sample() -> SpeechRecognitionResultList {
        SpeechRecognitionResultList::new(vec![SpeechRecognitionResult::new(vec![
            SpeechRecognitionAlternative::new("hello", 0.95),
        ])])
    }

    #[test]
    fn test_item() {
        let list = sample();
        assert_eq!(list.len(), 1);
        assert!(list.item(0).unwrap().is_some());
        assert!(list.item(999).unwrap().is_none());
        assert_eq!(list.item("goldstar").unwrap(), list.item(0).unwrap());
        assert_eq!(list.item(f64::NAN).unwrap(), list.item(0).unwrap());
    }

    #[test]
    fn test_item_missing_argument() {
        let err = sample().item(None::<u32>).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to execute 'item' on 'SpeechRecognitionResultList': 1 argument required, but only 0 present."
        );
    }

    #[test]
    fn test_iteration() {
        let list = sample();
        let mut count = 0;
        for result in &list {
            assert_eq!(result.len(), 1);
            count += 1;
        }
        assert_eq!(count, 1);
        assert_eq!(list.iter().count(), 1);
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["isFinal"], true);
        assert_eq!(json[0]["alternatives"][0]["transcript"], "hello");
    }
}
