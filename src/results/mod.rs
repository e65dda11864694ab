//! Recognition result value objects

pub mod alternative;
pub mod index;
pub mod result;
pub mod result_list;

pub use alternative::SpeechRecognitionAlternative;
pub use index::ItemIndex;
pub use result::SpeechRecognitionResult;
pub use result_list::SpeechRecognitionResultList;

use crate::error::{CortiError, Result};
use index::Resolved;

/// Shared `item()` lookup for the indexed containers
fn item_at<'a, T>(items: &'a [T], index: ItemIndex, entity: &'static str) -> Result<Option<&'a T>> {
    match index.resolve(items.len()) {
        Resolved::Missing => Err(CortiError::InvalidArgument { entity }),
        Resolved::Position(i) => Ok(items.get(i)),
        Resolved::OutOfRange => Ok(None),
    }
}
