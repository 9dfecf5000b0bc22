use serde::{Deserialize, Serialize};

/// A chapter of a book draft.
///
/// Values are taken as given: the number is caller-assigned and is not
/// checked for uniqueness or order, and the strings may be empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chapter {
    pub number: i64,
    pub title: String,
    pub content: String,
}

impl Chapter {
    pub fn new(number: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            content: content.into(),
        }
    }
}
