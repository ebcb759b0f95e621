use serde::{Deserialize, Serialize};

/// One canonical question/answer fact. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The canonical question this entry answers.
    pub question: String,
    /// The answer returned when the entry is matched.
    pub answer: String,
}

impl CatalogEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
